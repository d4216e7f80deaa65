//! Talent Seeker - client-side filtering, sorting and pagination for listings.
//!
//! The whole collection is fetched once and held in memory. Every change to
//! the [`Query`] re-derives a [`ListView`] synchronously:
//!
//! - **filter**: free-text search, skills, location, rate bounds, availability
//! - **sort**: featured (upstream order), rating, rate low/high, newest
//! - **paginate**: fixed pages of [`PAGE_SIZE`] with a clamped page number
//!
//! # Quick Start
//!
//! ```rust
//! use talent_seeker::{Query, Record, SortKey};
//!
//! let records = vec![
//!     Record::new(1).with_name("Ann", "Lee").with_rating(4.0).with_rate(50.0),
//!     Record::new(2).with_name("Bob", "Ray").with_rating(4.0).with_rate(30.0),
//!     Record::new(3).with_name("Cy", "Moss").with_rating(5.0).with_rate(80.0),
//! ];
//!
//! let view = Query::new().sort(SortKey::RateLow).execute(&records);
//! let ids: Vec<String> = view.page().iter().map(|r| r.id.to_string()).collect();
//! assert_eq!(ids, ["2", "1", "3"]);
//! ```
//!
//! # Query Semantics
//!
//! ```text
//! keep = search ∧ skills ∧ location ∧ min_rate ∧ max_rate ∧ availability
//! ```
//!
//! Each check is skipped when its filter is blank or unset. Missing record
//! fields never fail a computation; they read as the weakest value (empty
//! text, rate 0, earliest date) except under a rate bound, which a record
//! without a rate never satisfies.
//!
//! # Sessions
//!
//! [`SearchSession`] is the state a listing surface keeps: the collection,
//! the featured sample and the query. It resets to page 1 on every change
//! except a page move, clamps the page whenever the filtered set changes, and
//! drops fetch responses that were overtaken by a newer fetch.

mod error;
mod featured;
mod filter;
mod ordering;
mod page;
mod query;
mod record;
mod session;
mod source;
mod traits;
mod value;
mod view;

// Re-export public API
pub use error::{FetchError, Result, SeekerError};
pub use featured::select_featured;
pub use filter::{contains_ci, filter, matches};
pub use ordering::{compare_numbers, compare_timestamps, sort, Dir, SortKey};
pub use page::{clamp_page, page_numbers, paginate, total_pages, PageWindow, PAGE_SIZE, PAGE_WINDOW};
pub use query::Query;
pub use record::{Record, RecordId, Skill};
pub use session::{refresh, refresh_featured, FetchOutcome, FetchTicket, SearchSession};
pub use source::{decode_records, FetchOptions, JsonFileSource, MemorySource, RecordPayload, RecordSource};
pub use traits::Searchable;
pub use value::{finite_rate, parse_rate, Timestamp};
pub use view::ListView;
