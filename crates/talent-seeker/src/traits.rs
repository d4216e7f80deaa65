//! The accessor seam the engine is generic over.
//!
//! [`Searchable`] is implemented for [`Record`], but any listing (a
//! conversation list, an admin user table) can implement it and reuse the
//! same filter, sort and pagination code.

use std::borrow::Cow;

use crate::record::{Record, Skill};
use crate::value::Timestamp;

/// Trait for types that can be filtered and sorted by a [`Query`](crate::Query).
///
/// Only [`display_name`](Searchable::display_name) is required. Every other
/// accessor defaults to "absent", which the engine treats as the weakest
/// value: empty text, a rate of 0, the earliest date.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use talent_seeker::{Query, Searchable};
///
/// struct Conversation {
///     with: String,
///     last_message: String,
/// }
///
/// impl Searchable for Conversation {
///     fn display_name(&self) -> Cow<'_, str> {
///         Cow::Borrowed(&self.with)
///     }
///
///     fn bio(&self) -> Option<&str> {
///         Some(&self.last_message)
///     }
/// }
///
/// let inbox = vec![
///     Conversation { with: "Ann".into(), last_message: "see you at 5".into() },
///     Conversation { with: "Bob".into(), last_message: "invoice attached".into() },
/// ];
///
/// let hits = Query::new().search("invoice").filter(&inbox);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].with, "Bob");
/// ```
pub trait Searchable {
    /// Name shown for the entry and matched by free-text search.
    fn display_name(&self) -> Cow<'_, str>;

    /// Short headline matched by free-text search.
    fn title(&self) -> Option<&str> {
        None
    }

    /// Long-form text matched by free-text search.
    fn bio(&self) -> Option<&str> {
        None
    }

    /// Skills, matched by both free-text search and the skills filter.
    fn skills(&self) -> &[Skill] {
        &[]
    }

    fn location(&self) -> Option<&str> {
        None
    }

    fn hourly_rate(&self) -> Option<f64> {
        None
    }

    fn availability(&self) -> Option<&str> {
        None
    }

    fn rating(&self) -> Option<f64> {
        None
    }

    /// Creation time used by the newest-first ordering.
    fn created_at(&self) -> Option<Timestamp> {
        None
    }

    /// Flagged for the featured carousel.
    fn is_featured(&self) -> bool {
        false
    }

    /// Whether the entry has enough of a name to be shown on its own.
    fn has_full_name(&self) -> bool {
        !self.display_name().trim().is_empty()
    }
}

impl Searchable for Record {
    fn display_name(&self) -> Cow<'_, str> {
        Record::display_name(self)
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    fn skills(&self) -> &[Skill] {
        &self.skills
    }

    fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    fn hourly_rate(&self) -> Option<f64> {
        self.hourly_rate
    }

    fn availability(&self) -> Option<&str> {
        self.availability.as_deref()
    }

    fn rating(&self) -> Option<f64> {
        self.rating
    }

    fn created_at(&self) -> Option<Timestamp> {
        self.created_at.as_deref().and_then(Timestamp::parse)
    }

    fn is_featured(&self) -> bool {
        self.is_featured
    }

    fn has_full_name(&self) -> bool {
        Record::has_full_name(self)
    }
}
