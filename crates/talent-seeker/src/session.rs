//! Session state owned by a render surface.
//!
//! A [`SearchSession`] holds the fetched collection, the featured sample and
//! the current [`Query`]. It enforces the page rules (filter changes go back
//! to page 1, the page is clamped whenever the filtered set changes) and
//! sequences fetches so a slow, older response cannot overwrite a newer one.

use std::mem;

use parking_lot::Mutex;

use crate::error::FetchError;
use crate::featured::select_featured;
use crate::ordering::SortKey;
use crate::page::{clamp_page, total_pages, PAGE_SIZE};
use crate::query::Query;
use crate::source::{FetchOptions, RecordSource};
use crate::traits::Searchable;
use crate::view::ListView;

/// Identifies one issued fetch. Later tickets compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(u64);

/// What [`SearchSession::complete_fetch`] did with a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The response replaced the collection; carries the record count.
    Applied(usize),
    /// The fetch failed; the collection is now empty.
    Failed,
    /// A newer fetch was issued meanwhile; the response was dropped.
    Stale,
}

/// Collection, featured sample and query for one listing surface.
#[derive(Debug, Clone)]
pub struct SearchSession<T> {
    records: Vec<T>,
    featured: Vec<T>,
    query: Query,
    issued: u64,
    featured_issued: u64,
}

impl<T> Default for SearchSession<T> {
    fn default() -> Self {
        SearchSession {
            records: Vec::new(),
            featured: Vec::new(),
            query: Query::default(),
            issued: 0,
            featured_issued: 0,
        }
    }
}

impl<T> SearchSession<T> {
    /// Creates an empty session on page 1.
    pub fn new() -> Self {
        SearchSession::default()
    }

    /// The collection as fetched, never reordered.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    /// Issues a ticket for a collection fetch about to start.
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.issued += 1;
        FetchTicket(self.issued)
    }

    /// Issues a ticket for a featured fetch about to start.
    pub fn begin_featured_fetch(&mut self) -> FetchTicket {
        self.featured_issued += 1;
        FetchTicket(self.featured_issued)
    }

    /// Returns `true` if `ticket` is the most recently issued collection fetch.
    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.0 == self.issued
    }

    /// Applies a featured response if it is still the latest.
    pub fn complete_featured_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<T>, FetchError>,
    ) -> FetchOutcome {
        if ticket.0 != self.featured_issued {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.featured_issued,
                "discarding stale featured response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(records) => {
                let count = records.len();
                self.featured = records;
                FetchOutcome::Applied(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "featured fetch failed, showing none");
                self.featured.clear();
                FetchOutcome::Failed
            }
        }
    }
}

impl<T: Searchable> SearchSession<T> {
    /// Creates a session over an already fetched collection.
    pub fn with_records(records: Vec<T>) -> Self {
        SearchSession {
            records,
            ..SearchSession::default()
        }
    }

    /// Derives the current filtered, sorted and paginated view.
    pub fn view(&self) -> ListView<'_, T> {
        self.query.execute(&self.records)
    }

    /// Featured entries with full names, in fetched order.
    pub fn featured(&self) -> Vec<&T> {
        select_featured(&self.featured)
    }

    // ========================================================================
    // Query mutations
    // ========================================================================

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update("search_text", |q| q.search(text));
    }

    pub fn set_skills_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update("skills_filter", |q| q.skills(text));
    }

    pub fn set_location_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.update("location_filter", |q| q.location(text));
    }

    pub fn set_min_rate(&mut self, rate: Option<f64>) {
        self.update("min_rate", |q| q.min_rate(rate));
    }

    pub fn set_max_rate(&mut self, rate: Option<f64>) {
        self.update("max_rate", |q| q.max_rate(rate));
    }

    /// Sets the lower rate bound from the text of a rate field.
    pub fn set_min_rate_input(&mut self, input: &str) {
        self.update("min_rate", |q| q.min_rate_input(input));
    }

    /// Sets the upper rate bound from the text of a rate field.
    pub fn set_max_rate_input(&mut self, input: &str) {
        self.update("max_rate", |q| q.max_rate_input(input));
    }

    pub fn set_availability(&mut self, value: impl Into<String>) {
        let value = value.into();
        self.update("availability", |q| q.availability(value));
    }

    pub fn set_sort(&mut self, key: SortKey) {
        self.update("sort", |q| q.sort(key));
    }

    pub fn clear_filters(&mut self) {
        self.update("clear_filters", Query::clear_filters);
    }

    /// Moves to `page`, clamped to the pages the filtered set has.
    pub fn set_page(&mut self, page: usize) {
        self.update("page", |q| q.page(page));
    }

    /// Replaces the whole query, e.g. when restoring a saved search.
    pub fn set_query(&mut self, query: Query) {
        self.update("query", |_| query);
    }

    fn update(&mut self, field: &str, change: impl FnOnce(Query) -> Query) {
        let query = mem::take(&mut self.query);
        self.query = change(query);
        self.clamp_page();
        tracing::debug!(field, page = self.query.current_page(), "query changed");
    }

    fn clamp_page(&mut self) {
        let total = total_pages(self.query.count(&self.records), PAGE_SIZE);
        let page = clamp_page(self.query.current_page(), total);
        if page != self.query.current_page() {
            let query = mem::take(&mut self.query);
            self.query = query.page(page);
        }
    }

    // ========================================================================
    // Collection updates
    // ========================================================================

    /// Replaces the collection. The page is kept but clamped.
    pub fn replace_records(&mut self, records: Vec<T>) {
        self.records = records;
        self.clamp_page();
    }

    /// Applies a collection response if it is still the latest.
    ///
    /// A failure empties the collection; it is logged, never returned.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Vec<T>, FetchError>,
    ) -> FetchOutcome {
        if !self.is_latest(ticket) {
            tracing::debug!(
                ticket = ticket.0,
                latest = self.issued,
                "discarding stale records response"
            );
            return FetchOutcome::Stale;
        }

        match result {
            Ok(records) => {
                let count = records.len();
                self.replace_records(records);
                tracing::debug!(count, "applied records response");
                FetchOutcome::Applied(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "records fetch failed, showing empty list");
                self.replace_records(Vec::new());
                FetchOutcome::Failed
            }
        }
    }
}

/// Fetches the collection into a shared session.
///
/// The lock is held only to issue the ticket and to apply the response, so
/// several refreshes may be in flight; only the latest one lands.
pub async fn refresh<S>(
    session: &Mutex<SearchSession<S::Record>>,
    source: &S,
    options: &FetchOptions,
) -> FetchOutcome
where
    S: RecordSource + ?Sized,
    S::Record: Searchable,
{
    let ticket = session.lock().begin_fetch();
    let result = source.fetch_records(options).await;
    session.lock().complete_fetch(ticket, result)
}

/// Fetches the featured sample into a shared session.
pub async fn refresh_featured<S>(
    session: &Mutex<SearchSession<S::Record>>,
    source: &S,
    limit: usize,
) -> FetchOutcome
where
    S: RecordSource + ?Sized,
    S::Record: Searchable,
{
    let ticket = session.lock().begin_featured_fetch();
    let result = source.fetch_featured(limit).await;
    session.lock().complete_featured_fetch(ticket, result)
}
