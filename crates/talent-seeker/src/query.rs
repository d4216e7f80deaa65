//! Query builder and executor.
//!
//! A [`Query`] is an immutable snapshot of what the user asked for. Builder
//! methods consume the query and return the next snapshot; every change other
//! than [`Query::page`] sends the query back to page 1.

use crate::filter;
use crate::ordering::{self, SortKey};
use crate::page::PAGE_SIZE;
use crate::traits::Searchable;
use crate::value::{finite_rate, parse_rate};
use crate::view::ListView;

/// Search, filter, sort and page state.
///
/// Checks combine with AND; a blank or unset filter is skipped.
///
/// # Example
///
/// ```
/// use talent_seeker::{Query, Record, SortKey};
///
/// let records = vec![
///     Record::new(1).with_name("Ann", "Lee").with_rating(4.0).with_rate(50.0),
///     Record::new(2).with_name("Bob", "Ray").with_rating(4.0).with_rate(30.0),
///     Record::new(3).with_name("Cy", "Moss").with_rating(5.0).with_rate(80.0),
/// ];
///
/// let query = Query::new()
///     .min_rate(40.0)
///     .sort(SortKey::Rating)
///     .build();
///
/// let view = query.execute(&records);
/// let names: Vec<_> = view.page().iter().map(|r| r.display_name()).collect();
/// assert_eq!(names, ["Cy Moss", "Ann Lee"]);
/// assert_eq!(view.total_pages(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    search_text: String,
    skills_filter: String,
    location_filter: String,
    min_rate: Option<f64>,
    max_rate: Option<f64>,
    availability: Option<String>,
    sort: SortKey,
    page: usize,
}

impl Default for Query {
    fn default() -> Self {
        Query {
            search_text: String::new(),
            skills_filter: String::new(),
            location_filter: String::new(),
            min_rate: None,
            max_rate: None,
            availability: None,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl Query {
    /// Creates a new empty query on page 1.
    ///
    /// An empty query matches all items and keeps their order.
    pub fn new() -> Self {
        Query::default()
    }

    fn reset_page(mut self) -> Self {
        self.page = 1;
        self
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Sets the free-text search, matched against name, title, bio and skills.
    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self.reset_page()
    }

    /// Sets the skills filter, matched against skill names only.
    pub fn skills(mut self, text: impl Into<String>) -> Self {
        self.skills_filter = text.into();
        self.reset_page()
    }

    /// Sets the location filter.
    pub fn location(mut self, text: impl Into<String>) -> Self {
        self.location_filter = text.into();
        self.reset_page()
    }

    /// Sets or clears the inclusive lower rate bound. NaN clears it.
    pub fn min_rate(mut self, rate: impl Into<Option<f64>>) -> Self {
        self.min_rate = rate.into().and_then(finite_rate);
        self.reset_page()
    }

    /// Sets or clears the inclusive upper rate bound. NaN clears it.
    pub fn max_rate(mut self, rate: impl Into<Option<f64>>) -> Self {
        self.max_rate = rate.into().and_then(finite_rate);
        self.reset_page()
    }

    /// Sets the lower rate bound from raw text; non-numeric text clears it.
    pub fn min_rate_input(self, input: &str) -> Self {
        self.min_rate(parse_rate(input))
    }

    /// Sets the upper rate bound from raw text; non-numeric text clears it.
    pub fn max_rate_input(self, input: &str) -> Self {
        self.max_rate(parse_rate(input))
    }

    /// Sets the availability filter. `"all"` and `""` clear it.
    pub fn availability(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.availability = (!value.is_empty() && value != "all").then_some(value);
        self.reset_page()
    }

    /// Clears every filter and the search text, keeping the sort key.
    pub fn clear_filters(self) -> Self {
        Query {
            sort: self.sort,
            ..Query::default()
        }
    }

    // ========================================================================
    // Ordering and paging
    // ========================================================================

    /// Sets the sort key.
    pub fn sort(mut self, key: SortKey) -> Self {
        self.sort = key;
        self.reset_page()
    }

    /// Sets the requested page; the one builder method that does not reset it.
    ///
    /// Out-of-range pages are clamped when the query is executed.
    pub fn page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }

    /// Finalizes the query.
    pub fn build(self) -> Self {
        self
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn skills_filter(&self) -> &str {
        &self.skills_filter
    }

    pub fn location_filter(&self) -> &str {
        &self.location_filter
    }

    pub fn get_min_rate(&self) -> Option<f64> {
        self.min_rate
    }

    pub fn get_max_rate(&self) -> Option<f64> {
        self.max_rate
    }

    /// Returns the availability constraint, if any.
    pub fn get_availability(&self) -> Option<&str> {
        self.availability.as_deref()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort
    }

    /// Returns the requested page (before clamping).
    pub fn current_page(&self) -> usize {
        self.page
    }

    /// Returns `true` if no filter or search text is set.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.is_empty()
            && self.skills_filter.is_empty()
            && self.location_filter.is_empty()
            && self.min_rate.is_none()
            && self.max_rate.is_none()
            && self.availability.is_none()
    }

    // ========================================================================
    // Execution
    // ========================================================================

    /// Tests if a single item matches this query's filters.
    pub fn matches<T: Searchable>(&self, item: &T) -> bool {
        filter::matches(item, self)
    }

    /// Filters a slice, returning references to matching items in input order.
    pub fn filter<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        filter::filter(items, self)
    }

    /// Filters, then orders by the query's sort key.
    pub fn sorted<'a, T: Searchable>(&self, items: &'a [T]) -> Vec<&'a T> {
        let mut results = self.filter(items);
        ordering::sort(&mut results, self.sort);
        results
    }

    /// Counts the number of matching items.
    pub fn count<T: Searchable>(&self, items: &[T]) -> usize {
        self.filter(items).len()
    }

    /// Filters, sorts and paginates with the fixed [`PAGE_SIZE`].
    pub fn execute<'a, T: Searchable>(&self, items: &'a [T]) -> ListView<'a, T> {
        self.execute_with_page_size(items, PAGE_SIZE)
    }

    /// Filters, sorts and paginates with an explicit page size.
    pub fn execute_with_page_size<'a, T: Searchable>(
        &self,
        items: &'a [T],
        page_size: usize,
    ) -> ListView<'a, T> {
        let sorted = self.sorted(items);
        tracing::trace!(
            total = items.len(),
            matched = sorted.len(),
            sort = %self.sort,
            page = self.page,
            "executed query"
        );
        ListView::new(sorted, self.page, page_size)
    }
}
