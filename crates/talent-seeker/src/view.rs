//! The derived view a render surface displays.

use crate::page::PageWindow;

/// Filtered, sorted records plus the current page window.
///
/// Holds references into the source collection; the collection itself is
/// never reordered.
#[derive(Debug, Clone)]
pub struct ListView<'a, T> {
    filtered: Vec<&'a T>,
    window: PageWindow,
}

impl<'a, T> ListView<'a, T> {
    pub(crate) fn new(filtered: Vec<&'a T>, page: usize, page_size: usize) -> Self {
        let window = PageWindow::new(filtered.len(), page, page_size);
        ListView { filtered, window }
    }

    /// Every record that passed the filters, in sorted order.
    pub fn filtered(&self) -> &[&'a T] {
        &self.filtered
    }

    /// Records on the current page.
    pub fn page(&self) -> &[&'a T] {
        &self.filtered[self.window.range()]
    }

    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Effective (clamped) page number.
    pub fn current_page(&self) -> usize {
        self.window.page
    }

    pub fn total_pages(&self) -> usize {
        self.window.total_pages
    }

    pub fn total_items(&self) -> usize {
        self.filtered.len()
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        self.window.page_numbers()
    }

    pub fn into_filtered(self) -> Vec<&'a T> {
        self.filtered
    }
}
