//! Pagination window math.
//!
//! Pages are 1-based. There is always at least one page, even for an empty
//! result, and a requested page outside `1..=total_pages` is clamped.

use std::ops::Range;

use serde::Serialize;

/// Records per page.
pub const PAGE_SIZE: usize = 12;

/// Page numbers offered around the current page.
pub const PAGE_WINDOW: usize = 5;

/// Number of pages needed for `len` items, never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamps `page` into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Up to [`PAGE_WINDOW`] contiguous page numbers around `current`, which is
/// clamped into `1..=total_pages` first.
///
/// ```
/// use talent_seeker::page_numbers;
///
/// assert_eq!(page_numbers(1, 3), vec![1, 2, 3]);
/// assert_eq!(page_numbers(6, 10), vec![4, 5, 6, 7, 8]);
/// assert_eq!(page_numbers(10, 10), vec![8, 9, 10]);
/// ```
pub fn page_numbers(current: usize, total_pages: usize) -> Vec<usize> {
    let current = clamp_page(current, total_pages);
    let start = current.saturating_sub(2).max(1);
    let end = total_pages.min(start.saturating_add(PAGE_WINDOW - 1));
    (start..=end).collect()
}

/// Position of one page within a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// Effective (clamped) 1-based page number.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl PageWindow {
    /// Computes the window for `requested` page over `total_items` items.
    pub fn new(total_items: usize, requested: usize, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total_items, page_size);
        PageWindow {
            page: clamp_page(requested, total_pages),
            total_pages,
            total_items,
            page_size,
        }
    }

    /// Index range of this page into the sorted items.
    pub fn range(&self) -> Range<usize> {
        let start = ((self.page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based position of the first item shown, 0 when the page is empty.
    pub fn first_item(&self) -> usize {
        let range = self.range();
        if range.is_empty() {
            0
        } else {
            range.start + 1
        }
    }

    /// 1-based position of the last item shown, 0 when the page is empty.
    pub fn last_item(&self) -> usize {
        self.range().end
    }

    pub fn page_numbers(&self) -> Vec<usize> {
        page_numbers(self.page, self.total_pages)
    }
}

/// Slices one page out of `sorted`.
pub fn paginate<T>(sorted: &[T], page: usize, page_size: usize) -> (&[T], PageWindow) {
    let window = PageWindow::new(sorted.len(), page, page_size);
    (&sorted[window.range()], window)
}
