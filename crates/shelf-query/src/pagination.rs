//! Pagination state.

use std::ops::RangeInclusive;

use shelf_model::PageWindow;

/// Outcome of learning a new page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCount {
    /// The active page still exists.
    Unchanged,
    /// The active page no longer exists and was moved to the last page.
    Clamped {
        /// Page that was active before.
        from: u32,
        /// Page that is active now.
        to: u32,
    },
}

/// Tracks the current page and the last known page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    window: PageWindow,
}

impl Pagination {
    /// First page with the given page size and an unknown page count.
    pub fn new(page_size: u32) -> Self {
        Self {
            window: PageWindow::new(page_size),
        }
    }

    /// Snapshot of the window.
    #[inline]
    pub fn window(&self) -> PageWindow {
        self.window
    }

    /// Current page, starting at 1.
    #[inline]
    pub fn page(&self) -> u32 {
        self.window.page
    }

    /// Page count from the last accepted result.
    #[inline]
    pub fn total_pages(&self) -> u32 {
        self.window.total_pages
    }

    /// Page numbers the rendering surface should offer.
    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.window.total_pages
    }

    /// Move to page `n`.
    ///
    /// Returns `false` and leaves the page untouched when `n` is outside
    /// `1..=total_pages`.
    pub fn go_to(&mut self, n: u32) -> bool {
        if !self.window.contains(n) {
            return false;
        }
        self.window.page = n;
        true
    }

    /// Back to page 1.
    pub fn reset(&mut self) {
        self.window.page = 1;
    }

    /// Record the page count of an accepted result.
    ///
    /// When the active page is past the new last page it is clamped. A count of
    /// 0 leaves the page at 1.
    pub fn set_total_pages(&mut self, total_pages: u32) -> PageCount {
        self.window.total_pages = total_pages;

        let last = total_pages.max(1);
        if self.window.page > last {
            let from = self.window.page;
            self.window.page = last;
            PageCount::Clamped { from, to: last }
        } else {
            PageCount::Unchanged
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(shelf_model::DEFAULT_PAGE_SIZE)
    }
}
