//! Page window, query descriptors and fetch ids.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sort::SortSpec;

/// The current page plus the page size and the last known page count.
///
/// `page` is 1-based. `total_pages` is learned from the most recent accepted
/// result and is 0 until the first one arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Current page, starting at 1.
    pub page: u32,
    /// Number of records per page.
    pub page_size: u32,
    /// Page count reported by the last accepted result.
    pub total_pages: u32,
}

impl PageWindow {
    /// First page of an unknown result with the given page size.
    ///
    /// A page size of 0 is raised to 1.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            total_pages: 0,
        }
    }

    /// Whether `page` names an existing page.
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        page >= 1 && page <= self.total_pages
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(crate::DEFAULT_PAGE_SIZE)
    }
}

/// Immutable snapshot of every parameter needed for one catalog fetch.
///
/// Two descriptors are equal iff all fields are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QueryDescriptor {
    /// Debounced search term. Empty means unfiltered.
    pub search: String,
    /// Active sort.
    pub sort: SortSpec,
    /// Requested page, starting at 1.
    pub page: u32,
    /// Records per page.
    pub page_size: u32,
}

impl QueryDescriptor {
    /// Snapshot the given inputs.
    #[must_use]
    pub fn new(search: impl Into<String>, sort: SortSpec, window: &PageWindow) -> Self {
        Self {
            search: search.into(),
            sort,
            page: window.page,
            page_size: window.page_size,
        }
    }
}

impl fmt::Display for QueryDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "search={:?} sort={} page={} size={}",
            self.search, self.sort, self.page, self.page_size
        )
    }
}

/// Sequence number attached to each issued fetch.
///
/// Ids are handed out in increasing order, so a larger id always belongs to a
/// newer request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FetchId(pub u64);

impl FetchId {
    /// The id following this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for FetchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
