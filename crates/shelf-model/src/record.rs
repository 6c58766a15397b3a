//! Book records and result pages.

use serde::{Deserialize, Serialize};

/// A book in the catalog. Read-only from the controller's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Catalog identifier.
    pub id: i64,
    /// Book title.
    pub title: String,
    /// Author name.
    pub author: String,
    /// Publisher name.
    pub publisher: String,
    /// Publication year.
    pub year: i32,
    /// Whether the book can currently be borrowed.
    pub available: bool,
}

/// One page of catalog results.
///
/// Replaced wholesale on every accepted fetch, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResultSet {
    /// Records on this page, in the order the catalog returned them.
    pub items: Vec<Record>,
    /// Total number of pages for the query.
    pub total_pages: u32,
}

impl ResultSet {
    /// Create a result page.
    #[must_use]
    pub fn new(items: Vec<Record>, total_pages: u32) -> Self {
        Self { items, total_pages }
    }

    /// Whether the page holds no records.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of records on the page.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
