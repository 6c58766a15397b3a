//! What the rendering surface consumes.

use std::ops::RangeInclusive;

use serde::Serialize;
use shelf_model::{Record, SortSpec};

use crate::state::ListStatus;

/// Everything a rendering surface needs to draw the catalog view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSnapshot {
    /// Raw search box text.
    pub input: String,
    /// Debounced search term the results belong to.
    pub search: String,
    /// Active sort, for direction indicators.
    pub sort: SortSpec,
    /// Active page.
    pub page: u32,
    /// Page count from the last accepted result.
    pub total_pages: u32,
    /// Records of the last accepted result.
    pub items: Vec<Record>,
    /// Error banner text.
    pub error: Option<String>,
    /// Whether the current fetch is still running.
    pub loading: bool,
    /// What the list area should show.
    pub status: ListStatus,
}

impl ViewSnapshot {
    /// Page buttons to render.
    pub fn page_numbers(&self) -> RangeInclusive<u32> {
        1..=self.total_pages
    }

    /// Whether the typed text has been searched and no fetch is running.
    pub fn is_settled(&self) -> bool {
        self.input == self.search && !self.loading
    }
}
