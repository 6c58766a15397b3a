//! Sort-toggle state.

use shelf_model::{SortField, SortOrder, SortSpec};

/// Tracks the active sort column and applies the toggle rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    spec: SortSpec,
}

impl SortState {
    /// Start from a specific sort.
    pub fn new(spec: SortSpec) -> Self {
        Self { spec }
    }

    /// The active sort.
    #[inline]
    pub fn spec(&self) -> SortSpec {
        self.spec
    }

    /// Apply a click on a column header.
    ///
    /// Clicking the active column flips its direction. Clicking any other
    /// column makes it active in ascending order.
    pub fn click(&mut self, field: SortField) -> SortSpec {
        self.spec = if self.spec.field == field {
            SortSpec::new(field, self.spec.order.flipped())
        } else {
            SortSpec::new(field, SortOrder::Asc)
        };
        self.spec
    }
}
