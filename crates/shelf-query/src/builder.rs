//! Query builder.

use shelf_model::{PageWindow, QueryDescriptor, SortSpec};

/// Compose the debounced search term, the active sort and the page window into
/// a query descriptor.
///
/// Pure: equal inputs always produce equal descriptors, which is what lets the
/// fetch coordinator recognise a query it has already issued.
pub fn build_query(search: &str, sort: SortSpec, window: &PageWindow) -> QueryDescriptor {
    QueryDescriptor::new(search, sort, window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_model::{SortField, SortOrder};

    #[test]
    fn test_deterministic() {
        let window = PageWindow::default();
        let sort = SortSpec::new(SortField::Publisher, SortOrder::Desc);
        assert_eq!(
            build_query("gibson", sort, &window),
            build_query("gibson", sort, &window)
        );
    }

    #[test]
    fn test_initial_query() {
        let query = build_query("", SortSpec::default(), &PageWindow::default());
        assert_eq!(query.search, "");
        assert_eq!(query.sort, SortSpec::new(SortField::Title, SortOrder::Asc));
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 10);
    }
}
