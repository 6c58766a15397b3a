//! Data model types for the Shelf book catalog browser.
//!
//! These types describe what flows between the query controller, the remote
//! catalog endpoint and the rendering surface:
//!
//! - [`sort`]: Sortable columns and sort direction
//! - [`query`]: Page window, immutable query descriptors and fetch ids
//! - [`record`]: Book records and the result page returned by the catalog
//!
//! # Example
//!
//! ```
//! use shelf_model::{PageWindow, QueryDescriptor, SortField, SortSpec};
//!
//! let window = PageWindow::new(10);
//! let query = QueryDescriptor::new("", SortSpec::default(), &window);
//!
//! assert_eq!(query.sort.field, SortField::Title);
//! assert_eq!(query.page, 1);
//! ```

pub mod error;
pub mod query;
pub mod record;
pub mod sort;

pub use error::{ModelError, Result};
pub use query::{FetchId, PageWindow, QueryDescriptor};
pub use record::{Record, ResultSet};
pub use sort::{SortField, SortOrder, SortSpec};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;
