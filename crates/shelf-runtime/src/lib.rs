//! Tokio driver for the Shelf query controller.
//!
//! [`SearchHandle::spawn`] moves a [`SearchController`](shelf_query::SearchController)
//! into its own task and returns the handle a rendering surface needs:
//! input methods on one side, a `watch` receiver of
//! [`ViewSnapshot`](shelf_query::ViewSnapshot)s on the other.
//!
//! ```no_run
//! use shelf_client::{CatalogClient, ClientConfig};
//! use shelf_query::ControllerConfig;
//! use shelf_runtime::SearchHandle;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::new(&ClientConfig::default())?;
//! let handle = SearchHandle::spawn(client, &ControllerConfig::default());
//!
//! let mut view = handle.subscribe();
//! handle.search_input("earthsea")?;
//! view.wait_for(|snapshot| snapshot.search == "earthsea" && !snapshot.loading)
//!     .await?;
//!
//! handle.shutdown().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod error;
mod event_loop;
pub mod handle;

pub use error::{Result, RuntimeError};
pub use handle::SearchHandle;
