//! Remote catalog access for Shelf.
//!
//! This crate talks to the catalog service over HTTP:
//!
//! - [`CatalogClient`]: `GET <search_path>?search=&sortField=&sortOrder=&page=&size=`
//! - [`decode`]: lenient decoding so malformed responses degrade to empty pages
//! - [`CredentialProvider`]: optional bearer token for each request
//! - [`AdminCommand`]: the admin command-to-endpoint table
//!
//! The query runtime depends only on the [`CatalogSource`] trait, so tests can
//! swap the HTTP client for scripted sources.
//!
//! # Example
//!
//! ```no_run
//! use shelf_client::{CatalogClient, ClientConfig};
//! use shelf_model::{PageWindow, QueryDescriptor, SortSpec};
//!
//! async fn first_page() -> shelf_client::Result<()> {
//!     let client = CatalogClient::new(&ClientConfig::default())?;
//!     let query = QueryDescriptor::new("", SortSpec::default(), &PageWindow::default());
//!
//!     let page = client.search(&query).await?;
//!     println!("{} books, {} pages", page.len(), page.total_pages);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod admin;
pub mod client;
pub mod config;
pub mod credentials;
pub mod decode;
pub mod error;
pub mod source;

pub use admin::{AdminCommand, Endpoint, Method};
pub use client::{CatalogClient, search_params};
pub use config::ClientConfig;
pub use credentials::{CredentialProvider, EnvToken, StaticToken};
pub use decode::{decode_search_page, decode_search_value};
pub use error::{ClientError, Result};
pub use source::CatalogSource;
