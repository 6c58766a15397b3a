//! The catalog as seen by the query runtime.

use std::future::Future;

use shelf_model::{QueryDescriptor, ResultSet};

use crate::client::CatalogClient;
use crate::error::Result;

/// Anything that can answer a catalog query.
///
/// [`CatalogClient`] is the production implementation; tests substitute
/// sources with scripted latency and results.
pub trait CatalogSource: Send + Sync + 'static {
    /// Fetch the page described by `query`.
    fn search(&self, query: &QueryDescriptor) -> impl Future<Output = Result<ResultSet>> + Send;
}

impl CatalogSource for CatalogClient {
    fn search(&self, query: &QueryDescriptor) -> impl Future<Output = Result<ResultSet>> + Send {
        CatalogClient::search(self, query)
    }
}
