//! Catalog client for the search endpoint.

use std::sync::Arc;

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use shelf_model::{QueryDescriptor, ResultSet};

use crate::config::ClientConfig;
use crate::credentials::CredentialProvider;
use crate::decode::decode_search_page;
use crate::error::{ClientError, Result};

/// User agent string for catalog requests.
const USER_AGENT_VALUE: &str = concat!("shelf/", env!("CARGO_PKG_VERSION"));

/// Query parameters for one search request, in wire order.
///
/// `search`, `sortField`, `sortOrder`, `page` (1-based) and `size`.
pub fn search_params(query: &QueryDescriptor) -> [(&'static str, String); 5] {
    [
        ("search", query.search.clone()),
        ("sortField", query.sort.field.as_str().to_string()),
        ("sortOrder", query.sort.order.as_str().to_string()),
        ("page", query.page.to_string()),
        ("size", query.page_size.to_string()),
    ]
}

/// HTTP client for the catalog search endpoint.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    search_url: String,
    credentials: Option<Arc<dyn CredentialProvider>>,
}

impl CatalogClient {
    /// Creates a client for the configured catalog.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            search_url: config.search_url(),
            credentials: None,
        })
    }

    /// Attach a bearer token provider.
    #[must_use]
    pub fn with_credentials(mut self, provider: impl CredentialProvider + 'static) -> Self {
        self.credentials = Some(Arc::new(provider));
        self
    }

    /// Full URL of the search endpoint.
    pub fn search_url(&self) -> &str {
        &self.search_url
    }

    /// Fetches one page of search results.
    ///
    /// Non-success statuses and transport failures are errors. A successful
    /// response with an unexpected shape is decoded leniently instead.
    pub async fn search(&self, query: &QueryDescriptor) -> Result<ResultSet> {
        tracing::debug!(url = %self.search_url, %query, "fetching catalog page");

        let mut request = self.http.get(&self.search_url).query(&search_params(query));
        if let Some(token) = self.authorization()? {
            request = request.header(AUTHORIZATION, token);
        }

        let response = request.send().await?;
        self.handle_response(response).await
    }

    fn authorization(&self) -> Result<Option<HeaderValue>> {
        let Some(token) = self.credentials.as_ref().and_then(|c| c.bearer_token()) else {
            return Ok(None);
        };

        let mut value = HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
            ClientError::Credentials("token contains characters not allowed in a header".into())
        })?;
        value.set_sensitive(true);
        Ok(Some(value))
    }

    /// Handles the HTTP response, checking the status and decoding the body.
    async fn handle_response(&self, response: reqwest::Response) -> Result<ResultSet> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.bytes().await?;
        Ok(decode_search_page(&body))
    }
}
