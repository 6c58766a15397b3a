//! Catalog client against a local HTTP server.

use std::collections::HashMap;
use std::net::SocketAddr;

use axum::Json;
use axum::Router;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use serde_json::{Value, json};
use shelf_client::{CatalogClient, CatalogSource, ClientConfig, ClientError, StaticToken};
use shelf_model::{PageWindow, QueryDescriptor, SortField, SortOrder, SortSpec};

async fn serve(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

fn client_for(addr: SocketAddr) -> CatalogClient {
    CatalogClient::new(&ClientConfig::with_base_url(format!("http://{addr}"))).expect("client")
}

fn query(search: &str, page: u32) -> QueryDescriptor {
    let window = PageWindow {
        page,
        page_size: 10,
        total_pages: 3,
    };
    QueryDescriptor::new(search, SortSpec::new(SortField::Author, SortOrder::Desc), &window)
}

/// Echoes the query string back in the first record's title.
async fn echo(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let mut keys: Vec<_> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    keys.sort();
    Json(json!({
        "content": [
            { "id": 1, "title": keys.join("&"), "author": "a", "publisher": "p", "year": 2001, "available": true },
            { "id": "broken" },
            { "id": 2, "title": "Second", "author": "b", "publisher": "q", "year": 1999, "available": false }
        ],
        "totalPages": 3
    }))
}

#[tokio::test]
async fn test_search_decodes_page_and_sends_params() {
    let addr = serve(Router::new().route("/search", get(echo))).await;
    let client = client_for(addr);

    let page = client.search(&query("dune", 2)).await.expect("search");

    assert_eq!(page.total_pages, 3);
    assert_eq!(page.len(), 2, "malformed element is skipped");
    assert_eq!(
        page.items[0].title,
        "page=2&search=dune&size=10&sortField=author&sortOrder=desc"
    );
    assert_eq!(page.items[1].title, "Second");
    assert!(!page.items[1].available);
}

#[tokio::test]
async fn test_search_through_source_trait() {
    async fn fetch(source: &impl CatalogSource) -> usize {
        source.search(&query("", 1)).await.expect("search").len()
    }

    let addr = serve(Router::new().route("/search", get(echo))).await;
    assert_eq!(fetch(&client_for(addr)).await, 2);
}

#[tokio::test]
async fn test_error_status_is_an_error() {
    let app = Router::new().route(
        "/search",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
    );
    let addr = serve(app).await;

    let err = client_for(addr).search(&query("", 1)).await.unwrap_err();

    assert_eq!(
        err,
        ClientError::Status {
            status: 503,
            body: "down for maintenance".to_string(),
        }
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_not_found_is_not_retryable() {
    let addr = serve(Router::new()).await;

    let err = client_for(addr).search(&query("", 1)).await.unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 404, .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_non_json_body_is_empty_result() {
    let app = Router::new().route("/search", get(|| async { "<html>not json</html>" }));
    let addr = serve(app).await;

    let page = client_for(addr).search(&query("", 1)).await.expect("search");

    assert!(page.is_empty());
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_bearer_token_is_forwarded() {
    let app = Router::new().route(
        "/search",
        get(|headers: HeaderMap| async move {
            let auth = headers
                .get("authorization")
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            Json(json!({
                "content": [{ "id": 1, "title": auth, "author": "", "publisher": "", "year": 0, "available": true }],
                "totalPages": 1
            }))
        }),
    );
    let addr = serve(app).await;
    let client = client_for(addr).with_credentials(StaticToken::new("s3cret"));

    let page = client.search(&query("", 1)).await.expect("search");

    assert_eq!(page.items[0].title, "Bearer s3cret");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = client_for(addr).search(&query("", 1)).await.unwrap_err();

    assert!(matches!(err, ClientError::Network(_)), "got {err:?}");
    assert!(err.is_retryable());
}
