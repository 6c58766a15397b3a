//! Event loop scenarios on a paused clock.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shelf_client::{CatalogSource, ClientError};
use shelf_model::{QueryDescriptor, Record, ResultSet, SortField, SortOrder};
use shelf_query::{ControllerConfig, ListStatus};
use shelf_runtime::SearchHandle;

type Respond = dyn Fn(&QueryDescriptor) -> (Duration, Result<ResultSet, ClientError>) + Send + Sync;

/// Catalog whose latency and answer are chosen per query.
#[derive(Clone)]
struct ScriptedSource {
    calls: Arc<Mutex<Vec<QueryDescriptor>>>,
    respond: Arc<Respond>,
}

impl ScriptedSource {
    fn new(
        respond: impl Fn(&QueryDescriptor) -> (Duration, Result<ResultSet, ClientError>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            respond: Arc::new(respond),
        }
    }

    fn searches(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|q| q.search.clone()).collect()
    }
}

impl CatalogSource for ScriptedSource {
    fn search(
        &self,
        query: &QueryDescriptor,
    ) -> impl Future<Output = shelf_client::Result<ResultSet>> + Send {
        self.calls.lock().unwrap().push(query.clone());
        let (latency, outcome) = (self.respond)(query);
        async move {
            tokio::time::sleep(latency).await;
            outcome
        }
    }
}

/// One record per page whose title names the query that produced it.
fn page_for(query: &QueryDescriptor, total_pages: u32) -> ResultSet {
    let record = Record {
        id: i64::from(query.page),
        title: format!("{}#{}", query.search, query.page),
        author: "Author".to_string(),
        publisher: "Publisher".to_string(),
        year: 2000,
        available: true,
    };
    ResultSet::new(vec![record], total_pages)
}

fn titles(items: &[Record]) -> Vec<&str> {
    items.iter().map(|r| r.title.as_str()).collect()
}

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[tokio::test(start_paused = true)]
async fn test_initial_listing() {
    let source = ScriptedSource::new(|q| (ms(20), Ok(page_for(q, 2))));
    let handle = SearchHandle::spawn(source.clone(), &ControllerConfig::default());

    assert!(handle.snapshot().loading);

    let mut view = handle.subscribe();
    let snapshot = view.wait_for(|s| !s.loading).await.unwrap().clone();

    assert_eq!(source.searches(), vec![String::new()]);
    let first = source.calls.lock().unwrap()[0].clone();
    assert_eq!(first.sort.field, SortField::Title);
    assert_eq!(first.sort.order, SortOrder::Asc);
    assert_eq!(first.page, 1);

    assert_eq!(snapshot.status, ListStatus::Ready);
    assert_eq!(titles(&snapshot.items), vec!["#1"]);
    assert_eq!(snapshot.total_pages, 2);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_typing_burst_fetches_once() {
    let source = ScriptedSource::new(|q| (ms(10), Ok(page_for(q, 1))));
    let handle = SearchHandle::spawn(source.clone(), &ControllerConfig::default());
    let mut view = handle.subscribe();
    view.wait_for(|s| !s.loading).await.unwrap();

    handle.search_input("abc").unwrap();
    tokio::time::sleep(ms(100)).await;
    handle.search_input("abcd").unwrap();

    let snapshot = view
        .wait_for(|s| s.search == "abcd" && !s.loading)
        .await
        .unwrap()
        .clone();
    tokio::time::sleep(ms(1_000)).await;

    assert_eq!(source.searches(), vec!["", "abcd"]);
    assert_eq!(titles(&snapshot.items), vec!["abcd#1"]);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_slow_old_response_does_not_overwrite_newer() {
    let source = ScriptedSource::new(|q| {
        let latency = if q.search == "slow" { ms(500) } else { ms(50) };
        (latency, Ok(page_for(q, 1)))
    });
    let handle = SearchHandle::spawn(source.clone(), &ControllerConfig::default());
    let mut view = handle.subscribe();
    view.wait_for(|s| !s.loading).await.unwrap();

    // "slow" settles after 300ms and takes 500ms to answer.
    handle.search_input("slow").unwrap();
    tokio::time::sleep(ms(350)).await;
    // "fast" settles 350ms later and answers before "slow" does.
    handle.search_input("fast").unwrap();

    view.wait_for(|s| s.search == "fast" && !s.loading)
        .await
        .unwrap();
    tokio::time::sleep(ms(1_000)).await;

    assert_eq!(source.searches(), vec!["", "slow", "fast"]);
    let snapshot = handle.snapshot();
    assert_eq!(snapshot.search, "fast");
    assert_eq!(titles(&snapshot.items), vec!["fast#1"]);
    assert!(!snapshot.loading);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_failed_page_keeps_previous_results() {
    let source = ScriptedSource::new(|q| {
        if q.page == 2 {
            let err = ClientError::Status {
                status: 500,
                body: String::new(),
            };
            (ms(10), Err(err))
        } else {
            (ms(10), Ok(page_for(q, 3)))
        }
    });
    let handle = SearchHandle::spawn(source.clone(), &ControllerConfig::default());
    let mut view = handle.subscribe();
    view.wait_for(|s| !s.loading).await.unwrap();

    handle.page_click(2).unwrap();
    let snapshot = view.wait_for(|s| s.error.is_some()).await.unwrap().clone();

    assert_eq!(
        snapshot.error.as_deref(),
        Some("The catalog is having trouble right now. Please try again later.")
    );
    assert_eq!(titles(&snapshot.items), vec!["#1"]);
    assert_eq!(snapshot.page, 2);
    assert_eq!(snapshot.page_numbers(), 1..=3);
    assert_eq!(snapshot.status, ListStatus::Ready);
    assert!(!snapshot.loading);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_settled_waits_for_queued_input() {
    let source = ScriptedSource::new(|q| (ms(40), Ok(page_for(q, 2))));
    let handle = SearchHandle::spawn(source.clone(), &ControllerConfig::default());

    // Sent while the initial listing is still loading and before the loop
    // has looked at either of them.
    handle.search_input("dune").unwrap();
    handle.sort_click(SortField::Title).unwrap();

    let snapshot = handle.settled().await.unwrap();

    assert_eq!(snapshot.search, "dune");
    assert_eq!(snapshot.sort.order, SortOrder::Desc);
    assert_eq!(titles(&snapshot.items), vec!["dune#1"]);
    assert_eq!(source.searches().last().map(String::as_str), Some("dune"));

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_settled_after_ignored_page_click() {
    let source = ScriptedSource::new(|q| (ms(10), Ok(page_for(q, 2))));
    let handle = SearchHandle::spawn(source.clone(), &ControllerConfig::default());
    handle.settled().await.unwrap();

    handle.page_click(9).unwrap();
    let snapshot = handle.settled().await.unwrap();

    assert_eq!(snapshot.page, 1);
    assert_eq!(source.searches(), vec![String::new()]);

    handle.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_cancels_pending_search() {
    let source = ScriptedSource::new(|q| (ms(10), Ok(page_for(q, 1))));
    let handle = SearchHandle::spawn(source.clone(), &ControllerConfig::default());
    let mut view = handle.subscribe();
    view.wait_for(|s| !s.loading).await.unwrap();

    handle.search_input("never sent").unwrap();
    handle.shutdown().await.unwrap();
    tokio::time::sleep(ms(1_000)).await;

    assert_eq!(source.searches(), vec![String::new()]);
}

#[tokio::test(start_paused = true)]
async fn test_dropping_handle_stops_publishing() {
    let source = ScriptedSource::new(|q| (ms(10), Ok(page_for(q, 1))));
    let handle = SearchHandle::spawn(source, &ControllerConfig::default());
    let mut view = handle.subscribe();
    view.wait_for(|s| !s.loading).await.unwrap();

    drop(handle);

    // The sender lives in the loop; once the loop exits the channel closes.
    while view.changed().await.is_ok() {}
}
