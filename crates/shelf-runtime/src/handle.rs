//! Handle the rendering surface holds on to.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use shelf_client::CatalogSource;
use shelf_model::SortField;
use shelf_query::{ControllerConfig, Message, SearchController, ViewSnapshot};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::error::{Result, RuntimeError};
use crate::event_loop::EventLoop;

/// Input side and view side of a running search controller.
///
/// Dropping the handle tears the controller down: the pending debounce timer
/// and every in-flight fetch are aborted and no further snapshot is published.
#[derive(Debug)]
pub struct SearchHandle {
    tx: mpsc::UnboundedSender<Message>,
    view: watch::Receiver<ViewSnapshot>,
    /// User inputs sent and user inputs the loop has handled.
    sent: AtomicU64,
    handled: watch::Receiver<u64>,
    task: Option<JoinHandle<()>>,
}

impl SearchHandle {
    /// Start a controller on the current tokio runtime.
    ///
    /// The initial unfiltered listing is requested immediately.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn spawn<S: CatalogSource>(source: S, config: &ControllerConfig) -> Self {
        let (controller, initial) = SearchController::new(config);
        let (view_tx, view_rx) = watch::channel(controller.snapshot());
        let (tx, rx) = mpsc::unbounded_channel();
        let (handled_tx, handled_rx) = watch::channel(0);

        tracing::debug!(
            debounce_ms = config.debounce_ms,
            page_size = config.page_size,
            "starting search runtime"
        );

        let event_loop = EventLoop::new(
            controller,
            Arc::new(source),
            tx.downgrade(),
            view_tx,
            handled_tx,
        );
        let task = tokio::spawn(event_loop.run(rx, initial));

        Self {
            tx,
            view: view_rx,
            sent: AtomicU64::new(0),
            handled: handled_rx,
            task: Some(task),
        }
    }

    /// The search box text changed.
    pub fn search_input(&self, text: impl Into<String>) -> Result<()> {
        self.send(Message::SearchInput(text.into()))
    }

    /// A column header was clicked.
    pub fn sort_click(&self, field: SortField) -> Result<()> {
        self.send(Message::SortClicked(field))
    }

    /// A page button was clicked.
    pub fn page_click(&self, page: u32) -> Result<()> {
        self.send(Message::PageClicked(page))
    }

    /// Receiver that is notified whenever the view changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.view.clone()
    }

    /// The latest published view.
    pub fn snapshot(&self) -> ViewSnapshot {
        self.view.borrow().clone()
    }

    /// Wait until every input sent so far has been handled and the view is
    /// at rest, then return that view.
    ///
    /// A pending debounce counts as unsettled, as does a fetch still in
    /// flight. Inputs the controller ignores (an out-of-range page) settle
    /// as soon as they are handled.
    pub async fn settled(&self) -> Result<ViewSnapshot> {
        let sent = self.sent.load(Ordering::Acquire);
        let mut handled = self.handled.clone();
        handled
            .wait_for(|&count| count >= sent)
            .await
            .map_err(|_| RuntimeError::Closed)?;

        let mut view = self.view.clone();
        let snapshot = view
            .wait_for(ViewSnapshot::is_settled)
            .await
            .map_err(|_| RuntimeError::Closed)?
            .clone();
        Ok(snapshot)
    }

    /// Tear the controller down and wait for the event loop to exit.
    pub async fn shutdown(mut self) -> Result<()> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        // The loop may already be gone; joining reports how it ended.
        let _ = self.tx.send(Message::Teardown);
        task.await?;
        Ok(())
    }

    fn send(&self, message: Message) -> Result<()> {
        self.tx.send(message).map_err(|_| RuntimeError::Closed)?;
        self.sent.fetch_add(1, Ordering::AcqRel);
        Ok(())
    }
}

impl Drop for SearchHandle {
    fn drop(&mut self) {
        if self.task.take().is_some() {
            let _ = self.tx.send(Message::Teardown);
        }
    }
}
