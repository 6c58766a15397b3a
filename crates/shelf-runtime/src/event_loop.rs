//! The task that owns the controller.
//!
//! Messages are drained one at a time. Each message runs through
//! [`SearchController::update`] to completion, the returned effects are
//! executed, and the new snapshot is published before the next message is
//! looked at. Timer and fetch tasks only ever send messages back; they never
//! touch controller state.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use shelf_client::{CatalogSource, ClientError};
use shelf_model::FetchId;
use shelf_query::{Effect, FetchError, FetchRequest, Message, SearchController, TimerToken, ViewSnapshot};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

/// Convert a client failure into what the controller records.
pub(crate) fn fetch_error(err: &ClientError) -> FetchError {
    FetchError::new(err.user_message()).with_detail(err.to_string())
}

pub(crate) struct EventLoop<S> {
    controller: SearchController,
    source: Arc<S>,
    /// Weak so that the loop alone never keeps its own channel open.
    tx: mpsc::WeakUnboundedSender<Message>,
    view: watch::Sender<ViewSnapshot>,
    /// Count of user inputs taken off the channel so far.
    handled: watch::Sender<u64>,
    timers: HashMap<TimerToken, JoinHandle<()>>,
    fetches: HashMap<FetchId, JoinHandle<()>>,
}

impl<S: CatalogSource> EventLoop<S> {
    pub(crate) fn new(
        controller: SearchController,
        source: Arc<S>,
        tx: mpsc::WeakUnboundedSender<Message>,
        view: watch::Sender<ViewSnapshot>,
        handled: watch::Sender<u64>,
    ) -> Self {
        Self {
            controller,
            source,
            tx,
            view,
            handled,
            timers: HashMap::new(),
            fetches: HashMap::new(),
        }
    }

    pub(crate) async fn run(mut self, mut rx: mpsc::UnboundedReceiver<Message>, initial: Vec<Effect>) {
        self.execute(initial);
        self.publish();

        while let Some(message) = rx.recv().await {
            let teardown = matches!(message, Message::Teardown);
            let from_user = matches!(
                message,
                Message::SearchInput(_) | Message::SortClicked(_) | Message::PageClicked(_)
            );
            self.forget_finished(&message);

            let effects = self.controller.update(message);
            self.execute(effects);
            self.publish();

            if from_user {
                self.handled.send_modify(|count| *count += 1);
            }

            if teardown {
                break;
            }
        }

        self.abort_all();
        tracing::debug!("search runtime stopped");
    }

    /// Drop the handle of a task that just reported back.
    fn forget_finished(&mut self, message: &Message) {
        match message {
            Message::DebounceElapsed(token) => {
                self.timers.remove(token);
            }
            Message::FetchCompleted { id, .. } => {
                self.fetches.remove(id);
            }
            _ => {}
        }
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::StartTimer { token, delay } => self.start_timer(token, delay),
                Effect::CancelTimer(token) => {
                    if let Some(timer) = self.timers.remove(&token) {
                        timer.abort();
                    }
                }
                Effect::Fetch(request) => self.start_fetch(request),
            }
        }
    }

    fn start_timer(&mut self, token: TimerToken, delay: Duration) {
        let Some(tx) = self.tx.upgrade() else {
            return;
        };
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Message::DebounceElapsed(token));
        });
        self.timers.insert(token, timer);
    }

    fn start_fetch(&mut self, request: FetchRequest) {
        let Some(tx) = self.tx.upgrade() else {
            return;
        };
        let source = Arc::clone(&self.source);
        let FetchRequest { id, query } = request;

        let fetch = tokio::spawn(async move {
            let result = source.search(&query).await.map_err(|err| {
                tracing::warn!(fetch = %id, retryable = err.is_retryable(), %err, "catalog fetch failed");
                fetch_error(&err)
            });
            let _ = tx.send(Message::FetchCompleted { id, result });
        });
        self.fetches.insert(id, fetch);
    }

    fn publish(&self) {
        let next = self.controller.snapshot();
        self.view.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }

    fn abort_all(&mut self) {
        let outstanding = self.timers.len() + self.fetches.len();
        for task in self.timers.drain().map(|(_, task)| task) {
            task.abort();
        }
        for task in self.fetches.drain().map(|(_, task)| task) {
            task.abort();
        }
        if outstanding > 0 {
            tracing::debug!(outstanding, "aborted outstanding tasks");
        }
    }
}
