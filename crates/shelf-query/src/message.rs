//! Messages into the controller and effects out of it.

use std::time::Duration;

use shelf_model::{FetchId, ResultSet, SortField};

use crate::coordinator::FetchRequest;
use crate::debounce::TimerToken;
use crate::state::FetchError;

/// Every event the controller reacts to.
///
/// Messages are processed one at a time, in arrival order, and each runs to
/// completion before the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // =========================================================================
    // User input
    // =========================================================================
    /// The search box text changed.
    SearchInput(String),

    /// A column header was clicked.
    SortClicked(SortField),

    /// A page button was clicked.
    PageClicked(u32),

    // =========================================================================
    // Runtime completions
    // =========================================================================
    /// A debounce timer elapsed.
    DebounceElapsed(TimerToken),

    /// A catalog fetch resolved.
    FetchCompleted {
        /// Id the fetch was issued with.
        id: FetchId,
        /// What the catalog returned.
        result: Result<ResultSet, FetchError>,
    },

    // =========================================================================
    // Lifecycle
    // =========================================================================
    /// The surface is going away.
    Teardown,
}

/// Work the controller asks its runtime to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send [`Message::DebounceElapsed`] with `token` after `delay`.
    StartTimer {
        /// Token to send back.
        token: TimerToken,
        /// How long to wait.
        delay: Duration,
    },

    /// A timer was superseded; it may be aborted.
    CancelTimer(TimerToken),

    /// Perform a catalog fetch and send [`Message::FetchCompleted`] back.
    Fetch(FetchRequest),
}
