//! Debounced input.
//!
//! The debouncer never owns a clock. Every accepted value hands back a
//! [`TimerToken`] and the caller arranges for [`Debouncer::fire`] to be called
//! with that token once the delay has passed. Only the token of the most
//! recent value publishes; a fire for any older token is ignored, so a timer
//! that was already queued when it got superseded can never leak a stale
//! value.

use std::fmt;
use std::time::Duration;

/// Identifies one debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerToken(pub u64);

impl fmt::Display for TimerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer-{}", self.0)
    }
}

/// Timer work requested by [`Debouncer::push`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Restart {
    /// Timer superseded by this value, if one was still pending.
    pub cancelled: Option<TimerToken>,
    /// Timer to start.
    pub token: TimerToken,
    /// How long the new timer should wait.
    pub delay: Duration,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    token: TimerToken,
    value: T,
}

/// Suppresses bursts of input until it has been quiet for `delay`.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<Pending<T>>,
    next_token: u64,
    disposed: bool,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiet period.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
            next_token: 0,
            disposed: false,
        }
    }

    /// Quiet period before a value is published.
    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether a value is waiting for its timer.
    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Accept a new value, superseding any pending one.
    ///
    /// Returns `None` once disposed.
    pub fn push(&mut self, value: T) -> Option<Restart> {
        if self.disposed {
            return None;
        }

        self.next_token += 1;
        let token = TimerToken(self.next_token);
        let cancelled = self.pending.replace(Pending { token, value }).map(|p| p.token);

        Some(Restart {
            cancelled,
            token,
            delay: self.delay,
        })
    }

    /// A timer elapsed. Publishes the pending value if `token` is still current.
    pub fn fire(&mut self, token: TimerToken) -> Option<T> {
        match &self.pending {
            Some(pending) if pending.token == token && !self.disposed => {
                self.pending.take().map(|p| p.value)
            }
            _ => None,
        }
    }

    /// Drop the pending value without publishing it.
    pub fn cancel(&mut self) -> Option<TimerToken> {
        self.pending.take().map(|p| p.token)
    }

    /// Cancel the pending value and refuse all further input.
    pub fn dispose(&mut self) -> Option<TimerToken> {
        self.disposed = true;
        self.cancel()
    }
}
