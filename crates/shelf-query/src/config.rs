//! Controller configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Tuning for the query controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Debounce delay in milliseconds.
    ///
    /// Search input is published once it has been quiet this long.
    /// Additional keystrokes reset the timer.
    pub debounce_ms: u64,

    /// Records requested per page.
    pub page_size: u32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            page_size: shelf_model::DEFAULT_PAGE_SIZE,
        }
    }
}

impl ControllerConfig {
    /// Debounce delay as a duration.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Override the debounce delay.
    #[must_use]
    pub fn with_debounce_ms(mut self, debounce_ms: u64) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    /// Override the page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }
}
