//! Result and error state.

use serde::Serialize;
use shelf_model::ResultSet;
use thiserror::Error;

/// A failed fetch as the rendering surface sees it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    /// Message for the error banner.
    pub message: String,
    /// Technical detail for logs.
    pub detail: Option<String>,
}

impl FetchError {
    /// An error with only a user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    /// Attach technical detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// What the list area should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    /// Nothing has resolved yet.
    Loading,
    /// Records are available.
    Ready,
    /// The last accepted result had no records.
    Empty,
    /// Fetching failed and no result was ever received.
    NoData,
}

/// The last accepted result and the last error.
#[derive(Debug, Clone, Default)]
pub struct ResultState {
    results: Option<ResultSet>,
    error: Option<FetchError>,
}

impl ResultState {
    /// Last accepted result, if any.
    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    /// Last error, if the most recent accepted fetch failed.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Replace the result wholesale and clear the error.
    pub fn accept(&mut self, results: ResultSet) {
        self.results = Some(results);
        self.error = None;
    }

    /// Record a failure. Previously accepted results stay visible.
    pub fn fail(&mut self, error: FetchError) {
        self.error = Some(error);
    }

    /// Status of the list area.
    pub fn status(&self) -> ListStatus {
        match (&self.results, &self.error) {
            (Some(results), _) if results.is_empty() => ListStatus::Empty,
            (Some(_), _) => ListStatus::Ready,
            (None, Some(_)) => ListStatus::NoData,
            (None, None) => ListStatus::Loading,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelf_model::Record;

    fn page() -> ResultSet {
        ResultSet::new(
            vec![Record {
                id: 1,
                title: "Kindred".to_string(),
                author: "Octavia E. Butler".to_string(),
                publisher: "Doubleday".to_string(),
                year: 1979,
                available: true,
            }],
            1,
        )
    }

    #[test]
    fn test_initial_status() {
        assert_eq!(ResultState::default().status(), ListStatus::Loading);
    }

    #[test]
    fn test_failure_before_any_result_is_no_data() {
        let mut state = ResultState::default();
        state.fail(FetchError::new("offline"));
        assert_eq!(state.status(), ListStatus::NoData);
    }

    #[test]
    fn test_failure_keeps_results() {
        let mut state = ResultState::default();
        state.accept(page());
        state.fail(FetchError::new("offline"));

        assert_eq!(state.status(), ListStatus::Ready);
        assert_eq!(state.results(), Some(&page()));
        assert_eq!(state.error().map(|e| e.message.as_str()), Some("offline"));
    }

    #[test]
    fn test_accept_clears_error() {
        let mut state = ResultState::default();
        state.fail(FetchError::new("offline"));
        state.accept(ResultSet::default());

        assert!(state.error().is_none());
        assert_eq!(state.status(), ListStatus::Empty);
    }
}
