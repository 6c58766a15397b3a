//! Query-state controller for the Shelf catalog browser.
//!
//! Turns raw, high-frequency user input (keystrokes, sort clicks, page clicks)
//! into a minimal, ordered sequence of catalog fetches, and makes sure a slow
//! response to an old query can never overwrite the response to a newer one.
//!
//! # Architecture
//!
//! The controller follows a message/update loop:
//!
//! - [`Message`]: every input event and every runtime completion
//! - [`SearchController::update`]: the only place state changes
//! - [`Effect`]: timers and fetches the runtime should perform
//!
//! The crate performs no I/O and owns no clock, so every transition can be
//! driven and checked synchronously. `shelf-runtime` executes the effects on
//! tokio.
//!
//! # Components
//!
//! - [`debounce`]: suppresses transient input until it is quiet
//! - [`sort`]: the sort-toggle rule
//! - [`pagination`]: page bounds, reset and clamping
//! - [`builder`]: composes the immutable query descriptor
//! - [`coordinator`]: issues fetches and guards against stale responses
//! - [`state`]: last accepted result and last error
//!
//! # Example
//!
//! ```
//! use shelf_query::{ControllerConfig, Effect, Message, SearchController};
//! use shelf_model::ResultSet;
//!
//! let (mut controller, effects) = SearchController::new(&ControllerConfig::default());
//! let Some(Effect::Fetch(request)) = effects.into_iter().next() else {
//!     unreachable!("the initial listing is always fetched");
//! };
//!
//! controller.update(Message::FetchCompleted {
//!     id: request.id,
//!     result: Ok(ResultSet::new(Vec::new(), 1)),
//! });
//! assert!(!controller.is_loading());
//! ```

pub mod builder;
pub mod config;
pub mod controller;
pub mod coordinator;
pub mod debounce;
pub mod message;
pub mod pagination;
pub mod sort;
pub mod state;
pub mod view;

pub use builder::build_query;
pub use config::ControllerConfig;
pub use controller::SearchController;
pub use coordinator::{FetchCoordinator, FetchRequest, FetchStatus, Verdict};
pub use debounce::{Debouncer, Restart, TimerToken};
pub use message::{Effect, Message};
pub use pagination::{PageCount, Pagination};
pub use sort::SortState;
pub use state::{FetchError, ListStatus, ResultState};
pub use view::ViewSnapshot;
