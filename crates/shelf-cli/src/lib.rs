//! Library components of the `shelf` terminal front-end.

pub mod input;
pub mod logging;
pub mod render;
pub mod settings;
