//! Platform windowing and event loop utilities.
//!
//! Wraps `winit` window creation and event dispatch into a small runtime:
//! implement [`AppState`] and hand it to [`AppRuntime::configure`].

pub mod app;
pub mod state;

pub use app::*;
pub use state::*;
