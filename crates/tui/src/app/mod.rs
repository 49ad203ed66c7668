//! Core application state and behavior for the interactive picker.
//!
//! The [`App`] type aggregates selection state, glyph configuration, and
//! styling. Supporting modules partition the implementation into focused
//! pieces: actions (key dispatch) and rendering.

mod actions;
mod render;
mod state;

pub use state::App;
