//! Interactive terminal front-end for the `fzpick` picker.
//!
//! This crate contains the full widget: the aggregate [`App`] state, key
//! dispatch, the bottom-up rendering pipeline, the pluggable key-event
//! sources, and the [`Picker`] builder that brackets a terminal session
//! around the interaction loop.

mod app;
mod builder;
pub mod components;
mod config;
pub mod input;
mod runtime;
pub mod style;

pub use app::App;
pub use builder::Picker;
pub use config::UiConfig;
pub use fzpick_core::PickOutcome;
pub use input::{CrosstermEvents, EventSource, InertEvents, ScriptedEvents};
pub use runtime::{POLL_INTERVAL, run};
pub use style::{StyleConfig, Theme, default_theme};
