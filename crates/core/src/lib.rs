//! Ranking and selection state for the `fzpick` picker.
//!
//! This crate is the UI-free half of the widget: scoring candidates against
//! a query, deciding which entries are displayed, and keeping the cursor
//! valid while the query is edited. The terminal front-end lives in
//! `fzpick-tui`.

pub mod matcher;
pub mod outcome;
pub mod selection;

pub use matcher::{RankedEntry, SCORE_CUTOFF, SCORE_MAX, rank, similarity};
pub use outcome::PickOutcome;
pub use selection::{Selection, permitted_char};
