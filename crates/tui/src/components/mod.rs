//! UI building blocks shared by the rendering pipeline.

/// Status and prompt rows at the bottom of the surface.
pub mod prompt;
/// Candidate row construction and per-character highlighting.
pub mod rows;

pub use prompt::{prompt_line, status_line};
pub use rows::candidate_line;
