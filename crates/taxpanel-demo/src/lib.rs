//! Taxpanel Demo
//!
//! Replays YAML scenarios through the completion-of-processing panel rule
//! engine and reports the resulting declaration.

pub mod cli;
pub mod scenario;

pub use cli::*;
pub use scenario::*;
