//! State types for the feature listing TUI.

mod notice;
mod search;

pub use notice::{Notice, Severity};
pub use search::SearchState;
