//! UI components for the feature listing TUI.

mod feature_table;

pub use feature_table::{FeatureTableComponent, FeatureTableViewContext};
