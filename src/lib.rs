//! Freda library crate providing a terminal client for a feature registry.
//!
//! The library wraps the registry's HTTP API behind a trait-based gateway,
//! loads layered configuration, and drives an MVU terminal UI that lists,
//! searches, and deletes feature records.

pub mod config;
pub mod registry;
pub mod tui;

pub use config::FredaConfig;
pub use registry::{
    DeleteFeatureResponse, Feature, FeatureGateway, FeatureQuery, FeatureScope,
    HttpFeatureGateway, ListFeaturesParams, RegistryError,
};
pub use tui::{FeatureListApp, LogNavigator, Navigator};
