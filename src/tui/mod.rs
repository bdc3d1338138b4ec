//! Terminal user interface for the feature listing.
//!
//! The TUI follows the Model-View-Update (MVU) pattern:
//!
//! - **Model**: application state in [`app::FeatureListApp`]
//! - **View**: rendering in `rendering` and the table component
//! - **Update**: message-driven state transitions in `update()`
//!
//! # Modules
//!
//! - [`app`]: application model and update logic
//! - [`messages`]: message types for the update loop
//! - [`state`]: search and notice state
//! - [`components`]: table rendering
//! - [`input`]: mode-aware key-to-message mapping
//! - [`navigate`]: injected navigation capability
//!
//! # Runtime context
//!
//! Because bubbletea-rs commands are static futures, the gateway and
//! navigator are injected once through module-level storage. Call
//! [`set_runtime_context`] before starting the program; the fetch, delete,
//! and navigation helpers used by commands read from it.

use std::sync::{Arc, OnceLock};

use crate::registry::error::RegistryError;
use crate::registry::gateway::{DeleteFeatureResponse, FeatureGateway, ListFeaturesParams};
use crate::registry::models::Feature;

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod navigate;
pub mod state;

pub use app::FeatureListApp;
pub use navigate::{LogNavigator, Navigator};

/// Collaborators commands reach for while the program runs.
struct RuntimeContext {
    gateway: Arc<dyn FeatureGateway>,
    navigator: Arc<dyn Navigator>,
}

/// Global storage for the runtime context.
static RUNTIME_CONTEXT: OnceLock<RuntimeContext> = OnceLock::new();

/// Injects the gateway and navigator used by the running TUI.
///
/// Must be called before starting the bubbletea-rs program. Returns `true`
/// if the context was set, `false` if it was already set (in which case the
/// existing context is kept).
pub fn set_runtime_context(gateway: Arc<dyn FeatureGateway>, navigator: Arc<dyn Navigator>) -> bool {
    RUNTIME_CONTEXT
        .set(RuntimeContext { gateway, navigator })
        .is_ok()
}

/// Fetches one page of features through the injected gateway.
pub(crate) async fn fetch_features(
    params: &ListFeaturesParams,
) -> Result<Vec<Feature>, RegistryError> {
    let context = RUNTIME_CONTEXT
        .get()
        .ok_or_else(|| RegistryError::Configuration {
            message: "runtime context not configured".to_owned(),
        })?;
    context.gateway.list_features(params).await
}

/// Deletes a feature through the injected gateway.
pub(crate) async fn delete_feature(id: &str) -> Result<DeleteFeatureResponse, RegistryError> {
    let context = RUNTIME_CONTEXT
        .get()
        .ok_or_else(|| RegistryError::Configuration {
            message: "runtime context not configured".to_owned(),
        })?;
    context.gateway.delete_feature(id).await
}

/// Hands a route to the injected navigator. Fire-and-forget; a missing
/// context drops the route with a warning rather than failing the UI.
pub(crate) fn dispatch_navigation(route: &str) {
    match RUNTIME_CONTEXT.get() {
        Some(context) => context.navigator.navigate(route),
        None => tracing::warn!(route, "navigation dropped: runtime context not configured"),
    }
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
