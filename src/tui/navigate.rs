//! Injected navigation capability.
//!
//! The listing hands an opaque route string to a [`Navigator`] and does not
//! inspect any result. Injecting the capability keeps the controller free of
//! ambient global coupling and lets tests assert on dispatched routes.

use tracing::info;

/// Receives opaque route strings when the user activates a feature.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Transfers control to the given route. Fire-and-forget.
    fn navigate(&self, route: &str);
}

/// Navigator that records routes through tracing.
///
/// Detail rendering is a separate surface; this implementation makes the
/// hand-off observable without owning any screen of its own.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNavigator;

impl Navigator for LogNavigator {
    fn navigate(&self, route: &str) {
        info!(route, "navigation requested");
    }
}
