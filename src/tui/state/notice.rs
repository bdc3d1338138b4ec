//! Status-line notices surfaced to the user.
//!
//! Notices are fire-and-forget: the controller records the most recent one
//! and the status line renders it until it is replaced or dismissed.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// An operation completed successfully.
    Success,
    /// An operation failed.
    Error,
}

/// A human-readable notification with a severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// How the notice should be presented.
    pub severity: Severity,
    /// Message shown on the status line.
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Returns the status-line prefix for this notice's severity.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self.severity {
            Severity::Success => "ok",
            Severity::Error => "error",
        }
    }
}
