//! Message types for the TUI update loop.
//!
//! Messages represent user actions decoded from key events, async command
//! results, and system events. Every state transition in the listing flows
//! through exactly one of these variants.

use http::StatusCode;

use crate::registry::models::Feature;

/// Messages for the feature listing application.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move the row cursor up one feature.
    CursorUp,
    /// Move the row cursor down one feature.
    CursorDown,
    /// Request the next page of results.
    NextPage,
    /// Request the previous page of results.
    PreviousPage,
    /// Open the detail route for the selected feature.
    OpenSelected,

    // Search
    /// Open the search input.
    SearchOpened,
    /// A character was typed into the search input.
    SearchEdited(char),
    /// The last character was removed from the search input.
    SearchErased,
    /// The search input was submitted (Enter).
    SearchSubmitted,
    /// The search input was closed without submitting.
    SearchClosed,

    // Scope tabs
    /// Switch between the My Features and All Features tabs.
    ScopeToggled,

    // Data loading
    /// Issue a fetch for the current query.
    RefreshRequested,
    /// A fetch completed; applied only when `token` is the latest issued.
    FetchComplete {
        /// Request token attached when the fetch was issued.
        token: u64,
        /// Full page contents returned by the registry.
        features: Vec<Feature>,
    },
    /// A fetch failed; handled only when `token` is the latest issued.
    FetchFailed {
        /// Request token attached when the fetch was issued.
        token: u64,
        /// Human-readable failure detail.
        message: String,
    },

    // Deletion
    /// Ask for confirmation before deleting the selected feature.
    DeleteRequested,
    /// The pending delete was confirmed.
    DeleteConfirmed,
    /// The pending delete was declined.
    DeleteDeclined,
    /// The delete call finished with a raw status, or failed in transport.
    DeleteFinished {
        /// Identifier of the feature the delete targeted.
        id: String,
        /// Raw response status, or `None` when transport failed.
        status: Option<StatusCode>,
    },

    // Application lifecycle
    /// Quit the application.
    Quit,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Dismiss the current notice or overlay.
    EscapePressed,
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for row-cursor, paging, and activation messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::NextPage
                | Self::PreviousPage
                | Self::OpenSelected
        )
    }

    /// Returns true for search-input messages.
    #[must_use]
    pub const fn is_search(&self) -> bool {
        matches!(
            self,
            Self::SearchOpened
                | Self::SearchEdited(_)
                | Self::SearchErased
                | Self::SearchSubmitted
                | Self::SearchClosed
        )
    }

    /// Returns true for fetch and delete messages.
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(
            self,
            Self::RefreshRequested
                | Self::FetchComplete { .. }
                | Self::FetchFailed { .. }
                | Self::DeleteRequested
                | Self::DeleteConfirmed
                | Self::DeleteDeclined
                | Self::DeleteFinished { .. }
        )
    }
}
