//! Main TUI application model implementing the MVU pattern.
//!
//! This module provides the list-state controller for the feature listing:
//! it owns the authoritative query, reconciles user intent into fetch
//! requests, and keeps the displayed table consistent with the latest
//! issued request while requests are in flight.
//!
//! # Module structure
//!
//! - `data_handlers`: refresh/delete commands and completion handling
//! - `navigation`: cursor, paging, and detail-route activation
//! - `rendering`: view rendering methods for terminal output

use std::any::Any;

use bubbletea_rs::{Cmd, Model};

use crate::registry::models::Feature;
use crate::registry::query::FeatureQuery;

use super::components::FeatureTableComponent;
use super::input::map_key_to_message;
use super::messages::AppMsg;
use super::state::{Notice, SearchState};

mod data_handlers;
mod navigation;
mod rendering;

/// Which surface currently captures key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Keys drive the list.
    #[default]
    Browse,
    /// Keys edit the search keyword.
    Search,
    /// Keys answer the delete confirmation prompt.
    ConfirmDelete,
}

/// Application model for the feature listing TUI.
#[derive(Debug)]
pub struct FeatureListApp {
    /// The authoritative listing query. Every refresh maps exactly this
    /// state to one outbound call.
    pub(crate) query: FeatureQuery,
    /// Rows produced by the most recently applied fetch; `None` before the
    /// first load completes.
    pub(crate) rows: Option<Vec<Feature>>,
    /// Whether a fetch or delete is outstanding.
    pub(crate) loading: bool,
    /// Monotonically increasing token attached to each issued fetch.
    /// Completions carrying an older token are discarded.
    pub(crate) request_seq: u64,
    /// Search input state (pending keyword, not yet submitted).
    pub(crate) search: SearchState,
    /// Current input mode.
    pub(crate) mode: InputMode,
    /// Most recent notice shown on the status line.
    pub(crate) notice: Option<Notice>,
    /// Feature awaiting delete confirmation.
    pub(crate) pending_delete: Option<Feature>,
    /// Cursor position (0-indexed) within the displayed page.
    pub(crate) cursor_position: usize,
    /// Whether the help overlay is visible.
    pub(crate) show_help: bool,
    /// Terminal width in columns.
    width: u16,
    /// Table component.
    table: FeatureTableComponent,
}

impl Default for FeatureListApp {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureListApp {
    /// Creates the initial model: first page, My scope, empty keyword,
    /// nothing loaded yet.
    #[must_use]
    pub fn new() -> Self {
        Self {
            query: FeatureQuery::default(),
            rows: None,
            loading: false,
            request_seq: 0,
            search: SearchState::new(),
            mode: InputMode::Browse,
            notice: None,
            pending_delete: None,
            cursor_position: 0,
            show_help: false,
            width: 80,
            table: FeatureTableComponent::new(),
        }
    }

    /// Returns the authoritative listing query.
    #[must_use]
    pub const fn query(&self) -> &FeatureQuery {
        &self.query
    }

    /// Returns true while a fetch or delete is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns the rows of the displayed page; `None` before the first load.
    #[must_use]
    pub fn rows(&self) -> Option<&[Feature]> {
        self.rows.as_deref()
    }

    /// Returns the most recent notice, if one is showing.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns the current input mode.
    #[must_use]
    pub const fn mode(&self) -> InputMode {
        self.mode
    }

    /// Returns the token of the most recently issued fetch.
    ///
    /// Completions are applied only when they carry this token.
    #[must_use]
    pub const fn latest_request_token(&self) -> u64 {
        self.request_seq
    }

    /// Returns the feature currently under the cursor, if any.
    #[must_use]
    pub fn selected_feature(&self) -> Option<&Feature> {
        self.rows
            .as_deref()
            .and_then(|rows| rows.get(self.cursor_position))
    }

    /// Number of rows on the displayed page.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.as_deref().map_or(0, <[Feature]>::len)
    }

    /// Clamps the cursor to the displayed page.
    pub(crate) fn clamp_cursor(&mut self) {
        let count = self.row_count();
        if count == 0 {
            self.cursor_position = 0;
        } else if self.cursor_position >= count {
            self.cursor_position = count.saturating_sub(1);
        }
    }

    /// Handles a message and updates state accordingly.
    ///
    /// This is the core update function. It delegates to specialised
    /// handlers per message category to keep cyclomatic complexity low.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_search() {
            return self.handle_search_msg(msg);
        }
        if msg.is_data() {
            return self.handle_data_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches search-input messages.
    fn handle_search_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::SearchOpened => {
                self.mode = InputMode::Search;
                None
            }
            AppMsg::SearchEdited(ch) => {
                // Pending only; no fetch until submission.
                self.search.push(*ch);
                None
            }
            AppMsg::SearchErased => {
                self.search.backspace();
                None
            }
            AppMsg::SearchSubmitted => {
                self.mode = InputMode::Browse;
                // Submitting a search always resets pagination.
                self.query.submit_keyword(self.search.submitted());
                self.issue_refresh()
            }
            AppMsg::SearchClosed => {
                // Keep the pending keyword; it was never submitted.
                self.mode = InputMode::Browse;
                None
            }
            _ => {
                debug_assert!(false, "non-search message routed to handle_search_msg");
                None
            }
        }
    }

    /// Dispatches lifecycle, scope, and window messages.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::ScopeToggled => self.handle_scope_toggled(),
            AppMsg::EscapePressed => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.notice = None;
                }
                None
            }
            AppMsg::WindowResized { width, .. } => {
                self.width = *width;
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    /// Switches between the My Features and All Features tabs and refreshes.
    ///
    /// Keyword and page are deliberately not reset, and the outbound query
    /// does not encode the scope (see `issue_refresh`), matching the
    /// registry UI this replaces.
    fn handle_scope_toggled(&mut self) -> Option<Cmd> {
        self.query.scope = self.query.scope.toggled();
        self.issue_refresh()
    }
}

impl Model for FeatureListApp {
    fn init() -> (Self, Option<Cmd>) {
        // Mount triggers the first refresh through the normal message path.
        let cmd: Cmd =
            Box::pin(async { Some(Box::new(AppMsg::RefreshRequested) as Box<dyn Any + Send>) });
        (Self::new(), Some(cmd))
    }

    fn update(&mut self, msg: Box<dyn Any + Send>) -> Option<Cmd> {
        if let Some(app_msg) = msg.downcast_ref::<AppMsg>() {
            return self.handle_message(app_msg);
        }

        if let Some(key_msg) = msg.downcast_ref::<bubbletea_rs::event::KeyMsg>() {
            let mapped = map_key_to_message(key_msg, self.mode);
            if let Some(app_msg) = mapped {
                return self.handle_message(&app_msg);
            }
        }

        if let Some(size_msg) = msg.downcast_ref::<bubbletea_rs::event::WindowSizeMsg>() {
            let resize_msg = AppMsg::WindowResized {
                width: size_msg.width,
                height: size_msg.height,
            };
            return self.handle_message(&resize_msg);
        }

        None
    }

    fn view(&self) -> String {
        if self.show_help {
            return self.render_help_overlay();
        }

        let mut output = String::new();
        output.push_str(&self.render_header());
        output.push_str(&self.render_search_bar());
        output.push('\n');
        output.push_str(&self.render_table());
        if self.mode == InputMode::ConfirmDelete {
            output.push_str(&self.render_confirm_prompt());
        }
        output.push('\n');
        output.push_str(&self.render_status_bar());
        output
    }
}
