//! Cursor, paging, and activation handlers.

use bubbletea_rs::Cmd;

use crate::registry::query::DEFAULT_PAGE;
use crate::tui::messages::AppMsg;

use super::FeatureListApp;

impl FeatureListApp {
    /// Dispatches navigation messages to their handlers.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::CursorUp => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            AppMsg::CursorDown => {
                let max_index = self.row_count().saturating_sub(1);
                if self.cursor_position < max_index {
                    self.cursor_position = self.cursor_position.saturating_add(1);
                }
                None
            }
            AppMsg::NextPage => {
                self.query.next_page();
                self.issue_refresh()
            }
            AppMsg::PreviousPage => self.handle_previous_page(),
            AppMsg::OpenSelected => self.handle_open_selected(),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
                None
            }
        }
    }

    /// Moves back one page. Already being on the first page issues no fetch
    /// at all; the query would be identical to the one displayed.
    fn handle_previous_page(&mut self) -> Option<Cmd> {
        if self.query.page == DEFAULT_PAGE {
            return None;
        }
        self.query.previous_page();
        self.issue_refresh()
    }

    /// Hands the selected feature's detail route to the injected navigator.
    ///
    /// Row actions are suppressed while a request is outstanding, and the
    /// result of the hand-off is not inspected.
    fn handle_open_selected(&mut self) -> Option<Cmd> {
        if self.loading {
            return None;
        }
        if let Some(feature) = self.selected_feature() {
            crate::tui::dispatch_navigation(&feature.detail_route());
        }
        None
    }
}
