//! View rendering for the feature listing.

use crate::registry::query::FeatureScope;
use crate::tui::components::FeatureTableViewContext;

use super::{FeatureListApp, InputMode};

impl FeatureListApp {
    /// Renders the title line and the scope tab bar.
    pub(super) fn render_header(&self) -> String {
        let my = tab_label(FeatureScope::My, self.query.scope);
        let all = tab_label(FeatureScope::All, self.query.scope);
        let mut output = String::from("freda — feature registry\n");
        output.push_str(&format!("  {my}    {all}\n"));
        output
    }

    /// Renders the search input line.
    pub(super) fn render_search_bar(&self) -> String {
        let marker = if self.mode == InputMode::Search {
            "search> "
        } else {
            "search: "
        };
        format!("  {marker}{}\n", self.search.pending())
    }

    /// Renders the feature table for the current page.
    pub(super) fn render_table(&self) -> String {
        let ctx = FeatureTableViewContext {
            rows: self.rows.as_deref(),
            cursor_position: self.cursor_position,
            loading: self.loading,
        };
        self.table.view(&ctx)
    }

    /// Renders the delete confirmation prompt.
    pub(super) fn render_confirm_prompt(&self) -> String {
        self.pending_delete.as_ref().map_or_else(String::new, |f| {
            format!("  Delete feature {} ({})? [y/n]\n", f.name, f.id)
        })
    }

    /// Renders the status line: page, keyword, notice, and loading marker.
    pub(super) fn render_status_bar(&self) -> String {
        let mut status = format!("page {}  {}", self.query.page, self.query.scope.label());
        if !self.query.keyword.is_empty() {
            status.push_str(&format!("  keyword \"{}\"", self.query.keyword));
        }
        if self.loading {
            status.push_str("  loading...");
        }
        if let Some(notice) = &self.notice {
            status.push_str(&format!("  [{}] {}", notice.prefix(), notice.message));
        }
        status.push_str("  (? for help)");
        let width = usize::from(self.terminal_width());
        let mut bar = String::with_capacity(width.saturating_add(status.len()));
        bar.push_str(&"-".repeat(width.min(status.len().saturating_add(2))));
        bar.push('\n');
        bar.push_str(&status);
        bar
    }

    /// Renders the help overlay listing key bindings.
    pub(super) fn render_help_overlay(&self) -> String {
        let rule = "-".repeat(usize::from(self.terminal_width()).min(40));
        format!(
            "freda — key bindings\n{rule}\n\
             j/k, down/up    move selection\n\
             n/p, right/left next / previous page\n\
             /               edit search keyword (Enter submits, Esc closes)\n\
             t, Tab          switch My Features / All Features\n\
             Enter, e        open the selected feature\n\
             d               delete the selected feature (asks first)\n\
             r               refresh the current page\n\
             Esc             dismiss notice or overlay\n\
             q               quit\n"
        )
    }

    /// Current terminal width in columns.
    const fn terminal_width(&self) -> u16 {
        self.width
    }
}

/// Formats one tab label, marking the active scope.
fn tab_label(tab: FeatureScope, active: FeatureScope) -> String {
    if tab == active {
        format!("[{}]", tab.label())
    } else {
        format!(" {} ", tab.label())
    }
}
