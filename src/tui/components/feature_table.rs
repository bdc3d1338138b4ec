//! Feature table component.
//!
//! Renders the fetched page as three columns: name, qualified name, and an
//! action affordance on the selected row. Rendered order is exactly the
//! order returned by the fetch; no client-side sorting or filtering.

use unicode_width::UnicodeWidthChar;

use crate::registry::models::Feature;

/// Default column width for the name cell.
const NAME_WIDTH: usize = 24;

/// Default column width for the qualified name cell.
const QUALIFIED_NAME_WIDTH: usize = 40;

/// Action hint shown on the selected row when actions are available.
const ACTION_HINT: &str = "[enter] open  [d] delete";

/// Context for rendering the feature table.
///
/// Bundles borrowed state so rendering allocates only the output string.
#[derive(Debug, Clone)]
pub struct FeatureTableViewContext<'a> {
    /// Rows fetched for the current query; `None` before the first load.
    pub rows: Option<&'a [Feature]>,
    /// Cursor position (0-indexed) within the rows.
    pub cursor_position: usize,
    /// Whether a fetch is outstanding. Greys the table and suppresses the
    /// action affordance.
    pub loading: bool,
}

/// Component for displaying one page of features.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeatureTableComponent;

impl FeatureTableComponent {
    /// Creates a new feature table component.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Renders the table as a string.
    #[must_use]
    pub fn view(&self, ctx: &FeatureTableViewContext<'_>) -> String {
        let Some(rows) = ctx.rows else {
            return "  Loading features...\n".to_owned();
        };
        if rows.is_empty() {
            return "  No features match the current query.\n".to_owned();
        }

        let mut output = String::new();
        output.push_str(&format!(
            "  {} {}\n",
            pad_cell("Name", NAME_WIDTH),
            pad_cell("Qualified Name", QUALIFIED_NAME_WIDTH),
        ));

        for (index, feature) in rows.iter().enumerate() {
            let is_selected = index == ctx.cursor_position && !ctx.loading;
            let prefix = if is_selected { ">" } else { " " };
            output.push_str(&Self::format_row(feature, prefix, is_selected));
            output.push('\n');
        }

        if ctx.loading {
            output.push_str("  (refreshing...)\n");
        }

        output
    }

    /// Formats a single feature row. The action hint renders only on the
    /// selected row while no fetch is outstanding.
    fn format_row(feature: &Feature, prefix: &str, show_actions: bool) -> String {
        let name = pad_cell(&feature.name, NAME_WIDTH);
        let qualified = pad_cell(&feature.qualified_name, QUALIFIED_NAME_WIDTH);
        if show_actions {
            format!("{prefix} {name} {qualified} {ACTION_HINT}")
        } else {
            format!("{prefix} {name} {qualified}")
        }
    }
}

/// Truncates or pads a cell to the given display width.
fn pad_cell(text: &str, width: usize) -> String {
    let mut cell = String::new();
    let mut used = 0_usize;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used.saturating_add(ch_width) > width {
            break;
        }
        cell.push(ch);
        used = used.saturating_add(ch_width);
    }
    while used < width {
        cell.push(' ');
        used = used.saturating_add(1);
    }
    cell
}
