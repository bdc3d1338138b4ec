//! Query state for paginated feature listings.
//!
//! A `FeatureQuery` fully determines the expected result set of a listing
//! request: page, fixed page size, keyword, and the scope tab. There is no
//! hidden state beyond these fields.

/// Fixed number of features requested per page.
pub const PAGE_SIZE: u8 = 10;

/// First page of any listing.
pub const DEFAULT_PAGE: u32 = 1;

/// Ownership scope selected by the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeatureScope {
    /// Features owned by the current user.
    #[default]
    My,
    /// All features in the registry.
    All,
}

impl FeatureScope {
    /// Returns the tab label shown in the UI.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::My => "My Features",
            Self::All => "All Features",
        }
    }

    /// Returns the other scope, for tab toggling.
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::My => Self::All,
            Self::All => Self::My,
        }
    }
}

/// The authoritative listing query owned by the list-state controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureQuery {
    /// Current page number (1-based).
    pub page: u32,
    /// Search keyword sent to the registry; possibly empty.
    pub keyword: String,
    /// Scope tab. Not currently threaded into the outbound call (see the
    /// refresh handler), but tracked so the tab bar renders truthfully.
    pub scope: FeatureScope,
}

impl Default for FeatureQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            keyword: String::new(),
            scope: FeatureScope::My,
        }
    }
}

impl FeatureQuery {
    /// Moves to the next page.
    pub const fn next_page(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Moves to the previous page, never going below the first.
    pub const fn previous_page(&mut self) {
        if self.page > DEFAULT_PAGE {
            self.page -= 1;
        }
    }

    /// Commits a submitted keyword, resetting pagination to the first page.
    pub fn submit_keyword(&mut self, keyword: String) {
        self.page = DEFAULT_PAGE;
        self.keyword = keyword;
    }
}
