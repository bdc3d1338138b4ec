//! Pending-keyword state for the search input.
//!
//! Edits accumulate in `pending` without triggering any fetch; only an
//! explicit submit hands the keyword to the controller. Closing the input
//! keeps the pending text so reopening resumes where the user left off.

/// Keyword being edited in the search input.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Keyword as currently typed; not yet part of any issued query.
    pending: String,
}

impl SearchState {
    /// Creates an empty search state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pending: String::new(),
        }
    }

    /// Returns the keyword as currently typed.
    #[must_use]
    pub fn pending(&self) -> &str {
        &self.pending
    }

    /// Appends a typed character.
    pub fn push(&mut self, ch: char) {
        self.pending.push(ch);
    }

    /// Removes the last typed character, if any.
    pub fn backspace(&mut self) {
        let _removed = self.pending.pop();
    }

    /// Takes the pending keyword for submission, leaving a copy in place so
    /// the input still displays what was searched for.
    #[must_use]
    pub fn submitted(&self) -> String {
        self.pending.clone()
    }
}
