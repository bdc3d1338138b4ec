//! Input handling for the feature listing TUI.
//!
//! Key-to-message mapping is mode-aware: the search input and the delete
//! confirmation prompt capture keys that otherwise drive the list.

use crossterm::event::KeyCode;

use super::app::InputMode;
use super::messages::AppMsg;

/// Maps a key event to an application message for the given input mode.
///
/// Returns `None` for unrecognised key events, allowing them to be ignored.
#[must_use]
#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg, mode: InputMode) -> Option<AppMsg> {
    match mode {
        InputMode::Browse => map_browse_key(key.key),
        InputMode::Search => map_search_key(key.key),
        InputMode::ConfirmDelete => map_confirm_key(key.key),
    }
}

fn map_browse_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::Char('n') | KeyCode::Right => Some(AppMsg::NextPage),
        KeyCode::Char('p') | KeyCode::Left => Some(AppMsg::PreviousPage),
        KeyCode::Char('/') => Some(AppMsg::SearchOpened),
        KeyCode::Tab | KeyCode::Char('t') => Some(AppMsg::ScopeToggled),
        KeyCode::Enter | KeyCode::Char('e') => Some(AppMsg::OpenSelected),
        KeyCode::Char('d') => Some(AppMsg::DeleteRequested),
        KeyCode::Char('r') => Some(AppMsg::RefreshRequested),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        _ => None,
    }
}

fn map_search_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Enter => Some(AppMsg::SearchSubmitted),
        KeyCode::Esc => Some(AppMsg::SearchClosed),
        KeyCode::Backspace => Some(AppMsg::SearchErased),
        KeyCode::Char(ch) => Some(AppMsg::SearchEdited(ch)),
        _ => None,
    }
}

fn map_confirm_key(key: KeyCode) -> Option<AppMsg> {
    match key {
        KeyCode::Char('y') | KeyCode::Enter => Some(AppMsg::DeleteConfirmed),
        KeyCode::Char('n') | KeyCode::Esc => Some(AppMsg::DeleteDeclined),
        _ => None,
    }
}
