//! Key decoding for pathsurfer.
//!
//! Turns crossterm key events into [Action]s. The bindings are fixed: the keymap is the
//! only place that knows about key codes.

use crate::app::actions::{Action, Mode};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Decodes a key event in the context of the current mode.
///
/// Returns `None` for keys without a binding and for key releases.
pub fn decode(key: KeyEvent, mode: Mode) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    // AltGr arrives as CONTROL | ALT on Windows and still composes printable characters.
    let alt_gr = key.modifiers.contains(KeyModifiers::CONTROL | KeyModifiers::ALT);
    if key.modifiers.contains(KeyModifiers::CONTROL) && !(alt_gr && mode == Mode::Search) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match mode {
        Mode::Default => decode_default(key.code),
        Mode::Search => decode_search(key.code),
    }
}

fn decode_default(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('h') | KeyCode::Left => Action::GoToParent,
        KeyCode::Char('l') | KeyCode::Right => Action::EnterChild,
        KeyCode::Char('.') => Action::ToggleHidden,
        KeyCode::Char('/') => Action::EnterSearch,
        KeyCode::Char('q') => Action::Quit,
        _ => return None,
    };
    Some(action)
}

fn decode_search(code: KeyCode) -> Option<Action> {
    let action = match code {
        KeyCode::Char(c) if !c.is_control() => Action::TypeChar(c),
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Enter => Action::ConfirmSearch,
        KeyCode::Esc => Action::CancelSearch,
        KeyCode::Tab => Action::DescendMatch,
        _ => return None,
    };
    Some(action)
}

/// One-line key help shown in the status line.
pub const HELP_LINE: &str =
    "(j/k: down/up) (l: enter) (h: parent) (.: hidden) (/: search) (q: quit)";

/// Key help shown while searching.
pub const SEARCH_HELP_LINE: &str = "(enter: keep filter) (esc: cancel) (tab: descend)";
