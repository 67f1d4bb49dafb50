//! Actions and modes driving the navigation state machine.
//!
//! Key codes never reach [crate::app::NavState]: the keymap decodes them into an [Action]
//! once, at the input boundary.

/// The two modes of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing the directory tree.
    #[default]
    Default,
    /// Typing a fuzzy filter query.
    Search,
}

/// A discrete user input, already decoded from a key event.
///
/// Actions that do not apply to the current [Mode] are no-ops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveDown,
    MoveUp,
    EnterChild,
    GoToParent,
    ToggleHidden,
    EnterSearch,
    TypeChar(char),
    Backspace,
    ConfirmSearch,
    CancelSearch,
    /// Enter the selected (or best ranked) directory match and keep searching inside it.
    DescendMatch,
    Quit,
}
