//! Navigation state machine for pathsurfer.
//!
//! Owns the current directory, its listing, selection and scroll cursors, the per-directory
//! position history and the search query. Every change goes through [NavState::apply], which
//! takes a decoded [Action] and the [DirLister] to re-list directories with.
//!
//! Invariants after every transition:
//! - `entries` is sorted by name in byte order.
//! - `selected < entries.len()` when entries is non-empty, `0` otherwise.
//! - `scroll_offset <= selected <= scroll_offset + visible_height - 1` when non-empty.

use crate::app::actions::{Action, Mode};
use crate::core::fuzzy::{self, Match};
use crate::core::{DirLister, Entry, Formatter, ListError, ListErrorKind};

use log::{debug, warn};

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Rows assumed visible until the renderer reports the real pane height.
pub const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Result of applying an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    Continue,
    /// The session ended; carries the directory to hand back to the shell.
    Quit(PathBuf),
}

/// Holds the navigation, selection, filter and history state of the browser.
#[derive(Debug)]
pub struct NavState {
    current_dir: PathBuf,
    /// Hidden-filtered, sorted listing of `current_dir`.
    listing: Vec<Entry>,
    /// What is shown: `listing`, or the subset matching the query.
    entries: Vec<Entry>,
    /// Parallel to `entries` while a query filters the listing, empty otherwise.
    matches: Vec<Match>,
    selected: usize,
    scroll_offset: usize,
    visible_height: usize,
    mode: Mode,
    query: String,
    positions: HashMap<PathBuf, usize>,
    show_hidden: bool,
    last_error: Option<ListError>,
}

impl NavState {
    pub fn new(path: PathBuf, show_hidden: bool) -> Self {
        Self {
            current_dir: path,
            listing: Vec::new(),
            entries: Vec::new(),
            matches: Vec::new(),
            selected: 0,
            scroll_offset: 0,
            visible_height: DEFAULT_VISIBLE_HEIGHT,
            mode: Mode::Default,
            query: String::new(),
            positions: HashMap::new(),
            show_hidden,
            last_error: None,
        }
    }

    /// Creates the state at `path` and performs the initial listing.
    pub fn open<L: DirLister + ?Sized>(path: PathBuf, show_hidden: bool, lister: &L) -> Self {
        let mut nav = Self::new(path, show_hidden);
        nav.reload(lister);
        nav
    }

    // Getters / Accessors

    #[inline]
    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The full listing of the current directory, ignoring the query.
    #[inline]
    pub fn listing(&self) -> &[Entry] {
        &self.listing
    }

    #[inline]
    pub fn selected_idx(&self) -> usize {
        self.selected
    }

    #[inline]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    #[inline]
    pub fn visible_height(&self) -> usize {
        self.visible_height
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// The failure of the most recent listing of the current directory, if it failed.
    #[inline]
    pub fn last_error(&self) -> Option<&ListError> {
        self.last_error.as_ref()
    }

    #[inline]
    pub fn position_history(&self) -> &HashMap<PathBuf, usize> {
        &self.positions
    }

    pub fn selected_entry(&self) -> Option<&Entry> {
        self.entries.get(self.selected)
    }

    /// The fuzzy match behind the shown entry at `idx`, while a query filters the listing.
    pub fn match_at(&self, idx: usize) -> Option<&Match> {
        self.matches.get(idx)
    }

    /// Updates the number of rows the current pane can show and re-fits the scroll offset.
    pub fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height.max(1);
        self.update_scroll();
    }

    /// Applies one action. Actions that do not apply to the current mode are no-ops.
    pub fn apply<L: DirLister + ?Sized>(&mut self, action: Action, lister: &L) -> Transition {
        debug!(
            "apply {:?} in {:?} mode at {}",
            action,
            self.mode,
            self.current_dir.display()
        );

        match (self.mode, action) {
            (_, Action::Quit) => return Transition::Quit(self.current_dir.clone()),

            (Mode::Default, Action::MoveDown) => self.move_down(),
            (Mode::Default, Action::MoveUp) => self.move_up(),
            (Mode::Default, Action::EnterChild) => self.enter_child(lister),
            (Mode::Default, Action::GoToParent) => self.go_to_parent(lister),
            (Mode::Default, Action::ToggleHidden) => self.toggle_hidden(lister),
            (Mode::Default, Action::EnterSearch) => self.enter_search(),

            (Mode::Search, Action::TypeChar(c)) => self.type_char(c),
            (Mode::Search, Action::Backspace) => self.backspace(),
            (Mode::Search, Action::ConfirmSearch) => self.confirm_search(),
            (Mode::Search, Action::CancelSearch) => self.cancel_search(),
            (Mode::Search, Action::DescendMatch) => self.descend_match(lister),

            _ => {}
        }
        Transition::Continue
    }

    // Navigation functions

    /// Moves the selection down by one entry, wrapping around at the end.
    pub fn move_down(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + 1) % len;
        self.update_scroll();
    }

    /// Moves the selection up by one entry, wrapping around at the top.
    pub fn move_up(&mut self) {
        let len = self.entries.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + len - 1) % len;
        self.update_scroll();
    }

    /// Enters the selected entry if it is a directory.
    pub fn enter_child<L: DirLister + ?Sized>(&mut self, lister: &L) {
        let Some(entry) = self.selected_entry() else {
            return;
        };
        if !entry.is_dir() {
            return;
        }
        let target = self.current_dir.join(entry.name());
        self.change_dir(target, None, lister);
    }

    /// Moves to the parent directory, focusing the directory just left unless the parent
    /// has a remembered position. No-op at the filesystem root.
    pub fn go_to_parent<L: DirLister + ?Sized>(&mut self, lister: &L) {
        let Some(parent) = self
            .current_dir
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
        else {
            return;
        };
        let exited = self
            .current_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned());
        self.change_dir(parent, exited, lister);
    }

    /// Flips hidden entry visibility and re-lists in place. The selection index is clamped,
    /// not remapped to the previously selected name.
    pub fn toggle_hidden<L: DirLister + ?Sized>(&mut self, lister: &L) {
        self.show_hidden = !self.show_hidden;
        self.reload(lister);
        self.clamp_selection();
        self.update_scroll();
    }

    // Search functions

    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
        self.query.clear();
    }

    pub fn type_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    /// Removes the last query rune. No-op on an empty query.
    pub fn backspace(&mut self) {
        if self.query.pop().is_none() {
            return;
        }
        self.refilter();
    }

    /// Leaves search mode keeping the current filter; an empty query restores the full listing.
    pub fn confirm_search(&mut self) {
        if self.query.is_empty() {
            self.reset_filter();
        }
        self.mode = Mode::Default;
        self.query.clear();
    }

    /// Leaves search mode discarding the query and any filtering.
    pub fn cancel_search(&mut self) {
        self.query.clear();
        self.reset_filter();
        self.mode = Mode::Default;
    }

    /// Enters the selected directory, or the best ranked directory match when the selection
    /// is a file, and restarts the query inside it. Stays in search mode.
    pub fn descend_match<L: DirLister + ?Sized>(&mut self, lister: &L) {
        let target = match self.selected_entry() {
            Some(entry) if entry.is_dir() => Some(entry.name().to_string()),
            _ => self.best_directory_match(),
        };
        let Some(name) = target else {
            return;
        };

        if let Some(idx) = self.entries.iter().position(|e| e.name() == name) {
            self.selected = idx;
        }
        self.query.clear();
        let target = self.current_dir.join(&name);
        self.change_dir(target, None, lister);
    }

    fn best_directory_match(&self) -> Option<String> {
        let dirs: Vec<Match> = self
            .entries
            .iter()
            .zip(&self.matches)
            .filter(|(entry, _)| entry.is_dir())
            .map(|(_, m)| m.clone())
            .collect();

        fuzzy::rank(dirs)
            .into_iter()
            .next()
            .map(|m| m.candidate().to_string())
    }

    // Internals

    fn save_position(&mut self) {
        self.positions
            .insert(self.current_dir.clone(), self.selected);
    }

    /// Leaves the current directory for `path`, restoring its remembered position,
    /// else focusing `focus` by name, else the first entry.
    fn change_dir<L: DirLister + ?Sized>(
        &mut self,
        path: PathBuf,
        focus: Option<String>,
        lister: &L,
    ) {
        self.save_position();
        self.current_dir = path;
        self.reload(lister);

        self.selected = match self.positions.get(&self.current_dir) {
            Some(&idx) => idx,
            None => focus
                .and_then(|name| self.entries.iter().position(|e| e.name() == name))
                .unwrap_or(0),
        };
        // Remembered positions may be stale if the directory shrank.
        self.clamp_selection();
        self.update_scroll();
    }

    /// Re-lists the current directory and drops any filter. A failed listing leaves the
    /// directory empty and is kept in `last_error`.
    fn reload<L: DirLister + ?Sized>(&mut self, lister: &L) {
        match Formatter::new(self.show_hidden).list(lister, &self.current_dir) {
            Ok(listing) => {
                self.listing = listing;
                self.last_error = None;
            }
            Err(err) => {
                match err.kind() {
                    ListErrorKind::PermissionDenied => {
                        warn!("Permission issue while listing: {}", err)
                    }
                    _ => warn!("Couldn't read directory: {}", err),
                }
                self.listing.clear();
                self.selected = 0;
                self.scroll_offset = 0;
                self.last_error = Some(err);
            }
        }
        self.reset_filter();
    }

    fn reset_filter(&mut self) {
        self.entries = self.listing.clone();
        self.matches.clear();
        self.clamp_selection();
        self.update_scroll();
    }

    /// Recomputes the shown entries from the full listing for the current query.
    fn refilter(&mut self) {
        if self.query.is_empty() {
            self.reset_filter();
            return;
        }

        let names: Vec<&str> = self.listing.iter().map(Entry::name).collect();
        let matches = fuzzy::find(&self.query, &names);

        // Matches come back in listing order and names are unique, so a single pass projects them.
        let mut listing = self.listing.iter();
        self.entries = matches
            .iter()
            .filter_map(|m| {
                listing
                    .by_ref()
                    .find(|e| e.name() == m.candidate())
                    .cloned()
            })
            .collect();
        self.matches = matches;

        self.clamp_selection();
        self.update_scroll();
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
    }

    fn update_scroll(&mut self) {
        self.scroll_offset = calculate_scroll_offset(
            self.selected,
            self.scroll_offset,
            self.visible_height,
            self.entries.len(),
        );
    }
}

/// Fits a scroll offset so the selection stays inside a window of `height` rows.
///
/// Snaps the window to the selection when it leaves the top or bottom edge, keeps it
/// otherwise, then clamps so the window never starts past `len - height`.
pub fn calculate_scroll_offset(selected: usize, offset: usize, height: usize, len: usize) -> usize {
    let height = height.max(1);

    let offset = if selected < offset {
        selected
    } else if selected >= offset + height {
        selected + 1 - height
    } else {
        offset
    };

    offset.min(len.saturating_sub(height))
}
