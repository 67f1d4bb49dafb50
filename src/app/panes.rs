//! Derived parent / current / preview listings for the three-pane view.
//!
//! Pure projections of a [NavState]: recomputed on demand for every frame, never stored.

use crate::app::nav::{NavState, calculate_scroll_offset};
use crate::core::{DirLister, Entry, Formatter, ListError};

use std::path::{Path, PathBuf};

/// One pane worth of entries plus the row to highlight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    path: PathBuf,
    entries: Vec<Entry>,
    selected: Option<usize>,
    scroll_offset: usize,
    error: Option<ListError>,
}

impl Pane {
    fn listed<L: DirLister + ?Sized>(lister: &L, path: &Path, show_hidden: bool) -> Self {
        let (entries, error) = match Formatter::new(show_hidden).list(lister, path) {
            Ok(entries) => (entries, None),
            Err(err) => (Vec::new(), Some(err)),
        };
        Self {
            path: path.to_path_buf(),
            entries,
            selected: None,
            scroll_offset: 0,
            error,
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    #[inline]
    pub fn selected_idx(&self) -> Option<usize> {
        self.selected
    }

    #[inline]
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    #[inline]
    pub fn error(&self) -> Option<&ListError> {
        self.error.as_ref()
    }
}

/// The three listings a renderer paints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panes {
    /// Listing of the parent directory with the current directory highlighted. `None` at the root.
    pub parent: Option<Pane>,
    pub current: Pane,
    /// Listing of the selected entry when it is a directory.
    pub preview: Option<Pane>,
}

impl NavState {
    /// Projects the parent, current and preview listings for a pane of `height` rows.
    pub fn panes<L: DirLister + ?Sized>(&self, lister: &L, height: usize) -> Panes {
        Panes {
            parent: self.parent_pane(lister, height),
            current: Pane {
                path: self.current_dir().to_path_buf(),
                entries: self.entries().to_vec(),
                selected: self.selected_entry().map(|_| self.selected_idx()),
                scroll_offset: self.scroll_offset(),
                error: self.last_error().cloned(),
            },
            preview: self.preview_pane(lister),
        }
    }

    fn parent_pane<L: DirLister + ?Sized>(&self, lister: &L, height: usize) -> Option<Pane> {
        let current = self.current_dir();
        let parent = current.parent().filter(|p| !p.as_os_str().is_empty())?;
        let name = current.file_name()?.to_string_lossy();

        let mut pane = Pane::listed(lister, parent, self.show_hidden());
        pane.selected = pane.entries.iter().position(|e| e.name() == name);
        if let Some(idx) = pane.selected {
            pane.scroll_offset = calculate_scroll_offset(idx, 0, height, pane.entries.len());
        }
        Some(pane)
    }

    fn preview_pane<L: DirLister + ?Sized>(&self, lister: &L) -> Option<Pane> {
        let entry = self.selected_entry().filter(|e| e.is_dir())?;
        let path = self.current_dir().join(entry.name());
        Some(Pane::listed(lister, &path, self.show_hidden()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::Action;
    use crate::core::ListErrorKind;
    use crate::test_support::{MemLister, entries};

    fn tree() -> MemLister {
        MemLister::new()
            .with_dir("/", entries(&["srv/", "usr/"]))
            .with_dir("/usr", entries(&["bin/", "lib/", "local/", "share/", ".hidden/"]))
            .with_dir("/usr/local", entries(&["bin/", "etc/", "readme"]))
            .with_dir("/usr/local/bin", entries(&["tool", ".rc"]))
    }

    #[test]
    fn parent_highlights_current_directory() {
        let lister = tree();
        let nav = NavState::open(PathBuf::from("/usr/local"), false, &lister);

        let panes = nav.panes(&lister, 10);
        let parent = panes.parent.expect("parent pane");

        assert_eq!(parent.path(), Path::new("/usr"));
        assert_eq!(parent.entries().len(), 4);
        assert_eq!(parent.selected_idx(), Some(2));
    }

    #[test]
    fn parent_scrolls_to_keep_current_visible() {
        let lister = tree();
        let nav = NavState::open(PathBuf::from("/usr/local"), false, &lister);

        let parent = nav.panes(&lister, 2).parent.expect("parent pane");
        assert_eq!(parent.scroll_offset(), 1);
    }

    #[test]
    fn root_has_no_parent_pane() {
        let lister = tree();
        let nav = NavState::open(PathBuf::from("/"), false, &lister);
        assert!(nav.panes(&lister, 10).parent.is_none());
    }

    #[test]
    fn preview_lists_selected_directory() {
        let lister = tree();
        let nav = NavState::open(PathBuf::from("/usr/local"), false, &lister);

        let panes = nav.panes(&lister, 10);
        let preview = panes.preview.expect("preview pane");

        assert_eq!(preview.path(), Path::new("/usr/local/bin"));
        assert_eq!(preview.entries(), &[Entry::file("tool")]);
        assert_eq!(panes.current.selected_idx(), Some(0));
    }

    #[test]
    fn preview_respects_hidden_toggle() {
        let lister = tree();
        let mut nav = NavState::open(PathBuf::from("/usr/local"), false, &lister);
        nav.apply(Action::ToggleHidden, &lister);

        let preview = nav.panes(&lister, 10).preview.expect("preview pane");
        assert_eq!(preview.entries().len(), 2);
    }

    #[test]
    fn no_preview_for_files_and_failures_are_reported() {
        let lister = tree();
        let mut nav = NavState::open(PathBuf::from("/usr/local"), false, &lister);
        nav.apply(Action::MoveUp, &lister);
        assert_eq!(nav.selected_entry(), Some(&Entry::file("readme")));
        assert!(nav.panes(&lister, 10).preview.is_none());

        nav.apply(Action::MoveUp, &lister);
        let preview = nav.panes(&lister, 10).preview.expect("preview pane");
        assert!(preview.entries().is_empty());
        assert_eq!(preview.error().map(ListError::kind), Some(ListErrorKind::NotFound));
    }

    #[test]
    fn empty_current_pane_has_no_selection() {
        let lister = tree();
        let nav = NavState::open(PathBuf::from("/srv"), false, &lister);

        let panes = nav.panes(&lister, 10);
        assert_eq!(panes.current.selected_idx(), None);
        assert!(panes.current.error().is_some());
        assert!(panes.preview.is_none());
        assert_eq!(panes.parent.and_then(|p| p.selected_idx()), Some(0));
    }
}
