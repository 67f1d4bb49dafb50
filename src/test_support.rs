//! In-memory directory listings for unit tests.

use crate::core::{DirLister, Entry, ListError};

use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A [DirLister] serving canned listings. Unknown paths report [ListError::NotFound].
#[derive(Default)]
pub(crate) struct MemLister {
    dirs: HashMap<PathBuf, Result<Vec<Entry>, ListError>>,
    calls: Cell<usize>,
}

impl MemLister {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_dir(mut self, path: &str, entries: Vec<Entry>) -> Self {
        self.insert(path, entries);
        self
    }

    pub(crate) fn with_error(mut self, path: &str, err: ListError) -> Self {
        self.dirs.insert(PathBuf::from(path), Err(err));
        self
    }

    pub(crate) fn insert(&mut self, path: &str, entries: Vec<Entry>) {
        self.dirs.insert(PathBuf::from(path), Ok(entries));
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl DirLister for MemLister {
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListError> {
        self.calls.set(self.calls.get() + 1);
        self.dirs
            .get(path)
            .cloned()
            .unwrap_or_else(|| Err(ListError::NotFound(path.to_path_buf())))
    }
}

/// Builds entries from names; a trailing `/` marks a directory.
pub(crate) fn entries(names: &[&str]) -> Vec<Entry> {
    names
        .iter()
        .map(|n| match n.strip_suffix('/') {
            Some(dir) => Entry::dir(dir),
            None => Entry::file(*n),
        })
        .collect()
}
