//! Filtering, sorting and display formatting for directory entries in pathsurfer.
//!
//! The [Formatter] struct holds the rules for which entries are shown and in which order.
//! Used to prepare every listing before it reaches the navigation state or a pane.

use crate::core::{DirLister, Entry, ListError};

use unicode_width::UnicodeWidthChar;

use std::path::Path;

/// Formatter struct to handle filtering and sorting of entries based on user preferences.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    show_hidden: bool,
}

impl Formatter {
    pub fn new(show_hidden: bool) -> Self {
        Self { show_hidden }
    }

    /// Sorts the given entries in place by name, ascending, in byte order.
    pub fn sort_entries(&self, entries: &mut [Entry]) {
        entries.sort_by(|a, b| a.name().as_bytes().cmp(b.name().as_bytes()));
    }

    /// Filters the given entries in place according to the formatter's settings, then sorts them.
    pub fn filter_entries(&self, entries: &mut Vec<Entry>) {
        if !self.show_hidden {
            entries.retain(|e| !e.is_hidden());
        }
        self.sort_entries(entries);
    }

    /// Lists `path` through `lister` and returns the filtered, sorted entries.
    pub fn list<L: DirLister + ?Sized>(
        &self,
        lister: &L,
        path: &Path,
    ) -> Result<Vec<Entry>, ListError> {
        let mut entries = lister.list(path)?;
        self.filter_entries(&mut entries);
        Ok(entries)
    }
}

/// Cleans `line` for a pane of `pane_width` columns
/// by removing control characters and truncating or padding the string to fit exactly.
/// # Returns
/// A sanitized string that fits exactly within the specified pane width.
pub fn sanitize_to_exact_width(line: &str, pane_width: usize) -> String {
    let mut out = String::with_capacity(pane_width);
    let mut current_w = 0;

    for ch in line.chars() {
        if ch.is_control() {
            continue;
        }

        let w = ch.width().unwrap_or(0);
        if current_w + w > pane_width {
            break;
        }

        out.push(ch);
        current_w += w;
    }

    // If the string is shorter than the pane, fill it with spaces.
    if current_w < pane_width {
        out.push_str(&" ".repeat(pane_width - current_w));
    }

    out
}
