//! General and logging settings read from the `[general]` and `[log]` tables of
//! `pathsurfer.toml`.

use serde::Deserialize;

use std::path::{Path, PathBuf};

#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct General {
    show_hidden: bool,
}

impl General {
    #[inline]
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    pub(crate) fn set_show_hidden(&mut self, show: bool) {
        self.show_hidden = show;
    }
}

/// Logger settings. `file` falls back to the per-user data directory when unset.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Log {
    debug: bool,
    file: Option<PathBuf>,
}

impl Log {
    #[inline]
    pub fn debug(&self) -> bool {
        self.debug
    }

    #[inline]
    pub fn file(&self) -> Option<&Path> {
        self.file.as_deref()
    }

    pub(crate) fn set_debug(&mut self, debug: bool) {
        self.debug = debug;
    }

    pub(crate) fn set_file(&mut self, file: PathBuf) {
        self.file = Some(file);
    }
}
