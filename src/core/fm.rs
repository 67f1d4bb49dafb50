//! Directory listing for pathsurfer.
//!
//! Provides the [Entry] struct which is used throughout pathsurfer, the [DirLister] seam the
//! navigation state reads directories through, and [FsLister], the implementation backed by the
//! real filesystem.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A single entry in a directory listing.
///
/// Immutable once produced by a [DirLister]. Names are unique within one listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    is_dir: bool,
}

impl Entry {
    pub fn new(name: impl Into<String>, is_dir: bool) -> Self {
        Entry {
            name: name.into(),
            is_dir,
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    // Accessors

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// The kind of failure a [DirLister] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListErrorKind {
    NotFound,
    PermissionDenied,
    Other,
}

/// Failure to list a directory.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("{}: no such directory", .0.display())]
    NotFound(PathBuf),

    #[error("{}: permission denied", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{}: {message}", .path.display())]
    Other { path: PathBuf, message: String },
}

impl ListError {
    /// Classifies an I/O error raised while reading `path`.
    pub fn from_io(path: &Path, err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => ListError::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => ListError::PermissionDenied(path.to_path_buf()),
            _ => ListError::Other {
                path: path.to_path_buf(),
                message: err.to_string(),
            },
        }
    }

    pub fn kind(&self) -> ListErrorKind {
        match self {
            ListError::NotFound(_) => ListErrorKind::NotFound,
            ListError::PermissionDenied(_) => ListErrorKind::PermissionDenied,
            ListError::Other { .. } => ListErrorKind::Other,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ListError::NotFound(path) | ListError::PermissionDenied(path) => path,
            ListError::Other { path, .. } => path,
        }
    }
}

/// Source of raw directory listings.
///
/// Implementations return entries in any order and must not filter hidden names;
/// filtering and sorting is applied by the caller.
pub trait DirLister {
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListError>;
}

/// Lists directories from the real filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLister;

impl DirLister for FsLister {
    fn list(&self, path: &Path) -> Result<Vec<Entry>, ListError> {
        browse_dir(path).map_err(|e| ListError::from_io(path, &e))
    }
}

/// Reads the contents of the provided directory and returns them in a vector of [Entry].
///
/// Symlinks are followed to decide whether an entry is a directory, so a link to a
/// directory can be entered like the directory itself. Entries whose type cannot be
/// read are skipped.
pub fn browse_dir(path: &Path) -> io::Result<Vec<Entry>> {
    let mut entries = Vec::with_capacity(256);

    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(_) => continue,
        };

        let ft = match entry.file_type() {
            Ok(ft) => ft,
            Err(_) => continue,
        };

        let is_dir = if ft.is_symlink() {
            fs::metadata(entry.path()).is_ok_and(|md| md.is_dir())
        } else {
            ft.is_dir()
        };

        let name = entry.file_name().to_string_lossy().into_owned();
        entries.push(Entry::new(name, is_dir));
    }
    Ok(entries)
}
