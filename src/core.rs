//! Core runtime logic for pathsurfer.
//!
//! This module contains the non-UI "engine" pieces used by the application:
//! - [fm]: directory listing (see [Entry], [DirLister], [FsLister]).
//! - [formatter]: hidden-entry filtering, ordering and width sanitizing.
//! - [fuzzy]: the fuzzy matcher used by search mode.
//! - [worker]: the input thread feeding terminal events to the loop.
//! - [terminal]: terminal setup/teardown and the main event loop.

pub mod fm;
pub mod formatter;
pub mod fuzzy;
pub mod terminal;
pub mod worker;

pub use fm::{DirLister, Entry, FsLister, ListError, ListErrorKind, browse_dir};
pub use formatter::{Formatter, sanitize_to_exact_width};
pub use fuzzy::Match;
