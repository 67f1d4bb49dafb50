//! Miscellaneous utilities for pathsurfer.
//!
//! - [cli]: the command line
//! - [logging]: the file logger
//! - [helpers]: color parsing, path display and resolution

pub mod cli;
pub mod helpers;
pub mod logging;

pub use helpers::{
    default_log_path, parse_color, resolve_start_dir, shorten_home_path,
};
