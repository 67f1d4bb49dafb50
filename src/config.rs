//! Configuration module for pathsurfer.
//!
//! Settings come from three layers, highest precedence first: command line flags,
//! the optional `pathsurfer.toml`, and the built-in defaults.
//!
//! Submodules:
//! - [load]: reading the file and merging the flags into [Config]
//! - [general]: `[general]` and `[log]` tables
//! - [display]: pane visibility and layout
//! - [theme]: colors

pub mod display;
pub mod general;
pub mod load;
pub mod theme;

pub use display::Display;
pub use general::{General, Log};
pub use load::{CONFIG_ENV, Config, ConfigError};
pub use theme::Theme;
