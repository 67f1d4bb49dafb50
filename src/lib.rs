//! Internal library crate for pathsurfer.
//!
//! The shipped application is the `psurf` binary (`src/main.rs`).
//!
//! This library exists to share code between targets (binary, tests) and to keep modules organized.
//! This API is only used to build the `psurf` binary and is not considered a library for external use.

pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_support;
