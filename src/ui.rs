//! Terminal UI for pathsurfer.
//!
//! - [render]: the frame entry point and pane layout
//! - [panes]: list drawing for one pane
//! - [widgets]: header, status line and separators

pub mod panes;
pub mod render;
pub mod widgets;

pub use render::{layout_chunks, render};
