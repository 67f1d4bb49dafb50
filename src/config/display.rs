//! Display configuration options for pathsurfer
//!
//! This module defines the `[display]` table of `pathsurfer.toml`: which panes are drawn,
//! whether they are separated, and how wide each one is.

use serde::Deserialize;

/// Display configuration options
///
/// Every option is defaulted, so a partial `[display]` table only overrides what it names.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Display {
    parent: bool,
    preview: bool,
    separators: bool,
    dir_marker: bool,
    layout: LayoutConfig,
}

/// Public methods for accessing display configuration options
impl Display {
    pub fn parent(&self) -> bool {
        self.parent
    }

    pub fn preview(&self) -> bool {
        self.preview
    }

    pub fn separators(&self) -> bool {
        self.separators
    }

    pub fn dir_marker(&self) -> bool {
        self.dir_marker
    }

    pub fn parent_ratio(&self) -> u16 {
        self.layout.parent
    }

    pub fn main_ratio(&self) -> u16 {
        self.layout.main
    }

    pub fn preview_ratio(&self) -> u16 {
        self.layout.preview
    }
}

impl Default for Display {
    fn default() -> Self {
        Display {
            parent: true,
            preview: true,
            separators: true,
            dir_marker: true,
            layout: LayoutConfig::default(),
        }
    }
}

/// Relative widths of the parent, current and preview panes.
///
/// Ratios of disabled panes are ignored, the remaining panes share the width.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LayoutConfig {
    parent: u16,
    main: u16,
    preview: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            parent: 20,
            main: 40,
            preview: 40,
        }
    }
}
