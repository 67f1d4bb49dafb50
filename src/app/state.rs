//! Application state for pathsurfer.
//!
//! [AppState] ties the loaded [Config], the [NavState] and the directory lister together and is
//! the single entry point for key presses coming from the terminal loop.

use crate::app::keymap;
use crate::app::nav::{NavState, Transition};
use crate::app::panes::Panes;
use crate::config::Config;
use crate::core::{DirLister, FsLister};

use crossterm::event::KeyEvent;

use std::path::PathBuf;

/// Outcome of a single key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeypressResult {
    Continue,
    /// The user quit; carries the directory to hand back to the shell.
    Quit(PathBuf),
}

pub struct AppState<L: DirLister = FsLister> {
    config: Config,
    nav: NavState,
    lister: L,
}

impl AppState<FsLister> {
    /// Opens `start` on the real filesystem.
    pub fn new(config: Config, start: PathBuf) -> Self {
        Self::with_lister(config, start, FsLister)
    }
}

impl<L: DirLister> AppState<L> {
    pub fn with_lister(config: Config, start: PathBuf, lister: L) -> Self {
        let show_hidden = config.general().show_hidden();
        let nav = NavState::open(start, show_hidden, &lister);
        log::info!(
            "opened {} (show_hidden: {show_hidden})",
            nav.current_dir().display()
        );
        Self {
            config,
            nav,
            lister,
        }
    }

    /// Decodes `key` for the current mode and applies the resulting action.
    /// Unbound keys leave the state untouched.
    pub fn handle_keypress(&mut self, key: KeyEvent) -> KeypressResult {
        let Some(action) = keymap::decode(key, self.nav.mode()) else {
            return KeypressResult::Continue;
        };

        match self.nav.apply(action, &self.lister) {
            Transition::Continue => KeypressResult::Continue,
            Transition::Quit(path) => {
                log::info!("quit in {}", path.display());
                KeypressResult::Quit(path)
            }
        }
    }

    /// Projects the three panes for a body of `height` rows.
    pub fn panes(&self, height: usize) -> Panes {
        self.nav.panes(&self.lister, height)
    }

    /// Resizes the visible window of the current pane.
    pub fn set_visible_height(&mut self, height: usize) {
        if height != self.nav.visible_height() {
            log::debug!("visible height {} -> {height}", self.nav.visible_height());
            self.nav.set_visible_height(height);
        }
    }

    // Getters / Accessors

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn nav(&self) -> &NavState {
        &self.nav
    }
}
