//! Application logic for pathsurfer.
//!
//! - [actions]: the closed set of user actions and the two modes
//! - [keymap]: key event decoding
//! - [nav]: the navigation state machine
//! - [panes]: parent/current/preview projections of the navigation state
//! - [state]: [AppState], the owner of config, navigation state and lister

pub mod actions;
pub mod keymap;
pub mod nav;
pub mod panes;
pub mod state;

pub use actions::{Action, Mode};
pub use nav::{NavState, Transition, calculate_scroll_offset};
pub use panes::{Pane, Panes};
pub use state::{AppState, KeypressResult};
