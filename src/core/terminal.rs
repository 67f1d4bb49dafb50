//! Terminal rendering and event loop for pathsurfer.
//!
//! Handles setup/teardown of raw mode and the alternate screen, redraws, and dispatching
//! events (keypress, resize) from the input worker to the app.
//!
//! The UI is drawn on stderr. Stdout is reserved for the final directory, so the binary can
//! be used as `cd "$(psurf)"`.

use crate::app::{AppState, KeypressResult};
use crate::core::DirLister;
use crate::core::worker::{InputEvent, InputWorker};
use crate::ui;

use crossbeam_channel::Receiver;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};

use std::io;
use std::path::PathBuf;

/// Initializes the terminal in raw mode and alternate screen and runs the main event loop.
///
/// Blocks until quit and returns the directory the user quit in.
/// Returns an std::io::Error if terminal setup, drawing or teardown fails.
pub fn run_terminal<L: DirLister>(app: &mut AppState<L>) -> io::Result<PathBuf> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    if let Err(e) = execute!(stderr, EnterAlternateScreen, Hide) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let result = Terminal::new(CrosstermBackend::new(io::stderr())).and_then(|mut terminal| {
        let worker = InputWorker::spawn();
        let result = event_loop(&mut terminal, app, worker.events());
        worker.shutdown();
        result
    });

    restore_terminal()?;
    result
}

/// Leaves raw mode and the alternate screen. Safe to call more than once.
pub fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stderr(), LeaveAlternateScreen, Show)
}

/// Main event loop of pathsurfer: draws the UI, then applies events one at a time in the
/// order the worker produced them. Returns on quit.
pub fn event_loop<B, L>(
    terminal: &mut Terminal<B>,
    app: &mut AppState<L>,
    events: &Receiver<InputEvent>,
) -> io::Result<PathBuf>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    L: DirLister,
{
    draw(terminal, app)?;

    loop {
        let Ok(event) = events.recv() else {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "terminal input closed",
            ));
        };

        match event {
            InputEvent::Key(key) => {
                if let KeypressResult::Quit(path) = app.handle_keypress(key) {
                    return Ok(path);
                }
            }
            InputEvent::Resize { width, height } => {
                log::debug!("resize to {width}x{height}");
                terminal.autoresize().map_err(io::Error::other)?;
            }
        }

        // Redraw after state change
        draw(terminal, app)?;
    }
}

fn draw<B, L>(terminal: &mut Terminal<B>, app: &mut AppState<L>) -> io::Result<()>
where
    B: Backend,
    B::Error: Send + Sync + 'static,
    L: DirLister,
{
    terminal
        .draw(|f| ui::render(f, app))
        .map(|_| ())
        .map_err(io::Error::other)
}
