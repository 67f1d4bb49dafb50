//! Input worker thread for pathsurfer.
//!
//! Polls terminal events on a background thread and forwards them, in arrival order, over an
//! unbounded crossbeam channel. The consumer (the terminal loop) owns the navigation state and
//! applies one event fully before receiving the next.
//!
//! Shutdown is cooperative: [InputWorker::shutdown] raises a flag that the polling loop checks
//! between polls, then joins the thread. The loop also stops when the receiving side is gone.

use crossbeam_channel::{Receiver, Sender, unbounded};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// How long a single poll may block before the shutdown flag is checked again.
pub const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Terminal events the consumer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
}

/// Handle to the input thread.
pub struct InputWorker {
    events: Receiver<InputEvent>,
    shutdown: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl InputWorker {
    /// Spawns the worker reading from the real terminal.
    pub fn spawn() -> Self {
        Self::spawn_with(poll_terminal)
    }

    /// Spawns the worker over an arbitrary event source.
    ///
    /// `source` is called repeatedly; `Ok(None)` means nothing arrived within one poll.
    /// An `Err` ends the worker, which closes the channel.
    pub fn spawn_with<F>(source: F) -> Self
    where
        F: FnMut() -> io::Result<Option<InputEvent>> + Send + 'static,
    {
        let (tx, events) = unbounded::<InputEvent>();
        let shutdown = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&shutdown);

        let handle = thread::spawn(move || input_loop(source, tx, flag));

        Self {
            events,
            shutdown,
            handle: Some(handle),
        }
    }

    /// Accessor for the event receiver.
    pub fn events(&self) -> &Receiver<InputEvent> {
        &self.events
    }

    /// Signals the thread to stop and waits for it.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        self.shutdown.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::error!("input worker panicked");
        }
    }
}

impl Drop for InputWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

fn input_loop<F>(mut source: F, tx: Sender<InputEvent>, shutdown: Arc<AtomicBool>)
where
    F: FnMut() -> io::Result<Option<InputEvent>>,
{
    log::debug!("input worker started");
    while !shutdown.load(Ordering::Relaxed) {
        match source() {
            Ok(Some(ev)) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                log::error!("reading terminal input failed: {e}");
                break;
            }
        }
    }
    log::debug!("input worker stopped");
}

/// Polls crossterm once. Key releases and other events are dropped here.
fn poll_terminal() -> io::Result<Option<InputEvent>> {
    if !event::poll(POLL_INTERVAL)? {
        return Ok(None);
    }
    let ev = match event::read()? {
        Event::Key(key) if key.kind != KeyEventKind::Release => Some(InputEvent::Key(key)),
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        _ => None,
    };
    Ok(ev)
}
