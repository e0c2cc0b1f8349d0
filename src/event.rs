//! Event handling module.
//!
//! This module handles keyboard and terminal events using crossterm. Events
//! are read on a blocking task and forwarded to the main loop over a channel.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, warn};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use crate::constants::POLL_TIMEOUT;

/// Represents the different actions a user can take in the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Redraw immediately instead of waiting for the next tick
    Refresh,
    /// The terminal was resized to (columns, rows)
    Resize(u16, u16),
}

/// Handles terminal events and converts them to application actions.
pub struct EventHandler {
    /// Timeout for polling events
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates a new event handler with default settings.
    pub fn new() -> Self {
        Self {
            poll_timeout: POLL_TIMEOUT,
        }
    }

    /// Polls for the next event and converts it to an Action.
    ///
    /// Returns Ok(None) if no event is available within the timeout.
    pub fn next(&self) -> io::Result<Option<Action>> {
        if event::poll(self.poll_timeout)? {
            return Ok(self.event_to_action(event::read()?));
        }
        Ok(None)
    }

    /// Starts reading events on a blocking task.
    ///
    /// Actions arrive on the returned receiver until the reader is stopped,
    /// the receiver is dropped, or reading fails.
    pub fn spawn(self) -> (EventReader, UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let handle = tokio::task::spawn_blocking(move || self.forward(&tx, &flag));
        (EventReader { stop, handle }, rx)
    }

    fn forward(&self, tx: &UnboundedSender<Action>, stop: &AtomicBool) {
        while !stop.load(Ordering::Relaxed) {
            match self.next() {
                Ok(Some(action)) => {
                    if tx.send(action).is_err() {
                        debug!("Action receiver dropped, stopping event reader");
                        return;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    warn!("Failed to read terminal event: {}", e);
                    return;
                }
            }
        }
        debug!("Event reader stopped");
    }

    /// Converts a terminal event to an action.
    pub(crate) fn event_to_action(&self, event: Event) -> Option<Action> {
        match event {
            // Only process key press events (not releases)
            Event::Key(key) if key.kind == KeyEventKind::Press => self.key_to_action(key),
            Event::Resize(columns, rows) => Some(Action::Resize(columns, rows)),
            _ => None,
        }
    }

    /// Converts a key event to an application action.
    pub(crate) fn key_to_action(&self, key: KeyEvent) -> Option<Action> {
        // Check for Ctrl+C first (quit)
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle to the background event reader.
pub struct EventReader {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

impl EventReader {
    /// Asks the reader to stop and waits for it to finish.
    ///
    /// The reader notices within one poll timeout.
    pub async fn stop(self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Err(e) = self.handle.await {
            warn!("Event reader task failed: {}", e);
        }
    }
}
