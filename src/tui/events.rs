use crossterm::event::{Event as CrosstermEvent, KeyEvent};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::timeout;
use tracing::debug;

use crate::api::CharacterPage;

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input event
    Key(KeyEvent),

    /// Terminal resize event
    Resize(u16, u16),

    /// Periodic tick event
    Tick,

    /// A character page fetch resolved successfully
    PageLoaded(u32, CharacterPage),

    /// A character page fetch failed; the message is for the log, the user
    /// only sees the generic failure notice
    PageFailed(u32, String),
}

/// Event handler bridging terminal input and internal app events
///
/// Terminal input is pumped by a single long-lived blocking task that loops
/// on `crossterm::event::read()` and forwards everything into the same mpsc
/// channel the fetch tasks report through. `next()` only ever waits on the
/// channel, so no reader is spawned per poll and no input event can end up
/// owned by a task whose result nobody collects.
pub struct EventHandler {
    /// Event receiver channel
    receiver: mpsc::UnboundedReceiver<Event>,

    /// Event sender channel, cloned into fetch tasks
    sender: mpsc::UnboundedSender<Event>,

    /// How long to wait for an event before emitting a tick
    tick_interval: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        spawn_input_pump(sender.clone());

        Self {
            receiver,
            sender,
            tick_interval: Duration::from_millis(tick_rate_ms.max(10)),
        }
    }

    /// Sender handle for fetch tasks to report completions through
    pub fn sender(&self) -> mpsc::UnboundedSender<Event> {
        self.sender.clone()
    }

    /// Get the next event, falling back to a tick when nothing arrives
    /// within the tick interval
    pub async fn next(&mut self) -> Option<Event> {
        match timeout(self.tick_interval, self.receiver.recv()).await {
            Ok(event) => event,
            Err(_) => Some(Event::Tick),
        }
    }
}

/// Forward terminal input into the event channel until the receiver drops
fn spawn_input_pump(sender: mpsc::UnboundedSender<Event>) {
    tokio::task::spawn_blocking(move || loop {
        match crossterm::event::read() {
            Ok(crossterm_event) => {
                if let Some(event) = convert_crossterm_event(crossterm_event) {
                    if sender.send(event).is_err() {
                        break; // receiver dropped on shutdown
                    }
                }
            }
            Err(e) => {
                debug!("Terminal input unavailable, stopping input pump: {}", e);
                break;
            }
        }
    });
}

/// Convert crossterm events to application events
fn convert_crossterm_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key_event) => Some(Event::Key(key_event)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}
