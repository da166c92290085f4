//! Terminal event source.
//!
//! A dedicated thread blocks on `crossterm::event::read` and forwards decoded
//! key presses and resizes into a channel. The tick loop is the only consumer,
//! so nothing else touches session state.

use std::thread;

use crossterm::event::{self, Event};
use tokio::sync::mpsc;

use crate::map::key_event_to_input;
use crate::types::TermEvent;

/// Decode a raw terminal event. Mouse, focus and paste events are dropped.
pub fn translate(event: Event) -> Option<TermEvent> {
    match event {
        Event::Key(key) => key_event_to_input(key).map(TermEvent::Input),
        Event::Resize(columns, rows) => Some(TermEvent::Resize { columns, rows }),
        _ => None,
    }
}

/// Start the reader thread and return the receiving end of its channel.
///
/// The channel closes when the terminal stops delivering events or the
/// receiver is dropped.
pub fn spawn_event_source() -> mpsc::UnboundedReceiver<TermEvent> {
    let (tx, rx) = mpsc::unbounded_channel();
    thread::spawn(move || loop {
        let event = match event::read() {
            Ok(event) => event,
            Err(err) => {
                tracing::warn!(error = %err, "terminal event source stopped");
                break;
            }
        };
        if let Some(event) = translate(event) {
            if tx.send(event).is_err() {
                break;
            }
        }
    });
    rx
}
