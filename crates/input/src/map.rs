//! Key mapping from terminal events to symbolic input events.

use crate::types::{InputEvent, KeyBindings};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Symbolic name of a key code, or `None` for keys the shell has no name for.
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Up => "up",
        KeyCode::Down => "down",
        KeyCode::Left => "left",
        KeyCode::Right => "right",
        KeyCode::Enter => "return",
        KeyCode::Esc => "escape",
        KeyCode::Tab => "tab",
        KeyCode::BackTab => "backtab",
        KeyCode::Backspace => "backspace",
        KeyCode::Delete => "delete",
        KeyCode::Insert => "insert",
        KeyCode::Home => "home",
        KeyCode::End => "end",
        KeyCode::PageUp => "pageup",
        KeyCode::PageDown => "pagedown",
        KeyCode::Char(' ') => "space",
        KeyCode::Char(c) => return Some(c.to_lowercase().collect()),
        KeyCode::F(n) => return Some(format!("f{n}")),
        _ => return None,
    };
    Some(name.to_string())
}

/// Map a key event to an input event.
///
/// Only presses and auto-repeats produce input; releases are dropped.
pub fn key_event_to_input(key: KeyEvent) -> Option<InputEvent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    let mut event = InputEvent::named(key_name(key.code)?);
    if let KeyCode::Char(c) = key.code {
        event = event.with_raw(c.to_string());
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        event = event.with_ctrl();
    }
    Some(event)
}

/// Check if an input event should end the process.
///
/// Ctrl+C always exits: raw mode swallows the interrupt signal.
pub fn should_exit(event: &InputEvent, bindings: &KeyBindings) -> bool {
    event.name == bindings.exit || (event.ctrl && event.name == "c")
}
