//! Keyboard events mapped to logical trainer actions.

use std::{io, time::Duration};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use swiftread_core::input::{InputEvent, InputProvider};

/// Non-blocking keyboard provider over the crossterm event stream.
#[derive(Debug, Default)]
pub struct TermInput;

impl TermInput {
    pub fn new() -> Self {
        Self
    }
}

fn map_key(key: KeyEvent) -> Option<InputEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    Some(match key.code {
        KeyCode::Char('q') => InputEvent::Quit,
        KeyCode::Esc | KeyCode::Backspace => InputEvent::Back,
        KeyCode::Up | KeyCode::Char('k') => InputEvent::Prev,
        KeyCode::Down | KeyCode::Char('j') => InputEvent::Next,
        KeyCode::Enter => InputEvent::Select,
        KeyCode::Char(' ') => InputEvent::PlayPause,
        KeyCode::Right | KeyCode::Char('l') => InputEvent::Advance,
        KeyCode::Char('r') => InputEvent::Reset,
        KeyCode::Char('+') | KeyCode::Char('=') => InputEvent::SpeedUp,
        KeyCode::Char('-') => InputEvent::SpeedDown,
        KeyCode::Char(']') => InputEvent::ChunkUp,
        KeyCode::Char('[') => InputEvent::ChunkDown,
        KeyCode::Char('b') => InputEvent::ToggleBionic,
        KeyCode::Char('t') => InputEvent::CycleDrill,
        KeyCode::Char('f') => InputEvent::CycleFilter,
        KeyCode::Char('s') => InputEvent::ShowStats,
        KeyCode::Char('e') => InputEvent::Edit,
        KeyCode::Char('d') => InputEvent::Delete,
        KeyCode::Char('c') => InputEvent::ClearHistory,
        _ => return None,
    })
}

impl InputProvider for TermInput {
    type Error = io::Error;

    /// Drain pending terminal events until one maps to a trainer
    /// action. Never blocks; unmapped keys are skipped.
    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()?
                && let Some(mapped) = map_key(key)
            {
                return Ok(Some(mapped));
            }
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests;
