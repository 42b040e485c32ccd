//! Maps terminal events to game inputs.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Input actions for the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    /// Flap (Space or Up).
    Flap,
    /// Restart after game over (r).
    Reset,
    /// Quit (q, Esc or Ctrl-C).
    Quit,
    /// The terminal changed size.
    Resize,
}

/// Translate a terminal event. Unrecognized keys and key releases map to `None`.
pub fn map_event(event: &Event) -> Option<GameInput> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Resize(..) => Some(GameInput::Resize),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<GameInput> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(GameInput::Quit)
        }
        KeyCode::Esc | KeyCode::Char('q') => Some(GameInput::Quit),
        KeyCode::Char('r') => Some(GameInput::Reset),
        KeyCode::Char(' ') | KeyCode::Up => Some(GameInput::Flap),
        _ => None,
    }
}
