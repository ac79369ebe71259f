//! Mapping from terminal events to game actions.

use crate::types::{GameAction, Phase};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Map a key press to a game action for the current phase.
///
/// While playing: arrows (or vi / WASD keys) move, soft drop and rotate,
/// space hard-drops. After game over: Enter, space or `r` restart.
pub fn translate_key(key: KeyEvent, phase: Phase) -> Option<GameAction> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match phase {
        Phase::GameOver => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') | KeyCode::Char('R') => {
                Some(GameAction::Restart)
            }
            _ => None,
        },
        Phase::Playing => match key.code {
            KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a') | KeyCode::Char('A') => {
                Some(GameAction::Left)
            }
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d') | KeyCode::Char('D') => {
                Some(GameAction::Right)
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => {
                Some(GameAction::SoftDrop)
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w') | KeyCode::Char('W') => {
                Some(GameAction::Rotate)
            }
            KeyCode::Char(' ') => Some(GameAction::HardDrop),
            _ => None,
        },
    }
}

/// Map any terminal event to a game action for the current phase.
///
/// A mouse click anywhere restarts after game over ("tap to restart").
pub fn translate_event(event: &Event, phase: Phase) -> Option<GameAction> {
    match event {
        Event::Key(key) => translate_key(*key, phase),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        }) if phase == Phase::GameOver => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
