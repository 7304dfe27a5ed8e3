//! Key mapping from terminal events to maze actions.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the action it holds down, if any.
pub fn action_for_key(code: KeyCode) -> Option<Action> {
    match code {
        // Turning
        KeyCode::Left => Some(Action::TurnLeft),
        KeyCode::Right => Some(Action::TurnRight),

        // Walking
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Action::MoveForward),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Action::MoveBackward),

        // Strafing
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::StrafeLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::StrafeRight),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(
        key.code,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc
    ) || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_turn_keys() {
        assert_eq!(action_for_key(KeyCode::Left), Some(Action::TurnLeft));
        assert_eq!(action_for_key(KeyCode::Right), Some(Action::TurnRight));
    }

    #[test]
    fn test_walk_keys() {
        assert_eq!(action_for_key(KeyCode::Char('w')), Some(Action::MoveForward));
        assert_eq!(action_for_key(KeyCode::Char('W')), Some(Action::MoveForward));
        assert_eq!(action_for_key(KeyCode::Char('s')), Some(Action::MoveBackward));
        assert_eq!(action_for_key(KeyCode::Up), Some(Action::MoveForward));
        assert_eq!(action_for_key(KeyCode::Down), Some(Action::MoveBackward));
    }

    #[test]
    fn test_strafe_keys() {
        assert_eq!(action_for_key(KeyCode::Char('a')), Some(Action::StrafeLeft));
        assert_eq!(action_for_key(KeyCode::Char('D')), Some(Action::StrafeRight));
        assert_eq!(action_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('w'))));
    }
}
