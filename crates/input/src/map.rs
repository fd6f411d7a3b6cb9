//! Key bindings for one-shot actions.
//!
//! Movement keys are owned by [`InputHandler`](crate::InputHandler) so
//! they can repeat; everything here fires once per press.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::types::GameAction;

/// Map a pressed key to its one-shot action, if it has one.
pub fn handle_key_event(code: KeyCode) -> Option<GameAction> {
    match code {
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(GameAction::RotateZ),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::RotateX),
        KeyCode::Char('c') | KeyCode::Char('C') => Some(GameAction::RotateY),
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),
        _ => None,
    }
}

/// Whether the key combination asks to leave the program. Checked before
/// [`handle_key_event`] so ctrl-c wins over the rotate binding on 'c'.
pub fn should_quit(code: KeyCode, modifiers: KeyModifiers) -> bool {
    if code == KeyCode::Esc {
        return true;
    }
    modifiers.contains(KeyModifiers::CONTROL)
        && matches!(code, KeyCode::Char('c') | KeyCode::Char('C'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_keys_cover_all_three_axes() {
        assert_eq!(handle_key_event(KeyCode::Char('z')), Some(GameAction::RotateZ));
        assert_eq!(handle_key_event(KeyCode::Char('x')), Some(GameAction::RotateX));
        assert_eq!(handle_key_event(KeyCode::Char('c')), Some(GameAction::RotateY));
        assert_eq!(handle_key_event(KeyCode::Char('C')), Some(GameAction::RotateY));
    }

    #[test]
    fn test_space_hard_drops() {
        assert_eq!(handle_key_event(KeyCode::Char(' ')), Some(GameAction::HardDrop));
    }

    #[test]
    fn test_session_keys() {
        assert_eq!(handle_key_event(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(handle_key_event(KeyCode::Char('p')), Some(GameAction::Pause));
    }

    #[test]
    fn test_movement_keys_are_not_one_shot() {
        for code in [
            KeyCode::Left,
            KeyCode::Right,
            KeyCode::Up,
            KeyCode::Down,
            KeyCode::Char('a'),
            KeyCode::Char('d'),
            KeyCode::Char('q'),
            KeyCode::Char('e'),
            KeyCode::Char('s'),
        ] {
            assert_eq!(handle_key_event(code), None, "{code:?} must go to the handler");
        }
    }

    #[test]
    fn test_quit_bindings() {
        assert!(should_quit(KeyCode::Esc, KeyModifiers::NONE));
        assert!(should_quit(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(!should_quit(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(!should_quit(KeyCode::Char('q'), KeyModifiers::NONE));
    }
}
