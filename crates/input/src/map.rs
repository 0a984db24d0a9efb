//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Letters are case-insensitive. Chords with Control or Alt never map to an
/// action, so Ctrl-C and friends stay available to the shell.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(GameAction::SoftDrop),

        // Rotation
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(GameAction::RotateCw),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(GameAction::Pause),

        _ => None,
    }
}

/// Check if key should end the game normally.
pub fn should_quit(key: KeyEvent) -> bool {
    !key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
}

/// Check if key is a terminal interrupt (Ctrl-C).
///
/// Raw mode delivers Ctrl-C as a key event instead of a signal.
pub fn is_interrupt(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('a'))),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('D'))),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('s'))),
            Some(GameAction::SoftDrop)
        );

        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(GameAction::MoveLeft)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(GameAction::MoveRight)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(GameAction::SoftDrop)
        );
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('w'))),
            Some(GameAction::RotateCw)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('W'))),
            Some(GameAction::RotateCw)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(GameAction::RotateCw)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(GameAction::HardDrop)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('p'))),
            Some(GameAction::Pause)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('P'))),
            Some(GameAction::Pause)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('q'))), None);
    }

    #[test]
    fn test_control_chords_do_not_map() {
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::ALT)),
            None
        );
        // Shift is how terminals report upper-case letters.
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(GameAction::MoveLeft)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(!should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_interrupt_keys() {
        assert!(is_interrupt(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!is_interrupt(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!is_interrupt(KeyEvent::from(KeyCode::Char('q'))));
    }
}
