//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, GameStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Pause and Enter depend on the current status: `p`/Esc toggles between
/// playing and paused, Enter starts, resumes or restarts.
pub fn handle_key_event(key: KeyEvent, status: GameStatus) -> Option<GameAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }

    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::MoveDown),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Rotate),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => match status {
            GameStatus::Playing => Some(GameAction::Pause),
            GameStatus::Paused => Some(GameAction::Resume),
            _ => None,
        },
        KeyCode::Enter => match status {
            GameStatus::Idle => Some(GameAction::Start),
            GameStatus::Paused => Some(GameAction::Resume),
            GameStatus::GameOver => Some(GameAction::Restart),
            GameStatus::Playing => None,
        },

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn playing(code: KeyCode) -> Option<GameAction> {
        handle_key_event(KeyEvent::from(code), GameStatus::Playing)
    }

    #[test]
    fn test_movement_keys() {
        assert_eq!(playing(KeyCode::Left), Some(GameAction::MoveLeft));
        assert_eq!(playing(KeyCode::Right), Some(GameAction::MoveRight));
        assert_eq!(playing(KeyCode::Down), Some(GameAction::MoveDown));

        assert_eq!(playing(KeyCode::Char('A')), Some(GameAction::MoveLeft));
        assert_eq!(playing(KeyCode::Char('l')), Some(GameAction::MoveRight));
        assert_eq!(playing(KeyCode::Char('s')), Some(GameAction::MoveDown));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(playing(KeyCode::Up), Some(GameAction::Rotate));
        assert_eq!(playing(KeyCode::Char('w')), Some(GameAction::Rotate));
        assert_eq!(playing(KeyCode::Char('K')), Some(GameAction::Rotate));
        assert_eq!(playing(KeyCode::Char('z')), None);
    }

    #[test]
    fn test_pause_toggles_with_status() {
        let p = KeyEvent::from(KeyCode::Char('p'));
        assert_eq!(handle_key_event(p, GameStatus::Playing), Some(GameAction::Pause));
        assert_eq!(handle_key_event(p, GameStatus::Paused), Some(GameAction::Resume));
        assert_eq!(handle_key_event(p, GameStatus::Idle), None);

        let esc = KeyEvent::from(KeyCode::Esc);
        assert_eq!(handle_key_event(esc, GameStatus::Playing), Some(GameAction::Pause));
    }

    #[test]
    fn test_enter_depends_on_status() {
        let enter = KeyEvent::from(KeyCode::Enter);
        assert_eq!(handle_key_event(enter, GameStatus::Idle), Some(GameAction::Start));
        assert_eq!(handle_key_event(enter, GameStatus::Paused), Some(GameAction::Resume));
        assert_eq!(handle_key_event(enter, GameStatus::GameOver), Some(GameAction::Restart));
        assert_eq!(handle_key_event(enter, GameStatus::Playing), None);
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(playing(KeyCode::Char(' ')), Some(GameAction::HardDrop));
        assert_eq!(playing(KeyCode::Char('r')), Some(GameAction::Restart));
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL),
                GameStatus::Playing
            ),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
