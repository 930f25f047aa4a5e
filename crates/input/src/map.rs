//! Key mapping from terminal events to demo actions.

use crate::types::{Action, Direction};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to an action.
///
/// Key releases map to nothing; presses and auto-repeats map by key code.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if should_quit(key) {
        return Some(Action::Quit);
    }

    match key.code {
        // Steering
        KeyCode::Up => Some(Action::Steer(Direction::Up)),
        KeyCode::Down => Some(Action::Steer(Direction::Down)),
        KeyCode::Left => Some(Action::Steer(Direction::Left)),
        KeyCode::Right => Some(Action::Steer(Direction::Right)),

        KeyCode::Char(' ') => Some(Action::ToggleMotion),

        // Tuning
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::IncreaseAspectRatio),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::DecreaseAspectRatio),
        KeyCode::Char(']') => Some(Action::IncreaseSpeed),
        KeyCode::Char('[') => Some(Action::DecreaseSpeed),

        _ => None,
    }
}

/// Check if key should quit the demo.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventState, KeyModifiers};

    #[test]
    fn test_arrow_keys_steer() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Up)),
            Some(Action::Steer(Direction::Up))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Down)),
            Some(Action::Steer(Direction::Down))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Left)),
            Some(Action::Steer(Direction::Left))
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Right)),
            Some(Action::Steer(Direction::Right))
        );
    }

    #[test]
    fn test_tuning_keys() {
        for c in ['+', '='] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(c))),
                Some(Action::IncreaseAspectRatio)
            );
        }
        for c in ['-', '_'] {
            assert_eq!(
                handle_key_event(KeyEvent::from(KeyCode::Char(c))),
                Some(Action::DecreaseAspectRatio)
            );
        }
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(']'))),
            Some(Action::IncreaseSpeed)
        );
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('['))),
            Some(Action::DecreaseSpeed)
        );
    }

    #[test]
    fn test_space_toggles_motion() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char(' '))),
            Some(Action::ToggleMotion)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('q'))),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_other_keys_ignored() {
        for code in [KeyCode::Char('x'), KeyCode::Enter, KeyCode::Esc, KeyCode::Tab] {
            assert_eq!(handle_key_event(KeyEvent::from(code)), None);
        }
    }

    #[test]
    fn test_release_events_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(handle_key_event(release), None);

        let repeat = KeyEvent { kind: KeyEventKind::Repeat, ..release };
        assert_eq!(handle_key_event(repeat), Some(Action::Steer(Direction::Up)));
    }
}
