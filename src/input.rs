//! Keyboard mapping for the terminal front end.
//!
//! Turns raw key events into the game's discrete inputs. Nothing here
//! touches round state; the caller queues the result on the `Round`.

use crate::round::GameInput;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a key press means to the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Game(GameInput),
    Quit,
    Ignore,
}

/// Map a key event. Releases and repeats are ignored so holding Space
/// does not machine-gun flaps.
pub fn map_key(key: KeyEvent) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Char(' ')
        | KeyCode::Up
        | KeyCode::Enter
        | KeyCode::Char('w')
        | KeyCode::Char('W') => {
            KeyAction::Game(GameInput::Flap)
        }
        KeyCode::Char('r') | KeyCode::Char('R') => KeyAction::Game(GameInput::Restart),
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_flap_keys() {
        for code in [
            KeyCode::Char(' '),
            KeyCode::Up,
            KeyCode::Enter,
            KeyCode::Char('w'),
            KeyCode::Char('W'),
        ] {
            assert_eq!(map_key(press(code)), KeyAction::Game(GameInput::Flap));
        }
    }

    #[test]
    fn test_restart_key() {
        assert_eq!(
            map_key(press(KeyCode::Char('r'))),
            KeyAction::Game(GameInput::Restart)
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(press(KeyCode::Esc)), KeyAction::Quit);
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            KeyAction::Quit
        );
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Char(' '),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(map_key(release), KeyAction::Ignore);
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(map_key(press(KeyCode::Char('x'))), KeyAction::Ignore);
    }
}
