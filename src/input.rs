//! Input handling: terminal events to game actions.

use crate::game::{process_input, FlappyInput, GameState};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

/// Result of handling one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue the game loop normally.
    Continue,
    /// Quit requested; leave the loop.
    Quit,
}

/// Translate a raw terminal event. Unknown events map to `Other`.
pub fn map_event(event: &Event) -> FlappyInput {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(_),
            ..
        }) => FlappyInput::Flap,
        _ => FlappyInput::Other,
    }
}

fn map_key(key: &KeyEvent) -> FlappyInput {
    // Releases and auto-repeats don't count as a new press
    if key.kind != KeyEventKind::Press {
        return FlappyInput::Other;
    }
    match key.code {
        KeyCode::Char(' ') | KeyCode::Up => FlappyInput::Flap,
        KeyCode::Esc | KeyCode::Char('q') => FlappyInput::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => FlappyInput::Quit,
        _ => FlappyInput::Other,
    }
}

/// Dispatch one event against the game state.
pub fn handle_event(game: &mut GameState, event: &Event, now_ms: u64) -> InputResult {
    match map_event(event) {
        FlappyInput::Quit => InputResult::Quit,
        input => {
            process_input(game, input, now_ms);
            InputResult::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FLAP_IMPULSE;
    use crate::game::{Phase, PlayArea};
    use crossterm::event::{KeyEventState, MouseButton};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_flap_keys() {
        assert_eq!(map_event(&key(KeyCode::Char(' '))), FlappyInput::Flap);
        assert_eq!(map_event(&key(KeyCode::Up)), FlappyInput::Flap);
    }

    #[test]
    fn test_mouse_down_is_flap() {
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Left))),
            FlappyInput::Flap
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Right))),
            FlappyInput::Flap
        );
        assert_eq!(
            map_event(&mouse(MouseEventKind::Up(MouseButton::Left))),
            FlappyInput::Other
        );
        assert_eq!(map_event(&mouse(MouseEventKind::Moved)), FlappyInput::Other);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_event(&key(KeyCode::Esc)), FlappyInput::Quit);
        assert_eq!(map_event(&key(KeyCode::Char('q'))), FlappyInput::Quit);
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c), FlappyInput::Quit);
        assert_eq!(map_event(&key(KeyCode::Char('c'))), FlappyInput::Other);
    }

    #[test]
    fn test_release_and_repeat_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let event = Event::Key(KeyEvent {
                code: KeyCode::Char(' '),
                modifiers: KeyModifiers::NONE,
                kind,
                state: KeyEventState::NONE,
            });
            assert_eq!(map_event(&event), FlappyInput::Other);
        }
    }

    #[test]
    fn test_unrecognized_events_ignored() {
        assert_eq!(map_event(&key(KeyCode::Down)), FlappyInput::Other);
        assert_eq!(map_event(&key(KeyCode::Enter)), FlappyInput::Other);
        assert_eq!(map_event(&Event::Resize(80, 24)), FlappyInput::Other);
        assert_eq!(map_event(&Event::FocusLost), FlappyInput::Other);
        assert_eq!(map_event(&Event::Paste("x".into())), FlappyInput::Other);
    }

    #[test]
    fn test_handle_event_flaps_and_quits() {
        let mut game = GameState::new(PlayArea::MAX, 34, 24, 0);

        let result = handle_event(&mut game, &key(KeyCode::Enter), 0);
        assert_eq!(result, InputResult::Continue);
        assert_eq!(game.phase, Phase::Idle);

        let result = handle_event(&mut game, &key(KeyCode::Up), 0);
        assert_eq!(result, InputResult::Continue);
        assert_eq!(game.phase, Phase::Running);
        assert_eq!(game.bird.velocity, FLAP_IMPULSE);

        let result = handle_event(&mut game, &key(KeyCode::Esc), 0);
        assert_eq!(result, InputResult::Quit);
        assert_eq!(game.phase, Phase::Running);
    }
}
