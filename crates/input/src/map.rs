//! Mapping from terminal events to input events.

use crate::types::{Difficulty, InputEvent, UiAction};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

/// Map keyboard input to UI actions.
pub fn handle_key_event(key: KeyEvent) -> Option<UiAction> {
    if should_quit(key) {
        return Some(UiAction::Quit);
    }

    match key.code {
        // Difficulty
        KeyCode::Char('1') => Some(UiAction::SelectDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(UiAction::SelectDifficulty(Difficulty::Normal)),
        KeyCode::Char('3') => Some(UiAction::SelectDifficulty(Difficulty::Hard)),

        // Starts a round from the title or the end screen.
        KeyCode::Enter | KeyCode::Char(' ') => Some(UiAction::Start),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiAction::Regenerate),
        KeyCode::Char('t') | KeyCode::Char('T') | KeyCode::Esc => Some(UiAction::BackToTitle),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map a raw terminal event.
///
/// Only key presses, primary-button presses and resizes are of interest.
pub fn map_event(event: &Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            handle_key_event(*key).map(InputEvent::Action)
        }
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(InputEvent::Click {
                column: mouse.column,
                row: mouse.row,
            }),
            _ => None,
        },
        Event::Resize(width, height) => Some(InputEvent::Resize {
            width: *width,
            height: *height,
        }),
        _ => None,
    }
}
