//! Clickable buttons for each scene, in viewport units.
//!
//! Buttons are laid out with the same anchored positioning as the stage, so
//! hit-testing and drawing agree on every terminal size.

use crate::core::{position, Anchor, Rect, Scene, Session};
use crate::types::{Difficulty, UiAction};

/// Button size on the title screen (12 columns x 3 rows).
const TITLE_BUTTON: (f64, f64) = (12.0, 6.0);
/// Button size on the game and end screens.
const WIDE_BUTTON: (f64, f64) = (18.0, 6.0);

/// Horizontal distance between the difficulty buttons.
const DIFFICULTY_SPACING: f64 = 14.0;
/// Horizontal offset of a button pair from the screen center.
const PAIR_OFFSET: f64 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub action: UiAction,
    pub rect: Rect,
    /// Drawn highlighted (the selected difficulty).
    pub selected: bool,
}

impl Button {
    fn new(label: &'static str, action: UiAction, size: (f64, f64), center: (f64, f64)) -> Self {
        Self {
            label,
            action,
            rect: position(size, Anchor::Center, center),
            selected: false,
        }
    }
}

/// Buttons visible in the session's current scene.
pub fn scene_buttons(session: &Session, units: (f64, f64)) -> Vec<Button> {
    let (w, h) = units;
    let cx = w / 2.0;

    match session.scene() {
        Scene::Title => {
            let y = h * 0.55;
            let mut buttons: Vec<Button> = Difficulty::ALL
                .iter()
                .zip([-DIFFICULTY_SPACING, 0.0, DIFFICULTY_SPACING])
                .map(|(&difficulty, dx)| {
                    let mut b = Button::new(
                        difficulty.label(),
                        UiAction::SelectDifficulty(difficulty),
                        TITLE_BUTTON,
                        (cx + dx, y),
                    );
                    b.selected = difficulty == session.difficulty();
                    b
                })
                .collect();
            buttons.push(Button::new("Start", UiAction::Start, TITLE_BUTTON, (cx, h * 0.7)));
            buttons
        }
        Scene::Game => {
            let stage_bottom = session
                .game()
                .map(|g| g.layout().stage().bottom())
                .unwrap_or(h * 0.8);
            let y = (h + stage_bottom) / 2.0;
            vec![
                Button::new(
                    "Back to title",
                    UiAction::BackToTitle,
                    WIDE_BUTTON,
                    (cx - PAIR_OFFSET, y),
                ),
                Button::new(
                    "Regenerate",
                    UiAction::Regenerate,
                    WIDE_BUTTON,
                    (cx + PAIR_OFFSET, y),
                ),
            ]
        }
        Scene::End => {
            let y = h * 0.5;
            vec![
                Button::new(
                    "Back to title",
                    UiAction::BackToTitle,
                    WIDE_BUTTON,
                    (cx - PAIR_OFFSET, y),
                ),
                Button::new("Play again", UiAction::Retry, WIDE_BUTTON, (cx + PAIR_OFFSET, y)),
            ]
        }
    }
}

/// Action of the first button containing the point, if any.
pub fn hit_button(buttons: &[Button], x: f64, y: f64) -> Option<UiAction> {
    buttons
        .iter()
        .find(|b| b.rect.contains(x, y))
        .map(|b| b.action)
}
