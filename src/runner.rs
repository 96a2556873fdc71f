//! Per-frame event dispatch shared by the binary and the tests.
//!
//! Puzzle errors only cancel the operation that raised them; they are logged
//! and the loop keeps going.

use tracing::{info, warn};

use crate::core::Session;
use crate::term::{cell_to_units, hit_button, scene_buttons, Viewport};
use crate::types::{InputEvent, UiAction};

/// What the frame loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// The terminal changed size; the next draw must be a full redraw.
    Redraw,
    Quit,
}

/// Apply one input event. Buttons take clicks before lanes do.
pub fn dispatch(session: &mut Session, viewport: &mut Viewport, ev: InputEvent) -> Flow {
    match ev {
        InputEvent::Resize { width, height } => {
            *viewport = Viewport::new(width, height);
            let (w, h) = viewport.units();
            session.resize(w, h);
            Flow::Redraw
        }
        InputEvent::Click { column, row } => {
            let (x, y) = cell_to_units(column, row);
            let buttons = scene_buttons(session, viewport.units());
            match hit_button(&buttons, x, y) {
                Some(action) => apply(session, action),
                None => {
                    if let Err(err) = session.click_at(x, y) {
                        warn!(error = %err, x, y, "click failed");
                    }
                    Flow::Continue
                }
            }
        }
        InputEvent::Action(action) => apply(session, action),
    }
}

/// Apply a batch of events, stopping at the first quit.
pub fn dispatch_all<I>(session: &mut Session, viewport: &mut Viewport, events: I) -> Flow
where
    I: IntoIterator<Item = InputEvent>,
{
    let mut flow = Flow::Continue;
    for ev in events {
        match dispatch(session, viewport, ev) {
            Flow::Quit => return Flow::Quit,
            Flow::Redraw => flow = Flow::Redraw,
            Flow::Continue => {}
        }
    }
    flow
}

/// Advance animations by `elapsed_ms`.
pub fn advance(session: &mut Session, elapsed_ms: u32) {
    if let Err(err) = session.tick(elapsed_ms) {
        warn!(error = %err, elapsed_ms, "tick failed");
    }
}

fn apply(session: &mut Session, action: UiAction) -> Flow {
    if action == UiAction::Quit {
        info!("quit");
        return Flow::Quit;
    }
    if let Err(err) = session.apply_action(action) {
        warn!(error = %err, action = ?action, "action failed");
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GeometryConfig, Scene};
    use crate::types::{Difficulty, DEFAULT_PALETTE, FRAME_MS, RED};

    fn session(palette: Vec<crate::types::Color>, viewport: Viewport) -> Session {
        Session::new(
            3,
            Difficulty::Easy,
            palette,
            GeometryConfig::TERMINAL,
            viewport.units(),
        )
    }

    #[test]
    fn test_failed_start_keeps_running_on_title() {
        let mut vp = Viewport::new(80, 24);
        let mut s = session(vec![RED], vp);

        let flow = dispatch(&mut s, &mut vp, InputEvent::Action(UiAction::Start));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(s.scene(), Scene::Title);

        // The loop is still usable afterwards.
        advance(&mut s, FRAME_MS);
        let flow = dispatch(&mut s, &mut vp, InputEvent::Action(UiAction::Quit));
        assert_eq!(flow, Flow::Quit);
    }

    #[test]
    fn test_failed_start_button_click_keeps_running() {
        let mut vp = Viewport::new(80, 24);
        let mut s = session(vec![RED], vp);
        let start = scene_buttons(&s, vp.units())
            .into_iter()
            .find(|b| b.action == UiAction::Start)
            .unwrap();
        let (cx, cy) = start.rect.center();
        let column = cx as u16;
        let row = (cy / 2.0) as u16;

        let flow = dispatch(&mut s, &mut vp, InputEvent::Click { column, row });
        assert_eq!(flow, Flow::Continue);
        assert_eq!(s.scene(), Scene::Title);
    }

    #[test]
    fn test_batch_stops_at_quit() {
        let mut vp = Viewport::new(80, 24);
        let mut s = session(DEFAULT_PALETTE.to_vec(), vp);

        let flow = dispatch_all(
            &mut s,
            &mut vp,
            [
                InputEvent::Action(UiAction::Quit),
                InputEvent::Action(UiAction::Start),
            ],
        );
        assert_eq!(flow, Flow::Quit);
        assert_eq!(s.scene(), Scene::Title);
    }

    #[test]
    fn test_resize_asks_for_redraw() {
        let mut vp = Viewport::new(80, 24);
        let mut s = session(DEFAULT_PALETTE.to_vec(), vp);

        let flow = dispatch_all(
            &mut s,
            &mut vp,
            [InputEvent::Resize {
                width: 120,
                height: 40,
            }],
        );
        assert_eq!(flow, Flow::Redraw);
        assert_eq!(vp, Viewport::new(120, 40));
        assert_eq!(s.viewport(), vp.units());
    }
}
