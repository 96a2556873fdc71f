//! Lift/drop state machine tests through `GameState`

use tui_ballsort::core::{Board, ClickOutcome, GameState, GeometryConfig, LiftPhase};
use tui_ballsort::types::{Ball, Slot, SlotRef, BLUE, FRAME_MS, GREEN, RED};

fn r() -> Slot {
    Some(Ball::new(RED))
}

fn b() -> Slot {
    Some(Ball::new(BLUE))
}

fn g() -> Slot {
    Some(Ball::new(GREEN))
}

fn game(lanes: Vec<Vec<Slot>>) -> GameState {
    GameState::new(
        Board::from_lanes(lanes).unwrap(),
        (1000.0, 800.0),
        GeometryConfig::PIXELS,
    )
}

fn settle(gs: &mut GameState) {
    for _ in 0..100 {
        if !gs.tick(FRAME_MS) {
            return;
        }
    }
    panic!("animation never settled");
}

#[test]
fn test_click_empty_lane_while_idle_is_ignored() {
    let mut gs = game(vec![vec![r(), None], vec![None, None]]);
    assert_eq!(gs.click_lane(1).unwrap(), ClickOutcome::Ignored);
    assert_eq!(gs.lift().phase(), LiftPhase::Idle);
}

#[test]
fn test_lift_then_cancel_returns_to_idle() {
    let mut gs = game(vec![vec![r(), b()], vec![None, None]]);

    assert_eq!(gs.click_lane(0).unwrap(), ClickOutcome::Lifting { lane: 0 });
    settle(&mut gs);
    assert_eq!(gs.lift().phase(), LiftPhase::Lifted { lane: 0 });

    assert_eq!(
        gs.click_lane(0).unwrap(),
        ClickOutcome::Cancelling { lane: 0 }
    );
    settle(&mut gs);
    assert_eq!(gs.lift().phase(), LiftPhase::Idle);
    assert_eq!(gs.lift().offset_for(SlotRef::new(0, 1)), 0.0);
    assert_eq!(gs.moves(), 0);
}

#[test]
fn test_lift_and_cancel_leaves_board_untouched() {
    let mut gs = game(vec![
        vec![r(), b(), g()],
        vec![g(), None, None],
        vec![None, None, None],
    ]);
    let before = gs.board().lanes().to_vec();

    gs.click_lane(0).unwrap();
    settle(&mut gs);
    gs.click_lane(0).unwrap();
    settle(&mut gs);

    assert_eq!(gs.board().lanes(), &before[..]);
    assert_eq!(gs.lift().phase(), LiftPhase::Idle);
    assert!(!gs.is_clear());
}

#[test]
fn test_drop_moves_ball_and_goes_idle_at_once() {
    let mut gs = game(vec![vec![r(), b()], vec![None, None]]);
    gs.click_lane(0).unwrap();
    settle(&mut gs);

    let outcome = gs.click_lane(1).unwrap();
    let ClickOutcome::Moved(mv) = outcome else {
        panic!("expected a move, got {outcome:?}");
    };
    assert_eq!(mv.ball, Ball::new(BLUE));
    assert_eq!(mv.destination, SlotRef::new(1, 0));
    assert_eq!(gs.lift().phase(), LiftPhase::Idle);
    assert_eq!(gs.lift().state().animating_slot, None);
    assert_eq!(gs.moves(), 1);
}

#[test]
fn test_drop_onto_full_lane_keeps_the_lift() {
    let mut gs = game(vec![vec![r(), b()], vec![g(), r()], vec![None, None]]);
    gs.click_lane(0).unwrap();
    settle(&mut gs);

    assert_eq!(
        gs.click_lane(1).unwrap(),
        ClickOutcome::Blocked { from: 0, to: 1 }
    );
    assert_eq!(gs.lift().phase(), LiftPhase::Lifted { lane: 0 });
    assert_eq!(gs.moves(), 0);
}

#[test]
fn test_drop_while_rising_counts_as_lifted() {
    let mut gs = game(vec![vec![r(), b()], vec![None, None]]);
    gs.click_lane(0).unwrap();
    gs.tick(FRAME_MS);
    assert!(gs.lift().is_animating());

    assert!(matches!(gs.click_lane(1).unwrap(), ClickOutcome::Moved(_)));
    assert_eq!(gs.lift().phase(), LiftPhase::Idle);
}

#[test]
fn test_lifted_ball_is_drawn_above_its_rest_position() {
    let mut gs = game(vec![vec![r(), b()], vec![None, None]]);
    let rest: Vec<f64> = gs.ball_positions().iter().map(|(_, c)| c.y).collect();

    gs.click_lane(0).unwrap();
    settle(&mut gs);
    let lifted: Vec<f64> = gs.ball_positions().iter().map(|(_, c)| c.y).collect();

    assert_eq!(lifted[0], rest[0]);
    assert_eq!(lifted[1], rest[1] - gs.layout().lift_offset());
}

#[test]
fn test_resize_mid_lift_keeps_lane_and_direction() {
    let mut gs = game(vec![vec![r(), b()], vec![None, None]]);
    gs.click_lane(0).unwrap();
    gs.tick(FRAME_MS);
    let before = gs.lift().state();

    gs.resize(500.0, 400.0);
    let after = gs.lift().state();
    assert_eq!(after.lane, before.lane);
    assert_eq!(after.direction, before.direction);
    assert_eq!(after.target_offset, -gs.layout().lift_offset());

    settle(&mut gs);
    assert_eq!(gs.lift().phase(), LiftPhase::Lifted { lane: 0 });
    assert_eq!(gs.lift().state().offset, -gs.layout().lift_offset());
}
