//! Integration tests for the scene flow and the frame loop pieces

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use tui_ballsort::core::{Board, ClickOutcome, GameState, GeometryConfig, Scene, Session};
use tui_ballsort::input::InputHandler;
use tui_ballsort::runner::{dispatch_all, Flow};
use tui_ballsort::term::{scene_buttons, Viewport};
use tui_ballsort::types::{
    Ball, Difficulty, InputEvent, UiAction, BLUE, DEFAULT_PALETTE, FRAME_MS, RED,
};

fn terminal_session(seed: u32, viewport: Viewport) -> Session {
    Session::new(
        seed,
        Difficulty::Easy,
        DEFAULT_PALETTE.to_vec(),
        GeometryConfig::TERMINAL,
        viewport.units(),
    )
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn dispatch(session: &mut Session, viewport: &mut Viewport, events: &[InputEvent]) -> Flow {
    dispatch_all(session, viewport, events.iter().copied())
}

#[test]
fn test_game_lifecycle_with_keys() {
    let mut viewport = Viewport::new(100, 30);
    let mut session = terminal_session(5, viewport);
    let mut input = InputHandler::new();

    input.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('2'))));
    input.handle_event(&Event::Key(KeyEvent::from(KeyCode::Enter)));
    let events = input.drain();
    dispatch(&mut session, &mut viewport, &events);

    assert_eq!(session.scene(), Scene::Game);
    assert_eq!(session.difficulty(), Difficulty::Normal);
    let board = session.game().unwrap().board();
    assert!(Difficulty::Normal.circle_range().contains(&board.circle_num()));

    input.handle_event(&Event::Key(KeyEvent::from(KeyCode::Esc)));
    let events = input.drain();
    dispatch(&mut session, &mut viewport, &events);
    assert_eq!(session.scene(), Scene::Title);
}

#[test]
fn test_title_buttons_respond_to_mouse() {
    let mut viewport = Viewport::new(100, 30);
    let mut session = terminal_session(5, viewport);

    let buttons = scene_buttons(&session, viewport.units());
    let hard = buttons
        .iter()
        .find(|b| b.action == UiAction::SelectDifficulty(Difficulty::Hard))
        .unwrap();
    let (hx, hy) = hard.rect.center();
    let start = buttons.iter().find(|b| b.action == UiAction::Start).unwrap();
    let (sx, sy) = start.rect.center();

    let mut input = InputHandler::new();
    input.handle_event(&click(hx as u16, (hy / 2.0) as u16));
    input.handle_event(&click(sx as u16, (sy / 2.0) as u16));
    let events = input.drain();
    dispatch(&mut session, &mut viewport, &events);

    assert_eq!(session.scene(), Scene::Game);
    assert_eq!(session.difficulty(), Difficulty::Hard);
}

#[test]
fn test_same_seed_same_rounds() {
    let vp = Viewport::new(100, 30);
    let mut a = terminal_session(77, vp);
    let mut b = terminal_session(77, vp);
    for _ in 0..5 {
        a.apply_action(UiAction::Start).unwrap();
        b.apply_action(UiAction::Start).unwrap();
        let la: Vec<_> = a.game().unwrap().board().lanes().to_vec();
        let lb: Vec<_> = b.game().unwrap().board().lanes().to_vec();
        assert_eq!(la, lb);
        a.apply_action(UiAction::BackToTitle).unwrap();
        b.apply_action(UiAction::BackToTitle).unwrap();
    }
}

#[test]
fn test_regenerate_replaces_the_board() {
    let vp = Viewport::new(100, 30);
    let mut session = terminal_session(3, vp);
    session.apply_action(UiAction::Start).unwrap();

    let mut changed = false;
    for _ in 0..10 {
        let before = session.game().unwrap().board().lanes().to_vec();
        session.apply_action(UiAction::Regenerate).unwrap();
        assert_eq!(session.scene(), Scene::Game);
        assert_eq!(session.game().unwrap().moves(), 0);
        changed |= session.game().unwrap().board().lanes() != before.as_slice();
    }
    assert!(changed);
}

#[test]
fn test_solving_by_mouse_reaches_end_scene() {
    let mut viewport = Viewport::new(100, 30);
    let mut session = terminal_session(1, viewport);
    let red = Some(Ball::new(RED));
    let blue = Some(Ball::new(BLUE));
    let board = Board::from_lanes(vec![
        vec![red, red, blue],
        vec![blue, blue, None],
        vec![red, None, None],
    ])
    .unwrap();
    session.start_with(GameState::new(
        board,
        viewport.units(),
        GeometryConfig::TERMINAL,
    ));

    let lane_cell = |session: &Session, lane: usize| {
        let (x, y) = session.game().unwrap().layout().lanes()[lane].center();
        (x as u16, (y / 2.0) as u16)
    };

    // Lift the blue ball from lane 0 and drop it on lane 1.
    let (c0, r0) = lane_cell(&session, 0);
    let (c1, r1) = lane_cell(&session, 1);
    let mut input = InputHandler::new();
    input.handle_event(&click(c0, r0));
    let events = input.drain();
    dispatch(&mut session, &mut viewport, &events);
    for _ in 0..20 {
        session.tick(FRAME_MS).unwrap();
    }

    input.handle_event(&click(c1, r1));
    let events = input.drain();
    dispatch(&mut session, &mut viewport, &events);
    assert!(session.game().unwrap().is_clear());
    assert_eq!(session.scene(), Scene::Game);

    session.tick(FRAME_MS).unwrap();
    assert_eq!(session.scene(), Scene::End);

    session.apply_action(UiAction::Retry).unwrap();
    assert_eq!(session.scene(), Scene::Game);
    assert!(!session.game().unwrap().is_clear());
}

#[test]
fn test_resize_relayouts_running_round() {
    let mut viewport = Viewport::new(100, 30);
    let mut session = terminal_session(9, viewport);
    session.apply_action(UiAction::Start).unwrap();
    let before = session.game().unwrap().layout().stage();

    let mut input = InputHandler::new();
    input.handle_event(&Event::Resize(60, 20));
    input.handle_event(&Event::Resize(200, 60));
    let events = input.drain();
    assert_eq!(events.len(), 1, "consecutive resizes collapse");
    dispatch(&mut session, &mut viewport, &events);

    assert_eq!(viewport, Viewport::new(200, 60));
    assert_eq!(session.viewport(), (200.0, 120.0));
    assert_ne!(session.game().unwrap().layout().stage(), before);
}

#[test]
fn test_clicks_outside_the_stage_are_ignored() {
    let vp = Viewport::new(100, 30);
    let mut session = terminal_session(4, vp);
    session.apply_action(UiAction::Start).unwrap();
    assert_eq!(session.click_at(0.5, 1.0).unwrap(), ClickOutcome::Ignored);
}

#[test]
fn test_failed_generation_does_not_end_the_loop() {
    let mut viewport = Viewport::new(100, 30);
    let mut session = Session::new(
        2,
        Difficulty::Easy,
        vec![RED],
        GeometryConfig::TERMINAL,
        viewport.units(),
    );
    let mut input = InputHandler::new();

    input.handle_event(&Event::Key(KeyEvent::from(KeyCode::Enter)));
    let events = input.drain();
    assert_eq!(dispatch(&mut session, &mut viewport, &events), Flow::Continue);
    assert_eq!(session.scene(), Scene::Title);

    input.handle_event(&Event::Key(KeyEvent::from(KeyCode::Char('q'))));
    let events = input.drain();
    assert_eq!(dispatch(&mut session, &mut viewport, &events), Flow::Quit);
}
