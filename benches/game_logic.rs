use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_ballsort::core::{Board, GameState, GeometryConfig, Session, SimpleRng};
use tui_ballsort::term::{FrameBuffer, GameView, Viewport};
use tui_ballsort::types::{Difficulty, UiAction, DEFAULT_PALETTE, FRAME_MS};

fn bench_generate(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_hard_board", |b| {
        b.iter(|| Board::generate(black_box(11), black_box(11), &DEFAULT_PALETTE, &mut rng))
    });
}

fn bench_apply_move(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let board = Board::generate(9, 8, &DEFAULT_PALETTE, &mut rng).unwrap();

    c.bench_function("apply_move_ring", |b| {
        b.iter(|| {
            let mut board = board.clone();
            for from in 0..board.lane_num() {
                let to = (from + 1) % board.lane_num();
                let _ = board.apply_move(black_box(from), black_box(to));
            }
            board.is_clear()
        })
    });
}

fn bench_lift_animation(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);
    let state = GameState::generate(
        Difficulty::Normal,
        &DEFAULT_PALETTE,
        &mut rng,
        (1280.0, 720.0),
        GeometryConfig::PIXELS,
    )
    .unwrap();

    c.bench_function("lift_and_cancel", |b| {
        b.iter(|| {
            let mut state = state.clone();
            let lane = (0..state.board().lane_num())
                .find(|&l| state.board().is_legal_lift(l))
                .unwrap_or(0);
            let _ = state.click_lane(lane);
            while state.tick(black_box(FRAME_MS)) {}
            let _ = state.click_lane(lane);
            while state.tick(black_box(FRAME_MS)) {}
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let vp = Viewport::new(160, 48);
    let mut session = Session::new(
        12345,
        Difficulty::Hard,
        DEFAULT_PALETTE.to_vec(),
        GeometryConfig::TERMINAL,
        vp.units(),
    );
    let _ = session.apply_action(UiAction::Start);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(vp.width, vp.height);

    c.bench_function("render_hard_board_160x48", |b| {
        b.iter(|| {
            view.render_into(black_box(&session), vp, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_apply_move,
    bench_lift_animation,
    bench_render
);
criterion_main!(benches);
