//! Terminal ball sort runner (default binary).
//!
//! Uses crossterm for keyboard and mouse input and the framebuffer-based
//! renderer from `tui_ballsort::term`.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::Parser;
use crossterm::event;
use tracing::{error, info, warn};

use tui_ballsort::config::{AppConfig, Cli};
use tui_ballsort::core::{GeometryConfig, Session};
use tui_ballsort::input::InputHandler;
use tui_ballsort::logging;
use tui_ballsort::runner::{advance, dispatch_all, Flow};
use tui_ballsort::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_ballsort::types::DEFAULT_PALETTE;

/// Longest step fed to the animation after a stall.
const MAX_STEP_MS: u32 = 100;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::from_env().merge_cli(&cli);
    logging::init(config.log_path.as_deref())?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        error!(error = %err, "runner failed");
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &AppConfig) -> Result<()> {
    let seed = config.seed.unwrap_or_else(clock_seed);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    let mut session = Session::new(
        seed,
        config.difficulty,
        DEFAULT_PALETTE.to_vec(),
        GeometryConfig::TERMINAL,
        viewport.units(),
    );
    info!(seed, difficulty = config.difficulty.as_str(), fps = config.fps, "starting");

    let view = GameView::default();
    let mut input = InputHandler::new();
    let mut fb = FrameBuffer::new(w, h);
    let frame = config.frame_duration();
    let mut last_tick = Instant::now();
    let mut reported_drops = 0;

    loop {
        view.render_into(&session, viewport, &mut fb);
        term.draw(&fb)?;

        // Collect input until the next frame is due.
        while !input.is_full() {
            let timeout = frame
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);
            if !event::poll(timeout)? {
                break;
            }
            input.handle_event(&event::read()?);
        }

        match dispatch_all(&mut session, &mut viewport, input.drain()) {
            Flow::Quit => return Ok(()),
            Flow::Redraw => term.invalidate(),
            Flow::Continue => {}
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame {
            last_tick = Instant::now();
            let step = (elapsed.as_millis() as u32).min(MAX_STEP_MS);
            advance(&mut session, step);
        }

        if input.dropped() > reported_drops {
            reported_drops = input.dropped();
            warn!(dropped = reported_drops, "input events dropped");
        }
    }
}

/// Seed from the wall clock when none was configured.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
