//! Runner configuration.
//!
//! Values come from `BALLSORT_*` environment variables first; command line
//! flags override them.
//!
//! | Variable | Flag | Default |
//! |----------|------|---------|
//! | `BALLSORT_DIFFICULTY` | `--difficulty` | `easy` |
//! | `BALLSORT_SEED` | `--seed` | derived from the clock |
//! | `BALLSORT_FPS` | `--fps` | 60 |
//! | `BALLSORT_LOG_PATH` | `--log-path` | none (logging off) |

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::types::{Difficulty, DEFAULT_FPS};

const MIN_FPS: u32 = 10;
const MAX_FPS: u32 = 240;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub difficulty: Difficulty,
    /// Fixed seed for reproducible boards
    pub seed: Option<u32>,
    pub fps: u32,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Easy,
            seed: None,
            fps: DEFAULT_FPS,
            log_path: None,
        }
    }
}

impl AppConfig {
    /// Create from environment variables. Unparseable values fall back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let difficulty = lookup("BALLSORT_DIFFICULTY")
            .and_then(|s| Difficulty::from_str(&s))
            .unwrap_or(defaults.difficulty);

        let seed = lookup("BALLSORT_SEED").and_then(|s| s.trim().parse().ok());

        let fps = lookup("BALLSORT_FPS")
            .and_then(|s| s.trim().parse().ok())
            .map(clamp_fps)
            .unwrap_or(defaults.fps);

        let log_path = lookup("BALLSORT_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) })
            .map(PathBuf::from);

        Self {
            difficulty,
            seed,
            fps,
            log_path,
        }
    }

    /// Apply command line overrides.
    pub fn merge_cli(mut self, cli: &Cli) -> Self {
        if let Some(difficulty) = cli.difficulty {
            self.difficulty = difficulty;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
        if let Some(fps) = cli.fps {
            self.fps = clamp_fps(fps);
        }
        if cli.log_path.is_some() {
            self.log_path = cli.log_path.clone();
        }
        self
    }

    /// Wall-clock length of one frame of the terminal loop.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.fps.max(1) as u64)
    }
}

fn clamp_fps(fps: u32) -> u32 {
    fps.clamp(MIN_FPS, MAX_FPS)
}

fn parse_difficulty(s: &str) -> Result<Difficulty, String> {
    Difficulty::from_str(s).ok_or_else(|| format!("unknown difficulty '{s}' (easy, normal, hard)"))
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "tui-ballsort")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sort colored balls into single-color lanes", long_about = None)]
pub struct Cli {
    /// Difficulty preselected on the title screen (easy, normal, hard)
    #[arg(short, long, value_parser = parse_difficulty)]
    pub difficulty: Option<Difficulty>,

    /// Seed for board generation
    #[arg(short, long)]
    pub seed: Option<u32>,

    /// Frames per second of the render loop
    #[arg(long)]
    pub fps: Option<u32>,

    /// Write logs to this file
    #[arg(long)]
    pub log_path: Option<PathBuf>,
}
