//! Session module - scene flow around puzzle rounds
//!
//! Three scenes, each with an enter hook:
//!
//! - **Title**: pick a difficulty, then start
//! - **Game**: entering generates a fresh round; a cleared board moves on to End
//! - **End**: retry (or start) or go back to the title
//!
//! Regenerating re-enters Game, so it draws new dimensions as well as a new
//! shuffle.

use tracing::{debug, info};

use crate::game_state::GameState;
use crate::geometry::GeometryConfig;
use crate::lift::ClickOutcome;
use crate::rng::SimpleRng;
use crate::types::{Color, Difficulty, PuzzleError, UiAction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    Title,
    Game,
    End,
}

impl Scene {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scene::Title => "title",
            Scene::Game => "game",
            Scene::End => "end",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    scene: Scene,
    difficulty: Difficulty,
    game: Option<GameState>,
    rng: SimpleRng,
    palette: Vec<Color>,
    geometry: GeometryConfig,
    viewport: (f64, f64),
}

impl Session {
    /// A session sitting on the title screen.
    pub fn new(
        seed: u32,
        difficulty: Difficulty,
        palette: Vec<Color>,
        geometry: GeometryConfig,
        viewport: (f64, f64),
    ) -> Self {
        Self {
            scene: Scene::Title,
            difficulty,
            game: None,
            rng: SimpleRng::new(seed),
            palette,
            geometry,
            viewport,
        }
    }

    pub fn scene(&self) -> Scene {
        self.scene
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn game(&self) -> Option<&GameState> {
        self.game.as_ref()
    }

    pub fn viewport(&self) -> (f64, f64) {
        self.viewport
    }

    /// Apply a button or keyboard action. Actions that do not apply to the
    /// current scene are ignored.
    pub fn apply_action(&mut self, action: UiAction) -> Result<(), PuzzleError> {
        match (self.scene, action) {
            (Scene::Title, UiAction::SelectDifficulty(difficulty)) => {
                self.difficulty = difficulty;
                debug!(difficulty = difficulty.as_str(), "difficulty selected");
                Ok(())
            }
            (Scene::Title, UiAction::Start)
            | (Scene::Game, UiAction::Regenerate)
            | (Scene::End, UiAction::Retry | UiAction::Start) => self.enter(Scene::Game),
            (Scene::Game | Scene::End, UiAction::BackToTitle) => self.enter(Scene::Title),
            _ => Ok(()),
        }
    }

    /// Start a round on a prepared state instead of a generated one.
    pub fn start_with(&mut self, game: GameState) {
        info!(from = self.scene.as_str(), to = Scene::Game.as_str(), "scene change");
        self.game = Some(game);
        self.scene = Scene::Game;
    }

    fn enter(&mut self, scene: Scene) -> Result<(), PuzzleError> {
        match scene {
            Scene::Title => self.game = None,
            Scene::Game => {
                let game = GameState::generate(
                    self.difficulty,
                    &self.palette,
                    &mut self.rng,
                    self.viewport,
                    self.geometry,
                )?;
                self.game = Some(game);
            }
            // The finished board stays around for the end screen.
            Scene::End => {}
        }
        info!(from = self.scene.as_str(), to = scene.as_str(), "scene change");
        self.scene = scene;
        Ok(())
    }

    /// Forward a viewport click to the board while a round is running.
    pub fn click_at(&mut self, x: f64, y: f64) -> Result<ClickOutcome, PuzzleError> {
        match (self.scene, self.game.as_mut()) {
            (Scene::Game, Some(game)) => game.click_at(x, y),
            _ => Ok(ClickOutcome::Ignored),
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport = (width, height);
        if let Some(game) = self.game.as_mut() {
            game.resize(width, height);
        }
    }

    /// Advance one frame: step animations, then move on to End once cleared.
    pub fn tick(&mut self, elapsed_ms: u32) -> Result<(), PuzzleError> {
        if self.scene != Scene::Game {
            return Ok(());
        }
        let cleared = match self.game.as_mut() {
            Some(game) => {
                game.tick(elapsed_ms);
                game.is_clear()
            }
            None => false,
        };
        if cleared {
            self.enter(Scene::End)?;
        }
        Ok(())
    }
}
