//! Frame loop
//!
//! `poll input -> wait for clock -> step scene -> draw`, until the input
//! source asks to quit or the tick limit is reached.

use serde::{Deserialize, Serialize};

use crate::platform::{Clock, InputFrame, InputSource};
use crate::renderer::{DrawCommand, FontSource, Hud, score_screen, title_screen};
use crate::settings::{ConfigError, Settings};
use crate::sim::{FrameEvents, GameState, Score, TickInput};

/// Consumer of draw lists
pub trait Renderer {
    fn draw(&mut self, commands: &[DrawCommand]);
}

/// Something the loop can step once per frame
pub trait Scene {
    /// Advance one tick and return what to draw
    fn step(&mut self, input: &TickInput, elapsed_ms: u32) -> Vec<DrawCommand>;

    /// Current score (0 for scenes that do not keep one)
    fn score(&self) -> u64 {
        0
    }
}

/// The shark-and-shrimp game
#[derive(Debug, Clone)]
pub struct OceanScene {
    state: GameState,
    hud: Hud,
    last_frame: Option<FrameEvents>,
}

impl OceanScene {
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        Ok(Self::from_state(GameState::new(settings)?, settings))
    }

    pub fn from_state(state: GameState, settings: &Settings) -> Self {
        Self {
            state,
            hud: Hud::new(settings),
            last_frame: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    /// Events of the most recent tick
    pub fn last_frame(&self) -> Option<&FrameEvents> {
        self.last_frame.as_ref()
    }
}

impl Scene for OceanScene {
    fn step(&mut self, input: &TickInput, elapsed_ms: u32) -> Vec<DrawCommand> {
        let frame = self.state.advance_tick(input, elapsed_ms);
        if frame.scored {
            log::info!("Caught! score={}", frame.score);
        }
        let commands = self.hud.draw_list(&frame);
        self.last_frame = Some(frame);
        commands
    }

    fn score(&self) -> u64 {
        self.state.score.value()
    }
}

/// Score counter bumped by the action key
#[derive(Debug, Clone, Default)]
pub struct ScoreScene {
    score: Score,
}

impl Scene for ScoreScene {
    fn step(&mut self, input: &TickInput, _elapsed_ms: u32) -> Vec<DrawCommand> {
        if input.action {
            let total = self.score.award();
            log::debug!("Score bumped to {total}");
        }
        score_screen(self.score.value())
    }

    fn score(&self) -> u64 {
        self.score.value()
    }
}

/// One static line of text
#[derive(Debug, Clone)]
pub struct TitleScene {
    commands: Vec<DrawCommand>,
}

impl TitleScene {
    pub fn new(text: &str, font: FontSource, settings: &Settings) -> Self {
        let world = glam::IVec2::new(settings.world_width, settings.world_height);
        Self {
            commands: title_screen(text, font, world),
        }
    }
}

impl Scene for TitleScene {
    fn step(&mut self, _input: &TickInput, _elapsed_ms: u32) -> Vec<DrawCommand> {
        self.commands.clone()
    }
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub ticks: u64,
    pub score: u64,
    /// Input source asked to stop (as opposed to hitting the tick limit)
    pub quit_requested: bool,
}

/// Run `scene` until the input source quits or `max_ticks` ticks have run
pub fn run_session(
    scene: &mut dyn Scene,
    input: &mut dyn InputSource,
    renderer: &mut dyn Renderer,
    clock: &mut dyn Clock,
    max_ticks: Option<u64>,
) -> SessionSummary {
    let mut last_frame: Vec<DrawCommand> = Vec::new();
    let mut ticks = 0u64;
    let mut quit_requested = false;

    log::info!("Session starting (max_ticks={max_ticks:?})");

    while max_ticks.is_none_or(|max| ticks < max) {
        let tick_input = match input.poll(&last_frame) {
            InputFrame::Tick(tick_input) => tick_input,
            InputFrame::Quit => {
                quit_requested = true;
                break;
            }
        };

        let elapsed_ms = clock.tick();
        last_frame = scene.step(&tick_input, elapsed_ms);
        renderer.draw(&last_frame);
        ticks += 1;
    }

    let summary = SessionSummary {
        ticks,
        score: scene.score(),
        quit_requested,
    };
    log::info!(
        "Session ended after {} ticks, score {}",
        summary.ticks,
        summary.score
    );
    summary
}
