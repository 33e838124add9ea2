//! Ocean Arcade entry point
//!
//! Runs a headless session: an autopilot plays the demo and a logging
//! renderer reports what would be drawn.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use ocean_arcade::platform::{Clock, FrameClock, InputFrame, InputSource, ManualClock};
use ocean_arcade::renderer::{DrawCommand, FontSource};
use ocean_arcade::session::{OceanScene, Renderer, Scene, ScoreScene, TitleScene, run_session};
use ocean_arcade::sim::{HeldKeys, PointerState, Rect, TickInput};
use ocean_arcade::{DemoVariant, Settings};

/// Which demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    /// Shark chases shrimp
    Ocean,
    /// Score counter bumped by the action key
    Score,
    /// One line of text in a custom font
    Title,
}

#[derive(Debug, Parser)]
#[command(version, about = "Headless runner for the ocean arcade demos")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Demo::Ocean)]
    demo: Demo,
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Demo preset
    #[arg(long, value_enum)]
    variant: Option<DemoVariant>,
    #[arg(long)]
    seed: Option<u64>,
    /// Stop after this many ticks
    #[arg(long, default_value_t = 900)]
    ticks: u64,
    /// Pace ticks against the wall clock instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Font file for the title demo
    #[arg(long)]
    font: Option<PathBuf>,
    /// Text for the title demo
    #[arg(long, default_value = "Hello, Ocean!")]
    text: String,
    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Plays by looking at the last frame: steers the shark toward the shrimp
/// and now and then clicks on it
struct Autopilot {
    player_key_prefix: String,
    target_key: String,
    rng: Pcg32,
    ticks: u64,
}

impl Autopilot {
    fn new(settings: &Settings, seed: u64) -> Self {
        let player_key_prefix = settings
            .player_frames
            .first()
            .map(|k| k.trim_end_matches(|c: char| c.is_ascii_digit()).to_string())
            .unwrap_or_default();
        Self {
            player_key_prefix,
            target_key: settings.target_sprite.clone(),
            rng: Pcg32::seed_from_u64(seed),
            ticks: 0,
        }
    }

    fn find(&self, frame: &[DrawCommand]) -> (Option<Rect>, Option<Rect>) {
        let mut player = None;
        let mut target = None;
        for command in frame {
            if let DrawCommand::Sprite { key, rect } = command {
                if *key == self.target_key {
                    target = Some(*rect);
                } else if key.starts_with(&self.player_key_prefix) {
                    player = Some(*rect);
                }
            }
        }
        (player, target)
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, last_frame: &[DrawCommand]) -> InputFrame {
        self.ticks += 1;
        let mut input = TickInput {
            // Score demo: press the action key about once a second
            action: self.ticks % 30 == 0,
            ..Default::default()
        };

        if let (Some(player), Some(target)) = self.find(last_frame) {
            let to_target = target.center() - player.center();
            input.keys = HeldKeys {
                up: to_target.y < 0,
                down: to_target.y > 0,
                left: to_target.x < 0,
                right: to_target.x > 0,
            };
            // Occasional click somewhere near the shrimp
            if self.rng.random_bool(0.05) {
                let jitter = IVec2::new(
                    self.rng.random_range(-8..=8),
                    self.rng.random_range(-8..=8),
                );
                input.pointer = PointerState {
                    pos: target.center() + jitter,
                    pressed: true,
                };
            }
        }

        InputFrame::Tick(input)
    }
}

/// Logs draw lists instead of painting them
#[derive(Default)]
struct LogRenderer {
    last_text: Vec<String>,
}

impl Renderer for LogRenderer {
    fn draw(&mut self, commands: &[DrawCommand]) {
        let text: Vec<String> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect();
        if text != self.last_text {
            for line in &text {
                log::info!("[text] {line}");
            }
            self.last_text = text;
        }
        log::trace!("Drew {} commands", commands.len());
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn load_settings(cli: &Cli) -> Result<Settings, Box<dyn Error>> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(variant) = cli.variant {
        settings.apply_preset(variant);
    }
    if cli.seed.is_some() {
        settings.seed = cli.seed;
    }
    settings.validate()?;
    Ok(settings)
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::info!("Ocean Arcade (native) starting...");

    let settings = load_settings(&cli)?;

    let mut scene: Box<dyn Scene> = match cli.demo {
        Demo::Ocean => Box::new(OceanScene::new(&settings)?),
        Demo::Score => Box::new(ScoreScene::default()),
        Demo::Title => {
            let font = cli.font.clone().map_or(FontSource::Default, FontSource::File);
            Box::new(TitleScene::new(&cli.text, font, &settings))
        }
    };

    let autopilot_seed = settings.seed.unwrap_or_else(rand::random);
    let mut input = Autopilot::new(&settings, autopilot_seed);
    let mut renderer = LogRenderer::default();
    let mut clock: Box<dyn Clock> = if cli.realtime {
        Box::new(FrameClock::new(settings.tick_rate_hz))
    } else {
        Box::new(ManualClock::new(settings.tick_interval_ms()))
    };

    let summary = run_session(
        scene.as_mut(),
        &mut input,
        &mut renderer,
        clock.as_mut(),
        Some(cli.ticks),
    );
    log::info!("Summary: {}", serde_json::to_string(&summary)?);

    Ok(())
}
