//! Game settings and demo presets
//!
//! Loaded from an optional JSON file; every field has a default so partial
//! files are fine.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::SweepDirection;

/// Which flavour of the ocean demo to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DemoVariant {
    /// Catch the shrimp with the shark or by clicking on it
    #[default]
    #[value(alias = "collisions")]
    Mouse,
    /// Keyboard only, faster shrimp
    Refactored,
}

impl DemoVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DemoVariant::Mouse => "mouse",
            DemoVariant::Refactored => "refactored",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "mouse" | "collisions" => Some(DemoVariant::Mouse),
            "refactored" => Some(DemoVariant::Refactored),
            _ => None,
        }
    }

    /// Whether clicking the target scores
    pub fn pointer_scoring(&self) -> bool {
        match self {
            DemoVariant::Mouse => true,
            DemoVariant::Refactored => false,
        }
    }

    /// Target sweep speed (pixels/tick)
    pub fn target_speed(&self) -> i32 {
        match self {
            DemoVariant::Mouse => TARGET_SPEED,
            DemoVariant::Refactored => TARGET_SPEED_FAST,
        }
    }

    /// Instruction line shown at the bottom of the screen
    pub fn instructions(&self) -> &'static str {
        match self {
            DemoVariant::Mouse => "WASD to move shark. Catch or click on as many shrimp as you can!",
            DemoVariant::Refactored => "WASD to move shark. Catch as many shrimp as you can!",
        }
    }
}

/// Failure to produce a usable [`Settings`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Demo preset these settings were derived from
    pub variant: DemoVariant,

    // === World ===
    pub world_width: i32,
    pub world_height: i32,
    /// Target frame rate for the session loop
    pub tick_rate_hz: u32,

    // === Player ===
    /// Pixels per tick
    pub player_speed: i32,
    pub player_size: [i32; 2],
    /// Sprite keys cycled by the player animation
    pub player_frames: Vec<String>,
    pub frame_duration_ms: u32,

    // === Target ===
    /// Pixels per tick
    pub target_speed: i32,
    pub target_size: [i32; 2],
    pub target_sprite: String,
    pub target_direction: SweepDirection,
    /// Cross-axis centre used for the very first sweep
    pub target_start_cross: i32,
    /// Respawn keeps the target centre at least this far from the edges
    pub respawn_inset: i32,

    // === Rules ===
    /// Clicking the target scores
    pub pointer_scoring: bool,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_preset(DemoVariant::default())
    }
}

impl Settings {
    /// Create settings from a demo preset
    pub fn from_preset(variant: DemoVariant) -> Self {
        Self {
            variant,

            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            tick_rate_hz: TICK_RATE_HZ,

            player_speed: PLAYER_SPEED,
            player_size: [PLAYER_WIDTH, PLAYER_HEIGHT],
            player_frames: vec!["shark01".to_string(), "shark02".to_string()],
            frame_duration_ms: PLAYER_FRAME_DURATION_MS,

            target_speed: variant.target_speed(),
            target_size: [TARGET_WIDTH, TARGET_HEIGHT],
            target_sprite: "shrimp".to_string(),
            target_direction: SweepDirection::Left,
            target_start_cross: TARGET_START_CENTER_Y,
            respawn_inset: RESPAWN_INSET,

            pointer_scoring: variant.pointer_scoring(),
            seed: None,
        }
    }

    /// Apply a demo preset (updates preset-dependent settings only)
    pub fn apply_preset(&mut self, variant: DemoVariant) {
        self.variant = variant;
        self.target_speed = variant.target_speed();
        self.pointer_scoring = variant.pointer_scoring();
    }

    /// Parse and validate settings from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Check that the simulation invariants can hold with these values
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::Invalid(msg));

        if self.world_width <= 0 || self.world_height <= 0 {
            return invalid(format!(
                "world must be non-empty, got {}x{}",
                self.world_width, self.world_height
            ));
        }
        if self.world_width > MAX_WORLD_EXTENT || self.world_height > MAX_WORLD_EXTENT {
            return invalid(format!(
                "world {}x{} exceeds the {MAX_WORLD_EXTENT} pixel limit",
                self.world_width, self.world_height
            ));
        }
        if self.tick_rate_hz == 0 {
            return invalid("tick_rate_hz must be positive".to_string());
        }
        if self.frame_duration_ms == 0 {
            return invalid("frame_duration_ms must be positive".to_string());
        }
        if self.player_frames.is_empty() {
            return invalid("player_frames must name at least one frame".to_string());
        }
        for (name, speed) in [("player", self.player_speed), ("target", self.target_speed)] {
            if !(0..=MAX_WORLD_EXTENT).contains(&speed) {
                return invalid(format!(
                    "{name} speed {speed} outside 0..={MAX_WORLD_EXTENT}"
                ));
            }
        }
        for (name, [w, h]) in [("player", self.player_size), ("target", self.target_size)] {
            if w <= 0 || h <= 0 {
                return invalid(format!("{name} size must be positive, got {w}x{h}"));
            }
            if w > self.world_width || h > self.world_height {
                return invalid(format!("{name} size {w}x{h} does not fit the world"));
            }
        }

        let cross_extent = if self.target_direction.is_horizontal() {
            self.world_height
        } else {
            self.world_width
        };
        if self.respawn_inset < 0 || self.respawn_inset > cross_extent / 2 {
            return invalid(format!(
                "respawn_inset {} leaves no room across {}",
                self.respawn_inset, cross_extent
            ));
        }
        if !(0..=cross_extent).contains(&self.target_start_cross) {
            return invalid(format!(
                "target_start_cross {} outside 0..={}",
                self.target_start_cross, cross_extent
            ));
        }

        Ok(())
    }

    /// Milliseconds between ticks at the target rate
    pub fn tick_interval_ms(&self) -> u32 {
        1000 / self.tick_rate_hz.max(1)
    }
}
