//! Ocean Arcade - a small 2D arcade loop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, collisions, score, animation)
//! - `settings`: Data-driven tuning and demo presets
//! - `renderer`: Presentation layer that turns a frame into draw commands
//! - `platform`: Clock and input seams
//! - `session`: Frame loop and scenes

pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;

pub use settings::{ConfigError, DemoVariant, Settings};
pub use sim::{FrameEvents, GameState, TickInput, advance_tick};

/// Game configuration constants
pub mod consts {
    /// World dimensions (pixels)
    pub const WORLD_WIDTH: i32 = 800;
    pub const WORLD_HEIGHT: i32 = 600;
    /// Upper bound for world dimensions and speeds, so edge and step
    /// arithmetic stays far from `i32` overflow
    pub const MAX_WORLD_EXTENT: i32 = 1 << 20;

    /// Target frame rate of the session loop
    pub const TICK_RATE_HZ: u32 = 30;

    /// Player (shark) defaults
    pub const PLAYER_SPEED: i32 = 8;
    pub const PLAYER_WIDTH: i32 = 96;
    pub const PLAYER_HEIGHT: i32 = 48;
    /// Animation frame duration in milliseconds
    pub const PLAYER_FRAME_DURATION_MS: u32 = 250;

    /// Target (shrimp) defaults
    pub const TARGET_SPEED: i32 = 6;
    /// The refactored demo sweeps faster
    pub const TARGET_SPEED_FAST: i32 = 10;
    pub const TARGET_WIDTH: i32 = 32;
    pub const TARGET_HEIGHT: i32 = 24;
    /// Initial cross-axis centre of the target
    pub const TARGET_START_CENTER_Y: i32 = 100;

    /// Respawn keeps the target this far from the cross-axis edges
    pub const RESPAWN_INSET: i32 = 20;

    /// Points awarded per scoring event
    pub const SCORE_PER_CATCH: u64 = 1;

    /// Colours (RGB)
    pub const BLACK: [u8; 3] = [0, 0, 0];
    pub const WHITE: [u8; 3] = [255, 255, 255];
}
