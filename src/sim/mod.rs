//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per rendered frame, driven by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod animation;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::AnimationState;
pub use rect::Rect;
pub use state::{Actor, GameState, MovementPolicy, Score, SweepDirection, WorldBounds};
pub use tick::{
    FrameEvents, GameEvent, HeldKeys, PointerState, ScoreCause, TickInput, advance_tick,
};
