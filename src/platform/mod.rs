//! Platform abstraction layer
//!
//! Handles the outside-world seams for:
//! - Time/ticks (frame pacing)
//! - Input events (per-tick snapshots, quit requests)

pub mod input;
pub mod time;

pub use input::{InputFrame, InputSource, ScriptedInput};
pub use time::{Clock, FrameClock, ManualClock};
