//! Fixed-duration sprite frame cycling
//!
//! The accumulator is reset to zero when the frame changes rather than
//! decremented by one duration, so a single long tick advances at most one
//! frame and any overshoot is dropped.

use serde::{Deserialize, Serialize};

/// Cycling frame state for an animated actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Frame keys handed to the renderer, in playback order
    frames: Vec<String>,
    /// Current frame, always in [0, frames.len())
    index: usize,
    /// Milliseconds accumulated since the last frame change
    elapsed_ms: u64,
    /// Frame is held until the accumulator exceeds this
    frame_duration_ms: u32,
}

impl AnimationState {
    /// Returns `None` for an empty frame list
    pub fn new(frames: Vec<String>, frame_duration_ms: u32) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self {
            frames,
            index: 0,
            elapsed_ms: 0,
            frame_duration_ms,
        })
    }

    /// Accumulate `elapsed_ms` and step one frame (wrapping) once the
    /// accumulator strictly exceeds the frame duration.
    ///
    /// Returns true if the frame changed.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.elapsed_ms = self.elapsed_ms.saturating_add(u64::from(elapsed_ms));
        if self.elapsed_ms > u64::from(self.frame_duration_ms) {
            self.index = (self.index + 1) % self.frames.len();
            self.elapsed_ms = 0;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Key of the frame to draw
    pub fn current_frame(&self) -> &str {
        // index is kept in range by `advance`
        &self.frames[self.index]
    }
}
