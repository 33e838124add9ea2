//! Input polling
//!
//! Whatever owns the window turns its events into one [`InputFrame`] per
//! tick. The source sees the previous frame's draw list, the same view a
//! player would have.

use std::collections::VecDeque;

use crate::renderer::DrawCommand;
use crate::sim::TickInput;

/// Result of polling input for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFrame {
    /// Keep running with this snapshot
    Tick(TickInput),
    /// Window closed or escape pressed
    Quit,
}

/// Per-tick input provider
pub trait InputSource {
    fn poll(&mut self, last_frame: &[DrawCommand]) -> InputFrame;
}

/// Replays a fixed list of frames, then quits
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<InputFrame>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Repeat `input` for `ticks` ticks
    pub fn repeat(input: TickInput, ticks: usize) -> Self {
        Self::new(std::iter::repeat_n(InputFrame::Tick(input), ticks))
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _last_frame: &[DrawCommand]) -> InputFrame {
        self.frames.pop_front().unwrap_or(InputFrame::Quit)
    }
}
