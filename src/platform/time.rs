//! Frame pacing
//!
//! A clock is ticked once per loop iteration and reports the milliseconds
//! since the previous tick, sleeping first if the loop is running ahead of
//! its target rate.

use std::thread;
use std::time::{Duration, Instant};

/// Source of per-tick elapsed time
pub trait Clock {
    /// Wait for the next frame and return milliseconds since the last call
    fn tick(&mut self) -> u32;
}

/// Wall clock capped at a target frame rate
#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(target_hz: u32) -> Self {
        Self {
            interval: Duration::from_secs(1) / target_hz.max(1),
            last: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) -> u32 {
        let spent = self.last.elapsed();
        if spent < self.interval {
            thread::sleep(self.interval - spent);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX)
    }
}

/// Clock that advances a fixed step without sleeping (headless runs, tests)
#[derive(Debug, Clone, Copy)]
pub struct ManualClock {
    step_ms: u32,
    total_ms: u64,
}

impl ManualClock {
    pub fn new(step_ms: u32) -> Self {
        Self {
            step_ms,
            total_ms: 0,
        }
    }

    /// Simulated time handed out so far
    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }
}

impl Clock for ManualClock {
    fn tick(&mut self) -> u32 {
        self.total_ms += u64::from(self.step_ms);
        self.step_ms
    }
}
