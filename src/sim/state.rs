//! Game state and core simulation types
//!
//! Everything the tick function mutates lives in [`GameState`], owned by the
//! caller and passed in explicitly each tick.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::animation::AnimationState;
use super::rect::Rect;
use crate::consts::SCORE_PER_CATCH;
use crate::settings::{ConfigError, Settings};

/// Axis and heading of an autonomous sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepDirection {
    /// Enter on the right edge, leave past the left edge
    #[default]
    Left,
    /// Enter on the left edge, leave past the right edge
    Right,
    /// Enter on the bottom edge, leave past the top edge
    Up,
    /// Enter on the top edge, leave past the bottom edge
    Down,
}

impl SweepDirection {
    pub fn is_horizontal(&self) -> bool {
        matches!(self, SweepDirection::Left | SweepDirection::Right)
    }

    /// Displacement for one tick at `speed`
    pub fn step(&self, speed: i32) -> IVec2 {
        match self {
            SweepDirection::Left => IVec2::new(-speed, 0),
            SweepDirection::Right => IVec2::new(speed, 0),
            SweepDirection::Up => IVec2::new(0, -speed),
            SweepDirection::Down => IVec2::new(0, speed),
        }
    }

    /// True once the leading edge is fully past the far side of the world
    pub fn has_exited(&self, rect: &Rect, bounds: &WorldBounds) -> bool {
        match self {
            SweepDirection::Left => rect.right() < 0,
            SweepDirection::Right => rect.left() > bounds.width(),
            SweepDirection::Up => rect.bottom() < 0,
            SweepDirection::Down => rect.top() > bounds.height(),
        }
    }

    /// Park `rect` just outside the entry edge with its cross-axis centre at `cross`
    pub fn place_at_entry(&self, rect: &mut Rect, bounds: &WorldBounds, cross: i32) {
        match self {
            SweepDirection::Left => {
                rect.set_left(bounds.width());
                rect.set_center_y(cross);
            }
            SweepDirection::Right => {
                rect.set_right(0);
                rect.set_center_y(cross);
            }
            SweepDirection::Up => {
                rect.set_top(bounds.height());
                rect.set_center_x(cross);
            }
            SweepDirection::Down => {
                rect.set_bottom(0);
                rect.set_center_x(cross);
            }
        }
    }

    /// Length of the axis perpendicular to the sweep
    pub fn cross_extent(&self, bounds: &WorldBounds) -> i32 {
        if self.is_horizontal() {
            bounds.height()
        } else {
            bounds.width()
        }
    }
}

/// How an actor moves each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementPolicy {
    /// Driven by held keys, kept inside the world
    Player,
    /// Moves on its own along one axis, never clamped
    Sweep(SweepDirection),
}

/// A moving rectangular entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub rect: Rect,
    /// Pixels per tick
    pub speed: i32,
    pub policy: MovementPolicy,
}

impl Actor {
    pub fn new(rect: Rect, speed: i32, policy: MovementPolicy) -> Self {
        Self {
            rect,
            speed,
            policy,
        }
    }

    /// Move by `delta` only if the result stays inside `bounds`.
    ///
    /// A rejected move leaves the actor where it was rather than clipping it
    /// to the edge. Returns true if the actor moved.
    pub fn try_move(&mut self, delta: IVec2, bounds: &WorldBounds) -> bool {
        let moved = self.rect.translated(delta);
        if moved.is_within(&bounds.rect()) {
            self.rect = moved;
            true
        } else {
            false
        }
    }
}

/// Fixed world rectangle anchored at the origin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldBounds {
    width: i32,
    height: i32,
}

impl WorldBounds {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }
}

/// Points collected this session; never decreases
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Record one scoring event, returning the new total
    pub fn award(&mut self) -> u64 {
        self.0 = self.0.saturating_add(SCORE_PER_CATCH);
        self.0
    }
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Respawn placement RNG
    rng: Pcg32,
    pub bounds: WorldBounds,
    /// Keyboard-driven actor (the shark)
    pub player: Actor,
    /// Roaming actor (the shrimp)
    pub target: Actor,
    /// Player sprite animation
    pub animation: AnimationState,
    pub score: Score,
    /// Clicking the target scores
    pub pointer_scoring: bool,
    /// Respawn keeps the target centre this far from the cross-axis edges
    pub respawn_inset: i32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new session, seeded from settings or at random
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let seed = settings.seed.unwrap_or_else(rand::random);
        Self::with_seed(settings, seed)
    }

    /// Create a new session with an explicit seed
    pub fn with_seed(settings: &Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;

        let animation = AnimationState::new(
            settings.player_frames.clone(),
            settings.frame_duration_ms,
        )
        .ok_or_else(|| ConfigError::Invalid("player_frames is empty".to_string()))?;

        let bounds = WorldBounds::new(settings.world_width, settings.world_height);

        let [pw, ph] = settings.player_size;
        let player = Actor::new(
            Rect::from_center(bounds.center(), IVec2::new(pw, ph)),
            settings.player_speed,
            MovementPolicy::Player,
        );

        let [tw, th] = settings.target_size;
        let direction = settings.target_direction;
        let mut target_rect = Rect::new(0, 0, tw, th);
        direction.place_at_entry(&mut target_rect, &bounds, settings.target_start_cross);
        let target = Actor::new(
            target_rect,
            settings.target_speed,
            MovementPolicy::Sweep(direction),
        );

        log::debug!(
            "New session: seed={seed} world={}x{} pointer_scoring={}",
            bounds.width(),
            bounds.height(),
            settings.pointer_scoring
        );

        Ok(Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            bounds,
            player,
            target,
            animation,
            score: Score::default(),
            pointer_scoring: settings.pointer_scoring,
            respawn_inset: settings.respawn_inset,
            time_ticks: 0,
        })
    }

    /// Send the target back to its entry edge at a random cross-axis position
    pub fn respawn_target(&mut self) {
        let MovementPolicy::Sweep(direction) = self.target.policy else {
            return;
        };
        let extent = direction.cross_extent(&self.bounds);
        let cross = self
            .rng
            .random_range(self.respawn_inset..=extent - self.respawn_inset);
        direction.place_at_entry(&mut self.target.rect, &self.bounds, cross);
        log::debug!("Target respawned at {:?}", self.target.rect.pos);
    }
}
