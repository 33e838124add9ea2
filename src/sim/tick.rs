//! Per-frame simulation tick
//!
//! One call per rendered frame. The whole step is computed synchronously from
//! the caller's input snapshot; nothing here draws or sleeps.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{GameState, MovementPolicy};

/// Movement keys held down this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HeldKeys {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldKeys {
    /// Vertical step sign; up wins when both are held
    pub fn vertical(&self) -> i32 {
        if self.up {
            -1
        } else if self.down {
            1
        } else {
            0
        }
    }

    /// Horizontal step sign; right wins when both are held
    pub fn horizontal(&self) -> i32 {
        if self.right {
            1
        } else if self.left {
            -1
        } else {
            0
        }
    }
}

/// Pointer position and primary button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerState {
    pub pos: IVec2,
    /// Primary button is down (newly or still)
    pub pressed: bool,
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickInput {
    pub keys: HeldKeys,
    pub pointer: PointerState,
    /// Action key (space) went down this tick
    pub action: bool,
}

/// What caused a score increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreCause {
    /// Pointer clicked on the target
    Pointer,
    /// Player overlapped the target
    Collision,
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player animation moved to a new frame
    FrameAdvanced { index: usize },
    /// Target left the world uncaught and was sent back
    TargetEscaped,
    /// Target was caught; `total` is the score after the increment
    Scored { cause: ScoreCause, total: u64 },
}

/// Result of one tick, enough for a renderer to draw the frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameEvents {
    /// Tick counter after this step
    pub tick: u64,
    pub score: u64,
    /// At least one scoring event fired
    pub scored: bool,
    /// Events in the order they happened
    pub events: Vec<GameEvent>,
    pub player: Rect,
    pub target: Rect,
    pub frame_index: usize,
    /// Sprite key of the current player frame
    pub frame_key: String,
}

impl FrameEvents {
    /// Snapshot of `state` with no events
    pub fn snapshot(state: &GameState) -> Self {
        Self {
            tick: state.time_ticks,
            score: state.score.value(),
            scored: false,
            events: Vec::new(),
            player: state.player.rect,
            target: state.target.rect,
            frame_index: state.animation.index(),
            frame_key: state.animation.current_frame().to_string(),
        }
    }

    /// Number of scoring events this tick (2 when pointer and collision both fire)
    pub fn catches(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, GameEvent::Scored { .. }))
            .count()
    }
}

/// Advance the game state by one frame.
///
/// Steps, in order: animation, player movement, target sweep, pointer
/// hit-test, player/target collision. Actor movement is per tick;
/// `elapsed_ms` only feeds the animation timer.
pub fn advance_tick(state: &mut GameState, input: &TickInput, elapsed_ms: u32) -> FrameEvents {
    let mut events = Vec::new();
    state.time_ticks += 1;

    // 1. Animation
    if state.animation.advance(elapsed_ms) {
        events.push(GameEvent::FrameAdvanced {
            index: state.animation.index(),
        });
    }

    // 2. Player movement, each axis accepted or rejected on its own
    let speed = state.player.speed;
    let dy = input.keys.vertical();
    if dy != 0 {
        state.player.try_move(IVec2::new(0, dy * speed), &state.bounds);
    }
    let dx = input.keys.horizontal();
    if dx != 0 {
        state.player.try_move(IVec2::new(dx * speed, 0), &state.bounds);
    }

    // 3. Target sweep, respawning once it is fully past the far edge
    if let MovementPolicy::Sweep(direction) = state.target.policy {
        if direction.has_exited(&state.target.rect, &state.bounds) {
            state.respawn_target();
            events.push(GameEvent::TargetEscaped);
        } else {
            state.target.rect = state
                .target
                .rect
                .translated(direction.step(state.target.speed));
        }
    }

    // 4. Pointer hit-test
    if state.pointer_scoring
        && input.pointer.pressed
        && state.target.rect.contains_point(input.pointer.pos)
    {
        state.respawn_target();
        let total = state.score.award();
        events.push(GameEvent::Scored {
            cause: ScoreCause::Pointer,
            total,
        });
    }

    // 5. Player/target collision (may score again in the same tick)
    if state.player.rect.overlaps(&state.target.rect) {
        state.respawn_target();
        let total = state.score.award();
        events.push(GameEvent::Scored {
            cause: ScoreCause::Collision,
            total,
        });
    }

    let mut frame = FrameEvents::snapshot(state);
    frame.scored = events
        .iter()
        .any(|e| matches!(e, GameEvent::Scored { .. }));
    frame.events = events;

    log::trace!(
        "tick {} score={} player={:?} target={:?}",
        frame.tick,
        frame.score,
        frame.player.pos,
        frame.target.pos
    );

    frame
}

impl GameState {
    /// Method form of [`advance_tick`]
    pub fn advance_tick(&mut self, input: &TickInput, elapsed_ms: u32) -> FrameEvents {
        advance_tick(self, input, elapsed_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::{DemoVariant, Settings};
    use proptest::prelude::*;

    const TICK_MS: u32 = 33;

    fn new_state() -> GameState {
        GameState::with_seed(&Settings::default(), 12345).unwrap()
    }

    fn keys(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput {
            keys: HeldKeys {
                up,
                down,
                left,
                right,
            },
            ..Default::default()
        }
    }

    /// Park the target somewhere it cannot touch the player this tick
    fn park_target(state: &mut GameState) {
        state.target.rect.set_left(700);
        state.target.rect.set_top(500);
    }

    #[test]
    fn test_up_moves_by_speed() {
        let mut state = new_state();
        park_target(&mut state);
        let y = state.player.rect.top();
        advance_tick(&mut state, &keys(true, false, false, false), TICK_MS);
        assert_eq!(state.player.rect.top(), y - PLAYER_SPEED);
    }

    #[test]
    fn test_up_wins_over_down() {
        let mut a = new_state();
        let mut b = new_state();
        park_target(&mut a);
        park_target(&mut b);
        advance_tick(&mut a, &keys(true, false, false, false), TICK_MS);
        advance_tick(&mut b, &keys(true, true, false, false), TICK_MS);
        assert_eq!(a.player.rect, b.player.rect);
    }

    #[test]
    fn test_right_wins_over_left() {
        let mut state = new_state();
        park_target(&mut state);
        state.target.rect.set_top(0);
        let x = state.player.rect.left();
        advance_tick(&mut state, &keys(false, false, true, true), TICK_MS);
        assert_eq!(state.player.rect.left(), x + PLAYER_SPEED);
    }

    #[test]
    fn test_blocked_up_does_not_fall_back_to_down() {
        let mut state = new_state();
        park_target(&mut state);
        state.player.rect.set_top(3);
        advance_tick(&mut state, &keys(true, true, false, false), TICK_MS);
        assert_eq!(state.player.rect.top(), 3);
    }

    #[test]
    fn test_clamp_at_top_left_corner() {
        let settings = Settings {
            player_size: [40, 40],
            ..Settings::default()
        };
        let mut state = GameState::with_seed(&settings, 1).unwrap();
        park_target(&mut state);
        state.player.rect = Rect::new(0, 0, 40, 40);

        advance_tick(&mut state, &keys(false, false, true, false), TICK_MS);
        assert_eq!(state.player.rect, Rect::new(0, 0, 40, 40));

        advance_tick(&mut state, &keys(true, false, false, false), TICK_MS);
        assert_eq!(state.player.rect, Rect::new(0, 0, 40, 40));
    }

    #[test]
    fn test_axes_clamped_independently() {
        let mut state = new_state();
        park_target(&mut state);
        state.target.rect.set_top(0);
        state.player.rect.set_top(0);
        let x = state.player.rect.left();
        advance_tick(&mut state, &keys(true, false, false, true), TICK_MS);
        assert_eq!(state.player.rect.top(), 0);
        assert_eq!(state.player.rect.left(), x + PLAYER_SPEED);
    }

    #[test]
    fn test_target_sweeps_left() {
        let mut state = new_state();
        let x = state.target.rect.left();
        let frame = advance_tick(&mut state, &TickInput::default(), TICK_MS);
        assert_eq!(state.target.rect.left(), x - TARGET_SPEED);
        assert_eq!(frame.target, state.target.rect);
    }

    #[test]
    fn test_target_respawns_after_leaving() {
        let mut state = new_state();
        state.target.rect.set_right(-1);
        let frame = advance_tick(&mut state, &TickInput::default(), TICK_MS);
        assert_eq!(state.target.rect.left(), WORLD_WIDTH);
        let cy = state.target.rect.center().y;
        assert!((RESPAWN_INSET..=WORLD_HEIGHT - RESPAWN_INSET).contains(&cy));
        assert!(frame.events.contains(&GameEvent::TargetEscaped));
        assert!(!frame.scored);
        assert_eq!(frame.score, 0);
    }

    #[test]
    fn test_target_still_moves_at_zero_right_edge() {
        let mut state = new_state();
        state.target.rect.set_right(0);
        advance_tick(&mut state, &TickInput::default(), TICK_MS);
        assert_eq!(state.target.rect.right(), -TARGET_SPEED);
    }

    #[test]
    fn test_pointer_hit_scores() {
        let mut state = new_state();
        park_target(&mut state);
        let input = TickInput {
            pointer: PointerState {
                // Target moves 6px left before the hit-test
                pos: IVec2::new(700 - TARGET_SPEED + 1, 501),
                pressed: true,
            },
            ..Default::default()
        };
        let frame = advance_tick(&mut state, &input, TICK_MS);
        assert_eq!(frame.score, 1);
        assert!(frame.scored);
        assert_eq!(state.target.rect.left(), WORLD_WIDTH);
        assert_eq!(
            frame.events,
            vec![GameEvent::Scored {
                cause: ScoreCause::Pointer,
                total: 1
            }]
        );
    }

    #[test]
    fn test_pointer_needs_button() {
        let mut state = new_state();
        park_target(&mut state);
        let input = TickInput {
            pointer: PointerState {
                pos: IVec2::new(700, 501),
                pressed: false,
            },
            ..Default::default()
        };
        assert_eq!(advance_tick(&mut state, &input, TICK_MS).score, 0);
    }

    #[test]
    fn test_refactored_ignores_pointer() {
        let settings = Settings::from_preset(DemoVariant::Refactored);
        let mut state = GameState::with_seed(&settings, 3).unwrap();
        park_target(&mut state);
        let input = TickInput {
            pointer: PointerState {
                pos: IVec2::new(700 - TARGET_SPEED_FAST + 1, 501),
                pressed: true,
            },
            ..Default::default()
        };
        assert_eq!(advance_tick(&mut state, &input, TICK_MS).score, 0);
    }

    #[test]
    fn test_collision_scores_and_respawns() {
        let mut state = new_state();
        let center = state.player.rect.center();
        state.target.rect.set_center_x(center.x + TARGET_SPEED);
        state.target.rect.set_center_y(center.y);
        let frame = advance_tick(&mut state, &TickInput::default(), TICK_MS);
        assert_eq!(frame.score, 1);
        assert_eq!(frame.catches(), 1);
        assert_eq!(state.target.rect.left(), WORLD_WIDTH);
    }

    #[test]
    fn test_pointer_and_collision_double_count() {
        let mut state = new_state();
        // Player reaches past the right edge, so the respawned target lands on it
        state.player.rect = Rect::new(600, 0, 210, 600);
        state.target.rect.set_left(100);
        state.target.rect.set_top(100);
        let input = TickInput {
            pointer: PointerState {
                pos: IVec2::new(100 - TARGET_SPEED + 1, 101),
                pressed: true,
            },
            ..Default::default()
        };
        let frame = advance_tick(&mut state, &input, TICK_MS);
        assert_eq!(frame.score, 2);
        assert_eq!(frame.catches(), 2);
        assert_eq!(
            frame.events,
            vec![
                GameEvent::Scored {
                    cause: ScoreCause::Pointer,
                    total: 1
                },
                GameEvent::Scored {
                    cause: ScoreCause::Collision,
                    total: 2
                },
            ]
        );
    }

    #[test]
    fn test_animation_large_jump_one_step() {
        let mut state = new_state();
        park_target(&mut state);
        let frame = advance_tick(&mut state, &TickInput::default(), 900);
        assert_eq!(frame.frame_index, 1);
        assert_eq!(frame.frame_key, "shark02");
        assert_eq!(frame.events, vec![GameEvent::FrameAdvanced { index: 1 }]);
    }

    #[test]
    fn test_animation_cycles_at_30hz() {
        let mut state = new_state();
        let mut changes = 0;
        for _ in 0..30 {
            park_target(&mut state);
            let frame = advance_tick(&mut state, &TickInput::default(), TICK_MS);
            changes += frame
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::FrameAdvanced { .. }))
                .count();
        }
        // 8 ticks of 33ms per frame change
        assert_eq!(changes, 3);
    }

    #[test]
    fn test_determinism() {
        let mut a = new_state();
        let mut b = new_state();
        let inputs = [
            keys(true, false, false, true),
            keys(false, true, true, false),
            TickInput::default(),
        ];
        for i in 0..600 {
            let input = inputs[i % inputs.len()];
            let fa = advance_tick(&mut a, &input, TICK_MS);
            let fb = advance_tick(&mut b, &input, TICK_MS);
            assert_eq!(fa, fb);
        }
    }

    fn arb_input() -> impl Strategy<Value = TickInput> {
        (
            any::<[bool; 4]>(),
            (0..WORLD_WIDTH, 0..WORLD_HEIGHT),
            any::<bool>(),
        )
            .prop_map(|([up, down, left, right], (x, y), pressed)| TickInput {
                keys: HeldKeys {
                    up,
                    down,
                    left,
                    right,
                },
                pointer: PointerState {
                    pos: IVec2::new(x, y),
                    pressed,
                },
                action: false,
            })
    }

    proptest! {
        #[test]
        fn prop_player_stays_in_world(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..200),
        ) {
            let mut state = GameState::with_seed(&Settings::default(), seed).unwrap();
            let world = state.bounds.rect();
            for input in &inputs {
                advance_tick(&mut state, input, TICK_MS);
                prop_assert!(state.player.rect.is_within(&world));
            }
        }

        #[test]
        fn prop_score_counts_catches(
            seed in any::<u64>(),
            inputs in prop::collection::vec(arb_input(), 1..200),
            elapsed in 0u32..2000,
        ) {
            let mut state = GameState::with_seed(&Settings::default(), seed).unwrap();
            let mut last = 0;
            for input in &inputs {
                let frame = advance_tick(&mut state, input, elapsed);
                prop_assert!(frame.score >= last);
                prop_assert_eq!(frame.score - last, frame.catches() as u64);
                prop_assert!(frame.catches() <= 2);
                last = frame.score;
            }
        }

        #[test]
        fn prop_respawn_in_inset_range(seed in any::<u64>()) {
            let mut state = GameState::with_seed(&Settings::default(), seed).unwrap();
            state.target.rect.set_right(-1);
            advance_tick(&mut state, &TickInput::default(), TICK_MS);
            prop_assert_eq!(state.target.rect.left(), WORLD_WIDTH);
            let cy = state.target.rect.center().y;
            prop_assert!((RESPAWN_INSET..=WORLD_HEIGHT - RESPAWN_INSET).contains(&cy));
        }

        #[test]
        fn prop_up_only_moves_by_speed_or_not_at_all(top in 0..(WORLD_HEIGHT - PLAYER_HEIGHT)) {
            let mut state = GameState::with_seed(&Settings::default(), 5).unwrap();
            state.player.rect.set_left(0);
            state.player.rect.set_top(top);
            state.target.rect.set_left(WORLD_WIDTH);
            advance_tick(&mut state, &keys(true, false, false, false), TICK_MS);
            if top >= PLAYER_SPEED {
                prop_assert_eq!(state.player.rect.top(), top - PLAYER_SPEED);
            } else {
                prop_assert_eq!(state.player.rect.top(), top);
            }
        }
    }
}
