//! Demo/idle player
//!
//! Fires when an arrow loosed now would meet a drifting balloon. Used by the
//! headless runner and for long soak tests.

use glam::Vec2;

use super::state::GameState;
use super::tick::TickInput;
use crate::consts::*;

/// Minimum ticks between shots
const COOLDOWN_TICKS: u32 = 12;
/// How far (vertically) the predicted meeting point may miss the balloon center
const AIM_TOLERANCE: f32 = 20.0;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    cooldown: u32,
}

impl Autopilot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Input for the next tick: start if idle or over, fire when a shot lines up
    pub fn decide(&mut self, state: &GameState) -> TickInput {
        self.cooldown = self.cooldown.saturating_sub(1);
        let mut input = TickInput {
            start: state.phase == super::GamePhase::Idle,
            ..Default::default()
        };
        if !state.is_running() || self.cooldown > 0 {
            return input;
        }
        if self.has_shot(state) {
            input.fire = 1;
            self.cooldown = COOLDOWN_TICKS;
        }
        input
    }

    fn has_shot(&self, state: &GameState) -> bool {
        let tip = state.pig.muzzle() + Vec2::new(ARROW_WIDTH, ARROW_HEIGHT / 2.0);
        state
            .wolves
            .iter()
            .filter(|w| w.has_buoyancy)
            .any(|wolf| {
                let center = wolf.balloon_center();
                let flight = (center.x - tip.x) / ARROW_SPEED;
                if flight < 0.0 {
                    return false;
                }
                let meet_y = center.y + wolf.drift_speed * flight;
                (meet_y - tip.y).abs() < AIM_TOLERANCE
            })
    }
}
