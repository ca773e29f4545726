//! Wolves drift down under a balloon, or drop fast once it is popped

use std::ops::Range;

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Field, TickContext};
use super::state::GameEvent;
use crate::consts::*;

/// How a wolf left the lane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    /// Landed still holding the balloon: the player loses a life
    Hurt,
    /// Landed after being popped: the player scores
    Scored,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wolf {
    /// Top-left of the body
    pub pos: Vec2,
    /// Downward speed while buoyant
    pub drift_speed: f32,
    /// Downward speed once popped
    pub fall_speed: f32,
    pub has_buoyancy: bool,
    pub marked_for_deletion: bool,
    /// One-shot guard for the fall cue
    pub fall_sound_played: bool,
}

impl Wolf {
    pub fn new(x: f32, drift_speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, WOLF_START_Y),
            drift_speed,
            fall_speed: WOLF_FALL_SPEED,
            has_buoyancy: true,
            marked_for_deletion: false,
            fall_sound_played: false,
        }
    }

    /// Spawn somewhere in the band right of the pig, with a random drift speed
    pub fn spawn<R: Rng>(rng: &mut R, field: &Field, drift: Range<f32>) -> Self {
        let (lo, hi) = spawn_band(field);
        let x = if hi > lo { rng.random_range(lo..hi) } else { lo };
        let drift_speed = if drift.end > drift.start {
            rng.random_range(drift)
        } else {
            drift.start
        };
        Self::new(x, drift_speed)
    }

    /// Center of the balloon (only meaningful while buoyant)
    pub fn balloon_center(&self) -> Vec2 {
        Vec2::new(self.pos.x + WOLF_WIDTH / 2.0, self.pos.y - BALLOON_OFFSET_Y)
    }

    /// Burst the balloon. Returns false if it was already gone.
    pub fn pop(&mut self) -> bool {
        let was_buoyant = self.has_buoyancy;
        self.has_buoyancy = false;
        was_buoyant
    }

    /// Move one tick and report a landing, if any.
    ///
    /// The landing check runs after movement in the same tick; a landed wolf
    /// is clamped to the floor and marked for deletion.
    pub fn step(&mut self, floor: f32, events: &mut Vec<GameEvent>) -> Option<Landing> {
        if self.has_buoyancy {
            self.pos.y += self.drift_speed;
        } else {
            self.pos.y += self.fall_speed;
            if !self.fall_sound_played {
                events.push(GameEvent::WolfFalling);
                self.fall_sound_played = true;
            }
        }

        if self.pos.y + WOLF_HEIGHT < floor {
            return None;
        }

        self.pos.y = floor - WOLF_HEIGHT;
        self.marked_for_deletion = true;
        Some(if self.has_buoyancy {
            Landing::Hurt
        } else {
            Landing::Scored
        })
    }
}

/// Horizontal spawn range `[lo, hi)` for a field
pub fn spawn_band(field: &Field) -> (f32, f32) {
    (WOLF_SPAWN_LEFT, field.width - WOLF_SPAWN_RIGHT_MARGIN)
}

impl Entity for Wolf {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(WOLF_WIDTH, WOLF_HEIGHT)
    }

    fn advance(&mut self, ctx: &mut TickContext<'_>) {
        match self.step(ctx.field.height, ctx.events) {
            Some(Landing::Hurt) => {
                ctx.board.lives = ctx.board.lives.saturating_sub(1);
                ctx.events.push(GameEvent::PlayerHurt {
                    lives: ctx.board.lives,
                });
            }
            Some(Landing::Scored) => {
                ctx.board.score += ctx.reward;
                ctx.events.push(GameEvent::WolfScored {
                    score: ctx.board.score,
                });
            }
            None => {}
        }
    }

    fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }
}
