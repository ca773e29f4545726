//! The player's avatar: a pig bobbing on a rope

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, Field, TickContext};
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pig {
    pub pos: Vec2,
    pub speed: f32,
    /// +1 moves down, -1 moves up
    pub direction: f32,
}

impl Pig {
    /// Pig starts halfway down the lane heading downward
    pub fn new(field: &Field) -> Self {
        Self {
            pos: Vec2::new(PIG_X, field.height / 2.0),
            speed: PIG_SPEED,
            direction: 1.0,
        }
    }

    /// Where a freshly fired arrow starts: right edge, vertically centered
    pub fn muzzle(&self) -> Vec2 {
        Vec2::new(self.pos.x + PIG_SIZE, self.pos.y + PIG_SIZE / 2.0)
    }

    /// Move one step and bounce off the lane bounds
    pub fn step(&mut self, lane_height: f32) {
        self.pos.y += self.speed * self.direction;
        if self.pos.y <= 0.0 {
            self.pos.y = 0.0;
            self.direction = 1.0;
        }
        if self.pos.y + PIG_SIZE >= lane_height {
            self.pos.y = lane_height - PIG_SIZE;
            self.direction = -1.0;
        }
    }
}

impl Entity for Pig {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::splat(PIG_SIZE)
    }

    fn advance(&mut self, ctx: &mut TickContext<'_>) {
        self.step(ctx.field.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pig_bounces_at_floor() {
        let field = Field::default();
        let mut pig = Pig::new(&field);
        pig.pos.y = field.height - PIG_SIZE - 1.0;

        pig.step(field.height);
        assert_eq!(pig.pos.y, field.height - PIG_SIZE);
        assert_eq!(pig.direction, -1.0);

        pig.step(field.height);
        assert_eq!(pig.pos.y, field.height - PIG_SIZE - PIG_SPEED);
    }

    #[test]
    fn test_pig_bounces_at_ceiling() {
        let field = Field::default();
        let mut pig = Pig::new(&field);
        pig.pos.y = 2.0;
        pig.direction = -1.0;

        pig.step(field.height);
        assert_eq!(pig.pos.y, 0.0);
        assert_eq!(pig.direction, 1.0);
    }

    #[test]
    fn test_pig_stays_in_lane_for_many_ticks() {
        let field = Field::default();
        let mut pig = Pig::new(&field);
        for _ in 0..2_000 {
            pig.step(field.height);
            assert!(pig.pos.y >= 0.0);
            assert!(pig.pos.y <= field.height - PIG_SIZE);
        }
        // x never moves
        assert_eq!(pig.pos.x, PIG_X);
    }

    #[test]
    fn test_muzzle_is_right_edge_center() {
        let pig = Pig::new(&Field::default());
        let m = pig.muzzle();
        assert_eq!(m.x, PIG_X + PIG_SIZE);
        assert_eq!(m.y, pig.pos.y + 20.0);
    }
}
