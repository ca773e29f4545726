//! Arrows fly straight right until they leave the field or pop a balloon

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::{Entity, TickContext};
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Arrow {
    /// Top-left of the shaft
    pub pos: Vec2,
    pub speed: f32,
    pub marked_for_deletion: bool,
}

impl Arrow {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            speed: ARROW_SPEED,
            marked_for_deletion: false,
        }
    }

    /// Leading edge of the shaft, vertically centered (the hit point)
    pub fn tip(&self) -> Vec2 {
        Vec2::new(self.pos.x + ARROW_WIDTH, self.pos.y + ARROW_HEIGHT / 2.0)
    }

    pub fn step(&mut self, field_width: f32) {
        self.pos.x += self.speed;
        if self.pos.x > field_width {
            self.marked_for_deletion = true;
        }
    }
}

impl Entity for Arrow {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        Vec2::new(ARROW_WIDTH, ARROW_HEIGHT)
    }

    fn advance(&mut self, ctx: &mut TickContext<'_>) {
        self.step(ctx.field.width);
    }

    fn is_marked_for_deletion(&self) -> bool {
        self.marked_for_deletion
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_expires_past_field_edge() {
        let mut arrow = Arrow::new(Vec2::new(990.0, 100.0));
        arrow.step(1000.0);
        assert_eq!(arrow.pos.x, 998.0);
        assert!(!arrow.marked_for_deletion);

        arrow.step(1000.0);
        assert!(arrow.marked_for_deletion);
    }

    #[test]
    fn test_arrow_at_exact_edge_is_kept() {
        let mut arrow = Arrow::new(Vec2::new(992.0, 0.0));
        arrow.step(1000.0);
        assert_eq!(arrow.pos.x, 1000.0);
        assert!(!arrow.marked_for_deletion);
    }

    #[test]
    fn test_tip_is_leading_edge() {
        let arrow = Arrow::new(Vec2::new(100.0, 50.0));
        assert_eq!(arrow.tip(), Vec2::new(120.0, 52.5));
    }
}
