//! Shared contract for simulated objects

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, Scoreboard};
use crate::tuning::Tuning;

/// Logical play field (canvas space, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub width: f32,
    pub height: f32,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            width: crate::consts::FIELD_WIDTH,
            height: crate::consts::FIELD_HEIGHT,
        }
    }
}

/// Everything an entity may touch while advancing one tick
pub struct TickContext<'a> {
    pub field: Field,
    /// Points awarded when a popped wolf lands
    pub reward: u64,
    pub board: &'a mut Scoreboard,
    pub events: &'a mut Vec<GameEvent>,
}

impl<'a> TickContext<'a> {
    pub fn new(
        tuning: &Tuning,
        board: &'a mut Scoreboard,
        events: &'a mut Vec<GameEvent>,
    ) -> Self {
        Self {
            field: tuning.field(),
            reward: tuning.wolf_reward,
            board,
            events,
        }
    }

    /// Advance one entity within this tick
    pub fn advance<E: Entity>(&mut self, entity: &mut E) {
        entity.advance(self);
    }
}

/// A simulated object with a position and a per-tick update.
///
/// Drawing lives in `renderer::Draw` so the simulation stays platform-free.
pub trait Entity {
    /// Top-left corner in field space
    fn pos(&self) -> Vec2;

    /// Width and height of the body
    fn size(&self) -> Vec2;

    /// Advance one tick
    fn advance(&mut self, ctx: &mut TickContext<'_>);

    /// Once true, the entity is dropped at the next pruning step
    fn is_marked_for_deletion(&self) -> bool {
        false
    }

    /// Center of the body
    fn center(&self) -> Vec2 {
        self.pos() + self.size() * 0.5
    }
}

/// Drop every entity flagged for deletion, keeping the order of the rest
pub fn prune<E: Entity>(entities: &mut Vec<E>) {
    entities.retain(|e| !e.is_marked_for_deletion());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Arrow, Wolf};

    #[test]
    fn test_prune_keeps_order_of_live_entities() {
        let mut wolves: Vec<Wolf> = (0..5).map(|i| Wolf::new(400.0 + i as f32, 1.0)).collect();
        wolves[1].marked_for_deletion = true;
        wolves[3].marked_for_deletion = true;

        prune(&mut wolves);

        let xs: Vec<f32> = wolves.iter().map(|w| w.pos.x).collect();
        assert_eq!(xs, vec![400.0, 402.0, 404.0]);
    }

    #[test]
    fn test_context_uses_tuning() {
        let tuning = Tuning {
            field_width: 700.0,
            wolf_reward: 250,
            ..Tuning::default()
        };
        let mut board = Scoreboard::default();
        let mut events = Vec::new();
        let mut ctx = TickContext::new(&tuning, &mut board, &mut events);
        assert_eq!(ctx.field.width, 700.0);
        assert_eq!(ctx.reward, 250);

        let mut arrow = Arrow::new(glam::Vec2::new(695.0, 0.0));
        ctx.advance(&mut arrow);
        assert!(arrow.is_marked_for_deletion());
        assert_eq!(arrow.center(), glam::Vec2::new(713.0, 2.5));
    }
}
