//! Scene drawing: background, entities and a full frame

use glam::Vec2;

use super::palette::*;
use super::{Draw, Painter};
use crate::consts::*;
use crate::sim::{Arrow, Field, GameState, Pig, Wolf};

/// Eye size of a wolf still hanging from its balloon
const WOLF_EYE_CALM: f32 = 8.0;
/// Eye size of a falling wolf
const WOLF_EYE_SCARED: f32 = 12.0;

impl Draw for Pig {
    fn draw(&self, painter: &mut dyn Painter) {
        let Vec2 { x, y } = self.pos;
        painter.fill_rect(x, y, PIG_SIZE, PIG_SIZE, PIG_BODY);
        painter.fill_rect(x + 25.0, y + 10.0, 5.0, 5.0, PIG_EYE);
        painter.fill_rect(x + 28.0, y + 20.0, 12.0, 10.0, PIG_SNOUT);
    }
}

impl Draw for Arrow {
    fn draw(&self, painter: &mut dyn Painter) {
        let Vec2 { x, y } = self.pos;
        painter.fill_rect(x, y, ARROW_WIDTH, ARROW_HEIGHT, ARROW);
        let head = x + ARROW_WIDTH;
        painter.fill_triangle(
            [
                Vec2::new(head, y - 2.0),
                Vec2::new(head + 10.0, y + ARROW_HEIGHT / 2.0),
                Vec2::new(head, y + 7.0),
            ],
            ARROW,
        );
    }
}

impl Draw for Wolf {
    fn draw(&self, painter: &mut dyn Painter) {
        let Vec2 { x, y } = self.pos;
        if self.has_buoyancy {
            let center = self.balloon_center();
            painter.fill_circle(center, BALLOON_RADIUS, BALLOON);
            painter.fill_circle(center + Vec2::new(-8.0, -8.0), 6.0, BALLOON_SHINE);
            painter.line(
                center + Vec2::new(0.0, BALLOON_RADIUS),
                Vec2::new(center.x, y),
                1.0,
                BALLOON_STRING,
            );
        }

        let body = if self.has_buoyancy {
            WOLF_FLOATING
        } else {
            WOLF_FALLING
        };
        painter.fill_rect(x, y, WOLF_WIDTH, WOLF_HEIGHT, body);

        let eye = if self.has_buoyancy {
            WOLF_EYE_CALM
        } else {
            WOLF_EYE_SCARED
        };
        painter.fill_rect(x + 5.0, y + 10.0, eye, eye, WOLF_EYE);
        painter.fill_rect(x + 25.0, y + 10.0, eye, eye, WOLF_EYE);
    }
}

/// Sky, the pig's rope, the tree the wolves hang from, and the grass
pub fn draw_background(painter: &mut dyn Painter, field: &Field) {
    let (w, h) = (field.width, field.height);
    painter.fill_rect(0.0, 0.0, w, h, SKY);

    let rope_x = PIG_X + PIG_SIZE / 2.0;
    painter.line(Vec2::new(rope_x, 0.0), Vec2::new(rope_x, h), 4.0, ROPE);

    // Trunk and branch
    painter.fill_rect(w - 100.0, 0.0, 100.0, h, BARK);
    painter.fill_rect(w / 2.0, 60.0, w / 2.0, 30.0, BARK);

    painter.fill_circle(Vec2::new(w - 100.0, 60.0), 40.0, LEAVES);
    painter.fill_circle(Vec2::new(w / 2.0, 60.0), 30.0, LEAVES);

    painter.fill_rect(0.0, h - 10.0, w, 10.0, GRASS);
}

/// Draw a whole frame for the current session
pub fn draw_frame(state: &GameState, painter: &mut dyn Painter) {
    let field = state.tuning.field();
    painter.clear(field.width, field.height);
    draw_background(painter, &field);

    if state.phase == crate::sim::GamePhase::Idle {
        return;
    }

    state.pig.draw(painter);
    for arrow in &state.arrows {
        arrow.draw(painter);
    }
    for wolf in &state.wolves {
        wolf.draw(painter);
    }
}
