//! Recorded draw commands

use glam::Vec2;
use serde::Serialize;

use super::Painter;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Clear {
        width: f32,
        height: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        color: String,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: String,
    },
    Triangle {
        points: [Vec2; 3],
        color: String,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: String,
    },
}

impl DrawCommand {
    pub fn color(&self) -> Option<&str> {
        match self {
            DrawCommand::Clear { .. } => None,
            DrawCommand::Rect { color, .. }
            | DrawCommand::Circle { color, .. }
            | DrawCommand::Triangle { color, .. }
            | DrawCommand::Line { color, .. } => Some(color),
        }
    }
}

/// A `Painter` that just records what it was asked to draw
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_commands(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Commands drawn in the given color
    pub fn with_color<'a>(&'a self, color: &'a str) -> impl Iterator<Item = &'a DrawCommand> {
        self.commands.iter().filter(move |c| c.color() == Some(color))
    }
}

impl Painter for DrawList {
    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            color: color.to_string(),
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color: color.to_string(),
        });
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str) {
        self.commands.push(DrawCommand::Triangle {
            points,
            color: color.to_string(),
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color: color.to_string(),
        });
    }
}
