//! `Painter` over a browser `CanvasRenderingContext2d`

use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::Painter;

pub struct CanvasPainter {
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Grab the 2D context of a canvas element
    pub fn from_canvas(canvas: &HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self::new(ctx))
    }
}

impl Painter for CanvasPainter {
    fn clear(&mut self, width: f32, height: f32) {
        self.ctx.clear_rect(0.0, 0.0, width.into(), height.into());
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx
            .fill_rect(x.into(), y.into(), width.into(), height.into());
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        if let Err(e) = self.ctx.arc(
            center.x.into(),
            center.y.into(),
            radius.into(),
            0.0,
            std::f64::consts::TAU,
        ) {
            log::debug!("Canvas arc failed: {:?}", e);
            return;
        }
        self.ctx.fill();
    }

    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.begin_path();
        self.ctx.move_to(points[0].x.into(), points[0].y.into());
        self.ctx.line_to(points[1].x.into(), points[1].y.into());
        self.ctx.line_to(points[2].x.into(), points[2].y.into());
        self.ctx.close_path();
        self.ctx.fill();
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width.into());
        self.ctx.begin_path();
        self.ctx.move_to(from.x.into(), from.y.into());
        self.ctx.line_to(to.x.into(), to.y.into());
        self.ctx.stroke();
    }
}
