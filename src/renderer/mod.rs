//! 2D rendering
//!
//! The scene is drawn through the small `Painter` interface so the same code
//! targets the browser canvas (`CanvasPainter`) and a recorded command list
//! (`DrawList`) for headless runs and tests.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod draw_list;
pub mod scene;

use glam::Vec2;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasPainter;
pub use draw_list::{DrawCommand, DrawList};
pub use scene::{draw_background, draw_frame};

/// Fill colors, as CSS color strings
pub mod palette {
    pub const SKY: &str = "#b0e0e6";
    pub const ROPE: &str = "#333";
    pub const BARK: &str = "#8B4513";
    pub const LEAVES: &str = "#32CD32";
    pub const GRASS: &str = "#4CAF50";

    pub const PIG_BODY: &str = "#FFC0CB";
    pub const PIG_SNOUT: &str = "#ff69b4";
    pub const PIG_EYE: &str = "#000";

    pub const ARROW: &str = "black";

    pub const BALLOON: &str = "red";
    pub const BALLOON_SHINE: &str = "rgba(255,255,255,0.3)";
    pub const BALLOON_STRING: &str = "white";
    pub const WOLF_FLOATING: &str = "#555";
    pub const WOLF_FALLING: &str = "#333";
    pub const WOLF_EYE: &str = "yellow";
}

/// Draw primitives in logical field coordinates.
///
/// Implementations swallow platform errors; drawing never fails the tick.
pub trait Painter {
    /// Clear the whole surface
    fn clear(&mut self, width: f32, height: f32);

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: &str);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);

    fn fill_triangle(&mut self, points: [Vec2; 3], color: &str);

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: &str);
}

/// Something that knows how to draw itself
pub trait Draw {
    fn draw(&self, painter: &mut dyn Painter);
}
