// src/render/mod.rs
// Rendering DrawCommands with nannou

pub mod canvas_renderer;

pub use canvas_renderer::CanvasRenderer;

use nannou::prelude::*;

#[derive(Debug, Clone)]
pub struct Transform2D {
    pub translation: Vec2,
    pub scale: f32,
    pub rotation: f32,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl Transform2D {
    /// Largest uniform scale that fits the canvas inside `area`, centered.
    pub fn fit(canvas_size: Vec2, area: Vec2) -> Self {
        let scale = (area.x / canvas_size.x).min(area.y / canvas_size.y);
        Self {
            scale: if scale.is_finite() && scale > 0.0 { scale } else { 1.0 },
            ..Self::default()
        }
    }

    // Method to transform from origin at top left to origin at center and apply transform
    pub fn to_screen(&self, point: Vec2, canvas_size: Vec2) -> Point2 {
        // 1. Translate from canvas coordinates (top-left origin) to local coordinates
        let local_x = point.x - canvas_size.x / 2.0;
        let local_y = canvas_size.y / 2.0 - point.y; // invert y to match nannou

        // 2. Apply scale
        let scaled_x = local_x * self.scale;
        let scaled_y = local_y * self.scale;

        // 3. Apply rotation
        let cos_rot = self.rotation.cos();
        let sin_rot = self.rotation.sin();
        let rotated_x = (scaled_x * cos_rot) - (scaled_y * sin_rot);
        let rotated_y = (scaled_x * sin_rot) + (scaled_y * cos_rot);

        // 4. Apply final translation to nannou coordinates
        pt2(self.translation.x + rotated_x, self.translation.y + rotated_y)
    }
}
