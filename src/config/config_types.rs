// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

/// The drawing surface handed to the effects. Square, in canvas pixels.
#[derive(Debug, Deserialize, Clone)]
pub struct CanvasConfig {
    pub size: f32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RenderConfig {
    pub arc_resolution: u32,      // points per full turn when sampling arcs
    pub gradient_resolution: u32, // pieces a gradient stroke is split into
}

#[derive(Debug, Deserialize, Clone)]
pub struct StyleConfig {
    /// Window background outside the canvas, as `[r, g, b]` in 0..=1.
    pub background: [f32; 3],
}

#[derive(Debug, Deserialize, Clone)]
pub struct OscConfig {
    pub rx_port: u16,
}
