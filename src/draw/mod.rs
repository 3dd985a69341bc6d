// src/draw/mod.rs
// The drawing command model
// Effects never touch a rendering backend; they emit these commands into a Canvas.

pub mod canvas;
pub mod paint;

pub use canvas::Canvas;
pub use paint::{transparent, white, Paint};

use nannou::prelude::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokeCap {
    Butt,
    Round,
}

/// How a closed shape is painted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Style {
    Fill,
    Stroke { width: f32, cap: StrokeCap },
}

impl Style {
    pub fn stroke(width: f32) -> Self {
        Style::Stroke {
            width,
            cap: StrokeCap::Butt,
        }
    }

    pub fn is_filled(&self) -> bool {
        matches!(self, Style::Fill)
    }
}

/// One backend-independent drawing primitive, in canvas space
/// (origin top-left, y pointing down, angles clockwise from +x).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        start: Vec2,
        end: Vec2,
        paint: Paint,
        stroke_width: f32,
        cap: StrokeCap,
    },
    Arc {
        center: Vec2,
        radius: f32,
        start_angle: f32,
        sweep_angle: f32,
        paint: Paint,
        style: Style,
    },
    Circle {
        center: Vec2,
        radius: f32,
        paint: Paint,
        style: Style,
    },
    Rect {
        top_left: Vec2,
        size: Vec2,
        paint: Paint,
        style: Style,
    },
}

impl DrawCommand {
    /// True if every coordinate and dimension in the command is finite.
    pub fn is_finite(&self) -> bool {
        match self {
            DrawCommand::Line {
                start,
                end,
                paint,
                stroke_width,
                ..
            } => start.is_finite() && end.is_finite() && stroke_width.is_finite() && paint.is_finite(),
            DrawCommand::Arc {
                center,
                radius,
                start_angle,
                sweep_angle,
                paint,
                style,
            } => {
                center.is_finite()
                    && radius.is_finite()
                    && start_angle.is_finite()
                    && sweep_angle.is_finite()
                    && paint.is_finite()
                    && style_is_finite(style)
            }
            DrawCommand::Circle {
                center,
                radius,
                paint,
                style,
            } => center.is_finite() && radius.is_finite() && paint.is_finite() && style_is_finite(style),
            DrawCommand::Rect {
                top_left,
                size,
                paint,
                style,
            } => top_left.is_finite() && size.is_finite() && paint.is_finite() && style_is_finite(style),
        }
    }
}

fn style_is_finite(style: &Style) -> bool {
    match style {
        Style::Fill => true,
        Style::Stroke { width, .. } => width.is_finite(),
    }
}
