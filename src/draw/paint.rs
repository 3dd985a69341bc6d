// src/draw/paint.rs
//
// Solid colors and the two gradient brushes effects use.
// Gradient stops are spaced evenly between the gradient's ends.

use nannou::prelude::{rgba, Rgba, Vec2};

pub fn white() -> Rgba {
    rgba(1.0, 1.0, 1.0, 1.0)
}

pub fn transparent() -> Rgba {
    rgba(0.0, 0.0, 0.0, 0.0)
}

#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    LinearGradient {
        start: Vec2,
        end: Vec2,
        stops: Vec<Rgba>,
    },
    RadialGradient {
        center: Vec2,
        radius: f32,
        stops: Vec<Rgba>,
    },
}

impl Paint {
    pub fn solid_white() -> Self {
        Paint::Solid(white())
    }

    pub fn is_gradient(&self) -> bool {
        !matches!(self, Paint::Solid(_))
    }

    /// Sample the paint at a canvas point.
    pub fn color_at(&self, point: Vec2) -> Rgba {
        match self {
            Paint::Solid(color) => *color,
            Paint::LinearGradient { start, end, stops } => {
                let axis = *end - *start;
                let len_sq = axis.length_squared();
                let t = if len_sq > 0.0 {
                    (point - *start).dot(axis) / len_sq
                } else {
                    0.0
                };
                sample_stops(stops, t)
            }
            Paint::RadialGradient {
                center,
                radius,
                stops,
            } => {
                let t = if *radius > 0.0 {
                    (point - *center).length() / radius
                } else {
                    1.0
                };
                sample_stops(stops, t)
            }
        }
    }

    pub(crate) fn is_finite(&self) -> bool {
        match self {
            Paint::Solid(_) => true,
            Paint::LinearGradient { start, end, .. } => start.is_finite() && end.is_finite(),
            Paint::RadialGradient { center, radius, .. } => center.is_finite() && radius.is_finite(),
        }
    }
}

/// Interpolate evenly spaced stops at `t`, clamped to [0, 1].
pub fn sample_stops(stops: &[Rgba], t: f32) -> Rgba {
    match stops {
        [] => transparent(),
        [only] => *only,
        _ => {
            let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
            let scaled = t * (stops.len() - 1) as f32;
            let index = (scaled.floor() as usize).min(stops.len() - 2);
            mix(stops[index], stops[index + 1], scaled - index as f32)
        }
    }
}

fn mix(a: Rgba, b: Rgba, t: f32) -> Rgba {
    rgba(
        a.red + (b.red - a.red) * t,
        a.green + (b.green - a.green) * t,
        a.blue + (b.blue - a.blue) * t,
        a.alpha + (b.alpha - a.alpha) * t,
    )
}
