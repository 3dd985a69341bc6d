// src/effects/coffee.rs
//
// Overlapping ring outlines, each lit by a radial gradient sitting on the
// ring, so only part of every ring shows, like the rim of a coffee stain.

use nannou::prelude::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::effect::{unknown, Effect};
use super::params::*;
use crate::draw::{transparent, white, Canvas, Paint, StrokeCap, Style};
use crate::error::EffectResult;
use crate::random::derive;

const NAME: &str = "Coffee";

const MAX_BASE_RADIUS: f64 = 2000.0;
const MAX_CENTER_RANGE: f64 = 2000.0;
const MAX_RADIUS_RANGE: f64 = 2000.0;
const MIN_RINGS: i32 = 1;
const MAX_RINGS: i32 = 100;
const MIN_STROKE_WIDTH: f64 = 1.0;
const MAX_STROKE_WIDTH: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Coffee {
    pub show: bool,
    pub seed: i32,
    pub rings: i32,
    pub base_radius: f64,
    pub center_range: f64,
    pub radius_range: f64,
    pub min_stroke_width: f64,
    pub max_stroke_width: f64,
}

impl Default for Coffee {
    fn default() -> Self {
        Self {
            show: true,
            seed: 0,
            rings: 15,
            base_radius: 550.0,
            center_range: 100.0,
            radius_range: 250.0,
            min_stroke_width: 2.0,
            max_stroke_width: 7.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    pub center: Vec2,
    pub radius: f32,
    /// Degrees.
    pub start_angle: f32,
    /// Degrees.
    pub sweep_angle: f32,
    pub gradient_center: Vec2,
    pub gradient_radius: f32,
    pub stroke_width: f32,
}

impl Coffee {
    pub fn ring(&self, index: i32, canvas_center: Vec2) -> Ring {
        let mut random = derive(self.seed, index);
        let start_angle = random.range_f64(0.0, 360.0) as f32;
        let sweep_angle = random.range_f64(60.0, 355.0) as f32;

        let center_distance = random.next_f32().sqrt() as f64 * self.center_range;
        let center_direction = random.range_f64(-PI, PI);
        let center = canvas_center
            + vec2(
                (center_direction.sin() * center_distance) as f32,
                (center_direction.cos() * center_distance) as f32,
            );
        let radius = (self.base_radius + random.range_f64(-self.radius_range, self.radius_range)) as f32;

        // the gradient sits on the ring, halfway along the sweep
        let middle = (start_angle + sweep_angle / 2.0).to_radians();
        let gradient_center = center + vec2(radius * middle.cos(), radius * middle.sin());
        let gradient_radius = radius * (sweep_angle / 4.0).to_radians().sin() * 2.0;

        let stroke_width = random.range_f64(self.min_stroke_width, self.max_stroke_width) as f32;
        Ring {
            center,
            radius,
            start_angle,
            sweep_angle,
            gradient_center,
            gradient_radius,
            stroke_width,
        }
    }
}

impl Effect for Coffee {
    fn name(&self) -> &'static str {
        NAME
    }

    fn show(&self) -> bool {
        self.show
    }

    fn seed(&self) -> i32 {
        self.seed
    }

    fn with_show(&self, show: bool) -> Self {
        Self {
            show,
            ..self.clone()
        }
    }

    fn with_seed(&self, seed: i32) -> Self {
        Self {
            seed,
            ..self.clone()
        }
    }

    fn copy_with(&self, key: &str, value: ParamValue) -> EffectResult<Self> {
        let mut next = self.clone();
        match key {
            "rings" => next.rings = value.as_int(NAME, "rings")?,
            "base_radius" => next.base_radius = value.as_float(NAME, "base_radius")?,
            "center_range" => next.center_range = value.as_float(NAME, "center_range")?,
            "radius_range" => next.radius_range = value.as_float(NAME, "radius_range")?,
            "min_stroke_width" => next.min_stroke_width = value.as_float(NAME, "min_stroke_width")?,
            "max_stroke_width" => next.max_stroke_width = value.as_float(NAME, "max_stroke_width")?,
            _ => return Err(unknown(NAME, key)),
        }
        Ok(next)
    }

    fn validate(&self) -> EffectResult<()> {
        check_int(NAME, "rings", self.rings, MIN_RINGS, MAX_RINGS)?;
        check_float(NAME, "base_radius", self.base_radius, 0.0, MAX_BASE_RADIUS)?;
        check_float(NAME, "center_range", self.center_range, 0.0, MAX_CENTER_RANGE)?;
        check_float(
            NAME,
            "radius_range",
            self.radius_range,
            0.0,
            self.base_radius.min(MAX_RADIUS_RANGE),
        )?;
        check_float(NAME, "min_stroke_width", self.min_stroke_width, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)?;
        check_float(NAME, "max_stroke_width", self.max_stroke_width, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)?;
        check_pair(NAME, "min_stroke_width", self.min_stroke_width, self.max_stroke_width)
    }

    fn draw_effect(&self, canvas: &mut Canvas) {
        for index in 0..self.rings {
            let ring = self.ring(index, canvas.center());
            let brush = Paint::RadialGradient {
                center: ring.gradient_center,
                radius: ring.gradient_radius,
                stops: vec![white(), transparent()],
            };
            canvas.circle(
                ring.center,
                ring.radius,
                brush,
                Style::Stroke {
                    width: ring.stroke_width,
                    cap: StrokeCap::Round,
                },
            );
        }
    }

    fn settings_panel(&self) -> Vec<Control> {
        vec![
            float_slider(
                "base_radius",
                "Base radius",
                self.base_radius,
                SLIDER_MIN_POSITIVE.max(self.radius_range),
                MAX_BASE_RADIUS,
            ),
            int_slider("rings", "Rings", self.rings, MIN_RINGS, MAX_RINGS),
            float_slider("center_range", "Center range", self.center_range, SLIDER_MIN_POSITIVE, MAX_CENTER_RANGE),
            float_slider(
                "radius_range",
                "Radius range",
                self.radius_range,
                SLIDER_MIN_POSITIVE,
                self.base_radius.min(MAX_RADIUS_RANGE),
            ),
            seed_slider(self.seed),
            float_slider(
                "min_stroke_width",
                "Minimum stroke width",
                self.min_stroke_width,
                MIN_STROKE_WIDTH,
                self.max_stroke_width - 1.0,
            ),
            float_slider(
                "max_stroke_width",
                "Maximum stroke width",
                self.max_stroke_width,
                self.min_stroke_width + 1.0,
                MAX_STROKE_WIDTH,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;

    const SIZE: f32 = 900.0;

    #[test]
    fn test_one_round_capped_circle_per_ring() {
        let effect = Coffee::default();
        let commands = effect.render(vec2(SIZE, SIZE)).unwrap();
        assert_eq!(commands.len(), 15);
        for command in &commands {
            match command {
                DrawCommand::Circle {
                    paint: Paint::RadialGradient { stops, .. },
                    style: Style::Stroke { cap, .. },
                    ..
                } => {
                    assert_eq!(*cap, StrokeCap::Round);
                    assert_eq!(stops, &vec![white(), transparent()]);
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_rings_respect_their_ranges() {
        let effect = Coffee {
            rings: 100,
            seed: 31,
            ..Coffee::default()
        };
        let canvas_center = vec2(450.0, 450.0);
        for index in 0..effect.rings {
            let ring = effect.ring(index, canvas_center);
            assert!(ring.start_angle >= 0.0 && ring.start_angle <= 360.0);
            assert!(ring.sweep_angle >= 60.0 && ring.sweep_angle <= 355.0);
            assert!((ring.center - canvas_center).length() <= 100.0 + 1e-3);
            assert!(ring.radius >= 300.0 && ring.radius <= 800.0);
            assert!(ring.stroke_width >= 2.0 && ring.stroke_width <= 7.0);
            // the gradient is centered on the ring itself
            assert!(((ring.gradient_center - ring.center).length() - ring.radius).abs() < 0.1);
            assert!(ring.gradient_radius > 0.0);
        }
    }

    #[test]
    fn test_radius_range_is_bounded_by_base_radius() {
        let effect = Coffee {
            base_radius: 100.0,
            radius_range: 150.0,
            ..Coffee::default()
        };
        assert!(effect.validate().is_err());
        assert!(Coffee::default().with_param("radius_range", ParamValue::Float(550.0)).is_ok());
    }

    #[test]
    fn test_degenerate_ranges_stay_finite() {
        let effect = Coffee {
            base_radius: 0.0,
            center_range: 0.0,
            radius_range: 0.0,
            min_stroke_width: 4.0,
            max_stroke_width: 4.0,
            ..Coffee::default()
        };
        let commands = effect.render(vec2(SIZE, SIZE)).unwrap();
        assert!(commands.iter().all(DrawCommand::is_finite));
    }

    #[test]
    fn test_render_is_deterministic() {
        let effect = Coffee {
            seed: i32::MIN,
            ..Coffee::default()
        };
        assert_eq!(effect.render(vec2(SIZE, SIZE)).unwrap(), effect.render(vec2(SIZE, SIZE)).unwrap());
    }
}
