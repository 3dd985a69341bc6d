// src/effects/arc_lines.rs
//
// Random arcs around the canvas center, sampled at evenly spaced angles.
// The k-th point of each arc is joined to the k-th point of every earlier arc.

use nannou::prelude::Vec2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::effect::{unknown, Effect};
use super::params::*;
use crate::draw::{Canvas, Paint};
use crate::error::EffectResult;
use crate::models::{Circle, PolarCoordinate};
use crate::random::derive;

const NAME: &str = "Arc Lines";

const MAX_RADIUS: f64 = 900.0;
const MAX_SWEEP: f64 = 360.0;
const MIN_ARCS: i32 = 2;
const MAX_ARCS: i32 = 10;
const MIN_LINES: i32 = 1;
const MAX_LINES: i32 = 100;
const MAX_CENTER_RANGE: f64 = 1000.0;
const MIN_STROKE_WIDTH: i32 = 1;
const MAX_STROKE_WIDTH: i32 = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArcLines {
    pub show: bool,
    pub seed: i32,
    pub min_sweep: f64,
    pub max_sweep: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    pub arcs: i32,
    pub lines: i32,
    pub center_range: f64,
    pub stroke_width: i32,
}

impl Default for ArcLines {
    fn default() -> Self {
        Self {
            show: true,
            seed: 0,
            min_sweep: 30.0,
            max_sweep: 330.0,
            min_radius: 50.0,
            max_radius: 300.0,
            arcs: 3,
            lines: 3,
            center_range: 400.0,
            stroke_width: 3,
        }
    }
}

/// One sampled arc. `sweep_degrees` is kept as drawn, before conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSample {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep_degrees: f64,
}

impl ArcSample {
    /// `steps + 1` points from the start of the arc to its end.
    pub fn points(&self, steps: i32) -> Vec<Vec2> {
        let steps = steps.max(1);
        let increment = self.sweep_degrees.to_radians() as f32 / steps as f32;
        let mut angle = self.start_angle;
        let mut points = Vec::with_capacity(steps as usize + 1);
        for _ in 0..=steps {
            points.push(self.center + PolarCoordinate::new(self.radius, angle));
            angle += increment;
        }
        points
    }
}

impl ArcLines {
    pub fn arc_samples(&self, canvas_center: Vec2) -> Vec<ArcSample> {
        let possible_centers = Circle::new(canvas_center, self.center_range as f32);
        (0..self.arcs.max(0))
            .map(|arc| {
                let mut random = derive(self.seed, arc);
                let center = possible_centers.random_point(&mut random);
                // drawn in f32 so rounding cannot land on max_radius
                let radius = random.range_f32(self.min_radius as f32, self.max_radius as f32);
                let start_angle = random.range_f64(0.0, TAU) as f32;
                let sweep_degrees = random.range_f64(self.min_sweep, self.max_sweep);
                ArcSample {
                    center,
                    radius,
                    start_angle,
                    sweep_degrees,
                }
            })
            .collect()
    }
}

impl Effect for ArcLines {
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
            "min_sweep" => next.min_sweep = value.as_float(NAME, "min_sweep")?,
            "max_sweep" => next.max_sweep = value.as_float(NAME, "max_sweep")?,
            "min_radius" => next.min_radius = value.as_float(NAME, "min_radius")?,
            "max_radius" => next.max_radius = value.as_float(NAME, "max_radius")?,
            "arcs" => next.arcs = value.as_int(NAME, "arcs")?,
            "lines" => next.lines = value.as_int(NAME, "lines")?,
            "center_range" => next.center_range = value.as_float(NAME, "center_range")?,
            "stroke_width" => next.stroke_width = value.as_int(NAME, "stroke_width")?,
            _ => return Err(unknown(NAME, key)),
        }
        Ok(next)
    }

    fn validate(&self) -> EffectResult<()> {
        check_float(NAME, "min_sweep", self.min_sweep, 0.0, MAX_SWEEP)?;
        check_float(NAME, "max_sweep", self.max_sweep, 0.0, MAX_SWEEP)?;
        check_pair(NAME, "min_sweep", self.min_sweep, self.max_sweep)?;
        check_float(NAME, "min_radius", self.min_radius, 0.0, MAX_RADIUS)?;
        check_float(NAME, "max_radius", self.max_radius, 0.0, MAX_RADIUS)?;
        check_pair(NAME, "min_radius", self.min_radius, self.max_radius)?;
        check_int(NAME, "arcs", self.arcs, MIN_ARCS, MAX_ARCS)?;
        check_int(NAME, "lines", self.lines, MIN_LINES, MAX_LINES)?;
        check_float(NAME, "center_range", self.center_range, 0.0, MAX_CENTER_RANGE)?;
        check_int(NAME, "stroke_width", self.stroke_width, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
    }

    fn draw_effect(&self, canvas: &mut Canvas) {
        let arc_points: Vec<Vec<Vec2>> = self
            .arc_samples(canvas.center())
            .iter()
            .map(|arc| arc.points(self.lines))
            .collect();

        // drawn[k] holds the k-th point of every arc handled so far
        let mut drawn: Vec<Vec<Vec2>> = vec![Vec::new(); self.lines.max(1) as usize + 1];
        for points in arc_points {
            for (previous, point) in drawn.iter_mut().zip(points) {
                for &other in previous.iter() {
                    canvas.line(point, other, Paint::solid_white(), self.stroke_width as f32);
                }
                previous.push(point);
            }
        }
    }

    fn settings_panel(&self) -> Vec<Control> {
        vec![
            int_slider("lines", "Lines", self.lines, MIN_LINES, MAX_LINES),
            int_slider("arcs", "Arcs", self.arcs, MIN_ARCS, MAX_ARCS),
            float_slider("min_sweep", "Min sweep", self.min_sweep, SLIDER_MIN_POSITIVE, self.max_sweep - 1.0),
            float_slider("max_sweep", "Max sweep", self.max_sweep, self.min_sweep + 1.0, MAX_SWEEP),
            float_slider("min_radius", "Min radius", self.min_radius, SLIDER_MIN_POSITIVE, self.max_radius - 1.0),
            float_slider("max_radius", "Max radius", self.max_radius, self.min_radius + 1.0, MAX_RADIUS),
            float_slider("center_range", "Center Range", self.center_range, SLIDER_MIN_POSITIVE, MAX_CENTER_RANGE),
            int_slider("stroke_width", "Stroke width", self.stroke_width, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
            seed_slider(self.seed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;
    use nannou::prelude::vec2;

    const SIZE: f32 = 900.0;

    fn minimal() -> ArcLines {
        ArcLines {
            show: true,
            seed: 0,
            min_sweep: 30.0,
            max_sweep: 31.0,
            min_radius: 50.0,
            max_radius: 51.0,
            arcs: 2,
            lines: 1,
            center_range: 0.0,
            stroke_width: 3,
        }
    }

    mod scenario_tests {
        use super::*;

        #[test]
        fn test_minimal_arcs_share_the_canvas_center() {
            let samples = minimal().arc_samples(vec2(SIZE / 2.0, SIZE / 2.0));
            assert_eq!(samples.len(), 2);
            for sample in samples {
                assert_eq!(sample.center, vec2(450.0, 450.0));
            }
        }

        #[test]
        fn test_minimal_draws_two_connecting_lines() {
            let commands = minimal().render(vec2(SIZE, SIZE)).unwrap();
            assert_eq!(commands.len(), 2);
            assert!(commands
                .iter()
                .all(|c| matches!(c, DrawCommand::Line { stroke_width, .. } if *stroke_width == 3.0)));
        }

        #[test]
        fn test_line_count_follows_accumulation() {
            // arc i connects each of its lines + 1 points to i earlier arcs
            let effect = ArcLines {
                arcs: 4,
                lines: 5,
                ..ArcLines::default()
            };
            let commands = effect.render(vec2(SIZE, SIZE)).unwrap();
            assert_eq!(commands.len(), (0 + 1 + 2 + 3) * 6);
        }
    }

    mod bounds_tests {
        use super::*;

        #[test]
        fn test_radius_and_sweep_stay_in_range() {
            for seed in [-7, 0, 1, 99, i32::MAX, i32::MIN] {
                let effect = ArcLines {
                    seed,
                    arcs: 10,
                    ..ArcLines::default()
                };
                for sample in effect.arc_samples(vec2(450.0, 450.0)) {
                    assert!(sample.radius >= 50.0 && sample.radius < 300.0);
                    assert!(sample.sweep_degrees >= 30.0 && sample.sweep_degrees < 330.0);
                    assert!((sample.center - vec2(450.0, 450.0)).length() <= 400.0 + 1e-3);
                }
            }
        }

        #[test]
        fn test_collapsed_ranges_are_tolerated() {
            let effect = ArcLines {
                min_sweep: 90.0,
                max_sweep: 90.0,
                min_radius: 100.0,
                max_radius: 100.0,
                ..ArcLines::default()
            };
            for sample in effect.arc_samples(vec2(450.0, 450.0)) {
                assert_eq!(sample.radius, 100.0);
                assert_eq!(sample.sweep_degrees, 90.0);
            }
            let commands = effect.render(vec2(SIZE, SIZE)).unwrap();
            assert!(commands.iter().all(DrawCommand::is_finite));
        }

        #[test]
        fn test_arc_points_span_the_sweep() {
            let sample = ArcSample {
                center: vec2(0.0, 0.0),
                radius: 10.0,
                start_angle: 0.0,
                sweep_degrees: 90.0,
            };
            let points = sample.points(2);
            assert_eq!(points.len(), 3);
            assert!((points[0] - vec2(10.0, 0.0)).length() < 1e-4);
            assert!((points[2] - vec2(0.0, 10.0)).length() < 1e-4);
        }
    }

    mod contract_tests {
        use super::*;

        #[test]
        fn test_render_is_deterministic() {
            let effect = ArcLines {
                seed: 1234,
                arcs: 6,
                lines: 20,
                ..ArcLines::default()
            };
            assert_eq!(effect.render(vec2(SIZE, SIZE)).unwrap(), effect.render(vec2(SIZE, SIZE)).unwrap());
        }

        #[test]
        fn test_hidden_renders_nothing() {
            let effect = ArcLines::default().with_show(false);
            assert!(effect.render(vec2(SIZE, SIZE)).unwrap().is_empty());
        }

        #[test]
        fn test_out_of_range_fails_fast() {
            let effect = ArcLines {
                arcs: 11,
                ..ArcLines::default()
            };
            assert!(effect.render(vec2(SIZE, SIZE)).is_err());
            assert!(ArcLines::default().with_param("min_sweep", ParamValue::Float(400.0)).is_err());
            assert!(ArcLines::default().with_param("max_radius", ParamValue::Float(10.0)).is_err());
        }

        #[test]
        fn test_with_param_replaces_one_field() {
            let before = ArcLines::default();
            let after = before.with_param("lines", ParamValue::Int(7)).unwrap();
            assert_eq!(after, ArcLines { lines: 7, ..before.clone() });
            assert!(before.with_param("colour", ParamValue::Int(1)).is_err());
        }

        #[test]
        fn test_settings_panel_bounds_follow_pairs() {
            let panel = ArcLines::default().settings_panel();
            assert!(panel.contains(&float_slider("min_sweep", "Min sweep", 30.0, SLIDER_MIN_POSITIVE, 329.0)));
            assert!(panel.contains(&float_slider("max_sweep", "Max sweep", 330.0, 31.0, MAX_SWEEP)));
            assert_eq!(panel.last(), Some(&seed_slider(0)));
        }
    }
}
