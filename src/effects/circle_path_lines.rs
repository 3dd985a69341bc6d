// src/effects/circle_path_lines.rs
//
// A random walk that starts on the left side of a centered circle, wanders
// until it leaves the circle, and is closed by an arc back to its start.

use nannou::prelude::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::f32::consts::{PI, TAU};
use std::f64::consts::FRAC_PI_3;

use super::effect::{unknown, Effect};
use super::params::*;
use crate::draw::{Canvas, Paint, Style};
use crate::error::EffectResult;
use crate::models::{Circle, PolarCoordinate};
use crate::random::derive;

const NAME: &str = "Circle Path Lines";

const MAX_RADIUS: f64 = 900.0;
const MAX_WIDTH: f64 = 900.0;
const MIN_STROKE_WIDTH: i32 = 1;
const MAX_STROKE_WIDTH: i32 = 10;
const START_SUB_SEED: i32 = 13;

/// Hard ceiling on the number of walk steps.
pub const MAX_WALK_STEPS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CirclePathLines {
    pub show: bool,
    pub seed: i32,
    pub radius: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub stroke_width: i32,
    pub draw_downward_lines: bool,
}

impl Default for CirclePathLines {
    fn default() -> Self {
        Self {
            show: true,
            seed: 0,
            radius: 500.0,
            min_width: 50.0,
            max_width: 300.0,
            stroke_width: 3,
            draw_downward_lines: true,
        }
    }
}

/// Sub-seed for a walk direction: the angle in 1/65536 radian units.
/// Saturates for huge angles, so distinct angles may share a sub-seed.
fn angle_sub_seed(angle: f32) -> i32 {
    (angle * 65536.0) as i32
}

/// Sweep of the closing arc, running from the last point's angle back to the
/// first point's angle in the negative direction.
pub fn closing_sweep(first_angle: f32, last_angle: f32) -> f32 {
    if last_angle > first_angle {
        -(last_angle - first_angle)
    } else {
        -last_angle - (TAU - first_angle)
    }
}

impl CirclePathLines {
    pub fn circle(&self, canvas_center: Vec2) -> Circle {
        Circle::new(canvas_center, self.radius as f32)
    }

    /// The walked points. The start sits on the boundary; the last point
    /// inside the circle is pushed out to the boundary, so a walk whose first
    /// step leaves the circle is just its (projected) start point.
    pub fn walk(&self, circle: &Circle) -> Vec<Vec2> {
        let start_angle = derive(self.seed, START_SUB_SEED).range_f64(2.0 * FRAC_PI_3, 4.0 * FRAC_PI_3) as f32;
        let start = circle.point_at(start_angle);

        // start is on the boundary by construction; only walked points are tested
        let mut inside = vec![start];
        let mut point = start;
        let mut angle = start_angle + PI;
        for _ in 0..MAX_WALK_STEPS {
            let sub_seed = angle_sub_seed(angle);
            let distance = derive(self.seed, sub_seed).range_f64(self.min_width, self.max_width) as f32;
            point = point + PolarCoordinate::new(distance, angle);
            angle = derive(self.seed, sub_seed).range_f64(-FRAC_PI_3, FRAC_PI_3) as f32;
            if !circle.contains(point) {
                break;
            }
            inside.push(point);
        }

        if let Some(last) = inside.pop() {
            inside.push(circle.point_at(circle.angle_to(last)));
        }
        inside
    }
}

impl Effect for CirclePathLines {
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
            "radius" => next.radius = value.as_float(NAME, "radius")?,
            "min_width" => next.min_width = value.as_float(NAME, "min_width")?,
            "max_width" => next.max_width = value.as_float(NAME, "max_width")?,
            "stroke_width" => next.stroke_width = value.as_int(NAME, "stroke_width")?,
            "draw_downward_lines" => next.draw_downward_lines = value.as_bool(NAME, "draw_downward_lines")?,
            _ => return Err(unknown(NAME, key)),
        }
        Ok(next)
    }

    fn validate(&self) -> EffectResult<()> {
        check_float(NAME, "radius", self.radius, 0.0, MAX_RADIUS)?;
        check_float(NAME, "min_width", self.min_width, 0.0, MAX_WIDTH)?;
        check_float(NAME, "max_width", self.max_width, 0.0, MAX_WIDTH)?;
        check_pair(NAME, "min_width", self.min_width, self.max_width)?;
        check_int(NAME, "stroke_width", self.stroke_width, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
    }

    fn draw_effect(&self, canvas: &mut Canvas) {
        let circle = self.circle(canvas.center());
        let points = self.walk(&circle);
        let stroke_width = self.stroke_width as f32;
        let first = points[0];
        let last = points[points.len() - 1];

        let mut pen = first;
        for &point in points.iter().skip(1).take(points.len().saturating_sub(2)) {
            canvas.line(pen, point, Paint::solid_white(), stroke_width);
            if self.draw_downward_lines {
                canvas.line(point, vec2(point.x, canvas.height()), Paint::solid_white(), stroke_width);
            }
            pen = point;
        }
        if points.len() > 1 {
            canvas.line(pen, last, Paint::solid_white(), stroke_width);
        }

        let angle_to_first = circle.angle_to(first);
        let angle_to_last = circle.angle_to(last);
        canvas.arc(
            circle.center,
            circle.radius,
            angle_to_last,
            closing_sweep(angle_to_first, angle_to_last),
            Paint::solid_white(),
            Style::stroke(stroke_width),
        );
    }

    fn settings_panel(&self) -> Vec<Control> {
        vec![
            float_slider("radius", "Radius", self.radius, SLIDER_MIN_POSITIVE, MAX_RADIUS),
            float_slider("min_width", "Minimum width", self.min_width, SLIDER_MIN_POSITIVE, self.max_width - 1.0),
            float_slider("max_width", "Maximum width", self.max_width, self.min_width + 1.0, MAX_WIDTH),
            int_slider("stroke_width", "Stroke width", self.stroke_width, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
            Control::Switch {
                key: "draw_downward_lines",
                label: "Draw downward lines",
                value: self.draw_downward_lines,
            },
            seed_slider(self.seed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;

    const SIZE: f32 = 900.0;

    fn center() -> Vec2 {
        vec2(SIZE / 2.0, SIZE / 2.0)
    }

    mod walk_tests {
        use super::*;

        #[test]
        fn test_walk_starts_on_left_of_circle() {
            for seed in [0, 1, -50, i32::MAX] {
                let effect = CirclePathLines {
                    seed,
                    ..CirclePathLines::default()
                };
                let circle = effect.circle(center());
                let points = effect.walk(&circle);
                let start_angle = circle.angle_to(points[0]);
                // 120..240 degrees, expressed in (-pi, pi]
                assert!(start_angle.abs() >= 2.0 * PI / 3.0 - 1e-3, "start angle {}", start_angle);
            }
        }

        #[test]
        fn test_walk_ends_on_boundary_and_stays_inside() {
            let effect = CirclePathLines::default();
            let circle = effect.circle(center());
            let points = effect.walk(&circle);
            let last = points[points.len() - 1];
            assert!(((last - circle.center).length() - circle.radius).abs() < 1e-2);
            for &point in &points {
                assert!((point - circle.center).length() <= circle.radius + 1e-2);
            }
        }

        #[test]
        fn test_default_walks_leave_the_start_point() {
            for seed in 0..200 {
                let effect = CirclePathLines {
                    seed,
                    ..CirclePathLines::default()
                };
                let circle = effect.circle(center());
                let points = effect.walk(&circle);
                // steps of at most 300 cannot cross a 1000-wide circle in one go
                assert!(points.len() >= 2, "seed {} walked {:?}", seed, points);
                assert!(((points[0] - circle.center).length() - circle.radius).abs() < 1e-2);
            }
        }

        #[test]
        fn test_short_steps_give_long_walks() {
            let effect = CirclePathLines {
                min_width: 20.0,
                max_width: 40.0,
                ..CirclePathLines::default()
            };
            let points = effect.walk(&effect.circle(center()));
            assert!(points.len() > 2, "walked {} points", points.len());
        }

        #[test]
        fn test_zero_width_walk_is_bounded() {
            let effect = CirclePathLines {
                min_width: 0.0,
                max_width: 0.0,
                ..CirclePathLines::default()
            };
            let points = effect.walk(&effect.circle(center()));
            assert!(points.len() <= MAX_WALK_STEPS + 1);
        }
    }

    mod scenario_tests {
        use super::*;

        #[test]
        fn test_immediate_exit_draws_only_the_closing_arc() {
            // every step is longer than the circle is wide
            let effect = CirclePathLines {
                radius: 10.0,
                min_width: 500.0,
                max_width: 600.0,
                ..CirclePathLines::default()
            };
            let points = effect.walk(&effect.circle(center()));
            assert_eq!(points.len(), 1);

            let commands = effect.render(vec2(SIZE, SIZE)).unwrap();
            assert_eq!(commands.len(), 1);
            match &commands[0] {
                DrawCommand::Arc {
                    center: arc_center,
                    radius,
                    sweep_angle,
                    ..
                } => {
                    assert_eq!(*arc_center, center());
                    assert_eq!(*radius, 10.0);
                    assert!((sweep_angle + TAU).abs() < 1e-4);
                }
                other => panic!("expected an arc, got {:?}", other),
            }
        }

        #[test]
        fn test_downward_lines_reach_the_bottom_edge() {
            let effect = CirclePathLines {
                min_width: 20.0,
                max_width: 40.0,
                ..CirclePathLines::default()
            };
            let points = effect.walk(&effect.circle(center()));
            assert!(points.len() > 2);
            let commands = effect.render(vec2(SIZE, SIZE)).unwrap();
            let downward = commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::Line { end, .. } if end.y == SIZE))
                .count();
            assert_eq!(downward, points.len() - 2);
            // path segments + downward lines + closing arc
            assert_eq!(commands.len(), (points.len() - 1) + (points.len() - 2) + 1);

            let without = effect.with_param("draw_downward_lines", ParamValue::Bool(false)).unwrap();
            assert_eq!(without.render(vec2(SIZE, SIZE)).unwrap().len(), points.len());
        }
    }

    mod sweep_tests {
        use super::*;

        #[test]
        fn test_closing_sweep_is_negative() {
            assert!((closing_sweep(-0.5, 0.5) + 1.0).abs() < 1e-6);
            assert!((closing_sweep(0.5, -0.5) - (1.0 - TAU)).abs() < 1e-6);
            assert!((closing_sweep(1.0, 1.0) + TAU).abs() < 1e-6);
        }

        #[test]
        fn test_closing_arc_ends_at_the_first_angle() {
            let cases = [(-0.5, 0.5), (0.5, -0.5), (2.5, -2.9), (-3.0, 3.0), (1.0, 1.0)];
            for (first, last) in cases {
                let sweep = closing_sweep(first, last);
                assert!(sweep < 0.0 && sweep >= -TAU - 1e-5, "sweep {} from {} to {}", sweep, last, first);
                let end = last + sweep;
                // same direction modulo a full turn
                let turns = (end - first) / TAU;
                assert!((turns - turns.round()).abs() < 1e-5, "ends at {} not {}", end, first);
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let effect = CirclePathLines {
            seed: 77,
            ..CirclePathLines::default()
        };
        assert_eq!(effect.render(vec2(SIZE, SIZE)).unwrap(), effect.render(vec2(SIZE, SIZE)).unwrap());
    }

    #[test]
    fn test_hidden_renders_nothing() {
        let effect = CirclePathLines::default().with_show(false);
        assert!(effect.render(vec2(SIZE, SIZE)).unwrap().is_empty());
    }
}
