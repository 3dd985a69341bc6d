// src/effects/line_block.rs
//
// A ruled surface: straight lines between matching points of two guide segments.

use nannou::prelude::{vec2, Vec2};
use serde::{Deserialize, Serialize};

use super::effect::{unknown, Effect};
use super::params::*;
use crate::draw::{Canvas, Paint};
use crate::error::EffectResult;
use crate::models::lerp;

const NAME: &str = "Line Block";

const MIN_POS: f64 = 0.0;
const MAX_POS: f64 = 1800.0;
const MIN_LINES: i32 = 1;
const MAX_LINES: i32 = 1000;
const STROKE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LineBlock {
    pub show: bool,
    pub seed: i32,
    pub start_xa: f64,
    pub start_ya: f64,
    pub start_xb: f64,
    pub start_yb: f64,
    pub end_xa: f64,
    pub end_ya: f64,
    pub end_xb: f64,
    pub end_yb: f64,
    pub lines: i32,
}

impl Default for LineBlock {
    fn default() -> Self {
        Self {
            show: true,
            seed: 0,
            start_xa: 100.0,
            start_ya: 100.0,
            start_xb: 100.0,
            start_yb: 900.0,
            end_xa: 900.0,
            end_ya: 900.0,
            end_xb: 900.0,
            end_yb: 100.0,
            lines: 15,
        }
    }
}

impl LineBlock {
    /// The segment every drawn line starts on, from A to B.
    pub fn start_line(&self) -> (Vec2, Vec2) {
        (
            vec2(self.start_xa as f32, self.start_ya as f32),
            vec2(self.start_xb as f32, self.start_yb as f32),
        )
    }

    /// The segment every drawn line ends on, from A to B.
    pub fn end_line(&self) -> (Vec2, Vec2) {
        (
            vec2(self.end_xa as f32, self.end_ya as f32),
            vec2(self.end_xb as f32, self.end_yb as f32),
        )
    }

    fn coordinates(&self) -> [(&'static str, f64); 8] {
        [
            ("start_xa", self.start_xa),
            ("start_ya", self.start_ya),
            ("start_xb", self.start_xb),
            ("start_yb", self.start_yb),
            ("end_xa", self.end_xa),
            ("end_ya", self.end_ya),
            ("end_xb", self.end_xb),
            ("end_yb", self.end_yb),
        ]
    }
}

impl Effect for LineBlock {
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
            "start_xa" => next.start_xa = value.as_float(NAME, "start_xa")?,
            "start_ya" => next.start_ya = value.as_float(NAME, "start_ya")?,
            "start_xb" => next.start_xb = value.as_float(NAME, "start_xb")?,
            "start_yb" => next.start_yb = value.as_float(NAME, "start_yb")?,
            "end_xa" => next.end_xa = value.as_float(NAME, "end_xa")?,
            "end_ya" => next.end_ya = value.as_float(NAME, "end_ya")?,
            "end_xb" => next.end_xb = value.as_float(NAME, "end_xb")?,
            "end_yb" => next.end_yb = value.as_float(NAME, "end_yb")?,
            "lines" => next.lines = value.as_int(NAME, "lines")?,
            _ => return Err(unknown(NAME, key)),
        }
        Ok(next)
    }

    fn validate(&self) -> EffectResult<()> {
        for (key, value) in self.coordinates() {
            check_float(NAME, key, value, MIN_POS, MAX_POS)?;
        }
        check_int(NAME, "lines", self.lines, MIN_LINES, MAX_LINES)
    }

    fn draw_effect(&self, canvas: &mut Canvas) {
        let (start_a, start_b) = self.start_line();
        let (end_a, end_b) = self.end_line();
        let lines = self.lines.max(1);
        for line in 0..=lines {
            let t = line as f32 / lines as f32;
            canvas.line(
                lerp(start_a, start_b, t),
                lerp(end_a, end_b, t),
                Paint::solid_white(),
                STROKE_WIDTH,
            );
        }
    }

    fn settings_panel(&self) -> Vec<Control> {
        vec![
            int_slider("lines", "Lines", self.lines, MIN_LINES, MAX_LINES),
            float_slider("start_xa", "Start X - A", self.start_xa, MIN_POS, MAX_POS),
            float_slider("start_ya", "Start Y - A", self.start_ya, MIN_POS, MAX_POS),
            float_slider("start_xb", "Start X - B", self.start_xb, MIN_POS, MAX_POS),
            float_slider("start_yb", "Start Y - B", self.start_yb, MIN_POS, MAX_POS),
            float_slider("end_xa", "End X - A", self.end_xa, MIN_POS, MAX_POS),
            float_slider("end_ya", "End Y - A", self.end_ya, MIN_POS, MAX_POS),
            float_slider("end_xb", "End X - B", self.end_xb, MIN_POS, MAX_POS),
            float_slider("end_yb", "End Y - B", self.end_yb, MIN_POS, MAX_POS),
            seed_slider(self.seed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;

    fn endpoints(commands: &[DrawCommand]) -> Vec<(Vec2, Vec2)> {
        commands
            .iter()
            .map(|c| match c {
                DrawCommand::Line { start, end, .. } => (*start, *end),
                other => panic!("unexpected command {:?}", other),
            })
            .collect()
    }

    #[test]
    fn test_lines_join_the_guides() {
        let effect = LineBlock {
            lines: 2,
            ..LineBlock::default()
        };
        let lines = endpoints(&effect.render(vec2(900.0, 900.0)).unwrap());
        assert_eq!(
            lines,
            vec![
                (vec2(100.0, 100.0), vec2(900.0, 900.0)),
                (vec2(100.0, 500.0), vec2(900.0, 500.0)),
                (vec2(100.0, 900.0), vec2(900.0, 100.0)),
            ]
        );
    }

    #[test]
    fn test_lines_plus_one_segments() {
        let effect = LineBlock {
            lines: 1000,
            ..LineBlock::default()
        };
        assert_eq!(effect.render(vec2(900.0, 900.0)).unwrap().len(), 1001);
    }

    #[test]
    fn test_seed_has_no_effect() {
        let a = LineBlock::default().render(vec2(900.0, 900.0)).unwrap();
        let b = LineBlock::default().with_seed(5).render(vec2(900.0, 900.0)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_coordinates_are_bounded() {
        assert!(LineBlock::default().with_param("end_yb", ParamValue::Float(1800.0)).is_ok());
        assert!(LineBlock::default().with_param("end_yb", ParamValue::Float(1800.5)).is_err());
        assert!(LineBlock::default().with_param("lines", ParamValue::Int(0)).is_err());
    }
}
