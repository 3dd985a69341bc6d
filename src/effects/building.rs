// src/effects/building.rs
//
// Parallel jagged traces marching left to right across the canvas.
// Every trace takes the same random step, so they stay parallel.

use nannou::prelude::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_3;

use super::effect::{unknown, Effect};
use super::params::*;
use crate::draw::{Canvas, Paint};
use crate::error::EffectResult;
use crate::models::PolarCoordinate;
use crate::random::derive;

const NAME: &str = "Building";

const MIN_WIDTH: f64 = 0.0;
const MAX_WIDTH: f64 = 1800.0;
const MIN_LINES: i32 = 1;
const MAX_LINES: i32 = 100;
const STROKE_WIDTH: f32 = 2.0;

/// Hard ceiling on the number of steps a trace may take.
pub const MAX_BUILDING_STEPS: usize = 10_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Building {
    pub show: bool,
    pub seed: i32,
    pub height: f64,
    pub start_height: f64,
    pub min_width: f64,
    pub max_width: f64,
    pub lines: i32,
}

impl Default for Building {
    fn default() -> Self {
        Self {
            show: true,
            seed: 0,
            height: 1000.0,
            start_height: 1400.0,
            min_width: 50.0,
            max_width: 300.0,
            lines: 25,
        }
    }
}

impl Building {
    /// Every step of the traces: `steps[n][k]` is trace k after n steps.
    ///
    /// Stops on the step that first carries a trace past `width` (that x is
    /// clamped to `width`), or when the traces stop moving right.
    pub fn trace_steps(&self, width: f32) -> Vec<Vec<Vec2>> {
        let lines = self.lines.max(1);
        let initial: Vec<Vec2> = (0..=lines)
            .map(|line| {
                let y = self.start_height - (self.height * line as f64 / lines as f64);
                vec2(0.0, y as f32)
            })
            .collect();

        let mut steps = vec![initial];
        while steps.len() <= MAX_BUILDING_STEPS {
            let points = &steps[steps.len() - 1];
            let first_x = points[0].x;
            let mut random = derive(self.seed, first_x as i32);
            let angle = random.range_f64(-FRAC_PI_3, FRAC_PI_3);
            let distance = random.range_f64(self.min_width, self.max_width);
            let offset = PolarCoordinate::new(distance as f32, angle as f32).to_offset();

            let mut reached_edge = false;
            let next: Vec<Vec2> = points
                .iter()
                .map(|&point| {
                    let moved = point + offset;
                    if moved.x > width {
                        reached_edge = true;
                        vec2(width, moved.y)
                    } else {
                        moved
                    }
                })
                .collect();

            if !reached_edge && next[0].x <= first_x {
                // zero-length sample; the same sub-seed would repeat forever
                break;
            }
            steps.push(next);
            if reached_edge {
                break;
            }
        }
        steps
    }
}

impl Effect for Building {
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
            "height" => next.height = value.as_float(NAME, "height")?,
            "start_height" => next.start_height = value.as_float(NAME, "start_height")?,
            "min_width" => next.min_width = value.as_float(NAME, "min_width")?,
            "max_width" => next.max_width = value.as_float(NAME, "max_width")?,
            "lines" => next.lines = value.as_int(NAME, "lines")?,
            _ => return Err(unknown(NAME, key)),
        }
        Ok(next)
    }

    fn validate(&self) -> EffectResult<()> {
        check_float(NAME, "height", self.height, MIN_WIDTH, MAX_WIDTH)?;
        check_float(NAME, "start_height", self.start_height, MIN_WIDTH, MAX_WIDTH)?;
        check_float(NAME, "min_width", self.min_width, MIN_WIDTH, MAX_WIDTH)?;
        check_float(NAME, "max_width", self.max_width, MIN_WIDTH, MAX_WIDTH)?;
        check_pair(NAME, "min_width", self.min_width, self.max_width)?;
        check_int(NAME, "lines", self.lines, MIN_LINES, MAX_LINES)
    }

    fn draw_effect(&self, canvas: &mut Canvas) {
        let steps = self.trace_steps(canvas.width());
        for pair in steps.windows(2) {
            for (&start, &end) in pair[0].iter().zip(pair[1].iter()) {
                canvas.line(start, end, Paint::solid_white(), STROKE_WIDTH);
            }
        }
    }

    fn settings_panel(&self) -> Vec<Control> {
        vec![
            int_slider("lines", "Lines", self.lines, MIN_LINES, MAX_LINES),
            float_slider("height", "Height", self.height, MIN_WIDTH, MAX_WIDTH),
            float_slider("start_height", "Start height", self.start_height, MIN_WIDTH, MAX_WIDTH),
            float_slider("min_width", "Minimum width", self.min_width, MIN_WIDTH, self.max_width),
            float_slider("max_width", "Maximum width", self.max_width, self.min_width, MAX_WIDTH),
            seed_slider(self.seed),
        ]
    }
}
