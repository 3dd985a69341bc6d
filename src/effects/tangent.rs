// src/effects/tangent.rs
//
// Tangent strokes around a circle, each fading out toward both ends.

use nannou::prelude::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};

use super::effect::{unknown, Effect};
use super::params::*;
use crate::draw::{transparent, white, Canvas, Paint};
use crate::error::EffectResult;
use crate::random::derive;

const NAME: &str = "Tangent";

const MIN_TANGENTS: i32 = 1;
const MAX_TANGENTS: i32 = 1000;
const MAX_HEIGHT: f64 = 2000.0;
const MAX_RADIUS: f64 = 1000.0;
const STROKE_WIDTH: f32 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tangent {
    pub show: bool,
    pub seed: i32,
    pub tangents: i32,
    pub max_height: f64,
    pub radius: f64,
}

impl Default for Tangent {
    fn default() -> Self {
        Self {
            show: true,
            seed: 0,
            tangents: 15,
            max_height: 500.0,
            radius: 500.0,
        }
    }
}

impl Tangent {
    /// Touch point and the two end points of tangent `index`.
    pub fn tangent(&self, index: i32, canvas_center: Vec2) -> (Vec2, Vec2, Vec2) {
        let mut random = derive(self.seed, index);
        let angle = random.range_f64(0.0, TAU);
        let point = canvas_center
            + vec2(
                (self.radius * angle.cos()) as f32,
                (self.radius * angle.sin()) as f32,
            );
        let height = random.range_f64(0.0, self.max_height);
        let along = angle + FRAC_PI_2;
        let offset = vec2((height * along.cos()) as f32, (height * along.sin()) as f32);
        (point, point + offset, point - offset)
    }
}

impl Effect for Tangent {
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
            "tangents" => next.tangents = value.as_int(NAME, "tangents")?,
            "max_height" => next.max_height = value.as_float(NAME, "max_height")?,
            "radius" => next.radius = value.as_float(NAME, "radius")?,
            _ => return Err(unknown(NAME, key)),
        }
        Ok(next)
    }

    fn validate(&self) -> EffectResult<()> {
        check_int(NAME, "tangents", self.tangents, MIN_TANGENTS, MAX_TANGENTS)?;
        check_float(NAME, "max_height", self.max_height, 0.0, MAX_HEIGHT)?;
        check_float(NAME, "radius", self.radius, 0.0, MAX_RADIUS)
    }

    fn draw_effect(&self, canvas: &mut Canvas) {
        for index in 0..self.tangents {
            let (_, start, end) = self.tangent(index, canvas.center());
            let brush = Paint::LinearGradient {
                start,
                end,
                stops: vec![transparent(), white(), transparent()],
            };
            canvas.line(start, end, brush, STROKE_WIDTH);
        }
    }

    fn settings_panel(&self) -> Vec<Control> {
        vec![
            float_slider("max_height", "Max height", self.max_height, SLIDER_MIN_POSITIVE, MAX_HEIGHT),
            float_slider("radius", "Radius", self.radius, SLIDER_MIN_POSITIVE, MAX_RADIUS),
            int_slider("tangents", "Tangents", self.tangents, MIN_TANGENTS, MAX_TANGENTS),
            seed_slider(self.seed),
        ]
    }
}
