// src/effects/squares.rs
//
// A grid of squares with random sizes, some filled and some outlined.

use nannou::prelude::{vec2, Vec2};
use serde::{Deserialize, Serialize};

use super::effect::{unknown, Effect};
use super::params::*;
use crate::draw::{Canvas, Paint, Style};
use crate::error::EffectResult;
use crate::random::derive;

const NAME: &str = "Squares";

const MIN_SQUARES: i32 = 1;
const MAX_SQUARES: i32 = 100;
const MIN_FILL_CHANCE: f64 = 0.0;
const MAX_FILL_CHANCE: f64 = 1.0;
const OUTLINE_WIDTH: f32 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Squares {
    pub show: bool,
    pub seed: i32,
    pub squares: i32,
    pub fill_chance: f64,
}

impl Default for Squares {
    fn default() -> Self {
        Self {
            show: true,
            seed: 0,
            squares: 25,
            fill_chance: 0.0,
        }
    }
}

/// Grid layout: `squares` squares and `squares + 1` gaps span each axis,
/// with a gap:square ratio of squares:(squares + 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareGrid {
    pub squares: i32,
    pub gap: Vec2,
    pub square: Vec2,
}

impl SquareGrid {
    pub fn new(squares: i32, size: Vec2) -> Self {
        let squares = squares.max(1);
        let gaps = squares + 1;
        let steps = (squares * gaps * 2) as f32;
        let step = size / steps;
        Self {
            squares,
            gap: step * squares as f32,
            square: step * gaps as f32,
        }
    }

    /// Centers of the cells, column by column.
    pub fn centers(&self) -> Vec<Vec2> {
        let first = self.gap + self.square / 2.0;
        let stride = self.gap + self.square;
        let mut centers = Vec::with_capacity((self.squares * self.squares) as usize);
        for column in 0..self.squares {
            for row in 0..self.squares {
                centers.push(vec2(
                    first.x + stride.x * column as f32,
                    first.y + stride.y * row as f32,
                ));
            }
        }
        centers
    }
}

/// Hash of a cell center, combining the raw float bits of both coordinates
/// with the usual 31-multiplier scheme.
pub fn center_hash(center: Vec2) -> i32 {
    let mut hash: i32 = 1;
    for bits in [center.x.to_bits(), center.y.to_bits()] {
        hash = hash.wrapping_mul(31).wrapping_add(bits as i32);
    }
    hash
}

impl Effect for Squares {
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
            "squares" => next.squares = value.as_int(NAME, "squares")?,
            "fill_chance" => next.fill_chance = value.as_float(NAME, "fill_chance")?,
            _ => return Err(unknown(NAME, key)),
        }
        Ok(next)
    }

    fn validate(&self) -> EffectResult<()> {
        check_int(NAME, "squares", self.squares, MIN_SQUARES, MAX_SQUARES)?;
        check_float(NAME, "fill_chance", self.fill_chance, MIN_FILL_CHANCE, MAX_FILL_CHANCE)
    }

    fn draw_effect(&self, canvas: &mut Canvas) {
        let grid = SquareGrid::new(self.squares, canvas.size());
        for center in grid.centers() {
            let mut random = derive(self.seed, center_hash(center));
            let size = grid.square * random.range_f64(0.5, 1.5) as f32;
            let fill = random.next_f64();
            let style = if fill > self.fill_chance {
                Style::stroke(OUTLINE_WIDTH)
            } else {
                Style::Fill
            };
            canvas.rect(center - size / 2.0, size, Paint::solid_white(), style);
        }
    }

    fn settings_panel(&self) -> Vec<Control> {
        vec![
            int_slider("squares", "Squares", self.squares, MIN_SQUARES, MAX_SQUARES),
            float_slider("fill_chance", "Fill chance", self.fill_chance, MIN_FILL_CHANCE, MAX_FILL_CHANCE),
            seed_slider(self.seed),
        ]
    }
}
