// src/effects/sunflower.rs
//
// Phyllotaxis: dots laid out on a Fermat spiral at golden-angle steps,
// with the outermost ring of points pinned to the rim.

use nannou::prelude::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::effect::{unknown, Effect};
use super::params::*;
use crate::draw::{Canvas, Paint, Style};
use crate::error::EffectResult;

const NAME: &str = "Sunflower";

const MIN_RINGS: i32 = 100;
const MAX_RINGS: i32 = 1000;
const MIN_ALPHA: i32 = 1;
const MAX_ALPHA: i32 = 2;
const MAX_RADIUS: f64 = 1000.0;
const MAX_RING_RADIUS: f64 = 100.0;
const DOT_STROKE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Sunflower {
    pub show: bool,
    pub seed: i32,
    pub rings: i32,
    pub alpha: i32,
    pub radius: f64,
    pub ring_radius: f64,
}

impl Default for Sunflower {
    fn default() -> Self {
        Self {
            show: true,
            seed: 0,
            rings: 500,
            alpha: 1,
            radius: 550.0,
            ring_radius: 5.0,
        }
    }
}

impl Sunflower {
    /// Dot offsets from the canvas center, for k in 1..=rings.
    pub fn offsets(&self) -> Vec<Vec2> {
        let rings = self.rings as f32;
        let boundary = (self.alpha as f32 * rings.sqrt()).round();
        let phi = (5f32.sqrt() + 1.0) / 2.0;
        let radius = self.radius as f32;

        (1..=self.rings)
            .map(|k| {
                let k = k as f32;
                let r = if k > rings - boundary {
                    1.0
                } else {
                    (k - 0.5).sqrt() / (rings - (boundary + 1.0) / 2.0).sqrt()
                } * radius;
                let theta = TAU * k / phi.powi(2);
                vec2(r * theta.cos(), r * theta.sin())
            })
            .collect()
    }
}

impl Effect for Sunflower {
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
            "alpha" => next.alpha = value.as_int(NAME, "alpha")?,
            "radius" => next.radius = value.as_float(NAME, "radius")?,
            "ring_radius" => next.ring_radius = value.as_float(NAME, "ring_radius")?,
            _ => return Err(unknown(NAME, key)),
        }
        Ok(next)
    }

    fn validate(&self) -> EffectResult<()> {
        check_int(NAME, "rings", self.rings, MIN_RINGS, MAX_RINGS)?;
        check_int(NAME, "alpha", self.alpha, MIN_ALPHA, MAX_ALPHA)?;
        check_float(NAME, "radius", self.radius, 0.0, MAX_RADIUS)?;
        check_float(NAME, "ring_radius", self.ring_radius, 0.0, MAX_RING_RADIUS)
    }

    fn draw_effect(&self, canvas: &mut Canvas) {
        let center = canvas.center();
        for offset in self.offsets() {
            canvas.circle(
                center + offset,
                self.ring_radius as f32,
                Paint::solid_white(),
                Style::stroke(DOT_STROKE_WIDTH),
            );
        }
    }

    fn settings_panel(&self) -> Vec<Control> {
        vec![
            float_slider("radius", "Radius", self.radius, SLIDER_MIN_POSITIVE, MAX_RADIUS),
            int_slider("rings", "Rings", self.rings, MIN_RINGS, MAX_RINGS),
            int_slider("alpha", "Alpha", self.alpha, MIN_ALPHA, MAX_ALPHA),
            float_slider("ring_radius", "Ring radius", self.ring_radius, SLIDER_MIN_POSITIVE, MAX_RING_RADIUS),
            seed_slider(self.seed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;

    const SIZE: f32 = 900.0;

    fn small() -> Sunflower {
        Sunflower {
            rings: 100,
            alpha: 1,
            radius: 100.0,
            ring_radius: 1.0,
            ..Sunflower::default()
        }
    }

    #[test]
    fn test_seed_does_not_change_the_layout() {
        let expected = small().render(vec2(SIZE, SIZE)).unwrap();
        for seed in [1, -1, 99, i32::MIN, i32::MAX] {
            let effect = small().with_seed(seed);
            assert_eq!(effect.render(vec2(SIZE, SIZE)).unwrap(), expected);
        }
    }

    #[test]
    fn test_outer_points_sit_on_the_rim() {
        let offsets = small().offsets();
        assert_eq!(offsets.len(), 100);
        // b = round(1 * sqrt(100)) = 10, so k = 91..=100 are pinned
        for offset in &offsets[90..] {
            assert!((offset.length() - 100.0).abs() < 1e-3);
        }
        for offset in &offsets[..90] {
            assert!(offset.length() < 100.0);
        }
    }

    #[test]
    fn test_radii_grow_outward() {
        let offsets = Sunflower::default().offsets();
        for pair in offsets.windows(2) {
            assert!(pair[1].length() >= pair[0].length() - 1e-3);
        }
    }

    #[test]
    fn test_dots_are_thin_stroked_circles() {
        let commands = small().render(vec2(SIZE, SIZE)).unwrap();
        assert_eq!(commands.len(), 100);
        for command in commands {
            match command {
                DrawCommand::Circle { radius, style, .. } => {
                    assert_eq!(radius, 1.0);
                    assert_eq!(style, Style::stroke(DOT_STROKE_WIDTH));
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_alpha_is_bounded() {
        assert!(small().with_param("alpha", ParamValue::Int(2)).is_ok());
        assert!(small().with_param("alpha", ParamValue::Int(3)).is_err());
        assert!(small().with_param("rings", ParamValue::Int(99)).is_err());
    }
}
