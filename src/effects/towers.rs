// src/effects/towers.rs
//
// Wide leaning strokes rising from the bottom edge, one per vertical band.

use nannou::prelude::{vec2, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3};

use super::effect::{unknown, Effect};
use super::params::*;
use crate::draw::{transparent, white, Canvas, Paint};
use crate::error::EffectResult;
use crate::random::derive;

const NAME: &str = "Towers";

const MIN_TOWERS: i32 = 1;
const MAX_TOWERS: i32 = 1000;
const MAX_HEIGHT: f64 = 2000.0;
const MIN_ANGLE: f64 = -FRAC_PI_2;
const MAX_ANGLE: f64 = FRAC_PI_2;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Towers {
    pub show: bool,
    pub seed: i32,
    pub towers: i32,
    pub max_height: f64,
    /// Exposed as a control but not read when drawing; every tower leans by
    /// its own random angle.
    pub angle: f64,
}

impl Default for Towers {
    fn default() -> Self {
        Self {
            show: true,
            seed: 0,
            towers: 15,
            max_height: 550.0,
            angle: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tower {
    pub left: f32,
    pub right: f32,
    pub base: Vec2,
    pub tip: Vec2,
}

impl Towers {
    /// Left and right edges of each band. The last band ends exactly on `width`.
    pub fn bands(&self, width: f32) -> Vec<(f32, f32)> {
        let towers = self.towers.max(1);
        let band = width / towers as f32;
        (0..towers)
            .map(|i| {
                let left = band * i as f32;
                let right = if i == towers - 1 { width } else { band * (i + 1) as f32 };
                (left, right)
            })
            .collect()
    }

    pub fn tower(&self, left: f32, right: f32, height: f32) -> Tower {
        let mut random = derive(self.seed, left as i32);
        let length = ((1.0 - random.next_f32().sqrt()) as f64 * self.max_height) as f32;
        let base = vec2((left + right) / 2.0, height);
        let lean = random.range_f64(-FRAC_PI_3, FRAC_PI_3);
        let tip = base
            - vec2(
                (length as f64 * lean.sin()) as f32,
                (length as f64 * lean.cos()) as f32,
            );
        Tower {
            left,
            right,
            base,
            tip,
        }
    }
}

impl Effect for Towers {
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
            "towers" => next.towers = value.as_int(NAME, "towers")?,
            "max_height" => next.max_height = value.as_float(NAME, "max_height")?,
            "angle" => next.angle = value.as_float(NAME, "angle")?,
            _ => return Err(unknown(NAME, key)),
        }
        Ok(next)
    }

    fn validate(&self) -> EffectResult<()> {
        check_int(NAME, "towers", self.towers, MIN_TOWERS, MAX_TOWERS)?;
        check_float(NAME, "max_height", self.max_height, 0.0, MAX_HEIGHT)?;
        check_float(NAME, "angle", self.angle, MIN_ANGLE, MAX_ANGLE)
    }

    fn draw_effect(&self, canvas: &mut Canvas) {
        for (left, right) in self.bands(canvas.width()) {
            let tower = self.tower(left, right, canvas.height());
            let brush = Paint::LinearGradient {
                start: tower.base,
                end: tower.tip,
                stops: vec![white(), transparent()],
            };
            canvas.line(tower.base, tower.tip, brush, right - left);
        }
    }

    fn settings_panel(&self) -> Vec<Control> {
        vec![
            float_slider("max_height", "Max height", self.max_height, SLIDER_MIN_POSITIVE, MAX_HEIGHT),
            int_slider("towers", "Towers", self.towers, MIN_TOWERS, MAX_TOWERS),
            float_slider("angle", "Angle", self.angle, MIN_ANGLE, MAX_ANGLE),
            seed_slider(self.seed),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::DrawCommand;
    use proptest::prelude::*;

    const SIZE: f32 = 900.0;

    #[test]
    fn test_towers_stand_on_the_bottom_edge() {
        let effect = Towers::default();
        for (left, right) in effect.bands(SIZE) {
            let tower = effect.tower(left, right, SIZE);
            assert_eq!(tower.base, vec2((left + right) / 2.0, SIZE));
            assert!(tower.tip.y <= SIZE);
            let length = (tower.tip - tower.base).length();
            assert!(length <= 550.0 + 1e-2);
            // leans at most 60 degrees from vertical
            assert!((tower.base.y - tower.tip.y) >= length * 0.5 - 1e-2);
        }
    }

    #[test]
    fn test_stroke_width_is_the_band_width() {
        let commands = Towers::default().render(vec2(SIZE, SIZE)).unwrap();
        assert_eq!(commands.len(), 15);
        for command in commands {
            match command {
                DrawCommand::Line {
                    stroke_width,
                    paint: Paint::LinearGradient { stops, .. },
                    ..
                } => {
                    assert!((stroke_width - 60.0).abs() < 1e-3);
                    assert_eq!(stops, vec![white(), transparent()]);
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_angle_parameter_does_not_change_output() {
        let plain = Towers::default();
        let leaning = plain.with_param("angle", ParamValue::Float(1.2)).unwrap();
        assert_eq!(
            plain.render(vec2(SIZE, SIZE)).unwrap(),
            leaning.render(vec2(SIZE, SIZE)).unwrap()
        );
        assert!(plain.with_param("angle", ParamValue::Float(1.6)).is_err());
    }

    #[test]
    fn test_render_is_deterministic() {
        let effect = Towers {
            seed: 314,
            towers: 400,
            ..Towers::default()
        };
        assert_eq!(effect.render(vec2(SIZE, SIZE)).unwrap(), effect.render(vec2(SIZE, SIZE)).unwrap());
    }

    proptest! {
        #[test]
        fn prop_bands_tile_the_width(towers in 1i32..=1000, width in 1.0f32..4000.0) {
            let effect = Towers { towers, ..Towers::default() };
            let bands = effect.bands(width);
            prop_assert_eq!(bands.len(), towers as usize);
            prop_assert_eq!(bands[0].0, 0.0);
            prop_assert_eq!(bands[bands.len() - 1].1, width);
            for pair in bands.windows(2) {
                prop_assert_eq!(pair[0].1, pair[1].0);
            }
        }
    }
}
