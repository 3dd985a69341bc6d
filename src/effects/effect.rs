// src/effects/effect.rs
//
// The contract every effect implements.

use nannou::prelude::Vec2;

use super::params::{Control, ParamValue};
use crate::draw::{Canvas, DrawCommand};
use crate::error::{EffectError, EffectResult};

pub trait Effect {
    /// Display name, used as the settings panel heading.
    fn name(&self) -> &'static str;
    fn show(&self) -> bool;
    fn seed(&self) -> i32;

    /// Copy with only `show` replaced.
    fn with_show(&self, show: bool) -> Self
    where
        Self: Sized;

    /// Copy with only `seed` replaced.
    fn with_seed(&self, seed: i32) -> Self
    where
        Self: Sized;

    /// Copy with one effect-specific field replaced. Not validated.
    fn copy_with(&self, key: &str, value: ParamValue) -> EffectResult<Self>
    where
        Self: Sized;

    /// Check every field against its declared range.
    fn validate(&self) -> EffectResult<()>;

    /// The effect's algorithm. Only called on validated, shown effects.
    fn draw_effect(&self, canvas: &mut Canvas);

    /// The effect-specific part of the settings panel.
    fn settings_panel(&self) -> Vec<Control>;

    fn draw(&self, canvas: &mut Canvas) -> EffectResult<()> {
        if self.show() {
            self.validate()?;
            self.draw_effect(canvas);
        }
        Ok(())
    }

    /// Render from scratch onto an empty canvas of the given size.
    fn render(&self, size: Vec2) -> EffectResult<Vec<DrawCommand>> {
        check_canvas(size)?;
        let mut canvas = Canvas::new(size);
        self.draw(&mut canvas)?;
        Ok(canvas.into_commands())
    }

    /// Copy with one field replaced, validated.
    fn with_param(&self, key: &str, value: ParamValue) -> EffectResult<Self>
    where
        Self: Sized,
    {
        let next = match key {
            "show" => self.with_show(value.as_bool(self.name(), "show")?),
            "seed" => self.with_seed(value.as_int(self.name(), "seed")?),
            _ => self.copy_with(key, value)?,
        };
        next.validate()?;
        Ok(next)
    }

    fn settings(&self) -> Vec<Control> {
        let mut controls = vec![
            Control::Heading { label: self.name() },
            Control::Switch {
                key: "show",
                label: "Draw",
                value: self.show(),
            },
        ];
        if self.show() {
            controls.extend(self.settings_panel());
        }
        controls
    }
}

pub fn check_canvas(size: Vec2) -> EffectResult<()> {
    if size.is_finite() && size.x > 0.0 && size.y > 0.0 {
        Ok(())
    } else {
        Err(EffectError::InvalidCanvas {
            width: size.x,
            height: size.y,
        })
    }
}

pub(crate) fn unknown(effect: &'static str, key: &str) -> EffectError {
    EffectError::UnknownParameter {
        effect,
        key: key.to_string(),
    }
}
