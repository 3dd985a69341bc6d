// src/effects/params.rs
//
// Parameter values, range checks and the settings-panel descriptors.

use serde::{Deserialize, Serialize};

use crate::error::{EffectError, EffectResult};

/// A single parameter edit coming from a control surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParamValue {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl ParamValue {
    pub fn as_bool(self, effect: &'static str, key: &'static str) -> EffectResult<bool> {
        match self {
            ParamValue::Bool(v) => Ok(v),
            ParamValue::Int(v) => Ok(v != 0),
            ParamValue::Float(_) => Err(EffectError::WrongType {
                effect,
                key,
                expected: "a boolean",
            }),
        }
    }

    pub fn as_int(self, effect: &'static str, key: &'static str) -> EffectResult<i32> {
        match self {
            ParamValue::Int(v) => i32::try_from(v).map_err(|_| EffectError::InvalidParameter {
                effect,
                key,
                value: v as f64,
                min: i32::MIN as f64,
                max: i32::MAX as f64,
            }),
            _ => Err(EffectError::WrongType {
                effect,
                key,
                expected: "an integer",
            }),
        }
    }

    pub fn as_float(self, effect: &'static str, key: &'static str) -> EffectResult<f64> {
        match self {
            ParamValue::Float(v) => Ok(v),
            ParamValue::Int(v) => Ok(v as f64),
            ParamValue::Bool(_) => Err(EffectError::WrongType {
                effect,
                key,
                expected: "a number",
            }),
        }
    }
}

/// Describes one item of an effect's settings panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Control {
    Heading {
        label: &'static str,
    },
    Switch {
        key: &'static str,
        label: &'static str,
        value: bool,
    },
    IntSlider {
        key: &'static str,
        label: &'static str,
        value: i32,
        min: i32,
        max: i32,
    },
    FloatSlider {
        key: &'static str,
        label: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl Control {
    pub fn key(&self) -> Option<&'static str> {
        match self {
            Control::Heading { .. } => None,
            Control::Switch { key, .. }
            | Control::IntSlider { key, .. }
            | Control::FloatSlider { key, .. } => Some(*key),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Control::Heading { label }
            | Control::Switch { label, .. }
            | Control::IntSlider { label, .. }
            | Control::FloatSlider { label, .. } => *label,
        }
    }
}

/// Bounds are widened to take in `value`, so `min <= value <= max` always holds.
pub fn int_slider(key: &'static str, label: &'static str, value: i32, min: i32, max: i32) -> Control {
    Control::IntSlider {
        key,
        label,
        value,
        min: min.min(value),
        max: max.max(value),
    }
}

/// Bounds are widened to take in `value`, so `min <= value <= max` always holds.
pub fn float_slider(key: &'static str, label: &'static str, value: f64, min: f64, max: f64) -> Control {
    Control::FloatSlider {
        key,
        label,
        value,
        min: min.min(value),
        max: max.max(value),
    }
}

pub fn seed_slider(seed: i32) -> Control {
    int_slider("seed", "Random seed", seed, i32::MIN, i32::MAX)
}

/// Smallest value the positive-only sliders offer.
pub const SLIDER_MIN_POSITIVE: f64 = f32::MIN_POSITIVE as f64;

pub fn check_float(effect: &'static str, key: &'static str, value: f64, min: f64, max: f64) -> EffectResult<()> {
    if !value.is_finite() {
        return Err(EffectError::NonFinite { effect, key });
    }
    if value < min || value > max {
        return Err(EffectError::InvalidParameter {
            effect,
            key,
            value,
            min,
            max,
        });
    }
    Ok(())
}

pub fn check_int(effect: &'static str, key: &'static str, value: i32, min: i32, max: i32) -> EffectResult<()> {
    if value < min || value > max {
        return Err(EffectError::InvalidParameter {
            effect,
            key,
            value: value as f64,
            min: min as f64,
            max: max as f64,
        });
    }
    Ok(())
}

/// `low` must not exceed `high`; equal values are a valid single-value range.
pub fn check_pair(effect: &'static str, low_key: &'static str, low: f64, high: f64) -> EffectResult<()> {
    if low > high {
        return Err(EffectError::InvalidParameter {
            effect,
            key: low_key,
            value: low,
            min: f64::NEG_INFINITY,
            max: high,
        });
    }
    Ok(())
}
