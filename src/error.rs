//! Error types for the effect engine.

use thiserror::Error;

/// Contract violations at the parameter boundary.
///
/// Sliders keep values in range, so any of these reaching the engine points at
/// a bug in whatever produced the snapshot.
#[derive(Error, Debug)]
pub enum EffectError {
    #[error("{effect}: {key} = {value} is outside [{min}, {max}]")]
    InvalidParameter {
        effect: &'static str,
        key: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{effect}: {key} must be finite")]
    NonFinite { effect: &'static str, key: &'static str },

    #[error("{effect}: unknown parameter {key:?}")]
    UnknownParameter { effect: &'static str, key: String },

    #[error("{effect}: {key} expects {expected}")]
    WrongType {
        effect: &'static str,
        key: &'static str,
        expected: &'static str,
    },

    #[error("unknown effect {0:?}")]
    UnknownEffect(String),

    #[error("invalid canvas size {width}x{height}")]
    InvalidCanvas { width: f32, height: f32 },

    #[error("snapshot could not be parsed: {0}")]
    Snapshot(#[from] serde_json::Error),
}

/// Result type alias
pub type EffectResult<T> = Result<T, EffectError>;
