pub mod config;
pub mod controllers;
pub mod draw;
pub mod effects;
pub mod error;
pub mod models;
pub mod random;
pub mod render;

pub use error::{EffectError, EffectResult};
