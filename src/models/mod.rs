pub mod geometry;

pub use geometry::{angle_between, lerp, polar_to_cartesian, Circle, PolarCoordinate};
