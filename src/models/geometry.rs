// src/models/geometry.rs
// Some types for working with effect geometry

use nannou::prelude::{vec2, Vec2};
use std::f32::consts::TAU;
use std::ops::Add;

use crate::random::RandomStream;

/// A (distance, angle in radians) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarCoordinate {
    pub distance: f32,
    pub angle: f32,
}

impl PolarCoordinate {
    pub fn new(distance: f32, angle: f32) -> Self {
        Self { distance, angle }
    }

    pub fn to_offset(self) -> Vec2 {
        polar_to_cartesian(self.distance, self.angle)
    }

    pub fn from_offset(offset: Vec2) -> Self {
        Self {
            distance: offset.length(),
            angle: offset.y.atan2(offset.x),
        }
    }
}

impl From<PolarCoordinate> for Vec2 {
    fn from(polar: PolarCoordinate) -> Self {
        polar.to_offset()
    }
}

impl Add<PolarCoordinate> for Vec2 {
    type Output = Vec2;

    fn add(self, polar: PolarCoordinate) -> Vec2 {
        self + polar.to_offset()
    }
}

pub fn polar_to_cartesian(distance: f32, angle: f32) -> Vec2 {
    vec2(distance * angle.cos(), distance * angle.sin())
}

/// Direction from `a` towards `b`, in radians within (-pi, pi].
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let d = b - a;
    d.y.atan2(d.x)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Area-uniform sample inside the circle.
    ///
    /// Draw order is fixed: the radius fraction first, then the angle.
    pub fn random_point(&self, random: &mut RandomStream) -> Vec2 {
        let distance = random.next_f32().sqrt() * self.radius;
        let angle = random.next_f32() * TAU;
        self.center + PolarCoordinate::new(distance, angle)
    }

    pub fn point_at(&self, angle: f32) -> Vec2 {
        self.center + PolarCoordinate::new(self.radius, angle)
    }

    /// Boundary inclusive.
    pub fn contains(&self, point: Vec2) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    pub fn angle_to(&self, point: Vec2) -> f32 {
        angle_between(self.center, point)
    }
}

/// Point at fraction `t` along the segment from `a` to `b`.
pub fn lerp(a: Vec2, b: Vec2, t: f32) -> Vec2 {
    a + (b - a) * t
}
