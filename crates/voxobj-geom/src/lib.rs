//! Minimal geometry types for the scene and mesh crates.
#![forbid(unsafe_code)]

use core::ops::{Add, Sub};

/// Tolerance used when comparing block positions for adjacency.
pub const UNIT_EPSILON: f32 = f32::EPSILON;

/// Returns true when `|a - b| < eps`.
#[inline]
pub fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() < eps
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Lifts integer grid coordinates into float space.
    #[inline]
    pub fn from_ints(x: i32, y: i32, z: i32) -> Self {
        Self::new(x as f32, y as f32, z as f32)
    }

    /// Component-wise tolerance comparison.
    #[inline]
    pub fn approx_eq(self, other: Vec3, eps: f32) -> bool {
        approx_eq(self.x, other.x, eps)
            && approx_eq(self.y, other.y, eps)
            && approx_eq(self.z, other.z, eps)
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}
