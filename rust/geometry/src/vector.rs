//! Vector kernel (component A): 3D vector arithmetic, normalization, cross
//! product, and epsilon-tolerant equality.

use std::ops::{Add, Mul, Sub};

/// A 3D point or direction with 32-bit float components.
///
/// Equality on `Vec3` is never exact; use [`Vec3::equal`] with a caller-
/// supplied epsilon, or [`Vec3::approx_eq`] for the default tolerance.
#[derive(Debug, Clone, Copy, PartialEq)]
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

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn add(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    pub fn scale(self, scalar: f32) -> Vec3 {
        Vec3::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Vec3 {
        a.add(b.sub(a).scale(t))
    }

    pub fn dot(self, other: Vec3) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Vec3) -> f32 {
        self.sub(other).magnitude()
    }

    /// Distance-based equality within `epsilon`.
    pub fn equal(self, other: Vec3, epsilon: f32) -> bool {
        self.distance(other) < epsilon
    }

    /// Equality within the default tolerance (10⁻⁶).
    pub fn approx_eq(self, other: Vec3) -> bool {
        self.equal(other, crate::config::DEFAULT_EPSILON)
    }

    /// Normalizes `self`, returning the zero vector for near-zero input
    /// rather than dividing by (near-)zero.
    pub fn normalize(self) -> Vec3 {
        let mag = self.magnitude();
        if mag < crate::config::DEFAULT_EPSILON {
            Vec3::ZERO
        } else {
            self.scale(1.0 / mag)
        }
    }

    /// Unit normal of the triangle (a, b, c): `normalize(cross(b-a, c-a))`.
    pub fn normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
        b.sub(a).cross(c.sub(a)).normalize()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::add(self, rhs)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::sub(self, rhs)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::scale(self, rhs)
    }
}

/// Packed RGBA color, one byte per channel (reference source's `Color` union).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFFFFFFFF);

    pub fn from_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color(u32::from_le_bytes([r, g, b, a]))
    }

    pub fn to_rgba(self) -> [u8; 4] {
        self.0.to_le_bytes()
    }
}

/// Carried alongside every polygon and every emitted triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceData {
    pub color: Color,
    pub normal: Vec3,
}

impl FaceData {
    pub fn new(color: Color, normal: Vec3) -> Self {
        Self { color, normal }
    }

    pub fn white(normal: Vec3) -> Self {
        Self::new(Color::WHITE, normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn equal_uses_distance_not_componentwise() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1e-7, 1e-7, 0.0);
        assert!(a.equal(b, 1e-6));
        assert!(!a.equal(b, 1e-8));
    }

    #[test]
    fn normalize_near_zero_returns_zero() {
        let v = Vec3::new(1e-8, 0.0, 0.0);
        assert_eq!(v.normalize(), Vec3::ZERO);
    }

    #[test]
    fn normalize_unit_length() {
        let v = Vec3::new(3.0, 4.0, 0.0).normalize();
        assert_relative_eq!(v.magnitude(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn normal_of_xy_triangle_is_plus_z() {
        let n = Vec3::normal(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        );
        assert_relative_eq!(n.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(n.y, 0.0, epsilon = 1e-6);
        assert_relative_eq!(n.z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 0.0, 0.0);
        assert_eq!(Vec3::lerp(a, b, 0.0), a);
        assert_eq!(Vec3::lerp(a, b, 1.0), b);
        assert_eq!(Vec3::lerp(a, b, 0.5), Vec3::new(5.0, 0.0, 0.0));
    }

    #[test]
    fn color_round_trips_channels() {
        let c = Color::from_rgba(10, 20, 30, 255);
        assert_eq!(c.to_rgba(), [10, 20, 30, 255]);
    }
}
