//! Quaternion sub-module, supplied alongside the vector kernel for the
//! renderer. The triangulation core does not consume this type.

use crate::vector::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub fn from_axis_angle(axis: Vec3, angle_radians: f32) -> Self {
        let axis = axis.normalize();
        let half = angle_radians * 0.5;
        let s = half.sin();
        Quaternion {
            x: axis.x * s,
            y: axis.y * s,
            z: axis.z * s,
            w: half.cos(),
        }
    }

    pub fn multiply(self, other: Quaternion) -> Quaternion {
        Quaternion {
            w: self.w * other.w - self.x * other.x - self.y * other.y - self.z * other.z,
            x: self.w * other.x + self.x * other.w + self.y * other.z - self.z * other.y,
            y: self.w * other.y - self.x * other.z + self.y * other.w + self.z * other.x,
            z: self.w * other.z + self.x * other.y - self.y * other.x + self.z * other.w,
        }
    }

    pub fn conjugate(self) -> Quaternion {
        Quaternion {
            x: -self.x,
            y: -self.y,
            z: -self.z,
            w: self.w,
        }
    }

    /// Rotates `v` by this quaternion: `q * (v, 0) * conjugate(q)`.
    pub fn rotate_vector(self, v: Vec3) -> Vec3 {
        let qv = Quaternion {
            x: v.x,
            y: v.y,
            z: v.z,
            w: 0.0,
        };
        let rotated = self.multiply(qv).multiply(self.conjugate());
        Vec3::new(rotated.x, rotated.y, rotated.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn identity_rotation_is_noop() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let rotated = Quaternion::IDENTITY.rotate_vector(v);
        assert_relative_eq!(rotated.x, v.x, epsilon = 1e-6);
        assert_relative_eq!(rotated.y, v.y, epsilon = 1e-6);
        assert_relative_eq!(rotated.z, v.z, epsilon = 1e-6);
    }

    #[test]
    fn quarter_turn_about_z_maps_x_to_y() {
        let q = Quaternion::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f32::consts::FRAC_PI_2);
        let rotated = q.rotate_vector(Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-5);
    }
}
