//! Face-plane canonicalization.
//!
//! Segment intersection only ever reasons about (x, y) coordinates, so a
//! face needs to be flattened into its own local plane before splitting
//! and attacking can run on it. This module supplies that step, grounded
//! on the orthonormal-basis construction this codebase family already
//! uses to flatten an arbitrary 3D polygon before triangulating it: build
//! a local (u, v) frame from the face's normal, project every vertex into
//! it before handing the polygon to the PSLG pipeline, and map emitted
//! triangles back to world space afterward.

use crate::vector::Vec3;

/// An orthonormal frame `(origin, u_axis, v_axis, normal)` for one face.
#[derive(Debug, Clone, Copy)]
pub struct Basis {
    pub origin: Vec3,
    pub u_axis: Vec3,
    pub v_axis: Vec3,
    pub normal: Vec3,
}

impl Basis {
    /// Builds a basis from the face's first vertex (as origin) and a unit
    /// normal. The reference axis is whichever global axis is least
    /// parallel to `normal`, matching the "pick the axis least aligned
    /// with the normal" convention for building a stable tangent frame.
    pub fn from_normal(origin: Vec3, normal: Vec3) -> Self {
        let candidates = [
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let reference = candidates
            .into_iter()
            .min_by(|a, b| {
                normal
                    .dot(*a)
                    .abs()
                    .partial_cmp(&normal.dot(*b).abs())
                    .unwrap()
            })
            .expect("three candidates");

        let u_axis = normal.cross(reference).normalize();
        let v_axis = normal.cross(u_axis).normalize();
        Self {
            origin,
            u_axis,
            v_axis,
            normal,
        }
    }

    /// Projects a world-space point into this basis: `(u, v, offset along normal)`.
    /// The `z` component is the point's signed distance off the face plane —
    /// the intersector's z-sanity check operates on exactly this value.
    pub fn project(&self, point: Vec3) -> Vec3 {
        let rel = point.sub(self.origin);
        Vec3::new(rel.dot(self.u_axis), rel.dot(self.v_axis), rel.dot(self.normal))
    }

    /// Maps a point expressed in this basis's `(u, v)` plane back to world
    /// space, dropping any residual off-plane offset (faces are planar
    /// within tolerance, per the Non-goals).
    pub fn unproject(&self, point: Vec3) -> Vec3 {
        self.origin
            .add(self.u_axis.scale(point.x))
            .add(self.v_axis.scale(point.y))
    }
}

/// Picks the plane normal to canonicalize against: the face's own
/// `FaceData` normal when non-zero, else the cross product of the first
/// two edges (mirrors [`Vec3::normal`] applied to the boundary itself).
pub fn face_normal_or_fallback(vertices: &[Vec3], supplied: Vec3) -> Vec3 {
    if supplied.magnitude() > crate::config::DEFAULT_EPSILON {
        return supplied;
    }
    if vertices.len() >= 3 {
        Vec3::normal(vertices[0], vertices[1], vertices[2])
    } else {
        Vec3::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn project_then_unproject_round_trips_xy_plane_point() {
        let basis = Basis::from_normal(Vec3::ZERO, Vec3::new(0.0, 0.0, 1.0));
        let p = Vec3::new(3.0, -2.0, 0.0);
        let projected = basis.project(p);
        let back = basis.unproject(projected);
        assert_relative_eq!(back.x, p.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-5);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-5);
    }

    #[test]
    fn project_then_unproject_round_trips_vertical_plane_point() {
        // A face lying in the xz-plane (normal pointing along -y), like a
        // cube's front face: project into local (u,v), unproject, recover.
        let basis = Basis::from_normal(Vec3::new(0.0, 0.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let p = Vec3::new(1.0, 0.0, 1.0);
        let projected = basis.project(p);
        assert_relative_eq!(projected.z, 0.0, epsilon = 1e-5);
        let back = basis.unproject(projected);
        assert_relative_eq!(back.x, p.x, epsilon = 1e-5);
        assert_relative_eq!(back.y, p.y, epsilon = 1e-5);
        assert_relative_eq!(back.z, p.z, epsilon = 1e-5);
    }
}
