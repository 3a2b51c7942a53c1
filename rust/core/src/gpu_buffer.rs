//! GPU vertex buffer sink: interleaved `(position[3], normal[3],
//! color[4 bytes])` records, 28 bytes per vertex, one record per
//! triangle corner — matching the reference source's `draw_triangulation`,
//! which reuses the triangle's own face normal for all three corners
//! rather than computing per-vertex normals.

use triangulate_geometry::{TriangleRaw, Triangulation};

pub const VERTEX_SIZE_BYTES: usize = 28;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GpuVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [u8; 4],
}

impl GpuVertex {
    pub fn to_bytes(self) -> [u8; VERTEX_SIZE_BYTES] {
        let mut bytes = [0u8; VERTEX_SIZE_BYTES];
        let mut offset = 0;
        for component in self.position {
            bytes[offset..offset + 4].copy_from_slice(&component.to_le_bytes());
            offset += 4;
        }
        for component in self.normal {
            bytes[offset..offset + 4].copy_from_slice(&component.to_le_bytes());
            offset += 4;
        }
        bytes[offset..offset + 4].copy_from_slice(&self.color);
        bytes
    }
}

fn corner_vertex(triangle: &TriangleRaw, position: [f32; 3]) -> GpuVertex {
    let n = triangle.face_data.normal;
    GpuVertex {
        position,
        normal: [n.x, n.y, n.z],
        color: triangle.face_data.color.to_rgba(),
    }
}

/// Packs one [`GpuVertex`] per corner of every triangle, in `v0, v1, v2` order.
pub fn pack_vertices(triangulation: &Triangulation) -> Vec<GpuVertex> {
    let mut out = Vec::with_capacity(triangulation.len() * 3);
    for triangle in triangulation.triangles() {
        out.push(corner_vertex(triangle, [triangle.v0.x, triangle.v0.y, triangle.v0.z]));
        out.push(corner_vertex(triangle, [triangle.v1.x, triangle.v1.y, triangle.v1.z]));
        out.push(corner_vertex(triangle, [triangle.v2.x, triangle.v2.y, triangle.v2.z]));
    }
    out
}

/// Packs the interleaved byte buffer directly, ready for a single
/// per-frame upload.
pub fn pack_bytes(triangulation: &Triangulation) -> Vec<u8> {
    let vertices = pack_vertices(triangulation);
    let mut bytes = Vec::with_capacity(vertices.len() * VERTEX_SIZE_BYTES);
    for vertex in vertices {
        bytes.extend_from_slice(&vertex.to_bytes());
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use triangulate_geometry::{Color, FaceData, Vec3};

    #[test]
    fn packs_three_corners_per_triangle_at_28_bytes_each() {
        let mut tri = Triangulation::new();
        tri.push(TriangleRaw::new(
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            FaceData::new(Color::WHITE, Vec3::new(0.0, 0.0, 1.0)),
        ))
        .unwrap();

        let vertices = pack_vertices(&tri);
        assert_eq!(vertices.len(), 3);
        assert!(vertices.iter().all(|v| v.normal == [0.0, 0.0, 1.0]));

        let bytes = pack_bytes(&tri);
        assert_eq!(bytes.len(), 3 * VERTEX_SIZE_BYTES);
    }
}
