//! Data model shared across components and the polyhedron driver
//! (component F): for each face, runs the PSLG split + ear-attack pipeline
//! and merges per-face triangle lists into one output.

use crate::attack::attack_all;
use crate::config::{Config, DEFAULT_BUCKET_BITS};
use crate::error::{Error, Result};
use crate::projection::{face_normal_or_fallback, Basis};
use crate::pslg::{AlignedArray, Pslg};
use crate::splitter::split_entirely;
use crate::vector::{FaceData, Vec3};

/// An ordered boundary cycle (input order) plus the face's shared data.
/// No constraint that the polygon be simple or convex; edge *i* connects
/// vertex *i* to vertex *(i+1) mod n*.
#[derive(Debug, Clone)]
pub struct PolygonRaw {
    pub vertices: Vec<Vec3>,
    pub face_data: FaceData,
}

impl PolygonRaw {
    pub fn new(vertices: Vec<Vec3>, face_data: FaceData) -> Self {
        Self {
            vertices,
            face_data,
        }
    }
}

/// A polygon as stored on a [`Polyhedron`]: indices into the shared vertex
/// table plus its own `FaceData`.
#[derive(Debug, Clone)]
pub struct PolygonIndexed {
    pub indices: Vec<usize>,
    pub face_data: FaceData,
}

impl PolygonIndexed {
    pub fn new(indices: Vec<usize>, face_data: FaceData) -> Self {
        Self { indices, face_data }
    }
}

/// A value-typed resolved triangle: three coordinates, not indices, plus
/// the inherited `FaceData`: triangles inherit the face's FaceData, no
/// per-triangle recomputation of the normal.
#[derive(Debug, Clone, Copy)]
pub struct TriangleRaw {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    pub face_data: FaceData,
}

impl TriangleRaw {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, face_data: FaceData) -> Self {
        Self {
            v0,
            v1,
            v2,
            face_data,
        }
    }

    /// Unsigned area in 3-space: `0.5 * |cross(v1-v0, v2-v0)|`.
    pub fn area(&self) -> f32 {
        0.5 * (self.v1 - self.v0).cross(self.v2 - self.v0).magnitude()
    }

    /// Signed area of the triangle's xy-projection (shoelace formula),
    /// used by the area-conservation check.
    pub fn signed_area_xy(&self) -> f32 {
        0.5 * ((self.v1.x - self.v0.x) * (self.v2.y - self.v0.y)
            - (self.v2.x - self.v0.x) * (self.v1.y - self.v0.y))
    }
}

/// An append-only, owning sequence of [`TriangleRaw`]. Backed by the
/// same aligned-capacity array as the PSLG stores, since the reference
/// source's capacity-doubling policy applies to every growable array.
pub struct Triangulation {
    triangles: AlignedArray<TriangleRaw>,
}

impl Triangulation {
    pub fn new() -> Self {
        Self {
            triangles: AlignedArray::new(DEFAULT_BUCKET_BITS),
        }
    }

    pub fn push(&mut self, triangle: TriangleRaw) -> Result<()> {
        self.triangles
            .push(triangle)
            .map_err(|(requested, max)| Error::TriangulationRealloc { requested, max })
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn triangles(&self) -> &[TriangleRaw] {
        self.triangles.as_slice()
    }

    /// Appends another triangulation's triangles by copying: per-face
    /// triangulations are merged into the global one this way, not by
    /// transferring ownership.
    pub fn extend_from(&mut self, other: &Triangulation) -> Result<()> {
        for triangle in other.triangles() {
            self.push(*triangle)?;
        }
        Ok(())
    }
}

impl Default for Triangulation {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs split + ear-attack on one face, returning its triangles.
///
/// The face is first canonicalized into its own local (u, v) plane
/// ([`crate::projection`]) so that faces whose plane is not the global
/// xy-plane — e.g. a cube's side faces — still produce correct splits and
/// ears; emitted triangles are mapped back to world space before returning.
pub fn triangulate_polygon(poly: PolygonRaw, config: Config) -> Result<Triangulation> {
    if poly.vertices.is_empty() {
        return Err(Error::DegenerateFace("polygon has 0 vertices".to_string()));
    }
    let normal = face_normal_or_fallback(&poly.vertices, poly.face_data.normal);
    let basis = Basis::from_normal(poly.vertices[0], normal);
    let local_vertices: Vec<Vec3> = poly.vertices.iter().map(|v| basis.project(*v)).collect();
    let local_poly = PolygonRaw::new(local_vertices, poly.face_data);

    let mut pslg = Pslg::from_polygon(local_poly, config)?;
    split_entirely(&mut pslg)?;
    let mut local_tri = Triangulation::new();
    attack_all(&mut pslg, &mut local_tri)?;

    let mut tri = Triangulation::new();
    for t in local_tri.triangles() {
        tri.push(TriangleRaw::new(
            basis.unproject(t.v0),
            basis.unproject(t.v1),
            basis.unproject(t.v2),
            t.face_data,
        ))?;
    }
    Ok(tri)
}

/// A shared vertex table plus a sequence of indexed polygons, produced by
/// a face reader and consumed read-only by the driver below.
#[derive(Debug, Clone)]
pub struct Polyhedron {
    pub vertices: Vec<Vec3>,
    pub faces: Vec<PolygonIndexed>,
}

impl Polyhedron {
    pub fn new(vertices: Vec<Vec3>, faces: Vec<PolygonIndexed>) -> Self {
        Self { vertices, faces }
    }

    fn resolve_face(&self, face: &PolygonIndexed) -> Result<PolygonRaw> {
        let mut vertices = Vec::with_capacity(face.indices.len());
        for &idx in &face.indices {
            let v = *self
                .vertices
                .get(idx)
                .ok_or(Error::VertexIndexOutOfRange {
                    index: idx,
                    len: self.vertices.len(),
                })?;
            vertices.push(v);
        }
        Ok(PolygonRaw::new(vertices, face.face_data))
    }

    /// Sequential polyhedron driver: for each face,
    /// resolve indices to coordinates, run the core pipeline, and append
    /// the per-face triangles to the global output in face-iteration order.
    pub fn triangulate(&self, config: Config) -> Result<Triangulation> {
        let start = std::time::Instant::now();
        let mut output = Triangulation::new();
        for (idx, face) in self.faces.iter().enumerate() {
            let poly = self.resolve_face(face)?;
            let per_face = triangulate_polygon(poly, config)?;
            tracing::debug!(
                face = idx,
                triangles = per_face.len(),
                "triangulated face"
            );
            output.extend_from(&per_face)?;
        }
        tracing::info!(
            faces = self.faces.len(),
            triangles = output.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "triangulated polyhedron"
        );
        Ok(output)
    }

    /// Optional parallel path: each face is processed independently on
    /// a `rayon` pool, then concatenated in face-iteration order, so the
    /// result is identical to the sequential path regardless of completion
    /// order.
    pub fn triangulate_parallel(&self, config: Config) -> Result<Triangulation> {
        use rayon::prelude::*;

        let start = std::time::Instant::now();
        let per_face: Result<Vec<Triangulation>> = self
            .faces
            .par_iter()
            .map(|face| {
                let poly = self.resolve_face(face)?;
                triangulate_polygon(poly, config)
            })
            .collect();
        let per_face = per_face?;

        let mut output = Triangulation::new();
        for tri in &per_face {
            output.extend_from(tri)?;
        }
        tracing::info!(
            faces = self.faces.len(),
            triangles = output.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "triangulated polyhedron (parallel)"
        );
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::Color;

    fn cube() -> Polyhedron {
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
        ];
        let quad = |indices: [usize; 4], normal: Vec3| {
            PolygonIndexed::new(indices.to_vec(), FaceData::new(Color::WHITE, normal))
        };
        let faces = vec![
            quad([0, 3, 2, 1], Vec3::new(0.0, 0.0, -1.0)), // bottom
            quad([4, 5, 6, 7], Vec3::new(0.0, 0.0, 1.0)),  // top
            quad([0, 1, 5, 4], Vec3::new(0.0, -1.0, 0.0)), // front
            quad([1, 2, 6, 5], Vec3::new(1.0, 0.0, 0.0)),  // right
            quad([2, 3, 7, 6], Vec3::new(0.0, 1.0, 0.0)),  // back
            quad([3, 0, 4, 7], Vec3::new(-1.0, 0.0, 0.0)), // left
        ];
        Polyhedron::new(vertices, faces)
    }

    #[test]
    fn cube_triangulates_to_twelve_triangles_area_six() {
        let poly = cube();
        let tri = poly.triangulate(Config::default()).unwrap();
        assert_eq!(tri.len(), 12);
        let total_area: f32 = tri.triangles().iter().map(|t| t.area()).sum();
        assert!((total_area - 6.0).abs() < 1e-4);
    }

    #[test]
    fn parallel_and_sequential_agree_on_triangle_count() {
        let poly = cube();
        let seq = poly.triangulate(Config::default()).unwrap();
        let par = poly.triangulate_parallel(Config::default()).unwrap();
        assert_eq!(seq.len(), par.len());
    }

    #[test]
    fn reversed_winding_face_still_yields_four_triangles() {
        // Tetrahedron with one face (index 3) listed clockwise relative to
        // the others. Winding must not affect triangle count.
        let vertices = vec![
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
        ];
        let fd = FaceData::white(Vec3::new(0.0, 0.0, 1.0));
        let faces = vec![
            PolygonIndexed::new(vec![0, 1, 2], fd),
            PolygonIndexed::new(vec![0, 3, 1], fd),
            PolygonIndexed::new(vec![1, 3, 2], fd),
            PolygonIndexed::new(vec![2, 3, 0], fd), // clockwise relative to the rest
        ];
        let poly = Polyhedron::new(vertices, faces);
        let tri = poly.triangulate(Config::default()).unwrap();
        assert_eq!(tri.len(), 4);
    }

    #[test]
    fn vertex_containment_triangle() {
        let poly = PolygonRaw::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            FaceData::white(Vec3::new(0.0, 0.0, 1.0)),
        );
        let tri = triangulate_polygon(poly.clone(), Config::default()).unwrap();
        for original in &poly.vertices {
            let found = tri.triangles().iter().any(|t| {
                t.v0.approx_eq(*original) || t.v1.approx_eq(*original) || t.v2.approx_eq(*original)
            });
            assert!(found, "vertex {:?} missing from triangulation", original);
        }
    }
}
