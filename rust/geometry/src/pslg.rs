//! PSLG store (component C): owns the mutable vertex set and edge list of
//! one in-progress face, backed by aligned-capacity arrays rather than a
//! plain growable `Vec`, so the reference source's allocation discipline
//! is observable and testable.

use crate::config::Config;
use crate::error::{Error, Outcome, Result};
use crate::intersect::intersect_segments;
use crate::polyhedron::PolygonRaw;
use crate::vector::Vec3;

/// Aligned capacity for `count` items at `bucket_bits`: `max(1, round_up(count, 2^bucket_bits))`.
pub fn bit_align(count: usize, bucket_bits: u32) -> usize {
    let mask = (1usize << bucket_bits) - 1;
    ((count + mask) & !mask).max(1)
}

/// True if `old_count` and `new_count` fall in different aligned buckets,
/// i.e. a reallocation is actually needed.
pub fn realign(old_count: usize, new_count: usize, bucket_bits: u32) -> bool {
    bit_align(old_count, bucket_bits) != bit_align(new_count, bucket_bits)
}

/// A growable array that only reallocates when crossing an aligned-bucket
/// boundary, and whose grow operation can fail, modeling the reference
/// source's allocate-or-fail discipline.
#[derive(Debug, Clone)]
pub struct AlignedArray<T> {
    items: Vec<T>,
    bucket_bits: u32,
    capacity: usize,
    max_capacity: usize,
}

impl<T> AlignedArray<T> {
    pub fn new(bucket_bits: u32) -> Self {
        Self::with_max_capacity(bucket_bits, usize::MAX)
    }

    /// `max_capacity` bounds how large the aligned capacity may grow before
    /// `push`/`reserve` report a fatal reallocation error; tests use a small
    /// bound to exercise that path deterministically.
    pub fn with_max_capacity(bucket_bits: u32, max_capacity: usize) -> Self {
        Self {
            items: Vec::new(),
            bucket_bits,
            capacity: bit_align(0, bucket_bits),
            max_capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    fn site_error(&self, requested: usize) -> (usize, usize) {
        (requested, self.max_capacity)
    }

    /// Ensures capacity for `new_count` items, reallocating only when the
    /// aligned bucket actually changes.
    fn reserve(&mut self, new_count: usize) -> std::result::Result<(), (usize, usize)> {
        let new_capacity = bit_align(new_count, self.bucket_bits);
        if new_capacity > self.max_capacity {
            return Err(self.site_error(new_capacity));
        }
        if realign(self.items.len(), new_count, self.bucket_bits) {
            self.capacity = new_capacity;
        }
        Ok(())
    }

    pub fn push(&mut self, value: T) -> std::result::Result<(), (usize, usize)> {
        self.reserve(self.items.len() + 1)?;
        self.items.push(value);
        Ok(())
    }

    /// Shrinks backing storage's aligned capacity to fit the current count;
    /// requested explicitly by dedup, never implicit on removal.
    pub fn shrink_to_fit(&mut self) {
        self.capacity = bit_align(self.items.len(), self.bucket_bits);
        self.items.shrink_to_fit();
    }

    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.items.get_mut(index)
    }

    pub fn aligned_capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

/// An unordered pair of vertex indices. `Edge::new` normalizes storage order
/// but equality is by the underlying set `{u, v}`.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub u: usize,
    pub v: usize,
}

impl Edge {
    pub fn new(u: usize, v: usize) -> Self {
        Self { u, v }
    }

    pub fn same_pair(self, other: Edge) -> bool {
        (self.u == other.u && self.v == other.v) || (self.u == other.v && self.v == other.u)
    }

    pub fn shares_vertex(self, other: Edge) -> bool {
        self.u == other.u || self.u == other.v || self.v == other.u || self.v == other.v
    }

    pub fn incident(self, vertex: usize) -> bool {
        self.u == vertex || self.v == vertex
    }

    /// The other endpoint of this edge, given one of its endpoints.
    pub fn other(self, vertex: usize) -> Option<usize> {
        if self.u == vertex {
            Some(self.v)
        } else if self.v == vertex {
            Some(self.u)
        } else {
            None
        }
    }
}

/// The mutable planar straight-line graph of one in-progress face.
pub struct Pslg {
    pub(crate) v: AlignedArray<Vec3>,
    pub(crate) e: AlignedArray<Edge>,
    pub poly: PolygonRaw,
    pub config: Config,
}

impl Pslg {
    /// Copies the boundary, assigning edges in cyclic order (edge *i*
    /// connects vertex *i* to vertex *(i+1) mod n*).
    pub fn from_polygon(poly: PolygonRaw, config: Config) -> Result<Self> {
        let n = poly.vertices.len();
        if n < 3 {
            return Err(Error::DegenerateFace(format!(
                "polygon has {n} vertices, need at least 3"
            )));
        }
        let mut v = AlignedArray::new(config.bucket_bits);
        for vertex in &poly.vertices {
            v.push(*vertex)
                .map_err(|(requested, max)| Error::VertexStoreRealloc { requested, max })?;
        }
        let mut e = AlignedArray::new(config.bucket_bits);
        for i in 0..n {
            e.push(Edge::new(i, (i + 1) % n))
                .map_err(|(requested, max)| Error::EdgeStoreRealloc { requested, max })?;
        }
        Ok(Self {
            v,
            e,
            poly,
            config,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.v.len()
    }

    pub fn edge_count(&self) -> usize {
        self.e.len()
    }

    pub fn vertex(&self, i: usize) -> Vec3 {
        *self.v.get(i).expect("vertex index in range")
    }

    pub fn edges(&self) -> &[Edge] {
        self.e.as_slice()
    }

    fn push_vertex(&mut self, vertex: Vec3) -> Result<usize> {
        self.v
            .push(vertex)
            .map_err(|(requested, max)| Error::VertexStoreRealloc { requested, max })?;
        Ok(self.v.len() - 1)
    }

    fn push_edge(&mut self, edge: Edge) -> Result<()> {
        self.e
            .push(edge)
            .map_err(|(requested, max)| Error::EdgeStoreRealloc { requested, max })
    }

    /// Degree (incident edge count) of vertex `i`.
    pub fn degree(&self, i: usize) -> usize {
        self.e.iter().filter(|edge| edge.incident(i)).count()
    }

    /// Positions in `E` of edges incident to `vertex`.
    pub fn incident_edge_positions(&self, vertex: usize) -> Vec<usize> {
        self.e
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.incident(vertex))
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Whether an edge connecting `{a, b}` already exists.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.e.iter().any(|edge| edge.same_pair(Edge::new(a, b)))
    }

    /// Removes the edge at array position `pos`.
    pub fn remove_edge_at(&mut self, pos: usize) -> Edge {
        self.e.remove(pos)
    }

    /// Appends a new edge `(a, b)`.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<()> {
        self.push_edge(Edge::new(a, b))
    }

    /// `split(pslg, e1, e2)`: if the two edges share a vertex, no-op.
    /// Otherwise intersects them; on a crossing, appends the intersection
    /// as a new vertex and rewires the two edges plus two new closing edges.
    pub fn split(&mut self, e1: usize, e2: usize) -> Result<Outcome> {
        let edge1 = *self.e.get(e1).ok_or(Error::VertexIndexOutOfRange {
            index: e1,
            len: self.e.len(),
        })?;
        let edge2 = *self.e.get(e2).ok_or(Error::VertexIndexOutOfRange {
            index: e2,
            len: self.e.len(),
        })?;

        if edge1.shares_vertex(edge2) {
            return Ok(Outcome::NoOp);
        }

        let a = self.vertex(edge1.u);
        let b = self.vertex(edge1.v);
        let c = self.vertex(edge2.u);
        let d = self.vertex(edge2.v);

        let Some(w_point) = intersect_segments(a, b, c, d, self.config.epsilon) else {
            return Ok(Outcome::NoOp);
        };

        let w = self.push_vertex(w_point)?;
        let (u1, v1) = (edge1.u, edge1.v);
        let (u2, v2) = (edge2.u, edge2.v);

        *self.e.get_mut(e1).expect("e1 in range") = Edge::new(u1, w);
        *self.e.get_mut(e2).expect("e2 in range") = Edge::new(u2, w);
        self.push_edge(Edge::new(v1, w))?;
        self.push_edge(Edge::new(v2, w))?;

        Ok(Outcome::Success)
    }

    /// Finds any two vertex positions `i < j` with `V[i] ≈ V[j]`, merges `j`
    /// into `i`, and shifts every later index down by one. Idempotent.
    pub fn dedup_vertex_once(&mut self) -> Outcome {
        let n = self.v.len();
        let eps = self.config.epsilon;
        for i in 0..n {
            for j in (i + 1)..n {
                if self.vertex(i).equal(self.vertex(j), eps) {
                    self.v.remove(j);
                    self.remap_after_vertex_removal(i, j);
                    self.v.shrink_to_fit();
                    return Outcome::Success;
                }
            }
        }
        Outcome::NoOp
    }

    fn remap_after_vertex_removal(&mut self, kept: usize, removed: usize) {
        for idx in 0..self.e.len() {
            let edge = *self.e.get(idx).unwrap();
            let remap = |x: usize| -> usize {
                if x == removed {
                    kept
                } else if x > removed {
                    x - 1
                } else {
                    x
                }
            };
            *self.e.get_mut(idx).unwrap() = Edge::new(remap(edge.u), remap(edge.v));
        }
    }

    /// Iterates [`Pslg::dedup_vertex_once`] to fixpoint.
    pub fn dedup_vertex(&mut self) -> Outcome {
        let mut any = Outcome::NoOp;
        while self.dedup_vertex_once() == Outcome::Success {
            any = Outcome::Success;
        }
        any
    }

    /// Finds any two edge positions encoding the same unordered pair and
    /// removes the later one.
    pub fn dedup_edge_once(&mut self) -> Outcome {
        let n = self.e.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let ei = *self.e.get(i).unwrap();
                let ej = *self.e.get(j).unwrap();
                if ei.same_pair(ej) {
                    self.e.remove(j);
                    self.e.shrink_to_fit();
                    return Outcome::Success;
                }
            }
        }
        Outcome::NoOp
    }

    /// Iterates [`Pslg::dedup_edge_once`] to fixpoint.
    pub fn dedup_edge(&mut self) -> Outcome {
        let mut any = Outcome::NoOp;
        while self.dedup_edge_once() == Outcome::Success {
            any = Outcome::Success;
        }
        any
    }

    /// `dedup_vertex` to fixpoint, then `dedup_edge` to fixpoint.
    pub fn dedup(&mut self) -> Outcome {
        let a = self.dedup_vertex();
        let b = self.dedup_edge();
        if a.is_success() || b.is_success() {
            Outcome::Success
        } else {
            Outcome::NoOp
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::FaceData;

    fn square() -> PolygonRaw {
        PolygonRaw::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            FaceData::white(Vec3::new(0.0, 0.0, 1.0)),
        )
    }

    fn bowtie() -> PolygonRaw {
        PolygonRaw::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            FaceData::white(Vec3::new(0.0, 0.0, 1.0)),
        )
    }

    #[test]
    fn bit_align_matches_worked_examples() {
        assert_eq!(bit_align(0, 4), 1);
        assert_eq!(bit_align(1, 4), 16);
        assert_eq!(bit_align(16, 4), 16);
        assert_eq!(bit_align(17, 4), 32);
    }

    #[test]
    fn realign_only_on_bucket_crossing() {
        assert!(!realign(1, 15, 4));
        assert!(realign(15, 17, 4));
    }

    #[test]
    fn from_polygon_builds_cyclic_edges() {
        let pslg = Pslg::from_polygon(square(), Config::default()).unwrap();
        assert_eq!(pslg.vertex_count(), 4);
        assert_eq!(pslg.edge_count(), 4);
        assert!(pslg.edges()[3].incident(0) && pslg.edges()[3].incident(3));
    }

    #[test]
    fn split_adjacent_edges_is_noop() {
        let mut pslg = Pslg::from_polygon(square(), Config::default()).unwrap();
        assert_eq!(pslg.split(0, 1).unwrap(), Outcome::NoOp);
    }

    #[test]
    fn split_crossing_diagonals_increases_v_and_e() {
        let mut pslg = Pslg::from_polygon(bowtie(), Config::default()).unwrap();
        let (v0, e0) = (pslg.vertex_count(), pslg.edge_count());
        let outcome = pslg.split(0, 2).unwrap();
        assert_eq!(outcome, Outcome::Success);
        assert_eq!(pslg.vertex_count(), v0 + 1);
        assert_eq!(pslg.edge_count(), e0 + 2);
    }

    #[test]
    fn dedup_vertex_merges_near_duplicates_and_is_idempotent() {
        let mut pslg = Pslg::from_polygon(square(), Config::default()).unwrap();
        pslg.push_vertex(Vec3::new(1e-7, 0.0, 0.0)).unwrap();
        assert_eq!(pslg.dedup_vertex(), Outcome::Success);
        let after_first = (pslg.vertex_count(), pslg.edge_count());
        assert_eq!(pslg.dedup_vertex(), Outcome::NoOp);
        assert_eq!((pslg.vertex_count(), pslg.edge_count()), after_first);
    }

    #[test]
    fn dedup_edge_removes_duplicate_unordered_pair() {
        let mut pslg = Pslg::from_polygon(square(), Config::default()).unwrap();
        let e = pslg.edges()[0];
        pslg.push_edge(Edge::new(e.v, e.u)).unwrap();
        assert_eq!(pslg.dedup_edge(), Outcome::Success);
        assert_eq!(pslg.edge_count(), 4);
    }

    #[test]
    fn aligned_array_reports_fatal_error_past_max_capacity() {
        let mut arr: AlignedArray<u32> = AlignedArray::with_max_capacity(4, 16);
        for i in 0..16 {
            arr.push(i).unwrap();
        }
        assert!(arr.push(16).is_err());
    }
}
