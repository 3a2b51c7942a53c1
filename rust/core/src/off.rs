//! OFF face reader: the in-scope concrete implementation of the
//! "external face reader" the core specifies only as an interface.
//!
//! Format, confirmed against the reference source's own minimal OFF
//! reader: a magic `OFF` line, a counts line `n_vertices n_faces n_edges`
//! (edges read but unused), `n_vertices` coordinate lines, then
//! `n_faces` lines of `size idx0 .. idx(size-1)`. Blank lines and lines
//! starting with `#` are skipped wherever a line is expected.

use std::io::{BufRead, BufReader, Read};

use triangulate_geometry::{FaceData, PolygonIndexed, Polyhedron, Vec3};

use crate::error::{Error, Result};

fn next_meaningful_line(lines: &mut std::io::Lines<impl BufRead>) -> Result<String> {
    loop {
        let line = lines
            .next()
            .ok_or_else(|| Error::OffParse("unexpected end of input".to_string()))??;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        return Ok(trimmed.to_string());
    }
}

fn parse_f32(token: &str) -> Result<f32> {
    fast_float::parse(token).map_err(|_| Error::OffParse(format!("invalid number: {token}")))
}

fn parse_usize(token: &str) -> Result<usize> {
    token
        .parse()
        .map_err(|_| Error::OffParse(format!("invalid index: {token}")))
}

/// Parses an OFF-format polyhedron from any `Read` source.
pub fn read_off<R: Read>(source: R) -> Result<Polyhedron> {
    let mut lines = BufReader::new(source).lines();

    let header = next_meaningful_line(&mut lines)?;
    if header != "OFF" {
        return Err(Error::OffParse(format!(
            "expected magic line \"OFF\", found {header:?}"
        )));
    }

    let counts_line = next_meaningful_line(&mut lines)?;
    let mut counts = counts_line.split_whitespace();
    let n_vertices: usize = parse_usize(counts.next().ok_or_else(|| {
        Error::OffParse("counts line missing vertex count".to_string())
    })?)?;
    let n_faces: usize = parse_usize(counts.next().ok_or_else(|| {
        Error::OffParse("counts line missing face count".to_string())
    })?)?;
    // edge count is read, per the reference reader, but not used.
    let _n_edges = counts.next();

    let mut vertices = Vec::with_capacity(n_vertices);
    for _ in 0..n_vertices {
        let line = next_meaningful_line(&mut lines)?;
        let mut tokens = line.split_whitespace();
        let x = parse_f32(tokens.next().ok_or_else(|| {
            Error::OffParse("vertex line missing x".to_string())
        })?)?;
        let y = parse_f32(tokens.next().ok_or_else(|| {
            Error::OffParse("vertex line missing y".to_string())
        })?)?;
        let z = parse_f32(tokens.next().ok_or_else(|| {
            Error::OffParse("vertex line missing z".to_string())
        })?)?;
        vertices.push(Vec3::new(x, y, z));
    }

    let mut faces = Vec::with_capacity(n_faces);
    for _ in 0..n_faces {
        let line = next_meaningful_line(&mut lines)?;
        let mut tokens = line.split_whitespace();
        let size: usize = parse_usize(tokens.next().ok_or_else(|| {
            Error::OffParse("face line missing size".to_string())
        })?)?;
        let mut indices = Vec::with_capacity(size);
        for _ in 0..size {
            let idx = parse_usize(tokens.next().ok_or_else(|| {
                Error::OffParse("face line has fewer indices than its declared size".to_string())
            })?)?;
            if idx >= vertices.len() {
                return Err(Error::OffParse(format!(
                    "face index {idx} out of range ({} vertices)",
                    vertices.len()
                )));
            }
            indices.push(idx);
        }
        let normal = if indices.len() >= 3 {
            Vec3::normal(
                vertices[indices[0]],
                vertices[indices[1]],
                vertices[indices[2]],
            )
        } else {
            Vec3::ZERO
        };
        faces.push(PolygonIndexed::new(indices, FaceData::white(normal)));
    }

    tracing::debug!(vertices = n_vertices, faces = n_faces, "parsed OFF polyhedron");
    Ok(Polyhedron::new(vertices, faces))
}
