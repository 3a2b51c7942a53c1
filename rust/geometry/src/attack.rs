//! Ear-attack triangulator (component E): scans the post-split PSLG for
//! degree-2 vertices, removes each, and emits one triangle, replacing two
//! edges with one (or zero).

use crate::error::{Outcome, Result};
use crate::pslg::Pslg;
use crate::polyhedron::{TriangleRaw, Triangulation};

/// Attacks vertex `i`: if its degree is exactly 2, emits the triangle formed
/// with its two neighbors and collapses the two incident edges into one
/// (or removes both, if the closing edge already exists).
///
/// The vertex is never physically removed from `V`: it becomes
/// degree-0 and is skipped by later scans, but `|V|` does not shrink.
pub fn attack(pslg: &mut Pslg, tri: &mut Triangulation, i: usize) -> Result<Outcome> {
    let positions = pslg.incident_edge_positions(i);
    if positions.len() != 2 {
        return Ok(Outcome::NoOp);
    }

    let edge_a = *pslg.edges().get(positions[0]).expect("position in range");
    let edge_b = *pslg.edges().get(positions[1]).expect("position in range");
    let a = edge_a.other(i).expect("edge incident to i");
    let b = edge_b.other(i).expect("edge incident to i");

    let triangle = TriangleRaw::new(pslg.vertex(a), pslg.vertex(i), pslg.vertex(b), pslg.poly.face_data);
    tri.push(triangle)?;

    let closing_exists = pslg.has_edge(a, b);

    // remove the higher position first so the lower position stays valid.
    let (hi, lo) = if positions[0] > positions[1] {
        (positions[0], positions[1])
    } else {
        (positions[1], positions[0])
    };
    pslg.remove_edge_at(hi);
    pslg.remove_edge_at(lo);

    if !closing_exists {
        pslg.add_edge(a, b)?;
    }

    Ok(Outcome::Success)
}

/// Scans vertex indices in order; on the first index whose `attack`
/// succeeds, restarts the scan; returns once a full scan finds no ear.
pub fn attack_all(pslg: &mut Pslg, tri: &mut Triangulation) -> Result<()> {
    loop {
        let mut attacked = false;
        for i in 0..pslg.vertex_count() {
            if attack(pslg, tri, i)?.is_success() {
                tracing::trace!(vertex = i, "attack succeeded");
                attacked = true;
                break;
            }
        }
        if !attacked {
            tracing::debug!(
                triangles = tri.len(),
                edges_remaining = pslg.edge_count(),
                "attack_all reached fixpoint"
            );
            return Ok(());
        }
    }
}
