//! Splitter/fixpoint driver (component D): repeatedly finds a crossing edge
//! pair, splits at the intersection, deduplicates, until fixpoint.

use crate::error::Result;
use crate::pslg::Pslg;

/// Mutates `pslg` until no edge pair crosses.
///
/// Each successful split strictly grows `|V|`/`|E|` before dedup; dedup
/// never grows them. Step 4's guard (comparing counts before/after a full
/// split+dedup round) stops the loop the instant a round makes no net
/// progress, rather than risking the split+dedup oscillation described in
/// the design notes.
pub fn split_entirely(pslg: &mut Pslg) -> Result<()> {
    loop {
        let before = (pslg.vertex_count(), pslg.edge_count());

        let mut split_happened = false;
        'scan: for i in 0..pslg.edge_count() {
            for j in 0..pslg.edge_count() {
                if pslg.split(i, j)?.is_success() {
                    tracing::trace!(e1 = i, e2 = j, "split succeeded");
                    split_happened = true;
                    break 'scan;
                }
            }
        }

        if !split_happened {
            tracing::debug!(
                vertices = pslg.vertex_count(),
                edges = pslg.edge_count(),
                "split_entirely reached fixpoint"
            );
            return Ok(());
        }

        pslg.dedup();

        let after = (pslg.vertex_count(), pslg.edge_count());
        if after == before {
            tracing::debug!(
                vertices = pslg.vertex_count(),
                edges = pslg.edge_count(),
                "split_entirely stopped: split+dedup cancelled out"
            );
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::polyhedron::PolygonRaw;
    use crate::vector::{FaceData, Vec3};

    #[test]
    fn square_has_no_crossings_to_split() {
        let poly = PolygonRaw::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            FaceData::white(Vec3::new(0.0, 0.0, 1.0)),
        );
        let mut pslg = Pslg::from_polygon(poly, Config::default()).unwrap();
        split_entirely(&mut pslg).unwrap();
        assert_eq!(pslg.vertex_count(), 4);
        assert_eq!(pslg.edge_count(), 4);
    }

    #[test]
    fn bowtie_splits_into_midpoint_vertex() {
        // (a) (0,0) (b) (1,1) (c) (1,0) (d) (0,1): edges 0-1 and 2-3 cross at (0.5,0.5).
        let poly = PolygonRaw::new(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            FaceData::white(Vec3::new(0.0, 0.0, 1.0)),
        );
        let mut pslg = Pslg::from_polygon(poly, Config::default()).unwrap();
        split_entirely(&mut pslg).unwrap();
        // one new vertex at the crossing; no further crossings remain.
        assert_eq!(pslg.vertex_count(), 5);
        let has_midpoint = (0..pslg.vertex_count())
            .any(|i| pslg.vertex(i).approx_eq(Vec3::new(0.5, 0.5, 0.0)));
        assert!(has_midpoint);
    }
}
