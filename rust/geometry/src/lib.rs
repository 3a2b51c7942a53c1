// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Triangulate Geometry
//!
//! The planar straight-line graph (PSLG) splitting and ear-attack engine
//! that turns a raw polygonal face into non-overlapping triangles, plus the
//! polyhedron-level driver that feeds it one face at a time.
//!
//! ## Pipeline
//!
//! - [`vector`] — vector kernel: arithmetic, normalization, cross product,
//!   epsilon-tolerant equality.
//! - [`intersect`] — segment intersector: does `[a,b]` cross `[c,d]`?
//! - [`pslg`] — the PSLG store: aligned-capacity vertex/edge arrays,
//!   `split`, `dedup_vertex`, `dedup_edge`.
//! - [`splitter`] — `split_entirely`, the outer fixpoint driver.
//! - [`attack`] — the ear-attack triangulator and its `attack_all` driver.
//! - [`polyhedron`] — the data model (`PolygonRaw`, `Triangulation`,
//!   `Polyhedron`) and the per-face orchestration driver.
//! - [`projection`] — flattens an arbitrary-plane face into a local 2D
//!   frame before splitting, and maps triangles back afterward.
//!
//! ## Quick start
//!
//! ```rust
//! use triangulate_geometry::config::Config;
//! use triangulate_geometry::polyhedron::{triangulate_polygon, PolygonRaw};
//! use triangulate_geometry::vector::{FaceData, Vec3};
//!
//! let square = PolygonRaw::new(
//!     vec![
//!         Vec3::new(0.0, 0.0, 0.0),
//!         Vec3::new(1.0, 0.0, 0.0),
//!         Vec3::new(1.0, 1.0, 0.0),
//!         Vec3::new(0.0, 1.0, 0.0),
//!     ],
//!     FaceData::white(Vec3::new(0.0, 0.0, 1.0)),
//! );
//! let triangulation = triangulate_polygon(square, Config::default()).unwrap();
//! assert_eq!(triangulation.len(), 2);
//! ```

pub mod attack;
pub mod config;
pub mod error;
pub mod intersect;
pub mod polyhedron;
pub mod projection;
pub mod pslg;
pub mod quaternion;
pub mod splitter;
pub mod vector;

pub use config::Config;
pub use error::{Error, Outcome, Result};
pub use polyhedron::{triangulate_polygon, PolygonIndexed, PolygonRaw, Polyhedron, TriangleRaw, Triangulation};
pub use pslg::Pslg;
pub use quaternion::Quaternion;
pub use vector::{Color, FaceData, Vec3};
