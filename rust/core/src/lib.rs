// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Triangulate I/O
//!
//! The boundaries around the triangulation core: an OFF face reader,
//! a binary STL triangle sink, a GPU vertex buffer adapter, and the frame
//! pipe boundary the rendering layer would use. None of this crate
//! implements rendering or video encoding; it only gives those boundaries
//! a concrete Rust shape.
//!
//! ## Quick start
//!
//! ```rust
//! use triangulate_geometry::Config;
//! use triangulate_io::off::read_off;
//! use triangulate_io::stl::write_stl;
//!
//! let cube_off = "OFF\n8 6 0\n\
//!     0 0 0\n1 0 0\n1 1 0\n0 1 0\n0 0 1\n1 0 1\n1 1 1\n0 1 1\n\
//!     4 0 3 2 1\n4 4 5 6 7\n4 0 1 5 4\n4 1 2 6 5\n4 2 3 7 6\n4 3 0 4 7\n";
//! let polyhedron = read_off(cube_off.as_bytes()).unwrap();
//! let triangulation = polyhedron.triangulate(Config::default()).unwrap();
//! assert_eq!(triangulation.len(), 12);
//!
//! let mut stl_bytes = Vec::new();
//! write_stl(&mut stl_bytes, &triangulation).unwrap();
//! ```

pub mod error;
pub mod frame_pipe;
pub mod gpu_buffer;
pub mod off;
pub mod stl;

pub use error::{Error, Result};
