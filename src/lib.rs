//! Isosurface extraction from scalar fields using the Marching Cubes
//! algorithm.
//!
//! Given a scalar function of three coordinates, an isovalue, a cubic
//! sampling region, and a step size, [`marching_cubes`] produces a flat
//! triangle-vertex stream; [`compute_normals`] derives flat-shaded normals
//! for it, and [`write_ply`] serializes both to an ASCII PLY mesh file.
//!
//! ```no_run
//! use isomesh::{compute_normals, marching_cubes, write_ply};
//!
//! # fn main() -> isomesh::Result<()> {
//! let sphere = |x: f64, y: f64, z: f64| x * x + y * y + z * z - 1.0;
//!
//! let vertices = marching_cubes(&sphere, 0.0, -1.5, 1.5, 0.25)?;
//! let normals = compute_normals(&vertices)?;
//! write_ply(&vertices, &normals, "sphere.ply")?;
//! # Ok(())
//! # }
//! ```
//!
//! This is the non-interpolating variant of the algorithm: triangle vertices
//! sit at fixed cell-edge midpoints instead of being moved along the edge
//! toward the exact isovalue crossing. Surfaces come out blockier than with
//! interpolated Marching Cubes, but every vertex position is a pure function
//! of the cell lattice.

pub mod error;
pub mod extract;
pub mod normals;
pub mod ply;
pub mod tables;
pub mod types;
pub mod utils;

pub use error::{IsomeshError, Result};
pub use extract::marching_cubes;
pub use normals::compute_normals;
pub use ply::write_ply;
pub use types::{Point, ScalarField, Value, Vector};
