use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::{
    error::{IsomeshError, Result},
    types::Value,
    utils::{cell_case, cell_corner_positions, emit_case_triangles},
};

/// Cell origins along one axis: `min`, `min + step`, … up to but excluding `max`.
///
/// Accumulates instead of multiplying out `min + k * step`, so boundary
/// behavior matches the classic `for (t = min; t < max; t += step)` loop:
/// a step that does not evenly divide `max - min` truncates the last partial
/// cell row, and a step larger than the whole range yields exactly one
/// origin. The face at `max` is never a cell origin, though it is still
/// sampled as the far corners of the last cell row.
fn axis_origins(min: Value, max: Value, step: Value) -> Vec<Value> {
    let mut origins = Vec::new();
    let mut t = min;
    while t < max {
        origins.push(t);
        t += step;
    }
    origins
}

/// Extracts a triangulated isosurface of `field` at `iso_value`, sampled over
/// the cube `[min, max)^3` on a lattice of spacing `step`.
///
/// Returns a flat vertex stream: every 3 values one `(x, y, z)` point, every
/// 9 values one triangle. Triangles are emitted independently — coincident
/// vertices of neighbouring triangles are **not** deduplicated or indexed.
/// Feed the stream to [`compute_normals`](crate::normals::compute_normals)
/// for flat-shaded normals.
///
/// Vertices sit at fixed cell-edge midpoints rather than being interpolated
/// toward the exact crossing point (see [`EDGE_OFFSETS`](crate::tables::EDGE_OFFSETS)),
/// so every vertex position is a pure function of the cell lattice.
///
/// `field` is evaluated once per corner per cell (8 calls per cell, no
/// caching across neighbours) from multiple Rayon workers concurrently.
/// Each worker fills a private buffer and slabs are merged in X order, so
/// the output is byte-identical to a sequential `x → y → z` enumeration —
/// same inputs, same stream, every run.
///
/// # Errors
///
/// Returns [`IsomeshError::InvalidBounds`] unless `min < max`, and
/// [`IsomeshError::InvalidStepSize`] unless `step > 0` (NaN fails both).
/// Validation happens before any field evaluation. A panic inside `field`
/// propagates to the caller.
pub fn marching_cubes<F>(
    field: &F,
    iso_value: Value,
    min: Value,
    max: Value,
    step: Value,
) -> Result<Vec<Value>>
where
    F: Fn(Value, Value, Value) -> Value + Sync + ?Sized,
{
    if !(min < max) {
        return Err(IsomeshError::InvalidBounds { min, max });
    }
    if !(step > 0.0) {
        return Err(IsomeshError::InvalidStepSize(step));
    }

    let origins = axis_origins(min, max, step);
    debug!(
        iso_value,
        min,
        max,
        step,
        cells = origins.len().pow(3),
        "extracting isosurface"
    );

    // One slab per X origin. Cells are independent, so each worker
    // accumulates into a private buffer; collect() preserves slab order.
    let per_slab: Vec<Vec<Value>> = origins
        .par_iter()
        .map(|&x| {
            let mut local: Vec<Value> = Vec::new();
            for &y in &origins {
                for &z in &origins {
                    let positions = cell_corner_positions(x, y, z, step);

                    let mut corner_values = [0.0; 8];
                    for (value, [px, py, pz]) in corner_values.iter_mut().zip(positions) {
                        *value = field(px, py, pz);
                    }

                    let case = cell_case(&corner_values, iso_value);
                    emit_case_triangles(case, x, y, z, step, &mut local);
                }
            }
            local
        })
        .collect();

    // Merge the per-X slabs into a single vertex stream.
    let total: usize = per_slab.iter().map(Vec::len).sum();
    let mut vertices: Vec<Value> = Vec::with_capacity(total);
    for mut slab in per_slab {
        vertices.append(&mut slab);
    }

    debug_assert_eq!(vertices.len() % 9, 0);
    debug!(triangles = vertices.len() / 9, "extraction complete");
    Ok(vertices)
}
