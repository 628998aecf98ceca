use crate::{
    tables::{CORNER_OFFSETS, EDGE_OFFSETS, TRI_TABLE},
    types::Value,
};

/// Returns the 8 world-space corner positions of the cell anchored at
/// `(x, y, z)` with edge length `step`.
///
/// Corner ordering matches [`CORNER_OFFSETS`], which is the convention both
/// lookup tables were built against:
/// ```text
///     7----6          Y
///    /|   /|          |
///   3----2 |          *-- X
///   | 4--|-5         /
///   |/   |/         Z
///   0----1
/// ```
#[inline]
pub fn cell_corner_positions(x: Value, y: Value, z: Value, step: Value) -> [[Value; 3]; 8] {
    CORNER_OFFSETS.map(|[cx, cy, cz]| [x + step * cx, y + step * cy, z + step * cz])
}

/// Computes the marching cubes case index for a cell.
///
/// Each of the 8 corners maps to one bit. A bit is set when the corner's
/// value is **strictly below** the isovalue (i.e. "inside" the surface);
/// a value exactly equal to the isovalue, or NaN, counts as outside:
///
/// ```text
/// corner index:  7  6  5  4  3  2  1  0
/// case bits:    [_][_][_][_][_][_][_][_]
///                                      ^-- corner 0 inside?
/// ```
///
/// The result is always in `[0, 255]`, so indexing [`TRI_TABLE`] with it
/// cannot go out of bounds.
#[inline]
pub fn cell_case(corner_values: &[Value; 8], iso_value: Value) -> usize {
    let mut case = 0_usize;
    for (i, &v) in corner_values.iter().enumerate() {
        if v < iso_value {
            case |= 1 << i;
        }
    }
    case
}

/// Appends the triangle vertices for a cell's `case` to `out`, flat.
///
/// `TRI_TABLE[case]` contains edge indices in groups of three, terminated by
/// `-1`. Each surviving edge index maps through [`EDGE_OFFSETS`] to the
/// edge's fixed midpoint, scaled by `step` and offset by the cell origin —
/// no interpolation toward the actual isovalue crossing takes place.
#[inline]
pub fn emit_case_triangles(case: usize, x: Value, y: Value, z: Value, step: Value, out: &mut Vec<Value>) {
    for &edge in TRI_TABLE[case].iter().take_while(|&&e| e != -1) {
        let [ox, oy, oz] = EDGE_OFFSETS[edge as usize];
        out.push(x + step * ox);
        out.push(y + step * oy);
        out.push(z + step * oz);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_bits_follow_corner_order() {
        let iso = 0.5;
        for corner in 0..8 {
            let mut values = [1.0; 8];
            values[corner] = 0.0;
            assert_eq!(cell_case(&values, iso), 1 << corner);
        }
    }

    #[test]
    fn equality_counts_as_outside() {
        assert_eq!(cell_case(&[0.5; 8], 0.5), 0);
        assert_eq!(cell_case(&[Value::NAN; 8], 0.5), 0);
        assert_eq!(cell_case(&[0.0; 8], 0.5), 255);
    }

    #[test]
    fn corner_positions_span_the_cell() {
        let positions = cell_corner_positions(1.0, 2.0, 3.0, 0.5);
        assert_eq!(positions[0], [1.0, 2.0, 3.0]);
        assert_eq!(positions[6], [1.5, 2.5, 3.5]);
        // Corner 2 differs from corner 1 only along Y.
        assert_eq!(positions[1], [1.5, 2.0, 3.0]);
        assert_eq!(positions[2], [1.5, 2.5, 3.0]);
    }

    #[test]
    fn emitted_triangles_are_whole() {
        for case in 0..256 {
            let mut out = Vec::new();
            emit_case_triangles(case, 0.0, 0.0, 0.0, 1.0, &mut out);
            assert_eq!(out.len() % 9, 0, "case {case}");
        }
    }

    #[test]
    fn single_corner_case_emits_one_triangle() {
        // Only corner 0 inside: one triangle clipping that corner, with all
        // vertices on the three edges meeting at the origin.
        let mut out = Vec::new();
        emit_case_triangles(1, 0.0, 0.0, 0.0, 2.0, &mut out);
        assert_eq!(out.len(), 9);
        for vertex in out.chunks_exact(3) {
            let on_axis = vertex.iter().filter(|&&c| c == 1.0).count();
            let at_origin = vertex.iter().filter(|&&c| c == 0.0).count();
            assert_eq!((on_axis, at_origin), (1, 2), "vertex {vertex:?}");
        }
    }
}
