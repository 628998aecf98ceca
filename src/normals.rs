use tracing::trace;

use crate::{
    error::{IsomeshError, Result},
    types::{Value, Vector},
};

/// Face normal of the triangle `(v0, v1, v2)`.
///
/// With the winding the cube case table emits, the normal points toward the
/// below-isovalue side of the surface.
///
/// Returns the zero vector for a degenerate (zero-area) triangle instead of
/// normalizing a zero cross product, so the result is always finite.
#[inline]
fn triangle_normal(v0: Vector, v1: Vector, v2: Vector) -> Vector {
    let edge1 = v1 - v0;
    let edge2 = v2 - v1;
    let cross = edge1.cross(&edge2);

    let norm = cross.norm();
    if norm == 0.0 {
        Vector::zeros()
    } else {
        cross / norm
    }
}

/// Computes flat-shaded normals for a vertex stream produced by
/// [`marching_cubes`](crate::extract::marching_cubes).
///
/// Every 9 input values form one triangle; its unit face normal is emitted
/// once per vertex, so the output has exactly the input's length and adjacent
/// triangles sharing a geometric vertex get independent normals.
///
/// Degenerate triangles yield the zero vector (three times) rather than
/// NaN — a deterministic, documented fallback. Renderers treat a zero normal
/// as an unlit face; filtering such triangles out is left to the caller.
///
/// # Errors
///
/// Returns [`IsomeshError::DanglingVertices`] if the input length is not a
/// multiple of 9.
pub fn compute_normals(vertices: &[Value]) -> Result<Vec<Value>> {
    if vertices.len() % 9 != 0 {
        return Err(IsomeshError::DanglingVertices(vertices.len()));
    }

    let mut normals = Vec::with_capacity(vertices.len());
    for triangle in vertices.chunks_exact(9) {
        let v0 = Vector::new(triangle[0], triangle[1], triangle[2]);
        let v1 = Vector::new(triangle[3], triangle[4], triangle[5]);
        let v2 = Vector::new(triangle[6], triangle[7], triangle[8]);

        let normal = triangle_normal(v0, v1, v2);
        if normal == Vector::zeros() {
            trace!(?v0, ?v1, ?v2, "degenerate triangle, emitting zero normal");
        }

        // One face normal per vertex of the triangle.
        for _ in 0..3 {
            normals.push(normal.x);
            normals.push(normal.y);
            normals.push(normal.z);
        }
    }

    Ok(normals)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::extract::marching_cubes;

    #[test]
    fn rejects_partial_triangles() {
        assert!(matches!(
            compute_normals(&[0.0; 12]),
            Err(IsomeshError::DanglingVertices(12))
        ));
        assert!(matches!(
            compute_normals(&[0.0; 8]),
            Err(IsomeshError::DanglingVertices(8))
        ));
    }

    #[test]
    fn empty_stream_yields_empty_normals() {
        assert!(compute_normals(&[]).unwrap().is_empty());
    }

    #[test]
    fn axis_aligned_triangle_gets_axis_normal() {
        // Counter-clockwise in the XY plane seen from +Z.
        let vertices = [
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        let normals = compute_normals(&vertices).unwrap();
        assert_eq!(normals.len(), 9);
        for normal in normals.chunks_exact(3) {
            assert_relative_eq!(normal[0], 0.0);
            assert_relative_eq!(normal[1], 0.0);
            assert_relative_eq!(normal[2], 1.0);
        }
    }

    #[test]
    fn degenerate_triangle_yields_finite_zero_normal() {
        // All three vertices collinear: zero-area triangle.
        let vertices = [
            0.0, 0.0, 0.0, //
            1.0, 1.0, 1.0, //
            2.0, 2.0, 2.0,
        ];
        let normals = compute_normals(&vertices).unwrap();
        assert_eq!(normals, vec![0.0; 9]);
        assert!(normals.iter().all(|n| n.is_finite()));
    }

    #[test]
    fn extracted_surface_normals_are_unit_and_orthogonal() {
        let sphere = |x: Value, y: Value, z: Value| x * x + y * y + z * z - 1.0;
        let vertices = marching_cubes(&sphere, 0.0, -1.5, 1.5, 0.25).unwrap();
        let normals = compute_normals(&vertices).unwrap();

        assert_eq!(normals.len(), vertices.len());

        for (triangle, normal_triple) in
            vertices.chunks_exact(9).zip(normals.chunks_exact(9))
        {
            let v0 = Vector::new(triangle[0], triangle[1], triangle[2]);
            let v1 = Vector::new(triangle[3], triangle[4], triangle[5]);
            let v2 = Vector::new(triangle[6], triangle[7], triangle[8]);
            let normal = Vector::new(normal_triple[0], normal_triple[1], normal_triple[2]);

            // Flat shading repeats the face normal for all three vertices.
            assert_eq!(&normal_triple[0..3], &normal_triple[3..6]);
            assert_eq!(&normal_triple[0..3], &normal_triple[6..9]);

            if normal == Vector::zeros() {
                continue; // degenerate fallback
            }
            assert_relative_eq!(normal.norm(), 1.0, epsilon = 1e-12);
            assert_relative_eq!(normal.dot(&(v1 - v0)), 0.0, epsilon = 1e-9);
            assert_relative_eq!(normal.dot(&(v2 - v1)), 0.0, epsilon = 1e-9);
            assert_relative_eq!(normal.dot(&(v2 - v0)), 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn sphere_normals_face_the_interior() {
        // The case table winds triangles so face normals point toward the
        // below-isovalue region. For a sphere SDF that region is the inside,
        // so every normal should oppose the outward radial direction. A
        // mis-wired corner-to-bit mapping would still triangulate cleanly
        // but flip this orientation, which is what this test pins down.
        let sphere = |x: Value, y: Value, z: Value| x * x + y * y + z * z - 1.0;
        let vertices = marching_cubes(&sphere, 0.0, -1.5, 1.5, 0.25).unwrap();
        let normals = compute_normals(&vertices).unwrap();

        for (triangle, normal_triple) in
            vertices.chunks_exact(9).zip(normals.chunks_exact(9))
        {
            let normal = Vector::new(normal_triple[0], normal_triple[1], normal_triple[2]);
            if normal == Vector::zeros() {
                continue;
            }
            let centroid = Vector::new(
                (triangle[0] + triangle[3] + triangle[6]) / 3.0,
                (triangle[1] + triangle[4] + triangle[7]) / 3.0,
                (triangle[2] + triangle[5] + triangle[8]) / 3.0,
            );
            assert!(
                normal.dot(&centroid) < 0.0,
                "outward-facing normal {normal:?} at {centroid:?}"
            );
        }
    }
}
