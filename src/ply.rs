use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use tracing::info;

use crate::{
    error::{IsomeshError, Result},
    types::Value,
};

/// Writes parallel vertex and normal streams to `path` as an ASCII PLY file.
///
/// The header declares `len / 3` vertices and `len / 9` faces. Each vertex
/// line carries `x y z nx ny nz`; each face line lists three sequential
/// vertex indices (`3 i i+1 i+2`). Faces are **not** deduplicated or indexed
/// — every triangle owns its own three vertex slots, mirroring the stream
/// layout produced by [`marching_cubes`](crate::extract::marching_cubes).
///
/// Values are printed with shortest round-trip `f64` formatting, so normal
/// components may carry more digits than writers that truncate to 6
/// significant figures emit. ASCII PLY readers accept either; only the
/// precision differs, not the layout.
///
/// # Errors
///
/// Returns [`IsomeshError::DanglingVertices`] if the vertex stream is not
/// whole triangles, [`IsomeshError::MismatchedNormals`] if the streams have
/// different lengths, and [`IsomeshError::Io`] if the file cannot be created
/// or written. An export failure leaves the input streams untouched and
/// reusable.
pub fn write_ply(
    vertices: &[Value],
    normals: &[Value],
    path: impl AsRef<Path>,
) -> Result<()> {
    if vertices.len() % 9 != 0 {
        return Err(IsomeshError::DanglingVertices(vertices.len()));
    }
    if normals.len() != vertices.len() {
        return Err(IsomeshError::MismatchedNormals {
            vertices: vertices.len(),
            normals: normals.len(),
        });
    }

    let path = path.as_ref();
    let mut file = BufWriter::new(File::create(path)?);

    writeln!(file, "ply")?;
    writeln!(file, "format ascii 1.0")?;
    writeln!(file, "element vertex {}", vertices.len() / 3)?;
    writeln!(file, "property float x")?;
    writeln!(file, "property float y")?;
    writeln!(file, "property float z")?;
    writeln!(file, "property float nx")?;
    writeln!(file, "property float ny")?;
    writeln!(file, "property float nz")?;
    writeln!(file, "element face {}", vertices.len() / 9)?;
    writeln!(file, "property list uchar uint vertex_indices")?;
    writeln!(file, "end_header")?;

    for (vertex, normal) in vertices.chunks_exact(3).zip(normals.chunks_exact(3)) {
        writeln!(
            file,
            "{} {} {} {} {} {}",
            vertex[0], vertex[1], vertex[2], normal[0], normal[1], normal[2]
        )?;
    }

    for i in (0..vertices.len() / 3).step_by(3) {
        writeln!(file, "3 {} {} {}", i, i + 1, i + 2)?;
    }

    file.flush()?;
    info!(path = %path.display(), faces = vertices.len() / 9, "ply written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{extract::marching_cubes, normals::compute_normals};

    #[test]
    fn rejects_mismatched_streams() {
        assert!(matches!(
            write_ply(&[0.0; 12], &[0.0; 12], "unused.ply"),
            Err(IsomeshError::DanglingVertices(12))
        ));
        assert!(matches!(
            write_ply(&[0.0; 9], &[0.0; 6], "unused.ply"),
            Err(IsomeshError::MismatchedNormals {
                vertices: 9,
                normals: 6
            })
        ));
    }

    #[test]
    fn reports_file_creation_failure() {
        let result = write_ply(&[0.0; 9], &[0.0; 9], "no/such/directory/mesh.ply");
        assert!(matches!(result, Err(IsomeshError::Io(_))));
    }

    #[test]
    fn single_triangle_matches_expected_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("triangle.ply");

        let vertices = [
            0.0, 0.0, 0.0, //
            1.0, 0.0, 0.0, //
            0.0, 1.0, 0.0,
        ];
        let normals = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        write_ply(&vertices, &normals, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let expected = "\
ply
format ascii 1.0
element vertex 3
property float x
property float y
property float z
property float nx
property float ny
property float nz
element face 1
property list uchar uint vertex_indices
end_header
0 0 0 0 0 1
1 0 0 0 0 1
0 1 0 0 0 1
3 0 1 2
";
        assert_eq!(contents, expected);
    }

    #[test]
    fn extracted_sphere_round_trips_through_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sphere.ply");

        let sphere = |x: Value, y: Value, z: Value| x * x + y * y + z * z - 1.0;
        let vertices = marching_cubes(&sphere, 0.0, -1.5, 1.5, 0.5).unwrap();
        let normals = compute_normals(&vertices).unwrap();
        write_ply(&vertices, &normals, &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let vertex_count: usize = contents
            .lines()
            .find_map(|l| l.strip_prefix("element vertex "))
            .unwrap()
            .parse()
            .unwrap();
        let face_count: usize = contents
            .lines()
            .find_map(|l| l.strip_prefix("element face "))
            .unwrap()
            .parse()
            .unwrap();

        assert_eq!(vertex_count, vertices.len() / 3);
        assert_eq!(face_count, vertices.len() / 9);
        assert_eq!(vertex_count, face_count * 3);

        // Every declared element is present: header + vertex lines + face lines.
        let body_lines = contents.lines().count();
        assert_eq!(body_lines, 12 + vertex_count + face_count);
    }
}
