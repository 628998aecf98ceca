//! Extracts the unit sphere `x² + y² + z² - 1 = 0` and writes `sphere.ply`.

use isomesh::{Value, compute_normals, marching_cubes, write_ply};

fn main() -> isomesh::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let sphere = |x: Value, y: Value, z: Value| x * x + y * y + z * z - 1.0;

    let vertices = marching_cubes(&sphere, 0.0, -1.5, 1.5, 0.25)?;
    let normals = compute_normals(&vertices)?;
    write_ply(&vertices, &normals, "sphere.ply")?;

    println!(
        "sphere.ply: {} vertices, {} faces",
        vertices.len() / 3,
        vertices.len() / 9
    );
    Ok(())
}
