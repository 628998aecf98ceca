//! Extracts the rolling surface `y = sin(x)·cos(z)` over a ±5 volume and
//! writes `waves.ply`.

use isomesh::{Value, compute_normals, marching_cubes, write_ply};

fn main() -> isomesh::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let waves = |x: Value, y: Value, z: Value| y - x.sin() * z.cos();

    let vertices = marching_cubes(&waves, 0.0, -5.0, 5.0, 0.1)?;
    let normals = compute_normals(&vertices)?;
    write_ply(&vertices, &normals, "waves.ply")?;

    println!(
        "waves.ply: {} vertices, {} faces",
        vertices.len() / 3,
        vertices.len() / 9
    );
    Ok(())
}
