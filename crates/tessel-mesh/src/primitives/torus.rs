use std::f32::consts::TAU;

use crate::Mesh;

/// Torus lying in the XZ plane around the Y axis.
///
/// `rings` segments run around the Y axis, `sides` around the tube. The seam
/// row and column are duplicated so UVs span `[0, 1]` without wrapping, giving
/// `(rings + 1) * (sides + 1)` vertices.
pub fn torus(major_radius: f32, minor_radius: f32, rings: u32, sides: u32) -> Mesh {
    let rings = rings.max(3);
    let sides = sides.max(3);
    let mut mesh = Mesh::default();

    for i in 0..=rings {
        let u = i as f32 / rings as f32;
        let (su, cu) = (u * TAU).sin_cos();

        for j in 0..=sides {
            let v = j as f32 / sides as f32;
            let (sv, cv) = (v * TAU).sin_cos();

            let r = major_radius + minor_radius * cv;
            mesh.position.extend_from_slice(&[r * cu, minor_radius * sv, r * su]);
            mesh.normal.extend_from_slice(&[cv * cu, sv, cv * su]);
            mesh.uv.extend_from_slice(&[u, v]);
        }
    }

    let row = sides + 1;
    for i in 0..rings {
        for j in 0..sides {
            let a = i * row + j;
            let b = a + row; // next ring
            let c = b + 1;
            let d = a + 1; // next side
            mesh.index.extend_from_slice(&[a, d, c, a, c, b]);
        }
    }

    mesh
}
