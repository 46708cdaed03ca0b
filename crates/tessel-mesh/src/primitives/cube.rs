use crate::Mesh;

// (position, normal, uv) per corner; four corners per face, CCW seen from outside.
#[rustfmt::skip]
const CORNERS: [([f32; 3], [f32; 3], [f32; 2]); 24] = [
    // Front (+Z)
    ([-1.0, -1.0,  1.0], [ 0.0,  0.0,  1.0], [0.0, 1.0]),
    ([ 1.0, -1.0,  1.0], [ 0.0,  0.0,  1.0], [1.0, 1.0]),
    ([ 1.0,  1.0,  1.0], [ 0.0,  0.0,  1.0], [1.0, 0.0]),
    ([-1.0,  1.0,  1.0], [ 0.0,  0.0,  1.0], [0.0, 0.0]),
    // Back (-Z)
    ([ 1.0, -1.0, -1.0], [ 0.0,  0.0, -1.0], [0.0, 1.0]),
    ([-1.0, -1.0, -1.0], [ 0.0,  0.0, -1.0], [1.0, 1.0]),
    ([-1.0,  1.0, -1.0], [ 0.0,  0.0, -1.0], [1.0, 0.0]),
    ([ 1.0,  1.0, -1.0], [ 0.0,  0.0, -1.0], [0.0, 0.0]),
    // Right (+X)
    ([ 1.0, -1.0,  1.0], [ 1.0,  0.0,  0.0], [0.0, 1.0]),
    ([ 1.0, -1.0, -1.0], [ 1.0,  0.0,  0.0], [1.0, 1.0]),
    ([ 1.0,  1.0, -1.0], [ 1.0,  0.0,  0.0], [1.0, 0.0]),
    ([ 1.0,  1.0,  1.0], [ 1.0,  0.0,  0.0], [0.0, 0.0]),
    // Left (-X)
    ([-1.0, -1.0, -1.0], [-1.0,  0.0,  0.0], [0.0, 1.0]),
    ([-1.0, -1.0,  1.0], [-1.0,  0.0,  0.0], [1.0, 1.0]),
    ([-1.0,  1.0,  1.0], [-1.0,  0.0,  0.0], [1.0, 0.0]),
    ([-1.0,  1.0, -1.0], [-1.0,  0.0,  0.0], [0.0, 0.0]),
    // Top (+Y)
    ([-1.0,  1.0,  1.0], [ 0.0,  1.0,  0.0], [0.0, 1.0]),
    ([ 1.0,  1.0,  1.0], [ 0.0,  1.0,  0.0], [1.0, 1.0]),
    ([ 1.0,  1.0, -1.0], [ 0.0,  1.0,  0.0], [1.0, 0.0]),
    ([-1.0,  1.0, -1.0], [ 0.0,  1.0,  0.0], [0.0, 0.0]),
    // Bottom (-Y)
    ([-1.0, -1.0, -1.0], [ 0.0, -1.0,  0.0], [0.0, 1.0]),
    ([ 1.0, -1.0, -1.0], [ 0.0, -1.0,  0.0], [1.0, 1.0]),
    ([ 1.0, -1.0,  1.0], [ 0.0, -1.0,  0.0], [1.0, 0.0]),
    ([-1.0, -1.0,  1.0], [ 0.0, -1.0,  0.0], [0.0, 0.0]),
];

/// Cube spanning `[-1, 1]` on every axis, one UV square per face.
pub fn cube() -> Mesh {
    let mut mesh = Mesh::default();

    for (position, normal, uv) in CORNERS {
        mesh.position.extend_from_slice(&position);
        mesh.normal.extend_from_slice(&normal);
        mesh.uv.extend_from_slice(&uv);
    }

    for face in 0..6u32 {
        let base = face * 4;
        mesh.index
            .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }

    mesh
}
