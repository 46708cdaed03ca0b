use crate::Mesh;

/// 2×2 quad in the XY plane, centered on the origin and facing +Z.
///
/// Rotate it by 270° around X to lay it flat as a floor facing +Y.
pub fn plane() -> Mesh {
    Mesh::new(
        vec![
            -1.0, -1.0, 0.0, //
            1.0, -1.0, 0.0, //
            1.0, 1.0, 0.0, //
            -1.0, 1.0, 0.0,
        ],
        [0.0, 0.0, 1.0].repeat(4),
        vec![0.0, 1.0, 1.0, 1.0, 1.0, 0.0, 0.0, 0.0],
        vec![0, 1, 2, 0, 2, 3],
    )
}
