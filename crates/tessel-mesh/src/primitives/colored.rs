/// Floats per colored vertex: XYZ followed by RGB.
pub const COLORED_STRIDE: usize = 6;

/// Interleaved position + color geometry for the untextured demos.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColoredMesh {
    /// `COLORED_STRIDE` floats per vertex.
    pub vertices: Vec<f32>,
    pub index: Vec<u32>,
}

impl ColoredMesh {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / COLORED_STRIDE
    }
}

/// Single triangle in the XY plane with one color per corner.
pub fn colored_triangle() -> ColoredMesh {
    #[rustfmt::skip]
    let vertices = vec![
        // X, Y, Z          R, G, B
         0.0,  0.5, 0.0,    1.0, 1.0, 1.0,
        -0.5, -0.5, 0.0,    0.7, 0.0, 1.0,
         0.5, -0.5, 0.0,    0.1, 1.0, 0.6,
    ];

    ColoredMesh {
        vertices,
        index: vec![0, 1, 2],
    }
}

/// Cube spanning `[-1, 1]`, one flat color per face.
pub fn colored_box() -> ColoredMesh {
    #[rustfmt::skip]
    let vertices = vec![
        // Top
        -1.0,  1.0, -1.0,    0.5,  0.5,  0.5,
        -1.0,  1.0,  1.0,    0.5,  0.5,  0.5,
         1.0,  1.0,  1.0,    0.5,  0.5,  0.5,
         1.0,  1.0, -1.0,    0.5,  0.5,  0.5,
        // Left
        -1.0,  1.0,  1.0,    0.75, 0.25, 0.5,
        -1.0, -1.0,  1.0,    0.75, 0.25, 0.5,
        -1.0, -1.0, -1.0,    0.75, 0.25, 0.5,
        -1.0,  1.0, -1.0,    0.75, 0.25, 0.5,
        // Right
         1.0,  1.0,  1.0,    0.25, 0.25, 0.75,
         1.0, -1.0,  1.0,    0.25, 0.25, 0.75,
         1.0, -1.0, -1.0,    0.25, 0.25, 0.75,
         1.0,  1.0, -1.0,    0.25, 0.25, 0.75,
        // Front
         1.0,  1.0,  1.0,    1.0,  0.0,  0.15,
         1.0, -1.0,  1.0,    1.0,  0.0,  0.15,
        -1.0, -1.0,  1.0,    1.0,  0.0,  0.15,
        -1.0,  1.0,  1.0,    1.0,  0.0,  0.15,
        // Back
         1.0,  1.0, -1.0,    0.0,  1.0,  0.15,
         1.0, -1.0, -1.0,    0.0,  1.0,  0.15,
        -1.0, -1.0, -1.0,    0.0,  1.0,  0.15,
        -1.0,  1.0, -1.0,    0.0,  1.0,  0.15,
        // Bottom
        -1.0, -1.0, -1.0,    0.5,  0.5,  1.0,
        -1.0, -1.0,  1.0,    0.5,  0.5,  1.0,
         1.0, -1.0,  1.0,    0.5,  0.5,  1.0,
         1.0, -1.0, -1.0,    0.5,  0.5,  1.0,
    ];

    #[rustfmt::skip]
    let index = vec![
        0, 1, 2,     0, 2, 3,    // top
        5, 4, 6,     6, 4, 7,    // left
        8, 9, 10,    8, 10, 11,  // right
        13, 12, 14,  15, 14, 12, // front
        16, 17, 18,  16, 18, 19, // back
        21, 20, 22,  22, 20, 23, // bottom
    ];

    ColoredMesh { vertices, index }
}
