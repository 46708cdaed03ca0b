use thiserror::Error;

/// Rejection reasons reported by the validating mesh operations.
///
/// The default operations never produce these; see [`Mesh::validate`],
/// [`try_rotate`] and [`compose_checked`].
///
/// [`Mesh::validate`]: crate::Mesh::validate
/// [`try_rotate`]: crate::try_rotate
/// [`compose_checked`]: crate::compose_checked
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// An attribute array length is not a multiple of its component count.
    #[error("{attribute} has {len} floats, not a multiple of {components}")]
    MisalignedAttribute {
        attribute: &'static str,
        len: usize,
        components: usize,
    },

    /// An attribute describes a different number of vertices than `position`.
    #[error("{attribute} describes {found} vertices, position describes {expected}")]
    VertexCountMismatch {
        attribute: &'static str,
        expected: usize,
        found: usize,
    },

    /// An index references a vertex past the end of the mesh.
    #[error("index {value} at slot {slot} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        slot: usize,
        value: u32,
        vertex_count: usize,
    },

    /// The index list does not describe whole triangles.
    #[error("index count {0} is not a multiple of 3")]
    PartialTriangle(usize),

    /// The rotation axis cannot be normalized.
    #[error("rotation axis {0:?} is zero-length or not finite")]
    DegenerateAxis([f32; 3]),

    /// A mesh inside a composition list failed validation.
    #[error("mesh #{position} in composition: {source}")]
    InComposition {
        position: usize,
        #[source]
        source: Box<MeshError>,
    },
}
