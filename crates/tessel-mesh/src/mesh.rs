use crate::error::MeshError;

/// Components per position / normal vector.
pub const VEC3: usize = 3;
/// Components per texture coordinate.
pub const VEC2: usize = 2;

/// One drawable shape in local space.
///
/// Attributes are stored flattened and parallel to each other:
/// - `position`: XYZ per vertex
/// - `normal`: XYZ per vertex
/// - `uv`: UV per vertex
/// - `index`: triangle list referencing this mesh's own vertices
///
/// Nothing is checked on construction. Inputs that break the parallel-array
/// invariant are carried through transforms and composition silently; call
/// [`Mesh::validate`] when that matters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub position: Vec<f32>,
    pub normal: Vec<f32>,
    pub uv: Vec<f32>,
    pub index: Vec<u32>,
}

impl Mesh {
    pub fn new(position: Vec<f32>, normal: Vec<f32>, uv: Vec<f32>, index: Vec<u32>) -> Self {
        Self {
            position,
            normal,
            uv,
            index,
        }
    }

    /// Number of vertices, derived from `position`.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.position.len() / VEC3
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.index.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    /// Checks the parallel-array and index-range invariants.
    ///
    /// Reports the first violation found, attributes before indices.
    pub fn validate(&self) -> Result<(), MeshError> {
        check_aligned("position", self.position.len(), VEC3)?;
        check_aligned("normal", self.normal.len(), VEC3)?;
        check_aligned("uv", self.uv.len(), VEC2)?;

        let expected = self.vertex_count();
        check_count("normal", expected, self.normal.len() / VEC3)?;
        check_count("uv", expected, self.uv.len() / VEC2)?;

        if self.index.len() % 3 != 0 {
            return Err(MeshError::PartialTriangle(self.index.len()));
        }

        if let Some((slot, &value)) = self
            .index
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= expected)
        {
            return Err(MeshError::IndexOutOfRange {
                slot,
                value,
                vertex_count: expected,
            });
        }

        Ok(())
    }
}

fn check_aligned(attribute: &'static str, len: usize, components: usize) -> Result<(), MeshError> {
    if len % components == 0 {
        Ok(())
    } else {
        Err(MeshError::MisalignedAttribute {
            attribute,
            len,
            components,
        })
    }
}

fn check_count(attribute: &'static str, expected: usize, found: usize) -> Result<(), MeshError> {
    if expected == found {
        Ok(())
    } else {
        Err(MeshError::VertexCountMismatch {
            attribute,
            expected,
            found,
        })
    }
}
