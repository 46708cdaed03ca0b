//! Merging meshes into one interleaved vertex buffer and one index buffer.
//!
//! Record layout (in floats), shared with the shader's vertex inputs:
//!
//! | Field | Offset | Components |
//! |-------|--------|------------|
//! | position | [`POSITION_OFFSET`] | 3 |
//! | uv | [`UV_OFFSET`] | 2 |
//! | normal | [`NORMAL_OFFSET`] | 3 |
//!
//! [`STRIDE`] floats per vertex. Changing the field order here requires the
//! matching change in the renderer's vertex layout.

use bytemuck::{Pod, Zeroable};

use crate::error::MeshError;
use crate::mesh::{Mesh, VEC2, VEC3};

pub const POSITION_OFFSET: usize = 0;
pub const UV_OFFSET: usize = 3;
pub const NORMAL_OFFSET: usize = 5;
/// Floats per interleaved vertex record.
pub const STRIDE: usize = 8;

/// One interleaved vertex record, byte-compatible with a `STRIDE`-float run.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
    pub normal: [f32; 3],
}

/// Interleaved vertex data plus the re-indexed triangle list for one draw call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneBuffer {
    /// `STRIDE` floats per vertex.
    pub interleaved: Vec<f32>,
    /// Indices into `interleaved` records.
    pub index: Vec<u32>,
}

impl SceneBuffer {
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.interleaved.len() / STRIDE
    }

    /// Element count for the draw call.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interleaved.is_empty() && self.index.is_empty()
    }

    /// Views the interleaved floats as typed records.
    pub fn records(&self) -> &[Vertex] {
        bytemuck::cast_slice(&self.interleaved[..self.vertex_count() * STRIDE])
    }

    /// Splits the interleaved records back into a single mesh.
    ///
    /// Values come back bit-for-bit; only the per-source-mesh boundaries are
    /// lost.
    pub fn to_mesh(&self) -> Mesh {
        let n = self.vertex_count();
        let mut mesh = Mesh {
            position: Vec::with_capacity(n * VEC3),
            normal: Vec::with_capacity(n * VEC3),
            uv: Vec::with_capacity(n * VEC2),
            index: self.index.clone(),
        };

        for v in self.records() {
            mesh.position.extend_from_slice(&v.position);
            mesh.uv.extend_from_slice(&v.uv);
            mesh.normal.extend_from_slice(&v.normal);
        }

        mesh
    }
}

/// Incremental scene builder.
///
/// Each pushed mesh has its indices shifted by the number of vertices pushed
/// before it. Input is not validated: a mesh with short `normal`/`uv` arrays
/// gets NaN-filled components and out-of-range indices are copied as-is.
#[derive(Debug, Default)]
pub struct Composer {
    buffer: SceneBuffer,
}

impl Composer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-sizes the output for `vertices` records and `indices` indices.
    pub fn with_capacity(vertices: usize, indices: usize) -> Self {
        Self {
            buffer: SceneBuffer {
                interleaved: Vec::with_capacity(vertices * STRIDE),
                index: Vec::with_capacity(indices),
            },
        }
    }

    /// Vertices appended so far; the index offset for the next mesh.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.buffer.vertex_count()
    }

    pub fn push(&mut self, mesh: &Mesh) -> &mut Self {
        let offset = self.vertex_count() as u32;

        self.buffer
            .index
            .extend(mesh.index.iter().map(|&i| i.wrapping_add(offset)));

        for v in 0..mesh.vertex_count() {
            let p = v * VEC3;
            let t = v * VEC2;
            let record: [f32; STRIDE] = [
                component(&mesh.position, p),
                component(&mesh.position, p + 1),
                component(&mesh.position, p + 2),
                component(&mesh.uv, t),
                component(&mesh.uv, t + 1),
                component(&mesh.normal, p),
                component(&mesh.normal, p + 1),
                component(&mesh.normal, p + 2),
            ];
            self.buffer.interleaved.extend_from_slice(&record);
        }

        self
    }

    pub fn finish(self) -> SceneBuffer {
        self.buffer
    }
}

/// Composes `meshes` in order into one [`SceneBuffer`].
///
/// An empty list yields empty buffers.
pub fn compose<'a, I>(meshes: I) -> SceneBuffer
where
    I: IntoIterator<Item = &'a Mesh>,
{
    let mut composer = Composer::new();
    for mesh in meshes {
        composer.push(mesh);
    }
    composer.finish()
}

/// Like [`compose`], but validates every mesh first.
///
/// The error names the position of the first offending mesh in the list.
pub fn compose_checked<'a, I>(meshes: I) -> Result<SceneBuffer, MeshError>
where
    I: IntoIterator<Item = &'a Mesh>,
{
    let mut composer = Composer::new();
    for (position, mesh) in meshes.into_iter().enumerate() {
        mesh.validate().map_err(|e| MeshError::InComposition {
            position,
            source: Box::new(e),
        })?;
        composer.push(mesh);
    }
    Ok(composer.finish())
}

#[inline]
fn component(data: &[f32], i: usize) -> f32 {
    data.get(i).copied().unwrap_or(f32::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mesh_a() -> Mesh {
        Mesh::new(
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0],
            vec![0, 1, 2],
        )
    }

    fn mesh_b() -> Mesh {
        Mesh::new(
            vec![5.0, 5.0, 5.0, 6.0, 6.0, 6.0],
            vec![1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.25, 0.75, 0.5, 0.5],
            vec![0, 1],
        )
    }

    fn mesh_c() -> Mesh {
        Mesh::new(
            vec![-1.0, -2.0, -3.0, 9.0, 8.0, 7.0, 0.5, 0.5, 0.5],
            vec![0.0, -1.0, 0.0, 0.0, -1.0, 0.0, 0.0, -1.0, 0.0],
            vec![0.1, 0.2, 0.3, 0.4, 0.5, 0.6],
            vec![2, 1, 0],
        )
    }

    // ── offsets ───────────────────────────────────────────────────────────

    #[test]
    fn second_mesh_indices_are_shifted() {
        let scene = compose(&[mesh_a(), mesh_b()]);
        assert_eq!(scene.index, vec![0, 1, 2, 3, 4]);
        assert_eq!(scene.vertex_count(), 5);
        assert_eq!(scene.index_count(), 5);
    }

    #[test]
    fn records_keep_mesh_order_and_field_order() {
        let scene = compose(&[mesh_a(), mesh_b()]);
        let r = scene.records();
        assert_eq!(r.len(), 5);
        assert_eq!(
            r[1],
            Vertex { position: [1.0, 0.0, 0.0], uv: [1.0, 0.0], normal: [0.0, 0.0, 1.0] }
        );
        assert_eq!(
            r[3],
            Vertex { position: [5.0, 5.0, 5.0], uv: [0.25, 0.75], normal: [1.0, 0.0, 0.0] }
        );
        assert_eq!(
            scene.interleaved[3 * STRIDE..4 * STRIDE],
            [5.0, 5.0, 5.0, 0.25, 0.75, 1.0, 0.0, 0.0]
        );
    }

    #[test]
    fn every_index_in_range() {
        let scene = compose(&[mesh_c(), mesh_a(), mesh_b(), mesh_c()]);
        let n = scene.vertex_count() as u32;
        assert!(scene.index.iter().all(|&i| i < n));
    }

    // ── edge cases ────────────────────────────────────────────────────────

    #[test]
    fn empty_list_yields_empty_buffers() {
        let none: [Mesh; 0] = [];
        let scene = compose(&none);
        assert!(scene.interleaved.is_empty());
        assert!(scene.index.is_empty());
        assert!(scene.is_empty());
    }

    #[test]
    fn empty_mesh_contributes_no_offset() {
        let scene = compose(&[mesh_a(), Mesh::default(), mesh_b()]);
        assert_eq!(scene.index, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn short_attributes_fill_with_nan() {
        let mut broken = mesh_a();
        broken.uv.truncate(2);
        let scene = compose(&[broken]);
        assert_eq!(scene.vertex_count(), 3);
        assert!(scene.records()[2].uv.iter().all(|c| c.is_nan()));
        assert_eq!(scene.records()[0].uv, [0.0, 0.0]);
    }

    #[test]
    fn out_of_range_indices_pass_through() {
        let mut broken = mesh_b();
        broken.index = vec![7];
        let scene = compose(&[mesh_a(), broken]);
        assert_eq!(scene.index, vec![0, 1, 2, 10]);
    }

    // ── recomposition ─────────────────────────────────────────────────────

    #[test]
    fn recomposing_a_prefix_matches_direct() {
        let prefix = compose(&[mesh_a(), mesh_b()]).to_mesh();
        let staged = compose(&[prefix, mesh_c()]);
        let direct = compose(&[mesh_a(), mesh_b(), mesh_c()]);
        assert_eq!(staged, direct);
    }

    #[test]
    fn builder_matches_compose() {
        let mut composer = Composer::with_capacity(8, 8);
        composer.push(&mesh_a()).push(&mesh_b());
        assert_eq!(composer.vertex_count(), 5);
        composer.push(&mesh_c());
        assert_eq!(composer.finish(), compose(&[mesh_a(), mesh_b(), mesh_c()]));
    }

    #[test]
    fn decompose_recovers_attributes() {
        let (a, b) = (mesh_a(), mesh_b());
        let back = compose(&[a.clone(), b.clone()]).to_mesh();
        assert_eq!(back.position, [a.position, b.position].concat());
        assert_eq!(back.normal, [a.normal, b.normal].concat());
        assert_eq!(back.uv, [a.uv, b.uv].concat());
    }

    // ── checked ───────────────────────────────────────────────────────────

    #[test]
    fn checked_accepts_valid_meshes() {
        let meshes = [mesh_a(), mesh_c()];
        assert_eq!(compose_checked(&meshes), Ok(compose(&meshes)));
    }

    #[test]
    fn checked_reports_offending_position() {
        let mut broken = mesh_c();
        broken.index = vec![0, 1, 5];
        let err = compose_checked(&[mesh_a(), mesh_c(), broken]).unwrap_err();
        match err {
            MeshError::InComposition { position, source } => {
                assert_eq!(position, 2);
                assert_eq!(
                    *source,
                    MeshError::IndexOutOfRange { slot: 2, value: 5, vertex_count: 3 }
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
