//! Rigid and scaling transforms over a mesh's vertex data.
//!
//! Every operation returns a new [`Mesh`]; the input is never touched. Apply
//! them in sequence to compose (scale, then rotate, then translate is the
//! usual order). There is no matrix accumulation: each step rewrites the
//! vertex arrays directly.
//!
//! Normals are only ever rotated. They are not inverse-transpose transformed,
//! so a mesh that went through a non-uniform [`scale`] keeps its pre-scale
//! normals and rotating it afterwards rotates those stale normals.

use glam::{Quat, Vec3};

use crate::error::MeshError;
use crate::mesh::{Mesh, VEC3};

/// Rotates positions and normals by `radians` around `axis` (right-hand rule).
///
/// `axis` is normalized internally. A zero axis cannot be normalized and
/// yields NaN vertex data; use [`try_rotate`] to reject it instead.
pub fn rotate(mesh: &Mesh, axis: [f32; 3], radians: f32) -> Mesh {
    let q = Quat::from_axis_angle(Vec3::from_array(axis).normalize(), radians);

    Mesh {
        position: rotate_vectors(&mesh.position, q),
        normal: rotate_vectors(&mesh.normal, q),
        uv: mesh.uv.clone(),
        index: mesh.index.clone(),
    }
}

/// Like [`rotate`], but fails on a zero-length or non-finite axis.
pub fn try_rotate(mesh: &Mesh, axis: [f32; 3], radians: f32) -> Result<Mesh, MeshError> {
    let v = Vec3::from_array(axis);
    if !v.is_finite() || v.length_squared() <= f32::EPSILON {
        return Err(MeshError::DegenerateAxis(axis));
    }
    Ok(rotate(mesh, axis, radians))
}

/// Offsets every position by `v`. Normals, uv and index are unchanged.
///
/// Components are matched cyclically: `position[i] += v[i % 3]`.
pub fn translate(mesh: &Mesh, v: [f32; 3]) -> Mesh {
    Mesh {
        position: map_cyclic(&mesh.position, |p, k| p + v[k]),
        ..mesh.clone()
    }
}

/// Scales every position per axis by `v`. Normals, uv and index are unchanged.
///
/// Components are matched cyclically: `position[i] *= v[i % 3]`.
pub fn scale(mesh: &Mesh, v: [f32; 3]) -> Mesh {
    Mesh {
        position: map_cyclic(&mesh.position, |p, k| p * v[k]),
        ..mesh.clone()
    }
}

impl Mesh {
    /// Chaining form of [`rotate`].
    #[inline]
    pub fn rotated(&self, axis: [f32; 3], radians: f32) -> Mesh {
        rotate(self, axis, radians)
    }

    /// Chaining form of [`translate`].
    #[inline]
    pub fn translated(&self, v: [f32; 3]) -> Mesh {
        translate(self, v)
    }

    /// Chaining form of [`scale`].
    #[inline]
    pub fn scaled(&self, v: [f32; 3]) -> Mesh {
        scale(self, v)
    }
}

// Trailing floats that do not form a whole vector are dropped.
fn rotate_vectors(data: &[f32], q: Quat) -> Vec<f32> {
    data.chunks_exact(VEC3)
        .flat_map(|c| (q * Vec3::new(c[0], c[1], c[2])).to_array())
        .collect()
}

fn map_cyclic(data: &[f32], f: impl Fn(f32, usize) -> f32) -> Vec<f32> {
    data.iter()
        .enumerate()
        .map(|(i, &p)| f(p, i % VEC3))
        .collect()
}
