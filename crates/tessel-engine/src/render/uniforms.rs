//! CPU-side uniform blocks shared by the mesh renderers.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

use crate::camera::Camera;

use super::ctx::Viewport;

/// World, view and projection matrices for one draw.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transforms {
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl Transforms {
    /// Matrices for `camera` looking at a world rotated by `world`.
    pub fn new(camera: &Camera, world: Mat4, viewport: Viewport) -> Self {
        Self {
            world,
            view: camera.view(),
            projection: camera.projection(viewport.aspect()),
        }
    }

    pub(super) fn to_uniform(self) -> TransformUniform {
        TransformUniform {
            world: self.world.to_cols_array_2d(),
            view: self.view.to_cols_array_2d(),
            projection: self.projection.to_cols_array_2d(),
        }
    }
}

/// Ambient term plus one directional light.
///
/// `direction` points from the surface toward the light; it need not be
/// normalized.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Lighting {
    pub ambient: Vec3,
    pub direction: Vec3,
    pub color: Vec3,
}

impl Default for Lighting {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.2),
            direction: Vec3::new(0.0, 0.0, -5.0),
            color: Vec3::splat(0.9),
        }
    }
}

impl Lighting {
    pub(super) fn to_uniform(self) -> LightUniform {
        LightUniform {
            ambient: self.ambient.to_array(),
            _pad0: 0.0,
            direction: self.direction.to_array(),
            _pad1: 0.0,
            color: self.color.to_array(),
            _pad2: 0.0,
        }
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Column-major matrices, 192 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct TransformUniform {
    pub world: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
}

/// WGSL `vec3<f32>` is 16-byte aligned, hence the padding (48 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, Pod, Zeroable)]
pub(super) struct LightUniform {
    pub ambient: [f32; 3],
    pub _pad0: f32,
    pub direction: [f32; 3],
    pub _pad1: f32,
    pub color: [f32; 3],
    pub _pad2: f32,
}

/// Minimum binding size for a uniform block of type `T`.
pub(super) fn min_binding_size<T>() -> Option<std::num::NonZeroU64> {
    std::num::NonZeroU64::new(std::mem::size_of::<T>() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<TransformUniform>(), 192);
        assert_eq!(std::mem::size_of::<LightUniform>(), 48);
    }

    #[test]
    fn light_fields_land_on_16_byte_boundaries() {
        let u = Lighting::default().to_uniform();
        let floats: &[f32] = bytemuck::cast_slice(std::slice::from_ref(&u));
        assert_eq!(floats[0..3], [0.2, 0.2, 0.2]);
        assert_eq!(floats[4..7], [0.0, 0.0, -5.0]);
        assert_eq!(floats[8..11], [0.9, 0.9, 0.9]);
    }

    #[test]
    fn transforms_use_camera_and_aspect() {
        let camera = Camera::looking_at_origin(Vec3::new(3.0, 0.0, -3.0));
        let t = Transforms::new(&camera, Mat4::IDENTITY, Viewport::new(200, 100));
        assert_eq!(t.view, camera.view());
        assert_eq!(t.projection, camera.projection(2.0));
        assert_eq!(t.to_uniform().world, Mat4::IDENTITY.to_cols_array_2d());
    }
}
