use glam::{Mat4, Vec3};
use tessel_engine::camera::Camera;
use tessel_engine::render::ColorMeshRenderer;
use tessel_mesh::primitives::colored_box;

use crate::spin::SpinDemo;

pub const EYE: Vec3 = Vec3::new(3.0, 2.0, -3.0);

/// `Rx(angle) · Ry(angle)`.
pub fn world(angle: f32) -> Mat4 {
    Mat4::from_rotation_x(angle) * Mat4::from_rotation_y(angle)
}

pub fn demo() -> SpinDemo {
    SpinDemo::new(
        ColorMeshRenderer::new(colored_box(), true),
        Camera::looking_at_origin(EYE),
        world,
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use tessel_engine::camera::OrbitAngles;

    use super::*;

    #[test]
    fn matches_orbit_with_equal_angles() {
        let angle = 0.8;
        let orbit = OrbitAngles { x: angle, y: angle }.world_matrix();
        let a = world(angle).to_cols_array();
        let b = orbit.to_cols_array();
        for (x, y) in a.iter().zip(&b) {
            assert_relative_eq!(*x, *y, epsilon = 1e-6);
        }
    }

    #[test]
    fn zero_angle_is_identity() {
        assert_eq!(world(0.0), Mat4::IDENTITY);
    }
}
