use glam::{Mat4, Vec3};
use tessel_engine::camera::Camera;
use tessel_engine::render::ColorMeshRenderer;
use tessel_mesh::primitives::colored_triangle;

use crate::spin::SpinDemo;

pub const EYE: Vec3 = Vec3::new(3.0, 0.0, -3.0);

/// `Ry(angle)`.
pub fn world(angle: f32) -> Mat4 {
    Mat4::from_rotation_y(angle)
}

/// Both faces stay visible while the triangle turns.
pub fn demo() -> SpinDemo {
    SpinDemo::new(
        ColorMeshRenderer::new(colored_triangle(), false),
        Camera::looking_at_origin(EYE),
        world,
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn quarter_turn_takes_x_to_minus_z() {
        let p = world(std::f32::consts::FRAC_PI_2).transform_point3(Vec3::X);
        assert_relative_eq!(p.z, -1.0, epsilon = 1e-6);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-6);
    }
}
