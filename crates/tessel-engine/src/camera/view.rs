use glam::{Mat4, Vec3};

/// Fixed look-at camera with a perspective projection.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view, radians.
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 5.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Camera at `eye` looking at the origin, other parameters default.
    pub fn looking_at_origin(eye: Vec3) -> Self {
        Self {
            eye,
            ..Self::default()
        }
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Projection for a viewport of the given aspect ratio (width / height).
    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(f32::EPSILON), self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec4;

    use super::*;

    #[test]
    fn target_lands_on_view_axis() {
        let cam = Camera::looking_at_origin(Vec3::new(3.0, 2.0, -3.0));
        let v = cam.view() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert_relative_eq!(v.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(v.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(-v.z, cam.eye.length(), epsilon = 1e-5);
    }

    #[test]
    fn projection_maps_near_and_far_to_unit_depth() {
        let cam = Camera::default();
        let p = cam.projection(16.0 / 9.0);

        let near = p * Vec4::new(0.0, 0.0, -cam.near, 1.0);
        let far = p * Vec4::new(0.0, 0.0, -cam.far, 1.0);
        assert_relative_eq!(near.z / near.w, 0.0, epsilon = 1e-5);
        assert_relative_eq!(far.z / far.w, 1.0, epsilon = 1e-5);
    }

    #[test]
    fn degenerate_aspect_stays_finite() {
        assert!(Camera::default().projection(0.0).is_finite());
    }
}
