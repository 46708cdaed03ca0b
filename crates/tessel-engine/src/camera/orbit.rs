use glam::{Mat4, Quat};

use crate::input::{InputFrame, Key};

/// Radians added per key press or key-repeat.
pub const ORBIT_STEP: f32 = 0.05;

/// Keyboard-driven world rotation.
///
/// W/S tilt around X, D/A turn around Y. Each press or OS key-repeat moves by
/// [`ORBIT_STEP`]; holding a key therefore rotates at the platform repeat rate.
/// Feed it the frame's input once per tick and read [`world_matrix`] after.
///
/// [`world_matrix`]: OrbitAngles::world_matrix
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct OrbitAngles {
    pub x: f32,
    pub y: f32,
}

impl OrbitAngles {
    /// Applies one key press. Returns `false` for keys that are not bound.
    pub fn apply_key(&mut self, key: Key) -> bool {
        match key {
            Key::A => self.y -= ORBIT_STEP,
            Key::D => self.y += ORBIT_STEP,
            Key::W => self.x += ORBIT_STEP,
            Key::S => self.x -= ORBIT_STEP,
            _ => return false,
        }
        true
    }

    /// Applies every press and repeat recorded in `frame`, in arrival order.
    pub fn apply_frame(&mut self, frame: &InputFrame) {
        for key in frame.key_presses() {
            self.apply_key(key);
        }
    }

    /// `Rx(x) · Ry(y)`.
    pub fn world_matrix(&self) -> Mat4 {
        Mat4::from_quat(Quat::from_rotation_x(self.x))
            * Mat4::from_quat(Quat::from_rotation_y(self.y))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::Vec3;

    use crate::input::{InputEvent, InputState, KeyState};

    use super::*;

    fn press(state: &mut InputState, frame: &mut InputFrame, key: Key, repeat: bool) {
        state.apply_event(
            frame,
            InputEvent::Key {
                key,
                state: KeyState::Pressed,
                repeat,
            },
        );
    }

    #[test]
    fn wasd_steps_angles() {
        let mut angles = OrbitAngles::default();
        assert!(angles.apply_key(Key::W));
        assert!(angles.apply_key(Key::D));
        assert!(angles.apply_key(Key::D));
        assert!(angles.apply_key(Key::A));
        assert!(!angles.apply_key(Key::Escape));
        assert!(!angles.apply_key(Key::Unknown(7)));
        assert_relative_eq!(angles.x, ORBIT_STEP);
        assert_relative_eq!(angles.y, ORBIT_STEP);
    }

    #[test]
    fn frame_presses_and_repeats_all_count() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        press(&mut state, &mut frame, Key::S, false);
        press(&mut state, &mut frame, Key::S, true);
        press(&mut state, &mut frame, Key::S, true);

        let mut angles = OrbitAngles::default();
        angles.apply_frame(&frame);
        assert_relative_eq!(angles.x, -3.0 * ORBIT_STEP);
        assert_relative_eq!(angles.y, 0.0);
    }

    #[test]
    fn releases_do_not_move() {
        let mut state = InputState::default();
        let mut frame = InputFrame::default();
        press(&mut state, &mut frame, Key::A, false);
        state.apply_event(
            &mut frame,
            InputEvent::Key {
                key: Key::A,
                state: KeyState::Released,
                repeat: false,
            },
        );

        let mut angles = OrbitAngles::default();
        angles.apply_frame(&frame);
        assert_relative_eq!(angles.y, -ORBIT_STEP);
    }

    #[test]
    fn world_matrix_applies_y_then_x() {
        let angles = OrbitAngles {
            x: std::f32::consts::FRAC_PI_2,
            y: std::f32::consts::FRAC_PI_2,
        };
        // Ry(90°) takes +X to -Z, then Rx(90°) takes -Z to +Y.
        let p = angles.world_matrix().transform_point3(Vec3::X);
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 1.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn default_is_identity() {
        assert_eq!(OrbitAngles::default().world_matrix(), Mat4::IDENTITY);
    }
}
