//! Settings shared by every demo.

use tessel_engine::input::{InputFrame, Key};
use tessel_engine::render::Color;

pub const CLEAR: Color = Color::rgb(0.9, 0.9, 0.9);

/// Seconds per full turn of the time-driven demos.
pub const SPIN_PERIOD: f32 = 6.0;

pub fn escape_pressed(frame: &InputFrame) -> bool {
    frame.keys_pressed.contains(&Key::Escape)
}
