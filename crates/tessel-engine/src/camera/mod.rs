//! Camera and world-rotation math.
//!
//! Right-handed, +Y up, perspective depth in `[0, 1]` as wgpu expects.

mod orbit;
mod view;

pub use orbit::{ORBIT_STEP, OrbitAngles};
pub use view::Camera;
