//! Tessel engine crate.
//!
//! Owns the platform + GPU runtime pieces the demos are built on: window loop,
//! device/surface, input, frame timing, camera math and the mesh renderers.

pub mod camera;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
