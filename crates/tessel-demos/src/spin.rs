use glam::Mat4;
use tessel_engine::camera::Camera;
use tessel_engine::core::{App, AppControl, FrameCtx};
use tessel_engine::render::{ColorMeshRenderer, Transforms};

use crate::common::{CLEAR, SPIN_PERIOD, escape_pressed};

/// A colored mesh whose world matrix is a function of the spin angle.
pub struct SpinDemo {
    renderer: ColorMeshRenderer,
    camera: Camera,
    world: fn(f32) -> Mat4,
}

impl SpinDemo {
    pub fn new(renderer: ColorMeshRenderer, camera: Camera, world: fn(f32) -> Mat4) -> Self {
        Self {
            renderer,
            camera,
            world,
        }
    }
}

impl App for SpinDemo {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if escape_pressed(ctx.input_frame) {
            return AppControl::Exit;
        }

        let angle = ctx.time.spin_angle(SPIN_PERIOD);
        let transforms = Transforms::new(&self.camera, (self.world)(angle), ctx.window.viewport());

        let renderer = &mut self.renderer;
        ctx.render(CLEAR, |rctx, target| renderer.render(rctx, target, &transforms))
    }
}
