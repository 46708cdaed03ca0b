use glam::Vec3;
use tessel_engine::camera::{Camera, OrbitAngles};
use tessel_engine::core::{App, AppControl, FrameCtx};
use tessel_engine::device::Gpu;
use tessel_engine::render::{Lighting, LitMeshRenderer, TextureImage, Transforms};
use tessel_mesh::primitives::{cube, plane, torus};
use tessel_mesh::{Mesh, SceneBuffer, compose};

use crate::common::{CLEAR, escape_pressed};

pub const EYE: Vec3 = Vec3::new(0.0, 2.0, -10.0);

const TORUS_MAJOR: f32 = 1.0;
const TORUS_MINOR: f32 = 0.4;
const TORUS_RINGS: u32 = 32;
const TORUS_SIDES: u32 = 16;

/// Torus at the origin, a stretched tilted cube beside it and a floor plane.
pub fn scene_meshes() -> [Mesh; 3] {
    let torus = torus(TORUS_MAJOR, TORUS_MINOR, TORUS_RINGS, TORUS_SIDES);

    let cube = cube()
        .scaled([2.0, 1.0, 1.0])
        .rotated([0.0, 0.0, 1.0], 1.2)
        .translated([1.0, 0.5, 0.0]);

    // XY quad turned to face +Y, dropped below the other two.
    let floor = plane()
        .scaled([5.0, 5.0, 5.0])
        .rotated([1.0, 0.0, 0.0], 270f32.to_radians())
        .translated([0.0, -2.0, 0.0]);

    [torus, cube, floor]
}

pub fn build_scene() -> SceneBuffer {
    let scene = compose(&scene_meshes());
    log::info!(
        "composed scene: {} vertices, {} indices",
        scene.vertex_count(),
        scene.index_count()
    );
    scene
}

/// Lit, textured scene turned with W/A/S/D.
pub struct SceneDemo {
    renderer: LitMeshRenderer,
    camera: Camera,
    lighting: Lighting,
    angles: OrbitAngles,
}

impl SceneDemo {
    pub fn new(texture: TextureImage) -> Self {
        Self {
            renderer: LitMeshRenderer::new(build_scene(), texture),
            camera: Camera::looking_at_origin(EYE),
            lighting: Lighting::default(),
            angles: OrbitAngles::default(),
        }
    }
}

impl App for SceneDemo {
    fn on_gpu_ready(&mut self, gpu: &Gpu<'_>) -> anyhow::Result<()> {
        self.renderer.prepare(gpu.device(), gpu.queue())
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if escape_pressed(ctx.input_frame) {
            return AppControl::Exit;
        }

        self.angles.apply_frame(ctx.input_frame);
        let transforms = Transforms::new(
            &self.camera,
            self.angles.world_matrix(),
            ctx.window.viewport(),
        );

        let (renderer, lighting) = (&mut self.renderer, &self.lighting);
        ctx.render(CLEAR, |rctx, target| {
            renderer.render(rctx, target, &transforms, lighting)
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    const TORUS_VERTICES: usize = ((TORUS_RINGS + 1) * (TORUS_SIDES + 1)) as usize;

    #[test]
    fn every_mesh_is_well_formed() {
        for mesh in scene_meshes() {
            assert_eq!(mesh.validate(), Ok(()));
        }
    }

    #[test]
    fn composed_counts_add_up() {
        let scene = build_scene();
        assert_eq!(scene.vertex_count(), TORUS_VERTICES + 24 + 4);
        let torus_indices = (TORUS_RINGS * TORUS_SIDES * 6) as usize;
        assert_eq!(scene.index_count(), torus_indices + 36 + 6);
    }

    #[test]
    fn floor_indices_follow_torus_and_cube() {
        let scene = build_scene();
        let floor_base = (TORUS_VERTICES + 24) as u32;
        assert_eq!(
            scene.index[scene.index_count() - 6..],
            [0, 1, 2, 0, 2, 3].map(|i| i + floor_base)
        );
    }

    #[test]
    fn floor_faces_up_at_y_minus_two() {
        let [_, _, floor] = scene_meshes();
        for p in floor.position.chunks_exact(3) {
            assert_relative_eq!(p[1], -2.0, epsilon = 1e-5);
        }
        for n in floor.normal.chunks_exact(3) {
            assert_relative_eq!(n[1], 1.0, epsilon = 1e-5);
        }
    }
}
