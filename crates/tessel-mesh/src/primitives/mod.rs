//! Built-in shapes used by the demos.
//!
//! Every generator returns a [`Mesh`](crate::Mesh) in local space with
//! counter-clockwise front faces and outward normals.

mod colored;
mod cube;
mod plane;
mod torus;

pub use colored::{COLORED_STRIDE, ColoredMesh, colored_box, colored_triangle};
pub use cube::cube;
pub use plane::plane;
pub use torus::torus;

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::Mesh;

    use super::*;

    fn vec3(data: &[f32], i: usize) -> Vec3 {
        Vec3::new(data[i * 3], data[i * 3 + 1], data[i * 3 + 2])
    }

    /// Face normal from the winding agrees with the stored vertex normals.
    fn assert_ccw_outward(mesh: &Mesh) {
        for tri in mesh.index.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| vec3(&mesh.position, i as usize));
            let face = (b - a).cross(c - a);
            if face.length_squared() < 1e-12 {
                continue;
            }
            let stored = vec3(&mesh.normal, tri[0] as usize)
                + vec3(&mesh.normal, tri[1] as usize)
                + vec3(&mesh.normal, tri[2] as usize);
            assert!(face.dot(stored) > 0.0, "triangle {tri:?} winds against its normals");
        }
    }

    // ── invariants ────────────────────────────────────────────────────────

    #[test]
    fn generators_produce_valid_meshes() {
        for mesh in [cube(), plane(), torus(1.0, 0.3, 24, 12)] {
            assert_eq!(mesh.validate(), Ok(()));
        }
    }

    #[test]
    fn generators_wind_counter_clockwise() {
        assert_ccw_outward(&cube());
        assert_ccw_outward(&plane());
        assert_ccw_outward(&torus(1.0, 0.3, 24, 12));
    }

    #[test]
    fn normals_are_unit_length() {
        for mesh in [cube(), plane(), torus(2.0, 0.5, 16, 8)] {
            for n in mesh.normal.chunks_exact(3) {
                let len = Vec3::new(n[0], n[1], n[2]).length();
                assert!((len - 1.0).abs() < 1e-5);
            }
        }
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn cube_has_four_vertices_per_face() {
        let c = cube();
        assert_eq!(c.vertex_count(), 24);
        assert_eq!(c.triangle_count(), 12);
    }

    #[test]
    fn torus_duplicates_seams() {
        let t = torus(1.0, 0.25, 8, 4);
        assert_eq!(t.vertex_count(), 9 * 5);
        assert_eq!(t.triangle_count(), 8 * 4 * 2);
    }

    #[test]
    fn plane_faces_positive_z() {
        let p = plane();
        assert_eq!(p.vertex_count(), 4);
        assert!(p.normal.chunks_exact(3).all(|n| n == [0.0, 0.0, 1.0]));
        assert!(p.position.chunks_exact(3).all(|v| v[2] == 0.0));
    }
}
