//! Mesh data, rigid transforms and single-draw scene composition.
//!
//! This crate has no GPU dependencies. It shapes vertex data on the CPU; the
//! engine crate uploads the result.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`mesh`] | `Mesh` (position / normal / uv / index) |
//! | [`transform`] | `rotate`, `translate`, `scale` |
//! | [`compose`] | `Composer`, `SceneBuffer`, interleaved layout constants |
//! | [`error`] | `MeshError` for the validating variants |
//! | [`primitives`] | cube, plane, torus and the colored demo meshes |
//!
//! # Quick start
//!
//! ```rust
//! use tessel_mesh::{compose, primitives};
//!
//! let cube = primitives::cube()
//!     .scaled([2.0, 1.0, 1.0])
//!     .rotated([0.0, 0.0, 1.0], 1.2)
//!     .translated([1.0, 0.5, 0.0]);
//!
//! let scene = compose(&[primitives::plane(), cube]);
//! assert_eq!(scene.vertex_count(), 4 + 24);
//! assert_eq!(scene.index_count(), 6 + 36);
//! ```

pub mod compose;
pub mod error;
pub mod mesh;
pub mod primitives;
pub mod transform;

pub use compose::{Composer, SceneBuffer, Vertex, compose, compose_checked};
pub use error::MeshError;
pub use mesh::Mesh;
pub use transform::{rotate, scale, translate, try_rotate};
