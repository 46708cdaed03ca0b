//! GPU rendering subsystem.
//!
//! Each renderer owns its GPU resources (pipeline, buffers, bindings) and
//! creates them lazily on first use from the frame's [`RenderCtx`].
//!
//! Convention:
//! - right-handed world space, CCW front faces
//! - depth is tested `Less` against the frame's depth attachment
//! - clip-space depth in `[0, 1]`

mod color;
mod color_mesh;
mod ctx;
mod lit_mesh;
mod texture;
mod uniforms;

pub use color::Color;
pub use color_mesh::ColorMeshRenderer;
pub use ctx::{RenderCtx, RenderTarget, Viewport};
pub use lit_mesh::LitMeshRenderer;
pub use texture::TextureImage;
pub use uniforms::{Lighting, Transforms};
