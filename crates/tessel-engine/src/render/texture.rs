use std::path::Path;

use anyhow::{Context, Result};

/// CPU-side RGBA8 image ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    /// Row-major, 4 bytes per pixel, first row at `v = 0`.
    pub rgba: Vec<u8>,
}

impl TextureImage {
    /// Decodes an image file (PNG, JPEG or BMP) into RGBA8.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let img = image::open(path)
            .with_context(|| format!("failed to load texture {}", path.display()))?
            .into_rgba8();

        let (width, height) = img.dimensions();
        anyhow::ensure!(width > 0 && height > 0, "texture {} is empty", path.display());
        log::info!("loaded texture {} ({width}x{height})", path.display());

        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Procedural `size`x`size` checkerboard of `cells` per side, tinted red
    /// along `u` and green along `v` so orientation is visible on a mesh.
    pub fn uv_grid(size: u32, cells: u32) -> Self {
        let size = size.max(1);
        let cells = cells.clamp(1, size);
        let cell = size / cells;

        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let dark = ((x / cell) + (y / cell)) % 2 == 1;
                let base: u16 = if dark { 96 } else { 224 };
                let u = (x * 255 / size) as u16;
                let v = (y * 255 / size) as u16;
                rgba.extend_from_slice(&[
                    ((base + u) / 2) as u8,
                    ((base + v) / 2) as u8,
                    base as u8,
                    255,
                ]);
            }
        }

        Self {
            width: size,
            height: size,
            rgba,
        }
    }

    /// Fails if either side exceeds `max` texels.
    pub fn check_dimensions(&self, max: u32) -> Result<()> {
        anyhow::ensure!(
            self.width <= max && self.height <= max,
            "texture is {}x{} but the device allows at most {max}x{max}",
            self.width,
            self.height
        );
        Ok(())
    }

    /// Uploads the pixels and creates a clamp-to-edge, linear sampler.
    pub(crate) fn upload(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
    ) -> Result<GpuTexture> {
        self.check_dimensions(device.limits().max_texture_dimension_2d)?;

        let size = wgpu::Extent3d {
            width: self.width,
            height: self.height,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("tessel diffuse texture"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &self.rgba,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * self.width),
                rows_per_image: Some(self.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("tessel diffuse sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            ..Default::default()
        });

        Ok(GpuTexture {
            _texture: texture,
            view,
            sampler,
        })
    }
}

/// Uploaded texture plus the view and sampler bound by the lit renderer.
pub(crate) struct GpuTexture {
    _texture: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) sampler: wgpu::Sampler,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(img: &TextureImage, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * img.width + x) * 4) as usize;
        [img.rgba[i], img.rgba[i + 1], img.rgba[i + 2], img.rgba[i + 3]]
    }

    // ── uv grid ───────────────────────────────────────────────────────────

    #[test]
    fn uv_grid_has_expected_size() {
        let img = TextureImage::uv_grid(64, 8);
        assert_eq!((img.width, img.height), (64, 64));
        assert_eq!(img.rgba.len(), 64 * 64 * 4);
    }

    #[test]
    fn neighbouring_cells_alternate() {
        let img = TextureImage::uv_grid(64, 8);
        assert_ne!(pixel(&img, 0, 0)[2], pixel(&img, 8, 0)[2]);
        assert_eq!(pixel(&img, 0, 0)[2], pixel(&img, 8, 8)[2]);
        assert!(img.rgba.chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn degenerate_arguments_are_clamped() {
        let img = TextureImage::uv_grid(0, 0);
        assert_eq!((img.width, img.height), (1, 1));
        assert_eq!(img.rgba.len(), 4);
    }

    // ── device limits ─────────────────────────────────────────────────────

    #[test]
    fn oversized_image_is_rejected() {
        let img = TextureImage::uv_grid(64, 8);
        let err = img.check_dimensions(32).unwrap_err();
        assert!(err.to_string().contains("64x64"));
    }

    #[test]
    fn image_at_the_limit_is_accepted() {
        let img = TextureImage::uv_grid(64, 8);
        assert!(img.check_dimensions(64).is_ok());
    }

    // ── files ─────────────────────────────────────────────────────────────

    #[test]
    fn missing_file_is_an_error() {
        let err = TextureImage::from_path("does/not/exist.png").unwrap_err();
        assert!(format!("{err:#}").contains("does/not/exist.png"));
    }
}
