use anyhow::{Context, Result};
use wgpu::util::DeviceExt;

use tessel_mesh::SceneBuffer;
use tessel_mesh::compose::{NORMAL_OFFSET, POSITION_OFFSET, STRIDE, UV_OFFSET};

use crate::render::{RenderCtx, RenderTarget};

use super::texture::{GpuTexture, TextureImage};
use super::uniforms::{LightUniform, Lighting, TransformUniform, Transforms, min_binding_size};

const F32: u64 = std::mem::size_of::<f32>() as u64;

const ATTRS: [wgpu::VertexAttribute; 3] = [
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: POSITION_OFFSET as u64 * F32,
        shader_location: 0,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x2,
        offset: UV_OFFSET as u64 * F32,
        shader_location: 1,
    },
    wgpu::VertexAttribute {
        format: wgpu::VertexFormat::Float32x3,
        offset: NORMAL_OFFSET as u64 * F32,
        shader_location: 2,
    },
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: STRIDE as u64 * F32,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &ATTRS,
    }
}

/// Renderer for a composed [`SceneBuffer`]: one texture, ambient light and one
/// directional light, back faces culled, one indexed draw call.
pub struct LitMeshRenderer {
    scene: SceneBuffer,
    image: TextureImage,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    transform_ubo: Option<wgpu::Buffer>,
    light_ubo: Option<wgpu::Buffer>,
    texture: Option<GpuTexture>,
    /// Set once a lazy upload failed, so the error is logged a single time.
    texture_failed: bool,

    vbo: Option<wgpu::Buffer>,
    ibo: Option<wgpu::Buffer>,
}

impl LitMeshRenderer {
    pub fn new(scene: SceneBuffer, image: TextureImage) -> Self {
        Self {
            scene,
            image,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            transform_ubo: None,
            light_ubo: None,
            texture: None,
            texture_failed: false,
            vbo: None,
            ibo: None,
        }
    }

    pub fn scene(&self) -> &SceneBuffer {
        &self.scene
    }

    /// Uploads the texture ahead of the first frame.
    ///
    /// Fails when the image exceeds the device's 2D texture limit. Without this
    /// call the upload happens lazily in `render`, where a failure can only be
    /// logged and the scene is skipped.
    pub fn prepare(&mut self, device: &wgpu::Device, queue: &wgpu::Queue) -> Result<()> {
        if self.texture.is_none() {
            let texture = self
                .image
                .upload(device, queue)
                .context("failed to upload scene texture")?;
            self.texture = Some(texture);
        }
        Ok(())
    }

    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        transforms: &Transforms,
        lighting: &Lighting,
    ) {
        if self.scene.index.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_bindings(ctx);

        let Some(transform_ubo) = self.transform_ubo.as_ref() else { return };
        let Some(light_ubo) = self.light_ubo.as_ref() else { return };
        ctx.queue
            .write_buffer(transform_ubo, 0, bytemuck::bytes_of(&transforms.to_uniform()));
        ctx.queue
            .write_buffer(light_ubo, 0, bytemuck::bytes_of(&lighting.to_uniform()));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(vbo) = self.vbo.as_ref() else { return };
        let Some(ibo) = self.ibo.as_ref() else { return };

        let mut rpass = target.begin_load_pass("tessel lit mesh pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.set_index_buffer(ibo.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.scene.index_count() as u32, 0, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("tessel lit mesh shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/lit.wgsl").into()),
        });

        let uniform = |binding, visibility, size| wgpu::BindGroupLayoutEntry {
            binding,
            visibility,
            ty: wgpu::BindingType::Buffer {
                ty: wgpu::BufferBindingType::Uniform,
                has_dynamic_offset: false,
                min_binding_size: size,
            },
            count: None,
        };

        let bind_group_layout =
            ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("tessel lit mesh bgl"),
                entries: &[
                    uniform(
                        0,
                        wgpu::ShaderStages::VERTEX,
                        min_binding_size::<TransformUniform>(),
                    ),
                    uniform(
                        1,
                        wgpu::ShaderStages::FRAGMENT,
                        min_binding_size::<LightUniform>(),
                    ),
                    wgpu::BindGroupLayoutEntry {
                        binding: 2,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Texture {
                            sample_type: wgpu::TextureSampleType::Float { filterable: true },
                            view_dimension: wgpu::TextureViewDimension::D2,
                            multisampled: false,
                        },
                        count: None,
                    },
                    wgpu::BindGroupLayoutEntry {
                        binding: 3,
                        visibility: wgpu::ShaderStages::FRAGMENT,
                        ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                        count: None,
                    },
                ],
            });

        let pipeline_layout =
            ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
                label: Some("tessel lit mesh pipeline layout"),
                bind_group_layouts: &[&bind_group_layout],
                immediate_size: 0,
            });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("tessel lit mesh pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[vertex_layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: Some(wgpu::Face::Back),
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: ctx.depth_format,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("lit mesh pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let transform_ubo = self.transform_ubo.get_or_insert_with(|| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("tessel lit mesh transform ubo"),
                size: std::mem::size_of::<TransformUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });
        let light_ubo = self.light_ubo.get_or_insert_with(|| {
            ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("tessel lit mesh light ubo"),
                size: std::mem::size_of::<LightUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            })
        });
        if self.texture.is_none() {
            if self.texture_failed {
                return;
            }
            match self.image.upload(ctx.device, ctx.queue) {
                Ok(texture) => self.texture = Some(texture),
                Err(err) => {
                    log::error!("scene texture upload failed: {err:#}");
                    self.texture_failed = true;
                    return;
                }
            }
        }
        let Some(texture) = self.texture.as_ref() else { return };

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("tessel lit mesh bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: transform_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: light_ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 3,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
        });

        self.bind_group = Some(bind_group);
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.vbo.is_some() && self.ibo.is_some() {
            return;
        }

        self.vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessel lit mesh vbo"),
            contents: bytemuck::cast_slice(self.scene.records()),
            usage: wgpu::BufferUsages::VERTEX,
        }));
        self.ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("tessel lit mesh ibo"),
            contents: bytemuck::cast_slice(&self.scene.index),
            usage: wgpu::BufferUsages::INDEX,
        }));

        log::debug!(
            "uploaded scene: {} vertices, {} indices",
            self.scene.vertex_count(),
            self.scene.index_count()
        );
    }
}
