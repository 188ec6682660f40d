//! GPU state and the per-frame render pass.
//!
//! One pipeline, one sphere mesh, one shader for every body. Frame
//! level view/projection uniforms live in their own buffer and are
//! rewritten the moment the camera or window changes; per-body model
//! and normal matrices are collected by walking the scene core each
//! frame and written into 256-byte slots of a single dynamic-offset
//! uniform buffer, one indexed draw per slot.

use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use wgpu::util::DeviceExt;
use winit::dpi::PhysicalSize;
use winit::window::Window;

use orrery_scene::{
    draw_bodies, CameraCommand, DrawSink, ProjectionState, Uniform, ViewState, BODIES, BODY_COUNT,
};

use crate::mesh::{generate_uv_sphere, SphereOptions, Vertex};

/// Uniform buffer slot alignment required for dynamic offsets.
const BODY_SLOT_STRIDE: u64 = 256;

/// Launcher-supplied configuration.
#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub sphere: SphereOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            sphere: SphereOptions::default(),
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
struct FrameUniforms {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
struct BodyUniforms {
    model: [[f32; 4]; 4],
    normal: [[f32; 4]; 4],
}

/// [`DrawSink`] backed by a slot list: the scene walk records one
/// [`BodyUniforms`] per draw, uploaded and replayed afterwards.
/// View/projection uploads are owned by the frame buffer and ignored
/// here (the no-op-location semantic for unbound uniforms).
#[derive(Default)]
struct FrameRecorder {
    current: BodyUniforms,
    slots: Vec<BodyUniforms>,
}

impl DrawSink for FrameRecorder {
    fn set_matrix(&mut self, uniform: Uniform, value: glam::Mat4) {
        match uniform {
            Uniform::Model => self.current.model = value.to_cols_array_2d(),
            Uniform::Normal => self.current.normal = value.to_cols_array_2d(),
            Uniform::View | Uniform::Projection => {}
        }
    }

    fn draw(&mut self) {
        self.slots.push(self.current);
    }
}

fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Depth32Float,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    (texture, view)
}

pub struct Renderer {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    depth_texture: wgpu::Texture,
    depth_view: wgpu::TextureView,

    pipeline: wgpu::RenderPipeline,
    frame_bind_group: wgpu::BindGroup,
    body_bind_group: wgpu::BindGroup,

    frame_buffer: wgpu::Buffer,
    body_buffer: wgpu::Buffer,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    index_count: u32,

    pub view: ViewState,
    projection: ProjectionState,

    start: Instant,
}

impl Renderer {
    pub async fn new(window: Arc<Window>, options: RenderOptions) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(Arc::clone(&window))
            .context("create_surface failed")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .context("No suitable GPU adapters found")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Orrery Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .context("request_device failed")?;

        let caps = surface.get_capabilities(&adapter);
        let surface_format = caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let (depth_texture, depth_view) = create_depth_texture(&device, config.width, config.height);

        // Sphere mesh, generated and uploaded once, reused by every draw.
        let (vertices, indices) = generate_uv_sphere(options.sphere);
        tracing::info!(
            "Sphere mesh: {} vertices, {} indices",
            vertices.len(),
            indices.len()
        );

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Vertex Buffer"),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Sphere Index Buffer"),
            contents: bytemuck::cast_slice(&indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        let frame_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Frame Uniform Buffer"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let body_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Body Uniform Buffer"),
            size: BODY_SLOT_STRIDE * BODY_COUNT as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let shader = device.create_shader_module(wgpu::include_wgsl!("shader.wgsl"));

        let frame_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let body_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Body Bind Group Layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(
                        std::mem::size_of::<BodyUniforms>() as u64
                    ),
                },
                count: None,
            }],
        });

        let frame_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout: &frame_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: frame_buffer.as_entire_binding(),
            }],
        });

        let body_bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Body Bind Group"),
            layout: &body_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &body_buffer,
                    offset: 0,
                    size: wgpu::BufferSize::new(std::mem::size_of::<BodyUniforms>() as u64),
                }),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Orrery Pipeline Layout"),
            bind_group_layouts: &[&frame_layout, &body_layout],
            push_constant_ranges: &[],
        });

        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Orrery Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[Vertex::layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
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
                format: wgpu::TextureFormat::Depth32Float,
                depth_write_enabled: true,
                depth_compare: wgpu::CompareFunction::Less,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        let aspect = config.width as f32 / config.height as f32;

        let renderer = Self {
            surface,
            device,
            queue,
            config,
            depth_texture,
            depth_view,
            pipeline,
            frame_bind_group,
            body_bind_group,
            frame_buffer,
            body_buffer,
            vertex_buffer,
            index_buffer,
            index_count: indices.len() as u32,
            view: ViewState::new(),
            projection: ProjectionState::perspective(aspect),
            start: Instant::now(),
        };

        renderer.refresh_view();
        renderer.refresh_projection();

        Ok(renderer)
    }

    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        tracing::debug!("Resizing to {}x{}", new_size.width, new_size.height);

        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);

        let (depth_texture, depth_view) =
            create_depth_texture(&self.device, self.config.width, self.config.height);
        self.depth_texture = depth_texture;
        self.depth_view = depth_view;

        self.projection =
            ProjectionState::perspective(new_size.width as f32 / new_size.height as f32);
        self.refresh_projection();
    }

    /// Apply a discrete camera movement and immediately refresh the
    /// view uniform so GPU state never goes stale.
    pub fn apply_camera(&mut self, command: CameraCommand) {
        self.view.apply_translation(command.delta());
        self.refresh_view();
    }

    /// Mouse-look is not implemented; pointer deltas are accepted and
    /// discarded.
    pub fn pointer_moved(&mut self, _dx: f64, _dy: f64) {}

    fn refresh_view(&self) {
        let view = self.view.view_matrix().to_cols_array_2d();
        self.queue
            .write_buffer(&self.frame_buffer, 0, bytemuck::bytes_of(&view));
    }

    fn refresh_projection(&self) {
        let projection = self.projection.matrix().to_cols_array_2d();
        self.queue.write_buffer(
            &self.frame_buffer,
            std::mem::size_of::<[[f32; 4]; 4]>() as u64,
            bytemuck::bytes_of(&projection),
        );
    }

    pub fn render(&mut self) -> Result<()> {
        let frame = match self.surface.get_current_texture() {
            Ok(f) => f,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.surface.configure(&self.device, &self.config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                anyhow::bail!("Surface out of memory");
            }
            Err(e) => {
                return Err(anyhow::anyhow!(e));
            }
        };

        // Walk the scene for the current time and stage the per-body
        // uniforms, one aligned slot per draw.
        let t = self.start.elapsed().as_secs_f64();
        let mut recorder = FrameRecorder::default();
        draw_bodies(&BODIES, self.view.pose(), t, &mut recorder);

        for (i, slot) in recorder.slots.iter().enumerate() {
            self.queue.write_buffer(
                &self.body_buffer,
                i as u64 * BODY_SLOT_STRIDE,
                bytemuck::bytes_of(slot),
            );
        }

        let target = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &target,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.0,
                            g: 0.0,
                            b: 0.02,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.frame_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint32);

            for i in 0..recorder.slots.len() {
                let offset = (i as u64 * BODY_SLOT_STRIDE) as u32;
                rpass.set_bind_group(1, &self.body_bind_group, &[offset]);
                rpass.draw_indexed(0..self.index_count, 0, 0..1);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
