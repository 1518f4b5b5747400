//! wgpu renderer for the hero background.
//!
//! Owns the surface, device and every GPU buffer. Buffers are sized from the
//! [`Scene`] at construction; each frame only rewrites uniforms, particle
//! centres and the valid prefix of the proximity segment buffer.

use glam::Mat4;
use hero_core::palette::linear_from_hex;
use hero_core::{
    Camera, Scene, LINE_COLOR, LINE_OPACITY, POINT_COLOR, POINT_OPACITY, POINT_SIZE, RING_COLOR,
    RING_SEGMENTS,
};

mod blob;
mod helpers;
mod lines;
mod points;

use blob::{create_blob_resources, BlobResources};
use lines::{create_lines_resources, LineDraw, LinesResources, LinesUniforms};
use points::{create_points_resources, PointsResources, PointsUniforms};

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    _depth_tex: wgpu::Texture,
    depth_view: wgpu::TextureView,

    blob: BlobResources,
    points: PointsResources,
    lines: LinesResources,

    point_color: [f32; 3],
    line_color: [f32; 3],
    ring_color: [f32; 3],

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    /// Configure `surface` and build all pipelines for `scene`.
    ///
    /// With `transparent` the canvas is cleared to zero alpha and a
    /// premultiplied alpha mode is picked when the surface offers one, so the
    /// page behind shows through.
    pub async fn new(
        instance: &wgpu::Instance,
        surface: wgpu::Surface<'a>,
        width: u32,
        height: u32,
        scene: &Scene,
        transparent: bool,
    ) -> anyhow::Result<Self> {
        let width = width.max(1);
        let height = height.max(1);
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Default limits keep older WebGPU implementations happy
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = if transparent
            && caps
                .alpha_modes
                .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[gpu] surface {}x{} format={:?} alpha={:?}",
            width,
            height,
            format,
            alpha_mode
        );

        let (depth_tex, depth_view) = helpers::create_depth_texture(&device, width, height);

        let blob = create_blob_resources(&device, format, scene.blob_mesh());
        let points = create_points_resources(&device, format, scene.particles.len());
        let lines = create_lines_resources(
            &device,
            format,
            scene.graph.lines().capacity(),
            &scene.rings,
            RING_SEGMENTS,
            LINE_OPACITY,
        );

        let clear_color = if transparent {
            wgpu::Color::TRANSPARENT
        } else {
            wgpu::Color {
                r: 0.02,
                g: 0.02,
                b: 0.04,
                a: 1.0,
            }
        };

        Ok(Self {
            surface,
            device,
            queue,
            config,
            _depth_tex: depth_tex,
            depth_view,
            blob,
            points,
            lines,
            point_color: linear_from_hex(POINT_COLOR)?,
            line_color: linear_from_hex(LINE_COLOR)?,
            ring_color: linear_from_hex(RING_COLOR)?,
            width,
            height,
            clear_color,
        })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.reconfigure();
        }
    }

    /// Reapply the current configuration, e.g. after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.config.width = self.width;
        self.config.height = self.height;
        self.surface.configure(&self.device, &self.config);
        (self._depth_tex, self.depth_view) =
            helpers::create_depth_texture(&self.device, self.width, self.height);
    }

    /// Recreate the particle and segment buffers after the scene changed
    /// its particle count. Blob resources are untouched.
    pub fn rebuild_scene_buffers(&mut self, scene: &Scene) {
        self.points =
            create_points_resources(&self.device, self.config.format, scene.particles.len());
        self.lines = create_lines_resources(
            &self.device,
            self.config.format,
            scene.graph.lines().capacity(),
            &scene.rings,
            RING_SEGMENTS,
            LINE_OPACITY,
        );
        log::info!("[gpu] rebuilt buffers for {} particles", scene.particles.len());
    }

    pub fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<(), wgpu::SurfaceError> {
        self.upload(scene, camera);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
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

            // Blob first so it writes depth; the translucent overlays only test.
            rpass.set_pipeline(&self.blob.pipeline);
            rpass.set_bind_group(0, &self.blob.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.blob.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.blob.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.blob.index_count, 0, 0..1);

            rpass.set_pipeline(&self.lines.pipeline);
            for ring in &self.lines.rings {
                draw_lines(&mut rpass, ring);
            }
            draw_lines(&mut rpass, &self.lines.graph);

            rpass.set_pipeline(&self.points.pipeline);
            rpass.set_bind_group(0, &self.points.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.points.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.points.instance_vb.slice(..));
            rpass.draw(0..6, 0..self.points.instance_count);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn upload(&mut self, scene: &Scene, camera: &Camera) {
        let view_proj = camera.view_projection();

        let blob_u = scene.blob.uniforms(camera, scene.palette());
        self.queue
            .write_buffer(&self.blob.uniform_buffer, 0, bytemuck::bytes_of(&blob_u));

        // POINT_SIZE is in sprite units (pixels per half viewport height at
        // unit depth); convert to a world-space quad edge.
        let point_world_size = POINT_SIZE * (camera.fovy_radians * 0.5).tan();
        let points_u = PointsUniforms {
            view: camera.view_matrix().to_cols_array_2d(),
            proj: camera.projection_matrix().to_cols_array_2d(),
            color: rgba(self.point_color, POINT_OPACITY),
            size: point_world_size,
            _pad: [0.0; 3],
        };
        self.queue
            .write_buffer(&self.points.uniform_buffer, 0, bytemuck::bytes_of(&points_u));
        let positions = scene.particles.positions();
        if !positions.is_empty() {
            self.queue
                .write_buffer(&self.points.instance_vb, 0, bytemuck::cast_slice(positions));
        }

        let lines = scene.graph.lines();
        let graph = &mut self.lines.graph;
        graph.vertex_count = lines.draw_range();
        if !lines.is_empty() {
            self.queue
                .write_buffer(&graph.vertex_buffer, 0, bytemuck::cast_slice(lines.valid()));
        }
        let graph_u = LinesUniforms {
            view_proj: view_proj.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: rgba(self.line_color, graph.opacity),
        };
        self.queue
            .write_buffer(&graph.uniform_buffer, 0, bytemuck::bytes_of(&graph_u));

        for (i, ring) in self.lines.rings.iter().enumerate() {
            let ring_u = LinesUniforms {
                view_proj: view_proj.to_cols_array_2d(),
                model: scene.rings.model_matrix(i).to_cols_array_2d(),
                color: rgba(self.ring_color, ring.opacity),
            };
            self.queue
                .write_buffer(&ring.uniform_buffer, 0, bytemuck::bytes_of(&ring_u));
        }
    }
}

fn draw_lines(rpass: &mut wgpu::RenderPass<'_>, draw: &LineDraw) {
    if draw.vertex_count == 0 {
        return;
    }
    rpass.set_bind_group(0, &draw.bind_group, &[]);
    rpass.set_vertex_buffer(0, draw.vertex_buffer.slice(..));
    rpass.draw(0..draw.vertex_count, 0..1);
}

#[inline]
fn rgba(rgb: [f32; 3], alpha: f32) -> [f32; 4] {
    [rgb[0], rgb[1], rgb[2], alpha]
}
