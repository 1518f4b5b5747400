use hero_core::geometry::circle_line_list;
use hero_core::OrbitalRings;
use wgpu::util::DeviceExt;

use crate::helpers;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LinesUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

/// One draw call's worth of line geometry plus its own uniform block.
pub(crate) struct LineDraw {
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) vertex_count: u32,
    pub(crate) opacity: f32,
}

pub(crate) struct LinesResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    /// Proximity segments; `vertex_count` is the per-frame draw range.
    pub(crate) graph: LineDraw,
    pub(crate) rings: Vec<LineDraw>,
}

pub(crate) fn create_lines_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    segment_capacity: usize,
    rings: &OrbitalRings,
    ring_segments: usize,
    graph_opacity: f32,
) -> LinesResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lines_shader"),
        source: wgpu::ShaderSource::Wgsl(hero_core::LINES_WGSL.into()),
    });
    let bgl = helpers::uniform_layout(device, "lines_bgl");
    let layout = helpers::pipeline_layout(device, "lines_pl", &bgl);
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: (std::mem::size_of::<f32>() * 3) as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0,
        }],
    }];
    let pipeline = helpers::make_pipeline(
        device,
        helpers::PipelineSpec {
            label: "lines_pipeline",
            layout: &layout,
            shader: &shader,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::LineList,
            cull_mode: None,
            depth_write: false,
            color_format,
        },
    );

    let uniform_size = std::mem::size_of::<LinesUniforms>() as u64;

    let (graph_ub, graph_bg) =
        helpers::uniform_binding(device, &bgl, "graph_uniforms", uniform_size);
    let graph_vb = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("graph_vb"),
        size: (segment_capacity.max(1) * hero_core::FLOATS_PER_SEGMENT * std::mem::size_of::<f32>())
            as u64,
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let graph = LineDraw {
        uniform_buffer: graph_ub,
        bind_group: graph_bg,
        vertex_buffer: graph_vb,
        vertex_count: 0,
        opacity: graph_opacity,
    };

    let rings = rings
        .rings
        .iter()
        .enumerate()
        .map(|(i, ring)| {
            let label = format!("ring{i}");
            let (uniform_buffer, bind_group) =
                helpers::uniform_binding(device, &bgl, &label, uniform_size);
            let verts = circle_line_list(ring.radius, ring_segments);
            let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some(&label),
                contents: bytemuck::cast_slice(&verts),
                usage: wgpu::BufferUsages::VERTEX,
            });
            LineDraw {
                uniform_buffer,
                bind_group,
                vertex_buffer,
                vertex_count: verts.len() as u32,
                opacity: ring.opacity,
            }
        })
        .collect();

    LinesResources {
        pipeline,
        graph,
        rings,
    }
}
