use hero_core::{BlobUniforms, Mesh, MeshVertex};
use wgpu::util::DeviceExt;

use crate::helpers;

pub(crate) struct BlobResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
}

pub(crate) fn create_blob_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
    mesh: &Mesh,
) -> BlobResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("blob_shader"),
        source: wgpu::ShaderSource::Wgsl(hero_core::BLOB_WGSL.into()),
    });
    let bgl = helpers::uniform_layout(device, "blob_bgl");
    let (uniform_buffer, bind_group) = helpers::uniform_binding(
        device,
        &bgl,
        "blob_uniforms",
        std::mem::size_of::<BlobUniforms>() as u64,
    );
    let layout = helpers::pipeline_layout(device, "blob_pl", &bgl);
    let buffers = [wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MeshVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0,
            },
            wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 12,
                shader_location: 1,
            },
        ],
    }];
    let pipeline = helpers::make_pipeline(
        device,
        helpers::PipelineSpec {
            label: "blob_pipeline",
            layout: &layout,
            shader: &shader,
            buffers: &buffers,
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            depth_write: true,
            color_format,
        },
    );

    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("blob_vb"),
        contents: bytemuck::cast_slice(&mesh.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("blob_ib"),
        contents: bytemuck::cast_slice(&mesh.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    BlobResources {
        pipeline,
        uniform_buffer,
        bind_group,
        vertex_buffer,
        index_buffer,
        index_count: mesh.indices.len() as u32,
    }
}
