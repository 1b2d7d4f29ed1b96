use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::config::RenderMode;
use crate::hull::VertexBuffer;

#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct HullVertex {
    pub position: [f32; 3],
}

/// GPU copy of the hull geometry. Written once at setup, never updated.
pub struct HullBuffer {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl HullBuffer {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, vertices: &VertexBuffer) -> Self {
        let byte_len = std::mem::size_of_val(vertices.data()) as u64;

        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Hull Vertex Buffer"),
            // keep a valid binding even for an empty hull
            size: byte_len.max(std::mem::size_of::<HullVertex>() as u64),
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        if !vertices.is_empty() {
            queue.write_buffer(&buffer, 0, bytemuck::cast_slice(vertices.data()));
        }

        log::debug!(
            "uploaded {} hull vertices ({byte_len} bytes, {})",
            vertices.vertex_count(),
            vertices.mode()
        );

        Self {
            buffer,
            vertex_count: vertices.vertex_count(),
        }
    }

    pub fn buffer(&self) -> &wgpu::Buffer {
        &self.buffer
    }

    pub fn draw_range(&self) -> Option<Range<u32>> {
        draw_range(self.vertex_count)
    }
}

/// Vertices to draw, or `None` when there is nothing to draw.
pub fn draw_range(vertex_count: u32) -> Option<Range<u32>> {
    (vertex_count > 0).then(|| 0..vertex_count)
}

/// Primitive assembly for `mode`. Solid hulls are wound clockwise and cull
/// back faces; lines have no faces to cull.
pub fn primitive_state(mode: RenderMode) -> wgpu::PrimitiveState {
    match mode {
        RenderMode::Triangles => wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Cw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        RenderMode::Lines => wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            front_face: wgpu::FrontFace::Cw,
            cull_mode: None,
            ..Default::default()
        },
    }
}

pub fn hull_vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<HullVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[wgpu::VertexAttribute {
            offset: 0,
            shader_location: 0,
            format: wgpu::VertexFormat::Float32x3,
        }],
    }
}
