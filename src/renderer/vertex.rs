//! Flat-coloured vertex format shared by every mesh in the scene

use bytemuck::{Pod, Zeroable};

/// Playfield vertex: world-space xy plus RGBA
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    /// Shader locations 0 (position) and 1 (colour)
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Buffer layout for a pipeline drawing `scene_vertices` output
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Scene palette
pub mod colors {
    /// Clear colour behind the playfield
    pub const BACKGROUND: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    /// Salmon: blocks and the paddle's front half
    pub const WARM: [f32; 4] = [1.0, 0.5, 0.5, 1.0];
    /// Teal: ball and the paddle's back half
    pub const COOL: [f32; 4] = [0.0, 0.5, 0.7, 1.0];
    pub const BLOCK: [f32; 4] = WARM;
    pub const BALL: [f32; 4] = COOL;
    pub const PADDLE_FRONT: [f32; 4] = WARM;
    pub const PADDLE_BACK: [f32; 4] = COOL;
}
