//! Renderer-facing geometry
//!
//! The simulation knows nothing about drawing. This module turns a
//! `GameState` into a [`Frame`]: a triangle list, its wgpu buffer layout, the
//! camera matrix and the clear colour, ready for a backend to upload as-is.

pub mod shapes;
pub mod vertex;

use glam::{Mat4, Vec3};

pub use vertex::{Vertex, colors};

use crate::consts::*;
use crate::sim::GameState;

/// Camera distance from the play plane
const CAMERA_DISTANCE: f32 = 3.0;
const FOV_Y_DEGREES: f32 = 90.0;
const Z_NEAR: f32 = 0.1;
const Z_FAR: f32 = 100.0;

/// Combined projection * view for the playfield camera
pub fn view_projection(aspect: f32) -> Mat4 {
    let projection = Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect, Z_NEAR, Z_FAR);
    let view = Mat4::from_translation(Vec3::new(0.0, 0.0, -CAMERA_DISTANCE));
    projection * view
}

/// Aspect ratio of the default window
pub fn default_aspect() -> f32 {
    WINDOW_WIDTH as f32 / WINDOW_HEIGHT as f32
}

/// Build the frame's geometry: paddle, ball, then standing blocks.
///
/// Meshes are centred on each entity's position.
pub fn scene_vertices(state: &GameState) -> Vec<Vertex> {
    let mut vertices = shapes::two_tone_quad(
        state.paddle_pos(),
        PADDLE_HALF_EXTENTS,
        colors::PADDLE_FRONT,
        colors::PADDLE_BACK,
    );

    vertices.extend(shapes::circle(
        state.ball_pos(),
        state.ball.radius,
        colors::BALL,
        shapes::BALL_SEGMENTS,
    ));

    for block in state.blocks().iter().filter(|b| b.active) {
        vertices.extend(shapes::quad(block.pos, BLOCK_HALF_EXTENTS, colors::BLOCK));
    }

    vertices
}

/// Everything a backend needs to draw one tick
#[derive(Debug, Clone)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub view_projection: Mat4,
    pub clear_color: wgpu::Color,
}

impl Frame {
    /// Capture the current state for a surface with the given aspect ratio
    pub fn capture(state: &GameState, aspect: f32) -> Self {
        let [r, g, b, a] = colors::BACKGROUND.map(f64::from);
        Self {
            vertices: scene_vertices(state),
            view_projection: view_projection(aspect),
            clear_color: wgpu::Color { r, g, b, a },
        }
    }

    /// Layout of the buffer holding [`Frame::vertex_bytes`]
    pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
        Vertex::layout()
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Column-major camera matrix for a uniform buffer
    pub fn camera_uniform(&self) -> [[f32; 4]; 4] {
        self.view_projection.to_cols_array_2d()
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }
}

/// Score line shown in the corner of the screen
pub fn hud_text(score: u64) -> String {
    format!("Score: {}", score)
}
