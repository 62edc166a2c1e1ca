//! Shape generation for 2D primitives
//!
//! Everything is emitted as a plain triangle list.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segments used for the ball outline
pub const BALL_SEGMENTS: u32 = 100;

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for an axis-aligned rectangle
pub fn quad(center: Vec2, half_extents: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    two_tone_quad(center, half_extents, color, color)
}

/// Rectangle split along its rising diagonal.
///
/// The lower-right triangle takes `color_a`, the upper-left takes `color_b`.
pub fn two_tone_quad(
    center: Vec2,
    half_extents: Vec2,
    color_a: [f32; 4],
    color_b: [f32; 4],
) -> Vec<Vertex> {
    let min = center - half_extents;
    let max = center + half_extents;

    vec![
        Vertex::new(max.x, max.y, color_a),
        Vertex::new(max.x, min.y, color_a),
        Vertex::new(min.x, min.y, color_a),
        Vertex::new(min.x, min.y, color_b),
        Vertex::new(min.x, max.y, color_b),
        Vertex::new(max.x, max.y, color_b),
    ]
}
