//! Collision detection for the ball against boxes and playfield bounds
//!
//! Circle-vs-AABB via the closest-point clamp: clamp the centre offset to the
//! box half-extents, then compare the distance to the clamped point against
//! the radius. No contact normal or penetration is reported; callers only
//! need a yes/no to reverse the ball.

use glam::Vec2;

use super::state::{Axis, Ball, Side};
use crate::consts::*;

/// Check whether a circle overlaps an axis-aligned box.
///
/// The box is given by its minimum corner and half-extents. Touching exactly
/// at the radius does not count.
#[inline]
pub fn circle_intersects_box(
    circle_center: Vec2,
    circle_radius: f32,
    box_min: Vec2,
    half_extents: Vec2,
) -> bool {
    let box_center = box_min + half_extents;
    let difference = circle_center - box_center;
    let clamped = difference.clamp(-half_extents, half_extents);
    let closest = box_center + clamped;
    (closest - circle_center).length() < circle_radius
}

/// Ball against the paddle box
#[inline]
pub fn ball_hits_paddle(ball: &Ball, paddle_min: Vec2) -> bool {
    circle_intersects_box(
        ball.collision_center(),
        ball.radius,
        paddle_min,
        PADDLE_HALF_EXTENTS,
    )
}

/// Ball against a block box (caller skips inactive blocks)
#[inline]
pub fn ball_hits_block(ball: &Ball, block_min: Vec2) -> bool {
    circle_intersects_box(
        ball.collision_center(),
        ball.radius,
        block_min,
        BLOCK_HALF_EXTENTS,
    )
}

/// Playfield walls in the order they are checked each tick
pub const WALLS: [(Axis, Side); 4] = [
    (Axis::Y, Side::Max),
    (Axis::X, Side::Max),
    (Axis::Y, Side::Min),
    (Axis::X, Side::Min),
];

/// Bound of the playfield for one wall
#[inline]
pub fn wall_bound(axis: Axis, side: Side) -> f32 {
    match (axis, side) {
        (Axis::X, Side::Min) => WORLD_MIN_X,
        (Axis::X, Side::Max) => WORLD_MAX_X,
        (Axis::Y, Side::Min) => WORLD_MIN_Y,
        (Axis::Y, Side::Max) => WORLD_MAX_Y,
    }
}

/// Reflect one axis of the ball against one bound.
///
/// If `pos` lies strictly beyond `bound` on `side`, the velocity component is
/// negated and returned. The velocity's sign going in is not consulted.
#[inline]
pub fn reflect_against_bound(pos: f32, vel: f32, bound: f32, side: Side) -> Option<f32> {
    let beyond = match side {
        Side::Min => pos < bound,
        Side::Max => pos > bound,
    };
    beyond.then_some(-vel)
}
