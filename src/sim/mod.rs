//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick call
//! - Stable iteration order (by block index)
//! - No rendering or platform dependencies

pub mod collision;
pub mod state;
pub mod tick;

pub use collision::{
    WALLS, ball_hits_block, ball_hits_paddle, circle_intersects_box, reflect_against_bound,
    wall_bound,
};
pub use state::{Axis, Ball, Block, GameEvent, GameState, Paddle, Side, initial_blocks};
pub use tick::{TickInput, tick};
