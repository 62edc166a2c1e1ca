//! Shape Shift - A minimal breakout-style arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball motion, collisions, blocks, score)
//! - `renderer`: CPU-side geometry handed to an external 2D renderer
//! - `tuning`: Data-driven game balance (speeds, start positions)
//! - `autopilot`: Input driver for headless and demo runs

pub mod autopilot;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use autopilot::Autopilot;
pub use tuning::{Tuning, TuningError, Variant};

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Window defaults for the external renderer
    pub const WINDOW_WIDTH: u32 = 1280;
    pub const WINDOW_HEIGHT: u32 = 720;
    pub const WINDOW_TITLE: &str = "Shape Shift";

    /// Playfield bounds (ball reflection only)
    pub const WORLD_MIN_X: f32 = -4.85;
    pub const WORLD_MAX_X: f32 = 4.85;
    pub const WORLD_MIN_Y: f32 = -2.5;
    pub const WORLD_MAX_Y: f32 = 2.5;

    /// Paddle defaults - sits on the left wall, travels vertically
    pub const PADDLE_HALF_EXTENTS: Vec2 = Vec2::new(0.5, 0.5);
    pub const PADDLE_MIN_Y: f32 = -2.5;
    pub const PADDLE_MAX_Y: f32 = 2.5;
    pub const PADDLE_START: Vec2 = Vec2::new(-4.85, 2.5);
    pub const PADDLE_STEP: f32 = 0.035;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.5;
    pub const BALL_START: Vec2 = Vec2::new(-2.0, 0.0);
    pub const BALL_START_VELOCITY: Vec2 = Vec2::new(0.035, 0.035);
    /// Steeper launch used by the second layout variant
    pub const BALL_STEEP_VELOCITY: Vec2 = Vec2::new(0.035, 0.045);

    /// Block defaults (1x1 targets)
    pub const BLOCK_HALF_EXTENTS: Vec2 = Vec2::new(0.5, 0.5);
    pub const BLOCK_COUNT: usize = 10;
    /// Column x positions, right-most column first
    pub const BLOCK_COLUMNS: [f32; 2] = [4.75, 3.65];
    /// Row y positions, top row first
    pub const BLOCK_ROWS: [f32; 5] = [2.4, 1.3, 0.2, -0.9, -2.0];
}
