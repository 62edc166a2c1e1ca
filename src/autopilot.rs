//! Autopilot - plays the game for demo and headless runs
//!
//! Produces the same held-key input a player would. With jitter enabled it
//! occasionally mashes random keys, seeded so runs are reproducible.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::sim::{GameState, TickInput};

/// Resting height the paddle drifts back to while the ball is away
const HOME_Y: f32 = 0.0;

/// Input driver that tracks the ball
#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    /// Chance per tick (0-1) of replacing the planned input with random keys
    jitter: f64,
}

impl Autopilot {
    pub fn new(seed: u64, jitter: f64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            jitter: jitter.clamp(0.0, 1.0),
        }
    }

    /// Plan the keys to hold for the next tick
    pub fn next_input(&mut self, state: &GameState) -> TickInput {
        if self.jitter > 0.0 && self.rng.random_bool(self.jitter) {
            return TickInput {
                move_up: self.rng.random(),
                move_down: self.rng.random(),
            };
        }

        let paddle = &state.paddle;
        let ball = &state.ball;

        // Ball heading for the paddle wall: track it; otherwise go home
        let target_y = if ball.vel.x < 0.0 { ball.pos.y } else { HOME_Y };

        // Dead zone of one step keeps the paddle from dithering
        let delta = target_y - paddle.pos.y;
        TickInput {
            move_up: delta > paddle.step,
            move_down: delta < -paddle.step,
        }
    }
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(0, 0.0)
    }
}
