//! Game state and core simulation types
//!
//! Everything the renderer needs to draw a frame is readable from here; only
//! the tick mutates it.

use glam::Vec2;

use crate::consts::*;
use crate::tuning::Tuning;

/// Axis of the playfield
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Component of `v` along this axis
    #[inline]
    pub fn of(self, v: Vec2) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
        }
    }

    /// Overwrite the component of `v` along this axis
    #[inline]
    pub fn set(self, v: &mut Vec2, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
        }
    }
}

/// Which end of an axis range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Min,
    Max,
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball crossed a playfield bound and had that axis reflected
    WallBounce { axis: Axis, side: Side },
    /// Ball touched the paddle and reversed
    PaddleHit,
    /// Block at this index was destroyed
    BlockDestroyed { index: usize },
    /// The last active block was destroyed this tick
    FieldCleared,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            radius: BALL_RADIUS,
        }
    }

    /// Centre used for collision tests.
    ///
    /// Offset by the radius the same way box centres are offset by their
    /// half-extents, so the two cancel against 1x1 boxes.
    #[inline]
    pub fn collision_center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }

    /// Reverse both velocity components
    #[inline]
    pub fn reverse(&mut self) {
        self.vel = -self.vel;
    }

    /// Advance one step along the current velocity
    #[inline]
    pub fn step(&mut self) {
        self.pos += self.vel;
    }
}

/// The player's paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub pos: Vec2,
    /// Distance travelled per tick while a key is held
    pub step: f32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            pos: PADDLE_START,
            step: PADDLE_STEP,
        }
    }
}

impl Paddle {
    /// Paddle that honours the travel bounds whatever it is given.
    ///
    /// The step is taken as a magnitude and a start outside the bounds is
    /// pulled back onto the nearest one; a non-finite start uses the default.
    pub fn new(pos: Vec2, step: f32) -> Self {
        let y = if pos.y.is_finite() {
            pos.y.clamp(PADDLE_MIN_Y, PADDLE_MAX_Y)
        } else {
            PADDLE_START.y
        };
        Self {
            pos: Vec2::new(pos.x, y),
            step: step.abs(),
        }
    }

    /// Bottom-left corner of the paddle box
    #[inline]
    pub fn box_min(&self) -> Vec2 {
        self.pos
    }

    /// Move up one step if the destination stays within bounds
    pub fn move_up(&mut self) {
        let target = self.pos.y + self.step;
        if target <= PADDLE_MAX_Y {
            self.pos.y = target;
        }
    }

    /// Move down one step if the destination stays within bounds
    pub fn move_down(&mut self) {
        let target = self.pos.y - self.step;
        if target >= PADDLE_MIN_Y {
            self.pos.y = target;
        }
    }
}

/// A 1x1 target block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    pub pos: Vec2,
    pub active: bool,
}

impl Block {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            active: true,
        }
    }

    /// Bottom-left corner of the block box
    #[inline]
    pub fn box_min(&self) -> Vec2 {
        self.pos
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Player paddle
    pub paddle: Paddle,
    /// The ball
    pub ball: Ball,
    /// Target blocks in fixed index order
    pub(crate) blocks: [Block; BLOCK_COUNT],
    /// Blocks destroyed so far
    pub(crate) score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Events recorded during the most recent tick
    pub events: Vec<GameEvent>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Create a game with the given tuning.
    ///
    /// Loaded tunings are already validated; hand-built ones still get a
    /// paddle that stays within its travel bounds.
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            paddle: Paddle::new(tuning.paddle_start, tuning.paddle_step),
            ball: Ball::new(tuning.ball_start, tuning.ball_velocity),
            blocks: initial_blocks(),
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Create a game with the default tuning
    pub fn new_game() -> Self {
        Self::new(&Tuning::default())
    }

    /// Advance one tick with the given held keys
    pub fn update(&mut self, move_up: bool, move_down: bool) {
        super::tick(self, &super::TickInput { move_up, move_down });
    }

    pub fn paddle_pos(&self) -> Vec2 {
        self.paddle.pos
    }

    pub fn ball_pos(&self) -> Vec2 {
        self.ball.pos
    }

    /// All blocks, including destroyed ones, in index order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Number of blocks still standing
    pub fn active_blocks(&self) -> usize {
        self.blocks.iter().filter(|b| b.active).count()
    }

    /// True once every block has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.active_blocks() == 0
    }

    /// Deactivate a standing block and credit it.
    ///
    /// Returns false without touching the score if the block was already down.
    pub(crate) fn destroy_block(&mut self, index: usize) -> bool {
        let block = &mut self.blocks[index];
        if !block.active {
            return false;
        }
        block.active = false;
        self.score += 1;
        true
    }
}

/// Fixed target layout: two columns of five, right-most column first
pub fn initial_blocks() -> [Block; BLOCK_COUNT] {
    let mut blocks = [Block::new(0.0, 0.0); BLOCK_COUNT];
    for (col, &x) in BLOCK_COLUMNS.iter().enumerate() {
        for (row, &y) in BLOCK_ROWS.iter().enumerate() {
            blocks[col * BLOCK_ROWS.len() + row] = Block::new(x, y);
        }
    }
    blocks
}
