//! Data-driven game balance
//!
//! Speeds and start positions are configuration, not code. Two layouts ship
//! as presets; a JSON file can override any field.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Built-in tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 45 degree launch
    #[default]
    Classic,
    /// Steeper launch, faster vertical travel
    Steep,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Classic => "classic",
            Variant::Steep => "steep",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" | "a" => Some(Variant::Classic),
            "steep" | "b" => Some(Variant::Steep),
            _ => None,
        }
    }
}

/// Why a tuning could not be used
#[derive(Debug)]
pub enum TuningError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NonFinite { field: &'static str },
    NonPositiveStep { step: f32 },
    PaddleOutOfBounds { y: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "could not read tuning file: {e}"),
            Self::Parse(e) => write!(f, "invalid tuning JSON: {e}"),
            Self::NonFinite { field } => write!(f, "tuning field `{field}` is not finite"),
            Self::NonPositiveStep { step } => {
                write!(f, "paddle step must be positive, got {step}")
            }
            Self::PaddleOutOfBounds { y } => write!(
                f,
                "paddle start y {y} is outside [{PADDLE_MIN_Y}, {PADDLE_MAX_Y}]"
            ),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TuningError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e)
    }
}

/// Gameplay constants that vary between builds of the layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Paddle travel per tick while a key is held
    pub paddle_step: f32,
    /// Initial ball velocity (per tick)
    pub ball_velocity: Vec2,
    /// Initial ball position
    pub ball_start: Vec2,
    /// Initial paddle position (bottom-left corner)
    pub paddle_start: Vec2,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::preset(Variant::Classic)
    }
}

impl Tuning {
    /// Tuning for a built-in variant
    pub fn preset(variant: Variant) -> Self {
        let ball_velocity = match variant {
            Variant::Classic => BALL_START_VELOCITY,
            Variant::Steep => BALL_STEEP_VELOCITY,
        };
        Self {
            paddle_step: PADDLE_STEP,
            ball_velocity,
            ball_start: BALL_START,
            paddle_start: PADDLE_START,
        }
    }

    /// Parse a tuning from JSON; missing fields take the classic defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let fields: [(&'static str, bool); 4] = [
            ("paddle_step", self.paddle_step.is_finite()),
            ("ball_velocity", self.ball_velocity.is_finite()),
            ("ball_start", self.ball_start.is_finite()),
            ("paddle_start", self.paddle_start.is_finite()),
        ];
        for (field, ok) in fields {
            if !ok {
                return Err(TuningError::NonFinite { field });
            }
        }
        if self.paddle_step <= 0.0 {
            return Err(TuningError::NonPositiveStep {
                step: self.paddle_step,
            });
        }
        let y = self.paddle_start.y;
        if !(PADDLE_MIN_Y..=PADDLE_MAX_Y).contains(&y) {
            return Err(TuningError::PaddleOutOfBounds { y });
        }
        Ok(())
    }
}
