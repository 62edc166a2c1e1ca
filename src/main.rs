//! Shape Shift entry point
//!
//! Runs the simulation headless under the autopilot and reports the result.
//! A windowed front end drives the same `GameState` with polled keys and
//! uploads a `renderer::Frame` each tick.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use shape_shift::consts::WINDOW_TITLE;
use shape_shift::renderer::{Frame, default_aspect, hud_text};
use shape_shift::sim::{GameEvent, GameState, tick};
use shape_shift::{Autopilot, Tuning, Variant};

#[derive(Parser, Debug)]
#[command(name = "shape-shift")]
#[command(about = "Run a headless Shape Shift game under the autopilot")]
struct Args {
    /// Number of ticks (frames) to simulate
    #[arg(short, long, default_value_t = 20_000)]
    ticks: u64,

    /// Built-in tuning preset (classic or steep)
    #[arg(short, long, default_value = "classic", value_parser = parse_variant)]
    variant: Variant,

    /// JSON tuning file; overrides the preset
    #[arg(long)]
    tuning: Option<PathBuf>,

    /// Seed for the autopilot's random key jitter
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    /// Chance per tick (0-1) that the autopilot mashes random keys
    #[arg(short, long, default_value_t = 0.0)]
    jitter: f64,

    /// Stop as soon as every block is destroyed
    #[arg(long)]
    stop_on_clear: bool,
}

fn parse_variant(s: &str) -> Result<Variant, String> {
    Variant::from_str(s).ok_or_else(|| format!("unknown variant `{s}` (expected classic or steep)"))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // Files are validated by `Tuning::load`
    let (tuning, source) = match &args.tuning {
        Some(path) => {
            let tuning = Tuning::load(path)
                .with_context(|| format!("failed to load tuning from {}", path.display()))?;
            (tuning, format!("file {}", path.display()))
        }
        None => {
            let tuning = Tuning::preset(args.variant);
            tuning.validate().context("invalid tuning preset")?;
            (tuning, format!("preset {}", args.variant.as_str()))
        }
    };

    log::info!("{} (headless) starting...", WINDOW_TITLE);
    log::info!(
        "Tuning from {}: ball velocity {:?}, paddle step {}",
        source,
        tuning.ball_velocity,
        tuning.paddle_step
    );

    let mut state = GameState::new(&tuning);
    let mut autopilot = Autopilot::new(args.seed, args.jitter);
    let mut paddle_hits = 0u64;
    let mut cleared_at = None;

    for _ in 0..args.ticks {
        let input = autopilot.next_input(&state);
        tick(&mut state, &input);

        for event in &state.events {
            match event {
                GameEvent::PaddleHit => paddle_hits += 1,
                GameEvent::FieldCleared => cleared_at = Some(state.time_ticks),
                _ => {}
            }
        }

        if args.stop_on_clear && cleared_at.is_some() {
            break;
        }
    }

    let frame = Frame::capture(&state, default_aspect());
    log::debug!(
        "Final frame: {} vertices, {} bytes",
        frame.vertex_count(),
        frame.vertex_bytes().len()
    );

    println!("Ticks run:        {}", state.time_ticks);
    println!("{}", hud_text(state.score()));
    println!("Blocks remaining: {}", state.active_blocks());
    println!("Paddle hits:      {}", paddle_hits);
    match cleared_at {
        Some(t) => println!("Field cleared at tick {}", t),
        None => println!("Field not cleared"),
    }

    Ok(())
}
