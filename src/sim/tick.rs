//! Per-frame simulation tick
//!
//! One call advances the game by exactly one step; frame pacing belongs to
//! the caller.

use super::collision::{
    WALLS, ball_hits_block, ball_hits_paddle, reflect_against_bound, wall_bound,
};
use super::state::{GameEvent, GameState};

/// Held keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move paddle up (W)
    pub move_up: bool,
    /// Move paddle down (S)
    pub move_down: bool,
}

/// Advance the game state by one step
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();
    state.time_ticks += 1;

    // Paddle first so the ball sees this frame's position
    if input.move_down {
        state.paddle.move_down();
    }
    if input.move_up {
        state.paddle.move_up();
    }

    state.ball.step();
    reflect_off_walls(state);

    if ball_hits_paddle(&state.ball, state.paddle.box_min()) {
        state.ball.reverse();
        state.ball.step();
        state.events.push(GameEvent::PaddleHit);
        log::trace!("Paddle hit at {:?}", state.ball.pos);
    }

    hit_blocks(state);
}

/// Reflect the ball off each playfield wall it has crossed.
///
/// After a flip the ball takes a corrective step along the new velocity. The
/// step is a full tick long, so the ball does not land on the bound.
fn reflect_off_walls(state: &mut GameState) {
    let ball = &mut state.ball;
    for (axis, side) in WALLS {
        let bound = wall_bound(axis, side);
        if let Some(flipped) =
            reflect_against_bound(axis.of(ball.pos), axis.of(ball.vel), bound, side)
        {
            axis.set(&mut ball.vel, flipped);
            ball.step();
            state.events.push(GameEvent::WallBounce { axis, side });
            log::trace!("Wall bounce {:?}/{:?} -> vel {:?}", axis, side, ball.vel);
        }
    }
}

/// Scan blocks in index order, destroying every one the ball overlaps.
///
/// The scan does not stop at the first hit; later blocks are tested against
/// the ball's corrected position.
fn hit_blocks(state: &mut GameState) {
    let had_blocks = state.active_blocks() > 0;

    for index in 0..state.blocks.len() {
        let block = state.blocks[index];
        if !block.active || !ball_hits_block(&state.ball, block.box_min()) {
            continue;
        }
        if state.destroy_block(index) {
            state.ball.reverse();
            state.ball.step();
            state.events.push(GameEvent::BlockDestroyed { index });
            log::debug!(
                "Block {} destroyed at {:?}, score {}",
                index,
                block.pos,
                state.score
            );
        }
    }

    if had_blocks && state.is_cleared() {
        state.events.push(GameEvent::FieldCleared);
        log::info!(
            "All blocks cleared after {} ticks, score {}",
            state.time_ticks,
            state.score
        );
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Axis, Side};

    const EPS: f32 = 1e-5;

    /// Game with the ball parked somewhere nothing can reach it
    fn quiet_state(pos: Vec2, vel: Vec2) -> GameState {
        let mut state = GameState::new_game();
        state.ball.pos = pos;
        state.ball.vel = vel;
        state
    }

    #[test]
    fn test_free_flight_integrates_exactly() {
        let mut state = quiet_state(Vec2::new(-2.0, 0.0), Vec2::new(0.035, 0.035));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.ball.pos, Vec2::new(-2.0, 0.0) + Vec2::new(0.035, 0.035));
        assert_eq!(state.ball.vel, Vec2::new(0.035, 0.035));
        assert!(state.events.is_empty());
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_right_wall_scenario() {
        let mut state = quiet_state(Vec2::new(4.80, 0.0), Vec2::new(0.035, 0.0));
        // The right column overlaps this path; clear it so only the wall matters
        for i in 0..BLOCK_COUNT {
            state.destroy_block(i);
        }

        tick(&mut state, &TickInput::default());
        assert!((state.ball.pos.x - 4.835).abs() < EPS);
        assert_eq!(state.ball.vel.x, 0.035);

        tick(&mut state, &TickInput::default());
        // Crossed 4.85 at 4.870, flipped, then stepped back by one tick
        assert_eq!(state.ball.vel.x, -0.035);
        assert!((state.ball.pos.x - 4.835).abs() < EPS);
        assert_eq!(
            state.events,
            vec![GameEvent::WallBounce {
                axis: Axis::X,
                side: Side::Max
            }]
        );
    }

    #[test]
    fn test_top_wall_moves_x_during_correction() {
        let mut state = quiet_state(Vec2::new(0.0, 2.49), Vec2::new(0.035, 0.035));
        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel, Vec2::new(0.035, -0.035));
        // y back where it started, x advanced twice
        assert!((state.ball.pos.y - 2.49).abs() < EPS);
        assert!((state.ball.pos.x - 0.07).abs() < EPS);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let mut state = quiet_state(Vec2::new(-4.84, -2.49), Vec2::new(-0.035, -0.035));
        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel, Vec2::new(0.035, 0.035));
        assert_eq!(state.events.len(), 2);
        assert!(state.events.contains(&GameEvent::WallBounce {
            axis: Axis::Y,
            side: Side::Min
        }));
        assert!(state.events.contains(&GameEvent::WallBounce {
            axis: Axis::X,
            side: Side::Min
        }));
    }

    #[test]
    fn test_block_hit_scenario() {
        let mut state = quiet_state(Vec2::new(4.75, 2.4), Vec2::new(0.01, 0.01));
        tick(&mut state, &TickInput::default());

        assert!(!state.blocks()[0].active);
        assert_eq!(state.score(), 1);
        assert_eq!(state.ball.vel, Vec2::new(-0.01, -0.01));
        assert_eq!(state.events, vec![GameEvent::BlockDestroyed { index: 0 }]);
        // Corrective step undoes the integration
        assert!((state.ball.pos - Vec2::new(4.75, 2.4)).length() < EPS);
    }

    #[test]
    fn test_destroyed_block_is_not_hit_again() {
        let mut state = quiet_state(Vec2::new(4.75, 2.4), Vec2::new(0.01, 0.01));
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score(), 1);

        // Park the ball back on the dead block
        state.ball.pos = Vec2::new(4.75, 2.4);
        state.ball.vel = Vec2::new(0.01, 0.01);
        tick(&mut state, &TickInput::default());
        assert_eq!(state.score(), 1);
        assert!(!state.blocks()[0].active);
        assert_eq!(state.ball.vel, Vec2::new(0.01, 0.01));
    }

    #[test]
    fn test_scan_continues_after_first_hit() {
        // Parked in the gap where blocks 0, 1, 5 and 6 meet, touching all four
        let mut state = quiet_state(Vec2::new(4.2, 1.85), Vec2::ZERO);
        tick(&mut state, &TickInput::default());

        assert_eq!(state.score(), 4);
        assert_eq!(state.active_blocks(), 6);
        assert_eq!(
            state.events,
            vec![
                GameEvent::BlockDestroyed { index: 0 },
                GameEvent::BlockDestroyed { index: 1 },
                GameEvent::BlockDestroyed { index: 5 },
                GameEvent::BlockDestroyed { index: 6 },
            ]
        );
    }

    #[test]
    fn test_paddle_hit_reverses_ball() {
        let mut state = quiet_state(Vec2::new(-4.0, 2.2), Vec2::new(-0.035, 0.035));
        tick(&mut state, &TickInput::default());

        assert_eq!(state.ball.vel, Vec2::new(0.035, -0.035));
        assert_eq!(state.events, vec![GameEvent::PaddleHit]);
        assert!((state.ball.pos - Vec2::new(-4.0, 2.2)).length() < EPS);
    }

    #[test]
    fn test_paddle_input() {
        let mut state = GameState::new_game();
        let up = TickInput {
            move_up: true,
            ..Default::default()
        };
        let down = TickInput {
            move_down: true,
            ..Default::default()
        };

        tick(&mut state, &up);
        assert_eq!(state.paddle_pos().y, PADDLE_MAX_Y);

        tick(&mut state, &down);
        assert!((state.paddle_pos().y - (PADDLE_MAX_Y - PADDLE_STEP)).abs() < EPS);

        // Both held: down then up, back where it was
        let both = TickInput {
            move_up: true,
            move_down: true,
        };
        let before = state.paddle_pos().y;
        tick(&mut state, &both);
        assert!((state.paddle_pos().y - before).abs() < EPS);
    }

    #[test]
    fn test_field_cleared_fires_once() {
        let mut state = quiet_state(Vec2::new(4.75, 2.4), Vec2::new(0.01, 0.01));
        for i in 1..BLOCK_COUNT {
            state.destroy_block(i);
        }

        tick(&mut state, &TickInput::default());
        assert!(state.events.contains(&GameEvent::FieldCleared));
        assert_eq!(state.score(), BLOCK_COUNT as u64);

        tick(&mut state, &TickInput::default());
        assert!(!state.events.contains(&GameEvent::FieldCleared));
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new_game();
        let mut state2 = GameState::new_game();

        for i in 0..5000 {
            let input = TickInput {
                move_up: i % 7 < 3,
                move_down: i % 11 < 4,
            };
            tick(&mut state1, &input);
            tick(&mut state2, &input);
        }

        assert_eq!(state1.ball, state2.ball);
        assert_eq!(state1.paddle, state2.paddle);
        assert_eq!(state1.score(), state2.score());
        assert_eq!(state1.blocks(), state2.blocks());
    }
}
