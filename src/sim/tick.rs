//! Per-tick collision resolution
//!
//! The heart of the game. Each call steps the ball one cell, resolves
//! edge and paddle collisions in a fixed order (win first, then edge
//! bounce, then paddles), and reports whether the round ended.

use super::paddle::CollisionRegion;
use super::rebound::{SurfaceOrientation, rebound};
use super::state::{GameState, Side};
use super::Position;

/// What a single tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundOutcome {
    /// The ball left the board past the left or right column.
    pub is_over: bool,
    /// Set when the round is over: the side whose paddle the ball got
    /// past loses, so the opposite side takes the round.
    pub winner: Option<Side>,
}

impl RoundOutcome {
    fn ongoing() -> Self {
        Self { is_over: false, winner: None }
    }

    fn won_by(side: Side) -> Self {
        Self { is_over: true, winner: Some(side) }
    }
}

/// Advance the game by one tick.
///
/// Must be called once per scheduler period, never re-entrantly; the
/// state is exclusively borrowed for the whole resolution.
pub fn tick(state: &mut GameState) -> RoundOutcome {
    let initial_pos = state.ball.pos;
    let initial_vel = state.ball.vel;

    state.ball.advance();
    let mut new_pos = state.ball.pos;

    // Win beats bounce: a ball leaving through a corner ends the round.
    if state.board.is_win_state(new_pos) {
        let winner = if new_pos.x < 0 { Side::Right } else { Side::Left };
        log::info!("ball out at {new_pos}, {winner:?} takes the round");
        return RoundOutcome::won_by(winner);
    }

    if state.board.is_boundary_collision(new_pos) {
        // Reflect within this tick rather than deferring the bounce:
        // roll back and re-step with the flipped velocity. The paddle
        // checks below then still see the reflected cell, which catches
        // a ball meeting a paddle's end row exactly at the edge.
        state.ball.vel = rebound(initial_vel, SurfaceOrientation::Horizontal, false, &mut state.rng);
        state.ball.pos = initial_pos;
        state.ball.advance();
        new_pos = state.ball.pos;
        log::debug!("edge bounce, ball now at {new_pos}");
    }

    // A diagonal ball can appear to step past a paddle's end row
    // between two renders. Probe the sideways cell it passes through
    // and treat a hit there as the contact point.
    if initial_vel.y != 0 {
        let lateral = Position::new(initial_pos.x + initial_vel.x, initial_pos.y);
        let lateral_hit = state
            .paddles
            .iter()
            .any(|p| p.check_collision(lateral) != CollisionRegion::None);
        if lateral_hit {
            new_pos = lateral;
        }
    }

    // Both paddles are queried independently; only one is geometrically
    // reachable in a given tick, but each confirmed hit counts.
    for idx in 0..state.paddles.len() {
        let region = state.paddles[idx].check_collision(new_pos);
        if region == CollisionRegion::None {
            continue;
        }
        // Middle is a true bounce; the outer regions vary the angle.
        let randomize = matches!(region, CollisionRegion::Top | CollisionRegion::Bottom);
        state.ball.vel = rebound(initial_vel, SurfaceOrientation::Vertical, randomize, &mut state.rng);
        state.ball.pos = initial_pos;
        // Skip the re-step when the ball started flush against the top
        // or bottom row; stepping it there would read as an edge hit on
        // the very next tick.
        if initial_pos.y > 0 && initial_pos.y < state.board.height() - 1 {
            state.ball.advance();
        }
        state.paddle_collisions += 1;
        log::debug!(
            "paddle {idx} {region:?} hit, velocity now {}, {} hits this round",
            state.ball.vel,
            state.paddle_collisions
        );
    }

    RoundOutcome::ongoing()
}
