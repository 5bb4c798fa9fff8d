//! Round state
//!
//! Everything one round of play needs, owned in one place so a tick is
//! a plain synchronous call: the board, the ball, both paddles, the
//! paddle-hit counter, and the seeded RNG behind randomized rebounds.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::{Ball, Board, Paddle, Position};

/// Which player a paddle (and a won round) belongs to. `Left` defends
/// the column-zero edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Complete state of one round.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the rebound RNG was created from, kept for reproducibility.
    pub seed: u64,
    pub board: Board,
    pub ball: Ball,
    /// Left paddle first, right paddle second.
    pub paddles: [Paddle; 2],
    /// Confirmed paddle hits this round. The host reads this to scale
    /// difficulty and may write it back when restarting.
    pub paddle_collisions: u32,
    pub(crate) rng: Pcg32,
    start_ball: Ball,
    start_paddle_pos: [Position; 2],
}

impl GameState {
    /// Assemble a round. Starting placements are remembered so
    /// [`GameState::reset`] can restore them.
    pub fn new(board: Board, ball: Ball, paddles: [Paddle; 2], seed: u64) -> Self {
        let start_paddle_pos = [paddles[0].pos, paddles[1].pos];
        Self {
            seed,
            board,
            ball,
            paddles,
            paddle_collisions: 0,
            rng: Pcg32::seed_from_u64(seed),
            start_ball: ball,
            start_paddle_pos,
        }
    }

    /// Put the round back to its starting placements: ball, paddles,
    /// hit counter, and RNG stream all return to their initial state,
    /// so a restarted round replays identically.
    pub fn reset(&mut self) {
        self.ball = self.start_ball;
        self.paddles[0].pos = self.start_paddle_pos[0];
        self.paddles[1].pos = self.start_paddle_pos[1];
        self.paddle_collisions = 0;
        self.rng = Pcg32::seed_from_u64(self.seed);
    }
}
