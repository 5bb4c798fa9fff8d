//! Deterministic game simulation
//!
//! The rules of the game live here, and nothing else does: no display,
//! no sensors, no timers. Every operation is a synchronous computation
//! over in-memory state, advanced one tick at a time by the host, and
//! the only randomness comes from a seeded RNG carried in the state,
//! so a round replays identically for a given seed.

pub mod ball;
pub mod board;
pub mod paddle;
pub mod rebound;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use board::Board;
pub use paddle::{CollisionRegion, HitRegions, Paddle, PaddleConfigError};
pub use rebound::{SurfaceOrientation, rebound};
pub use state::{GameState, Side};
pub use tick::{RoundOutcome, tick};

use glam::IVec2;

/// A pixel cell on the board, zero-based. Validity is contextual: the
/// tick loop deliberately parks the ball out of bounds while resolving
/// a bounce.
pub type Position = IVec2;

/// Per-cell displacement applied each tick. Components stay within
/// {-1, 0, 1} in play.
pub type Velocity = IVec2;
