//! The ball entity
//!
//! A single pixel cell with a per-tick displacement. The ball does no
//! bounds checking of its own: the tick loop owns boundary resolution
//! and rolls the position back when a collision has to be replayed.

use serde::{Deserialize, Serialize};

use super::{Position, Velocity};

/// The ball: one pixel, one displacement per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Position,
    pub vel: Velocity,
}

impl Ball {
    pub fn new(pos: Position, vel: Velocity) -> Self {
        Self { pos, vel }
    }

    /// Step the ball one tick along its velocity.
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_adds_velocity() {
        let mut ball = Ball::new(Position::new(4, 2), Velocity::new(-1, 1));
        ball.advance();
        assert_eq!(ball.pos, Position::new(3, 3));
        ball.advance();
        assert_eq!(ball.pos, Position::new(2, 4));
    }

    #[test]
    fn test_advance_allows_out_of_bounds() {
        // The tick loop relies on being able to step past the board edge
        // and roll back afterwards.
        let mut ball = Ball::new(Position::new(0, 0), Velocity::new(-1, -1));
        ball.advance();
        assert_eq!(ball.pos, Position::new(-1, -1));
    }
}
