//! Game configuration
//!
//! Defaults mirror [`crate::consts`]; a host can load overrides from
//! JSON. Validation happens before a round is built so a bad paddle
//! geometry or an off-board placement is rejected up front instead of
//! misclassifying hits mid-round.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts;
use crate::sim::{
    Ball, Board, GameState, HitRegions, Paddle, PaddleConfigError, Position, Velocity,
};

/// Everything needed to set up a round, plus the pacing curve the host
/// drives its tick timer with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub board_width: i32,
    pub board_height: i32,
    pub paddle_size: i32,
    pub paddle_anchor: i32,
    pub hit_regions: HitRegions,
    pub ball_start: Position,
    pub ball_start_velocity: Velocity,
    pub left_paddle_start: Position,
    pub right_paddle_start: Position,
    /// Milliseconds between ticks at the start of a round.
    pub initial_tick_ms: u32,
    /// Hard floor for the tick interval.
    pub min_tick_ms: u32,
    /// How much the interval shrinks per confirmed paddle hit.
    pub tick_reduction_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        let (top, middle, bottom) = consts::HIT_REGIONS;
        Self {
            board_width: consts::BOARD_WIDTH,
            board_height: consts::BOARD_HEIGHT,
            paddle_size: consts::PADDLE_SIZE,
            paddle_anchor: consts::PADDLE_ANCHOR,
            hit_regions: HitRegions::new(top, middle, bottom),
            ball_start: Position::from(consts::BALL_START),
            ball_start_velocity: Velocity::from(consts::BALL_START_VELOCITY),
            left_paddle_start: Position::from(consts::LEFT_PADDLE_START),
            right_paddle_start: Position::from(consts::RIGHT_PADDLE_START),
            initial_tick_ms: consts::INITIAL_TICK_MS,
            min_tick_ms: consts::MIN_TICK_MS,
            tick_reduction_ms: consts::TICK_REDUCTION_MS,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON document. Missing fields fall back to
    /// the defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check everything that would otherwise surface as undefined
    /// collision behavior mid-round.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.board_width < 2 || self.board_height < 1 {
            return Err(SettingsError::BoardTooSmall {
                width: self.board_width,
                height: self.board_height,
            });
        }
        let board = Board::new(self.board_width, self.board_height);
        if board.is_win_state(self.ball_start) || board.is_boundary_collision(self.ball_start) {
            return Err(SettingsError::BallOffBoard { pos: self.ball_start });
        }
        for pos in [self.left_paddle_start, self.right_paddle_start] {
            if pos.x < 0 || pos.x > self.board_width - 1 {
                return Err(SettingsError::PaddleOffBoard { pos });
            }
        }
        if self.min_tick_ms > self.initial_tick_ms {
            return Err(SettingsError::BadPacing {
                initial: self.initial_tick_ms,
                min: self.min_tick_ms,
            });
        }
        // Paddle geometry has its own construction checks.
        Paddle::new(self.paddle_size, self.paddle_anchor, self.left_paddle_start, self.hit_regions)?;
        Ok(())
    }

    /// Build a fresh round from this configuration.
    pub fn new_game(&self, seed: u64) -> Result<GameState, SettingsError> {
        self.validate()?;
        let board = Board::new(self.board_width, self.board_height);
        let ball = Ball::new(self.ball_start, self.ball_start_velocity);
        let paddles = [
            Paddle::new(self.paddle_size, self.paddle_anchor, self.left_paddle_start, self.hit_regions)?,
            Paddle::new(self.paddle_size, self.paddle_anchor, self.right_paddle_start, self.hit_regions)?,
        ];
        Ok(GameState::new(board, ball, paddles, seed))
    }

    /// Interval between ticks after `collisions` confirmed paddle hits.
    /// Shrinks linearly from the initial interval, floored at the
    /// minimum, so rallies speed the ball up.
    pub fn tick_interval_ms(&self, collisions: u32) -> u32 {
        self.initial_tick_ms
            .saturating_sub(self.tick_reduction_ms.saturating_mul(collisions))
            .max(self.min_tick_ms)
    }
}

/// Configuration rejected before a round could be built.
#[derive(Debug)]
pub enum SettingsError {
    Parse(serde_json::Error),
    BoardTooSmall { width: i32, height: i32 },
    BallOffBoard { pos: Position },
    PaddleOffBoard { pos: Position },
    BadPacing { initial: u32, min: u32 },
    Paddle(PaddleConfigError),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Parse(err) => write!(f, "settings parse error: {err}"),
            SettingsError::BoardTooSmall { width, height } => {
                write!(f, "board {width}x{height} too small to play on")
            }
            SettingsError::BallOffBoard { pos } => {
                write!(f, "ball start {pos} is off the board")
            }
            SettingsError::PaddleOffBoard { pos } => {
                write!(f, "paddle start {pos} is off the board")
            }
            SettingsError::BadPacing { initial, min } => {
                write!(f, "minimum tick interval {min}ms exceeds initial {initial}ms")
            }
            SettingsError::Paddle(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Parse(err) => Some(err),
            SettingsError::Paddle(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(err: serde_json::Error) -> Self {
        SettingsError::Parse(err)
    }
}

impl From<PaddleConfigError> for SettingsError {
    fn from(err: PaddleConfigError) -> Self {
        SettingsError::Paddle(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_default_round_matches_constants() {
        let state = Settings::default().new_game(1).unwrap();
        assert_eq!(state.board.width(), 8);
        assert_eq!(state.ball.pos, Position::new(4, 2));
        assert_eq!(state.paddles[0].pos, Position::new(0, 3));
        assert_eq!(state.paddles[1].pos, Position::new(7, 3));
    }

    #[test]
    fn test_tick_interval_shrinks_to_floor() {
        let settings = Settings::default();
        assert_eq!(settings.tick_interval_ms(0), 1000);
        assert_eq!(settings.tick_interval_ms(5), 750);
        assert_eq!(settings.tick_interval_ms(18), 100);
        assert_eq!(settings.tick_interval_ms(1000), 100);
    }

    #[test]
    fn test_json_overrides_merge_with_defaults() {
        let settings = Settings::from_json(r#"{"board_width": 16, "board_height": 16}"#).unwrap();
        assert_eq!(settings.board_width, 16);
        assert_eq!(settings.paddle_size, 3);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_json_round_trip() {
        let settings = Settings::default();
        let parsed = Settings::from_json(&settings.to_json().unwrap()).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn test_rejects_bad_anchor() {
        let settings = Settings {
            paddle_anchor: 5,
            ..Settings::default()
        };
        assert!(matches!(
            settings.new_game(0),
            Err(SettingsError::Paddle(PaddleConfigError::AnchorOutOfRange { .. }))
        ));
    }

    #[test]
    fn test_rejects_region_miscount() {
        let settings = Settings {
            hit_regions: HitRegions::new(2, 2, 2),
            ..Settings::default()
        };
        assert!(matches!(
            settings.new_game(0),
            Err(SettingsError::Paddle(PaddleConfigError::RegionMismatch { .. }))
        ));
    }

    #[test]
    fn test_rejects_ball_off_board() {
        let settings = Settings {
            ball_start: Position::new(9, 2),
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::BallOffBoard { .. })
        ));
    }

    #[test]
    fn test_rejects_inverted_pacing() {
        let settings = Settings {
            initial_tick_ms: 50,
            ..Settings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(SettingsError::BadPacing { .. })
        ));
    }
}
