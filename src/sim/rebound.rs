//! Rebound rule
//!
//! Pure mapping from an incoming velocity and the orientation of the
//! struck surface to the outgoing velocity. Randomized variants draw
//! from a caller-supplied seeded RNG so rounds replay identically for a
//! given seed.

use rand::Rng;
use rand_pcg::Pcg32;

use super::Velocity;

/// Which axis the rebounding surface lies along.
///
/// `Vertical` surfaces (paddle faces) flip the X component;
/// `Horizontal` surfaces (the top and bottom board edges) flip Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOrientation {
    Vertical,
    Horizontal,
}

/// Compute the velocity after a collision.
///
/// With `randomize` set, the component parallel to the surface is
/// replaced instead of preserved, varying the return angle. The draw is
/// constrained so the ball stays reachable: off a horizontal edge the X
/// component comes from {-1, 1} (a dead X would strand the ball
/// bouncing between the edges forever), off a paddle the Y component
/// comes from {-1, 0, 1}.
pub fn rebound(
    vel: Velocity,
    surface: SurfaceOrientation,
    randomize: bool,
    rng: &mut Pcg32,
) -> Velocity {
    match surface {
        SurfaceOrientation::Vertical => {
            let y = if randomize { rng.random_range(-1..=1) } else { vel.y };
            Velocity::new(-vel.x, y)
        }
        SurfaceOrientation::Horizontal => {
            let x = if randomize {
                if rng.random_bool(0.5) { 1 } else { -1 }
            } else {
                vel.x
            };
            Velocity::new(x, -vel.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(42)
    }

    #[test]
    fn test_vertical_deterministic_flips_x() {
        let out = rebound(Velocity::new(-1, 0), SurfaceOrientation::Vertical, false, &mut rng());
        assert_eq!(out, Velocity::new(1, 0));

        let out = rebound(Velocity::new(1, -1), SurfaceOrientation::Vertical, false, &mut rng());
        assert_eq!(out, Velocity::new(-1, -1));
    }

    #[test]
    fn test_horizontal_deterministic_flips_y() {
        let out = rebound(Velocity::new(-1, 1), SurfaceOrientation::Horizontal, false, &mut rng());
        assert_eq!(out, Velocity::new(-1, -1));
    }

    #[test]
    fn test_vertical_randomized_y_stays_reachable() {
        for seed in 0..64 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let out = rebound(Velocity::new(-1, 1), SurfaceOrientation::Vertical, true, &mut rng);
            assert_eq!(out.x, 1);
            assert!((-1..=1).contains(&out.y), "y out of range: {}", out.y);
        }
    }

    #[test]
    fn test_horizontal_randomized_x_never_zero() {
        for seed in 0..64 {
            let mut rng = Pcg32::seed_from_u64(seed);
            let out = rebound(Velocity::new(-1, 1), SurfaceOrientation::Horizontal, true, &mut rng);
            assert_eq!(out.y, -1);
            assert!(out.x == -1 || out.x == 1, "x must stay live: {}", out.x);
        }
    }

    #[test]
    fn test_same_seed_same_draw() {
        let a = rebound(Velocity::new(1, 0), SurfaceOrientation::Vertical, true, &mut rng());
        let b = rebound(Velocity::new(1, 0), SurfaceOrientation::Vertical, true, &mut rng());
        assert_eq!(a, b);
    }
}
