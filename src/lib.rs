//! Multipong - authoritative simulation for many-paddle Pong
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball physics, roster, lifecycle, snapshots)
//! - `config`: Field geometry and match tuning
//! - `error`: Engine error type
//!
//! Everything is expressed in a normalized 1x1 field with the origin at the
//! top left, so the engine knows nothing about screens, sockets or clocks.

pub mod config;
pub mod error;
pub mod sim;

pub use config::Config;
pub use error::{EngineError, Result};
pub use sim::{Game, GameEvent, GamePhase, MoveInput, PlayerId, Side, Snapshot};

use std::f64::consts::{PI, TAU};

/// Default field constants, all in terms of a 1x1 field
pub mod consts {
    /// Vertical extent of a paddle
    pub const PADDLE_WIDTH: f64 = 0.2;
    /// Horizontal extent of a paddle
    pub const PADDLE_THICKNESS: f64 = 0.03;
    pub const BALL_RADIUS: f64 = 0.02;
    /// Paddle travel per move input
    pub const MOVE_DISTANCE: f64 = 0.1;

    /// Ball travel per tick once launched
    pub const BALL_SPEED: f64 = 0.005;

    /// Host tick rate the launch delay is expressed against
    pub const TICK_HZ: u32 = 60;
    /// Pause between arming a match and launching the ball
    pub const LAUNCH_DELAY_SECS: f64 = 2.0;

    /// Decimal digits kept on paddle y after each move
    pub const PADDLE_PRECISION: u32 = 2;
    /// Decimal digits an f64 can hold; finer rounding overflows the scale
    pub const MAX_PADDLE_PRECISION: u32 = 15;

    /// Default colour palette, one colour per seated player
    pub const PALETTE: [&str; 6] = [
        "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#00FFFF", "#FF00FF",
    ];

    pub const TITLE: &str = "Multipong";
}

/// Normalize an angle to (-π, π]
///
/// Values already in range are returned untouched, which keeps the
/// operation exactly idempotent.
#[inline]
pub fn normalize_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }
    if angle > PI && angle - TAU <= PI {
        return angle - TAU;
    }
    if angle <= -PI && angle + TAU > -PI {
        return angle + TAU;
    }
    let mut wrapped = PI - (PI - angle).rem_euclid(TAU);
    if wrapped <= -PI {
        wrapped += TAU;
    }
    wrapped.min(PI)
}

/// Round to a fixed number of decimal digits
#[inline]
pub fn quantize(value: f64, digits: u32) -> f64 {
    let scale = 10f64.powi(digits as i32);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_angle_wraps_once() {
        assert_eq!(normalize_angle(PI), PI);
        assert!((normalize_angle(-PI) - PI).abs() < 1e-12);
        assert!((normalize_angle(5.0 * PI / 4.0) + 3.0 * PI / 4.0).abs() < 1e-12);
        assert!((normalize_angle(-3.0 * PI / 2.0) - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_angle_large_inputs() {
        let a = normalize_angle(41.0 * PI + 0.25);
        assert!(a > -PI && a <= PI);
        assert!((a - (PI + 0.25 - TAU)).abs() < 1e-9);
    }

    #[test]
    fn test_quantize() {
        assert_eq!(quantize(0.30000000000000004, 2), 0.3);
        assert_eq!(quantize(0.125, 2), 0.13);
        assert_eq!(quantize(0.7, 0), 1.0);
    }

    proptest! {
        #[test]
        fn prop_normalize_in_range(angle in -1.0e6f64..1.0e6f64) {
            let a = normalize_angle(angle);
            prop_assert!(a > -PI && a <= PI);
        }

        #[test]
        fn prop_normalize_idempotent(angle in -1.0e6f64..1.0e6f64) {
            let once = normalize_angle(angle);
            prop_assert_eq!(normalize_angle(once), once);
        }
    }
}
