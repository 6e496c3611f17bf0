//! Non-physical paddle deflection ("spin")
//!
//! A centre hit bounces straight. Off-centre hits bend the outgoing angle in
//! proportion to `offset / paddle_width`, so the bend never exceeds half of
//! the base angle it scales.
//!
//! Left paddles bend toward the tangent when the ball was travelling toward
//! the edge it struck. Otherwise the direction is scaled by `1 + fraction`,
//! which flattens an upward ball toward the normal but steepens a downward
//! ball hit below centre, possibly past perpendicular.
//!
//! Right paddles always add `(|dir| - π/2) * fraction`: a hit toward the
//! edge steepens toward the normal and any other hit flattens toward the
//! tangent.

use std::f64::consts::FRAC_PI_2;

use super::state::Side;
use crate::normalize_angle;

/// Bend an already-mirrored direction after a paddle hit
///
/// `offset` is the ball's distance below the paddle centre at impact,
/// `paddle_width` the paddle's vertical extent.
pub fn deflect(direction: f64, offset: f64, side: Side, paddle_width: f64) -> f64 {
    // +1 while the ball moves up the screen, -1 while it moves down
    let heading = if direction < 0.0 { -1.0 } else { 1.0 };
    let fraction = offset / paddle_width;

    let toward_edge = (heading > 0.0 && offset > 0.0) || (heading < 0.0 && offset < 0.0);
    let bent = if toward_edge {
        let to_tangent = (FRAC_PI_2 - heading * direction).abs();
        direction + to_tangent * fraction
    } else {
        match side {
            Side::Left => direction + direction * fraction,
            Side::Right => direction - (FRAC_PI_2 - direction.abs()) * fraction,
        }
    };
    normalize_angle(bent)
}
