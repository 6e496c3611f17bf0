//! Ball vs paddle collision detection
//!
//! A paddle only catches the ball on its front face, and only when the ball
//! would cross that face during the current tick.

use super::state::{Ball, Player, Side};
use crate::config::Config;

/// Check whether the ball strikes a paddle this tick
///
/// Returns the ball's vertical offset from the paddle centre on a hit
/// (positive when the ball is below centre), or `None` on a miss.
pub fn paddle_collision(ball: &Ball, player: &Player, side: Side, config: &Config) -> Option<f64> {
    let paddle_top = player.y;
    let paddle_bottom = player.y + config.paddle_width;
    let overlaps = ball.pos.y + config.ball_radius > paddle_top
        && ball.pos.y - config.ball_radius < paddle_bottom;
    if !overlaps {
        return None;
    }

    let facing = side.facing();
    let paddle_front = player.x + facing * config.paddle_thickness / 4.0;
    let ball_front = ball.pos.x - facing * config.ball_radius;
    let gap = facing * (paddle_front - ball_front);
    let travel = (ball.speed * ball.direction.cos()).abs();

    if gap > 0.0 && gap < travel {
        Some(ball.pos.y - (paddle_top + paddle_bottom) / 2.0)
    } else {
        None
    }
}
