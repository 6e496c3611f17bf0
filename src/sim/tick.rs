//! Ball motion for a single tick
//!
//! Advance, bounce off the top and bottom walls, score on the goal lines,
//! then test the paddles on whichever side the ball is heading toward.

use std::f64::consts::PI;

use super::collision::paddle_collision;
use super::deflect::deflect;
use super::state::{Game, GameEvent, RandomSource, Side};
use crate::normalize_angle;

impl<R: RandomSource> Game<R> {
    /// Move the ball one step and resolve walls, goals and paddles
    pub(crate) fn update_ball_position(&mut self) {
        self.ball.pos += self.ball.velocity();

        let radius = self.config.ball_radius;
        if self.ball.pos.y > 1.0 - radius {
            self.ball.direction = normalize_angle(-self.ball.direction);
            self.events.push(GameEvent::WallBounce);
        }
        if self.ball.pos.y < radius {
            self.ball.direction = normalize_angle(-self.ball.direction);
            self.events.push(GameEvent::WallBounce);
        }

        if self.ball.pos.x < -radius {
            self.goal(Side::Right);
        }
        if self.ball.pos.x > 1.0 + radius {
            self.goal(Side::Left);
        }

        if self.ball.pos.x < 0.5 && self.ball.heading_left() {
            self.resolve_paddles(Side::Left);
        } else if self.ball.pos.x > 0.5 && self.ball.heading_right() {
            self.resolve_paddles(Side::Right);
        }
    }

    fn goal(&mut self, scorer: Side) {
        self.score.credit(scorer);
        log::info!(
            "Goal for {}: {} - {}",
            scorer,
            self.score.left,
            self.score.right
        );
        self.events.push(GameEvent::Goal { scorer });
        self.restart();
    }

    /// Bounce the ball off every paddle on `side` it strikes this tick
    fn resolve_paddles(&mut self, side: Side) {
        let roster = match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        };
        for player in roster {
            let Some(offset) = paddle_collision(&self.ball, player, side, &self.config) else {
                continue;
            };
            let mirrored = normalize_angle(PI - self.ball.direction);
            self.ball.direction = deflect(mirrored, offset, side, self.config.paddle_width);
            log::debug!(
                "{} hit by {} at offset {:.3}, new direction {:.3}",
                side,
                player.name,
                offset,
                self.ball.direction
            );
            self.events.push(GameEvent::PaddleHit {
                player: player.id,
                offset,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::state::testing::Scripted;
    use crate::sim::state::{Ball, GamePhase};
    use glam::DVec2;
    use std::f64::consts::FRAC_PI_2;

    fn playing() -> Game<Scripted> {
        let mut game = Game::with_rng(Config::default(), Scripted::new(&[0.5, 0.9])).unwrap();
        game.started = true;
        game.ball.speed = game.config.ball_speed;
        game
    }

    #[test]
    fn test_advance_uses_screen_down_y() {
        let mut game = playing();
        game.ball.direction = FRAC_PI_2 / 3.0;
        game.update_ball_position();
        let speed = game.config.ball_speed;
        assert!((game.ball.pos.x - (0.5 + speed * (PI / 6.0).cos())).abs() < 1e-12);
        assert!((game.ball.pos.y - (0.5 - speed * (PI / 6.0).sin())).abs() < 1e-12);
    }

    #[test]
    fn test_wall_bounce_bottom() {
        let mut game = playing();
        game.ball.pos = DVec2::new(0.3, 0.979);
        game.ball.direction = -PI / 6.0;
        game.update_ball_position();
        assert!((game.ball.direction - PI / 6.0).abs() < 1e-12);
        assert!(game.events.contains(&GameEvent::WallBounce));
    }

    #[test]
    fn test_wall_bounce_top() {
        let mut game = playing();
        game.ball.pos = DVec2::new(0.3, 0.021);
        game.ball.direction = PI / 6.0;
        game.update_ball_position();
        assert!((game.ball.direction + PI / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_left_goal_scores_for_right_and_restarts() {
        let mut game = playing();
        game.ball.pos = DVec2::new(-0.018, 0.5);
        game.ball.direction = PI;
        game.update_ball_position();

        assert_eq!(game.score.right, 1);
        assert_eq!(game.score.left, 0);
        assert_eq!(game.ball.pos, Ball::CENTER);
        assert_eq!(game.ball.speed, 0.0);
        assert_eq!(game.phase(), GamePhase::Armed);
        assert!(game.events.contains(&GameEvent::Goal { scorer: Side::Right }));
    }

    #[test]
    fn test_right_goal_scores_for_left() {
        let mut game = playing();
        game.ball.pos = DVec2::new(1.018, 0.5);
        game.ball.direction = 0.0;
        game.update_ball_position();
        assert_eq!(game.score.left, 1);
        assert_eq!(game.phase(), GamePhase::Armed);
    }

    #[test]
    fn test_centre_hit_on_left_paddle_reflects_straight() {
        let mut game = playing();
        let a = game.join("a").unwrap();
        game.ball.speed = game.config.ball_speed;
        // left slot 1 of 1 at x = 0.125, front face at 0.1325
        game.left[0].y = 0.4;
        game.ball.pos = DVec2::new(0.1545, 0.5);
        game.ball.direction = PI;
        game.update_ball_position();

        assert!(game.ball.direction.abs() < 1e-12);
        assert!(game.ball.heading_right());
        assert!(matches!(
            game.events.as_slice(),
            [GameEvent::PaddleHit { player, .. }] if *player == a.id
        ));
    }

    #[test]
    fn test_paddles_ignored_when_ball_moving_away() {
        let mut game = playing();
        game.join("a").unwrap();
        game.ball.speed = game.config.ball_speed;
        game.left[0].y = 0.4;
        // same spot, but already heading right
        game.ball.pos = DVec2::new(0.1245, 0.5);
        game.ball.direction = 0.0;
        game.update_ball_position();
        assert_eq!(game.ball.direction, 0.0);
        assert!(game.events.is_empty());
    }

    #[test]
    fn test_right_paddle_edge_hit_bends() {
        let mut game = playing();
        game.join("a").unwrap();
        game.join("b").unwrap();
        game.ball.speed = game.config.ball_speed;
        game.right[0].y = 0.2;
        // right slot 1 of 1 at x = 0.875, front face at 0.8675
        game.ball.pos = DVec2::new(0.8455, 0.25);
        game.ball.direction = 0.0;
        game.update_ball_position();

        let offset = 0.25 - 0.3;
        let expected = deflect(PI, offset, Side::Right, 0.2);
        assert!((game.ball.direction - expected).abs() < 1e-12);
        assert!(game.ball.heading_left());
    }
}
