//! Match lifecycle: Idle -> Armed -> Playing, back to Armed after each goal
//!
//! Arming schedules a one-shot launch that the match itself counts down in
//! ticks. Stopping cancels it, and the launch re-checks `started` when it
//! fires.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use super::state::{Ball, Game, GameEvent, RandomSource};
use crate::normalize_angle;

impl<R: RandomSource> Game<R> {
    /// Arm the match and schedule the ball launch
    pub fn start(&mut self) {
        self.started = true;
        self.pending_launch = Some(self.config.launch_delay_ticks());
        log::info!(
            "Match armed, launching in {} ticks",
            self.config.launch_delay_ticks()
        );
    }

    /// Disarm the match and park the ball at centre
    pub fn stop(&mut self) {
        self.started = false;
        self.pending_launch = None;
        self.ball.speed = 0.0;
        self.ball.pos = Ball::CENTER;
        log::info!("Match stopped");
    }

    /// Park the ball and re-arm the launch
    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    /// Advance the match by one fixed time slice; no-op unless started
    pub fn tick(&mut self) {
        self.events.clear();
        if !self.started {
            return;
        }
        self.time_ticks += 1;

        if let Some(remaining) = self.pending_launch {
            if remaining <= 1 {
                self.pending_launch = None;
                self.launch();
            } else {
                self.pending_launch = Some(remaining - 1);
            }
        }

        self.update_ball_position();
    }

    /// Put the ball in flight at a random angle within 45° of either goal
    fn launch(&mut self) {
        if !self.started {
            return;
        }
        let mut direction = self.rng.next_unit() * FRAC_PI_2 - FRAC_PI_4;
        if self.rng.next_unit() < 0.5 {
            direction += PI;
        }
        self.ball.speed = self.config.ball_speed;
        self.ball.direction = normalize_angle(direction);
        log::debug!("Ball launched at {:.3} rad", self.ball.direction);
        self.events.push(GameEvent::Launched {
            direction: self.ball.direction,
        });
    }
}
