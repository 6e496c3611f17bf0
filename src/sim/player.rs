//! Paddle movement
//!
//! Paddles only move vertically, one fixed step per input, and stop silently
//! at the field edges.

use serde::{Deserialize, Serialize};

use super::state::{Game, Player, PlayerId, RandomSource};
use crate::config::Config;
use crate::error::{EngineError, Result};
use crate::quantize;

/// Movement input from a client: `y` is -1 (up), 0 or 1 (down)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInput {
    pub y: i8,
}

impl MoveInput {
    pub const UP: Self = Self { y: -1 };
    pub const DOWN: Self = Self { y: 1 };
    pub const STILL: Self = Self { y: 0 };
}

impl Player {
    /// Step the paddle up or down unless it already sits at that edge
    pub fn apply_move(&mut self, input: MoveInput, config: &Config) {
        let can_move = match input.y {
            -1 => self.y >= config.move_distance,
            1 => self.y <= 1.0 - config.move_distance - config.paddle_width,
            _ => false,
        };
        if !can_move {
            return;
        }
        self.y += config.move_distance * input.y as f64;
        if let Some(digits) = config.paddle_precision {
            self.y = quantize(self.y, digits);
        }
    }
}

impl<R: RandomSource> Game<R> {
    /// Apply a movement input to a seated player's paddle
    pub fn move_player(&mut self, id: PlayerId, input: MoveInput) -> Result<()> {
        let Self {
            config, left, right, ..
        } = self;
        match left.iter_mut().chain(right.iter_mut()).find(|p| p.id == id) {
            Some(player) => {
                player.apply_move(input, config);
                Ok(())
            }
            None => {
                log::warn!("Move for unknown player {}", id);
                Err(EngineError::UnknownPlayer(id))
            }
        }
    }
}
