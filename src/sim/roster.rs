//! Player roster management
//!
//! Players are seated on whichever side is shorter (left on ties), take the
//! next slot on that side and get a random unused colour. Slot 1 sits nearest
//! the centre line; higher slots stack toward the goal.

use super::state::{Game, Player, PlayerHandle, PlayerId, RandomSource, Side};
use crate::error::{EngineError, Result};

/// Fraction of the field width, measured from each goal line, that holds paddles
const PADDLE_ZONE: f64 = 0.25;

/// Paddle anchor x for a slot on a side holding `count` players
pub fn paddle_x(side: Side, position: u32, count: usize) -> f64 {
    let count = count as f64;
    let offset = PADDLE_ZONE * (count - position as f64 + 1.0) / (count + 1.0);
    match side {
        Side::Left => offset,
        Side::Right => 1.0 - offset,
    }
}

impl<R: RandomSource> Game<R> {
    /// Seat a new player, auto-starting the match once two are present
    pub fn join(&mut self, name: impl Into<String>) -> Result<PlayerHandle> {
        let name = name.into();
        if self.color_pool.is_empty() {
            log::warn!("Rejecting {}: palette exhausted", name);
            return Err(EngineError::PaletteExhausted);
        }
        let index = self.rng.pick_index(self.color_pool.len());
        let color = self.color_pool.remove(index);

        let side = if self.left.len() > self.right.len() {
            Side::Right
        } else {
            Side::Left
        };
        let id = self.next_player_id();
        let roster = self.roster_mut(side);
        let position = roster.len() as u32 + 1;
        let player = Player::new(id, name, color, side, position);
        let handle = PlayerHandle::from(&player);
        roster.push(player);
        self.shift_players();

        log::info!(
            "{} joined as {} {} slot {} ({} seated)",
            handle.name,
            handle.id,
            side,
            position,
            self.player_count()
        );

        if !self.started && self.player_count() >= 2 {
            self.start();
        }
        Ok(handle)
    }

    /// Remove a player, close the gap in their side and free their colour
    pub fn leave(&mut self, id: PlayerId) -> Result<()> {
        let Some((side, index)) = self.locate(id) else {
            log::warn!("Leave for unknown player {}", id);
            return Err(EngineError::UnknownPlayer(id));
        };
        let roster = self.roster_mut(side);
        let player = roster.remove(index);
        for (i, remaining) in roster.iter_mut().enumerate() {
            remaining.position = i as u32 + 1;
        }
        self.color_pool.push(player.color);
        self.shift_players();

        log::info!(
            "{} left {} ({} seated)",
            player.name,
            side,
            self.player_count()
        );

        if self.started && self.player_count() < 2 {
            self.stop();
        }
        Ok(())
    }

    /// Side and roster index of a seated player
    fn locate(&self, id: PlayerId) -> Option<(Side, usize)> {
        [Side::Left, Side::Right].into_iter().find_map(|side| {
            self.players(side)
                .iter()
                .position(|p| p.id == id)
                .map(|index| (side, index))
        })
    }

    /// Recompute every paddle's x from its slot and its side's size
    pub(crate) fn shift_players(&mut self) {
        for side in [Side::Left, Side::Right] {
            let roster = self.roster_mut(side);
            let count = roster.len();
            for player in roster.iter_mut() {
                player.x = paddle_x(side, player.position, count);
            }
        }
    }
}
