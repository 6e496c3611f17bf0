//! Read-only projection of a match for the transport layer

use serde::{Deserialize, Serialize};

use super::state::{Color, Game, Player, RandomSource, Score, Side};

/// One paddle as seen by clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub name: String,
    pub color: Color,
    pub position: u32,
    pub x: f64,
    pub y: f64,
}

impl From<&Player> for PlayerView {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            color: player.color.clone(),
            position: player.position,
            x: player.x,
            y: player.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rosters {
    pub left: Vec<PlayerView>,
    pub right: Vec<PlayerView>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub x: f64,
    pub y: f64,
}

/// Everything a client needs to draw a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub players: Rosters,
    pub ball: BallView,
    pub score: Score,
}

impl Snapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<R: RandomSource> Game<R> {
    /// Copy out the current state for broadcasting
    pub fn snapshot(&self) -> Snapshot {
        let views = |side: Side| -> Vec<PlayerView> {
            self.players(side).iter().map(PlayerView::from).collect()
        };
        Snapshot {
            players: Rosters {
                left: views(Side::Left),
                right: views(Side::Right),
            },
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
            },
            score: self.score,
        }
    }
}
