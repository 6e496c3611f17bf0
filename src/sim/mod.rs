//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed step per `tick`, no clock
//! - Injected RNG only
//! - Stable roster order (by slot)
//! - No transport or rendering dependencies

pub mod collision;
pub mod deflect;
pub mod lifecycle;
pub mod player;
pub mod roster;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use collision::paddle_collision;
pub use deflect::deflect;
pub use player::MoveInput;
pub use roster::paddle_x;
pub use snapshot::{BallView, PlayerView, Rosters, Snapshot};
pub use state::{
    Ball, Color, Game, GameEvent, GamePhase, Player, PlayerHandle, PlayerId, RandomSource, Score,
    Side,
};
