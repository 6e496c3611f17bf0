//! Game state and core simulation types
//!
//! All state owned by a single match lives here. Behaviour is split across
//! the sibling modules (`roster`, `lifecycle`, `tick`) as `impl` blocks.

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::Result;

/// Which half of the field a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Which way the paddle's front face points along x
    pub fn facing(self) -> f64 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Opaque token a transport associates with a connection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A palette entry, e.g. `#FF0000`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A seated player and their paddle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub color: Color,
    pub side: Side,
    /// 1-based slot counted outward from the centre line
    pub position: u32,
    /// Paddle anchor x, recomputed on every roster change
    pub x: f64,
    /// Paddle top edge, in [0, 1 - paddle_width]
    pub y: f64,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        color: Color,
        side: Side,
        position: u32,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            color,
            side,
            position,
            x: 0.0,
            y: 0.0,
        }
    }
}

/// What the join caller gets back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerHandle {
    pub id: PlayerId,
    pub name: String,
    pub color: Color,
    pub side: Side,
    pub position: u32,
}

impl From<&Player> for PlayerHandle {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id,
            name: player.name.clone(),
            color: player.color.clone(),
            side: player.side,
            position: player.position,
        }
    }
}

/// The ball
///
/// `direction` is counterclockwise from +x in the visual convention, so a
/// positive angle moves the ball up the screen (y decreases).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: DVec2,
    /// Travel per tick, 0 when not in flight
    pub speed: f64,
    /// Radians, kept in (-π, π]
    pub direction: f64,
}

impl Ball {
    pub const CENTER: DVec2 = DVec2::new(0.5, 0.5);

    pub fn parked() -> Self {
        Self {
            pos: Self::CENTER,
            speed: 0.0,
            direction: 0.0,
        }
    }

    /// Per-tick displacement in field coordinates
    pub fn velocity(&self) -> DVec2 {
        DVec2::new(
            self.speed * self.direction.cos(),
            -self.speed * self.direction.sin(),
        )
    }

    /// True while heading toward the left goal
    pub fn heading_left(&self) -> bool {
        self.direction > FRAC_PI_2 || self.direction < -FRAC_PI_2
    }

    /// True while heading toward the right goal
    pub fn heading_right(&self) -> bool {
        self.direction < FRAC_PI_2 && self.direction > -FRAC_PI_2
    }
}

/// Goals per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn credit(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }
}

/// Match lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Fewer than two players, ball parked at centre
    Idle,
    /// Match started, waiting out the launch delay
    Armed,
    /// Ball in flight
    Playing,
}

/// Things that happened during the last tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Launched { direction: f64 },
    WallBounce,
    Goal { scorer: Side },
    PaddleHit { player: PlayerId, offset: f64 },
}

/// Source of uniform randomness for colour picks and launch angles
pub trait RandomSource {
    /// Uniform sample in [0, 1)
    fn next_unit(&mut self) -> f64;

    /// Uniform index in `0..len`; `len` must be non-zero
    fn pick_index(&mut self, len: usize) -> usize {
        let index = (self.next_unit() * len as f64).floor() as usize;
        index.min(len - 1)
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A single match: roster, ball, score and lifecycle
#[derive(Debug, Clone)]
pub struct Game<R = Pcg32> {
    pub(crate) config: Config,
    pub(crate) rng: R,
    /// True from arming until an explicit stop
    pub(crate) started: bool,
    /// Ticks left before the ball launches
    pub(crate) pending_launch: Option<u32>,
    pub(crate) left: Vec<Player>,
    pub(crate) right: Vec<Player>,
    pub(crate) score: Score,
    pub(crate) ball: Ball,
    /// Colours not held by any seated player
    pub(crate) color_pool: Vec<Color>,
    pub(crate) events: Vec<GameEvent>,
    /// Simulation tick counter
    pub(crate) time_ticks: u64,
    next_id: u32,
}

impl Game<Pcg32> {
    /// Create an idle match with a seeded RNG
    pub fn new(config: Config, seed: u64) -> Result<Self> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }
}

impl<R: RandomSource> Game<R> {
    /// Create an idle match drawing randomness from `rng`
    pub fn with_rng(config: Config, rng: R) -> Result<Self> {
        config.validate()?;
        let color_pool = config.palette.clone();
        Ok(Self {
            config,
            rng,
            started: false,
            pending_launch: None,
            left: Vec::new(),
            right: Vec::new(),
            score: Score::default(),
            ball: Ball::parked(),
            color_pool,
            events: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        })
    }

    /// Allocate a new player ID
    pub(crate) fn next_player_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn phase(&self) -> GamePhase {
        match (self.started, self.pending_launch) {
            (false, _) => GamePhase::Idle,
            (true, Some(_)) => GamePhase::Armed,
            (true, None) => GamePhase::Playing,
        }
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Events produced by the most recent tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn time_ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Roster for one side, ordered by slot
    pub fn players(&self, side: Side) -> &[Player] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub(crate) fn roster_mut(&mut self, side: Side) -> &mut Vec<Player> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.left.iter().chain(self.right.iter()).find(|p| p.id == id)
    }

    /// Seated players across both sides
    pub fn player_count(&self) -> usize {
        self.left.len() + self.right.len()
    }

    /// Colours not currently held by a player
    pub fn available_colors(&self) -> &[Color] {
        &self.color_pool
    }
}


#[cfg(test)]
mod tests {
    use super::testing::Scripted;
    use super::*;

    #[test]
    fn test_new_game_is_idle() {
        let game = Game::new(Config::default(), 7).unwrap();
        assert_eq!(game.phase(), GamePhase::Idle);
        assert_eq!(game.ball().pos, Ball::CENTER);
        assert_eq!(game.ball().speed, 0.0);
        assert_eq!(game.available_colors().len(), 6);
        assert_eq!(game.player_count(), 0);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config {
            palette: Vec::new(),
            ..Default::default()
        };
        assert!(Game::new(config, 1).is_err());
    }

    #[test]
    fn test_pick_index_bounds() {
        let mut rng = Scripted::new(&[0.0, 0.5, 0.999_999]);
        assert_eq!(rng.pick_index(4), 0);
        assert_eq!(rng.pick_index(4), 2);
        assert_eq!(rng.pick_index(4), 3);
    }

    #[test]
    fn test_ball_heading() {
        let mut ball = Ball::parked();
        ball.direction = 0.3;
        assert!(ball.heading_right() && !ball.heading_left());
        ball.direction = std::f64::consts::PI;
        assert!(ball.heading_left() && !ball.heading_right());
        ball.direction = FRAC_PI_2;
        assert!(!ball.heading_left() && !ball.heading_right());
    }

    #[test]
    fn test_velocity_points_up_for_positive_angle() {
        let ball = Ball {
            pos: Ball::CENTER,
            speed: 1.0,
            direction: FRAC_PI_2,
        };
        assert!(ball.velocity().y < 0.0);
    }

    #[test]
    fn test_pcg_samples_in_unit_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..100 {
            let u = rng.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }
}
