//! Match configuration
//!
//! Geometry and tuning shared by every player in a match. A `Game` takes its
//! config by value at construction and never mutates it.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{EngineError, Result};
use crate::sim::Color;

/// Field geometry and match tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Display title sent to clients
    pub title: String,

    // === Geometry (1x1 field) ===
    /// Vertical extent of a paddle
    pub paddle_width: f64,
    /// Horizontal extent of a paddle
    pub paddle_thickness: f64,
    pub ball_radius: f64,
    /// Paddle travel per move input
    pub move_distance: f64,

    // === Ball ===
    /// Ball travel per tick once launched
    pub ball_speed: f64,

    // === Timing ===
    /// Rate at which the host calls `tick`
    pub tick_hz: u32,
    /// Pause between arming a match and launching the ball
    pub launch_delay_secs: f64,

    // === Roster ===
    /// Colours handed out to players, one per seat
    pub palette: Vec<Color>,
    /// Decimal digits kept on paddle y after a move (`None` keeps full precision)
    pub paddle_precision: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: TITLE.to_string(),

            paddle_width: PADDLE_WIDTH,
            paddle_thickness: PADDLE_THICKNESS,
            ball_radius: BALL_RADIUS,
            move_distance: MOVE_DISTANCE,

            ball_speed: BALL_SPEED,

            tick_hz: TICK_HZ,
            launch_delay_secs: LAUNCH_DELAY_SECS,

            palette: PALETTE.iter().map(|c| Color::new(*c)).collect(),
            paddle_precision: Some(PADDLE_PRECISION),
        }
    }
}

impl Config {
    /// Parse a config from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        log::info!(
            "Loaded config: {} colours, launch delay {} ticks",
            config.palette.len(),
            config.launch_delay_ticks()
        );
        Ok(config)
    }

    /// Check that the geometry fits the field and the palette is usable
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("paddle_width", self.paddle_width),
            ("paddle_thickness", self.paddle_thickness),
            ("ball_radius", self.ball_radius),
            ("move_distance", self.move_distance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(EngineError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.paddle_width >= 1.0 {
            return Err(EngineError::InvalidConfig(
                "paddle_width must be smaller than the field".into(),
            ));
        }
        if self.move_distance + self.paddle_width > 1.0 {
            return Err(EngineError::InvalidConfig(
                "paddle cannot move within the field".into(),
            ));
        }
        if !(self.ball_speed.is_finite() && self.ball_speed >= 0.0) {
            return Err(EngineError::InvalidConfig(format!(
                "ball_speed must be non-negative, got {}",
                self.ball_speed
            )));
        }
        if let Some(digits) = self.paddle_precision
            && digits > MAX_PADDLE_PRECISION
        {
            return Err(EngineError::InvalidConfig(format!(
                "paddle_precision must be at most {MAX_PADDLE_PRECISION}, got {digits}"
            )));
        }
        if self.tick_hz == 0 {
            return Err(EngineError::InvalidConfig("tick_hz must be non-zero".into()));
        }
        if !(self.launch_delay_secs.is_finite() && self.launch_delay_secs >= 0.0) {
            return Err(EngineError::InvalidConfig(
                "launch_delay_secs must be non-negative".into(),
            ));
        }
        if self.palette.is_empty() {
            return Err(EngineError::InvalidConfig("palette is empty".into()));
        }
        for (i, color) in self.palette.iter().enumerate() {
            if self.palette[..i].contains(color) {
                return Err(EngineError::InvalidConfig(format!(
                    "palette lists {color} twice"
                )));
            }
        }
        Ok(())
    }

    /// Launch delay expressed in host ticks
    pub fn launch_delay_ticks(&self) -> u32 {
        (self.launch_delay_secs * self.tick_hz as f64).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_constants() {
        let config = Config::default();
        assert_eq!(config.paddle_width, 0.2);
        assert_eq!(config.palette.len(), 6);
        assert_eq!(config.launch_delay_ticks(), 120);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = Config::from_json(r#"{"tick_hz": 30, "palette": ["red", "blue"]}"#).unwrap();
        assert_eq!(config.launch_delay_ticks(), 60);
        assert_eq!(config.palette, vec![Color::new("red"), Color::new("blue")]);
        assert_eq!(config.ball_radius, BALL_RADIUS);
    }

    #[test]
    fn test_from_json_rejects_duplicate_palette() {
        let err = Config::from_json(r#"{"palette": ["red", "red"]}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, EngineError::ConfigParse(_)));
    }

    #[test]
    fn test_validate_paddle_precision() {
        let err = Config::from_json(r#"{"paddle_precision": 400}"#).unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));

        let config = Config {
            paddle_precision: Some(MAX_PADDLE_PRECISION + 1),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            paddle_precision: Some(MAX_PADDLE_PRECISION),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        let config = Config {
            paddle_precision: None,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_geometry() {
        let config = Config {
            paddle_width: 0.95,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            ball_radius: 0.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
