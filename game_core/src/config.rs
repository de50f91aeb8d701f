use serde::{Deserialize, Serialize};

use crate::{Params, Side};

/// Errors produced while loading a [`Config`]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("paddle z-range is empty: min {min} > max {max}")]
    PaddleRange { min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("serve x-speed band [{min}, {max}] cannot be drawn at serve speed {speed}")]
    ServeBand { min: f32, max: f32, speed: f32 },
    #[error("win score must be at least 1")]
    WinScore,
    #[error("countdown must not be negative, got {0}")]
    Countdown(f32),
    #[error("bounce increment must not be negative, got {0}")]
    BounceIncrement(f32),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paddle_x: f32,
    pub paddle_half_x: f32,
    pub paddle_half_z: f32,
    pub paddle_min_z: f32,
    pub paddle_max_z: f32,
    pub paddle_speed: f32,
    pub ball_half_extent: f32,
    pub serve_speed: f32,
    pub serve_range: f32,
    pub serve_min_x: f32,
    pub serve_max_x: f32,
    pub bounce_increment: f32,
    pub countdown_seconds: f32,
    pub win_score: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            paddle_x: Params::PADDLE_X,
            paddle_half_x: Params::PADDLE_HALF_X,
            paddle_half_z: Params::PADDLE_HALF_Z,
            paddle_min_z: Params::PADDLE_MIN_Z,
            paddle_max_z: Params::PADDLE_MAX_Z,
            paddle_speed: Params::PADDLE_SPEED,
            ball_half_extent: Params::BALL_HALF_EXTENT,
            serve_speed: Params::SERVE_SPEED,
            serve_range: Params::SERVE_RANGE,
            serve_min_x: Params::SERVE_MIN_X,
            serve_max_x: Params::SERVE_MAX_X,
            bounce_increment: Params::BOUNCE_INCREMENT,
            countdown_seconds: Params::COUNTDOWN_SECONDS,
            win_score: Params::WIN_SCORE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document (missing fields fall back to defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(err) = config.validate() {
            log::warn!("rejected config: {err}");
            return Err(err);
        }
        Ok(config)
    }

    /// Check that every tunable describes a playable table
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.paddle_min_z > self.paddle_max_z {
            return Err(ConfigError::PaddleRange {
                min: self.paddle_min_z,
                max: self.paddle_max_z,
            });
        }

        let positive = [
            ("paddle_half_x", self.paddle_half_x),
            ("paddle_half_z", self.paddle_half_z),
            ("paddle_speed", self.paddle_speed),
            ("ball_half_extent", self.ball_half_extent),
            ("serve_speed", self.serve_speed),
            ("serve_range", self.serve_range),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive { name, value });
            }
        }

        // Rejection sampling needs a non-empty band inside both the draw range and the speed
        if self.serve_min_x < 0.0
            || self.serve_min_x > self.serve_max_x
            || self.serve_max_x >= self.serve_speed
            || self.serve_min_x >= self.serve_range
        {
            return Err(ConfigError::ServeBand {
                min: self.serve_min_x,
                max: self.serve_max_x,
                speed: self.serve_speed,
            });
        }

        if self.win_score == 0 {
            return Err(ConfigError::WinScore);
        }

        if self.countdown_seconds < 0.0 {
            return Err(ConfigError::Countdown(self.countdown_seconds));
        }

        // Paddle bounces may only ever speed the ball up
        if !(self.bounce_increment >= 0.0) {
            return Err(ConfigError::BounceIncrement(self.bounce_increment));
        }

        Ok(())
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => -self.paddle_x,
            Side::Right => self.paddle_x,
        }
    }

    /// Clamp paddle Z to the playable range
    pub fn clamp_paddle_z(&self, z: f32) -> f32 {
        z.clamp(self.paddle_min_z, self.paddle_max_z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), -1.1, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 1.1, "Right paddle X position");
    }

    #[test]
    fn test_config_clamp_paddle_z() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_z(0.0), 0.6);
        assert_eq!(config.clamp_paddle_z(100.0), 1.9);
        let valid_z = 1.25;
        assert_eq!(config.clamp_paddle_z(valid_z), valid_z);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::new().validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = Config::from_json(r#"{ "win_score": 3 }"#)
            .expect("valid config");
        assert_eq!(config.win_score, 3);
        assert_eq!(config.serve_speed, Params::SERVE_SPEED);
    }

    #[test]
    fn test_from_json_rejects_bad_syntax() {
        let err = Config::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_from_json_rejects_inverted_paddle_range() {
        let err = Config::from_json(r#"{ "paddle_min_z": 2.0, "paddle_max_z": 1.0 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::PaddleRange { .. }));
    }

    #[test]
    fn test_from_json_rejects_negative_bounce_increment() {
        let err = Config::from_json(r#"{ "bounce_increment": -0.1 }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::BounceIncrement(v) if v == -0.1));

        let config = Config {
            bounce_increment: 0.0,
            ..Config::default()
        };
        assert!(config.validate().is_ok(), "Zero keeps bounces speed-neutral");
    }

    #[test]
    fn test_validate_rejects_unreachable_serve_band() {
        let config = Config {
            serve_max_x: 2.5,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ServeBand { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_extent() {
        let config = Config {
            ball_half_extent: 0.0,
            ..Config::default()
        };
        match config.validate() {
            Err(ConfigError::NonPositive { name, .. }) => assert_eq!(name, "ball_half_extent"),
            other => panic!("Expected NonPositive, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_zero_win_score() {
        let config = Config {
            win_score: 0,
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::WinScore)));
    }
}
