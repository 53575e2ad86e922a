//! Simulation configuration
//!
//! Fixed at construction time. Loaded from JSON (missing fields fall back to
//! the defaults in [`crate::consts`]) and validated before a simulation is
//! built from it.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a configuration can be rejected
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("`{field}` must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("`{field}` must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },
    #[error("`jump_velocity` must point upward (negative), got {0}")]
    JumpNotUpward(f32),
    #[error("`spawn_period_frames` must be at least 1")]
    ZeroSpawnPeriod,
    #[error("gap of {gap} with margin {margin} does not fit a field {height} high")]
    GapDoesNotFit { gap: f32, margin: f32, height: f32 },
    #[error("sprite of size {size} does not fit a field {height} high")]
    SpriteDoesNotFit { size: f32, height: f32 },
    #[error("invalid config JSON")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// All tunable constants of one simulation instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Play field width in pixels
    pub width: f32,
    /// Play field height in pixels
    pub height: f32,
    /// Added to the subject's velocity every frame
    pub gravity: f32,
    /// Velocity the subject is set to on an impulse
    pub jump_velocity: f32,
    /// Leftward obstacle movement per frame
    pub obstacle_speed: f32,
    /// Vertical size of the passable gap
    pub obstacle_gap: f32,
    pub obstacle_width: f32,
    /// Minimum distance of the gap from the field's top and bottom
    pub gap_margin: f32,
    /// Frames between spawns
    pub spawn_period_frames: u32,
    /// Edge length of the subject's square collision box
    pub sprite_size: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_width: OBSTACLE_WIDTH,
            gap_margin: GAP_MARGIN,
            spawn_period_frames: SPAWN_PERIOD_FRAMES,
            sprite_size: SPRITE_SIZE,
        }
    }
}

impl SimConfig {
    /// Parse a JSON document, then validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Half the sprite size (collision half-extent)
    #[inline]
    pub fn half_size(&self) -> f32 {
        self.sprite_size / 2.0
    }

    /// Horizontal position of the subject (fixed for the whole run)
    #[inline]
    pub fn subject_x(&self) -> f32 {
        self.width / 4.0
    }

    /// Range the top of a spawned gap is drawn from
    pub fn gap_range(&self) -> std::ops::Range<f32> {
        self.gap_margin..(self.height - self.obstacle_gap - self.gap_margin)
    }

    /// Check that every value is usable and every spawned gap is passable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("gravity", self.gravity),
            ("jump_velocity", self.jump_velocity),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_gap", self.obstacle_gap),
            ("obstacle_width", self.obstacle_width),
            ("gap_margin", self.gap_margin),
            ("sprite_size", self.sprite_size),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        let positive = [
            ("width", self.width),
            ("height", self.height),
            ("obstacle_speed", self.obstacle_speed),
            ("obstacle_gap", self.obstacle_gap),
            ("obstacle_width", self.obstacle_width),
            ("sprite_size", self.sprite_size),
        ];
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::NotPositive { field, value });
            }
        }

        if self.jump_velocity >= 0.0 {
            return Err(ConfigError::JumpNotUpward(self.jump_velocity));
        }
        if self.spawn_period_frames == 0 {
            return Err(ConfigError::ZeroSpawnPeriod);
        }
        if self.sprite_size >= self.height {
            return Err(ConfigError::SpriteDoesNotFit {
                size: self.sprite_size,
                height: self.height,
            });
        }

        // The gap band must be non-empty so gen_range never panics
        let range = self.gap_range();
        if self.gap_margin < 0.0 || range.start >= range.end {
            return Err(ConfigError::GapDoesNotFit {
                gap: self.obstacle_gap,
                margin: self.gap_margin,
                height: self.height,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.subject_x(), 100.0);
        assert_eq!(config.half_size(), 17.5);
        assert_eq!(config.gap_range(), 100.0..380.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimConfig::from_json(r#"{ "gravity": 0.25, "spawn_period_frames": 90 }"#)
            .expect("valid config");
        assert_eq!(config.gravity, 0.25);
        assert_eq!(config.spawn_period_frames, 90);
        assert_eq!(config.width, FIELD_WIDTH);
        assert_eq!(config.obstacle_gap, OBSTACLE_GAP);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = SimConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_gap_that_does_not_fit() {
        let config = SimConfig {
            obstacle_gap: 450.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_rejects_bad_numbers() {
        let config = SimConfig {
            gravity: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotFinite { field: "gravity", .. })
        ));

        let config = SimConfig {
            obstacle_speed: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NotPositive { field: "obstacle_speed", .. })
        ));

        let config = SimConfig {
            jump_velocity: 8.0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::JumpNotUpward(_))));

        let config = SimConfig {
            spawn_period_frames: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroSpawnPeriod)));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = SimConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
