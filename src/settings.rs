//! Match configuration
//!
//! Supplied once when the match is built and never changed afterwards.
//! Settings files are JSON; any key left out keeps its default.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;
use crate::sim::{Rect, Side};
use crate::states::StateId;

/// RGB color
pub type Rgb = [u8; 3];

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Court ===
    /// Playable area (width, height) in pixels
    pub court_size: (f32, f32),
    /// Fill color used to erase sprites and text
    pub background_color: Rgb,

    // === Ball ===
    pub ball_size: (f32, f32),
    /// Pixels per tick
    pub ball_speed: f32,
    /// Radians; 0 points right, positive angles head down
    pub serve_angle: f32,
    /// Which paddle the ball sticks to during service
    pub serve_side: Side,

    // === Paddles ===
    pub paddle_size: (f32, f32),
    /// Pixels per tick
    pub paddle_speed: f32,

    // === Rules ===
    pub win_score: u32,
    pub win_margin: u32,

    // === Loop ===
    pub fps: f32,
    /// First state the driver runs
    pub initial_state: StateId,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            court_size: (COURT_WIDTH, COURT_HEIGHT),
            background_color: [0, 0, 0],

            ball_size: (BALL_SIZE, BALL_SIZE),
            ball_speed: BALL_SPEED,
            serve_angle: SERVE_ANGLE,
            serve_side: Side::Left,

            paddle_size: (PADDLE_WIDTH, PADDLE_HEIGHT),
            paddle_speed: PADDLE_SPEED,

            win_score: WIN_SCORE,
            win_margin: WIN_MARGIN,

            fps: FPS,
            initial_state: StateId::Service,
        }
    }
}

impl Settings {
    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate a JSON settings file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn court(&self) -> Rect {
        Rect::new(0.0, 0.0, self.court_size.0, self.court_size.1)
    }

    pub fn paddle_dims(&self) -> Vec2 {
        Vec2::new(self.paddle_size.0, self.paddle_size.1)
    }

    pub fn ball_dims(&self) -> Vec2 {
        Vec2::new(self.ball_size.0, self.ball_size.1)
    }

    /// Reject configurations the simulation cannot run
    pub fn validate(&self) -> Result<(), GameError> {
        let sizes = [
            ("court", self.court_size),
            ("paddle", self.paddle_size),
            ("ball", self.ball_size),
        ];
        for (what, (width, height)) in sizes {
            let ok = width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0;
            if !ok {
                return Err(GameError::InvalidGeometry { what, width, height });
            }
        }

        let (court_w, court_h) = self.court_size;
        let (paddle_w, paddle_h) = self.paddle_size;
        let (ball_w, ball_h) = self.ball_size;
        // Both paddles plus a served ball have to fit side by side
        if 2.0 * paddle_w + ball_w > court_w || paddle_h > court_h || ball_h > court_h {
            return Err(GameError::InvalidSetting(format!(
                "paddles {paddle_w}x{paddle_h} and ball {ball_w}x{ball_h} do not fit in court {court_w}x{court_h}"
            )));
        }

        for (name, value) in [
            ("ball_speed", self.ball_speed),
            ("paddle_speed", self.paddle_speed),
            ("fps", self.fps),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidSetting(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !self.serve_angle.is_finite() {
            return Err(GameError::InvalidSetting(format!(
                "serve_angle must be finite, got {}",
                self.serve_angle
            )));
        }

        if self.win_score == 0 {
            return Err(GameError::InvalidSetting("win_score must be at least 1".into()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.court_size, (640.0, 480.0));
        assert_eq!(settings.ball_speed, 13.0);
        assert_eq!(settings.serve_angle, 0.47);
        assert_eq!(settings.win_score, 21);
        assert_eq!(settings.win_margin, 2);
        assert_eq!(settings.initial_state, StateId::Service);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{"ball_speed": 7.5, "serve_side": "right"}"#)
            .expect("valid settings");
        assert_eq!(settings.ball_speed, 7.5);
        assert_eq!(settings.serve_side, Side::Right);
        assert_eq!(settings.court_size, (640.0, 480.0));
    }

    #[test]
    fn test_unknown_initial_state_is_rejected() {
        let result = Settings::from_json(r#"{"initial_state": "intro"}"#);
        assert!(matches!(result, Err(GameError::Json(_))));
    }

    #[test]
    fn test_non_positive_court_is_fatal() {
        let settings = Settings {
            court_size: (0.0, 480.0),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(GameError::InvalidGeometry { what: "court", .. })
        ));
    }

    #[test]
    fn test_negative_ball_size_is_fatal() {
        let settings = Settings {
            ball_size: (12.0, -1.0),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(GameError::InvalidGeometry { what: "ball", .. })
        ));
    }

    #[test]
    fn test_oversized_paddle_is_rejected() {
        let settings = Settings {
            paddle_size: (10.0, 500.0),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(GameError::InvalidSetting(_))
        ));
    }

    #[test]
    fn test_zero_fps_is_rejected() {
        let settings = Settings {
            fps: 0.0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Settings::load_from("/nonexistent/simple-pong.json");
        assert!(matches!(result, Err(GameError::Io(_))));
    }

    #[test]
    fn test_json_roundtrip_of_defaults() {
        let json = serde_json::to_string(&Settings::default()).expect("serializable");
        let back = Settings::from_json(&json).expect("valid");
        assert_eq!(back, Settings::default());
    }
}
