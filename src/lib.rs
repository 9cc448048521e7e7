//! Simple Pong - a two-player Pong on a tiny state-stack game framework
//!
//! Core modules:
//! - `sim`: Court geometry, paddles, ball strategies and the match controller
//! - `states`: The service/playing/paused/won phases and their event handlers
//! - `game`: The driver that runs the state stack one frame at a time
//! - `platform`: Display, input and clock collaborators
//! - `widgets`: Write-only text sinks (service prompt, scoreboard)
//! - `settings`: Match configuration

pub mod error;
pub mod game;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod states;
pub mod widgets;

pub use error::GameError;
pub use game::{Game, Outcome};
pub use settings::Settings;

use glam::Vec2;

/// Default match configuration
pub mod consts {
    /// Target frame rate
    pub const FPS: f32 = 60.0;

    /// Court dimensions (pixels)
    pub const COURT_WIDTH: f32 = 640.0;
    pub const COURT_HEIGHT: f32 = 480.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 64.0;
    /// Pixels per tick while a movement key is held
    pub const PADDLE_SPEED: f32 = 10.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 12.0;
    /// Pixels per tick
    pub const BALL_SPEED: f32 = 13.0;
    /// Serve angle (radians, y axis pointing down)
    pub const SERVE_ANGLE: f32 = 0.47;

    /// Win rule: reach WIN_SCORE with a lead of at least WIN_MARGIN
    pub const WIN_SCORE: u32 = 21;
    pub const WIN_MARGIN: u32 = 2;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Per-tick displacement for a ball travelling at `speed` along `angle`
#[inline]
pub fn displacement(angle: f32, speed: f32) -> Vec2 {
    Vec2::new(speed * angle.cos(), speed * angle.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    #[test]
    fn test_normalize_angle_wraps() {
        // 3π lands on the ±π seam; only the heading and range are exact
        let wrapped = normalize_angle(3.0 * PI);
        assert!((-PI..PI).contains(&wrapped) || wrapped == PI);
        assert!((wrapped.cos() + 1.0).abs() < 1e-5);
        assert!(wrapped.sin().abs() < 1e-5);

        assert!((normalize_angle(-2.5 * PI) - (-PI / 2.0)).abs() < 1e-5);
        assert!((normalize_angle(-PI / 2.0) - (-PI / 2.0)).abs() < 1e-6);
        assert!((normalize_angle(2.0 * PI + 0.25) - 0.25).abs() < 1e-5);
    }

    #[test]
    fn test_displacement_components() {
        let d = displacement(0.0, 13.0);
        assert_eq!(d, Vec2::new(13.0, 0.0));

        let d = displacement(PI / 2.0, 2.0);
        assert!(d.x.abs() < 1e-6);
        assert!((d.y - 2.0).abs() < 1e-6);
    }
}
