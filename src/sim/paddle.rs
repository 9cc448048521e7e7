//! Player paddles
//!
//! A paddle is pinned to the left or right edge of the court and only ever
//! moves vertically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::events::Key;
use super::rect::Rect;

/// Player index: 0 plays on the left, 1 on the right
pub type PlayerId = usize;

/// Which edge of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn player(self) -> PlayerId {
        match self {
            Side::Left => 0,
            Side::Right => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Movement state of a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motion {
    #[default]
    Still,
    MovingUp,
    MovingDown,
}

/// A player's paddle
#[derive(Debug, Clone, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub player: PlayerId,
    pub rect: Rect,
    /// Pixels per tick while moving
    pub speed: f32,
    /// Vertical velocity intent: 0, -speed or +speed
    pub velocity: f32,
    pub motion: Motion,
}

impl Paddle {
    /// Create a paddle already positioned against its side of the court
    pub fn new(side: Side, size: Vec2, speed: f32, court: &Rect) -> Self {
        let mut paddle = Self {
            side,
            player: side.player(),
            rect: Rect::from_size(size),
            speed,
            velocity: 0.0,
            motion: Motion::Still,
        };
        paddle.reset_to_side(court);
        paddle
    }

    pub fn set_moving(&mut self, motion: Motion) {
        match motion {
            Motion::MovingUp => self.velocity = -self.speed,
            Motion::MovingDown => self.velocity = self.speed,
            Motion::Still => self.velocity = 0.0,
        }
        self.motion = motion;
    }

    pub fn set_still(&mut self) {
        self.set_moving(Motion::Still);
    }

    /// Apply one tick of movement.
    ///
    /// The move is all-or-nothing: if the translated rect would leave the
    /// court the paddle stays where it is, even when a shorter move would fit.
    pub fn tick(&mut self, court: &Rect) {
        if self.velocity == 0.0 {
            return;
        }
        let candidate = self.rect.translate(Vec2::new(0.0, self.velocity));
        if court.contains(&candidate) {
            self.rect = candidate;
        }
    }

    /// Center the paddle vertically against its own edge of the court
    pub fn reset_to_side(&mut self, court: &Rect) {
        self.rect = match self.side {
            Side::Left => self.rect.with_mid_left(court.mid_left()),
            Side::Right => self.rect.with_mid_right(court.mid_right()),
        };
    }
}

impl std::fmt::Display for Paddle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "player{}", self.player + 1)
    }
}

/// Movement key bindings: `a`/`q` drive the left paddle, Up/Down the right one
pub fn paddle_command(key: Key) -> Option<(Side, Motion)> {
    match key {
        Key::Char('a') => Some((Side::Left, Motion::MovingUp)),
        Key::Char('q') => Some((Side::Left, Motion::MovingDown)),
        Key::Up => Some((Side::Right, Motion::MovingUp)),
        Key::Down => Some((Side::Right, Motion::MovingDown)),
        _ => None,
    }
}
