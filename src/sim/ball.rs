//! The ball and its state-dependent update strategies

use glam::Vec2;

use super::collision;
use super::events::BallOffCourt;
use super::paddle::{Paddle, PlayerId, Side};
use super::rect::Rect;

/// Ball behaviour, selected by the active game state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BallStrategy {
    /// Ball does not move
    #[default]
    Noop,
    /// Ball sticks to the serving paddle's inner edge
    Service { server: Side },
    /// Free flight with paddle and wall collisions
    Playing,
}

impl BallStrategy {
    /// Put the ball in this strategy's starting position
    pub fn reinit(self, ball: &mut Ball, paddles: &[Paddle; 2]) {
        if let BallStrategy::Service { server } = self {
            ball.stick_to(&paddles[server.player()]);
        }
    }

    /// Advance the ball one tick. Returns a notification when it left the court
    /// through the left or right edge.
    pub fn update(self, ball: &mut Ball, court: &Rect, paddles: &[Paddle; 2]) -> Option<BallOffCourt> {
        match self {
            BallStrategy::Noop => None,
            BallStrategy::Service { server } => {
                ball.stick_to(&paddles[server.player()]);
                None
            }
            BallStrategy::Playing => collision::advance(ball, court, paddles),
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub rect: Rect,
    /// Heading in radians (y axis points down)
    pub angle: f32,
    /// Pixels per tick; constant during a rally
    pub speed: f32,
    /// Set on a paddle hit, consumed by the next in-court check
    pub hit: bool,
    /// Last player to touch the ball
    pub last_hit_by: Option<PlayerId>,
    pub strategy: BallStrategy,
    initial: (f32, f32),
}

impl Ball {
    pub fn new(size: Vec2, angle: f32, speed: f32) -> Self {
        Self {
            rect: Rect::from_size(size),
            angle,
            speed,
            hit: false,
            last_hit_by: None,
            strategy: BallStrategy::Noop,
            initial: (angle, speed),
        }
    }

    /// Restore the initial vector and let the current strategy place the ball
    pub fn reinit(&mut self, paddles: &[Paddle; 2]) {
        (self.angle, self.speed) = self.initial;
        self.hit = false;
        let strategy = self.strategy;
        strategy.reinit(self, paddles);
    }

    pub fn update(&mut self, court: &Rect, paddles: &[Paddle; 2]) -> Option<BallOffCourt> {
        let strategy = self.strategy;
        strategy.update(self, court, paddles)
    }

    /// Velocity for this tick
    pub fn displacement(&self) -> Vec2 {
        crate::displacement(self.angle, self.speed)
    }

    /// Snap against the paddle's court-facing edge, vertically centered on it.
    /// The paddle's player becomes the ball's last hitter.
    fn stick_to(&mut self, paddle: &Paddle) {
        self.rect = match paddle.side {
            Side::Left => self.rect.with_mid_left(paddle.rect.mid_right()),
            Side::Right => self.rect.with_mid_right(paddle.rect.mid_left()),
        };
        self.last_hit_by = Some(paddle.player);
    }
}
