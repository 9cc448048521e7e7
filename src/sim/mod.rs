//! Deterministic simulation module
//!
//! Court geometry, paddles, the ball and the match rules. Nothing in here
//! draws, reads input or waits on a clock.

pub mod ball;
pub mod collision;
pub mod events;
pub mod paddle;
pub mod rect;
pub mod state;

pub use ball::{Ball, BallStrategy};
pub use collision::{CourtExit, advance, check_hit, check_out};
pub use events::{BallOffCourt, Event, EventQueue, Key, UserEvent};
pub use paddle::{Motion, Paddle, PlayerId, Side, paddle_command};
pub use rect::Rect;
pub use state::Match;
