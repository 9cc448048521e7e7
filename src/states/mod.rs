//! Game states
//!
//! Each phase of a match (service, playing, paused, won) is a `State`. The
//! driver runs one state at a time: it feeds it events, lets it update and
//! render, and switches state once a handler requests a transition.

mod paused;
mod playing;
mod service;
mod won;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use paused::Paused;
pub use playing::Playing;
pub use service::Service;
pub use won::Won;

use crate::error::GameError;
use crate::platform::{Sprite, Surface};
use crate::sim::{BallStrategy, Event, EventQueue, Key, Match, UserEvent, paddle_command};

/// Serves, pauses and resumes
pub const ACTION_KEY: Key = Key::Space;

/// The fixed set of game phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateId {
    Service,
    Playing,
    Paused,
    Won,
}

impl StateId {
    pub const ALL: [StateId; 4] = [
        StateId::Service,
        StateId::Playing,
        StateId::Paused,
        StateId::Won,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StateId::Service => "service",
            StateId::Playing => "playing",
            StateId::Paused => "paused",
            StateId::Won => "won",
        }
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StateId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StateId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| GameError::UnknownState(s.to_string()))
    }
}

/// How a state hands control back to the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Leave this state for good and run `next`
    Goto(StateId),
    /// Keep this state on the stack and run `next` on top of it
    Suspend(StateId),
    /// Leave this state and pick the suspended one back up
    Resume,
}

/// What a state may touch while it runs
pub struct Ctx<'a> {
    pub game: &'a mut Match,
    pub surface: &'a mut dyn Surface,
    pub events: &'a mut EventQueue,
    transition: Option<Transition>,
}

impl<'a> Ctx<'a> {
    pub fn new(game: &'a mut Match, surface: &'a mut dyn Surface, events: &'a mut EventQueue) -> Self {
        Self {
            game,
            surface,
            events,
            transition: None,
        }
    }

    pub fn goto(&mut self, next: StateId) {
        self.request(Transition::Goto(next));
    }

    pub fn suspend(&mut self, next: StateId) {
        self.request(Transition::Suspend(next));
    }

    pub fn resume(&mut self) {
        self.request(Transition::Resume);
    }

    /// A transition has been requested; the cycle ends after this frame's events
    pub fn is_done(&self) -> bool {
        self.transition.is_some()
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    // First request of the cycle wins
    fn request(&mut self, transition: Transition) {
        match self.transition {
            None => {
                log::debug!("transition requested: {:?}", transition);
                self.transition = Some(transition);
            }
            Some(pending) => {
                log::debug!("ignoring {:?}, already leaving with {:?}", transition, pending);
            }
        }
    }
}

/// One phase of the game.
///
/// Default hooks give the common running behaviour: erase sprites, step the
/// simulation and draw everything back.
pub trait State {
    fn id(&self) -> StateId;

    /// Ball behaviour while this state is active
    fn ball_strategy(&self, _game: &Match) -> BallStrategy {
        BallStrategy::Noop
    }

    /// Frame rate override
    fn fps(&self) -> Option<f32> {
        None
    }

    /// Called each time the state becomes active. `resume` is true when it is
    /// picked back up after being suspended.
    fn on_start(&mut self, _ctx: &mut Ctx<'_>, _resume: bool) {}

    fn on_keydown(&mut self, _ctx: &mut Ctx<'_>, _key: Key) {}

    fn on_keyup(&mut self, _ctx: &mut Ctx<'_>, _key: Key) {}

    fn on_userevent(&mut self, _ctx: &mut Ctx<'_>, _event: UserEvent) {}

    fn on_update(&mut self, ctx: &mut Ctx<'_>) {
        update_sprites(ctx);
    }

    fn on_render(&mut self, ctx: &mut Ctx<'_>) {
        draw_sprites(ctx);
    }

    /// Called when the state's cycle ends
    fn on_done(&mut self, ctx: &mut Ctx<'_>) {
        clear_sprites(ctx);
    }
}

/// Route an event to the handler for its kind. Quit never reaches a state.
pub fn dispatch(state: &mut dyn State, ctx: &mut Ctx<'_>, event: Event) {
    log::trace!("{}: {} {:?}", state.id(), event.kind(), event);
    match event {
        Event::KeyDown(key) => state.on_keydown(ctx, key),
        Event::KeyUp(key) => state.on_keyup(ctx, key),
        Event::User(user) => state.on_userevent(ctx, user),
        Event::Quit => {}
    }
}

/// The states a Pong match is made of
pub fn default_states() -> Vec<Box<dyn State>> {
    vec![
        Box::new(Service::new()),
        Box::new(Playing),
        Box::new(Paused::new()),
        Box::new(Won::new()),
    ]
}

/// Erase ball and paddles with the background color
pub fn clear_sprites(ctx: &mut Ctx<'_>) {
    let background = ctx.game.settings().background_color;
    let game = &*ctx.game;
    for rect in [game.ball.rect, game.paddles[0].rect, game.paddles[1].rect] {
        ctx.surface.clear_rect(&rect, background);
    }
}

/// Erase, then step the simulation. A ball leaving the court is queued as an event.
pub fn update_sprites(ctx: &mut Ctx<'_>) {
    clear_sprites(ctx);
    if let Some(out) = ctx.game.update() {
        ctx.events.post(Event::User(UserEvent::BallOffCourt(out)));
    }
}

pub fn draw_sprites(ctx: &mut Ctx<'_>) {
    ctx.surface.draw_sprite(Sprite::Ball, &ctx.game.ball.rect);
    for paddle in &ctx.game.paddles {
        ctx.surface.draw_sprite(Sprite::Paddle(paddle.side), &paddle.rect);
    }
    ctx.game.draw_scoreboard(ctx.surface);
}

/// Start moving a paddle if `key` is bound to one
pub fn press_paddle_key(game: &mut Match, key: Key) -> bool {
    match paddle_command(key) {
        Some((side, motion)) => {
            game.paddle_mut(side).set_moving(motion);
            true
        }
        None => false,
    }
}

/// Stop the paddle `key` is bound to
pub fn release_paddle_key(game: &mut Match, key: Key) -> bool {
    match paddle_command(key) {
        Some((side, _)) => {
            game.paddle_mut(side).set_still();
            true
        }
        None => false,
    }
}
