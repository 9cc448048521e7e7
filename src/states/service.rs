//! Waiting for the serve

use super::{ACTION_KEY, Ctx, State, StateId, clear_sprites, draw_sprites};
use super::{press_paddle_key, release_paddle_key};
use crate::sim::{BallStrategy, Key, Match};
use crate::widgets::PromptText;

pub const SERVICE_PROMPT: &str = "Press space to start";

/// Paddles are back on their marks and the ball rides the server's paddle
/// until the serve key is released.
pub struct Service {
    prompt: PromptText,
}

impl Service {
    pub fn new() -> Self {
        Self {
            prompt: PromptText::new(SERVICE_PROMPT),
        }
    }
}

impl Default for Service {
    fn default() -> Self {
        Self::new()
    }
}

impl State for Service {
    fn id(&self) -> StateId {
        StateId::Service
    }

    fn ball_strategy(&self, game: &Match) -> BallStrategy {
        game.service_strategy()
    }

    fn on_start(&mut self, ctx: &mut Ctx<'_>, _resume: bool) {
        ctx.game.reset_positions();
        log::debug!("serving from the {} side", ctx.game.settings().serve_side.as_str());
    }

    fn on_keydown(&mut self, ctx: &mut Ctx<'_>, key: Key) {
        press_paddle_key(ctx.game, key);
    }

    fn on_keyup(&mut self, ctx: &mut Ctx<'_>, key: Key) {
        if key == ACTION_KEY {
            ctx.goto(StateId::Playing);
        } else {
            release_paddle_key(ctx.game, key);
        }
    }

    fn on_render(&mut self, ctx: &mut Ctx<'_>) {
        self.prompt.draw(ctx.surface);
        draw_sprites(ctx);
    }

    fn on_done(&mut self, ctx: &mut Ctx<'_>) {
        let background = ctx.game.settings().background_color;
        self.prompt.clear(ctx.surface, background);
        clear_sprites(ctx);
    }
}
