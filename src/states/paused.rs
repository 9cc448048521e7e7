//! Rally on hold

use super::{ACTION_KEY, Ctx, State, StateId, clear_sprites, draw_sprites};
use crate::sim::Key;
use crate::widgets::PromptText;

pub const PAUSED_PROMPT: &str = "Paused, press space to resume";

/// Runs on top of a suspended rally. Nothing moves until the action key
/// hands control back.
pub struct Paused {
    prompt: PromptText,
}

impl Paused {
    pub fn new() -> Self {
        Self {
            prompt: PromptText::new(PAUSED_PROMPT),
        }
    }
}

impl Default for Paused {
    fn default() -> Self {
        Self::new()
    }
}

impl State for Paused {
    fn id(&self) -> StateId {
        StateId::Paused
    }

    fn fps(&self) -> Option<f32> {
        Some(15.0)
    }

    fn on_keyup(&mut self, ctx: &mut Ctx<'_>, key: Key) {
        if key == ACTION_KEY {
            ctx.resume();
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
