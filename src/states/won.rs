//! Match over

use super::{ACTION_KEY, Ctx, State, StateId, clear_sprites, draw_sprites};
use crate::sim::{Key, PlayerId};
use crate::widgets::PromptText;

pub fn banner(winner: PlayerId) -> String {
    format!("Player {} wins! Press space for a new match", winner + 1)
}

/// Shows the winner until the action key starts a new match
pub struct Won {
    prompt: PromptText,
}

impl Won {
    pub fn new() -> Self {
        Self {
            prompt: PromptText::new(""),
        }
    }
}

impl Default for Won {
    fn default() -> Self {
        Self::new()
    }
}

impl State for Won {
    fn id(&self) -> StateId {
        StateId::Won
    }

    fn fps(&self) -> Option<f32> {
        Some(15.0)
    }

    fn on_start(&mut self, ctx: &mut Ctx<'_>, _resume: bool) {
        match ctx.game.winner() {
            Some(player) => self.prompt.set_message(banner(player)),
            None => {
                log::warn!("entered won state without a winner");
                self.prompt.set_message("Match over! Press space for a new match");
            }
        }
    }

    fn on_keyup(&mut self, ctx: &mut Ctx<'_>, key: Key) {
        if key == ACTION_KEY {
            ctx.game.new_match();
            ctx.goto(StateId::Service);
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
