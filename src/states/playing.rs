//! A rally in progress

use super::{ACTION_KEY, Ctx, State, StateId, clear_sprites};
use super::{press_paddle_key, release_paddle_key};
use crate::sim::{BallStrategy, Key, Match, UserEvent};

/// Free flight. Ends when the ball leaves the court or the player pauses.
pub struct Playing;

impl State for Playing {
    fn id(&self) -> StateId {
        StateId::Playing
    }

    fn ball_strategy(&self, _game: &Match) -> BallStrategy {
        BallStrategy::Playing
    }

    fn on_start(&mut self, ctx: &mut Ctx<'_>, resume: bool) {
        // A resumed rally keeps its heading and speed
        if !resume {
            ctx.game.reinit_ball();
        }
    }

    fn on_keydown(&mut self, ctx: &mut Ctx<'_>, key: Key) {
        press_paddle_key(ctx.game, key);
    }

    fn on_keyup(&mut self, ctx: &mut Ctx<'_>, key: Key) {
        if key == ACTION_KEY {
            ctx.suspend(StateId::Paused);
        } else {
            release_paddle_key(ctx.game, key);
        }
    }

    fn on_userevent(&mut self, ctx: &mut Ctx<'_>, event: UserEvent) {
        match event {
            UserEvent::BallOffCourt(out) => {
                let next = ctx.game.on_ball_off_court(out);
                ctx.goto(next);
            }
        }
    }

    fn on_done(&mut self, ctx: &mut Ctx<'_>) {
        ctx.game.halt_paddles();
        clear_sprites(ctx);
    }
}
