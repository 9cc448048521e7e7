//! State-stack driver
//!
//! `Game` owns the match, the registered states and the platform
//! collaborators. It runs the state on top of the stack one frame at a time:
//! poll input, dispatch queued events, update, render, pace. A requested
//! transition ends the state's cycle at the end of that frame's events.

use std::collections::HashMap;

use crate::error::GameError;
use crate::platform::{Clock, InputSource, Surface};
use crate::settings::Settings;
use crate::sim::{Event, EventQueue, Match};
use crate::states::{Ctx, State, StateId, Transition, default_states, dispatch};

/// How `Game::run` ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A quit event arrived
    Quit,
    /// The state stack ran empty
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    id: StateId,
    /// Set when the entry was suspended and is waiting to be picked back up
    resume: bool,
}

pub struct Game<S: Surface, I: InputSource, C: Clock> {
    world: Match,
    states: HashMap<StateId, Box<dyn State>>,
    stack: Vec<Entry>,
    events: EventQueue,
    current: Option<StateId>,
    fps: f32,
    surface: S,
    input: I,
    clock: C,
}

impl<S: Surface, I: InputSource, C: Clock> Game<S, I, C> {
    /// Build a match with the standard service/playing/paused/won states
    pub fn new(settings: Settings, surface: S, input: I, clock: C) -> Result<Self, GameError> {
        Self::with_states(settings, default_states(), surface, input, clock)
    }

    /// Build a match with an explicit state registry.
    ///
    /// Fails when the settings are invalid or `settings.initial_state` is not
    /// among `states`.
    pub fn with_states(
        settings: Settings,
        states: Vec<Box<dyn State>>,
        surface: S,
        input: I,
        clock: C,
    ) -> Result<Self, GameError> {
        let initial = settings.initial_state;
        let fps = settings.fps;
        let world = Match::new(settings)?;

        let mut game = Self {
            world,
            states: HashMap::new(),
            stack: Vec::new(),
            events: EventQueue::new(),
            current: None,
            fps,
            surface,
            input,
            clock,
        };
        for state in states {
            game.register(state);
        }
        game.push(initial)?;

        log::info!("Game created, starting in {}", initial);
        Ok(game)
    }

    /// Add or replace a state
    pub fn register(&mut self, state: Box<dyn State>) {
        let id = state.id();
        if self.states.insert(id, state).is_some() {
            log::debug!("replaced registered state {}", id);
        }
    }

    pub fn world(&self) -> &Match {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut Match {
        &mut self.world
    }

    /// The state currently (or last) run
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Run states until quit or until nothing is left on the stack
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        self.world.draw_scoreboard(&mut self.surface);

        while let Some(entry) = self.stack.pop() {
            log::debug!("switching to {}", entry.id);
            self.current = Some(entry.id);

            let Some(transition) = self.run_state(entry)? else {
                log::info!("quit requested in {}", entry.id);
                return Ok(Outcome::Quit);
            };
            self.apply(entry.id, transition)?;
        }

        Ok(Outcome::Finished)
    }

    fn push(&mut self, id: StateId) -> Result<(), GameError> {
        if !self.states.contains_key(&id) {
            return Err(GameError::StateNotRegistered(id));
        }
        self.stack.push(Entry { id, resume: false });
        Ok(())
    }

    fn apply(&mut self, from: StateId, transition: Transition) -> Result<(), GameError> {
        log::debug!("{} finished with {:?}", from, transition);
        match transition {
            Transition::Goto(next) => self.push(next),
            Transition::Suspend(next) => {
                self.stack.push(Entry { id: from, resume: true });
                self.push(next)
            }
            Transition::Resume => match self.stack.last() {
                Some(entry) if entry.resume => Ok(()),
                _ => Err(GameError::NothingToResume(from)),
            },
        }
    }

    /// One state's cycle. `None` means quit.
    fn run_state(&mut self, entry: Entry) -> Result<Option<Transition>, GameError> {
        let Self {
            world,
            states,
            events,
            fps,
            surface,
            input,
            clock,
            ..
        } = self;

        let state = states
            .get_mut(&entry.id)
            .ok_or(GameError::StateNotRegistered(entry.id))?;
        let fps = state.fps().unwrap_or(*fps);

        let mut ctx = Ctx::new(world, surface, events);
        let strategy = state.ball_strategy(ctx.game);
        ctx.game.set_ball_strategy(strategy);
        state.on_start(&mut ctx, entry.resume);

        loop {
            ctx.events.extend(input.poll());
            for event in ctx.events.drain() {
                if event == Event::Quit {
                    return Ok(None);
                }
                dispatch(state.as_mut(), &mut ctx, event);
            }
            if ctx.is_done() {
                break;
            }

            state.on_update(&mut ctx);
            state.on_render(&mut ctx);
            ctx.surface.present();
            clock.tick(fps);
        }

        ctx.events.clear();
        state.on_done(&mut ctx);
        Ok(ctx.transition())
    }
}
