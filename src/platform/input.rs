//! Input sources

use std::collections::VecDeque;

use crate::sim::Event;

pub trait InputSource {
    /// Events that arrived since the previous call, oldest first
    fn poll(&mut self) -> Vec<Event>;
}

/// Replays a fixed list of per-frame event batches, then asks to quit
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    frames: VecDeque<Vec<Event>>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = Vec<Event>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Append `count` frames without input
    pub fn idle(mut self, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(Vec::new(), count));
        self
    }

    /// Append one frame carrying `events`
    pub fn then(mut self, events: Vec<Event>) -> Self {
        self.frames.push_back(events);
        self
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<Event> {
        self.frames.pop_front().unwrap_or_else(|| vec![Event::Quit])
    }
}
