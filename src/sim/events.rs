//! Input and internal events
//!
//! Every event kind the game understands is enumerated here; the ball-off-court
//! notification travels through the same FIFO queue as keyboard input.

use std::collections::VecDeque;

use super::paddle::{PlayerId, Side};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Space,
    Up,
    Down,
    Escape,
    /// Printable key, lowercase
    Char(char),
}

/// The ball left the court through the left or right edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BallOffCourt {
    /// Edge the ball went out through
    pub side: Side,
    /// Last player to touch the ball, if anyone did
    pub last_hit_by: Option<PlayerId>,
}

/// Events raised by the game itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEvent {
    BallOffCourt(BallOffCourt),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    KeyDown(Key),
    KeyUp(Key),
    User(UserEvent),
    Quit,
}

impl Event {
    /// Handler name for debug logs
    pub fn kind(&self) -> &'static str {
        match self {
            Event::KeyDown(_) => "keydown",
            Event::KeyUp(_) => "keyup",
            Event::User(_) => "userevent",
            Event::Quit => "quit",
        }
    }
}

/// FIFO queue of pending events for the current state
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an event behind everything already queued
    pub fn post(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    pub fn extend(&mut self, events: impl IntoIterator<Item = Event>) {
        self.pending.extend(events);
    }

    /// Take every pending event in arrival order
    pub fn drain(&mut self) -> Vec<Event> {
        self.pending.drain(..).collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_is_fifo() {
        let mut queue = EventQueue::new();
        queue.post(Event::KeyDown(Key::Up));
        queue.extend([Event::KeyUp(Key::Up), Event::Quit]);
        let events = queue.drain();
        assert_eq!(
            events,
            vec![Event::KeyDown(Key::Up), Event::KeyUp(Key::Up), Event::Quit]
        );
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_queue_clear() {
        let mut queue = EventQueue::new();
        queue.post(Event::User(UserEvent::BallOffCourt(BallOffCourt {
            side: Side::Left,
            last_hit_by: None,
        })));
        queue.clear();
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_event_kind_names() {
        assert_eq!(Event::KeyDown(Key::Space).kind(), "keydown");
        assert_eq!(Event::KeyUp(Key::Char('a')).kind(), "keyup");
        assert_eq!(Event::Quit.kind(), "quit");
    }
}
