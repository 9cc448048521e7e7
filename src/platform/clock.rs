//! Frame pacing

use std::time::{Duration, Instant};

pub trait Clock {
    /// Block until at least `1 / fps` seconds have passed since the previous call
    fn tick(&mut self, fps: f32);
}

/// Wall-clock frame pacer
#[derive(Debug, Default)]
pub struct FrameClock {
    last: Option<Instant>,
    frames: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Clock for FrameClock {
    fn tick(&mut self, fps: f32) {
        let frame = Duration::from_secs_f32(1.0 / fps.max(1.0));
        if let Some(last) = self.last {
            let elapsed = last.elapsed();
            if elapsed < frame {
                std::thread::sleep(frame - elapsed);
            }
        }
        self.last = Some(Instant::now());
        self.frames += 1;
    }
}

/// Clock that never waits. Counts ticks for headless runs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullClock {
    pub ticks: u64,
}

impl Clock for NullClock {
    fn tick(&mut self, _fps: f32) {
        self.ticks += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_paces_frames() {
        let mut clock = FrameClock::new();
        let start = Instant::now();
        for _ in 0..4 {
            clock.tick(100.0);
        }
        // First tick returns at once, the next three wait ~10ms each
        assert!(start.elapsed() >= Duration::from_millis(25));
        assert_eq!(clock.frames(), 4);
    }

    #[test]
    fn test_null_clock_counts() {
        let mut clock = NullClock::default();
        clock.tick(60.0);
        clock.tick(60.0);
        assert_eq!(clock.ticks, 2);
    }
}
