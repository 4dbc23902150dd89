//! Frame pacing. The sleep in `tick` is the game's only yield point.

use std::thread;
use std::time::{Duration, Instant};

/// Caps the loop to a target frame rate and provides the monotonic
/// millisecond clock used by the spawn timer.
pub struct FrameClock {
    frame: Duration,
    start: Instant,
    last_tick: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        let now = Instant::now();
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            start: now,
            last_tick: now,
        }
    }

    /// Target duration of one frame.
    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until a full frame has passed since the previous tick.
    /// Returns the actual time since the previous tick.
    pub fn tick(&mut self) -> Duration {
        let busy = self.last_tick.elapsed();
        if busy < self.frame {
            thread::sleep(self.frame - busy);
        }
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick);
        self.last_tick = now;
        dt
    }

    /// Milliseconds since the clock was created.
    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}
