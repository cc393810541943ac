//! Frame clocks.
//!
//! Animations and timers read time from the runtime's [`FrameClock`] rather
//! than from the wall clock, so tests can step time exactly.

use std::{
    cell::Cell,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::{Duration, Instant},
};

/// Source of monotonic frame timestamps.
pub trait FrameClock: Send + Sync {
    /// Time elapsed since the clock's origin.
    fn now(&self) -> Duration;
}

/// Wall clock anchored at construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Creates a clock whose origin is now.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    micros: Arc<AtomicU64>,
}

impl ManualClock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the clock forward.
    pub fn advance(&self, by: Duration) {
        self.micros
            .fetch_add(duration_to_micros(by), Ordering::SeqCst);
    }

    /// Moves the clock forward by `ms` milliseconds.
    #[cfg(feature = "testing")]
    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    /// Sets the absolute time.
    pub fn set(&self, at: Duration) {
        self.micros.store(duration_to_micros(at), Ordering::SeqCst);
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_micros(self.micros.load(Ordering::SeqCst))
    }
}

fn duration_to_micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}

thread_local! {
    static FRAME_TIME: Cell<Duration> = const { Cell::new(Duration::ZERO) };
}

/// Timestamp of the frame currently being built on this thread.
///
/// Components call this during a build to start or sample animations. Outside
/// a frame it returns the timestamp of the last frame built on this thread.
pub fn frame_time() -> Duration {
    FRAME_TIME.with(Cell::get)
}

pub(crate) fn set_frame_time(at: Duration) {
    FRAME_TIME.with(|cell| cell.set(at));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let view = clock.clone();
        clock.advance(Duration::from_millis(16));
        clock.advance(Duration::from_millis(4));
        assert_eq!(view.now(), Duration::from_millis(20));
        view.set(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(1));
    }
}
