//! Clock abstraction for gravity timing.
//!
//! The controller never reads time itself. The runner samples a [`Clock`] once
//! per frame through [`FrameTimer::frame`], feeds the delta to
//! [`GameState::tick`](crate::GameState::tick) and waits for input for the
//! rest of the tick.

use std::cell::Cell;
use std::time::Instant;

/// Monotonic millisecond source with an arbitrary epoch.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall-clock implementation backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    epoch: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }
}

/// Hand-driven clock for tests and replays.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get().saturating_add(ms));
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Turns clock samples into per-frame deltas.
#[derive(Debug)]
pub struct FrameTimer<C> {
    clock: C,
    last_ms: u64,
}

impl<C: Clock> FrameTimer<C> {
    pub fn new(clock: C) -> Self {
        let last_ms = clock.now_ms();
        Self { clock, last_ms }
    }

    /// Milliseconds since the previous call (or since construction).
    pub fn delta_ms(&mut self) -> u32 {
        let now = self.clock.now_ms();
        let delta = now.saturating_sub(self.last_ms);
        self.last_ms = now;
        delta.min(u32::MAX as u64) as u32
    }

    /// Sample the clock once for a loop iteration with a `tick_ms` cadence.
    ///
    /// When the previous iteration overran the tick, the input wait shrinks by
    /// the overrun so gravity keeps its average pace.
    pub fn frame(&mut self, tick_ms: u32) -> FrameSample {
        let delta_ms = self.delta_ms();
        let overrun = delta_ms.saturating_sub(tick_ms);
        FrameSample {
            delta_ms,
            wait_ms: tick_ms.saturating_sub(overrun),
        }
    }
}

/// Timing for one runner iteration, taken from a single clock read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSample {
    /// Elapsed time to hand to the controller.
    pub delta_ms: u32,
    /// How long to wait for input before the next iteration.
    pub wait_ms: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_timer_reports_deltas() {
        let clock = ManualClock::new(500);
        let mut timer = FrameTimer::new(&clock);

        assert_eq!(timer.delta_ms(), 0);
        clock.advance(16);
        assert_eq!(timer.delta_ms(), 16);
        clock.advance(40);
        clock.advance(2);
        assert_eq!(timer.delta_ms(), 42);
        assert_eq!(timer.delta_ms(), 0);
    }

    /// Counts reads so tests can check how often the clock is consulted.
    struct CountingClock {
        inner: ManualClock,
        reads: Cell<u32>,
    }

    impl Clock for CountingClock {
        fn now_ms(&self) -> u64 {
            self.reads.set(self.reads.get() + 1);
            self.inner.now_ms()
        }
    }

    #[test]
    fn frame_reads_the_clock_once() {
        let clock = CountingClock {
            inner: ManualClock::new(0),
            reads: Cell::new(0),
        };
        let mut timer = FrameTimer::new(&clock);
        clock.reads.set(0);

        for _ in 0..3 {
            clock.inner.advance(5);
            timer.frame(16);
        }
        assert_eq!(clock.reads.get(), 3);
    }

    #[test]
    fn frame_wait_shrinks_after_an_overrun() {
        let clock = ManualClock::new(0);
        let mut timer = FrameTimer::new(&clock);

        clock.advance(4);
        assert_eq!(timer.frame(16), FrameSample { delta_ms: 4, wait_ms: 16 });

        clock.advance(16);
        assert_eq!(timer.frame(16), FrameSample { delta_ms: 16, wait_ms: 16 });

        clock.advance(21);
        assert_eq!(timer.frame(16), FrameSample { delta_ms: 21, wait_ms: 11 });

        clock.advance(100);
        assert_eq!(timer.frame(16), FrameSample { delta_ms: 100, wait_ms: 0 });
    }

    #[test]
    fn monotonic_clock_never_goes_back() {
        let clock = MonotonicClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
