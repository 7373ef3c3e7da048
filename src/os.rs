//! Cooperative timing primitives shared by the game loop

/// Monotonic millisecond clock. Wraps at `u32::MAX`.
pub trait TimeSource {
    fn now(&mut self) -> u32;
}

/// A periodic deadline polled from the main loop.
///
/// Each cadence keeps its own last-fired stamp, so several cadences driven
/// from one clock drift independently. Comparisons use wrapping arithmetic
/// and survive the millisecond counter rolling over.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cadence {
    period_ms: u32,
    last_fired: u32,
}

impl Cadence {
    /// New cadence whose last firing is taken to be at time 0
    pub const fn new(period_ms: u32) -> Self {
        Self {
            period_ms,
            last_fired: 0,
        }
    }

    /// Returns `true` and restamps when at least one period has elapsed
    #[inline]
    pub fn poll(&mut self, now: u32) -> bool {
        if now.wrapping_sub(self.last_fired) >= self.period_ms {
            self.last_fired = now;
            true
        } else {
            false
        }
    }

    #[inline]
    pub fn last_fired(&self) -> u32 {
        self.last_fired
    }
}

/// Busy-wait on `clock` until `ms` milliseconds have passed
pub fn wait_ms<T: TimeSource>(clock: &mut T, ms: u32) {
    let start = clock.now();
    while clock.now().wrapping_sub(start) < ms {}
}
