// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Manually advanced clock.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// An [`Instant`] source that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    elapsed: Cell<Duration>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    /// Clock anchored at the real current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            elapsed: Cell::new(Duration::ZERO),
        }
    }

    /// Current instant.
    pub fn now(&self) -> Instant {
        self.origin + self.elapsed.get()
    }

    /// Move forward by `by` and return the new instant.
    pub fn advance(&self, by: Duration) -> Instant {
        self.elapsed.set(self.elapsed.get() + by);
        self.now()
    }

    /// Move forward by `ms` milliseconds and return the new instant.
    pub fn advance_ms(&self, ms: u64) -> Instant {
        self.advance(Duration::from_millis(ms))
    }

    /// Time since the clock was created.
    pub fn elapsed(&self) -> Duration {
        self.elapsed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_moves_when_advanced() {
        let clock = ManualClock::new();
        let t0 = clock.now();
        assert_eq!(clock.now(), t0);
        let t1 = clock.advance_ms(150);
        assert_eq!(t1 - t0, Duration::from_millis(150));
        assert_eq!(clock.elapsed(), Duration::from_millis(150));
    }
}
