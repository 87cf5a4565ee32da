//! Clock adapters for pinned and simulated time

use keymint_domain::Clock;
use std::sync::Mutex;
use time::{Duration, OffsetDateTime};

/// Clock that always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: OffsetDateTime,
}

impl FixedClock {
    pub fn new(at: OffsetDateTime) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.at
    }
}

/// Clock that advances by a fixed step after every reading
///
/// Once a step would leave the representable range the clock stays on the
/// last representable instant.
#[derive(Debug)]
pub struct SteppingClock {
    next: Mutex<OffsetDateTime>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(start: OffsetDateTime, step: Duration) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> OffsetDateTime {
        // A poisoned lock still holds a valid instant
        let mut next = self.next.lock().unwrap_or_else(|e| e.into_inner());
        let current = *next;
        *next = current.checked_add(self.step).unwrap_or(current);
        current
    }
}
