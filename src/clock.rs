//! Time source abstraction
//!
//! The engine stamps new expenses and resolves "current month/year" defaults
//! through an injected clock so tests can supply fixed timestamps.

use chrono::{DateTime, Local};

/// A source of the current local time
pub trait Clock {
    /// The current local date and time
    fn now(&self) -> DateTime<Local>;
}

/// Clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock that always returns the same instant (for tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}
