use std::sync::Arc;

use jiff::{SignedDuration, Timestamp};

/// Pluggable reading of "current time".
///
/// The collaborating API client reads request timestamps through this trait,
/// so a shifted implementation can be swapped in without the client offering
/// any configuration hook of its own.
pub trait TimeSource: Send + Sync {
    fn now(&self) -> Timestamp;

    /// Unix timestamp in milliseconds, the shape signing paths consume.
    fn unix_millis(&self) -> i64 {
        self.now().as_millisecond()
    }
}

/// The unmodified system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Reads the inner source and subtracts a fixed shift.
///
/// A negative shift moves time forward instead of backward; the sign is
/// deliberately not validated.
pub struct ShiftedTimeSource {
    inner: Arc<dyn TimeSource>,
    shift: SignedDuration,
}

impl ShiftedTimeSource {
    pub fn new(inner: Arc<dyn TimeSource>, shift: SignedDuration) -> Self {
        Self { inner, shift }
    }

    pub fn shift(&self) -> SignedDuration {
        self.shift
    }
}

impl TimeSource for ShiftedTimeSource {
    fn now(&self) -> Timestamp {
        let base = self.inner.now();
        base.checked_sub(self.shift).unwrap_or(if self.shift.is_negative() {
            Timestamp::MAX
        } else {
            Timestamp::MIN
        })
    }
}
