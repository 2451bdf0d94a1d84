use std::sync::Mutex;

use jiff::{SignedDuration, Timestamp};
use timeskew::TimeSource;

/// Manually driven time source for deterministic assertions.
#[allow(dead_code)]
pub struct ManualTimeSource {
    current: Mutex<Timestamp>,
}

#[allow(dead_code)]
impl ManualTimeSource {
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    pub fn at_second(second: i64) -> Self {
        Self::new(Timestamp::from_second(second).expect("second in range"))
    }

    pub fn set(&self, to: Timestamp) {
        *self.current.lock().expect("clock poisoned") = to;
    }

    pub fn advance(&self, by: SignedDuration) {
        let mut current = self.current.lock().expect("clock poisoned");
        *current = current.checked_add(by).expect("advance overflowed");
    }
}

impl TimeSource for ManualTimeSource {
    fn now(&self) -> Timestamp {
        *self.current.lock().expect("clock poisoned")
    }
}
