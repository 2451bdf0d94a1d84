use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use jiff::{SignedDuration, Timestamp};

use crate::source::{ShiftedTimeSource, SystemTimeSource, TimeSource};

/// Process-wide time primitive: the original source captured once at first
/// use, plus whatever is active right now. The active source is always either
/// the original or a single shift wrapped around it.
struct Registry {
    original: Arc<dyn TimeSource>,
    active: RwLock<Arc<dyn TimeSource>>,
}

fn registry() -> &'static Registry {
    static REGISTRY: OnceLock<Registry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let original: Arc<dyn TimeSource> = Arc::new(SystemTimeSource);
        Registry {
            active: RwLock::new(Arc::clone(&original)),
            original,
        }
    })
}

/// Swap in a shift around the original source. Last writer wins; shifts never
/// stack because the wrapper is always built over the original, not over the
/// currently active source.
pub(super) fn install(shift: SignedDuration) {
    let reg = registry();
    let shifted: Arc<dyn TimeSource> =
        Arc::new(ShiftedTimeSource::new(Arc::clone(&reg.original), shift));
    let mut active = reg.active.write().unwrap_or_else(PoisonError::into_inner);
    *active = shifted;
}

/// Put the original source back, exactly as captured.
pub(super) fn restore() {
    let reg = registry();
    let mut active = reg.active.write().unwrap_or_else(PoisonError::into_inner);
    *active = Arc::clone(&reg.original);
}

/// The source every process-wide read goes through right now.
pub fn active_source() -> Arc<dyn TimeSource> {
    let reg = registry();
    let active = reg.active.read().unwrap_or_else(PoisonError::into_inner);
    Arc::clone(&active)
}

/// Current time as observed through the active source.
pub fn now() -> Timestamp {
    active_source().now()
}

/// Unix milliseconds as observed through the active source.
pub fn unix_millis() -> i64 {
    active_source().unix_millis()
}
