pub mod time;

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

/// Tests that swap the process-wide time source must not interleave.
#[allow(dead_code)]
pub fn registry_guard() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Tests that mutate process env vars must not interleave either.
#[allow(dead_code)]
pub fn env_guard() -> MutexGuard<'static, ()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

#[allow(dead_code)]
pub fn init_logging() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}
