mod handle;
mod registry;

pub use handle::FixHandle;
pub use registry::{active_source, now, unix_millis};

use jiff::{SignedDuration, Timestamp};

use crate::config::FixSettings;
use crate::telemetry::FixTelemetry;

/// Apply the timestamp fix: from here on, every process-wide time read
/// observes `true_time - offset_seconds`, until the returned handle restores
/// the original source.
///
/// Re-applying with a different offset replaces the previous one; offsets do
/// not stack. With `auto_apply` unset the call mutates nothing and the
/// returned handle is inert. Cannot fail: an offset `SignedDuration` cannot
/// represent (unreachable through [`FixSettings::load`]) is logged and
/// skipped rather than applied.
pub fn apply(settings: FixSettings) -> FixHandle {
    let label = settings.client_label.as_deref().unwrap_or("Global");
    let telemetry = FixTelemetry::new(label);
    if !settings.auto_apply {
        return FixHandle::inert(telemetry);
    }
    let shift = match SignedDuration::try_from_secs_f64(settings.offset_seconds) {
        Ok(shift) => shift,
        Err(_) => {
            telemetry.emit_rejected(settings.offset_seconds);
            return FixHandle::inert(telemetry);
        }
    };
    registry::install(shift);
    telemetry.emit_apply(settings.offset_seconds, Timestamp::now());
    FixHandle::applied(telemetry)
}
