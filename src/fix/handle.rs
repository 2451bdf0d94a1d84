use jiff::Timestamp;

use crate::telemetry::FixTelemetry;

use super::registry;

/// Ownership of an applied fix. Restoring goes through the handle; dropping
/// it leaves the override in place for the rest of the process.
pub struct FixHandle {
    telemetry: FixTelemetry,
    applied: bool,
}

impl FixHandle {
    pub(super) fn applied(telemetry: FixTelemetry) -> Self {
        Self {
            telemetry,
            applied: true,
        }
    }

    pub(super) fn inert(telemetry: FixTelemetry) -> Self {
        Self {
            telemetry,
            applied: false,
        }
    }

    /// Whether the apply call behind this handle actually mutated the time
    /// primitive.
    pub fn is_applied(&self) -> bool {
        self.applied
    }

    /// Restore the original time source. Harmless when nothing is shifted;
    /// silent on a handle whose apply was skipped.
    pub fn restore(&self) {
        if !self.applied {
            return;
        }
        registry::restore();
        self.telemetry.emit_restore(Timestamp::now());
    }
}
