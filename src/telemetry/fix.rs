use jiff::Timestamp;
use tracing::{Level, event};
use uuid::Uuid;

/// Correlates the apply/restore events of one fix installation.
#[derive(Clone, Debug)]
pub struct FixTelemetry {
    fix_id: Uuid,
    client_label: String,
}

impl FixTelemetry {
    pub fn new(client_label: impl Into<String>) -> Self {
        Self {
            fix_id: Uuid::new_v4(),
            client_label: client_label.into(),
        }
    }

    pub fn emit_apply(&self, offset_seconds: f64, at: Timestamp) {
        event!(
            Level::INFO,
            fix_id = %self.fix_id,
            client = %self.client_label,
            offset_seconds,
            timestamp = %at,
            "timestamp fix applied"
        );
    }

    pub fn emit_restore(&self, at: Timestamp) {
        event!(
            Level::INFO,
            fix_id = %self.fix_id,
            client = %self.client_label,
            timestamp = %at,
            "timestamp fix restored"
        );
    }

    pub fn emit_rejected(&self, offset_seconds: f64) {
        event!(
            Level::WARN,
            fix_id = %self.fix_id,
            client = %self.client_label,
            offset_seconds,
            "unrepresentable offset; timestamp fix not applied"
        );
    }
}
