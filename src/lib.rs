//! Back-dated time source for signed exchange requests.
//!
//! Exchange API clients stamp signed requests from the local clock; a clock
//! running slightly ahead gets those requests rejected as "ahead of the
//! server's time". Applying the fix makes every time read taken through this
//! crate observe `true_time - offset` (default 5s), with no extra requests to
//! any server-time endpoint.

mod config;
mod errors;
mod fix;
mod source;
mod telemetry;

pub use config::{FixSettings, SettingsLocation};
pub use errors::Error;
pub use fix::{FixHandle, active_source, apply, now, unix_millis};
pub use source::{ShiftedTimeSource, SystemTimeSource, TimeSource};
