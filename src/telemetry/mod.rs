mod fix;

pub use fix::FixTelemetry;
