//! read fix settings from a file, the environment, or a secret

use aws_config::BehaviorVersion;
use jiff::SignedDuration;
use serde::Deserialize;

use crate::errors::Error;

pub enum SettingsLocation {
    File(String),
    Env,
    Secret,
}

/// Caller-supplied knobs for the timestamp fix.
///
/// `client_label` only shows up in log lines; it has no functional effect.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct FixSettings {
    pub offset_seconds: f64,
    pub auto_apply: bool,
    pub client_label: Option<String>,
}

impl Default for FixSettings {
    fn default() -> Self {
        Self {
            offset_seconds: 5.0,
            auto_apply: true,
            client_label: None,
        }
    }
}

impl FixSettings {
    pub fn with_offset(offset_seconds: f64) -> Self {
        Self {
            offset_seconds,
            ..Self::default()
        }
    }

    pub async fn load(loc: SettingsLocation) -> Result<Self, Error> {
        let settings: FixSettings = match loc {
            SettingsLocation::File(path) => {
                let contents = std::fs::read_to_string(path)?;
                serde_json::from_str(&contents)?
            }
            SettingsLocation::Env => Self::from_env()?,
            SettingsLocation::Secret => Self::from_secret().await?,
        };
        settings.validate()?;
        Ok(settings)
    }

    fn from_env() -> Result<Self, Error> {
        let mut settings = Self::default();
        if let Ok(raw) = std::env::var("TIMESKEW_OFFSET_SECONDS") {
            settings.offset_seconds = raw.parse().map_err(|_| {
                Error::Settings(format!("TIMESKEW_OFFSET_SECONDS is not a number: '{raw}'"))
            })?;
        }
        if let Ok(raw) = std::env::var("TIMESKEW_AUTO_APPLY") {
            settings.auto_apply = raw.parse().map_err(|_| {
                Error::Settings(format!("TIMESKEW_AUTO_APPLY is not a bool: '{raw}'"))
            })?;
        }
        settings.client_label = std::env::var("TIMESKEW_CLIENT_LABEL").ok();
        Ok(settings)
    }

    async fn from_secret() -> Result<Self, Error> {
        let secret_arn = std::env::var("TIMESKEW_CONFIG_SECRET_ARN").map_err(|_| {
            Error::Settings("Missing TIMESKEW_CONFIG_SECRET_ARN env var".to_string())
        })?;
        let client = aws_sdk_secretsmanager::Client::new(
            &aws_config::load_defaults(BehaviorVersion::latest()).await,
        );
        let resp = client
            .get_secret_value()
            .secret_id(secret_arn)
            .send()
            .await
            .map_err(|e| Error::Settings(format!("Failed to get secret: {}", e)))?;
        let secret = match resp.secret_string() {
            Some(s) => Ok(s),
            None => Err(Error::Settings(
                "Failed to get secret string, returned None".to_string(),
            )),
        }?;
        Ok(serde_json::from_str(secret)?)
    }

    /// Guard against offsets `SignedDuration` cannot represent: non-finite
    /// values and magnitudes past the i64-seconds range. Sign and magnitude
    /// otherwise stay the caller's business.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if SignedDuration::try_from_secs_f64(self.offset_seconds).is_err() {
            return Err(Error::Settings(format!(
                "offset_seconds is not representable: {}",
                self.offset_seconds
            )));
        }
        Ok(())
    }
}
