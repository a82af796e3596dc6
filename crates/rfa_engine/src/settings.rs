use std::time::Duration;

use rfa_logging::{rfa_debug, rfa_info};
use thiserror::Error;
use url::Url;

/// Environment override for the API base (absolute URL or path prefix).
pub const API_BASE_ENV: &str = "RFANTIBODY_API_BASE_URL";
/// Origin that a relative API base is resolved against.
pub const API_ORIGIN_ENV: &str = "RFANTIBODY_API_ORIGIN";
/// Optional whole-request timeout in seconds. Unset means wait indefinitely.
pub const REQUEST_TIMEOUT_ENV: &str = "RFANTIBODY_REQUEST_TIMEOUT_SECS";

/// Reverse-proxy prefix stripped before requests reach the backend.
pub const DEFAULT_API_BASE: &str = "/api";
pub const DEFAULT_API_ORIGIN: &str = "http://localhost:2239";
pub const PIPELINE_PATH: &str = "rfantibody_pipeline";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("invalid API origin {value:?}: {reason}")]
    InvalidOrigin { value: String, reason: String },
    #[error("invalid pipeline endpoint {value:?}: {reason}")]
    InvalidEndpoint { value: String, reason: String },
    #[error("invalid request timeout {0:?} (expected whole seconds > 0)")]
    InvalidTimeout(String),
    #[error("failed to build http client: {0}")]
    Client(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub api_base: String,
    pub origin: String,
    pub connect_timeout: Duration,
    pub request_timeout: Option<Duration>,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            origin: DEFAULT_API_ORIGIN.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
        }
    }
}

impl ClientSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            let value = lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty());
            if value.is_none() {
                rfa_debug!("{key} not set, using default");
            }
            value
        };

        let mut settings = Self::default();
        if let Some(api_base) = var(API_BASE_ENV) {
            rfa_info!("Using API base {api_base} from {API_BASE_ENV}");
            settings.api_base = api_base;
        }
        if let Some(origin) = var(API_ORIGIN_ENV) {
            settings.origin = origin;
        }
        if let Some(raw) = var(REQUEST_TIMEOUT_ENV) {
            let secs = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| SettingsError::InvalidTimeout(raw.clone()))?;
            settings.request_timeout = Some(Duration::from_secs(secs));
        }
        Ok(settings)
    }

    /// `{api_base}/rfantibody_pipeline`, resolved against `origin` when the base is relative.
    pub fn endpoint(&self) -> Result<Url, SettingsError> {
        let base = self.api_base.trim().trim_end_matches('/');
        let target = format!("{base}/{PIPELINE_PATH}");

        match Url::parse(&target) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin =
                    Url::parse(self.origin.trim()).map_err(|err| SettingsError::InvalidOrigin {
                        value: self.origin.clone(),
                        reason: err.to_string(),
                    })?;
                let relative = if target.starts_with('/') {
                    target
                } else {
                    format!("/{target}")
                };
                origin
                    .join(&relative)
                    .map_err(|err| SettingsError::InvalidEndpoint {
                        value: relative,
                        reason: err.to_string(),
                    })
            }
            Err(err) => Err(SettingsError::InvalidEndpoint {
                value: target,
                reason: err.to_string(),
            }),
        }
    }
}
