//! Client configuration.

use std::time::Duration;

use crate::{ClientError, ClientResult};

/// Path of the route-processing endpoint on the backend.
pub const PROCESS_ROUTE_PATH: &str = "/api/process-route";

/// Where the backend lives and how long to wait for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout:  Duration,
}

impl ClientConfig {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:5001";
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Environment variable overriding the base URL.
    pub const ENV_BASE_URL: &'static str = "ROUTE_API_URL";
    /// Environment variable overriding the timeout, in whole seconds.
    pub const ENV_TIMEOUT_SECS: &'static str = "ROUTE_API_TIMEOUT_SECS";

    /// Defaults, overridden by `ROUTE_API_URL` / `ROUTE_API_TIMEOUT_SECS`.
    pub fn from_env() -> ClientResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`from_env`][Self::from_env] but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> ClientResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(url) = lookup(Self::ENV_BASE_URL).filter(|u| !u.trim().is_empty()) {
            config.base_url = url.trim().to_string();
        }
        if let Some(raw) = lookup(Self::ENV_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|_| {
                ClientError::Config(format!(
                    "{} must be a whole number of seconds, got {raw:?}",
                    Self::ENV_TIMEOUT_SECS
                ))
            })?;
            if secs == 0 {
                return Err(ClientError::Config(format!(
                    "{} must be greater than zero",
                    Self::ENV_TIMEOUT_SECS
                )));
            }
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Full URL of the route-processing endpoint.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), PROCESS_ROUTE_PATH)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            timeout:  Self::DEFAULT_TIMEOUT,
        }
    }
}
