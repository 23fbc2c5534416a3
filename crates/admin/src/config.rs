use std::time::Duration;

use harpal_client::gateway::{GatewayConfig, DEFAULT_BASE_URL};
use harpal_dashboard::list::StalePolicy;

/// Malformed environment configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} must be {expected}, got '{value}'")]
    Invalid {
        var: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// Admin console configuration loaded from environment variables.
///
/// All fields have defaults suitable for a backend on the local machine.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// Backend base URL (default: `http://localhost:5000/api`).
    pub api_url: String,
    /// Bearer token to start the session with.
    pub token: Option<String>,
    /// Per-request timeout. Unset means requests are unbounded.
    pub request_timeout: Option<Duration>,
    /// What to do with list refreshes that complete out of order.
    pub stale_policy: StalePolicy,
}

impl AdminConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                       | Default                     |
    /// |-------------------------------|-----------------------------|
    /// | `HARPAL_API_URL`              | `http://localhost:5000/api` |
    /// | `HARPAL_TOKEN`                | unset (anonymous)           |
    /// | `HARPAL_REQUEST_TIMEOUT_SECS` | unset (no timeout)          |
    /// | `HARPAL_STALE_RESPONSES`      | `apply` (`apply`/`discard`) |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let api_url = var("HARPAL_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.into());

        let token = var("HARPAL_TOKEN");

        let request_timeout = match var("HARPAL_REQUEST_TIMEOUT_SECS") {
            None => None,
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) | Err(_) => {
                    return Err(ConfigError::Invalid {
                        var: "HARPAL_REQUEST_TIMEOUT_SECS",
                        expected: "a positive number of seconds",
                        value: raw,
                    })
                }
                Ok(secs) => Some(Duration::from_secs(secs)),
            },
        };

        let stale_policy = match var("HARPAL_STALE_RESPONSES").as_deref() {
            None | Some("apply") => StalePolicy::LastWriteWins,
            Some("discard") => StalePolicy::DiscardStale,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    var: "HARPAL_STALE_RESPONSES",
                    expected: "'apply' or 'discard'",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            api_url,
            token,
            request_timeout,
            stale_policy,
        })
    }

    pub fn gateway(&self) -> GatewayConfig {
        GatewayConfig {
            base_url: self.api_url.clone(),
            timeout: self.request_timeout,
        }
    }
}
