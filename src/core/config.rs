//! Client configuration, defaults, and validation.
//!
//! Configuration is an explicit, immutable value constructed once per client
//! instance. It can be built in code or deserialized from a TOML section of
//! a consuming service's configuration file; every field has a default so an
//! empty section is valid.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::{ClientError, ClientResult};

/// Fallback service host when `NOTIFICATIONS_SERVICE_HOST` is unset.
pub const DEFAULT_SERVICE_HOST: &str = "127.0.0.1";

/// Fallback service port when `NOTIFICATIONS_SERVICE_PORT` is unset.
pub const DEFAULT_SERVICE_PORT: &str = "58051";

/// Caller identity used when the configured caller is empty.
pub const DEFAULT_CLIENT_NAME: &str = "notifications-client";

/// Notifications client configuration.
///
/// All timeouts are milliseconds. `dial_timeout_ms` bounds both connection
/// establishment and each individual call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Dial timeout and per-call deadline.
    #[serde(default = "default_dial_timeout_ms")]
    pub dial_timeout_ms: u64,

    /// HTTP/2 keep-alive ping interval on the established channel.
    #[serde(default = "default_keep_alive_interval_ms")]
    pub keep_alive_interval_ms: u64,

    /// How long to wait for a keep-alive ping acknowledgement.
    #[serde(default = "default_keep_alive_timeout_ms")]
    pub keep_alive_timeout_ms: u64,

    /// Caller identity propagated as `service-client` metadata on every
    /// outbound call. Empty means [`DEFAULT_CLIENT_NAME`].
    #[serde(default)]
    pub caller: String,

    /// Allow plaintext connections. Development and testing only.
    #[serde(default)]
    pub insecure: bool,
}

fn default_dial_timeout_ms() -> u64 {
    5_000
}

fn default_keep_alive_interval_ms() -> u64 {
    30_000
}

fn default_keep_alive_timeout_ms() -> u64 {
    10_000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            dial_timeout_ms: default_dial_timeout_ms(),
            keep_alive_interval_ms: default_keep_alive_interval_ms(),
            keep_alive_timeout_ms: default_keep_alive_timeout_ms(),
            caller: String::new(),
            insecure: false,
        }
    }
}

impl ClientConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> ClientResult<Self> {
        let config: ClientConfig = toml::from_str(content)
            .map_err(|e| ClientError::configuration(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Set the caller identity.
    pub fn with_caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = caller.into();
        self
    }

    /// Allow plaintext connections.
    pub fn with_insecure(mut self) -> Self {
        self.insecure = true;
        self
    }

    /// Validate configuration consistency.
    pub fn validate(&self) -> ClientResult<()> {
        if self.dial_timeout_ms == 0 {
            return Err(ClientError::configuration("dial_timeout_ms must be > 0"));
        }
        if self.keep_alive_interval_ms == 0 {
            return Err(ClientError::configuration(
                "keep_alive_interval_ms must be > 0",
            ));
        }
        if self.keep_alive_timeout_ms == 0 {
            return Err(ClientError::configuration(
                "keep_alive_timeout_ms must be > 0",
            ));
        }
        Ok(())
    }

    /// Dial timeout as a Duration.
    pub fn dial_timeout(&self) -> Duration {
        Duration::from_millis(self.dial_timeout_ms)
    }

    /// Keep-alive ping interval as a Duration.
    pub fn keep_alive_interval(&self) -> Duration {
        Duration::from_millis(self.keep_alive_interval_ms)
    }

    /// Keep-alive ping timeout as a Duration.
    pub fn keep_alive_timeout(&self) -> Duration {
        Duration::from_millis(self.keep_alive_timeout_ms)
    }

    /// The effective caller identity: the configured caller, or
    /// [`DEFAULT_CLIENT_NAME`] when empty.
    pub fn caller_identity(&self) -> &str {
        if self.caller.is_empty() {
            DEFAULT_CLIENT_NAME
        } else {
            &self.caller
        }
    }
}
