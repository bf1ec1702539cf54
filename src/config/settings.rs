use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

use crate::protocol::{DEFAULT_SOCKET_PATH, DEFAULT_TIMEOUT_SECS};
use crate::{OlaError, OlaResult};

/// Environment variables a settings source reads, and the socket fallback
#[derive(Debug, Clone, Copy)]
pub struct EnvKeys {
    pub socket: &'static str,
    pub timeout: &'static str,
    pub default_socket: &'static str,
}

/// Variables read by the `ola` client
pub const CLIENT_ENV: EnvKeys = EnvKeys {
    socket: "OLA_SOCKET",
    timeout: "OLA_CLIENT_TIMEOUT",
    default_socket: DEFAULT_SOCKET_PATH,
};

/// Variables read by the `ola-smoke` harness
pub const HARNESS_ENV: EnvKeys = EnvKeys {
    socket: "TEST_OLA_SOCKET",
    timeout: "TEST_TIMEOUT",
    default_socket: "/tmp/ola.sock",
};

/// Client configuration, fixed for the lifetime of a client
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSettings {
    pub socket_path: PathBuf,
    /// Bound applied separately to connect, write and read
    pub timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
            timeout: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientSettings {
    pub fn new(socket_path: impl Into<PathBuf>, timeout: Duration) -> Self {
        Self {
            socket_path: socket_path.into(),
            timeout,
        }
    }

    /// Load from `OLA_SOCKET` and `OLA_CLIENT_TIMEOUT`
    pub fn from_env() -> Self {
        Self::from_env_keys(&CLIENT_ENV)
    }

    pub fn from_env_keys(keys: &EnvKeys) -> Self {
        Self::from_lookup(keys, |name| std::env::var(name).ok())
    }

    /// Load using `lookup` to resolve variable names
    ///
    /// Unset or empty variables fall back to the defaults. An unusable
    /// timeout is reported and replaced by the default.
    pub fn from_lookup<F>(keys: &EnvKeys, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self {
            socket_path: PathBuf::from(keys.default_socket),
            ..Self::default()
        };

        if let Some(val) = lookup(keys.socket).filter(|v| !v.is_empty()) {
            settings.socket_path = PathBuf::from(val);
        }

        if let Some(val) = lookup(keys.timeout).filter(|v| !v.is_empty()) {
            let parsed = val
                .trim()
                .parse::<f64>()
                .map_err(|e| OlaError::configuration(e.to_string()))
                .and_then(timeout_from_secs);

            match parsed {
                Ok(timeout) => settings.timeout = timeout,
                Err(e) => warn!(
                    "Ignoring {}={:?} ({}), using {}s",
                    keys.timeout, val, e, DEFAULT_TIMEOUT_SECS
                ),
            }
        }

        settings
    }

    pub fn with_socket_path(mut self, socket_path: impl Into<PathBuf>) -> Self {
        self.socket_path = socket_path.into();
        self
    }

    /// Replace the timeout, given in (possibly fractional) seconds
    pub fn with_timeout_secs(mut self, secs: f64) -> OlaResult<Self> {
        self.timeout = timeout_from_secs(secs)?;
        Ok(self)
    }

    pub fn validate(&self) -> OlaResult<()> {
        if self.socket_path.as_os_str().is_empty() {
            return Err(OlaError::configuration("Socket path must not be empty"));
        }

        if self.timeout.is_zero() {
            return Err(OlaError::configuration("Timeout must be greater than 0"));
        }

        Ok(())
    }
}

/// Convert seconds to a timeout, rejecting zero, negative and non-finite values
pub fn timeout_from_secs(secs: f64) -> OlaResult<Duration> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(OlaError::configuration(format!(
            "Timeout must be a positive number of seconds, got {}",
            secs
        )));
    }

    Duration::try_from_secs_f64(secs)
        .map_err(|e| OlaError::configuration(format!("Invalid timeout {}: {}", secs, e)))
}
