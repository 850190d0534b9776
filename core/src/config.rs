//! Client configuration.
//!
//! # Design
//! All three timeouts default to 30 seconds. The struct derives serde so a
//! caller can embed it in its own configuration file; missing fields fall
//! back to the defaults.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings applied to every client a `Fetcher` creates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Upper bound on the time before a connection attempt can begin
    /// (name resolution).
    pub connection_request_timeout: Duration,
    /// Upper bound on establishing the TCP (and TLS) connection.
    pub connect_timeout: Duration,
    /// Upper bound on each send and receive phase of the exchange.
    pub socket_timeout: Duration,
    /// `User-Agent` header value; the crate name and version when unset.
    pub user_agent: Option<String>,
    /// Largest response body accepted, in bytes. Unlimited when unset.
    pub max_body_size: Option<u64>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connection_request_timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_TIMEOUT,
            socket_timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            max_body_size: None,
        }
    }
}

impl FetchConfig {
    /// Set all three timeouts to `timeout`.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        Self {
            connection_request_timeout: timeout,
            connect_timeout: timeout,
            socket_timeout: timeout,
            ..self
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_socket_timeout(mut self, timeout: Duration) -> Self {
        self.socket_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_max_body_size(mut self, bytes: u64) -> Self {
        self.max_body_size = Some(bytes);
        self
    }

    pub(crate) fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .unwrap_or(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
    }
}
