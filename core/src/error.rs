//! Error types for the fetcher.
//!
//! # Design
//! Every failure between "start the request" and "have the whole body as a
//! string" is a single `Transport` kind. Callers that need to retry or log
//! do so themselves; nothing here distinguishes a timeout from a refused
//! connection. JSON helper failures get their own variant so they never
//! masquerade as network trouble.

use std::error::Error as StdError;

/// Errors returned by `Fetcher` operations and `HttpClient` implementations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Connecting, sending, receiving, or decoding the body failed.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn StdError + Send + Sync + 'static>,
    },

    /// A JSON payload could not be encoded or the response could not be
    /// decoded into the requested type.
    #[error("JSON conversion failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    pub fn transport<E>(url: &str, source: E) -> Self
    where
        E: Into<Box<dyn StdError + Send + Sync + 'static>>,
    {
        FetchError::Transport {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, FetchError::Transport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transport_error_names_url_and_cause() {
        let err = FetchError::transport(
            "http://test.local/echo",
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused"),
        );
        assert!(err.is_transport());
        assert_eq!(
            err.to_string(),
            "request to http://test.local/echo failed: connection refused"
        );
        assert!(err.source().is_some());
    }

    #[test]
    fn json_error_is_not_transport() {
        let cause = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = FetchError::from(cause);
        assert!(!err.is_transport());
        assert!(err.to_string().starts_with("JSON conversion failed"));
    }
}
