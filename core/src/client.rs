//! Blocking `HttpClient` backed by a `ureq::Agent`.
//!
//! # Design
//! The agent owns the connection pool, so cloning a `UreqClient` shares
//! pooled connections between clones. Status codes are never turned into
//! errors: a 404 or 500 still yields its body as content.

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::http::{ClientFactory, HttpClient, HttpMethod, HttpRequest};

#[derive(Debug, Clone)]
pub struct UreqClient {
    agent: ureq::Agent,
    body_limit: u64,
}

impl UreqClient {
    pub fn new(config: &FetchConfig) -> Self {
        let socket = Some(config.socket_timeout);
        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .user_agent(config.user_agent())
            .timeout_resolve(Some(config.connection_request_timeout))
            .timeout_connect(Some(config.connect_timeout))
            .timeout_send_request(socket)
            .timeout_send_body(socket)
            .timeout_recv_response(socket)
            .timeout_recv_body(socket)
            .build()
            .new_agent();

        Self {
            agent,
            body_limit: config.max_body_size.unwrap_or(u64::MAX),
        }
    }
}

impl Default for UreqClient {
    fn default() -> Self {
        Self::new(&FetchConfig::default())
    }
}

impl HttpClient for UreqClient {
    fn execute(&self, request: &HttpRequest) -> Result<String, FetchError> {
        let url = request.url.as_str();
        let body = request.body.as_deref().unwrap_or("");

        let response = match request.method {
            HttpMethod::Get => self.agent.get(url).call(),
            HttpMethod::Post => match request.content_type {
                Some(content_type) => self
                    .agent
                    .post(url)
                    .content_type(content_type)
                    .send(body.as_bytes()),
                None => self.agent.post(url).send(body.as_bytes()),
            },
        };

        let mut response = response.map_err(|e| FetchError::transport(url, e))?;
        response
            .body_mut()
            .with_config()
            .limit(self.body_limit)
            .read_to_string()
            .map_err(|e| FetchError::transport(url, e))
    }
}

/// Builds a fresh `UreqClient` per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct UreqFactory;

impl ClientFactory for UreqFactory {
    type Client = UreqClient;

    fn create(&self, config: &FetchConfig) -> Result<UreqClient, FetchError> {
        Ok(UreqClient::new(config))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn body_limit_defaults_to_unlimited() {
        let client = UreqClient::default();
        assert_eq!(client.body_limit, u64::MAX);
    }

    #[test]
    fn body_limit_follows_config() {
        let config = FetchConfig::default().with_max_body_size(1024);
        let client = UreqFactory.create(&config).unwrap();
        assert_eq!(client.body_limit, 1024);
    }

    #[test]
    fn invalid_url_is_a_transport_error() {
        let client = UreqClient::new(&FetchConfig::default().with_timeout(Duration::from_secs(1)));
        let err = client.execute(&HttpRequest::get("not a url")).unwrap_err();
        assert!(err.is_transport());
    }
}
