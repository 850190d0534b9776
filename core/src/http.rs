//! HTTP request description and the client handle seam.
//!
//! # Design
//! `HttpRequest` describes one exchange as plain data. An `HttpClient`
//! executes it and hands back the full body; a `ClientFactory` produces an
//! owned client for the operations that do not receive one from the caller.
//! Releasing an owned client is simply dropping it.

use std::fmt;

use crate::config::FetchConfig;
use crate::error::FetchError;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=UTF-8";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One request, described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub content_type: Option<&'static str>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn get(url: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.to_string(),
            content_type: None,
            body: None,
        }
    }

    pub fn post(url: &str, content_type: &'static str, body: String) -> Self {
        Self {
            method: HttpMethod::Post,
            url: url.to_string(),
            content_type: Some(content_type),
            body: Some(body),
        }
    }
}

/// A handle able to perform blocking request/response exchanges.
///
/// Implementations return the complete response body decoded as UTF-8,
/// whatever the response status. Any failure is a `FetchError::Transport`.
pub trait HttpClient {
    fn execute(&self, request: &HttpRequest) -> Result<String, FetchError>;
}

/// Creates the short-lived clients used when the caller supplies none.
pub trait ClientFactory {
    type Client: HttpClient;

    fn create(&self, config: &FetchConfig) -> Result<Self::Client, FetchError>;
}
