//! The four fetch operations plus their JSON conveniences.
//!
//! # Design
//! `get` and `post` create a client from the factory, run a single exchange
//! and drop the client before returning, on the error path too. `get_with`
//! and `post_with` only borrow the caller's client and never release it.
//! There is no retry: the first error is returned as is.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::client::UreqFactory;
use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::http::{ClientFactory, HttpClient, HttpRequest, JSON_CONTENT_TYPE, TEXT_CONTENT_TYPE};

/// Blocking fetcher that concrete data clients compose with.
#[derive(Debug, Clone, Default)]
pub struct Fetcher<F = UreqFactory> {
    config: FetchConfig,
    factory: F,
}

impl Fetcher<UreqFactory> {
    pub fn new(config: FetchConfig) -> Self {
        Self::with_factory(config, UreqFactory)
    }
}

impl<F: ClientFactory> Fetcher<F> {
    pub fn with_factory(config: FetchConfig, factory: F) -> Self {
        Self { config, factory }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Build a client with this fetcher's configuration, for callers that
    /// want to reuse connections across several `*_with` calls.
    pub fn client(&self) -> Result<F::Client, FetchError> {
        self.factory.create(&self.config)
    }

    /// GET `url` on a short-lived client.
    pub fn get(&self, url: &str) -> Result<String, FetchError> {
        let client = self.client()?;
        self.get_with(url, &client)
    }

    /// GET `url` on the caller's client.
    pub fn get_with<C: HttpClient + ?Sized>(&self, url: &str, client: &C) -> Result<String, FetchError> {
        self.send(client, HttpRequest::get(url))
    }

    /// POST `body` as UTF-8 text to `url` on a short-lived client.
    pub fn post(&self, body: &str, url: &str) -> Result<String, FetchError> {
        let client = self.client()?;
        self.post_with(body, url, &client)
    }

    /// POST `body` as UTF-8 text to `url` on the caller's client.
    pub fn post_with<C: HttpClient + ?Sized>(
        &self,
        body: &str,
        url: &str,
        client: &C,
    ) -> Result<String, FetchError> {
        self.send(client, HttpRequest::post(url, TEXT_CONTENT_TYPE, body.to_string()))
    }

    pub fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let client = self.client()?;
        self.get_json_with(url, &client)
    }

    pub fn get_json_with<T, C>(&self, url: &str, client: &C) -> Result<T, FetchError>
    where
        T: DeserializeOwned,
        C: HttpClient + ?Sized,
    {
        let content = self.get_with(url, client)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Serialize `body` to JSON, POST it, and decode the response as `T`.
    pub fn post_json<B, T>(&self, body: &B, url: &str) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let client = self.client()?;
        self.post_json_with(body, url, &client)
    }

    pub fn post_json_with<B, T, C>(&self, body: &B, url: &str, client: &C) -> Result<T, FetchError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
        C: HttpClient + ?Sized,
    {
        let payload = serde_json::to_string(body)?;
        let content = self.send(client, HttpRequest::post(url, JSON_CONTENT_TYPE, payload))?;
        Ok(serde_json::from_str(&content)?)
    }

    fn send<C: HttpClient + ?Sized>(&self, client: &C, request: HttpRequest) -> Result<String, FetchError> {
        debug!(
            method = %request.method,
            url = %request.url,
            body_len = request.body.as_ref().map_or(0, String::len),
            "sending request"
        );

        match client.execute(&request) {
            Ok(content) => {
                debug!(url = %request.url, content_len = content.len(), "response received");
                Ok(content)
            }
            Err(err) => {
                warn!(method = %request.method, url = %request.url, error = %err, "request failed");
                Err(err)
            }
        }
    }
}
