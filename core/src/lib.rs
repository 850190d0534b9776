//! Blocking HTTP content fetcher.
//!
//! # Overview
//! Issues a single GET or POST, reads the whole response body as a UTF-8
//! string and hands it back. Concrete data clients build on `Fetcher` and
//! decode the content with its JSON helpers.
//!
//! # Design
//! - `get` / `post` create a client per call and drop it before returning.
//! - `get_with` / `post_with` borrow a caller-owned client, so connections
//!   can be reused across calls; the fetcher never releases it.
//! - Timeouts come from `FetchConfig` and default to 30 seconds each.
//! - No retries, no caching; every failure surfaces as `FetchError`.

pub mod client;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod http;

pub use client::{UreqClient, UreqFactory};
pub use config::{FetchConfig, DEFAULT_TIMEOUT};
pub use error::FetchError;
pub use fetcher::Fetcher;
pub use http::{ClientFactory, HttpClient, HttpMethod, HttpRequest};
