//! session-fetch - REST request helper for federated (SAML) deployments
//!
//! This crate issues JSON-over-HTTP requests against a REST backend that
//! sits behind a federated identity provider, classifies every response
//! uniformly, and recognizes the session-expiry case where the provider
//! answers with its own HTML login page instead of the expected JSON. That
//! case never reaches the caller as a parse error: the re-authentication
//! flow is triggered through a host-provided [`PageNavigator`] and the
//! completion handler is simply never invoked.

// Core modules
pub mod config;
pub mod error;
pub mod types;

// Main functionality modules
pub mod classify;
pub mod client;
pub mod navigator;

// Re-export main types for convenience
pub use config::{FetchConfig, FetchConfigBuilder, DEFAULT_TIMEOUT_SECONDS};
pub use error::{resolve_error_message, FetchError, Result};
pub use types::{ApiErrorBody, ErrorDetail, FetchRequest, HttpMethod};

pub use classify::{classify_response, compose_api_error_message, is_html, Classification};
pub use client::FetchClient;
pub use navigator::{PageNavigator, RedirectMode, Redirector};

use std::sync::Arc;

/// Issue a single request with a one-shot client.
///
/// Convenience wrapper for callers that do not hold a [`FetchClient`];
/// applications issuing many requests should construct one client and
/// reuse it.
pub async fn fetch<F>(
    config: FetchConfig,
    navigator: Arc<dyn PageNavigator>,
    request: &FetchRequest,
    callback: F,
) -> Result<()>
where
    F: FnOnce(Option<serde_json::Value>, Option<String>),
{
    let client = FetchClient::new(config, navigator)?;
    client.fetch(request, callback).await;
    Ok(())
}
