use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::classify::{classify_response, Classification};
use crate::config::FetchConfig;
use crate::error::{resolve_error_message, Result};
use crate::navigator::{PageNavigator, Redirector};
use crate::types::{ErrorDetail, FetchRequest};

/// Client for issuing REST requests against a backend guarded by a
/// federated identity provider.
///
/// Holds no per-call state; concurrent calls are fully independent. Each
/// call ends in exactly one of two ways: the completion handler fires once,
/// or the re-authentication flow is triggered once and the handler is
/// dropped without being invoked.
#[derive(Clone)]
pub struct FetchClient {
    client: Client,
    config: FetchConfig,
    redirector: Redirector,
}

impl FetchClient {
    /// Create a new fetch client bound to a page navigator.
    ///
    /// The underlying HTTP client follows redirects and keeps a cookie
    /// store so the ambient session credentials ride along on every
    /// request.
    pub fn new(config: FetchConfig, navigator: Arc<dyn PageNavigator>) -> Result<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout()))
            .redirect(reqwest::redirect::Policy::default())
            .cookie_store(true)
            .build()?;

        let redirector = Redirector::new(config.redirect_mode, navigator);

        Ok(Self {
            client,
            config,
            redirector,
        })
    }

    /// Issue a request and hand the outcome to the completion handler.
    ///
    /// The handler receives `(Some(json), None)` on success and
    /// `(None, Some(message))` on any reportable failure. When the response
    /// is a session-expiry signal (HTML where JSON was expected) or the
    /// transport itself fails, the re-authentication flow is triggered
    /// instead and the handler is never invoked. Nothing is propagated to
    /// the caller by any other channel.
    pub async fn fetch<F>(&self, request: &FetchRequest, callback: F)
    where
        F: FnOnce(Option<serde_json::Value>, Option<String>),
    {
        let http_request = match self.build_request(request) {
            Ok(r) => r,
            Err(detail) => {
                // Synchronous construction failures are reported through
                // the same channel as any other error.
                callback(
                    None,
                    Some(resolve_error_message(
                        Some(&detail),
                        &request.default_error_message,
                    )),
                );
                return;
            }
        };

        let response = match self.client.execute(http_request).await {
            Ok(response) => response,
            Err(_) => {
                // Network-level failures look just like an intercepted
                // session: force a re-up instead of surfacing an error.
                self.redirector.forward(&self.config.base_uri);
                return;
            }
        };

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);

        let body = match response.text().await {
            Ok(body) => body,
            Err(error) => {
                callback(
                    None,
                    Some(resolve_error_message(
                        Some(&ErrorDetail::from(&error)),
                        &request.default_error_message,
                    )),
                );
                return;
            }
        };

        match classify_response(
            status,
            content_type.as_deref(),
            &body,
            &request.default_error_message,
        ) {
            Classification::Success(value) => callback(Some(value), None),
            Classification::Failure(message) => callback(None, Some(message)),
            Classification::Reauthenticate => self.redirector.forward(&self.config.base_uri),
        }
    }

    /// Build the HTTP request for a descriptor.
    ///
    /// The endpoint is appended verbatim to the base URI. Failures are
    /// reduced to an `ErrorDetail` so the caller can run them through the
    /// message resolver.
    fn build_request(
        &self,
        request: &FetchRequest,
    ) -> std::result::Result<reqwest::Request, ErrorDetail> {
        let url = format!("{}{}", self.config.base_uri, request.endpoint);

        let mut builder = self
            .client
            .request(request.method.into(), url.as_str())
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(headers) = &self.config.headers {
            for (key, value) in headers {
                builder = builder.header(key.as_str(), value.as_str());
            }
        }

        if let Some(payload) = &request.payload {
            let body = serde_json::to_string(payload).map_err(|e| ErrorDetail::from(&e))?;
            builder = builder.body(body);
        }

        builder.build().map_err(|e| ErrorDetail::from(&e))
    }
}
