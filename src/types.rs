use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// HTTP method for a fetch request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Connect,
    Options,
    Trace,
    Patch,
}

impl HttpMethod {
    /// The uppercase wire name of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Head => "HEAD",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for HttpMethod {
    type Err = FetchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(HttpMethod::Get),
            "HEAD" => Ok(HttpMethod::Head),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "DELETE" => Ok(HttpMethod::Delete),
            "CONNECT" => Ok(HttpMethod::Connect),
            "OPTIONS" => Ok(HttpMethod::Options),
            "TRACE" => Ok(HttpMethod::Trace),
            "PATCH" => Ok(HttpMethod::Patch),
            _ => Err(FetchError::invalid_config(format!(
                "Invalid HTTP method: {}",
                s
            ))),
        }
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Head => reqwest::Method::HEAD,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Connect => reqwest::Method::CONNECT,
            HttpMethod::Options => reqwest::Method::OPTIONS,
            HttpMethod::Trace => reqwest::Method::TRACE,
            HttpMethod::Patch => reqwest::Method::PATCH,
        }
    }
}

/// Descriptor for a single REST request.
///
/// The endpoint is appended verbatim to the configured base URI; the base
/// URI is expected to end in `/`.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Endpoint-specific part of the URI, appended to the base URI
    pub endpoint: String,
    /// HTTP method to use
    pub method: HttpMethod,
    /// Request body, serialized to JSON when present
    pub payload: Option<serde_json::Value>,
    /// Fallback error text when a failure carries no message of its own
    pub default_error_message: String,
}

impl FetchRequest {
    /// Create a GET request descriptor with no payload
    pub fn get<S: Into<String>>(endpoint: S, default_error_message: S) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: HttpMethod::Get,
            payload: None,
            default_error_message: default_error_message.into(),
        }
    }

    /// Create a POST request descriptor carrying a JSON payload
    pub fn post<S: Into<String>>(
        endpoint: S,
        payload: serde_json::Value,
        default_error_message: S,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: HttpMethod::Post,
            payload: Some(payload),
            default_error_message: default_error_message.into(),
        }
    }
}

/// Structured error body returned by the REST API on non-2xx responses.
///
/// Both fields are optional; servers are not consistent about which they
/// populate. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
}

/// An error value of unknown origin, reduced to the one field the
/// error-message resolver inspects.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorDetail {
    pub message: Option<String>,
}

impl ErrorDetail {
    /// Wrap a plain message
    pub fn from_message<S: Into<String>>(message: S) -> Self {
        Self {
            message: Some(message.into()),
        }
    }
}

impl From<&serde_json::Error> for ErrorDetail {
    fn from(error: &serde_json::Error) -> Self {
        Self {
            message: Some(error.to_string()),
        }
    }
}

impl From<&reqwest::Error> for ErrorDetail {
    fn from(error: &reqwest::Error) -> Self {
        Self {
            message: Some(error.to_string()),
        }
    }
}
