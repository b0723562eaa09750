use crate::error::resolve_error_message;
use crate::types::{ApiErrorBody, ErrorDetail};

/// What a response turned out to be, decided before any callback fires.
///
/// `Reauthenticate` never reaches the caller as a value; the client reacts
/// to it by triggering the redirect flow instead of invoking the completion
/// handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Parsed JSON payload from a successful response
    Success(serde_json::Value),
    /// User-displayable failure message
    Failure(String),
    /// Session-expiry signal; trigger the re-authentication flow
    Reauthenticate,
}

/// Whether a declared content type identifies an HTML document.
///
/// Matches any parameterized form (`text/html;charset=utf-8`). An HTML body
/// where JSON was expected means the identity provider intercepted the call.
pub fn is_html(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.contains("text/html"))
}

/// Classify a response into success, failure, or session expiry.
///
/// Decision order: an HTML content type wins regardless of status, then a
/// successful status expects a JSON payload, and anything else expects a
/// structured API error body.
pub fn classify_response(
    status: u16,
    content_type: Option<&str>,
    body: &str,
    default_error_message: &str,
) -> Classification {
    if is_html(content_type) {
        return Classification::Reauthenticate;
    }

    if (200..300).contains(&status) {
        match serde_json::from_str(body) {
            Ok(value) => Classification::Success(value),
            Err(error) => Classification::Failure(resolve_error_message(
                Some(&ErrorDetail::from(&error)),
                default_error_message,
            )),
        }
    } else {
        match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(api_error) => {
                Classification::Failure(compose_api_error_message(default_error_message, &api_error))
            }
            Err(error) => Classification::Failure(resolve_error_message(
                Some(&ErrorDetail::from(&error)),
                default_error_message,
            )),
        }
    }
}

/// Compose the user-displayable message for a structured API error.
///
/// Produces `"<default> <message> (<code>)"` with absent or empty segments
/// dropped rather than rendered as blanks.
pub fn compose_api_error_message(default_error_message: &str, api_error: &ApiErrorBody) -> String {
    let mut message = default_error_message.to_string();

    if let Some(server_message) = api_error.message.as_deref() {
        if !server_message.is_empty() {
            message.push(' ');
            message.push_str(server_message);
        }
    }

    if let Some(code) = api_error.error_code.as_deref() {
        if !code.is_empty() {
            message.push_str(&format!(" ({})", code));
        }
    }

    message
}
