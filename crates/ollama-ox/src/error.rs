use thiserror::Error;

/// Errors that can occur while talking to an Ollama server
#[derive(Error, Debug)]
pub enum OllamaRequestError {
    /// HTTP request failed (connection, TLS, timeout, client construction)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server answered with a success status but the body did not decode
    #[error("HTTP {status} but failed to decode JSON: {source}; body: {body}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
        body: String,
    },

    /// The server answered with a non-success status
    #[error("API error (HTTP {status}): {message}")]
    Api {
        status: reqwest::StatusCode,
        message: String,
    },

    /// Base URL could not be parsed into an absolute URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl OllamaRequestError {
    /// HTTP status attached to the error, if the server produced one.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Decode { status, .. } => reqwest::StatusCode::from_u16(*status).ok(),
            Self::Http(e) => e.status(),
            Self::Json(_) | Self::InvalidBaseUrl(_) => None,
        }
    }

    /// Whether the request failed because a timeout elapsed.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}

/// Parse error response from HTTP status and body
pub(crate) fn parse_error_response(
    status: reqwest::StatusCode,
    body: &bytes::Bytes,
) -> OllamaRequestError {
    let message = serde_json::from_slice::<serde_json::Value>(body)
        .ok()
        .and_then(|json| extract_error_message(&json))
        .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_string());

    OllamaRequestError::Api { status, message }
}

/// Extract error message from the JSON error shapes Ollama and its proxies return
fn extract_error_message(json: &serde_json::Value) -> Option<String> {
    // Ollama format: {"error": "..."}
    if let Some(msg) = json.get("error").and_then(serde_json::Value::as_str) {
        return Some(msg.to_string());
    }

    // OpenAI-style proxies: {"error": {"message": "..."}}
    if let Some(msg) = json
        .get("error")
        .and_then(|e| e.get("message"))
        .and_then(serde_json::Value::as_str)
    {
        return Some(msg.to_string());
    }

    // Generic message field
    json.get("message")
        .and_then(serde_json::Value::as_str)
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_error_shape() {
        let body = bytes::Bytes::from_static(br#"{"error":"model 'llama9' not found"}"#);
        let err = parse_error_response(reqwest::StatusCode::NOT_FOUND, &body);
        match err {
            OllamaRequestError::Api { status, message } => {
                assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
                assert_eq!(message, "model 'llama9' not found");
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_error_shape() {
        let body = bytes::Bytes::from_static(br#"{"error":{"message":"unauthorized"}}"#);
        let err = parse_error_response(reqwest::StatusCode::UNAUTHORIZED, &body);
        assert!(matches!(err, OllamaRequestError::Api { ref message, .. } if message == "unauthorized"));
        assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
    }

    #[test]
    fn test_plain_text_body_falls_back_to_raw() {
        let body = bytes::Bytes::from_static(b"Bad Gateway\n");
        let err = parse_error_response(reqwest::StatusCode::BAD_GATEWAY, &body);
        assert!(matches!(err, OllamaRequestError::Api { ref message, .. } if message == "Bad Gateway"));
        assert!(!err.is_timeout());
    }
}
