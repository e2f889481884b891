//! Error taxonomy for backend calls and token handling.

use thiserror::Error;

/// Failure decoding a session token into claims.
#[derive(Error, Debug)]
pub enum TokenError {
    #[error("token is not a three-part JWT")]
    Malformed,
    #[error("token payload is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),
    #[error("token payload is not a claims object: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Anything a backend call can fail with.
///
/// `Status` carries the message the service put in its error body
/// (`message` or `error` key) so the UI can surface it verbatim.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: u16, message: String },
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error(transparent)]
    Token(#[from] TokenError),
}

impl ApiError {
    /// Build a `Status` error from a non-success response, pulling the
    /// service's own message out of the body when there is one.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = response.status().as_u16();
        let message = match response.json::<serde_json::Value>().await {
            Ok(body) => body
                .get("message")
                .or_else(|| body.get("error"))
                .and_then(|v| v.as_str())
                .map(str::to_string),
            Err(_) => None,
        };
        let message = message.unwrap_or_else(|| format!("request failed with status {status}"));
        ApiError::Status { status, message }
    }

    /// The HTTP status, when this error came from a completed response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_displays_service_message() {
        let err = ApiError::Status {
            status: 409,
            message: "Email already registered".to_string(),
        };
        assert_eq!(err.to_string(), "Email already registered");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_token_error_converts_into_api_error() {
        let err: ApiError = TokenError::Malformed.into();
        assert!(matches!(err, ApiError::Token(TokenError::Malformed)));
        assert_eq!(err.status(), None);
    }
}
