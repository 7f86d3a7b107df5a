use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures on the relay request path.
///
/// The first two are client-caused and map to 400; the rest are
/// server-side and map to 500. All are terminal, nothing is retried.
/// Wire messages stay fixed per variant; the specific failed check only
/// appears in the debug log.
#[derive(Error, Debug)]
pub enum RelayError {
    /// Body did not decode into the envelope shape.
    #[error("Invalid request body")]
    MalformedRequest,

    /// Envelope decoded but failed a fixed-shape check.
    #[error("Request must match specified JSON-RPC format")]
    SchemaViolation,

    /// Outbound request could not be serialized.
    #[error("Error marshaling request: {0}")]
    InternalError(String),

    /// Upstream node could not be reached.
    #[error("Error making request: {0}")]
    UpstreamUnreachable(String),

    /// Upstream body was not a JSON-RPC response.
    #[error("Error unmarshaling response: {0}")]
    UpstreamProtocolError(String),
}

impl RelayError {
    /// HTTP status this error surfaces as.
    pub fn status(&self) -> StatusCode {
        match self {
            RelayError::MalformedRequest | RelayError::SchemaViolation => StatusCode::BAD_REQUEST,
            RelayError::InternalError(_)
            | RelayError::UpstreamUnreachable(_)
            | RelayError::UpstreamProtocolError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors_are_400() {
        assert_eq!(RelayError::MalformedRequest.status(), StatusCode::BAD_REQUEST);
        assert_eq!(RelayError::SchemaViolation.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_server_errors_are_500() {
        assert_eq!(
            RelayError::UpstreamUnreachable("connection refused".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::UpstreamProtocolError("expected value".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            RelayError::InternalError("oops".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_schema_violation_message_is_fixed() {
        assert_eq!(
            RelayError::SchemaViolation.to_string(),
            "Request must match specified JSON-RPC format"
        );
    }
}
