//! OAuth2/OIDC API contract
//!
//! Exactly one [`OAuthError`] per response, with a status reflecting the
//! class of failure.

use http::StatusCode;
use idp_core::{Failure, MessageResolver, OAuthError, error_codes};

/// Encode a failure as an OAuth error body and status
///
/// Multi-valued validation failures report only their first entry.
pub fn encode(failure: &Failure, messages: &dyn MessageResolver) -> (StatusCode, OAuthError) {
    match failure {
        Failure::InvalidArgument { field_errors, message } => {
            let description = field_errors.first().map_or(message, |e| &e.message);
            (StatusCode::BAD_REQUEST, OAuthError::new(error_codes::INVALID_INPUT, description))
        }
        Failure::ConstraintViolation { violations, message } => {
            let description = violations.first().map_or(message, |v| &v.message);
            (StatusCode::BAD_REQUEST, OAuthError::new(error_codes::INVALID_INPUT, description))
        }
        Failure::Domain(error) => {
            let code = error.error_code();
            (StatusCode::BAD_REQUEST, OAuthError::new(code, messages.resolve(code)))
        }
        Failure::MissingParameter { .. }
        | Failure::MediaTypeNotAcceptable { .. }
        | Failure::TypeMismatch { .. }
        | Failure::Unclassified(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            OAuthError::new(error_codes::UNKNOWN_ERROR, messages.resolve(error_codes::UNKNOWN_ERROR)),
        ),
    }
}
