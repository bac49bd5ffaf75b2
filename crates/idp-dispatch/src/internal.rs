//! Internal (management) API contract
//!
//! Always HTTP 200; failures travel inside a [`ResponseWrapper`] with one
//! [`ErrorEntry`] per reported problem.

use idp_core::{ErrorEntry, Failure, IdpError, MessageResolver, ResponseWrapper, error_codes};

/// Encode a failure as an internal-API envelope
///
/// The envelope always carries at least one entry.
pub fn encode(failure: &Failure, messages: &dyn MessageResolver) -> ResponseWrapper {
    let entries = match failure {
        Failure::InvalidArgument { field_errors, .. } => field_errors
            .iter()
            .map(|e| ErrorEntry::new(&e.message, format!("{}: {}", e.field, e.message)))
            .collect(),
        Failure::ConstraintViolation { violations, .. } => violations
            .iter()
            .map(|v| ErrorEntry::new(error_codes::INVALID_REQUEST, format!("{}: {}", v.property_path, v.message)))
            .collect(),
        Failure::MissingParameter { message, .. } | Failure::MediaTypeNotAcceptable { message } => {
            vec![ErrorEntry::new(error_codes::INVALID_REQUEST, message)]
        }
        Failure::Domain(IdpError::InvalidClient) => vec![resolved(error_codes::INVALID_CLIENT_ID, messages)],
        Failure::Domain(error) => vec![resolved(error.error_code(), messages)],
        Failure::TypeMismatch { .. } | Failure::Unclassified(_) => {
            vec![resolved(error_codes::UNKNOWN_ERROR, messages)]
        }
    };

    if entries.is_empty() {
        // Validation failure with nothing field-level to report
        return ResponseWrapper::single(error_codes::INVALID_REQUEST, failure.to_string());
    }

    ResponseWrapper::from(entries)
}

fn resolved(code: &str, messages: &dyn MessageResolver) -> ErrorEntry {
    ErrorEntry::new(code, messages.resolve(code))
}
