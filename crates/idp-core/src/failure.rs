use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;

use crate::error_codes;

/// A single field rejected by request-body validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Name of the offending field
    pub field: String,
    /// Validation message; by convention an error-code token
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A single parameter constraint that did not hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Path of the violating property (e.g. `authorize.nonce`)
    pub property_path: String,
    pub message: String,
}

impl Violation {
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
        }
    }
}

/// Business-logic failures that carry their own stable error code
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum IdpError {
    /// Client could not be authenticated or is not registered
    #[error("invalid client")]
    InvalidClient,

    /// Resource owner's access token is missing or invalid
    #[error("not authenticated")]
    NotAuthenticated,

    /// Transaction is unknown, expired or already consumed
    #[error("invalid transaction")]
    InvalidTransaction,

    /// Redirect URI is not registered for the client
    #[error("invalid redirect uri")]
    InvalidRedirectUri,

    /// Any other registered error code
    #[error("idp error: {code}")]
    Coded { code: String },
}

impl IdpError {
    /// Build a failure for an arbitrary error-code token
    pub fn coded(code: impl Into<String>) -> Self {
        Self::Coded { code: code.into() }
    }

    /// The stable token identifying this failure
    pub fn error_code(&self) -> &str {
        match self {
            Self::InvalidClient => error_codes::INVALID_CLIENT_ID,
            Self::NotAuthenticated => error_codes::INVALID_AUTH_TOKEN,
            Self::InvalidTransaction => error_codes::INVALID_TRANSACTION,
            Self::InvalidRedirectUri => error_codes::INVALID_REDIRECT_URI,
            Self::Coded { code } => code,
        }
    }
}

/// Anything that can go wrong while a request is being handled
///
/// One variant per failure kind, each carrying only what its encoders need.
#[derive(Debug, Error)]
pub enum Failure {
    /// Request body failed validation, one entry per offending field
    #[error("{message}")]
    InvalidArgument { field_errors: Vec<FieldError>, message: String },

    /// Request parameters failed their constraints
    #[error("{message}")]
    ConstraintViolation { violations: Vec<Violation>, message: String },

    /// A required request parameter was absent
    #[error("{message}")]
    MissingParameter { name: String, message: String },

    /// The request's media type cannot be handled
    ///
    /// Raised for an unsupported `Content-Type` as well as an unsatisfiable `Accept`.
    #[error("{message}")]
    MediaTypeNotAcceptable { message: String },

    /// A request parameter could not be converted to its declared type
    #[error("{message}")]
    TypeMismatch { message: String },

    #[error(transparent)]
    Domain(#[from] IdpError),

    /// Catch-all; details are logged, never sent to the caller
    #[error(transparent)]
    Unclassified(#[from] anyhow::Error),
}

impl Failure {
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        let name = name.into();
        let message = format!("{name} is required");
        Self::MissingParameter { name, message }
    }

    pub fn invalid_argument(field_errors: Vec<FieldError>) -> Self {
        let message = format!("validation failed for {} field(s)", field_errors.len());
        Self::InvalidArgument { field_errors, message }
    }

    pub fn constraint_violation(violations: Vec<Violation>) -> Self {
        let message = format!("{} constraint violation(s)", violations.len());
        Self::ConstraintViolation { violations, message }
    }

    pub fn unclassified(message: impl std::fmt::Display) -> Self {
        Self::Unclassified(anyhow::anyhow!("{message}"))
    }
}

/// Response extension marking a response as a raised [`Failure`]
///
/// The failure-capturing middleware swaps any response carrying this
/// extension for the dispatcher's rendering of it.
#[derive(Debug, Clone)]
pub struct RaisedFailure(Arc<Failure>);

impl RaisedFailure {
    pub fn new(failure: Failure) -> Self {
        Self(Arc::new(failure))
    }
}

impl std::ops::Deref for RaisedFailure {
    type Target = Failure;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(RaisedFailure::new(self));
        response
    }
}
