use std::sync::Arc;

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use idp_core::{Failure, MessageResolver, OAuthError, ResponseWrapper};

use crate::{Surface, SurfaceClassifier, challenge, internal, oauth};

/// Translates any failure raised while handling a request into the
/// response contract of the surface that served it
///
/// Stateless apart from its read-only collaborators, so one instance is
/// shared by every request.
#[derive(Clone)]
pub struct ErrorDispatcher {
    classifier: SurfaceClassifier,
    messages: Arc<dyn MessageResolver>,
}

impl ErrorDispatcher {
    pub fn new(classifier: SurfaceClassifier, messages: Arc<dyn MessageResolver>) -> Self {
        Self { classifier, messages }
    }

    /// Encode `failure` raised while serving `path`
    ///
    /// Logs the failure once at error level before classifying it.
    pub fn dispatch(&self, failure: &Failure, path: &str) -> ErrorResponse {
        tracing::error!(path, error = %failure, "unhandled failure encountered during request processing");

        let surface = self.classifier.classify(path);
        tracing::debug!(path, %surface, "dispatching failure");

        match surface {
            Surface::Internal => ErrorResponse::Internal(internal::encode(failure, self.messages.as_ref())),
            Surface::OAuth => {
                let (status, body) = oauth::encode(failure, self.messages.as_ref());
                ErrorResponse::OAuth { status, body }
            }
            Surface::Challenge => ErrorResponse::Challenge {
                token: challenge::challenge_token(failure),
            },
        }
    }
}

impl std::fmt::Debug for ErrorDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ErrorDispatcher")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

/// A failure rendered for one surface, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorResponse {
    Internal(ResponseWrapper),
    OAuth { status: StatusCode, body: OAuthError },
    Challenge { token: &'static str },
}

impl ErrorResponse {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Internal(_) => StatusCode::OK,
            Self::OAuth { status, .. } => *status,
            Self::Challenge { .. } => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Internal(body) => (StatusCode::OK, Json(body)).into_response(),
            Self::OAuth { status, body } => (status, Json(body)).into_response(),
            Self::Challenge { token } => (
                StatusCode::UNAUTHORIZED,
                [(http::header::WWW_AUTHENTICATE, challenge::header_value(token))],
            )
                .into_response(),
        }
    }
}
