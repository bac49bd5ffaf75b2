//! Bearer-token challenge contract used by the UserInfo endpoint
//!
//! Always 401 with an empty body; the error travels in `WWW-Authenticate`.

use http::HeaderValue;
use idp_core::{Failure, IdpError, error_codes};

/// Error token to place in the challenge header
pub const fn challenge_token(failure: &Failure) -> &'static str {
    match failure {
        Failure::Domain(IdpError::NotAuthenticated) => error_codes::INVALID_AUTH_TOKEN,
        _ => error_codes::UNKNOWN_ERROR,
    }
}

/// `WWW-Authenticate` value for a token: `error="<token>"`
pub fn header_value(token: &str) -> HeaderValue {
    HeaderValue::try_from(format!("error=\"{token}\""))
        .unwrap_or_else(|_| HeaderValue::from_static("error=\"unknown_error\""))
}
