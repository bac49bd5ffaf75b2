//! Stable error-code tokens
//!
//! Each token doubles as the lookup key for its localized message.

/// Request was malformed before reaching business logic
pub const INVALID_REQUEST: &str = "invalid_request";
/// Input rejected by validation on an OAuth/OIDC endpoint
pub const INVALID_INPUT: &str = "invalid_input";
pub const INVALID_CLIENT_ID: &str = "invalid_client_id";
pub const INVALID_REDIRECT_URI: &str = "invalid_redirect_uri";
pub const INVALID_TRANSACTION: &str = "invalid_transaction";
pub const INVALID_AUTH_TOKEN: &str = "invalid_auth_token";
/// Catch-all for failures nobody classified
pub const UNKNOWN_ERROR: &str = "unknown_error";

/// Every token this crate knows a default message for
pub const ALL: &[&str] = &[
    INVALID_REQUEST,
    INVALID_INPUT,
    INVALID_CLIENT_ID,
    INVALID_REDIRECT_URI,
    INVALID_TRANSACTION,
    INVALID_AUTH_TOKEN,
    UNKNOWN_ERROR,
];
