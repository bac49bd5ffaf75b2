//! Wire shapes of the error responses

use serde::{Deserialize, Serialize};

/// One error reported to internal-API callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEntry {
    pub error_code: String,
    pub error_message: String,
}

impl ErrorEntry {
    pub fn new(error_code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_code: error_code.into(),
            error_message: error_message.into(),
        }
    }
}

/// Internal-API envelope
///
/// Failures are reported inside a 200 response; callers detect them by
/// inspecting `errors`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseWrapper {
    pub errors: Vec<ErrorEntry>,
}

impl ResponseWrapper {
    pub fn single(error_code: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            errors: vec![ErrorEntry::new(error_code, error_message)],
        }
    }
}

impl From<Vec<ErrorEntry>> for ResponseWrapper {
    fn from(errors: Vec<ErrorEntry>) -> Self {
        Self { errors }
    }
}

/// OAuth 2.0 error response body (RFC 6749 §5.2)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OAuthError {
    pub error: String,
    pub error_description: String,
}

impl OAuthError {
    pub fn new(error: impl Into<String>, error_description: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            error_description: error_description.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_wrapper_wire_shape() {
        let wrapper = ResponseWrapper::single("invalid_request", "redirect_uri is required");
        insta::assert_json_snapshot!(wrapper, @r#"
        {
          "errors": [
            {
              "errorCode": "invalid_request",
              "errorMessage": "redirect_uri is required"
            }
          ]
        }
        "#);
    }

    #[test]
    fn oauth_error_wire_shape() {
        let error = OAuthError::new("invalid_transaction", "Invalid transaction");
        assert_eq!(
            serde_json::to_string(&error).unwrap(),
            r#"{"error":"invalid_transaction","error_description":"Invalid transaction"}"#
        );
    }
}
