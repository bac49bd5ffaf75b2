//! Routes that raise every kind of failure under every surface prefix

use axum::Router;
use axum::extract::Path;
use axum::http::HeaderMap;
use axum::routing::{get, post};
use idp_core::{Failure, FieldError, IdpError, Violation};
use idp_server::{ValidJson, ValidQuery};
use serde::Deserialize;
use validator::Validate;

/// Prefixes the generic `/fail/{kind}` route is mounted under
pub const FAIL_PREFIXES: &[&str] = &[
    "/authorization",
    "/client-mgmt",
    "/oauth",
    "/oauth/client-mgmt",
    "/oidc/userinfo",
    "/other",
];

/// Every failure kind the generic route can raise
pub const FAIL_KINDS: &[&str] = &[
    "validation",
    "violation",
    "missing-parameter",
    "media-type",
    "type-mismatch",
    "invalid-client",
    "not-authenticated",
    "invalid-transaction",
    "coded",
    "unclassified",
    "panic",
];

#[derive(Debug, Deserialize, Validate)]
pub struct ClientRequest {
    #[validate(length(min = 1, message = "invalid_client_id"))]
    pub client_id: String,
    #[validate(url(message = "invalid_redirect_uri"))]
    pub redirect_uri: String,
    #[validate(length(min = 1, max = 32, message = "invalid_client_name"))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ClientQuery {
    #[validate(url(message = "invalid_redirect_uri"))]
    pub redirect_uri: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct TokenRequest {
    #[validate(length(min = 1, message = "invalid_grant_type"))]
    pub grant_type: String,
    #[validate(length(min = 1, message = "invalid_code"))]
    pub code: String,
    pub transaction_id: Option<String>,
}

pub fn failing_routes() -> Router {
    let mut router = Router::new()
        .route("/client-mgmt/oidc-client", post(create_client))
        .route("/authorization/clients", get(list_clients))
        .route("/oauth/token", post(token))
        .route("/oidc/userinfo", get(userinfo));

    for prefix in FAIL_PREFIXES {
        router = router.route(&format!("{prefix}/fail/{{kind}}"), get(fail));
    }

    router
}

async fn create_client(ValidJson(request): ValidJson<ClientRequest>) -> String {
    request.client_id
}

async fn list_clients(ValidQuery(query): ValidQuery<ClientQuery>) -> String {
    query.redirect_uri
}

async fn token(ValidJson(request): ValidJson<TokenRequest>) -> Result<&'static str, Failure> {
    match request.transaction_id.as_deref() {
        Some("live") => Ok("token"),
        _ => Err(IdpError::InvalidTransaction.into()),
    }
}

async fn userinfo(headers: HeaderMap) -> Result<&'static str, Failure> {
    let bearer = headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "));

    match bearer {
        Some("valid-token") => Ok("{}"),
        Some(_) => Err(Failure::unclassified("token introspection failed")),
        None => Err(IdpError::NotAuthenticated.into()),
    }
}

async fn fail(Path(kind): Path<String>) -> Result<&'static str, Failure> {
    let failure = match kind.as_str() {
        "validation" => Failure::invalid_argument(vec![
            FieldError::new("clientId", "invalid_client_id"),
            FieldError::new("redirectUri", "invalid_redirect_uri"),
            FieldError::new("scope", "invalid_scope"),
        ]),
        "violation" => Failure::constraint_violation(vec![Violation::new("authorize.nonce", "must not be blank")]),
        "missing-parameter" => Failure::missing_parameter("redirect_uri"),
        "media-type" => Failure::MediaTypeNotAcceptable {
            message: "No acceptable representation".to_string(),
        },
        "type-mismatch" => Failure::TypeMismatch {
            message: "max_age: invalid digit found in string".to_string(),
        },
        "invalid-client" => IdpError::InvalidClient.into(),
        "not-authenticated" => IdpError::NotAuthenticated.into(),
        "invalid-transaction" => IdpError::InvalidTransaction.into(),
        "coded" => IdpError::coded("invalid_nonce").into(),
        "unclassified" => Failure::unclassified("database unreachable"),
        "panic" => panic!("handler exploded"),
        _ => return Ok("ok"),
    };

    Err(failure)
}
