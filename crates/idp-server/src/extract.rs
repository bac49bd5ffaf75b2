//! Validating extractors that reject with a [`Failure`]
//!
//! Rejections flow through the error dispatcher like any handler failure.

use std::collections::HashMap;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{FromRequest, FromRequestParts, Query, Request};
use http::request::Parts;
use idp_core::{Failure, FieldError, Violation};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

/// JSON request body that must pass `validator` checks
///
/// Field errors are reported sorted by field name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(json_failure)?;

        value
            .validate()
            .map_err(|errors| Failure::invalid_argument(field_errors(&errors)))?;

        Ok(Self(value))
    }
}

/// Query string that must pass `validator` checks
///
/// Violations are reported sorted by parameter name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(query_failure)?;

        value
            .validate()
            .map_err(|errors| Failure::constraint_violation(violations(&errors)))?;

        Ok(Self(value))
    }
}

fn json_failure(rejection: JsonRejection) -> Failure {
    match rejection {
        JsonRejection::MissingJsonContentType(e) => Failure::MediaTypeNotAcceptable { message: e.body_text() },
        other => Failure::unclassified(other.body_text()),
    }
}

fn query_failure(rejection: QueryRejection) -> Failure {
    let message = rejection.body_text();
    match missing_field(&message) {
        Some(name) => Failure::missing_parameter(name),
        None => Failure::TypeMismatch { message },
    }
}

/// Extract `name` from serde's "missing field `name`" message
fn missing_field(message: &str) -> Option<&str> {
    let rest = message.split_once("missing field `")?.1;
    rest.split_once('`').map(|(name, _)| name)
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    sorted_by_field(errors.field_errors())
        .map(|(field, error)| FieldError::new(field, message_of(error)))
        .collect()
}

fn violations(errors: &ValidationErrors) -> Vec<Violation> {
    sorted_by_field(errors.field_errors())
        .map(|(field, error)| Violation::new(field, message_of(error)))
        .collect()
}

fn sorted_by_field<'a, K: AsRef<str>>(
    errors: HashMap<K, &'a Vec<ValidationError>>,
) -> impl Iterator<Item = (String, &'a ValidationError)> {
    let mut fields: Vec<_> = errors
        .into_iter()
        .map(|(field, errors)| (field.as_ref().to_string(), errors))
        .collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| errors.iter().map(move |error| (field.clone(), error)))
}

/// Validation messages are error-code tokens; fall back to the code
fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map_or_else(|| error.code.to_string(), ToString::to_string)
}
