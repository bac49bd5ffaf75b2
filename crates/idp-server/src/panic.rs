use std::any::Any;

use axum::response::{IntoResponse, Response};
use idp_core::Failure;

/// Convert a caught handler panic into an unclassified failure
///
/// The payload is kept for the dispatcher's log line only.
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    Failure::unclassified(format!("handler panicked: {detail}")).into_response()
}
