use axum::extract::{OriginalUri, Request};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use idp_core::RaisedFailure;
use idp_dispatch::ErrorDispatcher;

/// Replace responses carrying a raised failure with the dispatcher's rendering
///
/// The path is captured before the request is handed on, so the failure
/// itself never needs to know where it came from.
pub async fn failure_middleware(dispatcher: ErrorDispatcher, request: Request, next: Next) -> Response {
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map_or_else(|| request.uri().path(), |uri| uri.path())
        .to_string();

    let response = next.run(request).await;

    match response.extensions().get::<RaisedFailure>() {
        Some(raised) => dispatcher.dispatch(raised, &path).into_response(),
        None => response,
    }
}
