mod extract;
mod failure;
mod panic;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use idp_config::Config;
use idp_core::{MessageCatalog, MessageResolver};
use idp_dispatch::{ErrorDispatcher, SurfaceClassifier};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

pub use extract::{ValidJson, ValidQuery};

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build a server exposing only the built-in routes
    ///
    /// # Errors
    ///
    /// Returns an error if the message catalog cannot be loaded
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        Self::with_routes(config, Router::new())
    }

    /// Build a server around the given API routes
    ///
    /// Every failure the routes raise, including panics, is rendered by
    /// the error dispatcher according to the request's path.
    ///
    /// # Errors
    ///
    /// Returns an error if the message catalog cannot be loaded
    pub fn with_routes(config: &Config, routes: Router) -> anyhow::Result<Self> {
        let dispatcher = build_dispatcher(config)?;

        let mut app = routes;

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(liveness));
        }

        // Apply middleware layers (innermost first)

        // Panics become unclassified failures before the dispatcher sees them
        app = app.layer(CatchPanicLayer::custom(panic::panic_response));

        app = app.layer(axum::middleware::from_fn(move |req, next| {
            let dispatcher = dispatcher.clone();
            async move { failure::failure_middleware(dispatcher, req, next).await }
        }));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Ok(Self {
            router: app,
            listen_address: config.server.listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Override the configured listen address
    #[must_use]
    pub fn with_listen_address(mut self, listen_address: SocketAddr) -> Self {
        self.listen_address = listen_address;
        self
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Liveness probe; answers as long as the listener accepts requests
async fn liveness() -> &'static str {
    "ok"
}

/// Build the dispatcher from the classification rules and message sources
fn build_dispatcher(config: &Config) -> anyhow::Result<ErrorDispatcher> {
    let mut catalog = MessageCatalog::builtin();
    if let Some(ref path) = config.messages.path {
        catalog = catalog.with_file(path)?;
    }
    let catalog = catalog.with_entries(config.messages.entries.clone());
    tracing::debug!(messages = catalog.len(), "message catalog loaded");

    let messages: Arc<dyn MessageResolver> = Arc::new(catalog);
    Ok(ErrorDispatcher::new(SurfaceClassifier::from(&config.dispatch), messages))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn health_route_is_mounted() {
        let router = Server::new(&Config::default()).unwrap().into_router();

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"ok");
    }

    #[tokio::test]
    async fn health_route_follows_configured_path() {
        let mut config = Config::default();
        config.server.health.path = "/actuator/health".to_string();
        let router = Server::new(&config).unwrap().into_router();

        let response = router
            .clone()
            .oneshot(Request::get("/actuator/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_routes_are_untouched() {
        let router = Server::new(&Config::default()).unwrap().into_router();

        let response = router
            .oneshot(Request::get("/oauth/nowhere").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn missing_message_bundle_fails_startup() {
        let mut config = Config::default();
        config.messages.path = Some("/nonexistent/messages.toml".into());

        assert!(Server::new(&config).is_err());
    }

    #[test]
    fn listen_address_can_be_overridden() {
        let addr = SocketAddr::from(([127, 0, 0, 1], 9999));
        let server = Server::new(&Config::default()).unwrap().with_listen_address(addr);
        assert_eq!(server.listen_address(), addr);
    }
}
