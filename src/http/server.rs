//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the demo handlers
//! - Wire up middleware (tracing, response head listeners)
//! - Bind server to listener and shut down gracefully

use std::future::Future;

use axum::{
    body::Body,
    extract::Path,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::middleware::{OnHeadersLayer, ResponseTime, StaticHeaders};

/// Demo server whose responses pass through on-headers listeners.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            router: Self::build_router(&config),
        }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The response time layer is outermost so its clock covers the
    /// other listeners too.
    fn build_router(config: &ServerConfig) -> Router {
        let static_headers = StaticHeaders::new(config.headers.static_headers.clone());

        let mut router = Router::new()
            .route("/", get(index_handler))
            .route("/status/{code}", any(status_handler))
            .layer(OnHeadersLayer::new(move |_: &Request<Body>| {
                static_headers.listener()
            }));

        if !config.headers.response_time_header.is_empty() {
            let response_time = ResponseTime::new(
                config.headers.response_time_header.clone(),
                config.headers.response_time_digits,
            );
            router = router.layer(OnHeadersLayer::new(move |_: &Request<Body>| {
                response_time.start()
            }));
        }

        router.layer(TraceLayer::new_for_http())
    }

    /// A clone of the router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server, accepting connections until `shutdown` resolves.
    pub async fn run<F>(self, listener: TcpListener, shutdown: F) -> Result<(), std::io::Error>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

async fn index_handler() -> impl IntoResponse {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Answer with whatever status the path asks for.
async fn status_handler(Path(code): Path<u16>) -> Response {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, status.canonical_reason().unwrap_or_default()).into_response(),
        Err(_) => (StatusCode::BAD_REQUEST, "Invalid status code").into_response(),
    }
}
