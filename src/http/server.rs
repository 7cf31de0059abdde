//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with the route table as its fallback service
//! - Wire up middleware (request ID, tracing, timeout)
//! - Bind server to listener and serve until shutdown
//! - Answer unroutable requests with 404
//! - Observability (metrics, correlation IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    Router,
};
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::{ListenerConfig, RouterConfig};
use crate::http::request::{request_id, MakeRequestUuidV4};
use crate::observability::metrics;
use crate::routing::RouteTable;

/// Body sent when no route matches.
pub const NOT_FOUND_BODY: &str = "404 page not found\n";

/// Error type for serving.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: String,
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state injected into the dispatch handler.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RouteTable>,
}

/// HTTP server hosting a [`RouteTable`].
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a server for a fully registered table.
    ///
    /// The table is frozen here; no routes can be added while serving.
    pub fn new(config: RouterConfig, table: RouteTable) -> Self {
        tracing::info!(routes = table.len(), "Route table frozen");
        for (method, pattern) in table.routes() {
            tracing::debug!(method = %method, pattern = %pattern, "Route registered");
        }

        let state = AppState {
            table: Arc::new(table),
        };
        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .fallback(dispatch_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    tracing::info_span!(
                        "request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = request_id(request).unwrap_or("unknown"),
                    )
                }),
            )
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV4))
    }

    /// The fully layered Axum router, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until `shutdown` fires, then drain in-flight requests.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), ServerError> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Bind a TCP listener to the configured address.
pub async fn bind_listener(config: &ListenerConfig) -> Result<TcpListener, ServerError> {
    TcpListener::bind(&config.bind_address)
        .await
        .map_err(|source| ServerError::Bind {
            address: config.bind_address.clone(),
            source,
        })
}

/// Fallback handler: every request goes through the route table.
async fn dispatch_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let method = request.method().to_string();

    match state.table.dispatch(request) {
        Ok(response) => {
            metrics::record_request(&method, response.status().as_u16(), start);
            response
        }
        Err(no_match) => {
            tracing::debug!(method = %no_match.method, path = %no_match.path, "No route matched");
            metrics::record_not_found(&method);
            metrics::record_request(&method, StatusCode::NOT_FOUND.as_u16(), start);
            not_found()
        }
    }
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8"),
            (header::X_CONTENT_TYPE_OPTIONS, "nosniff"),
        ],
        NOT_FOUND_BODY,
    )
        .into_response()
}
