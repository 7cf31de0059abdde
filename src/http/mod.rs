//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware layers)
//!     → request.rs (assign x-request-id)
//!     → server.rs fallback → RouteTable::dispatch
//!     → handler response, or 404 page not found
//!     → Send to client
//! ```

pub mod request;
pub mod server;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use server::{bind_listener, HttpServer, ServerError, NOT_FOUND_BODY};
