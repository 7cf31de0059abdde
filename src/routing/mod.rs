//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Application setup
//!     → router.rs (register method + pattern → handler)
//!     → RouteTable frozen in Arc before serving
//!
//! Incoming Request (method, path)
//!     → router.rs (per-method route scan, registration order)
//!     → matcher.rs (segment-wise pattern match, param capture)
//!     → context.rs (RequestContext: params + request + response writer)
//!     → handler.rs (Handler::serve)
//!     → Response, or NoRouteMatch for the hosting layer to answer 404
//! ```
//!
//! # Design Decisions
//! - Table immutable at runtime (no locks on the dispatch path)
//! - Only single-segment named captures (`:name`), no wildcards or regex
//! - Deterministic: same input always selects the same route
//! - First match wins (ordered by registration)

pub mod context;
pub mod handler;
pub mod matcher;
pub mod router;

pub use context::{RequestContext, ResponseWriter};
pub use handler::{Handler, Logged, Metered};
pub use matcher::{match_pattern, Params, CAPTURE_MARKER};
pub use router::{NoRouteMatch, RouteMatch, RouteTable};
