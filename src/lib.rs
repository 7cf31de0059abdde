//! Minimal HTTP request router with named path parameters.

pub mod app;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;

pub use config::RouterConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use routing::{Handler, NoRouteMatch, RequestContext, RouteTable};
