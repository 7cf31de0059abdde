//! Handler capability and wrappers.
//!
//! # Design Decisions
//! - One method, synchronous: the table calls it and builds the response
//!   from the context once it returns
//! - Any `Fn(&mut RequestContext)` closure is a handler
//! - Wrappers ([`Logged`], [`Metered`]) implement the same trait, so the
//!   table never knows whether a handler is decorated

use std::time::Instant;

use crate::observability::metrics;
use crate::routing::context::RequestContext;

/// Something that can serve a matched request.
pub trait Handler: Send + Sync {
    fn serve(&self, ctx: &mut RequestContext);
}

impl<F> Handler for F
where
    F: Fn(&mut RequestContext) + Send + Sync,
{
    fn serve(&self, ctx: &mut RequestContext) {
        self(ctx)
    }
}

/// Logs method, URI and elapsed time after the inner handler returns.
#[derive(Debug, Clone)]
pub struct Logged<H> {
    inner: H,
}

impl<H: Handler> Logged<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }
}

impl<H: Handler> Handler for Logged<H> {
    fn serve(&self, ctx: &mut RequestContext) {
        let start = Instant::now();
        self.inner.serve(ctx);
        tracing::info!(
            method = %ctx.method(),
            uri = %ctx.request().uri(),
            status = ctx.response.status().as_u16(),
            elapsed = ?start.elapsed(),
            "Handled request"
        );
    }
}

/// Records handler latency under a route label.
#[derive(Debug, Clone)]
pub struct Metered<H> {
    route: String,
    inner: H,
}

impl<H: Handler> Metered<H> {
    pub fn new(route: impl Into<String>, inner: H) -> Self {
        Self {
            route: route.into(),
            inner,
        }
    }
}

impl<H: Handler> Handler for Metered<H> {
    fn serve(&self, ctx: &mut RequestContext) {
        let start = Instant::now();
        self.inner.serve(ctx);
        metrics::record_handler(&self.route, start);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::Params;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn context() -> RequestContext {
        let request = Request::builder().uri("/ping").body(Body::empty()).unwrap();
        RequestContext::new(request, Params::new())
    }

    #[test]
    fn test_closure_is_handler() {
        let handler = |ctx: &mut RequestContext| {
            write!(ctx.response, "pong");
        };
        let mut ctx = context();
        handler.serve(&mut ctx);
        assert_eq!(ctx.response.body(), b"pong");
    }

    #[test]
    fn test_wrappers_delegate_to_inner() {
        let calls = AtomicUsize::new(0);
        let inner = |ctx: &mut RequestContext| {
            calls.fetch_add(1, Ordering::SeqCst);
            ctx.response.set_status(StatusCode::ACCEPTED);
        };
        let handler = Logged::new(Metered::new("/ping", inner));

        let mut ctx = context();
        handler.serve(&mut ctx);
        handler.serve(&mut ctx);

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(ctx.response.status(), StatusCode::ACCEPTED);
    }
}
