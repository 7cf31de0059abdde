//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store (method, pattern) → handler registrations
//! - Select the handler for a request and extract its params
//! - Build the request context and invoke the handler
//! - Return an explicit [`NoRouteMatch`] when nothing fits
//!
//! # Design Decisions
//! - Built mutably at startup, then shared read-only behind `Arc`
//! - Per-method routes kept in registration order; the earliest registered
//!   matching pattern wins, so overlapping patterns resolve deterministically
//! - Re-registering a (method, pattern) pair replaces the handler in place
//! - O(1) method lookup, O(n) pattern scan (fine for typical route counts)
//! - Patterns are not validated; one that can never match simply never fires
//! - Dispatch matches the percent-decoded path, so `%2F` separates segments;
//!   `lookup` and the matcher compare whatever string they are given

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use percent_encoding::percent_decode_str;
use thiserror::Error;

use crate::routing::context::RequestContext;
use crate::routing::handler::Handler;
use crate::routing::matcher::{match_pattern, Params};

/// No registered pattern for the method fits the path.
///
/// This is the normal outcome for unroutable requests; the hosting layer
/// answers it with a not-found response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no route for {method} {path}")]
pub struct NoRouteMatch {
    pub method: Method,
    pub path: String,
}

/// Percent-decode a request path before matching.
///
/// Invalid escapes are kept verbatim; non-UTF-8 results are decoded lossily.
pub fn decode_path(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw).decode_utf8_lossy()
}

/// A single registration.
struct Route {
    pattern: String,
    handler: Arc<dyn Handler>,
}

/// Result of route selection, before the handler runs.
pub struct RouteMatch<'a> {
    pub pattern: &'a str,
    pub handler: &'a Arc<dyn Handler>,
    pub params: Params,
}

/// Routing table mapping method and pattern to handlers.
#[derive(Default)]
pub struct RouteTable {
    routes: HashMap<Method, Vec<Route>>,
    /// Methods in first-registration order, for stable listing.
    methods: Vec<Method>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `method` and `pattern`.
    ///
    /// An existing registration for the same pair is overwritten and keeps
    /// its position in the scan order.
    pub fn register<H>(&mut self, method: Method, pattern: impl Into<String>, handler: H)
    where
        H: Handler + 'static,
    {
        let pattern = pattern.into();
        let handler: Arc<dyn Handler> = Arc::new(handler);

        if !self.routes.contains_key(&method) {
            self.methods.push(method.clone());
        }
        let routes = self.routes.entry(method).or_default();

        match routes.iter_mut().find(|r| r.pattern == pattern) {
            Some(existing) => existing.handler = handler,
            None => routes.push(Route { pattern, handler }),
        }
    }

    /// Register a plain function or closure.
    pub fn register_fn<F>(&mut self, method: Method, pattern: impl Into<String>, f: F)
    where
        F: Fn(&mut RequestContext) + Send + Sync + 'static,
    {
        self.register(method, pattern, f);
    }

    pub fn get<H: Handler + 'static>(&mut self, pattern: impl Into<String>, handler: H) {
        self.register(Method::GET, pattern, handler);
    }

    pub fn post<H: Handler + 'static>(&mut self, pattern: impl Into<String>, handler: H) {
        self.register(Method::POST, pattern, handler);
    }

    pub fn put<H: Handler + 'static>(&mut self, pattern: impl Into<String>, handler: H) {
        self.register(Method::PUT, pattern, handler);
    }

    pub fn delete<H: Handler + 'static>(&mut self, pattern: impl Into<String>, handler: H) {
        self.register(Method::DELETE, pattern, handler);
    }

    /// Select the first route for `method` whose pattern fits `path`.
    pub fn lookup(&self, method: &Method, path: &str) -> Option<RouteMatch<'_>> {
        self.routes.get(method)?.iter().find_map(|route| {
            match_pattern(&route.pattern, path).map(|params| RouteMatch {
                pattern: &route.pattern,
                handler: &route.handler,
                params,
            })
        })
    }

    /// Route `request` to its handler and return the finished response.
    pub fn dispatch(&self, request: Request<Body>) -> Result<Response<Body>, NoRouteMatch> {
        let path = decode_path(request.uri().path()).into_owned();

        let Some(found) = self.lookup(request.method(), &path) else {
            return Err(NoRouteMatch {
                method: request.method().clone(),
                path,
            });
        };

        tracing::trace!(
            method = %request.method(),
            path = %path,
            pattern = %found.pattern,
            params = found.params.len(),
            "Route matched"
        );

        let mut ctx = RequestContext::with_path(request, path, found.params);
        found.handler.serve(&mut ctx);
        Ok(ctx.into_response())
    }

    /// Registered (method, pattern) pairs in scan order.
    pub fn routes(&self) -> impl Iterator<Item = (&Method, &str)> {
        self.methods.iter().flat_map(move |method| {
            self.routes
                .get(method)
                .into_iter()
                .flatten()
                .map(move |route| (method, route.pattern.as_str()))
        })
    }

    /// Number of registered routes across all methods.
    pub fn len(&self) -> usize {
        self.routes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for RouteTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.routes()).finish()
    }
}
