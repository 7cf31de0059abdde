//! Per-request state handed to handlers.
//!
//! A [`RequestContext`] is built by the [`RouteTable`](crate::routing::RouteTable) once a pattern matches,
//! moved into the handler call, and consumed into the HTTP response when the
//! handler returns. It is never shared between requests.

use std::fmt;

use axum::body::Body;
use axum::http::header::{self, HeaderName, HeaderValue};
use axum::http::{HeaderMap, Method, Request, Response, StatusCode};

use crate::routing::matcher::Params;
use crate::routing::router::decode_path;

/// Content type used when the handler does not set one.
const DEFAULT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Buffered response a handler writes into.
///
/// `write!`/`writeln!` go through the infallible inherent `write_fmt`, so
/// handlers have no error to handle. [`fmt::Write`] is also implemented for
/// generic formatting code.
#[derive(Debug)]
pub struct ResponseWriter {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ResponseWriter {
    pub fn new() -> Self {
        Self {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: Vec::new(),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn insert_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    /// Append formatted text to the body.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) {
        let _ = fmt::Write::write_fmt(self, args);
    }

    /// Append raw bytes to the body.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.body.extend_from_slice(bytes);
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Finish the response.
    pub fn into_response(self) -> Response<Body> {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
            .headers_mut()
            .entry(header::CONTENT_TYPE)
            .or_insert(HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        response
    }
}

impl Default for ResponseWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Write for ResponseWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.body.extend_from_slice(s.as_bytes());
        Ok(())
    }
}

/// Context for a single dispatched request.
#[derive(Debug)]
pub struct RequestContext {
    params: Params,
    path: String,
    request: Request<Body>,
    /// Response under construction.
    pub response: ResponseWriter,
}

impl RequestContext {
    /// Context whose path is the request's percent-decoded path.
    pub fn new(request: Request<Body>, params: Params) -> Self {
        let path = decode_path(request.uri().path()).into_owned();
        Self::with_path(request, path, params)
    }

    /// Context for a request that was matched against `path`.
    pub fn with_path(request: Request<Body>, path: String, params: Params) -> Self {
        Self {
            params,
            path,
            request,
            response: ResponseWriter::new(),
        }
    }

    /// Captured value for the named segment.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    pub fn method(&self) -> &Method {
        self.request.method()
    }

    /// Decoded path the route was matched against.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The original request, untouched by routing.
    pub fn request(&self) -> &Request<Body> {
        &self.request
    }

    pub fn into_response(self) -> Response<Body> {
        self.response.into_response()
    }
}
