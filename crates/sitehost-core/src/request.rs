//! Request type for the middleware pipeline

use bytes::Bytes;
use http::{request::Parts, Extensions, HeaderMap, Method, Uri, Version};

/// HTTP request wrapper
///
/// Carries the parts of an incoming request the pipeline needs. The
/// resolver itself only reads the path; the rest of the surface exists for
/// the configured hooks and for downstream handlers.
pub struct Request {
    pub(crate) parts: Parts,
    pub(crate) body: Option<Bytes>,
}

impl Request {
    /// Create a request from parts and a buffered body
    pub fn new(parts: Parts, body: Bytes) -> Self {
        Self {
            parts,
            body: Some(body),
        }
    }

    /// Create a request from an `http::Request` with a buffered body
    pub fn from_http(req: http::Request<Bytes>) -> Self {
        let (parts, body) = req.into_parts();
        Self::new(parts, body)
    }

    /// Get the HTTP method
    pub fn method(&self) -> &Method {
        &self.parts.method
    }

    /// Get the URI
    pub fn uri(&self) -> &Uri {
        &self.parts.uri
    }

    /// Get the HTTP version
    pub fn version(&self) -> Version {
        self.parts.version
    }

    /// Get the headers
    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    /// Get request extensions
    pub fn extensions(&self) -> &Extensions {
        &self.parts.extensions
    }

    /// Get the request path
    pub fn path(&self) -> &str {
        self.parts.uri.path()
    }

    /// Get the query string
    pub fn query_string(&self) -> Option<&str> {
        self.parts.uri.query()
    }

    /// Take the body bytes (can only be called once)
    pub fn take_body(&mut self) -> Option<Bytes> {
        self.body.take()
    }
}

impl std::fmt::Debug for Request {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Request")
            .field("method", &self.parts.method)
            .field("uri", &self.parts.uri)
            .field("version", &self.parts.version)
            .finish()
    }
}
