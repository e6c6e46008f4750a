//! Response type for the middleware pipeline

use bytes::Bytes;
use http::{header, StatusCode};
use http_body_util::Full;

/// HTTP response type
pub type Response = http::Response<Full<Bytes>>;

/// Build a 200 response carrying a resolved resource payload
///
/// The `http::Response` builder only fails on malformed header values;
/// the content types used here are fixed strings, so the unwrap is
/// unreachable.
pub fn resource(bytes: Bytes, content_type: &'static str) -> Response {
    http::Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .body(Full::new(bytes))
        .unwrap()
}
