//! Swagger 2.0 document model for SiteHost
//!
//! This crate defines the shape of a Swagger/OpenAPI 2.0 description
//! document as plain serializable records. The types carry no behavior
//! beyond construction and serialization: populate the tree, then render
//! it with [`Document::to_json_pretty`] or serve it through
//! [`document_json`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use sitehost_openapi::{Document, Operation, PathItem, Response};
//!
//! let doc = Document::new("Pet Store", "1.0.0")
//!     .description("A sample API")
//!     .base_path("/api")
//!     .path("/pets", PathItem::new().operation(
//!         "get",
//!         Operation::new()
//!             .summary("List pets")
//!             .response("200", Response::new("A list of pets")),
//!     ));
//!
//! doc.write_to("swagger.json")?;
//! ```
//!
//! Absent fields are omitted from output, reference fields serialize under
//! the literal key `$ref`, and unknown (`x-*`) keys round-trip through the
//! vendor-extension maps on every structural node.

mod document;
mod paths;
mod schema;
mod security;

pub use document::{Contact, Document, DocumentError, ExternalDocs, Info, License, Tag};
pub use paths::{Operation, PathItem};
pub use schema::{Header, Parameter, PartialSchema, Response, Schema, Xml};
pub use security::SecurityScheme;

use bytes::Bytes;
use http::{header, StatusCode};
use http_body_util::Full;

/// Render a document as an HTTP JSON response
///
/// Serialization failure maps to a 500 rather than a panic; the document
/// types themselves contain nothing unserializable, so this arm is only
/// reachable through pathological vendor-extension values.
pub fn document_json(doc: &Document) -> http::Response<Full<Bytes>> {
    match doc.to_json_pretty() {
        Ok(json) => http::Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Full::new(Bytes::from(json)))
            .unwrap(),
        Err(_) => http::Response::builder()
            .status(StatusCode::INTERNAL_SERVER_ERROR)
            .body(Full::new(Bytes::from("Failed to serialize document")))
            .unwrap(),
    }
}
