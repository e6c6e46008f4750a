//! # SiteHost Core
//!
//! Middleware that serves a bundled API-documentation site from embedded
//! resources. Requests under the mount are resolved against a read-only
//! [`ResourceTable`]; a hit is written back with an inferred content type
//! and anything unresolved is delegated untouched to the next handler in
//! the pipeline.
//!
//! The description document itself is modeled by the `sitehost-openapi`
//! crate and can be mounted on the middleware to be served under the
//! configured output name.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sitehost_core::{SiteHost, SiteOptions};
//! use sitehost_openapi::Document;
//!
//! let options = SiteOptions::new("Orders API", "Order management endpoints", "/api");
//! let document = Document::new("Orders API", "1.0.0").base_path("/api");
//!
//! let host = SiteHost::bundled(options).with_document(document);
//! // push `host` onto the application's middleware stack
//! ```

mod mime;
mod options;
mod request;
mod resources;
mod response;

pub mod middleware;

pub use mime::mime_type_for_path;
pub use options::{CustomHost, ResolveResource, SiteOptions};
pub use request::Request;
pub use resources::{DefaultSite, EmbeddedSite, MemoryResources, ResourceTable, SiteAssets};
pub use response::{resource, Response};

pub use middleware::{BoxedNext, LayerStack, MiddlewareLayer, NextService, SiteHost};
