//! Middleware for the documentation-site mount
//!
//! [`SiteHost`] is the resolver itself; the `layer` module carries the
//! pipeline seam it plugs into.
//!
//! # Example
//!
//! ```rust,ignore
//! use sitehost_core::{LayerStack, SiteHost, SiteOptions};
//!
//! let mut stack = LayerStack::new();
//! stack.push(Box::new(SiteHost::bundled(SiteOptions::new(
//!     "Orders API",
//!     "Order management endpoints",
//!     "/api",
//! ))));
//! ```

mod layer;
mod site_host;

pub use layer::{BoxedNext, LayerStack, MiddlewareLayer, NextService};
pub use site_host::SiteHost;
