//! Documentation-site resolver middleware

use bytes::Bytes;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use sitehost_openapi::Document;

use super::layer::{BoxedNext, MiddlewareLayer};
use crate::mime::mime_type_for_path;
use crate::options::SiteOptions;
use crate::request::Request;
use crate::resources::{DefaultSite, ResourceTable};
use crate::response::{self, Response};

/// Entry document served for the bare mount path
const DEFAULT_DOCUMENT: &str = "index.html";

/// Middleware serving an embedded documentation site
///
/// Each request path is normalized and resolved against the injected
/// resource table; a hit is written back with an inferred content type,
/// anything else is delegated untouched to the next handler. Resolution
/// cannot fail: a miss is a delegation, not an error.
///
/// # Example
///
/// ```rust,ignore
/// use sitehost_core::{SiteHost, SiteOptions};
///
/// let host = SiteHost::bundled(SiteOptions::new(
///     "Orders API",
///     "Order management endpoints",
///     "/api",
/// ))
/// .with_document(document);
/// stack.push(Box::new(host));
/// ```
pub struct SiteHost<T> {
    options: Arc<SiteOptions>,
    table: Arc<T>,
    document: Option<Arc<Document>>,
}

impl<T> Clone for SiteHost<T> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            table: self.table.clone(),
            document: self.document.clone(),
        }
    }
}

impl SiteHost<DefaultSite> {
    /// Create a site host over the UI bundle shipped with this crate
    pub fn bundled(options: SiteOptions) -> Self {
        Self::new(options, DefaultSite::new())
    }
}

impl<T: ResourceTable> SiteHost<T> {
    /// Create a site host over an injected resource table
    pub fn new(options: SiteOptions, table: T) -> Self {
        Self {
            options: Arc::new(options),
            table: Arc::new(table),
            document: None,
        }
    }

    /// Mount a description document, served under the configured
    /// output name (`swagger.json` unless overridden)
    pub fn with_document(mut self, document: Document) -> Self {
        self.document = Some(Arc::new(document));
        self
    }

    /// Resolve one request to a response, or delegate
    async fn resolve(self, req: Request, next: BoxedNext) -> Response {
        let name = normalize_path(req.path());

        if let Some(document) = &self.document {
            if name == self.options.json_name {
                match self.render_document(document, &req) {
                    Ok(json) => {
                        tracing::debug!(name = %name, "serving description document");
                        return response::resource(json, "application/json");
                    }
                    // Treat an unserializable document as an absent
                    // resource and keep resolving.
                    Err(err) => {
                        tracing::warn!(name = %name, error = %err, "failed to render description document");
                    }
                }
            }
        }

        let embedded = self.table.get(&name);
        let payload = match &self.options.resolve_custom_resource {
            Some(hook) => hook(&name, embedded),
            None => embedded,
        };

        match payload {
            Some(bytes) => {
                let content_type = mime_type_for_path(&name);
                tracing::debug!(name = %name, content_type, "serving embedded resource");
                response::resource(bytes, content_type)
            }
            None => {
                tracing::debug!(name = %name, "no resource resolved, delegating");
                next(req).await
            }
        }
    }

    fn render_document(
        &self,
        document: &Document,
        req: &Request,
    ) -> Result<Bytes, sitehost_openapi::DocumentError> {
        let json = match &self.options.custom_host {
            Some(hook) => {
                let mut document = document.clone();
                document.host = Some(hook(req));
                document.to_json_pretty()?
            }
            None => document.to_json_pretty()?,
        };
        Ok(Bytes::from(json))
    }
}

impl<T: ResourceTable + 'static> MiddlewareLayer for SiteHost<T> {
    fn call(
        &self,
        req: Request,
        next: BoxedNext,
    ) -> Pin<Box<dyn Future<Output = Response> + Send + 'static>> {
        Box::pin(self.clone().resolve(req, next))
    }

    fn clone_box(&self) -> Box<dyn MiddlewareLayer> {
        Box::new(self.clone())
    }
}

/// Normalize a request path to a resource name
///
/// Leading and trailing separators are stripped and the empty path maps to
/// the entry document. The remaining slash-separated segments are already
/// the bundled resource's logical name.
fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        DEFAULT_DOCUMENT.to_string()
    } else {
        trimmed.to_string()
    }
}
