//! Per-mount configuration
//!
//! A [`SiteOptions`] value is built once at startup, wrapped in an `Arc`
//! by the middleware, and treated as read-only for the life of the
//! process.

use bytes::Bytes;
use std::path::PathBuf;
use std::sync::Arc;

use sitehost_openapi::Info;

use crate::request::Request;

/// Custom resource resolution hook
///
/// Called with the normalized resource name and the embedded payload, if
/// any. The return value is authoritative: it may override the embedded
/// bytes, supply bytes for a name with no embedded match, or veto the
/// embedded match by returning `None`.
pub type ResolveResource = Arc<dyn Fn(&str, Option<Bytes>) -> Option<Bytes> + Send + Sync>;

/// Custom host-name hook, overriding the advertised host in the served
/// document
pub type CustomHost = Arc<dyn Fn(&Request) -> String + Send + Sync>;

/// Configuration for one documentation-site mount
#[derive(Clone)]
pub struct SiteOptions {
    /// Base path of the described API
    pub api_base_path: String,
    /// Document title
    pub title: String,
    /// Document description
    pub description: String,
    /// Optional custom resource resolution hook
    pub resolve_custom_resource: Option<ResolveResource>,
    /// Optional custom host-name hook
    pub custom_host: Option<CustomHost>,
    /// External XML documentation file consumed by the schema generator
    pub xml_document_path: Option<PathBuf>,
    /// Output document file name
    pub json_name: String,
    /// Type names to force-include in the generated schema
    pub force_schemas: Vec<String>,
}

impl SiteOptions {
    /// Create options for a mount describing the API at `api_base_path`
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        api_base_path: impl Into<String>,
    ) -> Self {
        Self {
            api_base_path: api_base_path.into(),
            title: title.into(),
            description: description.into(),
            resolve_custom_resource: None,
            custom_host: None,
            xml_document_path: None,
            json_name: "swagger.json".to_string(),
            force_schemas: Vec::new(),
        }
    }

    /// Install a custom resource resolution hook
    pub fn resolve_custom_resource<F>(mut self, hook: F) -> Self
    where
        F: Fn(&str, Option<Bytes>) -> Option<Bytes> + Send + Sync + 'static,
    {
        self.resolve_custom_resource = Some(Arc::new(hook));
        self
    }

    /// Install a custom host-name hook
    pub fn custom_host<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Request) -> String + Send + Sync + 'static,
    {
        self.custom_host = Some(Arc::new(hook));
        self
    }

    /// Set the external XML documentation file path
    pub fn xml_document_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.xml_document_path = Some(path.into());
        self
    }

    /// Set the output document file name
    pub fn json_name(mut self, name: impl Into<String>) -> Self {
        self.json_name = name.into();
        self
    }

    /// Force a type name into the generated schema
    pub fn force_schema(mut self, name: impl Into<String>) -> Self {
        self.force_schemas.push(name.into());
        self
    }

    /// Seed document metadata from the configured title and description
    pub fn to_info(&self, version: impl Into<String>) -> Info {
        Info::new(self.title.clone(), version).description(self.description.clone())
    }
}

impl std::fmt::Debug for SiteOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteOptions")
            .field("api_base_path", &self.api_base_path)
            .field("title", &self.title)
            .field("description", &self.description)
            .field(
                "resolve_custom_resource",
                &self.resolve_custom_resource.is_some(),
            )
            .field("custom_host", &self.custom_host.is_some())
            .field("xml_document_path", &self.xml_document_path)
            .field("json_name", &self.json_name)
            .field("force_schemas", &self.force_schemas)
            .finish()
    }
}
