//! Swagger 2.0 document root and metadata records
//!
//! The document tree is a set of plain value types: construct, populate,
//! serialize. Absent fields are omitted from output, and every structural
//! node accepts vendor-extension keys (`x-*`) through a flattened catch-all
//! map.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::paths::PathItem;
use crate::schema::{Parameter, Response, Schema};
use crate::security::SecurityScheme;

/// Error produced when rendering or writing a document
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The document could not be serialized to JSON
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written
    #[error("failed to write document: {0}")]
    Io(#[from] std::io::Error),
}

/// Root of a Swagger 2.0 document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Swagger version, always `"2.0"`
    pub swagger: String,

    /// API metadata
    pub info: Info,

    /// Host name (and optional port) serving the API
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Base path on which the API is served, relative to `host`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<String>,

    /// Transfer protocols of the API (`http`, `https`, `ws`, `wss`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,

    /// MIME types the API consumes by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    /// MIME types the API produces by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,

    /// Available paths and their operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<HashMap<String, PathItem>>,

    /// Reusable data type definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<HashMap<String, Schema>>,

    /// Reusable parameter definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Parameter>>,

    /// Reusable response definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<HashMap<String, Response>>,

    /// Security scheme definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_definitions: Option<HashMap<String, SecurityScheme>>,

    /// Document-wide security requirements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<HashMap<String, Vec<String>>>>,

    /// Tags used to group operations
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<Tag>>,

    /// External documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    /// Vendor-extension keys
    #[serde(flatten)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl Document {
    /// Create an empty Swagger 2.0 document with the given title and version
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            swagger: "2.0".to_string(),
            info: Info::new(title, version),
            host: None,
            base_path: None,
            schemes: None,
            consumes: None,
            produces: None,
            paths: None,
            definitions: None,
            parameters: None,
            responses: None,
            security_definitions: None,
            security: None,
            tags: None,
            external_docs: None,
            extensions: HashMap::new(),
        }
    }

    /// Set the API description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.info.description = Some(desc.into());
        self
    }

    /// Set the host name
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the base path
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = Some(base_path.into());
        self
    }

    /// Add a transfer scheme
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.schemes.get_or_insert_with(Vec::new).push(scheme.into());
        self
    }

    /// Add a path item
    pub fn path(mut self, path: impl Into<String>, item: PathItem) -> Self {
        self.paths
            .get_or_insert_with(HashMap::new)
            .insert(path.into(), item);
        self
    }

    /// Add a named type definition
    pub fn definition(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.definitions
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), schema);
        self
    }

    /// Add a security scheme definition
    pub fn security_definition(
        mut self,
        name: impl Into<String>,
        scheme: SecurityScheme,
    ) -> Self {
        self.security_definitions
            .get_or_insert_with(HashMap::new)
            .insert(name.into(), scheme);
        self
    }

    /// Add a document-wide security requirement
    pub fn security_requirement(
        mut self,
        name: impl Into<String>,
        scopes: Vec<String>,
    ) -> Self {
        let mut req = HashMap::new();
        req.insert(name.into(), scopes);
        self.security.get_or_insert_with(Vec::new).push(req);
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: Tag) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag);
        self
    }

    /// Set external documentation
    pub fn external_docs(mut self, docs: ExternalDocs) -> Self {
        self.external_docs = Some(docs);
        self
    }

    /// Convert to a JSON value
    pub fn to_json(&self) -> Result<serde_json::Value, DocumentError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Convert to a pretty-printed JSON string
    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the document as pretty-printed JSON to `path`
    ///
    /// The file name is conventionally the configured output document name
    /// (`swagger.json` unless overridden).
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let json = self.to_json_pretty()?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("", "")
    }
}

/// API metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    /// API version string
    pub version: String,

    /// API title
    pub title: String,

    /// API description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Terms of service URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_service: Option<String>,

    /// Contact information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,

    /// License information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,

    /// Vendor-extension keys
    #[serde(flatten)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl Info {
    /// Create new API metadata
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            title: title.into(),
            description: None,
            terms_of_service: None,
            contact: None,
            license: None,
            extensions: HashMap::new(),
        }
    }

    /// Set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Set the terms of service URL
    pub fn terms_of_service(mut self, url: impl Into<String>) -> Self {
        self.terms_of_service = Some(url.into());
        self
    }

    /// Set contact information
    pub fn contact(mut self, contact: Contact) -> Self {
        self.contact = Some(contact);
        self
    }

    /// Set license information
    pub fn license(mut self, license: License) -> Self {
        self.license = Some(license);
        self
    }
}

/// Contact information
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Contact {
    /// Contact name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Contact URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Contact {
    /// Create empty contact information
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the email address
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}

/// License information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    /// License name
    pub name: String,

    /// License URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl License {
    /// Create a new license
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: None,
        }
    }

    /// Set the URL
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// Tag for grouping operations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    /// Tag name
    pub name: String,

    /// Tag description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// External documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    /// Vendor-extension keys
    #[serde(flatten)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl Tag {
    /// Create a new tag
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            external_docs: None,
            extensions: HashMap::new(),
        }
    }

    /// Set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Set external documentation
    pub fn external_docs(mut self, docs: ExternalDocs) -> Self {
        self.external_docs = Some(docs);
        self
    }
}

/// External documentation reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalDocs {
    /// Description of the referenced documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// URL of the referenced documentation
    pub url: String,
}

impl ExternalDocs {
    /// Create a new external documentation reference
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            description: None,
            url: url.into(),
        }
    }

    /// Set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }
}
