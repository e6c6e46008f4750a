//! Path items and operations

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::document::ExternalDocs;
use crate::schema::{Parameter, Response};

/// Operations available on a single API path
///
/// One optional slot per HTTP method, mirroring the wire format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PathItem {
    /// External reference to a path item definition
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub put: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<Operation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub patch: Option<Operation>,

    /// Parameters shared by every operation on this path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    /// Vendor-extension keys
    #[serde(flatten)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl PathItem {
    /// Create an empty path item
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the operation for `method` (unknown methods are ignored)
    pub fn operation(mut self, method: &str, operation: Operation) -> Self {
        match method.to_uppercase().as_str() {
            "GET" => self.get = Some(operation),
            "PUT" => self.put = Some(operation),
            "POST" => self.post = Some(operation),
            "DELETE" => self.delete = Some(operation),
            "OPTIONS" => self.options = Some(operation),
            "HEAD" => self.head = Some(operation),
            "PATCH" => self.patch = Some(operation),
            _ => {}
        }
        self
    }
}

/// A single API operation on a path
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    /// Tags for API documentation grouping
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,

    /// Short summary of what the operation does
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Verbose explanation of the operation behavior
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Additional external documentation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocs>,

    /// Unique identifier of the operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    /// MIME types the operation consumes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumes: Option<Vec<String>>,

    /// MIME types the operation produces
    #[serde(skip_serializing_if = "Option::is_none")]
    pub produces: Option<Vec<String>>,

    /// Applicable parameters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,

    /// Possible responses, keyed by status code or `default`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responses: Option<HashMap<String, Response>>,

    /// Transfer protocols for this operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemes: Option<Vec<String>>,

    /// Whether the operation is deprecated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,

    /// Security requirements for this operation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<Vec<HashMap<String, Vec<String>>>>,

    /// Vendor-extension keys
    #[serde(flatten)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl Operation {
    /// Create an empty operation
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the summary
    pub fn summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Set the operation identifier
    pub fn operation_id(mut self, id: impl Into<String>) -> Self {
        self.operation_id = Some(id.into());
        self
    }

    /// Add a tag
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.get_or_insert_with(Vec::new).push(tag.into());
        self
    }

    /// Add a parameter
    pub fn parameter(mut self, parameter: Parameter) -> Self {
        self.parameters
            .get_or_insert_with(Vec::new)
            .push(parameter);
        self
    }

    /// Add a response for a status code
    pub fn response(mut self, status: impl Into<String>, response: Response) -> Self {
        self.responses
            .get_or_insert_with(HashMap::new)
            .insert(status.into(), response);
        self
    }

    /// Mark the operation as deprecated
    pub fn deprecated(mut self) -> Self {
        self.deprecated = Some(true);
        self
    }
}
