//! Security scheme definitions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Entry in the document's `securityDefinitions` map
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScheme {
    /// Scheme type (`basic`, `apiKey`, `oauth2`)
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub scheme_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Header or query parameter name, for `apiKey`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Key location (`query` or `header`), for `apiKey`
    #[serde(rename = "in", skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// OAuth2 flow (`implicit`, `password`, `application`, `accessCode`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,

    /// Available OAuth2 scopes, name to description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<HashMap<String, String>>,

    /// Vendor-extension keys
    #[serde(flatten)]
    pub extensions: HashMap<String, serde_json::Value>,
}

impl SecurityScheme {
    /// Create a basic authentication scheme
    pub fn basic() -> Self {
        Self {
            scheme_type: Some("basic".to_string()),
            ..Default::default()
        }
    }

    /// Create an API key scheme
    pub fn api_key(name: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            scheme_type: Some("apiKey".to_string()),
            name: Some(name.into()),
            location: Some(location.into()),
            ..Default::default()
        }
    }

    /// Create an OAuth2 scheme with the given flow
    pub fn oauth2(flow: impl Into<String>, scopes: HashMap<String, String>) -> Self {
        Self {
            scheme_type: Some("oauth2".to_string()),
            flow: Some(flow.into()),
            scopes: Some(scopes),
            ..Default::default()
        }
    }

    /// Set the description
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Set the authorization URL (`implicit` and `accessCode` flows)
    pub fn authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = Some(url.into());
        self
    }

    /// Set the token URL (`password`, `application` and `accessCode` flows)
    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }
}
