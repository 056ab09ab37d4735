use crate::keyed::Keyed;
use serde::Serialize;
use serde_json::Value;

/// Parsed RAML document before adaptation: the flat tree the parser emits,
/// with one [`RawResource`] per path/method pair in document order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawDocument {
    pub title: String,
    pub version: Option<String>,
    pub base_uri: Option<String>,
    /// Document-level `mediaType` default, if declared.
    pub media_type: Option<String>,
    pub resources: Vec<RawResource>,
}

/// One HTTP method bound to one path.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawResource {
    /// Absolute path, nested segments joined (`/users/{id}`).
    pub path: String,
    /// Method verb as written in the document (typically lowercase).
    pub method: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// Active content type: the document `mediaType` default, else the
    /// first mime type declared in this method's body.
    pub content_type: Option<String>,
    pub query_params: Vec<RawParameter>,
    pub uri_params: Vec<RawParameter>,
    pub base_uri_params: Vec<RawParameter>,
    pub form_params: Vec<RawParameter>,
    pub headers: Vec<RawParameter>,
    pub body: Vec<RawBody>,
    pub responses: Vec<RawResponse>,
}

/// A named parameter descriptor (query/uri/form/header).
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawParameter {
    pub name: String,
    pub display_name: Option<String>,
    pub description: Option<String>,
    /// RAML `type` attribute; defaults to `string` when omitted.
    pub param_type: String,
    pub required: bool,
    pub default: Option<Value>,
    pub example: Option<Value>,
}

/// One body variant of a request or response, keyed by mime type.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawBody {
    pub mime_type: String,
    pub schema: Option<Value>,
    pub example: Option<Value>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RawResponse {
    pub code: u16,
    pub description: Option<String>,
    pub headers: Vec<RawParameter>,
    pub body: Vec<RawBody>,
}

impl Keyed for RawParameter {
    type Key = String;

    fn key(&self) -> String {
        self.name.clone()
    }
}

impl Keyed for RawBody {
    type Key = String;

    fn key(&self) -> String {
        self.mime_type.clone()
    }
}
