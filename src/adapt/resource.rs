use super::response::Response;
use crate::keyed::keyed_by;
use crate::raml::{RawBody, RawParameter, RawResource};
use indexmap::IndexMap;
use serde_json::Value;
use std::mem;
use std::ops::Deref;

/// Adapted resource: one HTTP method on one path, with every descriptor
/// list of the raw resource replaced by an ordered map keyed by its
/// natural identifier. Fields that are not remapped (path, method,
/// description, content type, ...) delegate to the raw resource.
#[derive(Debug, Clone)]
pub struct Resource {
    raw: RawResource,
    pub query_params: IndexMap<String, RawParameter>,
    pub uri_params: IndexMap<String, RawParameter>,
    pub base_uri_params: IndexMap<String, RawParameter>,
    pub form_params: IndexMap<String, RawParameter>,
    pub headers: IndexMap<String, RawParameter>,
    pub body: IndexMap<String, RawBody>,
    pub responses: IndexMap<u16, Response>,
    /// Example payload for the active content type, captured once here so
    /// the factory never recomputes it.
    example: Option<Value>,
}

impl Resource {
    pub fn new(mut raw: RawResource) -> Self {
        let query_params = keyed_by(mem::take(&mut raw.query_params));
        let uri_params = keyed_by(mem::take(&mut raw.uri_params));
        let base_uri_params = keyed_by(mem::take(&mut raw.base_uri_params));
        let form_params = keyed_by(mem::take(&mut raw.form_params));
        let headers = keyed_by(mem::take(&mut raw.headers));
        let body = keyed_by(mem::take(&mut raw.body));
        let responses = keyed_by(mem::take(&mut raw.responses).into_iter().map(Response::new));

        let example = raw
            .content_type
            .as_ref()
            .and_then(|mime| body.get(mime))
            .and_then(|b| b.example.clone());

        Self {
            raw,
            query_params,
            uri_params,
            base_uri_params,
            form_params,
            headers,
            body,
            responses,
            example,
        }
    }

    pub fn raw(&self) -> &RawResource {
        &self.raw
    }

    /// Deferred accessor for the example payload of this method's body
    /// under the active content type. `None` when the content type is
    /// unset, no body entry matches it, or that entry carries no example;
    /// a missing example is never an error.
    pub fn example_factory(&self) -> Option<impl Fn() -> Value + '_> {
        self.example.as_ref().map(|example| move || example.clone())
    }
}

impl Deref for Resource {
    type Target = RawResource;

    fn deref(&self) -> &RawResource {
        &self.raw
    }
}
