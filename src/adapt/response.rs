use crate::keyed::{keyed_by, Keyed};
use crate::raml::{RawBody, RawParameter, RawResponse};
use indexmap::IndexMap;
use std::mem;
use std::ops::Deref;

/// Adapted response: `headers` keyed by name, `body` keyed by mime type.
/// Every other field of the raw response is reachable through `Deref`.
#[derive(Debug, Clone)]
pub struct Response {
    raw: RawResponse,
    pub headers: IndexMap<String, RawParameter>,
    pub body: IndexMap<String, RawBody>,
}

impl Response {
    pub fn new(mut raw: RawResponse) -> Self {
        let headers = keyed_by(mem::take(&mut raw.headers));
        let body = keyed_by(mem::take(&mut raw.body));
        Self { raw, headers, body }
    }

    pub fn raw(&self) -> &RawResponse {
        &self.raw
    }
}

impl Deref for Response {
    type Target = RawResponse;

    fn deref(&self) -> &RawResponse {
        &self.raw
    }
}

impl Keyed for Response {
    type Key = u16;

    fn key(&self) -> u16 {
        self.raw.code
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn test_duplicate_header_names_keep_second_descriptor() {
        let raw = RawResponse {
            code: 200,
            headers: vec![
                RawParameter {
                    name: "X-Id".to_string(),
                    description: Some("first".to_string()),
                    ..Default::default()
                },
                RawParameter {
                    name: "X-Id".to_string(),
                    description: Some("second".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let response = Response::new(raw);
        assert_eq!(response.headers.len(), 1);
        assert_eq!(
            response.headers["X-Id"].description.as_deref(),
            Some("second")
        );
    }

    #[test]
    fn test_untouched_fields_delegate_to_raw() {
        let response = Response::new(RawResponse {
            code: 404,
            description: Some("missing".to_string()),
            ..Default::default()
        });
        assert_eq!(response.code, 404);
        assert_eq!(response.description.as_deref(), Some("missing"));
    }
}
