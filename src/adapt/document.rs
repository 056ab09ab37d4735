use super::resource::Resource;
use crate::raml::RawDocument;
use anyhow::Context;
use http::Method;
use indexmap::IndexMap;
use std::mem;
use std::ops::Deref;

/// Grouped view of a document's resources: path in first-seen order, then
/// uppercased method in first-seen order (DELETE forced last).
pub type ResourceMap = IndexMap<String, IndexMap<Method, Resource>>;

/// Adapted document root. The raw flat resource list is replaced by the
/// grouped [`ResourceMap`]; all other document fields (title, version,
/// base uri, media type) delegate to the raw document.
#[derive(Debug, Clone)]
pub struct Document {
    raw: RawDocument,
    pub resources: ResourceMap,
}

impl Document {
    pub fn new(mut raw: RawDocument) -> anyhow::Result<Self> {
        let adapted: Vec<Resource> = mem::take(&mut raw.resources)
            .into_iter()
            .map(Resource::new)
            .collect();
        let resources = group_by_path(adapted)?;
        Ok(Self { raw, resources })
    }

    pub fn raw(&self) -> &RawDocument {
        &self.raw
    }
}

impl Deref for Document {
    type Target = RawDocument;

    fn deref(&self) -> &RawDocument {
        &self.raw
    }
}

/// Group adapted resources by path, then by uppercased method, preserving
/// first-seen order at both levels; any DELETE entry is then moved to the
/// end of its path's method ordering.
fn group_by_path(resources: Vec<Resource>) -> anyhow::Result<ResourceMap> {
    let mut by_path: ResourceMap = IndexMap::new();

    for resource in resources {
        let method = Method::from_bytes(resource.method.to_ascii_uppercase().as_bytes())
            .with_context(|| {
                format!(
                    "invalid HTTP method {:?} on {}",
                    resource.method, resource.path
                )
            })?;
        by_path
            .entry(resource.path.clone())
            .or_default()
            .insert(method, resource);
    }

    for methods in by_path.values_mut() {
        // shift_remove keeps the remaining first-seen order; re-insert
        // appends, so DELETE lands at the end.
        if let Some(resource) = methods.shift_remove(&Method::DELETE) {
            methods.insert(Method::DELETE, resource);
        }
    }

    Ok(by_path)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::raml::RawResource;

    fn resource(path: &str, method: &str) -> Resource {
        Resource::new(RawResource {
            path: path.to_string(),
            method: method.to_string(),
            ..Default::default()
        })
    }

    fn method_names(map: &ResourceMap, path: &str) -> Vec<String> {
        map[path].keys().map(|m| m.to_string()).collect()
    }

    #[test]
    fn test_delete_moves_to_end() {
        let grouped = group_by_path(vec![
            resource("/x", "get"),
            resource("/x", "delete"),
            resource("/x", "post"),
        ])
        .expect("grouping failed");
        assert_eq!(method_names(&grouped, "/x"), vec!["GET", "POST", "DELETE"]);
    }

    #[test]
    fn test_ordering_untouched_without_delete() {
        let grouped = group_by_path(vec![
            resource("/x", "post"),
            resource("/x", "get"),
            resource("/x", "put"),
        ])
        .expect("grouping failed");
        assert_eq!(method_names(&grouped, "/x"), vec!["POST", "GET", "PUT"]);
    }

    #[test]
    fn test_delete_only_path_is_a_noop() {
        let grouped = group_by_path(vec![resource("/gone", "delete")]).expect("grouping failed");
        assert_eq!(method_names(&grouped, "/gone"), vec!["DELETE"]);
    }

    #[test]
    fn test_mixed_case_methods_normalized() {
        let grouped = group_by_path(vec![
            resource("/x", "DeLeTe"),
            resource("/x", "Get"),
        ])
        .expect("grouping failed");
        assert_eq!(method_names(&grouped, "/x"), vec!["GET", "DELETE"]);
    }

    #[test]
    fn test_paths_keep_first_seen_order() {
        let grouped = group_by_path(vec![
            resource("/b", "get"),
            resource("/a", "get"),
            resource("/b", "post"),
        ])
        .expect("grouping failed");
        let paths: Vec<_> = grouped.keys().cloned().collect();
        assert_eq!(paths, vec!["/b", "/a"]);
    }
}
