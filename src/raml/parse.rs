use super::types::{RawBody, RawDocument, RawParameter, RawResource, RawResponse};
use anyhow::{bail, Context};
use serde_yaml::{Mapping, Value};

const METHODS: [&str; 7] = ["get", "post", "put", "delete", "patch", "options", "head"];

/// Document-level declarations inherited by every resource.
struct DocDefaults {
    base_uri_params: Vec<RawParameter>,
    media_type: Option<String>,
}

/// Parse RAML document text into the flat raw tree.
///
/// The `#%RAML` header line is a YAML comment, so the text goes straight
/// through `serde_yaml`. Nested resource nodes (keys starting with `/`)
/// are flattened into one [`RawResource`] per path/method pair, in
/// document order, with `uriParameters` accumulated down the nesting
/// chain. Trait, resourceType and `!include` resolution is not performed;
/// unknown resource-level keys are ignored.
pub fn parse_document(text: &str) -> anyhow::Result<RawDocument> {
    let value: Value = serde_yaml::from_str(text).context("invalid RAML document")?;
    if value.is_null() {
        return Ok(RawDocument::default());
    }
    let root = value
        .as_mapping()
        .context("RAML document root must be a mapping")?;

    let defaults = DocDefaults {
        base_uri_params: parse_parameters(root.get("baseUriParameters"), "baseUriParameters")?,
        media_type: str_field(root, "mediaType"),
    };

    let mut resources = Vec::new();
    for (key, node) in root {
        let Some(path) = key.as_str() else { continue };
        if !path.starts_with('/') {
            continue;
        }
        match node {
            Value::Mapping(map) => walk_resource(map, path, &[], &defaults, &mut resources)?,
            Value::Null => {}
            _ => bail!("resource node {path} must be a mapping"),
        }
    }

    let title = str_field(root, "title").unwrap_or_default();
    tracing::debug!(title = %title, resources = resources.len(), "parsed RAML document");

    Ok(RawDocument {
        title,
        version: scalar_field(root, "version"),
        base_uri: str_field(root, "baseUri"),
        media_type: defaults.media_type,
        resources,
    })
}

fn walk_resource(
    node: &Mapping,
    path: &str,
    inherited_uri: &[RawParameter],
    defaults: &DocDefaults,
    out: &mut Vec<RawResource>,
) -> anyhow::Result<()> {
    let mut uri_params = inherited_uri.to_vec();
    uri_params.extend(parse_parameters(node.get("uriParameters"), "uriParameters")?);
    let display_name = str_field(node, "displayName");

    // Methods declared on this node first, nested resources after.
    for (key, method_node) in node {
        let Some(verb) = key.as_str() else { continue };
        if METHODS.contains(&verb) {
            out.push(build_method(
                path,
                verb,
                method_node,
                &uri_params,
                display_name.clone(),
                defaults,
            )?);
        }
    }

    for (key, child) in node {
        let Some(segment) = key.as_str() else { continue };
        if !segment.starts_with('/') {
            continue;
        }
        match child {
            Value::Mapping(map) => {
                let nested = format!("{path}{segment}");
                walk_resource(map, &nested, &uri_params, defaults, out)?;
            }
            Value::Null => {}
            _ => bail!("resource node {path}{segment} must be a mapping"),
        }
    }
    Ok(())
}

fn build_method(
    path: &str,
    verb: &str,
    node: &Value,
    uri_params: &[RawParameter],
    display_name: Option<String>,
    defaults: &DocDefaults,
) -> anyhow::Result<RawResource> {
    let mut resource = RawResource {
        path: path.to_string(),
        method: verb.to_string(),
        display_name,
        uri_params: uri_params.to_vec(),
        base_uri_params: defaults.base_uri_params.clone(),
        ..Default::default()
    };

    // A bare `get:` with no attributes is a valid method node.
    if let Some(map) = node.as_mapping() {
        resource.description = str_field(map, "description");
        resource.query_params = parse_parameters(map.get("queryParameters"), "queryParameters")?;
        resource.headers = parse_parameters(map.get("headers"), "headers")?;
        let (body, form_params) = parse_bodies(map.get("body"))?;
        resource.body = body;
        resource.form_params = form_params;
        resource.responses = parse_responses(map.get("responses"))?;
    } else if !node.is_null() {
        bail!("method {verb} on {path} must be a mapping");
    }

    resource.content_type = defaults
        .media_type
        .clone()
        .or_else(|| resource.body.first().map(|b| b.mime_type.clone()));

    Ok(resource)
}

/// Parse a RAML named-parameter mapping (`queryParameters`, `headers`, ...)
/// into descriptors in declaration order. Absent or null input is an empty
/// list.
fn parse_parameters(node: Option<&Value>, location: &str) -> anyhow::Result<Vec<RawParameter>> {
    let Some(node) = node else { return Ok(Vec::new()) };
    if node.is_null() {
        return Ok(Vec::new());
    }
    let map = node
        .as_mapping()
        .with_context(|| format!("{location} must be a mapping of parameter names"))?;

    let mut out = Vec::new();
    for (name, attrs) in map {
        let name = name
            .as_str()
            .with_context(|| format!("{location} keys must be strings"))?;
        let mut param = RawParameter {
            name: name.to_string(),
            param_type: "string".to_string(),
            ..Default::default()
        };
        if let Some(attrs) = attrs.as_mapping() {
            param.display_name = str_field(attrs, "displayName");
            param.description = str_field(attrs, "description");
            if let Some(t) = str_field(attrs, "type") {
                param.param_type = t;
            }
            param.required = attrs
                .get("required")
                .and_then(Value::as_bool)
                .unwrap_or(false);
            param.default = attrs.get("default").and_then(to_json);
            param.example = attrs.get("example").and_then(to_json);
        }
        out.push(param);
    }
    Ok(out)
}

/// Parse a `body` mapping (mime type -> schema/example). `formParameters`
/// declared inside form bodies are lifted out so the resource can expose
/// them as a parameter list of their own.
fn parse_bodies(node: Option<&Value>) -> anyhow::Result<(Vec<RawBody>, Vec<RawParameter>)> {
    let Some(node) = node else {
        return Ok((Vec::new(), Vec::new()));
    };
    if node.is_null() {
        return Ok((Vec::new(), Vec::new()));
    }
    let map = node
        .as_mapping()
        .context("body must be a mapping of mime types")?;

    let mut bodies = Vec::new();
    let mut form_params = Vec::new();
    for (mime, attrs) in map {
        let mime = mime.as_str().context("body mime-type keys must be strings")?;
        let mut body = RawBody {
            mime_type: mime.to_string(),
            ..Default::default()
        };
        if let Some(attrs) = attrs.as_mapping() {
            body.schema = attrs.get("schema").and_then(to_json);
            body.example = attrs.get("example").and_then(to_json);
            form_params.extend(parse_parameters(
                attrs.get("formParameters"),
                "formParameters",
            )?);
        }
        bodies.push(body);
    }
    Ok((bodies, form_params))
}

fn parse_responses(node: Option<&Value>) -> anyhow::Result<Vec<RawResponse>> {
    let Some(node) = node else { return Ok(Vec::new()) };
    if node.is_null() {
        return Ok(Vec::new());
    }
    let map = node
        .as_mapping()
        .context("responses must be a mapping of status codes")?;

    let mut out = Vec::new();
    for (code, attrs) in map {
        let code = parse_status_code(code)?;
        let mut response = RawResponse {
            code,
            ..Default::default()
        };
        if let Some(attrs) = attrs.as_mapping() {
            response.description = str_field(attrs, "description");
            response.headers = parse_parameters(attrs.get("headers"), "response headers")?;
            let (body, _) = parse_bodies(attrs.get("body"))?;
            response.body = body;
        }
        out.push(response);
    }
    Ok(out)
}

fn parse_status_code(value: &Value) -> anyhow::Result<u16> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .with_context(|| format!("status code {n} out of range")),
        Value::String(s) => s
            .parse()
            .with_context(|| format!("invalid status code {s:?}")),
        other => bail!("status code keys must be numeric, got {other:?}"),
    }
}

fn str_field(map: &Mapping, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

/// Like [`str_field`] but tolerates scalar YAML values that are not
/// strings (`version: 1` is common in the wild).
fn scalar_field(map: &Mapping, key: &str) -> Option<String> {
    match map.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn to_json(value: &Value) -> Option<serde_json::Value> {
    if value.is_null() {
        return None;
    }
    serde_json::to_value(value).ok()
}
