use crate::adapt::Document;
use crate::raml;
use anyhow::Context;

/// Parse RAML given either document text or a filesystem path.
///
/// Input that starts with the `#%RAML` header or contains a newline is
/// treated as document text; anything else is read as a path. Use
/// [`parse_str`] or [`parse_file`] when the distinction matters.
pub fn parse(raml_or_path: &str) -> anyhow::Result<Document> {
    if raml_or_path.starts_with("#%RAML") || raml_or_path.contains('\n') {
        parse_str(raml_or_path)
    } else {
        parse_file(raml_or_path)
    }
}

/// Parse RAML document text into an adapted [`Document`].
pub fn parse_str(text: &str) -> anyhow::Result<Document> {
    let raw = raml::parse_document(text)?;
    Document::new(raw)
}

/// Read and parse a RAML document from a file.
pub fn parse_file(path: &str) -> anyhow::Result<Document> {
    tracing::debug!(path, "loading RAML document");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read RAML document {path}"))?;
    parse_str(&content)
}
