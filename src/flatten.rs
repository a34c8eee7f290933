//! Tree flattening
//!
//! Walks the `entries` arrays of a tree response and collects the text of
//! every JavaScript/TypeScript blob, keyed by file name. Keys are bare names,
//! not paths: two `index.js` files in different directories collide and the
//! one visited later wins.

use crate::{Error, Result};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// File name to full text.
pub type FileMap = BTreeMap<String, String>;

/// Extensions whose blobs are collected. Matched case-sensitively.
pub const SOURCE_EXTENSIONS: &[&str] = &[".js", ".ts"];

/// Parse a GraphQL response body and flatten its root tree.
pub fn parse_file_map(body: &str) -> Result<FileMap> {
    let root: Value = serde_json::from_str(body)?;

    if let Some(errors) = root.get("errors").and_then(Value::as_array) {
        if !errors.is_empty() {
            let messages: Vec<&str> = errors
                .iter()
                .map(|e| e.get("message").and_then(Value::as_str).unwrap_or("unknown error"))
                .collect();
            return Err(Error::GraphQl(messages.join("; ")));
        }
    }

    let entries = field(&root, "data")
        .and_then(|v| field(v, "repository"))
        .and_then(|v| field(v, "object"))
        .and_then(|v| field(v, "entries"))
        .ok_or_else(|| Error::MissingField("data.repository.object.entries".to_string()))?;

    flatten_entries(entries)
}

/// Collect `.js`/`.ts` blobs from an `entries` array, recursing into trees.
pub fn flatten_entries(entries: &Value) -> Result<FileMap> {
    let entries = entries
        .as_array()
        .ok_or_else(|| Error::MissingField("entries".to_string()))?;

    let mut files = FileMap::new();

    for entry in entries {
        if entry.get("type").and_then(Value::as_str) == Some("blob") {
            let name = entry
                .get("name")
                .and_then(Value::as_str)
                .ok_or_else(|| Error::MissingField("name".to_string()))?;

            if !is_source_file(name) {
                debug!("Skipping {}", name);
                continue;
            }

            let text = field(entry, "object")
                .and_then(|o| field(o, "text"))
                .and_then(Value::as_str)
                .ok_or_else(|| Error::MissingField(format!("{}: object.text", name)))?;

            files.insert(name.to_string(), text.to_string());
        } else if let Some(nested) = field(entry, "object").and_then(|o| field(o, "entries")) {
            // Later entries overwrite earlier ones on name collision
            files.extend(flatten_entries(nested)?);
        }
    }

    Ok(files)
}

pub fn is_source_file(name: &str) -> bool {
    SOURCE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Non-null field lookup.
fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.get(key).filter(|v| !v.is_null())
}
