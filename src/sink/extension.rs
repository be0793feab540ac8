//! Conversion of opaque custom-element structures into RSS extensions.
//!
//! The accepted JSON convention matches common feed tooling:
//!
//! ```json
//! [
//!   {"media:image": [{"_attr": {"url": "http://example.com/foo.jpg", "medium": "image"}}]},
//!   {"itunes:author": "A. Podcaster"}
//! ]
//! ```
//!
//! An element's content may be a scalar (text value), an object, or a list
//! of objects; `_attr` objects carry XML attributes, every other key becomes
//! a child element.

use crate::JsonMap;
use rss::extension::{Extension, ExtensionMap};
use serde_json::Value;

const ATTR_KEY: &str = "_attr";

/// Build an RSS extension map from an opaque custom-elements structure.
///
/// The structure is collaborator-owned and embedded on a best-effort basis;
/// unrecognized shapes are skipped rather than rejected.
pub fn build_extensions(elements: &Value) -> ExtensionMap {
    let mut map = ExtensionMap::default();
    for (name, content) in iter_elements(elements) {
        let extension = build_extension(name, content);
        let (prefix, local) = split_name(name);
        map.entry(prefix.to_string())
            .or_default()
            .entry(local.to_string())
            .or_default()
            .push(extension);
    }
    map
}

/// Top level: a list of single-key objects, or one object.
fn iter_elements(value: &Value) -> Vec<(&str, &Value)> {
    match value {
        Value::Array(entries) => entries
            .iter()
            .filter_map(Value::as_object)
            .flat_map(|object| object.iter().map(|(k, v)| (k.as_str(), v)))
            .collect(),
        Value::Object(object) => object.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        _ => Vec::new(),
    }
}

fn build_extension(name: &str, content: &Value) -> Extension {
    let mut extension = Extension {
        name: name.to_string(),
        ..Extension::default()
    };
    apply_content(&mut extension, content);
    extension
}

fn apply_content(extension: &mut Extension, content: &Value) {
    match content {
        Value::Null => {}
        Value::String(s) => extension.value = Some(s.clone()),
        Value::Number(n) => extension.value = Some(n.to_string()),
        Value::Bool(b) => extension.value = Some(b.to_string()),
        Value::Array(parts) => {
            for part in parts {
                match part {
                    Value::Object(object) => apply_object(extension, object),
                    Value::String(s) => extension.value = Some(s.clone()),
                    _ => {}
                }
            }
        }
        Value::Object(object) => apply_object(extension, object),
    }
}

fn apply_object(extension: &mut Extension, object: &JsonMap) {
    for (key, value) in object {
        if key == ATTR_KEY {
            if let Some(attrs) = value.as_object() {
                for (attr, attr_value) in attrs {
                    extension
                        .attrs
                        .insert(attr.clone(), scalar_string(attr_value));
                }
            }
        } else {
            let child = build_extension(key, value);
            extension
                .children
                .entry(key.clone())
                .or_default()
                .push(child);
        }
    }
}

fn scalar_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn split_name(name: &str) -> (&str, &str) {
    match name.split_once(':') {
        Some((prefix, local)) => (prefix, local),
        None => ("", name),
    }
}
