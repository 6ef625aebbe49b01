//! Emission of the normalized configuration record.
//!
//! The external renderer consumes a single JSON record. Almost all of it is
//! the typed [`SiteConfig`] serialized as-is; the one exception is `head`,
//! which the renderer expects in its historical tuple form — `[tag, attrs]`
//! or `[tag, attrs, body]` — rather than as named fields.

use crate::config::{HeadEntry, SiteConfig};
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the emitted record file.
pub const RECORD_FILENAME: &str = "site.json";

#[derive(Error, Debug)]
pub enum EmitError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Build the renderer-facing record from a resolved configuration.
pub fn site_record(config: &SiteConfig) -> Result<Value, EmitError> {
    let mut record = serde_json::to_value(config)?;
    if let Some(object) = record.as_object_mut() {
        if !config.head.is_empty() {
            let tuples: Vec<Value> = config.head.iter().map(head_tuple).collect();
            object.insert("head".to_string(), Value::Array(tuples));
        }
    }
    Ok(record)
}

/// Flatten one head entry into the renderer's tuple form.
fn head_tuple(entry: &HeadEntry) -> Value {
    match &entry.body {
        Some(body) => json!([entry.tag, entry.attrs, body]),
        None => json!([entry.tag, entry.attrs]),
    }
}

/// Write the record as pretty-printed JSON.
pub fn write_site_record(config: &SiteConfig, path: &Path) -> Result<(), EmitError> {
    let record = site_record(config)?;
    let json = serde_json::to_string_pretty(&record)?;
    fs::write(path, json)?;
    Ok(())
}
