//! # Corpus File Loading
//!
//! Materializes raw records from a JSON or YAML corpus file. Loading is the
//! one place real faults are appropriate: an unreadable file or a document
//! that is not a record sequence is a caller-contract violation, not a
//! content finding, and fails fast with a structured error.
//!
//! The validator itself never touches I/O; it receives the fully
//! materialized sequence this module produces.

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Error while loading a corpus file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("cannot read corpus file '{path}': {reason}")]
    Unreadable {
        /// Path to the file that failed to load.
        path: String,
        /// Underlying I/O failure.
        reason: String,
    },

    /// The file content could not be parsed in its declared format.
    #[error("corpus file '{path}' is not valid {format}: {reason}")]
    Unparseable {
        /// Path to the file that failed to parse.
        path: String,
        /// Format implied by the file extension.
        format: &'static str,
        /// Parser failure description.
        reason: String,
    },

    /// The document parsed, but the top level is not a sequence of records.
    #[error("corpus file '{path}' must contain a top-level array of records")]
    NotASequence {
        /// Path to the offending file.
        path: String,
    },
}

/// Load the raw record sequence from a corpus file.
///
/// The format is determined by the file extension: `.yaml`/`.yml` for YAML,
/// anything else is treated as JSON. YAML documents are projected into JSON
/// values so the validator sees one representation.
pub fn load_records(path: &Path) -> Result<Vec<Value>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Unreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let document = match ext {
        "yaml" | "yml" => {
            let yaml: serde_yaml::Value =
                serde_yaml::from_str(&content).map_err(|e| LoadError::Unparseable {
                    path: path.display().to_string(),
                    format: "YAML",
                    reason: e.to_string(),
                })?;
            yaml_to_json_value(&yaml).map_err(|reason| LoadError::Unparseable {
                path: path.display().to_string(),
                format: "YAML",
                reason,
            })?
        }
        _ => serde_json::from_str(&content).map_err(|e| LoadError::Unparseable {
            path: path.display().to_string(),
            format: "JSON",
            reason: e.to_string(),
        })?,
    };

    match document {
        Value::Array(records) => {
            tracing::debug!(
                path = %path.display(),
                records = records.len(),
                "loaded corpus file"
            );
            Ok(records)
        }
        _ => Err(LoadError::NotASequence {
            path: path.display().to_string(),
        }),
    }
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Corpus files use only the JSON-compatible subset of YAML; tags are
/// ignored and their inner value converted.
fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => {
            let items: Result<Vec<Value>, String> =
                seq.iter().map(yaml_to_json_value).collect();
            Ok(Value::Array(items?))
        }
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::new();
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML map key type: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
