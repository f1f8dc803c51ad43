//! Runtime shape check for untyped options documents.

use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use super::LoaderOptions;

/// The accepted options shape, quoted in every validation failure.
pub const EXPECTED_SHAPE: &str = r#"options must be in the following form:
{
    "cwd": "?string",
    "modulePaths": "array<string>",
    "extensions": "?array<string>"
}"#;

/// Errors from options parsing and validation.
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("invalid options: {reason}\n{shape}", shape = EXPECTED_SHAPE)]
    Invalid { reason: String },

    #[error("failed to read options file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse options as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse options as TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl OptionsError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

/// Validate an untyped options document.
///
/// Accepts an object where `cwd` is absent, null, or a string;
/// `modulePaths` (or `module_paths`) is an array of strings; and
/// `extensions` is absent, null, or an array of strings. Other keys are
/// ignored.
pub fn validate(value: &Value) -> Result<LoaderOptions, OptionsError> {
    let Some(map) = value.as_object() else {
        return Err(OptionsError::invalid(format!(
            "expected an object, got {}",
            kind(value)
        )));
    };

    let cwd = match map.get("cwd") {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(PathBuf::from(s)),
        Some(other) => {
            return Err(OptionsError::invalid(format!(
                "`cwd` must be a string, got {}",
                kind(other)
            )));
        }
    };

    let module_paths: Vec<PathBuf> = match map.get("modulePaths").or_else(|| map.get("module_paths")) {
        None | Some(Value::Null) => {
            return Err(OptionsError::invalid("`modulePaths` is required"));
        }
        Some(v) => string_array("modulePaths", v)?
            .into_iter()
            .map(PathBuf::from)
            .collect(),
    };

    let extensions = match map.get("extensions") {
        None | Some(Value::Null) => None,
        Some(v) => Some(string_array("extensions", v)?),
    };

    Ok(LoaderOptions {
        cwd,
        module_paths,
        extensions,
    })
}

/// Parse a JSON options document and validate it.
pub fn from_json_str(content: &str) -> Result<LoaderOptions, OptionsError> {
    let value: Value = serde_json::from_str(content)?;
    validate(&value)
}

/// Parse a TOML options document and validate it.
pub fn from_toml_str(content: &str) -> Result<LoaderOptions, OptionsError> {
    let table: toml::Table = toml::from_str(content)?;
    let value = serde_json::to_value(table)?;
    validate(&value)
}

/// Read an options file, choosing JSON for `.json` and TOML otherwise.
pub fn from_path(path: &Path) -> Result<LoaderOptions, OptionsError> {
    let content = std::fs::read_to_string(path).map_err(|e| OptionsError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    if path.extension().is_some_and(|e| e == "json") {
        from_json_str(&content)
    } else {
        from_toml_str(&content)
    }
}

fn string_array(field: &str, value: &Value) -> Result<Vec<String>, OptionsError> {
    let Some(items) = value.as_array() else {
        return Err(OptionsError::invalid(format!(
            "`{field}` must be an array of strings, got {}",
            kind(value)
        )));
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(OptionsError::invalid(format!(
                "`{field}[{i}]` must be a string, got {}",
                kind(other)
            ))),
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
