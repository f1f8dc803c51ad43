//! Structured data loader.
//!
//! Parses `.json` and `.toml` files into a [`serde_json::Value`]. Any other
//! file is returned as a JSON string holding its text, so a resolver can mix
//! data and plain files without a second loader.

use std::path::Path;

use serde_json::Value;

use super::{LoadError, Loader, read_to_string};

/// Loads JSON/TOML documents as [`serde_json::Value`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DataLoader;

impl Loader for DataLoader {
    type Value = Value;
    type Error = LoadError;

    fn load(&self, path: &Path) -> Result<Value, LoadError> {
        let content = read_to_string(path)?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        tracing::debug!(path = %path.display(), format = ext, "loading data");

        match ext {
            "json" => serde_json::from_str(&content).map_err(|e| LoadError::Json {
                path: path.to_path_buf(),
                source: e,
            }),
            "toml" => {
                let table: toml::Table = toml::from_str(&content).map_err(|e| LoadError::Toml {
                    path: path.to_path_buf(),
                    source: e,
                })?;
                serde_json::to_value(table).map_err(|e| LoadError::Json {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
            _ => Ok(Value::String(content)),
        }
    }
}
