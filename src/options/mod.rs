//! Loader options and their shape validation.
//!
//! [`LoaderOptions`] is the typed form used by Rust callers. Input that
//! arrives as text (TOML/JSON config, CLI layering) goes through
//! [`validate`] first, which reproduces the exact field presence and type
//! checks before anything touches the filesystem.

pub mod validate;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use validate::{EXPECTED_SHAPE, OptionsError, from_json_str, from_path, from_toml_str, validate};

/// Configuration captured by a [`DependencyLoader`](crate::resolver::DependencyLoader).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoaderOptions {
    /// Base directory for relative module paths. `None` means candidates
    /// stay relative to the process working directory at lookup time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Directories searched for each candidate filename, in order.
    #[serde(alias = "module_paths")]
    pub module_paths: Vec<PathBuf>,

    /// Suffixes appended to the dependency name, in order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
}

impl LoaderOptions {
    /// Options searching the given module paths with no extensions.
    pub fn new<I, P>(module_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            cwd: None,
            module_paths: module_paths.into_iter().map(Into::into).collect(),
            extensions: None,
        }
    }

    /// Set the base directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Set the extension list.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions = Some(extensions.into_iter().map(Into::into).collect());
        self
    }

    /// Base directory candidates are joined onto.
    ///
    /// An empty path when `cwd` is unset, so joined candidates resolve
    /// against whatever the process working directory is at stat time.
    pub fn base_dir(&self) -> &Path {
        self.cwd.as_deref().unwrap_or_else(|| Path::new(""))
    }

    /// Returns `true` when at least one extension is configured.
    pub fn has_extensions(&self) -> bool {
        self.extensions.as_ref().is_some_and(|e| !e.is_empty())
    }
}
