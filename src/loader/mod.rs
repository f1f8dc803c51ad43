//! Load step: turn one resolved path into a value.
//!
//! The resolver never reads files itself. It hands the single matching path
//! to a [`Loader`], so tests can substitute an in-memory fake and callers can
//! plug in whatever "load and return the exported value" means for them.

pub mod data;
pub mod source;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use data::DataLoader;
pub use source::SourceLoader;

/// Loads the content at a filesystem path.
pub trait Loader {
    /// Value produced by a successful load.
    type Value;
    /// Error produced by a failed load. Surfaced to the resolver's caller as-is.
    type Error;

    /// Load the file at `path`.
    fn load(&self, path: &Path) -> Result<Self::Value, Self::Error>;
}

impl<F, V, E> Loader for F
where
    F: Fn(&Path) -> Result<V, E>,
{
    type Value = V;
    type Error = E;

    fn load(&self, path: &Path) -> Result<V, E> {
        self(path)
    }
}

/// Errors from the bundled loaders.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {path} as JSON: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to parse {path} as TOML: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Read a file to a string, mapping failure to [`LoadError::Read`].
fn read_to_string(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|e| LoadError::Read {
        path: path.to_path_buf(),
        source: e,
    })
}
