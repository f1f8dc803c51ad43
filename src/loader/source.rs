//! Plain text loader.

use std::path::Path;

use super::{LoadError, Loader, read_to_string};

/// Loads a file as UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct SourceLoader;

impl Loader for SourceLoader {
    type Value = String;
    type Error = LoadError;

    fn load(&self, path: &Path) -> Result<String, LoadError> {
        tracing::debug!(path = %path.display(), "loading source");
        read_to_string(path)
    }
}
