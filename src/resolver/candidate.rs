//! Candidate path generation and existence probing.

use std::path::{Path, PathBuf};

use crate::options::LoaderOptions;

/// One filesystem location to probe: `(base, module path, filename)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub base: PathBuf,
    pub module_path: PathBuf,
    pub filename: String,
}

impl Candidate {
    /// Join the triple with the platform separator.
    ///
    /// No normalization: `.`/`..` segments and symlinks are left as-is. An
    /// absolute module path replaces the base.
    pub fn path(&self) -> PathBuf {
        self.base.join(&self.module_path).join(&self.filename)
    }

    /// Returns `true` if anything exists at [`Self::path`].
    pub fn exists(&self) -> bool {
        entry_exists(&self.path())
    }
}

/// Filenames to try for `name`: one per extension, or the bare name.
pub fn filenames(name: &str, options: &LoaderOptions) -> Vec<String> {
    if !options.has_extensions() {
        return vec![name.to_string()];
    }
    options
        .extensions
        .iter()
        .flatten()
        .map(|ext| format!("{name}{ext}"))
        .collect()
}

/// Every candidate for `name`, filename-major then module-path order.
pub fn candidates(name: &str, options: &LoaderOptions) -> Vec<Candidate> {
    let base = options.base_dir();
    filenames(name, options)
        .into_iter()
        .flat_map(|filename| {
            options.module_paths.iter().map(move |module_path| Candidate {
                base: base.to_path_buf(),
                module_path: module_path.clone(),
                filename: filename.clone(),
            })
        })
        .collect()
}

/// Stat `path` without following symlinks.
///
/// A dangling symlink counts as existing. Every stat error, including
/// permission denied, counts as absent.
pub fn entry_exists(path: &Path) -> bool {
    match std::fs::symlink_metadata(path) {
        Ok(_) => {
            tracing::trace!(path = %path.display(), "candidate exists");
            true
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::trace!(path = %path.display(), "candidate missing");
            false
        }
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "stat failed, treating as missing");
            false
        }
    }
}
