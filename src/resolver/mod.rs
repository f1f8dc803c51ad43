//! Dependency resolution: name → exactly one file → loaded value.
//!
//! [`deploader`] closes a [`Loader`] over typed [`LoaderOptions`];
//! [`deploader_from_value`] runs the options shape check first. Each [`DependencyLoader::load`] call enumerates every
//! candidate, stats them all, and only then decides:
//!
//! - zero matches → [`ResolveError::NotFound`]
//! - one match → the loader runs once on that path
//! - several matches → [`ResolveError::Ambiguous`]
//!
//! Nothing is cached between calls.

pub mod candidate;

use std::convert::Infallible;
use std::path::{Component, Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::constants::{MSG_AMBIGUOUS, MSG_NOT_FOUND};
use crate::loader::Loader;
use crate::options::{self, LoaderOptions, OptionsError};

pub use candidate::Candidate;

/// Errors from a single resolution.
#[derive(Error, Debug)]
pub enum ResolveError<E = Infallible> {
    #[error("dependency name must not be empty")]
    EmptyName,

    /// Rooted names would replace the base and module path on join.
    #[error("dependency name {0:?} must be relative to the module paths")]
    AbsoluteName(String),

    #[error("{}", MSG_NOT_FOUND)]
    NotFound,

    #[error("{}", MSG_AMBIGUOUS)]
    Ambiguous,

    /// Error returned by the loader, untouched.
    #[error(transparent)]
    Load(E),
}

impl<E> ResolveError<E> {
    /// Recover the loader error, if that is what this is.
    pub fn into_load_error(self) -> Option<E> {
        match self {
            Self::Load(e) => Some(e),
            _ => None,
        }
    }
}

impl ResolveError<Infallible> {
    /// Widen a lookup-only error into any loader's error type.
    pub fn widen<E>(self) -> ResolveError<E> {
        match self {
            Self::EmptyName => ResolveError::EmptyName,
            Self::AbsoluteName(name) => ResolveError::AbsoluteName(name),
            Self::NotFound => ResolveError::NotFound,
            Self::Ambiguous => ResolveError::Ambiguous,
            Self::Load(never) => match never {},
        }
    }
}

/// Resolver closed over one set of options and one loader.
#[derive(Debug, Clone)]
pub struct DependencyLoader<L> {
    options: LoaderOptions,
    loader: L,
}

/// Build a resolver from typed options.
pub fn deploader<L: Loader>(options: LoaderOptions, loader: L) -> DependencyLoader<L> {
    DependencyLoader { options, loader }
}

/// Validate an untyped options document, then build a resolver.
///
/// Fails with [`OptionsError::Invalid`] before any filesystem access.
pub fn deploader_from_value<L: Loader>(
    value: &Value,
    loader: L,
) -> Result<DependencyLoader<L>, OptionsError> {
    let options = options::validate(value)?;
    Ok(deploader(options, loader))
}

impl<L: Loader> DependencyLoader<L> {
    /// Options this resolver was built with.
    pub fn options(&self) -> &LoaderOptions {
        &self.options
    }

    /// The injected loader.
    pub fn loader(&self) -> &L {
        &self.loader
    }

    /// All candidates for `name`, before existence filtering.
    pub fn candidates(&self, name: &str) -> Vec<Candidate> {
        candidate::candidates(name, &self.options)
    }

    /// Candidates for `name` that exist on disk.
    pub fn matches(&self, name: &str) -> Vec<Candidate> {
        self.candidates(name)
            .into_iter()
            .filter(Candidate::exists)
            .collect()
    }

    /// Find the single path for `name` without loading it.
    pub fn locate(&self, name: &str) -> Result<PathBuf, ResolveError> {
        if name.is_empty() {
            return Err(ResolveError::EmptyName);
        }
        if is_rooted(name) {
            return Err(ResolveError::AbsoluteName(name.to_string()));
        }

        let mut found = self.matches(name);
        tracing::debug!(dependency = name, matches = found.len(), "scanned candidates");

        match found.len() {
            0 => Err(ResolveError::NotFound),
            1 => Ok(found.remove(0).path()),
            _ => Err(ResolveError::Ambiguous),
        }
    }

    /// Resolve `name` and load it.
    pub fn load(&self, name: &str) -> Result<L::Value, ResolveError<L::Error>> {
        let path = self.locate(name).map_err(|e| e.widen())?;
        tracing::debug!(dependency = name, path = %path.display(), "loading dependency");
        self.loader.load(&path).map_err(ResolveError::Load)
    }
}

/// Names starting with a root (`/x`) or a Windows prefix (`C:x`) replace
/// whatever they are joined onto.
fn is_rooted(name: &str) -> bool {
    matches!(
        Path::new(name).components().next(),
        Some(Component::RootDir | Component::Prefix(_))
    )
}
