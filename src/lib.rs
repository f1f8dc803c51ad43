//! deploader — resolve a dependency name to exactly one file and load it
//! (library crate).
//!
//! ```no_run
//! use deploader::{LoaderOptions, SourceLoader, deploader};
//!
//! let resolver = deploader(
//!     LoaderOptions::new(["lib", "vendor"]).with_extensions([".js", ".json"]),
//!     SourceLoader,
//! );
//! let source = resolver.load("util")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod constants;
pub mod env;
pub mod loader;
pub mod options;
pub mod resolver;

pub use loader::{DataLoader, LoadError, Loader, SourceLoader};
pub use options::{LoaderOptions, OptionsError};
pub use resolver::{Candidate, DependencyLoader, ResolveError, deploader, deploader_from_value};
