//! Clap argument types.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use deploader::config::Overrides;

/// Resolve a dependency name to exactly one file across module paths.
#[derive(Parser, Debug)]
#[command(name = "deploader", version = deploader::constants::VERSION)]
pub struct Cli {
    /// Options file to use instead of `.deploader.toml` (TOML or JSON).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base directory for relative module paths.
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,

    /// Directory to search. Repeat or comma-separate for several, in order.
    #[arg(long = "module-path", short = 'p', global = true, value_delimiter = ',')]
    pub module_paths: Vec<PathBuf>,

    /// Extension to try, e.g. `.js`. Repeat or comma-separate, in order.
    #[arg(long = "extension", short = 'e', global = true, value_delimiter = ',')]
    pub extensions: Vec<String>,

    /// Enable debug logging (overridden by `DEPLOADER_LOG`).
    #[arg(long, short = 'v', global = true, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Print the single file a dependency resolves to.
    Resolve(NameArgs),

    /// Resolve a dependency and print its loaded content.
    Load(LoadArgs),

    /// List every candidate path and whether it exists.
    Candidates(NameArgs),

    /// Validate an options file.
    Validate(ValidateArgs),

    /// Print version and build information.
    Version,
}

/// A dependency name argument.
#[derive(Parser, Debug)]
pub struct NameArgs {
    /// Logical dependency name, e.g. `util`.
    pub name: String,
}

/// Arguments for the `load` subcommand.
#[derive(Parser, Debug)]
pub struct LoadArgs {
    /// Logical dependency name, e.g. `util`.
    pub name: String,

    /// How to load the resolved file.
    #[arg(long, default_value = "text")]
    pub format: LoadFormat,
}

/// Arguments for the `validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to the options file (`.toml` or `.json`).
    pub file: PathBuf,
}

/// Loader selection for `load`.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum LoadFormat {
    /// Raw file text.
    Text,
    /// JSON/TOML parsed and printed as pretty JSON.
    Data,
}

impl Cli {
    /// CLI flags as config overrides.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            cwd: self.cwd.clone(),
            module_paths: self.module_paths.clone(),
            extensions: self.extensions.clone(),
        }
    }
}
