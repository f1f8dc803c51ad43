//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the user-facing resolution messages so a rename only requires
//! changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "deploader";

/// Crate version from Cargo metadata.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple, exported by `build.rs`.
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.deploader.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".deploader.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "deploader";

// ── Resolution messages ─────────────────────────────────────────────

pub const MSG_NOT_FOUND: &str = "No dependency matches found in filesystem";
pub const MSG_AMBIGUOUS: &str =
    "Unable to determine correct dependency, multiple matches were found";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_CWD: &str = "DEPLOADER_CWD";
pub const ENV_MODULE_PATHS: &str = "DEPLOADER_MODULE_PATHS";
pub const ENV_EXTENSIONS: &str = "DEPLOADER_EXTENSIONS";
pub const ENV_LOG: &str = "DEPLOADER_LOG";
