//! Config document and loading logic.
//!
//! Priority (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables
//! 3. `--config <FILE>`, or `.deploader.toml` in the working directory
//! 4. `~/.config/deploader/config.toml` (global defaults)
//! 5. Built-in defaults (empty document)

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use thiserror::Error;

use crate::constants::{CONFIG_DIR, CONFIG_FILENAME, ENV_CWD, ENV_EXTENSIONS, ENV_MODULE_PATHS};
use crate::env::Env;
use crate::options::{self, LoaderOptions, OptionsError};

const KEY_CWD: &str = "cwd";
const KEY_MODULE_PATHS: &str = "modulePaths";
const KEY_EXTENSIONS: &str = "extensions";

/// Errors during config loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("config file {path} must contain a table at the top level")]
    NotATable { path: PathBuf },

    #[error("path is not valid UTF-8: {}", path.display())]
    NonUtf8Path { path: PathBuf },
}

/// Values supplied on the command line. Empty lists mean "not given".
///
/// Paths must be valid UTF-8; anything else is rejected when applied.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub cwd: Option<PathBuf>,
    pub module_paths: Vec<PathBuf>,
    pub extensions: Vec<String>,
}

/// Layered, not yet validated, options document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    document: Map<String, Value>,
}

impl Config {
    /// Load configuration with proper layering.
    ///
    /// `explicit` must exist when given. Otherwise `.deploader.toml` in
    /// `work_dir` is used if present.
    pub fn load(explicit: Option<&Path>, work_dir: &Path, env: &Env) -> Result<Self, ConfigError> {
        let mut config = Config::default();

        // Layer 4: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                config.merge(global);
            }
        }

        // Layer 3: explicit or local config
        match explicit {
            Some(path) => config.merge(Self::load_file(path)?),
            None => {
                let local_path = work_dir.join(CONFIG_FILENAME);
                if local_path.exists() {
                    config.merge(Self::load_file(&local_path)?);
                }
            }
        }

        // Layer 2: environment variables
        config.apply_env_vars(env)?;

        Ok(config)
    }

    /// Load a config from a specific file. `.json` is parsed as JSON,
    /// anything else as TOML.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let value = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str::<Value>(&content).map_err(|e| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: e,
            })?
        } else {
            let table: toml::Table = toml::from_str(&content).map_err(|e| ConfigError::ParseFile {
                path: path.to_path_buf(),
                source: e,
            })?;
            serde_json::to_value(table).map_err(|e| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source: e,
            })?
        };

        match value {
            Value::Object(map) => Ok(Self::from_map(map)),
            _ => Err(ConfigError::NotATable {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Get the global config file path.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(CONFIG_DIR).join("config.toml"))
    }

    fn from_map(mut map: Map<String, Value>) -> Self {
        // `module_paths` is an accepted spelling; keep one key per field.
        if let Some(v) = map.remove("module_paths") {
            map.entry(KEY_MODULE_PATHS).or_insert(v);
        }
        Self { document: map }
    }

    /// Merge another config into this one. Keys present in `other` win.
    fn merge(&mut self, other: Config) {
        for (key, value) in other.document {
            self.document.insert(key, value);
        }
    }

    /// Apply environment variable overrides.
    fn apply_env_vars(&mut self, env: &Env) -> Result<(), ConfigError> {
        if let Some(val) = env.non_empty(ENV_CWD) {
            self.set_cwd(Path::new(&val))?;
        }
        if let Some(val) = env.non_empty(ENV_MODULE_PATHS) {
            let paths: Vec<PathBuf> = std::env::split_paths(&val)
                .filter(|p| !p.as_os_str().is_empty())
                .collect();
            self.set_module_paths(&paths)?;
        }
        if let Some(val) = env.non_empty(ENV_EXTENSIONS) {
            let exts: Vec<String> = val
                .split(',')
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .map(String::from)
                .collect();
            self.set_extensions(&exts);
        }
        Ok(())
    }

    /// Apply CLI flags (layer 1).
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> Result<(), ConfigError> {
        if let Some(ref cwd) = overrides.cwd {
            self.set_cwd(cwd)?;
        }
        if !overrides.module_paths.is_empty() {
            self.set_module_paths(&overrides.module_paths)?;
        }
        if !overrides.extensions.is_empty() {
            self.set_extensions(&overrides.extensions);
        }
        Ok(())
    }

    pub fn set_cwd(&mut self, cwd: &Path) -> Result<(), ConfigError> {
        let cwd = path_string(cwd)?;
        self.document.insert(KEY_CWD.to_string(), cwd);
        Ok(())
    }

    pub fn set_module_paths(&mut self, paths: &[PathBuf]) -> Result<(), ConfigError> {
        let list = paths
            .iter()
            .map(|p| path_string(p))
            .collect::<Result<Vec<_>, _>>()?;
        self.document
            .insert(KEY_MODULE_PATHS.to_string(), Value::Array(list));
        Ok(())
    }

    pub fn set_extensions(&mut self, extensions: &[String]) {
        let list = extensions.iter().cloned().map(Value::String).collect();
        self.document
            .insert(KEY_EXTENSIONS.to_string(), Value::Array(list));
    }

    /// The merged document, as it will be validated.
    pub fn to_value(&self) -> Value {
        Value::Object(self.document.clone())
    }

    /// Validate the merged document into typed options.
    pub fn into_options(self) -> Result<LoaderOptions, OptionsError> {
        options::validate(&Value::Object(self.document))
    }
}

/// Options documents hold strings, so paths must be valid UTF-8.
fn path_string(path: &Path) -> Result<Value, ConfigError> {
    path.to_str()
        .map(|s| Value::String(s.to_string()))
        .ok_or_else(|| ConfigError::NonUtf8Path {
            path: path.to_path_buf(),
        })
}
