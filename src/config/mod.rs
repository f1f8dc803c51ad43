//! Configuration loading and layering.
//!
//! Handles `.deploader.toml` loading, environment variable resolution,
//! and CLI flag merging with proper priority ordering. The merged result is
//! an untyped options document that goes through the same shape check as
//! any other external input.

pub mod loader;

pub use loader::{Config, ConfigError, Overrides};
