//! CLI command definitions, logging setup, and terminal rendering.
//!
//! Uses clap derive macros for ergonomic argument definitions.

pub mod args;

use colored::Colorize;
use deploader::Candidate;
use deploader::constants::ENV_LOG;

/// Install the tracing subscriber on stderr.
///
/// `DEPLOADER_LOG` takes an `EnvFilter` directive; without it the level is
/// `warn`, or `debug` when `verbose` is set.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env(ENV_LOG)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok();
}

/// Render one line per candidate with an existence mark.
pub fn render_candidates(candidates: &[Candidate]) -> String {
    let mut out = String::new();
    for candidate in candidates {
        let path = candidate.path();
        if candidate.exists() {
            out.push_str(&format!("  {} {}\n", "✔".green().bold(), path.display()));
        } else {
            out.push_str(&format!("  {} {}\n", "·".dimmed(), path.display().to_string().dimmed()));
        }
    }
    out
}
