//! deploader — resolve a dependency name to one file and load it.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::Colorize;

use cli::args::{Cli, Command, LoadArgs, LoadFormat, NameArgs, ValidateArgs};
use deploader::config::Config;
use deploader::constants;
use deploader::env::Env;
use deploader::options::{self, LoaderOptions};
use deploader::{DataLoader, SourceLoader, deploader};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    match cli.command {
        Command::Resolve(ref args) => run_resolve(&cli, args),
        Command::Load(ref args) => run_load(&cli, args),
        Command::Candidates(ref args) => run_candidates(&cli, args),
        Command::Validate(ref args) => run_validate(args),
        Command::Version => run_version(),
    }
}

/// Build validated options from config files, env, and flags.
fn load_options(cli: &Cli) -> Result<LoaderOptions> {
    let work_dir = std::env::current_dir().context("could not determine current directory")?;
    let mut config = Config::load(cli.config.as_deref(), &work_dir, &Env::real())
        .context("failed to load configuration")?;
    config
        .apply_overrides(&cli.overrides())
        .context("invalid command-line option")?;
    tracing::debug!(options = %config.to_value(), "merged options");
    config.into_options().context("invalid configuration")
}

/// Print the resolved path.
fn run_resolve(cli: &Cli, args: &NameArgs) -> Result<()> {
    let resolver = deploader(load_options(cli)?, SourceLoader);
    let path = resolver
        .locate(&args.name)
        .with_context(|| format!("failed to resolve '{}'", args.name))?;
    println!("{}", path.display());
    Ok(())
}

/// Print the loaded content.
fn run_load(cli: &Cli, args: &LoadArgs) -> Result<()> {
    let options = load_options(cli)?;
    match args.format {
        LoadFormat::Text => {
            let source = deploader(options, SourceLoader)
                .load(&args.name)
                .with_context(|| format!("failed to load '{}'", args.name))?;
            print!("{source}");
        }
        LoadFormat::Data => {
            let value = deploader(options, DataLoader)
                .load(&args.name)
                .with_context(|| format!("failed to load '{}'", args.name))?;
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
    }
    Ok(())
}

/// List every candidate with an existence mark.
fn run_candidates(cli: &Cli, args: &NameArgs) -> Result<()> {
    let resolver = deploader(load_options(cli)?, SourceLoader);
    let candidates = resolver.candidates(&args.name);

    if candidates.is_empty() {
        println!("No candidates (no module paths configured).");
        return Ok(());
    }

    print!("{}", cli::render_candidates(&candidates));
    Ok(())
}

/// Validate an options file.
fn run_validate(args: &ValidateArgs) -> Result<()> {
    let path = &args.file;
    match options::from_path(path) {
        Ok(opts) => {
            println!(
                "  {} {}",
                "✔".green().bold(),
                path.display().to_string().bold(),
            );
            if let Some(ref cwd) = opts.cwd {
                println!("         {}  {}", "cwd:".cyan(), cwd.display());
            }
            let paths: Vec<_> = opts
                .module_paths
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            println!("         {}  {}", "module paths:".cyan(), paths.join(", "));
            if let Some(ref exts) = opts.extensions {
                println!("         {}  {}", "extensions:".cyan(), exts.join(", "));
            }
            Ok(())
        }
        Err(e) => {
            bail!("{} {}", "✖".red().bold(), format!("Invalid options: {e}").red());
        }
    }
}

/// Print version and build information.
fn run_version() -> Result<()> {
    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}     {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}
