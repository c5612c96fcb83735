//! stylecheck: fails a build on the first Java identifier that breaks its
//! naming convention.
//!
//! Exit status is 0 when every file passes, 1 on a naming violation, and 2
//! when a file cannot be read or parsed or the configuration is invalid.

mod files;
mod runner;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use stylecheck_config::{CONFIG_FILE_NAME, Config};
use stylecheck_linter::{FileCheckError, StyleChecker};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const EXIT_VIOLATION: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "stylecheck", version, about = "Check Java identifier naming conventions")]
struct Cli {
    /// Java files or directories to check
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Configuration file: stylecheck.toml, or a checkstyle .xml
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of files checked in parallel (defaults to the number of CPUs)
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Print nothing when all files pass
    #[arg(short, long)]
    quiet: bool,

    /// Log each file as it is checked
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    ExitCode::from(execute(&cli))
}

/// Runs the check and turns its outcome into an exit status.
fn execute(cli: &Cli) -> u8 {
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", "error:".red().bold());
            EXIT_ERROR
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<u8> {
    let config = load_config(cli.config.as_deref())?;
    let checker = StyleChecker::new(&config.naming).context("invalid naming configuration")?;

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("failed to start worker threads")?;
    }

    let files = files::collect_java_files(&cli.paths)?;
    info!(count = files.len(), "checking files");

    let failure = runner::check_files(&checker, &files);
    match &failure {
        None if !cli.quiet => println!(
            "{} {} file(s), no naming violations",
            "Checked".green().bold(),
            files.len()
        ),
        None => {}
        Some(failure) => report(failure),
    }
    Ok(exit_code(failure.as_ref()))
}

fn exit_code(failure: Option<&FileCheckError>) -> u8 {
    match failure {
        None => 0,
        Some(failure) if failure.is_violation() => EXIT_VIOLATION,
        Some(_) => EXIT_ERROR,
    }
}

/// Explicit `--config`, else `stylecheck.toml` in the working directory,
/// else the built-in conventions.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()));
    }

    let default_path = Path::new(CONFIG_FILE_NAME);
    if default_path.is_file() {
        debug!(path = CONFIG_FILE_NAME, "using configuration from working directory");
        return Config::load(default_path)
            .with_context(|| format!("failed to load configuration from {CONFIG_FILE_NAME}"));
    }

    Ok(Config::default())
}

fn report(failure: &FileCheckError) {
    let label = if failure.is_violation() {
        "error:".red().bold()
    } else {
        "fatal:".red().bold()
    };
    eprintln!("{label} {failure}");
}
