//! Command-line surface of `validate-config`.

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, warn};

use super::output::{render, OutputFormat};
use super::utils::resolve_path;
use super::validator::validate_file;

/// Checks an opencode.json file: `//` comments are allowed, and every agent
/// must define `model`, `mode` and `prompt`.
#[derive(Parser, Debug)]
#[command(name = "validate-config")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the config file
    #[arg(env = "OPENCODE_CONFIG", default_value = "opencode.json")]
    pub config: PathBuf,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Suppress the success line; errors are still printed
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Tracing directive matching the `-v` count.
    pub fn log_level(&self) -> tracing::Level {
        return match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// File read, parsed and every agent complete
    Success = 0,
    /// Any read, parse or validation failure
    Failure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        return code as i32;
    }
}

/// Runs one check, writing results to the given streams.
pub fn run_with(cli: &Cli, out: &mut dyn Write, err: &mut dyn Write) -> ExitCode {
    let config = resolve_path(&cli.config);
    let path = config.display().to_string();
    debug!(path = %path, format = ?cli.format, "checking config");

    let result = validate_file(&config);
    if let Err(e) = &result {
        debug!(category = e.category(), "check failed");
    }

    if let Err(e) = render(&path, &result, cli.format, cli.quiet, out, err) {
        warn!(error = %e, "could not write report");
    }

    return match result {
        Ok(_) => ExitCode::Success,
        Err(_) => ExitCode::Failure,
    };
}

/// Runs one check against stdout and stderr.
pub fn run(cli: &Cli) -> ExitCode {
    let stdout = io::stdout();
    let stderr = io::stderr();
    return run_with(cli, &mut stdout.lock(), &mut stderr.lock());
}
