//! Rendering of check results for the terminal or for machines.

use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::io::{self, Write};

use super::error::CheckError;
use super::validator::Report;

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable lines, coloured when the terminal supports it
    #[default]
    Text,
    /// A single JSON object on stdout
    Json,
}

#[derive(Debug, Serialize)]
struct ViolationOutput {
    agent: String,
    field: &'static str,
    message: String,
}

/// Machine-readable summary, emitted for both success and failure.
#[derive(Debug, Serialize)]
pub struct CheckOutput {
    valid: bool,
    path: String,
    agent_count: usize,
    violations: Vec<ViolationOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl CheckOutput {
    pub fn new(path: &str, result: &Result<Report, CheckError>) -> Self {
        return match result {
            Ok(report) => CheckOutput {
                valid: true,
                path: report.path.clone(),
                agent_count: report.agent_count,
                violations: Vec::new(),
                error: None,
            },
            Err(CheckError::Schema {
                violations,
                agent_count,
            }) => CheckOutput {
                valid: false,
                path: path.to_string(),
                agent_count: *agent_count,
                violations: violations
                    .iter()
                    .map(|v| ViolationOutput {
                        agent: v.agent.clone(),
                        field: v.field,
                        message: v.to_string(),
                    })
                    .collect(),
                error: None,
            },
            Err(err) => CheckOutput {
                valid: false,
                path: path.to_string(),
                agent_count: 0,
                violations: Vec::new(),
                error: Some(err.to_string()),
            },
        };
    }
}

/// Writes `result` to `out` (success) or `err` (failure) in the given format.
///
/// JSON output always goes to `out` so it can be piped whatever the outcome.
pub fn render(
    path: &str,
    result: &Result<Report, CheckError>,
    format: OutputFormat,
    quiet: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    return match format {
        OutputFormat::Json => {
            let body = serde_json::to_string_pretty(&CheckOutput::new(path, result))
                .map_err(io::Error::from)?;
            writeln!(out, "{}", body)
        }
        OutputFormat::Text => match result {
            Ok(_) if quiet => Ok(()),
            Ok(report) => writeln!(out, "{}", success_line(report)),
            Err(e) => write_failure(e, err),
        },
    };
}

fn success_line(report: &Report) -> String {
    let plural = if report.agent_count == 1 { "" } else { "s" };
    return format!(
        "{} — {} parsed successfully ({} agent{} validated)",
        "ok".bright_green(),
        report.path,
        report.agent_count,
        plural
    );
}

fn write_failure(error: &CheckError, err: &mut dyn Write) -> io::Result<()> {
    let label = "ERROR:".bright_red();
    return match error {
        CheckError::Schema { violations, .. } => {
            writeln!(err, "{} Validation failed:", label)?;
            for violation in violations {
                writeln!(err, "  {}", violation)?;
            }
            Ok(())
        }
        CheckError::Parse { excerpt, .. } => {
            writeln!(err, "{} {}", label, error)?;
            if let Some(excerpt) = excerpt {
                writeln!(err, "{}", excerpt.bright_yellow())?;
            }
            Ok(())
        }
        CheckError::Read { .. } => writeln!(err, "{} {}", label, error),
    };
}
