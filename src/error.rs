//! Error types for config checking
//!
//! Each variant is one of the failure categories a user sees: the file could
//! not be read, it is not valid JSON once comments are gone, or agents are
//! missing required fields.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::schema::Violation;

#[derive(Error, Debug)]
pub enum CheckError {
    /// The config file is missing, unreadable, or not UTF-8
    #[error("Cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The comment-stripped document is not valid JSON
    #[error("JSON parse failed — {message}")]
    Parse {
        message: String,
        line: usize,
        column: usize,
        /// Offending line with a caret under the column, when it exists
        excerpt: Option<String>,
    },

    /// One or more agents lack a required field
    #[error("Validation failed: {} violation(s)", violations.len())]
    Schema {
        violations: Vec<Violation>,
        /// Entries in the agent section, complete or not
        agent_count: usize,
    },
}

impl CheckError {
    /// Short label for logs and machine output
    pub fn category(&self) -> &'static str {
        return match self {
            CheckError::Read { .. } => "read",
            CheckError::Parse { .. } => "parse",
            CheckError::Schema { .. } => "schema",
        };
    }

    pub(crate) fn parse(err: serde_json::Error, stripped: &str) -> Self {
        let line = err.line();
        let column = err.column();
        return CheckError::Parse {
            message: err.to_string(),
            line,
            column,
            excerpt: crate::utils::excerpt(stripped, line, column),
        };
    }
}

/// Result type alias for config checking
pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_error_names_the_path() {
        let err = CheckError::Read {
            path: PathBuf::from("opencode.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        assert_eq!(
            err.to_string(),
            "Cannot read opencode.json: No such file or directory"
        );
        assert_eq!(err.category(), "read");
    }

    #[test]
    fn parse_error_keeps_position() {
        let bad = "{\n  \"a\": ,\n}";
        let serde_err = serde_json::from_str::<serde_json::Value>(bad).unwrap_err();
        let err = CheckError::parse(serde_err, bad);

        assert_eq!(err.category(), "parse");
        match err {
            CheckError::Parse {
                line,
                excerpt,
                message,
                ..
            } => {
                assert_eq!(line, 2);
                assert!(message.contains("line 2"));
                assert!(excerpt.unwrap().starts_with("   2 |   \"a\": ,"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn schema_error_counts_violations() {
        let err = CheckError::Schema {
            violations: vec![Violation {
                agent: "x".to_string(),
                field: "model",
            }],
            agent_count: 1,
        };
        assert_eq!(err.to_string(), "Validation failed: 1 violation(s)");
        assert_eq!(err.category(), "schema");
    }
}
