use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info};

use super::error::{CheckError, Result};
use super::schema::{agent_count, check_schema, Violation};
use super::stripper::strip_line_comments;
use super::utils::read_file_as_utf8;

/// Outcome of checking one config document.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub path: String,
    pub agent_count: usize,
    pub violations: Vec<Violation>,
}

impl Report {
    pub fn is_valid(&self) -> bool {
        return self.violations.is_empty();
    }
}

/// Strips comments from `document`, parses it as JSON and checks its agents.
///
/// `path` is only used to label the report.
pub fn validate(path: &str, document: &str) -> Result<Report> {
    let stripped = strip_line_comments(document);
    debug!(
        path,
        original = document.len(),
        stripped = stripped.len(),
        "stripped line comments"
    );

    let config: Value =
        serde_json::from_str(&stripped).map_err(|err| CheckError::parse(err, &stripped))?;

    let agents = agent_count(&config);
    let violations = check_schema(&config);
    if !violations.is_empty() {
        debug!(path, count = violations.len(), "agent schema violations");
        return Err(CheckError::Schema {
            violations,
            agent_count: agents,
        });
    }

    let report = Report {
        path: path.to_string(),
        agent_count: agents,
        violations,
    };
    info!(path, agents = report.agent_count, "config validated");

    return Ok(report);
}

/// Reads the file at `path` and runs [`validate`] on its contents.
pub fn validate_file(path: &Path) -> Result<Report> {
    let document = read_file_as_utf8(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    return validate(&path.display().to_string(), &document);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commented_config_validates() {
        let document = r#"{
  // shared defaults
  "$schema": "https://opencode.ai/config.json",
  "agent": {
    "review": {
      "model": "anthropic/claude", // pinned
      "mode": "subagent",
      "prompt": "{file:./prompts/review.md}"
    }
  }
}
"#;
        let report = validate("opencode.json", document).unwrap();
        assert!(report.is_valid());
        assert_eq!(report.agent_count, 1);
        assert_eq!(report.path, "opencode.json");
    }

    #[test]
    fn empty_object_has_zero_agents() {
        let report = validate("opencode.json", "{}").unwrap();
        assert_eq!(report.agent_count, 0);
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = validate("opencode.json", "{\"agent\": {,}}").unwrap_err();
        assert_eq!(err.category(), "parse");
    }

    #[test]
    fn block_comments_are_not_supported() {
        let err = validate("opencode.json", "{ /* no */ }").unwrap_err();
        assert_eq!(err.category(), "parse");
    }

    #[test]
    fn unterminated_string_fails_in_parser() {
        let err = validate("opencode.json", "{\"agent\": \"open // x").unwrap_err();
        assert_eq!(err.category(), "parse");
    }

    #[test]
    fn missing_fields_are_reported_in_order() {
        let document = r#"{"agent": {
            "b": {"model": "m"}, // no mode or prompt
            "a": {"mode": "primary", "prompt": "p", "model": 0}
        }}"#;
        match validate("opencode.json", document).unwrap_err() {
            CheckError::Schema {
                violations,
                agent_count,
            } => {
                assert_eq!(agent_count, 2);
                let lines: Vec<String> = violations.iter().map(ToString::to_string).collect();
                assert_eq!(
                    lines,
                    vec![
                        "agent \"b\" is missing required field: \"mode\"",
                        "agent \"b\" is missing required field: \"prompt\"",
                        "agent \"a\" is missing required field: \"model\"",
                    ]
                );
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn array_agent_section_is_rejected() {
        match validate("opencode.json", r#"{"agent": [{"model": "m"}]}"#).unwrap_err() {
            CheckError::Schema {
                violations,
                agent_count,
            } => {
                assert_eq!(agent_count, 1);
                let lines: Vec<String> = violations.iter().map(ToString::to_string).collect();
                assert_eq!(
                    lines,
                    vec![
                        "agent \"0\" is missing required field: \"mode\"",
                        "agent \"0\" is missing required field: \"prompt\"",
                    ]
                );
            }
            other => panic!("expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = validate_file(Path::new("no/such/opencode.json")).unwrap_err();
        assert_eq!(err.category(), "read");
    }
}
