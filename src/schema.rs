//! Presence checks for the `"agent"` section of a parsed config.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Fields every agent definition must carry, in reporting order.
pub const REQUIRED_AGENT_FIELDS: [&str; 3] = ["model", "mode", "prompt"];

const AGENT_KEY: &str = "agent";

/// One missing (or empty) required field on one agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub agent: String,
    pub field: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(
            f,
            "agent \"{}\" is missing required field: \"{}\"",
            self.agent, self.field
        );
    }
}

/// Lists the agent entries as `(name, definition)` pairs.
///
/// An object yields its members in document order. An array yields its
/// elements named by index (`"0"`, `"1"`, ...). A string yields one entry per
/// character, also named by index, with no definition, so every required
/// field is missing. A missing key, `null`, numbers and booleans yield nothing.
fn agents(config: &Value) -> Vec<(String, Option<&Value>)> {
    return match config.get(AGENT_KEY) {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(name, definition)| (name.clone(), Some(definition)))
            .collect(),
        Some(Value::Array(list)) => list
            .iter()
            .enumerate()
            .map(|(index, definition)| (index.to_string(), Some(definition)))
            .collect(),
        Some(Value::String(text)) => text
            .chars()
            .enumerate()
            .map(|(index, _)| (index.to_string(), None))
            .collect(),
        _ => Vec::new(),
    };
}

/// Number of entries in the agent section.
pub fn agent_count(config: &Value) -> usize {
    return agents(config).len();
}

/// Whether a field holds something other than a "falsy" value.
///
/// Absent, `null`, `false`, zero and `""` are all treated as missing.
/// Arrays and objects count as present even when empty.
pub fn is_present_and_non_empty(value: Option<&Value>) -> bool {
    return match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    };
}

/// Checks every agent for [`REQUIRED_AGENT_FIELDS`].
///
/// Violations come out in the order of the agent entries, then in the order
/// of the required field list. An agent whose definition is not an object is
/// missing all of them.
pub fn check_schema(config: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (name, definition) in agents(config) {
        for field in REQUIRED_AGENT_FIELDS.iter().copied() {
            if !is_present_and_non_empty(definition.and_then(|d| d.get(field))) {
                violations.push(Violation {
                    agent: name.clone(),
                    field,
                });
            }
        }
    }

    return violations;
}
