//! Checks opencode.json style configs: JSON with `//` line comments, where
//! every entry under `"agent"` must define `model`, `mode` and `prompt`.
//!
//! The two building blocks are pure: [`strip_line_comments`] turns the
//! commented text into strict JSON, and [`check_schema`] inspects the parsed
//! value. [`validate`] and [`validate_file`] chain them with `serde_json`.

pub mod cli;
pub mod error;
pub mod output;
pub mod schema;
pub mod stripper;
pub mod utils;
pub mod validator;

pub use error::{CheckError, Result};
pub use schema::{
    agent_count, check_schema, is_present_and_non_empty, Violation, REQUIRED_AGENT_FIELDS,
};
pub use stripper::strip_line_comments;
pub use validator::{validate, validate_file, Report};
