use crate::comment_generation::domain::DependencyCheckReport;
use crate::shared::error::CommentError;
use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

/// ReportParser service for turning raw report text into a typed report
///
/// The root must be a JSON object. Everything below the root is parsed
/// leniently (see [`DependencyCheckReport`]), so the only failures are
/// invalid JSON and a non-object root.
pub struct ReportParser;

impl ReportParser {
    /// Parses a dependency-check JSON report
    ///
    /// # Arguments
    /// * `content` - Raw report text
    /// * `source` - Where the text came from, used in error messages
    ///
    /// # Errors
    /// Returns `CommentError::MalformedReport` when the text is not a JSON object
    pub fn parse(content: &str, source: &Path) -> Result<DependencyCheckReport> {
        let value: Value =
            serde_json::from_str(content).map_err(|e| CommentError::MalformedReport {
                path: source.to_path_buf(),
                details: e.to_string(),
            })?;

        if !value.is_object() {
            return Err(CommentError::MalformedReport {
                path: source.to_path_buf(),
                details: format!("expected a JSON object at the root, found {}", kind(&value)),
            }
            .into());
        }

        serde_json::from_value(value).map_err(|e| {
            CommentError::MalformedReport {
                path: source.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
