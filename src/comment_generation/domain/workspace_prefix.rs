use crate::shared::error::CommentError;
use crate::shared::Result;

/// Prefix dependency-check sees when it runs inside a GitHub Actions container
pub const DEFAULT_WORKSPACE_PREFIX: &str = "/github/workspace/";

/// Maximum length for a prefix (security limit)
const MAX_PREFIX_LENGTH: usize = 4096;

/// NewType wrapper for the workspace-root prefix stripped from report paths
///
/// A non-empty prefix always ends with `/`, so `/github/workspace` never
/// strips the front of `/github/workspace-other/...`. An empty prefix
/// disables stripping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspacePrefix(String);

impl WorkspacePrefix {
    pub fn new(prefix: String) -> Result<Self> {
        if prefix.len() > MAX_PREFIX_LENGTH {
            return Err(CommentError::Validation {
                message: format!(
                    "Workspace prefix is too long ({} bytes). Maximum allowed: {} bytes",
                    prefix.len(),
                    MAX_PREFIX_LENGTH
                ),
            }
            .into());
        }

        if prefix.chars().any(char::is_control) {
            return Err(CommentError::Validation {
                message: "Workspace prefix must not contain control characters".to_string(),
            }
            .into());
        }

        if prefix.is_empty() || prefix.ends_with('/') {
            Ok(Self(prefix))
        } else {
            Ok(Self(format!("{}/", prefix)))
        }
    }

    /// Returns `path` without the prefix, or `path` unchanged when it does not start with it
    pub fn strip<'a>(&self, path: &'a str) -> &'a str {
        if self.0.is_empty() {
            return path;
        }
        path.strip_prefix(self.0.as_str()).unwrap_or(path)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for WorkspacePrefix {
    fn default() -> Self {
        Self(DEFAULT_WORKSPACE_PREFIX.to_string())
    }
}

impl std::fmt::Display for WorkspacePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
