use crate::comment_generation::domain::WorkspacePrefix;
use crate::shared::error::CommentError;
use crate::shared::Result;
use std::path::PathBuf;

/// Where dependency-check writes its JSON report when run with `--out reports`
pub const DEFAULT_REPORT_PATH: &str = "reports/dependency-check-report.json";

/// CommentRequest - Internal request DTO for the comment generation use case
#[derive(Debug, Clone)]
pub struct CommentRequest {
    /// Path to the dependency-check JSON report
    pub report_path: PathBuf,
    /// Prefix stripped from dependency file paths
    pub workspace_prefix: WorkspacePrefix,
}

impl CommentRequest {
    pub fn new(report_path: PathBuf, workspace_prefix: WorkspacePrefix) -> Self {
        Self {
            report_path,
            workspace_prefix,
        }
    }

    pub fn builder() -> CommentRequestBuilder {
        CommentRequestBuilder::default()
    }
}

/// Builder for [`CommentRequest`]
///
/// Unset values fall back to [`DEFAULT_REPORT_PATH`] and the default
/// workspace prefix.
#[derive(Debug, Default)]
pub struct CommentRequestBuilder {
    report_path: Option<PathBuf>,
    workspace_prefix: Option<String>,
}

impl CommentRequestBuilder {
    pub fn report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = Some(path.into());
        self
    }

    pub fn workspace_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.workspace_prefix = Some(prefix.into());
        self
    }

    pub fn build(self) -> Result<CommentRequest> {
        let report_path = self
            .report_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH));

        if report_path.as_os_str().is_empty() {
            return Err(CommentError::Validation {
                message: "report path must not be empty".to_string(),
            }
            .into());
        }

        let workspace_prefix = match self.workspace_prefix {
            Some(prefix) => WorkspacePrefix::new(prefix)?,
            None => WorkspacePrefix::default(),
        };

        Ok(CommentRequest::new(report_path, workspace_prefix))
    }
}
