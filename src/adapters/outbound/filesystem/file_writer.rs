use crate::application::dto::CommentResponse;
use crate::ports::outbound::OutputPresenter;
use crate::shared::error::CommentError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Heredoc delimiter used for the multi-line `comment` output
const DEFAULT_DELIMITER: &str = "EOF";

/// GithubOutputPresenter adapter for the GitHub Actions output channel
///
/// Appends `vuln_count` and a heredoc-style `comment` to the file named by
/// `GITHUB_OUTPUT`. When there are no vulnerabilities the comment is left
/// empty so the workflow has nothing to post.
pub struct GithubOutputPresenter {
    output_path: PathBuf,
}

impl GithubOutputPresenter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    /// Renders the block appended to the output file
    pub fn render_block(response: &CommentResponse) -> String {
        let body = if response.has_vulnerabilities() {
            response.markdown.trim_end_matches('\n')
        } else {
            ""
        };
        let delimiter = Self::delimiter_for(body);

        format!(
            "vuln_count={}\ncomment<<{}\n{}\n{}\n",
            response.vulnerability_count, delimiter, body, delimiter
        )
    }

    /// `EOF`, unless the body itself contains an `EOF` line
    fn delimiter_for(body: &str) -> String {
        if body.lines().any(|line| line == DEFAULT_DELIMITER) {
            format!("{}_{}", DEFAULT_DELIMITER, Uuid::new_v4().simple())
        } else {
            DEFAULT_DELIMITER.to_string()
        }
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(CommentError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl OutputPresenter for GithubOutputPresenter {
    fn present(&self, response: &CommentResponse) -> Result<()> {
        self.validate_parent_directory()?;
        if self.output_path.exists() {
            validate_not_symlink(&self.output_path, "append")?;
        }

        let block = Self::render_block(response);

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.output_path)
            .map_err(|e| CommentError::FileWriteError {
                path: self.output_path.clone(),
                details: e.to_string(),
            })?;

        file.write_all(block.as_bytes())
            .map_err(|e| CommentError::FileWriteError {
                path: self.output_path.clone(),
                details: e.to_string(),
            })?;

        Ok(())
    }
}

/// StdoutPresenter adapter for writing the comment to stdout
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputPresenter for StdoutPresenter {
    fn present(&self, response: &CommentResponse) -> Result<()> {
        io::stdout()
            .write_all(response.markdown.as_bytes())
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}
