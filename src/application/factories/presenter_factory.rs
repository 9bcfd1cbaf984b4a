use crate::adapters::outbound::filesystem::{GithubOutputPresenter, StdoutPresenter};
use crate::application::dto::OutputMode;
use crate::ports::outbound::OutputPresenter;
use crate::shared::error::CommentError;
use crate::shared::Result;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    GithubOutput(PathBuf),
}

impl PresenterType {
    /// Resolves the presenter for an output mode
    ///
    /// # Errors
    /// Returns a validation error when GitHub output mode has no output file
    pub fn from_mode(mode: OutputMode, github_output: Option<PathBuf>) -> Result<Self> {
        match mode {
            OutputMode::Stdout => Ok(PresenterType::Stdout),
            OutputMode::GithubOutput => github_output
                .filter(|path| !path.as_os_str().is_empty())
                .map(PresenterType::GithubOutput)
                .ok_or_else(|| {
                    CommentError::Validation {
                        message: "github-output mode requires GITHUB_OUTPUT or --github-output to name the output file".to_string(),
                    }
                    .into()
                }),
        }
    }
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use depcheck_comment::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::GithubOutput(path) => Box::new(GithubOutputPresenter::new(path)),
        }
    }
}
