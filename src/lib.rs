//! depcheck-comment - Markdown review comments from dependency-check reports
//!
//! This library turns an OWASP dependency-check JSON report into a Markdown
//! comment for a pull request, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`comment_generation`): Report shape, findings and pure services
//! - **Application Layer** (`application`): Use case, DTOs, read models and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use depcheck_comment::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let report_reader = FileSystemReader::new();
//! let formatter = MarkdownFormatter::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateCommentUseCase::new(report_reader, formatter, progress_reporter);
//!
//! // Execute
//! let request = CommentRequest::builder()
//!     .report_path("reports/dependency-check-report.json")
//!     .build()?;
//! let response = use_case.execute(&request)?;
//!
//! // Present output
//! StdoutPresenter::new().present(&response)?;
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod comment_generation;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, GithubOutputPresenter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::MarkdownFormatter;
    pub use crate::application::dto::{CommentRequest, CommentResponse, OutputMode};
    pub use crate::application::factories::{PresenterFactory, PresenterType};
    pub use crate::application::read_models::{CommentReadModel, CommentReadModelBuilder};
    pub use crate::application::use_cases::GenerateCommentUseCase;
    pub use crate::comment_generation::domain::{
        DependencyCheckReport, Finding, Severity, WorkspacePrefix,
    };
    pub use crate::comment_generation::services::{
        FindingCollector, FindingSorter, FindingSummary, ReportParser,
    };
    pub use crate::ports::outbound::{
        CommentFormatter, OutputPresenter, ProgressReporter, ReportReader,
    };
    pub use crate::shared::error::{CommentError, ExitCode};
    pub use crate::shared::Result;
}
