use crate::application::dto::{CommentRequest, CommentResponse};
use crate::application::read_models::CommentReadModelBuilder;
use crate::comment_generation::domain::{DependencyCheckReport, WorkspacePrefix};
use crate::comment_generation::services::{
    FindingCollector, FindingSorter, FindingSummary, ReportParser,
};
use crate::ports::outbound::{CommentFormatter, ProgressReporter, ReportReader};
use crate::shared::Result;

/// GenerateCommentUseCase - Core use case for rendering a review comment
///
/// Orchestrates read → parse → flatten → sort → summarize → render using
/// generic dependency injection for all infrastructure dependencies.
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `F` - CommentFormatter implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateCommentUseCase<RR, F, PR> {
    report_reader: RR,
    formatter: F,
    progress_reporter: PR,
}

impl<RR, F, PR> GenerateCommentUseCase<RR, F, PR>
where
    RR: ReportReader,
    F: CommentFormatter,
    PR: ProgressReporter,
{
    /// Creates a new GenerateCommentUseCase with injected dependencies
    pub fn new(report_reader: RR, formatter: F, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            formatter,
            progress_reporter,
        }
    }

    /// Executes the comment generation use case
    ///
    /// A missing report yields the zero-vulnerability comment. A report that
    /// exists but is not valid JSON fails with `CommentError::MalformedReport`
    /// and produces nothing.
    pub fn execute(&self, request: &CommentRequest) -> Result<CommentResponse> {
        let path = &request.report_path;

        self.progress_reporter.report(&format!(
            "🔍 Reading dependency-check report: {}",
            path.display()
        ));

        let report = match self.report_reader.read_report(path)? {
            Some(content) => Some(ReportParser::parse(&content, path)?),
            None => {
                self.progress_reporter.report(&format!(
                    "ℹ️  No dependency-check JSON report found at {}",
                    path.display()
                ));
                None
            }
        };

        let response = self.render(report.as_ref(), &request.workspace_prefix)?;
        self.report_outcome(&response);

        Ok(response)
    }

    /// Renders a comment from an already parsed report
    ///
    /// `None` stands for "no report available" and renders the same
    /// comment as a report without vulnerabilities.
    pub fn render(
        &self,
        report: Option<&DependencyCheckReport>,
        workspace_prefix: &WorkspacePrefix,
    ) -> Result<CommentResponse> {
        let findings = match report {
            Some(report) => FindingCollector::new(workspace_prefix.clone()).collect(report),
            None => Vec::new(),
        };
        let findings = FindingSorter::sort(findings);
        let summary = FindingSummary::from_findings(&findings);

        let read_model = CommentReadModelBuilder::build(&findings, &summary);
        let markdown = self.formatter.format(&read_model)?;

        Ok(CommentResponse::new(
            markdown,
            summary.vulnerability_count,
            summary.critical_high_count,
            report.is_some(),
        ))
    }

    fn report_outcome(&self, response: &CommentResponse) {
        if !response.has_vulnerabilities() {
            self.progress_reporter
                .report_completion("✅ No vulnerabilities found.");
            return;
        }

        if response.requires_action() {
            self.progress_reporter.report_error(&format!(
                "⛔️ {} Critical/High severity vulnerabilities found",
                response.critical_high_count
            ));
        }

        self.progress_reporter.report_completion(&format!(
            "📝 Comment rendered: {} total vulnerabilities",
            response.vulnerability_count
        ));
    }
}
