use super::comment_read_model::{CommentReadModel, FindingRowView, SummaryView};
use crate::comment_generation::domain::Finding;
use crate::comment_generation::services::FindingSummary;

/// Builder for creating CommentReadModel from domain objects
pub struct CommentReadModelBuilder;

impl CommentReadModelBuilder {
    /// Builds the read model from findings that are already sorted
    pub fn build(findings: &[Finding], summary: &FindingSummary) -> CommentReadModel {
        CommentReadModel {
            summary: SummaryView {
                vulnerability_count: summary.vulnerability_count,
                critical_high_count: summary.critical_high_count,
            },
            rows: findings.iter().map(Self::build_row).collect(),
        }
    }

    fn build_row(finding: &Finding) -> FindingRowView {
        FindingRowView {
            dependency_path: finding.relative_path().to_string(),
            dependency_name: finding.dependency_name().to_string(),
            cve: finding.cve().to_string(),
            severity: finding.severity_display().to_string(),
        }
    }
}
