//! Comment read model for rendering
//!
//! A denormalized, display-ready view of the sorted findings.

/// Main read model for the review comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentReadModel {
    /// Summary counts shown in the header
    pub summary: SummaryView,
    /// Table rows, most severe first
    pub rows: Vec<FindingRowView>,
}

/// View representation of the summary counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryView {
    pub vulnerability_count: usize,
    pub critical_high_count: usize,
}

/// One table row of the comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindingRowView {
    pub dependency_path: String,
    pub dependency_name: String,
    pub cve: String,
    /// Severity text with its emoji (e.g. "HIGH 🟠")
    pub severity: String,
}

impl CommentReadModel {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
