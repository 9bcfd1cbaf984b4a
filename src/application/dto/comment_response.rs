/// CommentResponse - Result of the comment generation use case
///
/// Carries the rendered Markdown together with the counts CI needs to decide
/// whether to post the comment and whether to fail the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentResponse {
    /// Rendered Markdown comment
    pub markdown: String,
    /// Total number of findings
    pub vulnerability_count: usize,
    /// Number of Critical or High findings
    pub critical_high_count: usize,
    /// Whether a report was present at all
    pub report_found: bool,
}

impl CommentResponse {
    pub fn new(
        markdown: String,
        vulnerability_count: usize,
        critical_high_count: usize,
        report_found: bool,
    ) -> Self {
        Self {
            markdown,
            vulnerability_count,
            critical_high_count,
            report_found,
        }
    }

    pub fn has_vulnerabilities(&self) -> bool {
        self.vulnerability_count > 0
    }

    pub fn requires_action(&self) -> bool {
        self.critical_high_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_response() {
        let response = CommentResponse::new(String::new(), 0, 0, false);
        assert!(!response.has_vulnerabilities());
        assert!(!response.requires_action());
        assert!(!response.report_found);
    }

    #[test]
    fn test_response_with_blocking_findings() {
        let response = CommentResponse::new("body".to_string(), 3, 1, true);
        assert!(response.has_vulnerabilities());
        assert!(response.requires_action());
    }
}
