use crate::comment_generation::domain::Finding;

/// Aggregated counts over a set of findings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FindingSummary {
    pub vulnerability_count: usize,
    pub critical_high_count: usize,
}

impl FindingSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        Self {
            vulnerability_count: findings.len(),
            critical_high_count: findings
                .iter()
                .filter(|f| f.severity().requires_action())
                .count(),
        }
    }

    pub fn requires_action(&self) -> bool {
        self.critical_high_count > 0
    }
}
