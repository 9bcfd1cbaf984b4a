use crate::comment_generation::domain::Finding;

/// FindingSorter service for ordering findings by severity
pub struct FindingSorter;

impl FindingSorter {
    /// Sorts findings by ascending severity rank (most severe first).
    ///
    /// The sort is stable: findings with the same rank keep their encounter order.
    pub fn sort(mut findings: Vec<Finding>) -> Vec<Finding> {
        findings.sort_by_key(Finding::rank);
        findings
    }
}
