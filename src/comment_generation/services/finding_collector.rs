use crate::comment_generation::domain::{DependencyCheckReport, Finding, WorkspacePrefix};

/// FindingCollector service for flattening a report into findings
///
/// Produces exactly one finding per vulnerability entry, in encounter order
/// (dependency first, then vulnerability).
pub struct FindingCollector {
    workspace_prefix: WorkspacePrefix,
}

impl FindingCollector {
    pub fn new(workspace_prefix: WorkspacePrefix) -> Self {
        Self { workspace_prefix }
    }

    pub fn collect(&self, report: &DependencyCheckReport) -> Vec<Finding> {
        let mut findings = Vec::with_capacity(report.vulnerability_count());

        for dependency in &report.dependencies {
            let relative_path = dependency
                .file_path
                .as_deref()
                .map(|path| self.workspace_prefix.strip(path));

            for vulnerability in &dependency.vulnerabilities {
                findings.push(Finding::new(
                    relative_path,
                    dependency.file_name.as_deref(),
                    vulnerability.name.as_deref(),
                    vulnerability.base_severity(),
                ));
            }
        }

        findings
    }
}

impl Default for FindingCollector {
    fn default() -> Self {
        Self::new(WorkspacePrefix::default())
    }
}
