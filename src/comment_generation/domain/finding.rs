use super::severity::Severity;

/// Placeholder rendered for any value the report does not provide
pub const PLACEHOLDER: &str = "-";

/// One (dependency, vulnerability) pairing extracted from a report.
///
/// Fields are private: a finding is built once by the collector and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    relative_path: String,
    dependency_name: String,
    cve: String,
    severity: Severity,
    severity_label: String,
    severity_display: String,
}

impl Finding {
    /// Creates a finding, filling every missing value with [`PLACEHOLDER`].
    ///
    /// `relative_path` must already have the workspace prefix removed.
    /// `raw_severity` keeps its original casing for display purposes.
    pub fn new(
        relative_path: Option<&str>,
        dependency_name: Option<&str>,
        cve: Option<&str>,
        raw_severity: Option<&str>,
    ) -> Self {
        let raw_severity = raw_severity.filter(|s| !s.is_empty());
        let severity = raw_severity.map_or(Severity::Unknown, Severity::parse);
        let severity_label = raw_severity.map_or_else(|| PLACEHOLDER.to_string(), str::to_uppercase);
        let severity_display = match (raw_severity, severity.emoji()) {
            (Some(raw), Some(emoji)) => format!("{} {}", raw, emoji),
            (Some(raw), None) => raw.to_string(),
            (None, _) => PLACEHOLDER.to_string(),
        };

        Self {
            relative_path: or_placeholder(relative_path),
            dependency_name: or_placeholder(dependency_name),
            cve: or_placeholder(cve),
            severity,
            severity_label,
            severity_display,
        }
    }

    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    pub fn dependency_name(&self) -> &str {
        &self.dependency_name
    }

    pub fn cve(&self) -> &str {
        &self.cve
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Uppercased source severity, or `-`
    pub fn severity_label(&self) -> &str {
        &self.severity_label
    }

    /// Source severity followed by its emoji when the level is recognized
    pub fn severity_display(&self) -> &str {
        &self.severity_display
    }

    pub fn rank(&self) -> u8 {
        self.severity.rank()
    }
}

fn or_placeholder(value: Option<&str>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(PLACEHOLDER)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_with_all_values() {
        let finding = Finding::new(
            Some("lib/log4j-core.jar"),
            Some("log4j-core.jar"),
            Some("CVE-2021-44228"),
            Some("CRITICAL"),
        );
        assert_eq!(finding.relative_path(), "lib/log4j-core.jar");
        assert_eq!(finding.dependency_name(), "log4j-core.jar");
        assert_eq!(finding.cve(), "CVE-2021-44228");
        assert_eq!(finding.severity(), Severity::Critical);
        assert_eq!(finding.severity_label(), "CRITICAL");
        assert_eq!(finding.severity_display(), "CRITICAL 🔴");
        assert_eq!(finding.rank(), 1);
    }

    #[test]
    fn test_new_defaults_to_placeholder() {
        let finding = Finding::new(None, None, None, None);
        assert_eq!(finding.relative_path(), "-");
        assert_eq!(finding.dependency_name(), "-");
        assert_eq!(finding.cve(), "-");
        assert_eq!(finding.severity(), Severity::Unknown);
        assert_eq!(finding.severity_label(), "-");
        assert_eq!(finding.severity_display(), "-");
        assert_eq!(finding.rank(), 99);
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let finding = Finding::new(Some(""), Some(""), Some(""), Some(""));
        assert_eq!(finding.relative_path(), "-");
        assert_eq!(finding.dependency_name(), "-");
        assert_eq!(finding.cve(), "-");
        assert_eq!(finding.severity_label(), "-");
    }

    #[test]
    fn test_lowercase_severity_keeps_source_casing_in_display() {
        let finding = Finding::new(None, None, Some("CVE-1"), Some("high"));
        assert_eq!(finding.severity(), Severity::High);
        assert_eq!(finding.severity_label(), "HIGH");
        assert_eq!(finding.severity_display(), "high 🟠");
    }

    #[test]
    fn test_unrecognized_severity_has_no_emoji() {
        let finding = Finding::new(None, None, Some("CVE-1"), Some("none"));
        assert_eq!(finding.severity(), Severity::Unknown);
        assert_eq!(finding.severity_label(), "NONE");
        assert_eq!(finding.severity_display(), "none");
        assert_eq!(finding.rank(), 99);
    }
}
