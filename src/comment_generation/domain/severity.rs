/// Severity level of a finding, ordered from most to least severe.
///
/// Anything dependency-check reports outside the four CVSS v3 levels
/// (including a missing value) is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
    Unknown,
}

/// Rank given to severities outside the recognized levels
pub const UNRANKED: u8 = 99;

impl Severity {
    /// Case-insensitive parse of a CVSS v3 `baseSeverity` value
    pub fn parse(raw: &str) -> Self {
        match raw.to_uppercase().as_str() {
            "CRITICAL" => Severity::Critical,
            "HIGH" => Severity::High,
            "MEDIUM" => Severity::Medium,
            "LOW" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    /// Sort priority, lower is more severe
    pub fn rank(self) -> u8 {
        match self {
            Severity::Critical => 1,
            Severity::High => 2,
            Severity::Medium => 3,
            Severity::Low => 4,
            Severity::Unknown => UNRANKED,
        }
    }

    pub fn emoji(self) -> Option<&'static str> {
        match self {
            Severity::Critical => Some("🔴"),
            Severity::High => Some("🟠"),
            Severity::Medium => Some("🟡"),
            Severity::Low => Some("🟢"),
            Severity::Unknown => None,
        }
    }

    /// Critical and High findings block a merge
    pub fn requires_action(self) -> bool {
        matches!(self, Severity::Critical | Severity::High)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "CRITICAL",
            Severity::High => "HIGH",
            Severity::Medium => "MEDIUM",
            Severity::Low => "LOW",
            Severity::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
