use crate::application::read_models::{CommentReadModel, FindingRowView, SummaryView};
use crate::ports::outbound::CommentFormatter;
use crate::shared::Result;

/// Heading used when no title is configured
pub const DEFAULT_TITLE: &str = "Dependency-Check Scan Results";

/// Markdown table header for findings
const TABLE_HEADER: &str = "| Dependency Path | Dependency Name | CVE | Severity |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|-----------------|-----------------|-----|----------|\n";

/// Remediation steps listed under every non-empty comment
const REMEDIATION_STEPS: &[&str] = &[
    "Update vulnerable packages to their fixed versions where available",
    "Run `dependency-check` locally to see more details",
];

/// MarkdownFormatter adapter for rendering the pull-request comment
///
/// This adapter implements the CommentFormatter port. The heading title is
/// injected at construction; everything else is fixed text.
pub struct MarkdownFormatter {
    title: String,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self::with_title(DEFAULT_TITLE)
    }

    /// Creates a formatter with a custom heading title
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into().replace('\n', " "),
        }
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn plural(count: usize) -> &'static str {
        if count == 1 {
            "vulnerability"
        } else {
            "vulnerabilities"
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_title(&self, output: &mut String) {
        output.push_str(&format!("### 🔍 {}\n\n", self.title));
    }

    fn render_no_findings(&self, output: &mut String) {
        output.push_str("✅ No vulnerabilities found.\n");
    }

    /// Renders the action-required callout and the total count
    fn render_summary(&self, output: &mut String, summary: &SummaryView) {
        if summary.critical_high_count > 0 {
            output.push_str(&format!(
                "⛔️ **Action Required:** {} Critical/High severity {} found\n\n",
                summary.critical_high_count,
                Self::plural(summary.critical_high_count)
            ));
        }
        output.push_str(&format!(
            "Found {} total {}\n\n",
            summary.vulnerability_count,
            Self::plural(summary.vulnerability_count)
        ));
    }

    fn render_table(&self, output: &mut String, rows: &[FindingRowView]) {
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for row in rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&row.dependency_path),
                Self::escape_markdown_table_cell(&row.dependency_name),
                Self::escape_markdown_table_cell(&row.cve),
                Self::escape_markdown_table_cell(&row.severity),
            ));
        }
    }

    fn render_remediation(&self, output: &mut String, summary: &SummaryView) {
        output.push_str("\n### Remediation\n\n");
        if summary.critical_high_count > 0 {
            output.push_str(
                "⚠️ **Action Required:** Critical/High severity vulnerabilities must be fixed before merging\n\n",
            );
        }
        for step in REMEDIATION_STEPS {
            output.push_str(&format!("- {}\n", step));
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentFormatter for MarkdownFormatter {
    fn format(&self, model: &CommentReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_title(&mut output);

        if model.is_empty() {
            self.render_no_findings(&mut output);
            return Ok(output);
        }

        self.render_summary(&mut output, &model.summary);
        self.render_table(&mut output, &model.rows);
        self.render_remediation(&mut output, &model.summary);

        Ok(output)
    }
}
