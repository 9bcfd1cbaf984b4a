use crate::shared::Result;
use std::path::Path;

/// ReportReader port for reading the raw vulnerability report
///
/// This port abstracts the file system operations needed to load the
/// dependency-check JSON report.
pub trait ReportReader {
    /// Reads the report at the given path
    ///
    /// # Returns
    /// `Some(content)` when the report exists, `None` when it does not.
    /// A missing report is not an error: it means there is nothing to comment on.
    ///
    /// # Errors
    /// Returns an error if the report exists but cannot be read safely
    fn read_report(&self, report_path: &Path) -> Result<Option<String>>;
}
