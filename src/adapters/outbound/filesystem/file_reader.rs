use crate::ports::outbound::ReportReader;
use crate::shared::error::CommentError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading reports from the file system
///
/// This adapter implements the ReportReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path, "dependency-check report")?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            CommentError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, report_path: &Path) -> Result<Option<String>> {
        // symlink_metadata so a dangling link is reported, not treated as missing
        if fs::symlink_metadata(report_path).is_err() {
            return Ok(None);
        }

        self.safe_read_file(report_path).map(Some)
    }
}
