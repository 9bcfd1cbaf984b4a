use std::path::PathBuf;
use thiserror::Error;

/// Process exit status of a run.
///
/// A missing report is not a failure; only `--fail-on-critical-high`
/// turns findings into a non-zero status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    /// Critical/High findings while failing on them was requested
    VulnerabilitiesDetected = 1,
    /// Reserved for clap usage errors, which exit on their own
    InvalidArguments = 2,
    /// Malformed report, unreadable input, unwritable output or bad config
    ApplicationError = 3,
}

impl ExitCode {
    /// Status for a completed run
    pub fn for_outcome(fail_on_critical_high: bool, critical_high_count: usize) -> Self {
        if fail_on_critical_high && critical_high_count > 0 {
            ExitCode::VulnerabilitiesDetected
        } else {
            ExitCode::Success
        }
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

/// Application-specific errors for comment generation.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping every message paired with a hint for the user.
#[derive(Debug, Error)]
pub enum CommentError {
    #[error("Failed to parse dependency-check report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the report was generated with the JSON format (--format JSON)")]
    MalformedReport { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for requests, options and config values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
