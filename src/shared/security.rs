use crate::shared::error::CommentError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum report size (100 MB)
/// dependency-check reports for large monorepos stay well below this
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects a path that is a symbolic link.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// `operation` names what the caller is about to do ("read", "append") and
/// shows up in the error message.
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| CommentError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata before {}: {}", operation, e),
    })?;

    if metadata.is_symlink() {
        return Err(CommentError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Path is a symbolic link. {} operations on symbolic links are not allowed.",
                operation
            ),
            hint: "Point the tool at the regular file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that a path is a regular file and not a symlink or directory.
///
/// Returns the file size so callers can apply [`validate_file_size`]
/// without a second metadata lookup.
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path).map_err(|e| CommentError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if !metadata.is_file() {
        return Err(CommentError::FileReadError {
            path: path.to_path_buf(),
            details: format!("{} is not a regular file", file_description),
        }
        .into());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(CommentError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Make sure the path points to a dependency-check JSON report".to_string(),
        }
        .into());
    }
    Ok(())
}
