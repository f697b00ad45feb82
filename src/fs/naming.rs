//! Filename validation for feed-supplied identifiers.

use crate::error::{Error, Result};

/// Validate a feed item id before it is used as a filename stem.
///
/// Ids come straight off the wire, so path traversal and separator
/// characters are rejected rather than sanitized.
pub fn validate_filename_id(id: &str) -> Result<()> {
    if id.contains("..") {
        return Err(Error::Download(format!(
            "Path traversal detected in item id: '{}'",
            id
        )));
    }

    if id.contains('/') || id.contains('\\') {
        return Err(Error::Download(format!(
            "Path separators not allowed in item id: '{}'",
            id
        )));
    }

    if id.contains('\0') {
        return Err(Error::Download(format!(
            "Null bytes not allowed in item id: '{}'",
            id
        )));
    }

    if id.trim().is_empty() {
        return Err(Error::Download(
            "Item id cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_ids() {
        assert!(validate_filename_id("1097974222390660384_307146").is_ok());
        assert!(validate_filename_id("abc_1").is_ok());
    }

    #[test]
    fn test_path_traversal() {
        assert!(validate_filename_id("../etc/passwd").is_err());
        assert!(validate_filename_id("..\\windows").is_err());
        assert!(validate_filename_id("foo/../bar").is_err());
    }

    #[test]
    fn test_path_separators() {
        assert!(validate_filename_id("path/to/file").is_err());
        assert!(validate_filename_id("path\\to\\file").is_err());
    }

    #[test]
    fn test_null_bytes_and_empty() {
        assert!(validate_filename_id("id\0name").is_err());
        assert!(validate_filename_id("").is_err());
        assert!(validate_filename_id("   ").is_err());
    }
}
