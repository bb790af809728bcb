//! Error kinds for apkdeps operations

use strum_macros::{Display, IntoStaticStr};

/// The kind of error that occurred.
///
/// Callers match on the kind to decide how to report a failure; the message
/// and context carry the specifics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, Display)]
#[non_exhaustive]
pub enum ErrorKind {
    // =========================================================================
    // Configuration errors
    // =========================================================================
    /// Settings file does not exist
    ConfigNotFound,

    /// Settings file is not valid TOML or has wrongly typed values
    ConfigInvalid,

    /// A required setting is absent or empty
    ConfigMissingField,

    // =========================================================================
    // Fetch errors
    // =========================================================================
    /// Transport-level failure while downloading the archive
    FetchFailed,

    /// Server answered with a non-success status code
    HttpStatus,

    /// Request timed out
    Timeout,

    // =========================================================================
    // Archive errors
    // =========================================================================
    /// Bytes are not a readable gzip-compressed tar archive
    ArchiveInvalid,

    /// Archive has no member whose name ends with `APKINDEX`
    IndexNotFound,

    // =========================================================================
    // File/IO errors
    // =========================================================================
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// IO operation failed
    IoFailed,
}

impl ErrorKind {
    /// Returns the error kind as a static string
    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }

    /// Check if this error kind is retryable by default
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::Timeout | ErrorKind::FetchFailed | ErrorKind::IoFailed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_display() {
        assert_eq!(ErrorKind::ConfigInvalid.to_string(), "ConfigInvalid");
        assert_eq!(ErrorKind::IndexNotFound.as_str(), "IndexNotFound");
    }

    #[test]
    fn test_is_retryable() {
        assert!(ErrorKind::Timeout.is_retryable());
        assert!(ErrorKind::FetchFailed.is_retryable());
        assert!(!ErrorKind::HttpStatus.is_retryable());
        assert!(!ErrorKind::ArchiveInvalid.is_retryable());
        assert!(!ErrorKind::ConfigMissingField.is_retryable());
    }
}
