//! Error types for pathdoc operations.

use crate::Path;
use thiserror::Error;

/// Result type alias for pathdoc operations.
pub type DocResult<T> = Result<T, DocError>;

/// Errors that can occur while resolving or mutating a document.
#[derive(Debug, Error)]
pub enum DocError {
    /// Path does not resolve to a value in the document.
    ///
    /// Raised when any intermediate or final segment is absent, when a
    /// segment cannot be parsed as a sequence index where one is required,
    /// and when `add` targets a sequence index beyond its length.
    #[error("path not found: {path}")]
    PathNotFound {
        /// The path that could not be resolved, in pointer-string form.
        path: Path,
    },
}

impl DocError {
    /// Create a path not found error.
    #[inline]
    pub fn path_not_found(path: impl Into<Path>) -> Self {
        DocError::PathNotFound { path: path.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path;

    #[test]
    fn test_error_display() {
        let err = DocError::path_not_found(path!("users", 0, "name"));
        assert_eq!(err.to_string(), "path not found: /users/0/name");
    }

    #[test]
    fn test_error_from_pointer() {
        let err = DocError::path_not_found("/a/b");
        assert!(matches!(
            err,
            DocError::PathNotFound { path } if path == path!("a", "b")
        ));
    }
}
