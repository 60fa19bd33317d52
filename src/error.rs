use thiserror::Error;

/// Unified error type for nextver operations
#[derive(Error, Debug)]
pub enum NextverError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Resolution cancelled")]
    Cancelled,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in nextver
pub type Result<T> = std::result::Result<T, NextverError>;

impl NextverError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextverError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        NextverError::Version(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        NextverError::Tag(msg.into())
    }

    /// True if this error is the cooperative-cancellation signal
    pub fn is_cancelled(&self) -> bool {
        matches!(self, NextverError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NextverError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: NextverError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(NextverError::version("test")
            .to_string()
            .contains("Version"));
        assert!(NextverError::tag("test").to_string().contains("Tag"));
    }

    #[test]
    fn test_cancelled_detection() {
        assert!(NextverError::Cancelled.is_cancelled());
        assert!(!NextverError::config("x").is_cancelled());
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (NextverError::config("x"), "Configuration error"),
            (NextverError::version("x"), "Version parsing error"),
            (NextverError::tag("x"), "Tag error"),
            (NextverError::Cancelled, "Resolution cancelled"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
