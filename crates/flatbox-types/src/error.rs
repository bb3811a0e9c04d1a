/// Errors from location, container, and item operations.
///
/// Every backend reports failures through this closed set so callers can
/// branch on the kind instead of inspecting message strings.
#[derive(Debug, thiserror::Error)]
pub enum StowError {
    /// The requested item or container does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The cursor does not name any entry in the current listing.
    #[error("bad cursor: {0:?}")]
    BadCursor(String),

    /// The target resolved to a directory where a file was expected.
    #[error("unexpected directory: {0}")]
    UnexpectedDirectory(String),

    /// The number of bytes written differs from the declared size.
    #[error("bad size: expected {expected} bytes, wrote {actual}")]
    SizeMismatch { expected: u64, actual: u64 },

    /// A required configuration key is absent or empty.
    #[error("missing config value: {0}")]
    MissingConfig(String),

    /// A configured or requested path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// A URL could not be interpreted by this backend.
    #[error("invalid locator: {0}")]
    InvalidLocator(String),

    /// A call argument is outside its accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error from the underlying storage.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for storage operations.
pub type StowResult<T> = Result<T, StowError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StowError = io.into();
        assert!(matches!(err, StowError::Io(ref e) if e.kind() == std::io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn size_mismatch_message() {
        let err = StowError::SizeMismatch {
            expected: 10,
            actual: 4,
        };
        assert_eq!(err.to_string(), "bad size: expected 10 bytes, wrote 4");
    }

    #[test]
    fn bad_cursor_message_quotes_token() {
        let err = StowError::BadCursor("a/b.txt".into());
        assert_eq!(err.to_string(), "bad cursor: \"a/b.txt\"");
    }
}
