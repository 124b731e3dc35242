use std::fmt;

pub type ScanResult<T> = Result<T, Error>;

/// Errors that can occur while building or running a scanner
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The pattern compiler rejected a pattern.
    /// Only surfaced when the engine is not in forgiving mode.
    #[allow(missing_docs)]
    PatternCompilation { pattern: String, message: String },

    /// A compiled matcher failed while searching.
    /// Only surfaced when the engine is not in forgiving mode.
    #[allow(missing_docs)]
    ScanExecution { pattern: String, message: String },

    /// The buffer is too long for its offsets to be reported as `u32`.
    #[allow(missing_docs)]
    BufferTooLarge { len: usize },
}

impl Error {
    /// The pattern that caused the error, if any
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Error::PatternCompilation { pattern, .. } | Error::ScanExecution { pattern, .. } => {
                Some(pattern.as_str())
            }
            Error::BufferTooLarge { .. } => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PatternCompilation { pattern, message } => {
                write!(f, "failed to compile pattern '{}': {}", pattern, message)
            }
            Error::ScanExecution { pattern, message } => {
                write!(f, "failed to search with pattern '{}': {}", pattern, message)
            }
            Error::BufferTooLarge { len } => {
                write!(f, "buffer of {} bytes is too large to scan", len)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_the_pattern() {
        let err = Error::PatternCompilation {
            pattern: "(?<".to_string(),
            message: "invalid group name".to_string(),
        };
        assert_eq!(err.pattern(), Some("(?<"));
        assert_eq!(
            err.to_string(),
            "failed to compile pattern '(?<': invalid group name"
        );

        let err = Error::ScanExecution {
            pattern: "a+".to_string(),
            message: "retry limit".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to search with pattern 'a+': retry limit"
        );

        let err = Error::BufferTooLarge { len: 4_000_000_000 };
        assert_eq!(err.pattern(), None);
        assert_eq!(
            err.to_string(),
            "buffer of 4000000000 bytes is too large to scan"
        );
    }
}
