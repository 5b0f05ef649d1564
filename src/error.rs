use thiserror::Error;

/// Errors reported by compiling or running a [`RegExp`](crate::RegExp).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The engine rejected the pattern, or the flag string was malformed.
    #[error("invalid pattern /{pattern}/: {message}")]
    InvalidPattern { pattern: String, message: String },

    /// The replacement template uses a token the active backend does not
    /// support.
    #[error("invalid replacement {replacement:?}: {message}")]
    InvalidReplacement {
        replacement: String,
        message: String,
    },

    /// The engine failed while matching, e.g. a backtracking limit was hit.
    #[error("regex engine failure: {0}")]
    Backend(String),
}

impl Error {
    pub(crate) fn pattern(pattern: &str, message: impl Into<String>) -> Self {
        Error::InvalidPattern {
            pattern: pattern.to_owned(),
            message: message.into(),
        }
    }

    pub(crate) fn replacement(replacement: &str, message: impl Into<String>) -> Self {
        Error::InvalidReplacement {
            replacement: replacement.to_owned(),
            message: message.into(),
        }
    }
}
