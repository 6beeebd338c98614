//! # Error Types

/// Errors from wordbridge operations.
#[derive(Debug, thiserror::Error)]
pub enum WordbridgeError {
    /// A transform-family operation was called on an unfit builder.
    #[error("`fit` must be called before `{operation}`")]
    NotFitted {
        /// The operation that required a fit vocabulary.
        operation: &'static str,
    },

    /// The reserved-token configuration is invalid.
    #[error("invalid reserved-token config: {0}")]
    InvalidReservedConfig(String),

    /// Vocabulary data is inconsistent.
    #[error("{0}")]
    VocabConflict(String),

    /// Vocab size exceeds the capacity of the target token type.
    #[error("vocab size ({size}) exceeds token type capacity")]
    VocabSizeOverflow {
        /// The vocab size that exceeded the capacity.
        size: usize,
    },

    /// No padding token is configured.
    #[error("no padding token configured")]
    MissingPadToken,

    /// A corpus file could not be fetched.
    #[error("fetch failed: {0}")]
    Fetch(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (vocabulary documents, etc.)
    #[error("parse error: {0}")]
    Parse(String),
}

/// Result type for wordbridge operations.
pub type WBResult<T> = core::result::Result<T, WordbridgeError>;
