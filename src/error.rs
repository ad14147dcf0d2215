use std::error::Error as StdError;

use thiserror::Error;

/// Boxed error used for implementation-defined failures (translation backends, sinks).
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Transcue's crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Transcue's crate-wide error type.
///
/// This is intentionally decoupled from `anyhow` so downstream libraries aren't forced to
/// adopt `anyhow` in their own public APIs.
#[derive(Debug, Error)]
pub enum Error {
    /// The input document is malformed or lacks language, segments or words.
    #[error("format not supported: {0}")]
    FormatNotSupported(String),

    #[error("segment index out of range: {0}")]
    OutOfRange(usize),

    /// A translation does not have as many lines as the source text.
    #[error("lines not equal: lang {lang} requires {expected} lines, got {actual}")]
    LineCountMismatch {
        lang: String,
        expected: usize,
        actual: usize,
    },

    /// Splitting ran out of words before every line got one.
    #[error("segment {index} has no words left for line {line}")]
    SplitWordsExhausted { index: usize, line: usize },

    #[error("language not available: {0}")]
    LangNotAvailable(String),

    /// A word carries zero for both its start and end time.
    #[error("word lost start and end: {0:?}")]
    MissingTiming(String),

    #[error("failed to translate segment {index}")]
    Translation {
        index: usize,
        #[source]
        source: BoxError,
    },

    #[error("translation cancelled")]
    Cancelled,

    #[error("{0}")]
    Message(String),

    #[error(transparent)]
    Other(#[from] BoxError),
}

impl Error {
    pub(crate) fn msg(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::Message(format!("{err:#}"))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Other(Box::new(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Other(Box::new(err))
    }
}
