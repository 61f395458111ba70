use crate::FormatError;
use thiserror::Error;

#[doc = r#"
A set of errors that can occur while reading bytes into the pattern representation
"#]
#[derive(Debug, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: u64,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Error)]
pub enum ReaderErrorKind {
    /// The bytes were read, but do not describe a valid `.splice` file
    #[error("Parsing {0}")]
    Format(#[from] FormatError),
    /// The stream ended before a fixed-size or length-prefixed field was complete.
    #[error("{field} truncated: expected {expected} bytes, got {read}")]
    Truncated {
        /// Name of the field being read
        field: &'static str,
        /// Bytes the field requires
        expected: usize,
        /// Bytes actually available before the end of the stream
        read: usize,
    },
    /// The underlying stream failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: u64, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }

    /// True if the stream ended inside a field
    pub const fn is_truncated(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::Truncated { .. })
    }

    /// True if the stream ended before the first byte of a field was read.
    pub const fn is_clean_eof(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::Truncated { read: 0, .. })
    }

    /// True if the input is not a valid `.splice` file
    pub const fn is_format(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::Format(_))
    }

    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }

    /// Returns the format error, if this is one.
    pub fn format_error(&self) -> Option<&FormatError> {
        match &self.kind {
            ReaderErrorKind::Format(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the stream offset of the field that failed.
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Create a new format error
    pub fn format(position: u64, error: FormatError) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::Format(error),
        }
    }

    /// Create a new truncation error
    pub const fn truncated(position: u64, field: &'static str, expected: usize, read: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::Truncated {
                field,
                expected,
                read,
            },
        }
    }

    pub(crate) fn io(position: u64, error: std::io::Error) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::Io(error),
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;
