use std::{io, path::PathBuf};

use crate::{Pattern, file::MAGIC, reader::ReaderError};
use thiserror::Error;

/// The bytes do not describe a valid `.splice` file.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The first six bytes are not `SPLICE`
    #[error("unable to decode non SPLICE files: found {found:02x?}, expected {:02x?}", MAGIC)]
    InvalidMagic {
        /// What was actually at the start of the stream
        found: [u8; 6],
    },
    /// The stream ended before the six magic bytes
    #[error("unable to decode non SPLICE files: only {0} bytes available")]
    MissingMagic(usize),
    /// A track declared a name shorter than zero bytes
    #[error("negative track name length {0}")]
    NegativeNameLength(i32),
    /// The payload size cannot hold the version and tempo fields
    #[error("declared payload of {0} bytes cannot hold the version and tempo")]
    PayloadTooSmall(u64),
    /// A track record extends past the declared payload
    #[error("track record of {record} bytes overruns the {remaining} bytes left in the payload")]
    PayloadOverrun {
        /// Encoded size of the offending track record
        record: u64,
        /// Budget left when the record started
        remaining: u64,
    },
    /// Bytes left in the payload that are too few for a track record
    #[error("{0} trailing payload bytes do not form a track record")]
    PayloadSlack(u64),
}

/// An error returned by [`Decoder::decode`](crate::Decoder::decode).
///
/// Each variant names the phase that failed.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file could not be opened
    #[error("unable to open {}: {source}", .path.display())]
    Open {
        /// The path that was requested
        path: PathBuf,
        /// Why opening failed
        source: io::Error,
    },
    /// The magic tag or payload size could not be read
    #[error("invalid header: {0}")]
    Header(#[source] ReaderError),
    /// The version, tempo or a track record could not be read.
    ///
    /// Whatever was decoded before the failure is kept in `partial`.
    #[error("unable to decode body: {source}")]
    Body {
        /// The underlying read failure
        source: ReaderError,
        /// The pattern as far as it was decoded
        partial: Box<Pattern>,
    },
}

impl DecodeError {
    /// Returns the reader error behind a header or body failure
    pub fn reader_error(&self) -> Option<&ReaderError> {
        match self {
            Self::Header(e) | Self::Body { source: e, .. } => Some(e),
            Self::Open { .. } => None,
        }
    }

    /// True if the input is not a valid `.splice` file
    pub fn is_format(&self) -> bool {
        self.reader_error().is_some_and(ReaderError::is_format)
    }

    /// True if the stream ended inside a field
    pub fn is_truncated(&self) -> bool {
        self.reader_error().is_some_and(ReaderError::is_truncated)
    }

    /// The partially decoded pattern, if the body phase was reached
    pub fn partial(&self) -> Option<&Pattern> {
        match self {
            Self::Body { partial, .. } => Some(&**partial),
            _ => None,
        }
    }

    /// Consumes the error, returning the partially decoded pattern
    pub fn into_partial(self) -> Option<Pattern> {
        match self {
            Self::Body { partial, .. } => Some(*partial),
            _ => None,
        }
    }
}
