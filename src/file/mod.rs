#![doc = r#"
Decoding of `.splice` files into a [`Pattern`]

# Layout

```text
offset  size     field
0       6        "SPLICE"
6       8        payload size, u64 big-endian
14      32       version, NUL padded
46      4        tempo, f32 little-endian
50      ...      track records until the payload size is used up
```

A track record is an id byte, a big-endian `i32` name length, the name and
sixteen step bytes. The header does not say how many tracks follow; the
[`Decoder`] keeps a running budget of payload bytes and stops once the budget
can no longer hold a [`MIN_TRACK_LEN`] record.
"#]

mod header;
pub use header::*;

mod body;
pub use body::{PREAMBLE_LEN, VERSION_LEN};

mod options;
pub use options::*;

mod pattern;
pub use pattern::*;

mod track;
pub use track::*;

use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use crate::{
    DecodeError,
    reader::{ReadResult, Reader},
};

/// Reads one [`Pattern`] from a stream.
///
/// The decoder borrows nothing beyond the stream it wraps, and never closes
/// it; use [`Decoder::into_inner`] to take the stream back.
pub struct Decoder<R> {
    reader: Reader<R>,
    options: DecodeOptions,
}

impl<R: Read> Decoder<R> {
    /// Create a decoder with the default [`DecodeOptions`]
    pub const fn new(inner: R) -> Self {
        Self::with_options(inner, DecodeOptions::new())
    }

    /// Create a decoder with the given options
    pub const fn with_options(inner: R, options: DecodeOptions) -> Self {
        Self {
            reader: Reader::new(inner),
            options,
        }
    }

    /// The options this decoder applies
    pub const fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Number of bytes consumed so far
    pub const fn buffer_position(&self) -> u64 {
        self.reader.buffer_position()
    }

    /// Read the magic tag and payload size.
    pub fn read_header(&mut self) -> ReadResult<SpliceHeader> {
        SpliceHeader::read(&mut self.reader)
    }

    /// Read the version, tempo and tracks following a header.
    ///
    /// Tracks are appended to `pattern` as they are decoded; on error it holds
    /// everything read before the failure.
    pub fn read_body_into(&mut self, pattern: &mut Pattern, payload_size: u64) -> ReadResult<()> {
        body::read_body(&mut self.reader, pattern, payload_size, &self.options)
    }

    /// Decode a complete pattern.
    pub fn decode(&mut self) -> Result<Pattern, DecodeError> {
        let header = self.read_header().map_err(DecodeError::Header)?;

        let mut pattern = Pattern::default();
        if let Err(source) = self.read_body_into(&mut pattern, header.payload_size()) {
            return Err(DecodeError::Body {
                source,
                partial: Box::new(pattern),
            });
        }
        tracing::debug!(
            tracks = pattern.track_count(),
            position = self.buffer_position(),
            "decoded pattern"
        );
        Ok(pattern)
    }

    /// Give the stream back to the caller
    pub fn into_inner(self) -> R {
        self.reader.into_inner()
    }
}

/// Decode a pattern from a complete `.splice` file in memory
pub fn decode(bytes: &[u8]) -> Result<Pattern, DecodeError> {
    Decoder::new(bytes).decode()
}

/// Open the file at `path` and decode the pattern it holds.
///
/// The file is closed before this returns, whether or not decoding succeeded.
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Pattern, DecodeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Decoder::new(BufReader::new(file)).decode()
}

pub(crate) fn decode_text(bytes: Vec<u8>, field: &'static str) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(field, "field is not valid UTF-8, replacing invalid bytes");
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    }
}
