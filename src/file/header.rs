use std::io::Read;

use crate::{
    FormatError,
    reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
};

/// The six bytes every `.splice` file starts with
pub const MAGIC: &[u8; 6] = b"SPLICE";

/// Length of the magic tag plus the payload size field
pub const HEADER_LEN: u64 = 14;

#[doc = r#"
   The fixed header of a `.splice` file

```text
offset 0  "SPLICE"        6 bytes
offset 6  payload size    u64, big-endian
```

The payload size counts every byte after the header that belongs to the
pattern. Files may carry trailing bytes past it; those are never read.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpliceHeader {
    payload_size: u64,
}

impl SpliceHeader {
    /// Create a new header from a payload size
    pub const fn new(payload_size: u64) -> Self {
        Self { payload_size }
    }

    /// Bytes declared to follow the header
    pub const fn payload_size(&self) -> u64 {
        self.payload_size
    }

    pub(crate) fn read<R: Read>(reader: &mut Reader<R>) -> ReadResult<Self> {
        let start = reader.buffer_position();
        let found = match reader.read_exact_size::<6>("magic") {
            Ok(found) => found,
            Err(e) => {
                if let ReaderErrorKind::Truncated { read, .. } = e.error_kind() {
                    return Err(ReaderError::format(start, FormatError::MissingMagic(*read)));
                }
                return Err(e);
            }
        };
        if &found != MAGIC {
            return Err(ReaderError::format(start, FormatError::InvalidMagic { found }));
        }

        let payload_size = reader.read_u64_be("payload size")?;
        tracing::debug!(payload_size, "read .splice header");
        Ok(Self { payload_size })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn header_bytes(size: u64) -> Vec<u8> {
        let mut bytes = MAGIC.to_vec();
        bytes.extend_from_slice(&size.to_be_bytes());
        bytes
    }

    #[test]
    fn reads_size_and_stops_after_fourteen_bytes() {
        for size in [0, 36, 0xC5, u64::MAX] {
            let mut bytes = header_bytes(size);
            bytes.extend_from_slice(b"0.808-alpha");
            let mut reader = Reader::from_byte_slice(&bytes);

            let header = SpliceHeader::read(&mut reader).unwrap();
            assert_eq!(header.payload_size(), size);
            assert_eq!(reader.buffer_position(), HEADER_LEN);
        }
    }

    #[test]
    fn rejects_other_magic() {
        let mut bytes = b"MThd\0\0".to_vec();
        bytes.extend_from_slice(&6u64.to_be_bytes());
        let mut reader = Reader::from_byte_slice(&bytes);

        let err = SpliceHeader::read(&mut reader).unwrap_err();
        assert_eq!(
            err.format_error(),
            Some(&FormatError::InvalidMagic { found: *b"MThd\0\0" })
        );
    }

    #[test]
    fn short_magic_is_a_format_error() {
        let mut reader = Reader::from_byte_slice(b"SPL");
        let err = SpliceHeader::read(&mut reader).unwrap_err();
        assert_eq!(err.format_error(), Some(&FormatError::MissingMagic(3)));
    }

    #[test]
    fn short_size_is_truncated() {
        let bytes = header_bytes(36);
        let mut reader = Reader::from_byte_slice(&bytes[..10]);
        let err = SpliceHeader::read(&mut reader).unwrap_err();
        assert!(err.is_truncated());
        assert_eq!(err.position(), 6);
    }
}
