#![doc = r#"
Contains the [`Reader`], a position-tracking wrapper over any [`std::io::Read`]

The reader only knows how to pull fixed-size and length-prefixed fields off a
stream in a given byte order. A short read never panics: it becomes a
[`ReaderErrorKind::Truncated`] that names the field and where it began.
"#]

mod error;
pub use error::*;

use std::io::{ErrorKind, Read};

/// Reads typed fields from a byte stream, counting every byte consumed.
pub struct Reader<R> {
    inner: R,
    position: u64,
}

impl<'slc> Reader<&'slc [u8]> {
    /// Create a reader over an in-memory slice
    pub const fn from_byte_slice(bytes: &'slc [u8]) -> Self {
        Self::new(bytes)
    }
}

impl<R> Reader<R> {
    /// Wrap a stream. The position starts at zero.
    pub const fn new(inner: R) -> Self {
        Self { inner, position: 0 }
    }

    /// Number of bytes consumed so far
    pub const fn buffer_position(&self) -> u64 {
        self.position
    }

    /// Give the stream back to the caller
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Reader<R> {
    /// Fill `buf` completely, or report how far the stream got.
    fn fill(&mut self, buf: &mut [u8], field: &'static str) -> ReadResult<()> {
        let start = self.position;
        let mut read = 0;
        while read < buf.len() {
            match self.inner.read(&mut buf[read..]) {
                Ok(0) => break,
                Ok(n) => read += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.position += read as u64;
                    return Err(ReaderError::io(start, e));
                }
            }
        }
        self.position += read as u64;
        if read < buf.len() {
            return Err(ReaderError::truncated(start, field, buf.len(), read));
        }
        Ok(())
    }

    /// Read exactly `N` bytes
    pub fn read_exact_size<const N: usize>(&mut self, field: &'static str) -> ReadResult<[u8; N]> {
        let mut buf = [0; N];
        self.fill(&mut buf, field)?;
        Ok(buf)
    }

    /// Read a single byte
    pub fn read_u8(&mut self, field: &'static str) -> ReadResult<u8> {
        let [byte] = self.read_exact_size::<1>(field)?;
        Ok(byte)
    }

    /// Read a big-endian signed 32-bit integer
    pub fn read_i32_be(&mut self, field: &'static str) -> ReadResult<i32> {
        self.read_exact_size(field).map(i32::from_be_bytes)
    }

    /// Read a big-endian unsigned 64-bit integer
    pub fn read_u64_be(&mut self, field: &'static str) -> ReadResult<u64> {
        self.read_exact_size(field).map(u64::from_be_bytes)
    }

    /// Read a little-endian IEEE-754 single precision float
    pub fn read_f32_le(&mut self, field: &'static str) -> ReadResult<f32> {
        self.read_exact_size(field).map(f32::from_le_bytes)
    }

    /// Read exactly `len` bytes into a new buffer.
    ///
    /// The buffer grows with the data actually read, so a huge declared
    /// length on a short stream does not allocate up front.
    pub fn read_vec(&mut self, len: usize, field: &'static str) -> ReadResult<Vec<u8>> {
        let start = self.position;
        let mut buf = Vec::new();
        let result = (&mut self.inner).take(len as u64).read_to_end(&mut buf);
        self.position += buf.len() as u64;
        if let Err(e) = result {
            return Err(ReaderError::io(start, e));
        }
        if buf.len() < len {
            return Err(ReaderError::truncated(start, field, len, buf.len()));
        }
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reads_mixed_endianness() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0x0102_0304_0506_0708u64.to_be_bytes());
        bytes.extend_from_slice(&120.0f32.to_le_bytes());
        bytes.extend_from_slice(&(-2i32).to_be_bytes());
        bytes.push(9);

        let mut reader = Reader::from_byte_slice(&bytes);
        assert_eq!(reader.read_u64_be("size").unwrap(), 0x0102_0304_0506_0708);
        assert_eq!(reader.read_f32_le("tempo").unwrap(), 120.0);
        assert_eq!(reader.read_i32_be("len").unwrap(), -2);
        assert_eq!(reader.read_u8("id").unwrap(), 9);
        assert_eq!(reader.buffer_position(), 17);
    }

    #[test]
    fn short_read_reports_field_start() {
        let bytes = [1, 2, 3, 4, 5];
        let mut reader = Reader::from_byte_slice(&bytes);
        reader.read_u8("id").unwrap();

        let err = reader.read_u64_be("size").unwrap_err();
        assert_eq!(err.position(), 1);
        assert!(matches!(
            err.error_kind(),
            ReaderErrorKind::Truncated {
                field: "size",
                expected: 8,
                read: 4
            }
        ));
        assert_eq!(reader.buffer_position(), 5);
    }

    #[test]
    fn read_vec_does_not_trust_declared_length() {
        let bytes = b"kick";
        let mut reader = Reader::from_byte_slice(bytes);
        let err = reader.read_vec(i32::MAX as usize, "name").unwrap_err();
        assert!(matches!(
            err.error_kind(),
            ReaderErrorKind::Truncated { read: 4, .. }
        ));

        let mut reader = Reader::from_byte_slice(bytes);
        assert_eq!(reader.read_vec(4, "name").unwrap(), b"kick".to_vec());
        assert_eq!(reader.read_vec(0, "name").unwrap(), Vec::<u8>::new());
    }
}
