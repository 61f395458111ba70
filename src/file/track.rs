use core::fmt;
use std::io::Read;

use crate::{
    FormatError,
    file::decode_text,
    reader::{ReadResult, Reader, ReaderError},
    step::{MEASURE_LEN, Steps},
};

/// Bytes taken by a track record whose name is empty: id, name length and steps.
pub const MIN_TRACK_LEN: u64 = 1 + 4 + MEASURE_LEN as u64;

#[doc = r#"
One instrument lane of a pattern

```text
id           u8
name length  i32, big-endian
name         `name length` bytes
steps        16 bytes, 1 = hit
```
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track {
    id: u8,
    name: String,
    steps: Steps,
}

impl Track {
    /// Create a new track
    pub fn new(id: u8, name: impl Into<String>, steps: impl Into<Steps>) -> Self {
        Self {
            id,
            name: name.into(),
            steps: steps.into(),
        }
    }

    /// The instrument id
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// The instrument name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The measure played by this track
    pub const fn steps(&self) -> &Steps {
        &self.steps
    }

    /// Reads one track record, returning the track and the bytes it occupied.
    pub(crate) fn read<R: Read>(reader: &mut Reader<R>) -> ReadResult<(Self, u64)> {
        let id = reader.read_u8("track id")?;

        let len_position = reader.buffer_position();
        let name_len = reader.read_i32_be("name length")?;
        let name_len = usize::try_from(name_len).map_err(|_| {
            ReaderError::format(len_position, FormatError::NegativeNameLength(name_len))
        })?;

        let name = decode_text(reader.read_vec(name_len, "track name")?, "track name");
        let steps = Steps::from_bytes(reader.read_exact_size::<MEASURE_LEN>("steps")?);

        let track = Self { id, name, steps };
        Ok((track, MIN_TRACK_LEN + name_len as u64))
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}\t{}", self.id, self.name, self.steps)
    }
}
