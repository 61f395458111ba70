use core::fmt;

use crate::{DecodeError, Decoder, file::Track};

#[doc = r#"
A decoded `.splice` drum pattern

Rendering a pattern with [`Display`](fmt::Display) produces the text form:

```text
Saved with HW Version: 0.808-alpha
Tempo: 120
(0) kick	|x---|x---|x---|x---|
(1) snare	|----|x---|----|x---|
```

# Example
```rust
# use splice_drum::prelude::*;
let bytes = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/test-asset/pattern_2.splice"
));
let pattern = Pattern::parse(bytes).unwrap();

assert_eq!(pattern.version(), "0.808-alpha");
assert_eq!(pattern.tempo(), 98.4);
assert_eq!(pattern.tracks()[0].name(), "kick");
```
"#]
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pattern {
    pub(crate) version: String,
    pub(crate) tempo: f32,
    pub(crate) tracks: Vec<Track>,
}

impl Pattern {
    /// Create a new pattern
    pub fn new(version: impl Into<String>, tempo: f32, tracks: Vec<Track>) -> Self {
        Self {
            version: version.into(),
            tempo,
            tracks,
        }
    }

    /// Decode a pattern from a complete `.splice` file in memory
    pub fn parse(bytes: &[u8]) -> Result<Self, DecodeError> {
        Decoder::new(bytes).decode()
    }

    /// The hardware version the pattern was saved with
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Beats per minute
    pub const fn tempo(&self) -> f32 {
        self.tempo
    }

    /// The tracks, in file order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Number of tracks
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }

    /// Consumes the pattern, returning its tracks
    pub fn into_tracks(self) -> Vec<Track> {
        self.tracks
    }
}

/// Renders the text form shown on [`Pattern`].
///
/// The tempo uses the shortest `f32` form that reads back to the same value,
/// without an exponent: `120`, `98.4`, but `1e21` prints all of its digits as
/// `1000000000000000000000`.
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved with HW Version: {}", self.version)?;
        writeln!(f, "Tempo: {}", self.tempo)?;
        for track in &self.tracks {
            writeln!(f, "{track}")?;
        }
        Ok(())
    }
}
