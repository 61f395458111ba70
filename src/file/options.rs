/// Policies a [`Decoder`](crate::Decoder) applies at the edges of the payload.
///
/// The defaults accept any file whose header and records are readable,
/// logging a warning when the declared payload size and the records
/// disagree, and report every short read as an error.
///
/// # Example
/// ```rust
/// # use splice_drum::prelude::*;
/// let options = DecodeOptions::new()
///     .allow_eof_at_track_boundary(true)
///     .strict_payload(true);
///
/// assert!(options.eof_at_track_boundary_allowed());
/// assert!(options.is_strict());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    allow_eof_at_track_boundary: bool,
    strict_payload: bool,
}

impl DecodeOptions {
    /// The default options
    pub const fn new() -> Self {
        Self {
            allow_eof_at_track_boundary: false,
            strict_payload: false,
        }
    }

    /// If the stream ends exactly where a track record would begin, finish
    /// the decode with the tracks read so far instead of failing.
    pub const fn allow_eof_at_track_boundary(mut self, allow: bool) -> Self {
        self.allow_eof_at_track_boundary = allow;
        self
    }

    /// Treat a disagreement between the declared payload size and the
    /// records actually found as a [`FormatError`](crate::FormatError).
    ///
    /// Without it, a record that starts inside the payload but ends past it
    /// is still read in full and kept.
    pub const fn strict_payload(mut self, strict: bool) -> Self {
        self.strict_payload = strict;
        self
    }

    /// See [`DecodeOptions::allow_eof_at_track_boundary`]
    pub const fn eof_at_track_boundary_allowed(&self) -> bool {
        self.allow_eof_at_track_boundary
    }

    /// See [`DecodeOptions::strict_payload`]
    pub const fn is_strict(&self) -> bool {
        self.strict_payload
    }
}
