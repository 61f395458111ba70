use std::io::Read;

use crate::{
    FormatError,
    file::{DecodeOptions, MIN_TRACK_LEN, Pattern, Track, decode_text},
    reader::{ReadResult, Reader, ReaderError},
};

/// Width of the NUL padded version field
pub const VERSION_LEN: usize = 32;

/// Bytes of the payload taken by the version and tempo fields
pub const PREAMBLE_LEN: u64 = VERSION_LEN as u64 + 4;

/// Reads the version, tempo and track records of a payload of `payload_size` bytes.
///
/// Tracks are pushed onto `pattern` as they are read, so on error `pattern`
/// holds everything decoded up to the failing record.
pub(crate) fn read_body<R: Read>(
    reader: &mut Reader<R>,
    pattern: &mut Pattern,
    payload_size: u64,
    options: &DecodeOptions,
) -> ReadResult<()> {
    let preamble_position = reader.buffer_position();

    let version = reader.read_exact_size::<VERSION_LEN>("version")?;
    let end = version.iter().rposition(|&b| b != 0).map_or(0, |i| i + 1);
    pattern.version = decode_text(version[..end].to_vec(), "version");
    pattern.tempo = reader.read_f32_le("tempo")?;
    tracing::debug!(version = %pattern.version, tempo = pattern.tempo, "read pattern preamble");

    let mut remaining = match payload_size.checked_sub(PREAMBLE_LEN) {
        Some(remaining) => remaining,
        None if options.is_strict() => {
            return Err(ReaderError::format(
                preamble_position,
                FormatError::PayloadTooSmall(payload_size),
            ));
        }
        None => {
            tracing::warn!(payload_size, "declared payload is smaller than version and tempo");
            0
        }
    };

    while remaining >= MIN_TRACK_LEN {
        let start = reader.buffer_position();
        let (track, record_len) = match Track::read(reader) {
            Ok(read) => read,
            Err(e)
                if options.eof_at_track_boundary_allowed()
                    && e.is_clean_eof()
                    && e.position() == start =>
            {
                tracing::debug!(remaining, "stream ended at a track boundary");
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        if record_len > remaining {
            if options.is_strict() {
                return Err(ReaderError::format(
                    start,
                    FormatError::PayloadOverrun {
                        record: record_len,
                        remaining,
                    },
                ));
            }
            tracing::warn!(
                id = track.id(),
                record_len,
                remaining,
                "track record overruns the declared payload"
            );
            remaining = 0;
        } else {
            remaining -= record_len;
        }

        tracing::trace!(id = track.id(), name = track.name(), remaining, "decoded track");
        pattern.tracks.push(track);
    }

    if remaining > 0 {
        if options.is_strict() {
            return Err(ReaderError::format(
                reader.buffer_position(),
                FormatError::PayloadSlack(remaining),
            ));
        }
        tracing::warn!(remaining, "ignoring payload bytes too short for a track record");
    }

    Ok(())
}
