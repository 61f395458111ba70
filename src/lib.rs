#![doc = r#"
A streaming decoder for `.splice` drum machine patterns

A `.splice` file holds one drum pattern: the hardware version it was saved
with, a tempo, and a list of tracks. Each track is an instrument with an id,
a name and one measure of sixteen steps.

The decoder reads the file front to back in a single pass and never seeks.
It stops starting new track records once the payload size declared in the
header is used up, and reports short input as an error that names the field
and where it began.

A track record that starts inside the payload is always read to its end, even
if its name runs past the declared size. By default that is logged and the
decode ends there; [`DecodeOptions::strict_payload`](file::DecodeOptions::strict_payload)
turns it into a [`FormatError::PayloadOverrun`].

# Example
```rust
use splice_drum::prelude::*;

let bytes = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/test-asset/pattern_1.splice"
));
let pattern = splice_drum::decode(bytes).unwrap();

assert_eq!(pattern.tempo(), 120.);
assert_eq!(
    pattern.tracks()[0].to_string(),
    "(0) kick\t|x---|x---|x---|x---|"
);
```

# Reading from a stream
[`Decoder`] wraps anything implementing [`std::io::Read`]. The stream is never
closed by the decoder; [`decode_file`] opens and closes a file for you.

```rust,no_run
# use splice_drum::prelude::*;
let pattern = splice_drum::decode_file("pattern_1.splice")?;
println!("{pattern}");
# Ok::<(), DecodeError>(())
```
"#]
#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
pub use error::*;

pub mod dump;

pub mod file;
pub use file::{Decoder, Pattern, Track, decode, decode_file};

pub mod reader;

pub mod step;

/// Commonly used types
pub mod prelude {
    pub use crate::{
        DecodeError, FormatError,
        file::{DecodeOptions, Decoder, Pattern, SpliceHeader, Track},
        reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
        step::{MEASURE_LEN, Step, Steps},
    };
}
