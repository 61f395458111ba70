#![doc = r#"
Hex dumps of raw bytes, for poking at unknown `.splice` files

Nothing in the decoder uses this module.

```text
00000000  53 50 4c 49 43 45 00 00  00 00 00 00 00 24 30 2e  |SPLICE.......$0.|
```
"#]

use core::fmt;

const LINE_LEN: usize = 16;

/// Renders bytes as a canonical hex dump: offset, sixteen hex bytes and their
/// printable ASCII form.
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (line, chunk) in self.0.chunks(LINE_LEN).enumerate() {
            write!(f, "{:08x}  ", line * LINE_LEN)?;
            for i in 0..LINE_LEN {
                match chunk.get(i) {
                    Some(byte) => write!(f, "{byte:02x} ")?,
                    None => f.write_str("   ")?,
                }
                if i == LINE_LEN / 2 - 1 {
                    f.write_str(" ")?;
                }
            }
            f.write_str(" |")?;
            for &byte in chunk {
                let c = if byte.is_ascii_graphic() || byte == b' ' {
                    byte as char
                } else {
                    '.'
                };
                write!(f, "{c}")?;
            }
            f.write_str("|\n")?;
        }
        Ok(())
    }
}

/// Returns the hex dump of `bytes`
pub fn hex_dump(bytes: &[u8]) -> String {
    HexDump(bytes).to_string()
}
