//! Internal utilities.

use std::fmt;

/// Encode bytes as a lowercase hex string.
pub(crate) fn encode_hex(bytes: &[u8]) -> String {
    HexDisplay(bytes).to_string()
}

/// Lazy hex formatter, only formats when actually displayed.
///
/// Used in tracing fields so disabled levels don't allocate.
pub(crate) struct HexDisplay<'a>(pub(crate) &'a [u8]);

impl fmt::Display for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for HexDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Decode a hex string into bytes. Test helper.
#[cfg(test)]
pub(crate) fn decode_hex(s: &str) -> Option<Vec<u8>> {
    if !s.len().is_multiple_of(2) {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(s.get(i..i + 2)?, 16).ok())
        .collect()
}
