//! BER encoding.
//!
//! Uses a reverse buffer approach: writes from end backwards to avoid
//! needing to pre-calculate lengths.

use super::length::encode_length;
use super::tag;
use crate::error::Result;
use crate::oid::Oid;
use bytes::Bytes;

/// Buffer for BER encoding that writes backwards.
///
/// Content is written first, then the length and tag are prepended, so
/// nested TLVs must be pushed innermost-last and siblings in reverse order.
pub struct EncodeBuf {
    buf: Vec<u8>,
}

impl EncodeBuf {
    /// Create a new encode buffer with default capacity.
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    /// Create a new encode buffer with specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Push a single byte (prepends to front).
    pub fn push_byte(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Push multiple bytes (prepends to front, order preserved in output).
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend(bytes.iter().rev());
    }

    /// Push a BER length encoding.
    pub fn push_length(&mut self, len: usize) {
        let (bytes, count) = encode_length(len);
        // encode_length already returns the bytes in prepend order
        self.buf.extend_from_slice(&bytes[..count]);
    }

    /// Push a BER tag.
    pub fn push_tag(&mut self, tag: u8) {
        self.buf.push(tag);
    }

    /// Get the current length of encoded data.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check if buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Encode a primitive TLV with an arbitrary tag and payload.
    pub fn push_tlv(&mut self, tag: u8, payload: &[u8]) {
        self.push_bytes(payload);
        self.push_length(payload.len());
        self.push_tag(tag);
    }

    /// Encode a constructed type (SEQUENCE etc).
    ///
    /// Calls the closure to encode contents, then wraps with length and tag.
    pub fn push_constructed<F>(&mut self, tag: u8, f: F)
    where
        F: FnOnce(&mut Self),
    {
        let start_len = self.len();
        f(self);
        let content_len = self.len() - start_len;
        self.push_length(content_len);
        self.push_tag(tag);
    }

    /// Encode a SEQUENCE.
    pub fn push_sequence<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Self),
    {
        self.push_constructed(tag::universal::SEQUENCE, f);
    }

    /// Encode a constructed type whose contents can fail to encode.
    ///
    /// On error the partially written contents stay in the buffer; callers
    /// are expected to discard it.
    pub fn try_push_constructed<F>(&mut self, tag: u8, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let start_len = self.len();
        f(self)?;
        let content_len = self.len() - start_len;
        self.push_length(content_len);
        self.push_tag(tag);
        Ok(())
    }

    /// Encode a SEQUENCE whose contents can fail to encode.
    pub fn try_push_sequence<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        self.try_push_constructed(tag::universal::SEQUENCE, f)
    }

    /// Encode an INTEGER.
    pub fn push_integer(&mut self, value: i32) {
        let (arr, len) = encode_integer_stack(value);
        // Valid bytes are at the end of the array
        self.push_bytes(&arr[4 - len..]);
        self.push_length(len);
        self.push_tag(tag::universal::INTEGER);
    }

    /// Encode an unsigned 32-bit integer with a specific tag.
    pub fn push_unsigned32(&mut self, tag: u8, value: u32) {
        let (arr, len) = encode_unsigned32_stack(value);
        self.push_bytes(&arr[5 - len..]);
        self.push_length(len);
        self.push_tag(tag);
    }

    /// Encode an unsigned 64-bit integer with a specific tag (Counter64).
    pub fn push_unsigned64(&mut self, tag: u8, value: u64) {
        let (arr, len) = encode_unsigned64_stack(value);
        self.push_bytes(&arr[9 - len..]);
        self.push_length(len);
        self.push_tag(tag);
    }

    /// Encode a BOOLEAN (0xFF for true per DER, 0x00 for false).
    pub fn push_boolean(&mut self, value: bool) {
        self.push_byte(if value { 0xFF } else { 0x00 });
        self.push_length(1);
        self.push_tag(tag::universal::BOOLEAN);
    }

    /// Encode an OCTET STRING.
    pub fn push_octet_string(&mut self, data: &[u8]) {
        self.push_tlv(tag::universal::OCTET_STRING, data);
    }

    /// Encode a NULL.
    pub fn push_null(&mut self) {
        self.push_empty(tag::universal::NULL);
    }

    /// Encode a zero-length TLV (NULL and the exception markers).
    pub fn push_empty(&mut self, tag: u8) {
        self.push_length(0);
        self.push_tag(tag);
    }

    /// Encode an OBJECT IDENTIFIER.
    ///
    /// Fails without writing anything if the OID does not pass
    /// [`Oid::validate_all`].
    pub fn push_oid(&mut self, oid: &Oid) -> Result<()> {
        let ber = oid.to_ber_smallvec()?;
        self.push_tlv(tag::universal::OBJECT_IDENTIFIER, &ber);
        Ok(())
    }

    /// Encode an IP address (network byte order).
    pub fn push_ip_address(&mut self, addr: [u8; 4]) {
        self.push_tlv(tag::application::IP_ADDRESS, &addr);
    }

    /// Finalize and return the encoded bytes.
    ///
    /// The buffer is reversed to produce the correct order.
    pub fn finish(mut self) -> Bytes {
        self.buf.reverse();
        Bytes::from(self.buf)
    }

    /// Finalize and return as `Vec<u8>`.
    pub fn finish_vec(mut self) -> Vec<u8> {
        self.buf.reverse();
        self.buf
    }
}

impl Default for EncodeBuf {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a single primitive TLV.
///
/// # Examples
///
/// ```
/// use snmp_varbind::ber::encode_tlv;
///
/// let tlv = encode_tlv(0x04, b"public");
/// assert_eq!(&tlv[..2], &[0x04, 0x06]);
/// assert_eq!(&tlv[2..], b"public");
/// ```
pub fn encode_tlv(tag: u8, payload: &[u8]) -> Bytes {
    let mut buf = EncodeBuf::with_capacity(payload.len() + 6);
    buf.push_tlv(tag, payload);
    buf.finish()
}

/// Wrap already-encoded bytes in a SEQUENCE header.
pub fn encode_sequence(content: &[u8]) -> Bytes {
    let mut buf = EncodeBuf::with_capacity(content.len() + 6);
    buf.push_sequence(|buf| buf.push_bytes(content));
    buf.finish()
}

/// Encode a signed 32-bit integer in minimal BER form.
///
/// Returns a stack-allocated array and the number of valid bytes.
/// The valid bytes are at the END of the array (for reverse-buffer compatibility).
#[inline]
fn encode_integer_stack(value: i32) -> ([u8; 4], usize) {
    let bytes = value.to_be_bytes();

    let mut start = 0;
    if value >= 0 {
        // Skip leading 0x00 bytes, keeping one if the next byte has its sign bit set
        while start < 3 && bytes[start] == 0 && bytes[start + 1] & 0x80 == 0 {
            start += 1;
        }
    } else {
        // Skip leading 0xFF bytes, keeping one if the next byte would read as positive
        while start < 3 && bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0 {
            start += 1;
        }
    }

    (bytes, 4 - start)
}

/// Encode an unsigned 32-bit integer.
///
/// A 0x00 prefix is added when the top bit is set so the value is not read
/// back as negative.
#[inline]
fn encode_unsigned32_stack(value: u32) -> ([u8; 5], usize) {
    let mut result = [0u8; 5];
    result[1..].copy_from_slice(&value.to_be_bytes());
    (result, unsigned_content_len(&result[1..]))
}

/// Encode an unsigned 64-bit integer.
#[inline]
fn encode_unsigned64_stack(value: u64) -> ([u8; 9], usize) {
    let mut result = [0u8; 9];
    result[1..].copy_from_slice(&value.to_be_bytes());
    (result, unsigned_content_len(&result[1..]))
}

/// Minimal content length for big-endian unsigned `bytes`, including the
/// 0x00 sign guard when needed.
fn unsigned_content_len(bytes: &[u8]) -> usize {
    let width = bytes.len();
    let Some(start) = bytes.iter().position(|&b| b != 0) else {
        return 1;
    };
    if bytes[start] & 0x80 != 0 {
        width - start + 1
    } else {
        width - start
    }
}
