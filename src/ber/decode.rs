//! BER decoding.
//!
//! Zero-copy decoding using `Bytes` to avoid allocations. Every read is
//! bounds-checked against the remaining input; a declared length that runs
//! past the end of the buffer is reported as truncation, never read.

use super::length::decode_length;
use super::tag;
use crate::error::{DecodeErrorKind, Error, Result};
use crate::oid::Oid;
use bytes::Bytes;

/// BER decoder that reads from a byte buffer.
pub struct Decoder {
    data: Bytes,
    offset: usize,
    /// Offset of `data` within the outermost buffer, for error reporting.
    base: usize,
}

impl Decoder {
    /// Create a new decoder from bytes.
    pub fn new(data: Bytes) -> Self {
        Self {
            data,
            offset: 0,
            base: 0,
        }
    }

    /// Create a decoder from a byte slice (copies the data).
    pub fn from_slice(data: &[u8]) -> Self {
        Self::new(Bytes::copy_from_slice(data))
    }

    /// Get the current offset relative to the outermost buffer.
    pub fn offset(&self) -> usize {
        self.base + self.offset
    }

    /// Get remaining bytes.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.offset
    }

    /// Check if we've reached the end.
    pub fn is_empty(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Build a decode error at the current position, logging it first.
    pub(crate) fn error(&self, kind: DecodeErrorKind) -> Error {
        tracing::debug!(target: "snmp_varbind::ber", { snmp.offset = %self.offset(), kind = %kind }, "BER decode failed");
        Error::decode(self.offset(), kind)
    }

    /// Read a single byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        let Some(&byte) = self.data.get(self.offset) else {
            return Err(self.error(DecodeErrorKind::TruncatedData));
        };
        self.offset += 1;
        Ok(byte)
    }

    /// Read a tag byte.
    pub fn read_tag(&mut self) -> Result<u8> {
        self.read_byte()
    }

    /// Read a length.
    pub fn read_length(&mut self) -> Result<usize> {
        let (len, consumed) =
            decode_length(&self.data[self.offset..], self.offset()).inspect_err(|e| {
                tracing::debug!(target: "snmp_varbind::ber", { snmp.offset = %self.offset(), error = %e }, "invalid length");
            })?;
        self.offset += consumed;
        Ok(len)
    }

    /// Read raw bytes without copying.
    pub fn read_bytes(&mut self, len: usize) -> Result<Bytes> {
        // saturating_add keeps a huge len from wrapping past the bounds check
        if self.offset.saturating_add(len) > self.data.len() {
            return Err(self.error(DecodeErrorKind::InsufficientData {
                needed: len,
                available: self.remaining(),
            }));
        }
        let bytes = self.data.slice(self.offset..self.offset + len);
        self.offset += len;
        Ok(bytes)
    }

    /// Read and expect a specific tag, returning the content length.
    pub fn expect_tag(&mut self, expected: u8) -> Result<usize> {
        let actual = self.read_tag()?;
        if actual != expected {
            self.offset -= 1;
            return Err(self.error(DecodeErrorKind::UnexpectedTag { expected, actual }));
        }
        self.read_length()
    }

    /// Read a BER integer (signed).
    pub fn read_integer(&mut self) -> Result<i32> {
        let len = self.expect_tag(tag::universal::INTEGER)?;
        self.read_integer_value(len)
    }

    /// Read integer value given the length.
    ///
    /// Redundant sign-extension octets are accepted; a value that does not
    /// fit in 32 bits is an error.
    pub fn read_integer_value(&mut self, len: usize) -> Result<i32> {
        if len == 0 {
            return Err(self.error(DecodeErrorKind::ZeroLengthInteger));
        }
        let bytes = self.read_bytes(len)?;

        let mut start = 0;
        while start + 1 < bytes.len()
            && ((bytes[start] == 0x00 && bytes[start + 1] & 0x80 == 0)
                || (bytes[start] == 0xFF && bytes[start + 1] & 0x80 != 0))
        {
            start += 1;
        }
        if bytes.len() - start > 4 {
            return Err(self.error(DecodeErrorKind::IntegerOverflow));
        }

        let is_negative = bytes[start] & 0x80 != 0;
        let init: i32 = if is_negative { -1 } else { 0 };
        Ok(bytes[start..]
            .iter()
            .fold(init, |acc, &b| (acc << 8) | b as i32))
    }

    /// Read an unsigned 32-bit integer with specific tag.
    pub fn read_unsigned32(&mut self, expected_tag: u8) -> Result<u32> {
        let len = self.expect_tag(expected_tag)?;
        self.read_unsigned32_value(len)
    }

    /// Read unsigned 32-bit integer value given length.
    pub fn read_unsigned32_value(&mut self, len: usize) -> Result<u32> {
        let value = self.read_unsigned_value(len, 4, DecodeErrorKind::IntegerOverflow)?;
        Ok(value as u32)
    }

    /// Read a 64-bit unsigned integer (Counter64).
    pub fn read_unsigned64(&mut self, expected_tag: u8) -> Result<u64> {
        let len = self.expect_tag(expected_tag)?;
        self.read_unsigned64_value(len)
    }

    /// Read 64-bit unsigned integer value given the length.
    pub fn read_unsigned64_value(&mut self, len: usize) -> Result<u64> {
        self.read_unsigned_value(len, 8, DecodeErrorKind::Integer64TooLong { length: len })
    }

    /// Big-endian unsigned read; leading zero octets don't count toward `width`.
    fn read_unsigned_value(
        &mut self,
        len: usize,
        width: usize,
        overflow: DecodeErrorKind,
    ) -> Result<u64> {
        if len == 0 {
            return Err(self.error(DecodeErrorKind::ZeroLengthInteger));
        }
        let bytes = self.read_bytes(len)?;
        let significant = bytes.iter().skip_while(|&&b| b == 0).count();
        if significant > width {
            return Err(self.error(overflow));
        }
        Ok(bytes[len - significant..]
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | b as u64))
    }

    /// Read BOOLEAN content given the length.
    pub fn read_boolean_value(&mut self, len: usize) -> Result<bool> {
        if len != 1 {
            return Err(self.error(DecodeErrorKind::InvalidBooleanLength { length: len }));
        }
        Ok(self.read_byte()? != 0)
    }

    /// Read an OCTET STRING.
    pub fn read_octet_string(&mut self) -> Result<Bytes> {
        let len = self.expect_tag(tag::universal::OCTET_STRING)?;
        self.read_bytes(len)
    }

    /// Read a NULL.
    pub fn read_null(&mut self) -> Result<()> {
        let len = self.expect_tag(tag::universal::NULL)?;
        if len != 0 {
            return Err(self.error(DecodeErrorKind::InvalidNull));
        }
        Ok(())
    }

    /// Read an OBJECT IDENTIFIER.
    pub fn read_oid(&mut self) -> Result<Oid> {
        let len = self.expect_tag(tag::universal::OBJECT_IDENTIFIER)?;
        self.read_oid_value(len)
    }

    /// Read an OID given a pre-read length.
    pub fn read_oid_value(&mut self, len: usize) -> Result<Oid> {
        let start = self.offset();
        let bytes = self.read_bytes(len)?;
        Oid::from_ber(&bytes).map_err(|e| match e {
            Error::Decode { offset, kind } => {
                tracing::debug!(target: "snmp_varbind::ber", { snmp.offset = %(start + offset), kind = %kind }, "invalid OID content");
                Error::decode(start + offset, kind)
            }
            other => other,
        })
    }

    /// Read an IP address.
    pub fn read_ip_address(&mut self) -> Result<[u8; 4]> {
        let len = self.expect_tag(tag::application::IP_ADDRESS)?;
        self.read_ip_address_value(len)
    }

    /// Read IpAddress content given the length.
    pub fn read_ip_address_value(&mut self, len: usize) -> Result<[u8; 4]> {
        if len != 4 {
            return Err(self.error(DecodeErrorKind::InvalidIpAddressLength { length: len }));
        }
        let bytes = self.read_bytes(4)?;
        Ok([bytes[0], bytes[1], bytes[2], bytes[3]])
    }

    /// Read a SEQUENCE, returning a decoder for its contents.
    pub fn read_sequence(&mut self) -> Result<Decoder> {
        self.read_constructed(tag::universal::SEQUENCE)
    }

    /// Read a constructed type with a specific tag, returning a decoder for its contents.
    pub fn read_constructed(&mut self, expected_tag: u8) -> Result<Decoder> {
        let len = self.expect_tag(expected_tag)?;
        self.sub_decoder(len)
    }

    /// Read a complete TLV, returning its tag and content.
    pub fn read_tlv(&mut self) -> Result<(u8, Bytes)> {
        let tag = self.read_tag()?;
        let len = self.read_length()?;
        Ok((tag, self.read_bytes(len)?))
    }

    /// Skip a TLV (tag-length-value) without parsing.
    pub fn skip_tlv(&mut self) -> Result<()> {
        self.read_tlv().map(|_| ())
    }

    /// Create a sub-decoder for a portion of the remaining data.
    pub fn sub_decoder(&mut self, len: usize) -> Result<Decoder> {
        let base = self.offset();
        let content = self.read_bytes(len)?;
        Ok(Decoder {
            data: content,
            offset: 0,
            base,
        })
    }

    /// Fail unless every byte has been consumed.
    pub fn finish(&self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.error(DecodeErrorKind::TrailingData {
                remaining: self.remaining(),
            }))
        }
    }
}

/// One tag-length-value triple split off the front of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tlv<'a> {
    /// Tag byte.
    pub tag: u8,
    /// Declared content length.
    pub length: usize,
    /// Content octets (`length` bytes).
    pub payload: &'a [u8],
    /// Bytes following the TLV.
    pub remainder: &'a [u8],
}

/// Split the first TLV off `data`.
///
/// # Examples
///
/// ```
/// use snmp_varbind::ber::decode_tlv;
///
/// let tlv = decode_tlv(&[0x02, 0x01, 0x2A, 0x05, 0x00]).unwrap();
/// assert_eq!(tlv.tag, 0x02);
/// assert_eq!(tlv.payload, &[0x2A]);
/// assert_eq!(tlv.remainder, &[0x05, 0x00]);
///
/// // Declared length past the end of the buffer
/// assert!(decode_tlv(&[0x04, 0x05, b'a']).unwrap_err().is_truncated());
/// ```
pub fn decode_tlv(data: &[u8]) -> Result<Tlv<'_>> {
    let Some((&tag, rest)) = data.split_first() else {
        tracing::debug!(target: "snmp_varbind::ber", { snmp.offset = 0, kind = %DecodeErrorKind::TruncatedData }, "empty TLV input");
        return Err(Error::decode(0, DecodeErrorKind::TruncatedData));
    };
    let (length, consumed) = decode_length(rest, 1)?;
    let rest = &rest[consumed..];
    if length > rest.len() {
        let offset = 1 + consumed;
        let kind = DecodeErrorKind::InsufficientData {
            needed: length,
            available: rest.len(),
        };
        tracing::debug!(target: "snmp_varbind::ber", { snmp.offset = %offset, kind = %kind }, "TLV extends past end of data");
        return Err(Error::decode(offset, kind));
    }
    let (payload, remainder) = rest.split_at(length);
    Ok(Tlv {
        tag,
        length,
        payload,
        remainder,
    })
}
