//! Error types for snmp-varbind.
//!
//! All errors are `#[non_exhaustive]` to allow adding new variants without breaking changes.

use crate::type_tag::TypeTag;

/// Result type alias using the library's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// BER decode error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Expected different tag.
    UnexpectedTag { expected: u8, actual: u8 },
    /// Data truncated unexpectedly.
    TruncatedData,
    /// Invalid BER length encoding.
    InvalidLength,
    /// Indefinite length not supported.
    IndefiniteLength,
    /// Integer value overflow.
    IntegerOverflow,
    /// Zero-length integer.
    ZeroLengthInteger,
    /// Invalid OID encoding.
    InvalidOidEncoding,
    /// OID exceeds maximum arc count during decode.
    OidTooLong { count: usize, max: usize },
    /// Constructed OCTET STRING not supported.
    ConstructedOctetString,
    /// NULL with non-zero length.
    InvalidNull,
    /// BOOLEAN must be exactly one octet.
    InvalidBooleanLength { length: usize },
    /// Invalid IP address length.
    InvalidIpAddressLength { length: usize },
    /// BIT STRING values cannot be decoded.
    BitStringUnsupported,
    /// Length field too long.
    LengthTooLong { octets: usize },
    /// Length exceeds maximum.
    LengthExceedsMax { length: usize, max: usize },
    /// Integer64 too long.
    Integer64TooLong { length: usize },
    /// Insufficient data for read.
    InsufficientData { needed: usize, available: usize },
    /// Bytes left over after a complete varbind.
    TrailingData { remaining: usize },
}

impl std::fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedTag { expected, actual } => {
                write!(f, "expected tag 0x{:02X}, got 0x{:02X}", expected, actual)
            }
            Self::TruncatedData => write!(f, "unexpected end of data"),
            Self::InvalidLength => write!(f, "invalid length encoding"),
            Self::IndefiniteLength => write!(f, "indefinite length encoding not supported"),
            Self::IntegerOverflow => write!(f, "integer overflow"),
            Self::ZeroLengthInteger => write!(f, "zero-length integer"),
            Self::InvalidOidEncoding => write!(f, "invalid OID encoding"),
            Self::OidTooLong { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
            Self::ConstructedOctetString => {
                write!(f, "constructed OCTET STRING (0x24) not supported")
            }
            Self::InvalidNull => write!(f, "NULL with non-zero length"),
            Self::InvalidBooleanLength { length } => {
                write!(f, "BOOLEAN must be 1 byte, got {}", length)
            }
            Self::InvalidIpAddressLength { length } => {
                write!(f, "IP address must be 4 bytes, got {}", length)
            }
            Self::BitStringUnsupported => write!(f, "BIT STRING decoding not supported"),
            Self::LengthTooLong { octets } => {
                write!(f, "length encoding too long ({} octets)", octets)
            }
            Self::LengthExceedsMax { length, max } => {
                write!(f, "length {} exceeds maximum {}", length, max)
            }
            Self::Integer64TooLong { length } => {
                write!(f, "integer64 too long: {} bytes", length)
            }
            Self::InsufficientData { needed, available } => {
                write!(f, "need {} bytes but only {} remaining", needed, available)
            }
            Self::TrailingData { remaining } => {
                write!(f, "{} trailing bytes after varbind", remaining)
            }
        }
    }
}

/// OID validation error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OidErrorKind {
    /// Empty OID string.
    Empty,
    /// Invalid arc value (empty, signed, non-numeric or out of range).
    InvalidArc,
    /// First arc must be 0, 1, or 2.
    InvalidFirstArc(u32),
    /// Second arc too large for first arc value.
    InvalidSecondArc { first: u32, second: u32 },
    /// OID too short (minimum 2 arcs).
    TooShort,
    /// OID has too many arcs (exceeds MAX_OID_LEN).
    TooManyArcs { count: usize, max: usize },
}

impl std::fmt::Display for OidErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "empty OID"),
            Self::InvalidArc => write!(f, "invalid arc value"),
            Self::InvalidFirstArc(v) => write!(f, "first arc must be 0, 1, or 2, got {}", v),
            Self::InvalidSecondArc { first, second } => {
                write!(f, "second arc {} too large for first arc {}", second, first)
            }
            Self::TooShort => write!(f, "OID must have at least 2 arcs"),
            Self::TooManyArcs { count, max } => {
                write!(f, "OID has {} arcs, exceeds maximum {}", count, max)
            }
        }
    }
}

/// Reasons a native value cannot be represented under a type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionErrorKind {
    /// The native value is of the wrong kind for this tag.
    Mismatch { found: &'static str },
    /// Signed value outside the tag's range.
    OutOfRange(i64),
    /// Unsigned value outside the tag's range.
    OutOfRangeUnsigned(u64),
    /// IpAddress needs 4 octets or a dotted quad.
    InvalidIpAddress,
    /// Text could not be parsed as an OID.
    InvalidOid,
}

impl std::fmt::Display for ConversionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mismatch { found } => write!(f, "cannot convert {} value", found),
            Self::OutOfRange(v) => write!(f, "{} out of range", v),
            Self::OutOfRangeUnsigned(v) => write!(f, "{} out of range", v),
            Self::InvalidIpAddress => write!(f, "expected 4 octets or a dotted quad"),
            Self::InvalidOid => write!(f, "text is not a dotted OID"),
        }
    }
}

/// Library error type.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid OID format.
    #[error("invalid OID{}: {kind}", input.as_ref().map(|s| format!(" {:?}", s)).unwrap_or_default())]
    InvalidOid {
        kind: OidErrorKind,
        input: Option<Box<str>>, // Only allocated when parsing string input
    },

    /// Symbolic type outside the type tag registry.
    #[error("{symbol} cannot be converted")]
    UnsupportedType { symbol: Box<str> },

    /// Native value has no representation under the requested tag.
    #[error("cannot convert value to {tag}: {kind}")]
    ValueConversion {
        tag: TypeTag,
        kind: ConversionErrorKind,
    },

    /// Wire tag outside the supported SNMP tag set.
    #[error("0x{tag:02X} is an invalid type")]
    InvalidType { tag: u8 },

    /// BER decoding error.
    #[error("decode error at offset {offset}: {kind}")]
    Decode {
        offset: usize,
        kind: DecodeErrorKind,
    },
}

impl Error {
    /// Create a decode error.
    pub fn decode(offset: usize, kind: DecodeErrorKind) -> Self {
        Self::Decode { offset, kind }
    }

    /// Create an invalid OID error from a kind (no input string).
    pub fn invalid_oid(kind: OidErrorKind) -> Self {
        Self::InvalidOid { kind, input: None }
    }

    /// Create an invalid OID error with the input string that failed.
    pub fn invalid_oid_with_input(kind: OidErrorKind, input: impl Into<Box<str>>) -> Self {
        Self::InvalidOid {
            kind,
            input: Some(input.into()),
        }
    }

    /// Create an unsupported type error for a registry miss.
    pub fn unsupported_type(symbol: impl Into<Box<str>>) -> Self {
        Self::UnsupportedType {
            symbol: symbol.into(),
        }
    }

    /// Create a value conversion error.
    pub fn conversion(tag: TypeTag, kind: ConversionErrorKind) -> Self {
        Self::ValueConversion { tag, kind }
    }

    /// Whether this error reports a buffer shorter than its declared lengths.
    pub fn is_truncated(&self) -> bool {
        matches!(
            self,
            Self::Decode {
                kind: DecodeErrorKind::TruncatedData | DecodeErrorKind::InsufficientData { .. },
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_unsupported_type() {
        let err = Error::unsupported_type("frobnicate");
        assert_eq!(err.to_string(), "frobnicate cannot be converted");
    }

    #[test]
    fn test_display_invalid_type() {
        let err = Error::InvalidType { tag: 0x4F };
        assert_eq!(err.to_string(), "0x4F is an invalid type");
    }

    #[test]
    fn test_display_invalid_oid_with_input() {
        let err = Error::invalid_oid_with_input(OidErrorKind::InvalidArc, "1.-2.3");
        assert_eq!(err.to_string(), "invalid OID \"1.-2.3\": invalid arc value");
    }

    #[test]
    fn test_display_conversion() {
        let err = Error::conversion(TypeTag::Gauge, ConversionErrorKind::OutOfRange(-1));
        assert_eq!(err.to_string(), "cannot convert value to gauge: -1 out of range");
    }

    #[test]
    fn test_is_truncated() {
        assert!(Error::decode(0, DecodeErrorKind::TruncatedData).is_truncated());
        assert!(
            Error::decode(
                2,
                DecodeErrorKind::InsufficientData {
                    needed: 10,
                    available: 3
                }
            )
            .is_truncated()
        );
        assert!(!Error::decode(0, DecodeErrorKind::InvalidNull).is_truncated());
        assert!(!Error::InvalidType { tag: 0x99 }.is_truncated());
    }
}
