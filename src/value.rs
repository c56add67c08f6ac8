//! SNMP value types.
//!
//! [`Value`] is what a varbind carries on the wire; every variant maps to
//! exactly one [`TypeTag`]. [`NativeValue`] is the caller-side input that
//! [`Value::from_native`] converts under a requested tag.

use crate::ber::{Decoder, EncodeBuf, tag};
use crate::error::{ConversionErrorKind, DecodeErrorKind, Error, Result};
use crate::oid::Oid;
use crate::type_tag::TypeTag;
use crate::util::encode_hex;
use bytes::Bytes;
use std::net::Ipv4Addr;

/// SNMP value.
///
/// Represents all SNMP data types including exception markers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// INTEGER (signed 32-bit)
    Integer(i32),

    /// Gauge32 (unsigned 32-bit, non-wrapping)
    Gauge(u32),

    /// Counter32 (unsigned 32-bit, wrapping)
    Counter(u32),

    /// Counter64 (unsigned 64-bit, wrapping).
    ///
    /// SNMPv2c/v3 only.
    Counter64(u64),

    /// TimeTicks (hundredths of seconds)
    TimeTicks(u32),

    /// UInteger32
    Unsigned(u32),

    /// BOOLEAN
    Boolean(bool),

    /// OCTET STRING (arbitrary bytes).
    ///
    /// RFC 2578 caps OCTET STRING at 65535 octets. This limit is **not
    /// enforced** during decoding.
    OctetString(Bytes),

    /// BIT STRING, encoded verbatim. Decoding is not supported.
    BitString(Bytes),

    /// IpAddress (4 bytes, network byte order)
    IpAddress([u8; 4]),

    /// OBJECT IDENTIFIER
    ObjectId(Oid),

    /// NULL
    Null,

    /// Opaque (legacy, arbitrary bytes)
    Opaque(Bytes),

    /// noSuchObject exception - the requested OID exists in the MIB but has no value.
    ///
    /// # Example
    ///
    /// ```
    /// use snmp_varbind::Value;
    ///
    /// let response = Value::NoSuchObject;
    /// assert!(response.is_exception());
    /// ```
    NoSuchObject,

    /// noSuchInstance exception - the specific instance does not exist.
    NoSuchInstance,

    /// endOfMibView exception - no OIDs remain past the requested one.
    ///
    /// This is the normal termination condition for SNMP walks.
    EndOfMibView,
}

impl Value {
    /// The type tag this value is carried under.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::{TypeTag, Value};
    ///
    /// assert_eq!(Value::Gauge(5).type_tag(), TypeTag::Gauge);
    /// assert_eq!(Value::EndOfMibView.type_tag(), TypeTag::EndOfMibView);
    /// ```
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Value::Integer(_) => TypeTag::Integer,
            Value::Gauge(_) => TypeTag::Gauge,
            Value::Counter(_) => TypeTag::Counter,
            Value::Counter64(_) => TypeTag::Counter64,
            Value::TimeTicks(_) => TypeTag::TimeTicks,
            Value::Unsigned(_) => TypeTag::Unsigned,
            Value::Boolean(_) => TypeTag::Boolean,
            Value::OctetString(_) => TypeTag::OctetString,
            Value::BitString(_) => TypeTag::BitString,
            Value::IpAddress(_) => TypeTag::IpAddress,
            Value::ObjectId(_) => TypeTag::ObjectId,
            Value::Null => TypeTag::Null,
            Value::Opaque(_) => TypeTag::Opaque,
            Value::NoSuchObject => TypeTag::NoSuchObject,
            Value::NoSuchInstance => TypeTag::NoSuchInstance,
            Value::EndOfMibView => TypeTag::EndOfMibView,
        }
    }

    /// Convert a native value into the representation required by `tag`.
    ///
    /// Numeric values must fit the tag's range; byte-string tags accept
    /// bytes or text verbatim; IpAddress accepts an address, 4 octets or a
    /// dotted quad; ObjectId accepts an OID or its dotted text. NULL and
    /// the exception markers take no payload.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::{NativeValue, TypeTag, Value};
    ///
    /// let v = Value::from_native(TypeTag::Gauge, NativeValue::Int(42)).unwrap();
    /// assert_eq!(v, Value::Gauge(42));
    ///
    /// let v = Value::from_native(TypeTag::IpAddress, "10.0.0.1".into()).unwrap();
    /// assert_eq!(v, Value::IpAddress([10, 0, 0, 1]));
    ///
    /// assert!(Value::from_native(TypeTag::Gauge, NativeValue::Int(-1)).is_err());
    /// assert!(Value::from_native(TypeTag::Integer, "abc".into()).is_err());
    /// ```
    pub fn from_native(tag: TypeTag, native: NativeValue) -> Result<Value> {
        let mismatch = |native: &NativeValue| {
            Error::conversion(
                tag,
                ConversionErrorKind::Mismatch {
                    found: native.kind(),
                },
            )
        };

        match tag {
            TypeTag::Integer => match native {
                NativeValue::Int(v) => i32::try_from(v)
                    .map(Value::Integer)
                    .map_err(|_| Error::conversion(tag, ConversionErrorKind::OutOfRange(v))),
                NativeValue::UInt(v) => i32::try_from(v).map(Value::Integer).map_err(|_| {
                    Error::conversion(tag, ConversionErrorKind::OutOfRangeUnsigned(v))
                }),
                other => Err(mismatch(&other)),
            },
            TypeTag::Gauge | TypeTag::Counter | TypeTag::TimeTicks | TypeTag::Unsigned => {
                let v = match native {
                    NativeValue::Int(v) => u32::try_from(v)
                        .map_err(|_| Error::conversion(tag, ConversionErrorKind::OutOfRange(v)))?,
                    NativeValue::UInt(v) => u32::try_from(v).map_err(|_| {
                        Error::conversion(tag, ConversionErrorKind::OutOfRangeUnsigned(v))
                    })?,
                    other => return Err(mismatch(&other)),
                };
                Ok(match tag {
                    TypeTag::Gauge => Value::Gauge(v),
                    TypeTag::Counter => Value::Counter(v),
                    TypeTag::TimeTicks => Value::TimeTicks(v),
                    _ => Value::Unsigned(v),
                })
            }
            TypeTag::Counter64 => match native {
                NativeValue::Int(v) => u64::try_from(v)
                    .map(Value::Counter64)
                    .map_err(|_| Error::conversion(tag, ConversionErrorKind::OutOfRange(v))),
                NativeValue::UInt(v) => Ok(Value::Counter64(v)),
                other => Err(mismatch(&other)),
            },
            TypeTag::Boolean => match native {
                NativeValue::Bool(b) => Ok(Value::Boolean(b)),
                other => Err(mismatch(&other)),
            },
            TypeTag::OctetString | TypeTag::BitString | TypeTag::Opaque => {
                let data = match native {
                    NativeValue::Bytes(b) => b,
                    NativeValue::Text(s) => Bytes::from(s),
                    other => return Err(mismatch(&other)),
                };
                Ok(match tag {
                    TypeTag::OctetString => Value::OctetString(data),
                    TypeTag::BitString => Value::BitString(data),
                    _ => Value::Opaque(data),
                })
            }
            TypeTag::IpAddress => {
                let invalid = || Error::conversion(tag, ConversionErrorKind::InvalidIpAddress);
                match native {
                    NativeValue::Ip(addr) => Ok(Value::IpAddress(addr.octets())),
                    NativeValue::Bytes(b) => <[u8; 4]>::try_from(&b[..])
                        .map(Value::IpAddress)
                        .map_err(|_| invalid()),
                    NativeValue::Text(s) => s
                        .parse::<Ipv4Addr>()
                        .map(|addr| Value::IpAddress(addr.octets()))
                        .map_err(|_| invalid()),
                    other => Err(mismatch(&other)),
                }
            }
            TypeTag::ObjectId => {
                let oid = match native {
                    NativeValue::Oid(oid) => oid,
                    NativeValue::Text(s) => Oid::parse(&s)
                        .map_err(|_| Error::conversion(tag, ConversionErrorKind::InvalidOid))?,
                    other => return Err(mismatch(&other)),
                };
                // Must survive BER encoding unchanged
                oid.validate_all()
                    .map_err(|_| Error::conversion(tag, ConversionErrorKind::InvalidOid))?;
                Ok(Value::ObjectId(oid))
            }
            TypeTag::Null
            | TypeTag::NoSuchObject
            | TypeTag::NoSuchInstance
            | TypeTag::EndOfMibView => match native {
                NativeValue::Null => Ok(match tag {
                    TypeTag::Null => Value::Null,
                    TypeTag::NoSuchObject => Value::NoSuchObject,
                    TypeTag::NoSuchInstance => Value::NoSuchInstance,
                    _ => Value::EndOfMibView,
                }),
                other => Err(mismatch(&other)),
            },
        }
    }

    /// Build a Counter64 from its high and low 32-bit halves.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::Value;
    ///
    /// assert_eq!(Value::counter64_from_halves(1, 0), Value::Counter64(4_294_967_296));
    /// ```
    pub const fn counter64_from_halves(high: u32, low: u32) -> Value {
        Value::Counter64(((high as u64) << 32) | low as u64)
    }

    /// Split a Counter64 into its (high, low) 32-bit halves.
    pub const fn counter64_halves(&self) -> Option<(u32, u32)> {
        match self {
            Value::Counter64(v) => Some(((*v >> 32) as u32, *v as u32)),
            _ => None,
        }
    }

    /// Try to get as i32.
    ///
    /// Returns `Some(i32)` for [`Value::Integer`], `None` otherwise.
    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as u32.
    ///
    /// Returns `Some(u32)` for the 32-bit unsigned kinds or a non-negative
    /// [`Value::Integer`].
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::Value;
    ///
    /// assert_eq!(Value::Counter(100).as_u32(), Some(100));
    /// assert_eq!(Value::Unsigned(7).as_u32(), Some(7));
    /// assert_eq!(Value::Integer(-1).as_u32(), None);
    /// assert_eq!(Value::Counter64(100).as_u32(), None);
    /// ```
    pub fn as_u32(&self) -> Option<u32> {
        match self {
            Value::Counter(v) | Value::Gauge(v) | Value::TimeTicks(v) | Value::Unsigned(v) => {
                Some(*v)
            }
            Value::Integer(v) => u32::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Try to get as u64.
    ///
    /// Returns `Some(u64)` for [`Value::Counter64`] and anything
    /// [`as_u32()`](Self::as_u32) accepts.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Counter64(v) => Some(*v),
            _ => self.as_u32().map(u64::from),
        }
    }

    /// Try to get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as bytes.
    ///
    /// Returns `Some(&[u8])` for [`Value::OctetString`], [`Value::Opaque`]
    /// and [`Value::BitString`].
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::OctetString(data) | Value::Opaque(data) | Value::BitString(data) => Some(data),
            _ => None,
        }
    }

    /// Try to get as a UTF-8 string.
    ///
    /// Returns `None` for non-OctetString values or invalid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::OctetString(data) => std::str::from_utf8(data).ok(),
            _ => None,
        }
    }

    /// Try to get as OID.
    pub fn as_oid(&self) -> Option<&Oid> {
        match self {
            Value::ObjectId(oid) => Some(oid),
            _ => None,
        }
    }

    /// Try to get as an IPv4 address.
    pub fn as_ip(&self) -> Option<Ipv4Addr> {
        match self {
            Value::IpAddress(addr) => Some(Ipv4Addr::from(*addr)),
            _ => None,
        }
    }

    /// Check if this is an exception marker.
    pub fn is_exception(&self) -> bool {
        self.type_tag().is_exception()
    }

    /// Encode to BER.
    ///
    /// Only an `ObjectId` holding an OID that fails
    /// [`Oid::validate_all`] can fail to encode.
    pub fn encode(&self, buf: &mut EncodeBuf) -> Result<()> {
        match self {
            Value::Integer(v) => buf.push_integer(*v),
            Value::Gauge(v) => buf.push_unsigned32(tag::application::GAUGE32, *v),
            Value::Counter(v) => buf.push_unsigned32(tag::application::COUNTER32, *v),
            Value::Counter64(v) => buf.push_unsigned64(tag::application::COUNTER64, *v),
            Value::TimeTicks(v) => buf.push_unsigned32(tag::application::TIMETICKS, *v),
            Value::Unsigned(v) => buf.push_unsigned32(tag::application::UINTEGER32, *v),
            Value::Boolean(b) => buf.push_boolean(*b),
            Value::OctetString(data) => buf.push_octet_string(data),
            Value::BitString(data) => buf.push_tlv(tag::universal::BIT_STRING, data),
            Value::IpAddress(addr) => buf.push_ip_address(*addr),
            Value::ObjectId(oid) => return buf.push_oid(oid),
            Value::Null => buf.push_null(),
            Value::Opaque(data) => buf.push_tlv(tag::application::OPAQUE, data),
            Value::NoSuchObject => buf.push_empty(tag::context::NO_SUCH_OBJECT),
            Value::NoSuchInstance => buf.push_empty(tag::context::NO_SUCH_INSTANCE),
            Value::EndOfMibView => buf.push_empty(tag::context::END_OF_MIB_VIEW),
        }
        Ok(())
    }

    /// Decode from BER.
    pub fn decode(decoder: &mut Decoder) -> Result<Self> {
        let start = decoder.offset();
        let tag = decoder.read_tag()?;
        let len = decoder.read_length()?;

        match tag {
            tag::universal::INTEGER => Ok(Value::Integer(decoder.read_integer_value(len)?)),
            tag::universal::BOOLEAN => Ok(Value::Boolean(decoder.read_boolean_value(len)?)),
            tag::universal::OCTET_STRING => Ok(Value::OctetString(decoder.read_bytes(len)?)),
            tag::universal::NULL => {
                if len != 0 {
                    return Err(decoder.error(DecodeErrorKind::InvalidNull));
                }
                Ok(Value::Null)
            }
            tag::universal::OBJECT_IDENTIFIER => Ok(Value::ObjectId(decoder.read_oid_value(len)?)),
            tag::universal::BIT_STRING => Err(decoder.error(DecodeErrorKind::BitStringUnsupported)),
            tag::universal::OCTET_STRING_CONSTRUCTED => {
                Err(decoder.error(DecodeErrorKind::ConstructedOctetString))
            }
            tag::application::IP_ADDRESS => {
                Ok(Value::IpAddress(decoder.read_ip_address_value(len)?))
            }
            tag::application::COUNTER32 => Ok(Value::Counter(decoder.read_unsigned32_value(len)?)),
            tag::application::GAUGE32 => Ok(Value::Gauge(decoder.read_unsigned32_value(len)?)),
            tag::application::TIMETICKS => {
                Ok(Value::TimeTicks(decoder.read_unsigned32_value(len)?))
            }
            tag::application::UINTEGER32 => {
                Ok(Value::Unsigned(decoder.read_unsigned32_value(len)?))
            }
            tag::application::OPAQUE => Ok(Value::Opaque(decoder.read_bytes(len)?)),
            tag::application::COUNTER64 => {
                Ok(Value::Counter64(decoder.read_unsigned64_value(len)?))
            }
            tag::context::NO_SUCH_OBJECT
            | tag::context::NO_SUCH_INSTANCE
            | tag::context::END_OF_MIB_VIEW => {
                // Markers carry no content; a stray payload is skipped
                if len != 0 {
                    decoder.read_bytes(len)?;
                }
                Ok(match tag {
                    tag::context::NO_SUCH_OBJECT => Value::NoSuchObject,
                    tag::context::NO_SUCH_INSTANCE => Value::NoSuchInstance,
                    _ => Value::EndOfMibView,
                })
            }
            _ => {
                tracing::debug!(
                    target: "snmp_varbind::ber",
                    {
                        snmp.offset = %start,
                        tag,
                        class = tag::tag_class(tag),
                        number = tag::tag_number(tag),
                        constructed = tag::is_constructed(tag),
                    },
                    "unsupported value type"
                );
                Err(Error::InvalidType { tag })
            }
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Integer(v) => write!(f, "{}", v),
            Value::Gauge(v) | Value::Counter(v) | Value::Unsigned(v) => write!(f, "{}", v),
            Value::Counter64(v) => write!(f, "{}", v),
            Value::TimeTicks(v) => {
                let secs = v / 100;
                let days = secs / 86400;
                let hours = (secs % 86400) / 3600;
                let mins = (secs % 3600) / 60;
                let s = secs % 60;
                write!(f, "{}d {}h {}m {}s", days, hours, mins, s)
            }
            Value::Boolean(b) => write!(f, "{}", b),
            Value::OctetString(data) => {
                if let Ok(s) = std::str::from_utf8(data) {
                    write!(f, "{}", s)
                } else {
                    write!(f, "0x{}", encode_hex(data))
                }
            }
            Value::BitString(data) => write!(f, "0x{}", encode_hex(data)),
            Value::IpAddress(addr) => write!(f, "{}", Ipv4Addr::from(*addr)),
            Value::ObjectId(oid) => write!(f, "{}", oid),
            Value::Null => write!(f, "NULL"),
            Value::Opaque(data) => write!(f, "Opaque(0x{})", encode_hex(data)),
            Value::NoSuchObject => write!(f, "noSuchObject"),
            Value::NoSuchInstance => write!(f, "noSuchInstance"),
            Value::EndOfMibView => write!(f, "endOfMibView"),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::OctetString(Bytes::copy_from_slice(s.as_bytes()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::OctetString(Bytes::from(s))
    }
}

impl From<&[u8]> for Value {
    fn from(data: &[u8]) -> Self {
        Value::OctetString(Bytes::copy_from_slice(data))
    }
}

impl From<Bytes> for Value {
    fn from(data: Bytes) -> Self {
        Value::OctetString(data)
    }
}

impl From<Oid> for Value {
    fn from(oid: Oid) -> Self {
        Value::ObjectId(oid)
    }
}

impl From<Ipv4Addr> for Value {
    fn from(addr: Ipv4Addr) -> Self {
        Value::IpAddress(addr.octets())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Counter64(v)
    }
}

/// Caller-side value handed to [`build_request`](crate::build_request).
///
/// Which [`Value`] it becomes depends on the requested [`TypeTag`]; see
/// [`Value::from_native`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeValue {
    /// Signed integer.
    Int(i64),
    /// Unsigned integer.
    UInt(u64),
    /// Boolean.
    Bool(bool),
    /// Raw bytes.
    Bytes(Bytes),
    /// Text, used as UTF-8 bytes or parsed depending on the tag.
    Text(String),
    /// Object identifier.
    Oid(Oid),
    /// IPv4 address.
    Ip(Ipv4Addr),
    /// No payload.
    Null,
}

impl NativeValue {
    /// Short name of this value's kind, used in conversion errors.
    pub const fn kind(&self) -> &'static str {
        match self {
            NativeValue::Int(_) => "signed integer",
            NativeValue::UInt(_) => "unsigned integer",
            NativeValue::Bool(_) => "boolean",
            NativeValue::Bytes(_) => "bytes",
            NativeValue::Text(_) => "text",
            NativeValue::Oid(_) => "OID",
            NativeValue::Ip(_) => "IP address",
            NativeValue::Null => "null",
        }
    }
}

macro_rules! native_from_int {
    ($variant:ident, $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for NativeValue {
                fn from(v: $t) -> Self {
                    NativeValue::$variant(<$wide>::from(v))
                }
            }
        )*
    };
}

native_from_int!(Int, i64: i8, i16, i32, i64);
native_from_int!(UInt, u64: u8, u16, u32, u64);

impl From<bool> for NativeValue {
    fn from(v: bool) -> Self {
        NativeValue::Bool(v)
    }
}

impl From<&str> for NativeValue {
    fn from(s: &str) -> Self {
        NativeValue::Text(s.to_owned())
    }
}

impl From<String> for NativeValue {
    fn from(s: String) -> Self {
        NativeValue::Text(s)
    }
}

impl From<&[u8]> for NativeValue {
    fn from(data: &[u8]) -> Self {
        NativeValue::Bytes(Bytes::copy_from_slice(data))
    }
}

impl From<Vec<u8>> for NativeValue {
    fn from(data: Vec<u8>) -> Self {
        NativeValue::Bytes(Bytes::from(data))
    }
}

impl From<Bytes> for NativeValue {
    fn from(data: Bytes) -> Self {
        NativeValue::Bytes(data)
    }
}

impl From<Oid> for NativeValue {
    fn from(oid: Oid) -> Self {
        NativeValue::Oid(oid)
    }
}

impl From<Ipv4Addr> for NativeValue {
    fn from(addr: Ipv4Addr) -> Self {
        NativeValue::Ip(addr)
    }
}

impl From<()> for NativeValue {
    fn from(_: ()) -> Self {
        NativeValue::Null
    }
}
