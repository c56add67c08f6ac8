//! SNMP type tags.
//!
//! [`TypeTag`] is the closed set of value kinds carried in a varbind. Each
//! kind has exactly one BER tag byte and one symbolic name; both directions
//! of the mapping are derived from [`TypeTag::ALL`] and the exhaustive
//! matches below.

use crate::ber::tag;
use crate::error::{Error, Result};
use std::fmt;

/// Value kind of a varbind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// INTEGER (signed 32-bit)
    Integer,
    /// Gauge32
    Gauge,
    /// Counter32
    Counter,
    /// Counter64
    Counter64,
    /// TimeTicks (hundredths of a second)
    TimeTicks,
    /// UInteger32
    Unsigned,
    /// BOOLEAN
    Boolean,
    /// OCTET STRING
    OctetString,
    /// BIT STRING
    BitString,
    /// IpAddress (IPv4)
    IpAddress,
    /// OBJECT IDENTIFIER
    ObjectId,
    /// NULL
    Null,
    /// noSuchObject exception
    NoSuchObject,
    /// noSuchInstance exception
    NoSuchInstance,
    /// endOfMibView exception
    EndOfMibView,
    /// Opaque
    Opaque,
}

impl TypeTag {
    /// Every tag, in wire code order.
    pub const ALL: [TypeTag; 16] = [
        TypeTag::Boolean,
        TypeTag::Integer,
        TypeTag::BitString,
        TypeTag::OctetString,
        TypeTag::Null,
        TypeTag::ObjectId,
        TypeTag::IpAddress,
        TypeTag::Counter,
        TypeTag::Gauge,
        TypeTag::TimeTicks,
        TypeTag::Opaque,
        TypeTag::Counter64,
        TypeTag::Unsigned,
        TypeTag::NoSuchObject,
        TypeTag::NoSuchInstance,
        TypeTag::EndOfMibView,
    ];

    /// BER tag byte.
    ///
    /// `Unsigned` uses the UInteger32 tag (0x47) so that it stays distinct
    /// from `Gauge` (0x42) on the wire.
    pub const fn code(self) -> u8 {
        match self {
            TypeTag::Boolean => tag::universal::BOOLEAN,
            TypeTag::Integer => tag::universal::INTEGER,
            TypeTag::BitString => tag::universal::BIT_STRING,
            TypeTag::OctetString => tag::universal::OCTET_STRING,
            TypeTag::Null => tag::universal::NULL,
            TypeTag::ObjectId => tag::universal::OBJECT_IDENTIFIER,
            TypeTag::IpAddress => tag::application::IP_ADDRESS,
            TypeTag::Counter => tag::application::COUNTER32,
            TypeTag::Gauge => tag::application::GAUGE32,
            TypeTag::TimeTicks => tag::application::TIMETICKS,
            TypeTag::Opaque => tag::application::OPAQUE,
            TypeTag::Counter64 => tag::application::COUNTER64,
            TypeTag::Unsigned => tag::application::UINTEGER32,
            TypeTag::NoSuchObject => tag::context::NO_SUCH_OBJECT,
            TypeTag::NoSuchInstance => tag::context::NO_SUCH_INSTANCE,
            TypeTag::EndOfMibView => tag::context::END_OF_MIB_VIEW,
        }
    }

    /// Symbolic name accepted by [`TypeTag::from_symbol`].
    pub const fn symbol(self) -> &'static str {
        match self {
            TypeTag::Boolean => "boolean",
            TypeTag::Integer => "integer",
            TypeTag::BitString => "binary",
            TypeTag::OctetString => "string",
            TypeTag::Null => "null",
            TypeTag::ObjectId => "oid",
            TypeTag::IpAddress => "ip_address",
            TypeTag::Counter => "counter",
            TypeTag::Gauge => "gauge",
            TypeTag::TimeTicks => "timeticks",
            TypeTag::Opaque => "opaque",
            TypeTag::Counter64 => "counter64",
            TypeTag::Unsigned => "unsigned",
            TypeTag::NoSuchObject => "no_such_object",
            TypeTag::NoSuchInstance => "no_such_instance",
            TypeTag::EndOfMibView => "end_of_mib_view",
        }
    }

    /// Look up a tag by its wire code.
    pub fn from_code(code: u8) -> Option<TypeTag> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Resolve a symbolic type name.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::TypeTag;
    ///
    /// assert_eq!(TypeTag::from_symbol("string").unwrap(), TypeTag::OctetString);
    /// assert!(TypeTag::from_symbol("frobnicate").is_err());
    /// ```
    pub fn from_symbol(symbol: &str) -> Result<TypeTag> {
        Self::ALL
            .into_iter()
            .find(|t| t.symbol() == symbol)
            .ok_or_else(|| Error::unsupported_type(symbol))
    }

    /// Whether this is one of the SNMPv2 exception markers.
    pub const fn is_exception(self) -> bool {
        matches!(
            self,
            TypeTag::NoSuchObject | TypeTag::NoSuchInstance | TypeTag::EndOfMibView
        )
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for TypeTag {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_symbol(s)
    }
}

impl TryFrom<u8> for TypeTag {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code).ok_or(Error::InvalidType { tag: code })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TypeTag {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TypeTag {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        TypeTag::from_symbol(&s).map_err(serde::de::Error::custom)
    }
}
