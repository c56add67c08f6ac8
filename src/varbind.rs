//! Variable binding (VarBind) type.
//!
//! A VarBind pairs an OID with a value. Requests are built with
//! [`build_request`] from an OID, a type symbol and a native value;
//! responses are read back with [`decode_response`]. Both paths produce the
//! same [`VarBind`].

use crate::ber::{Decoder, EncodeBuf};
use crate::error::Result;
use crate::oid::{IntoOid, Oid};
use crate::type_tag::TypeTag;
use crate::util::HexDisplay;
use crate::value::{NativeValue, Value};
use bytes::Bytes;

/// Variable binding - an OID-value pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VarBind {
    oid: Oid,
    value: Value,
}

impl VarBind {
    /// Create a new VarBind.
    pub fn new(oid: Oid, value: Value) -> Self {
        Self { oid, value }
    }

    /// Create a VarBind with a NULL value (for GET requests).
    pub fn null(oid: Oid) -> Self {
        Self {
            oid,
            value: Value::Null,
        }
    }

    /// The object identifier.
    pub fn oid(&self) -> &Oid {
        &self.oid
    }

    /// The value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Type tag of the value.
    pub fn type_tag(&self) -> TypeTag {
        self.value.type_tag()
    }

    /// Split into the OID and the value.
    pub fn into_parts(self) -> (Oid, Value) {
        (self.oid, self.value)
    }

    /// Encode to BER.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidOid`](crate::Error::InvalidOid) when the varbind OID,
    /// or an `ObjectId` value, would not survive a BER round-trip.
    pub fn encode(&self, buf: &mut EncodeBuf) -> Result<()> {
        buf.try_push_sequence(|buf| {
            self.value.encode(buf)?;
            buf.push_oid(&self.oid)
        })
    }

    /// Encode to a standalone BER buffer: SEQUENCE { OID, value }.
    pub fn to_ber(&self) -> Result<Bytes> {
        let mut buf = EncodeBuf::new();
        self.encode(&mut buf)?;
        Ok(buf.finish())
    }

    /// Returns the exact encoded size of this VarBind in bytes.
    ///
    /// This encodes the VarBind to a temporary buffer to determine the exact size.
    pub fn encoded_size(&self) -> Result<usize> {
        let mut buf = EncodeBuf::new();
        self.encode(&mut buf)?;
        Ok(buf.len())
    }

    /// Decode from BER.
    ///
    /// Bytes inside the varbind SEQUENCE after the value are rejected.
    pub fn decode(decoder: &mut Decoder) -> Result<Self> {
        let mut seq = decoder.read_sequence()?;
        let oid = seq.read_oid()?;
        let value = Value::decode(&mut seq)?;
        seq.finish()?;
        Ok(VarBind { oid, value })
    }
}

impl std::fmt::Display for VarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.oid, self.value)
    }
}

/// A varbind built for an outgoing request.
///
/// Records the type the caller asked for alongside the pair and its
/// encoding, which is produced once by [`build_request`]. Immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestVarBind {
    requested_type: TypeTag,
    varbind: VarBind,
    ber: Bytes,
}

impl RequestVarBind {
    /// The object identifier.
    pub fn oid(&self) -> &Oid {
        self.varbind.oid()
    }

    /// The converted value.
    pub fn value(&self) -> &Value {
        self.varbind.value()
    }

    /// The type requested by symbol.
    pub fn requested_type(&self) -> TypeTag {
        self.requested_type
    }

    /// Borrow the underlying varbind.
    pub fn varbind(&self) -> &VarBind {
        &self.varbind
    }

    /// Take the underlying varbind.
    pub fn into_varbind(self) -> VarBind {
        self.varbind
    }

    /// Encode into an existing buffer, e.g. while assembling a PDU.
    pub fn encode(&self, buf: &mut EncodeBuf) {
        buf.push_bytes(&self.ber);
    }

    /// Encode to BER: SEQUENCE { OID, value }.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::build_request;
    ///
    /// let req = build_request("1.3.6.1.2.1.1.5.0", "string", "router1").unwrap();
    /// let ber = req.to_ber();
    /// assert_eq!(ber[0], 0x30);
    /// assert_eq!(&ber[ber.len() - 7..], b"router1");
    /// ```
    pub fn to_ber(&self) -> Bytes {
        self.ber.clone()
    }
}

impl std::fmt::Display for RequestVarBind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.varbind, self.requested_type)
    }
}

impl From<RequestVarBind> for VarBind {
    fn from(req: RequestVarBind) -> Self {
        req.varbind
    }
}

/// Build a request varbind from an OID, a type symbol and a native value.
///
/// The symbol is resolved first, then the OID is parsed and checked for a
/// lossless BER round-trip, then the value is converted under the resolved
/// tag (see [`Value::from_native`]).
///
/// # Errors
///
/// - [`Error::UnsupportedType`](crate::Error::UnsupportedType) for a symbol
///   outside the registry
/// - [`Error::InvalidOid`](crate::Error::InvalidOid) for unparsable or
///   unencodable OIDs
/// - [`Error::ValueConversion`](crate::Error::ValueConversion) when the value
///   has no representation under the tag
///
/// # Examples
///
/// ```
/// use snmp_varbind::{build_request, oid, TypeTag, Value};
///
/// let req = build_request(oid!(1, 3, 6, 1, 2, 1, 1, 3, 0), "timeticks", 12345u32).unwrap();
/// assert_eq!(req.requested_type(), TypeTag::TimeTicks);
/// assert_eq!(req.value(), &Value::TimeTicks(12345));
///
/// assert!(build_request("1.3.6.1", "frobnicate", 1).is_err());
/// ```
pub fn build_request(
    oid: impl IntoOid,
    symbol: &str,
    value: impl Into<NativeValue>,
) -> Result<RequestVarBind> {
    let requested_type = TypeTag::from_symbol(symbol)?;
    let oid = oid.into_oid()?;
    oid.validate_all()?;
    let value = Value::from_native(requested_type, value.into())?;

    let varbind = VarBind::new(oid, value);
    let ber = varbind.to_ber()?;

    tracing::trace!(target: "snmp_varbind::varbind", { snmp.oid = %varbind.oid, snmp.value_type = %requested_type, snmp.bytes = ber.len(), snmp.data = %HexDisplay(&ber) }, "built request varbind");

    Ok(RequestVarBind {
        requested_type,
        varbind,
        ber,
    })
}

/// Decode one complete BER-encoded varbind.
///
/// The buffer must hold exactly one varbind SEQUENCE; truncation and
/// trailing bytes are both errors. Exception markers decode as values.
///
/// # Examples
///
/// ```
/// use snmp_varbind::{decode_response, Value};
///
/// let data = [
///     0x30, 0x0C, 0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x05, 0x00, 0x81, 0x00,
/// ];
/// let vb = decode_response(&data).unwrap();
/// assert_eq!(vb.oid().to_string(), "1.3.6.1.2.1.1.5.0");
/// assert_eq!(vb.value(), &Value::NoSuchInstance);
/// ```
pub fn decode_response(data: &[u8]) -> Result<VarBind> {
    let mut decoder = Decoder::from_slice(data);
    let varbind = VarBind::decode(&mut decoder)?;
    decoder.finish()?;
    Ok(varbind)
}

/// Encode a list of VarBinds.
///
/// Fails on the first varbind that cannot be encoded; the buffer should then
/// be discarded.
pub fn encode_varbind_list(buf: &mut EncodeBuf, varbinds: &[VarBind]) -> Result<()> {
    buf.try_push_sequence(|buf| {
        // Encode in reverse order since we're using reverse buffer
        for vb in varbinds.iter().rev() {
            vb.encode(buf)?;
        }
        Ok(())
    })
}

/// Decode a list of VarBinds.
pub fn decode_varbind_list(decoder: &mut Decoder) -> Result<Vec<VarBind>> {
    let mut seq = decoder.read_sequence()?;
    let mut varbinds = Vec::new();

    while !seq.is_empty() {
        varbinds.push(VarBind::decode(&mut seq)?);
    }

    Ok(varbinds)
}

/// Encode a list of OIDs as VarBinds with NULL values (for GET requests).
pub fn encode_null_varbinds(buf: &mut EncodeBuf, oids: &[Oid]) -> Result<()> {
    buf.try_push_sequence(|buf| {
        for oid in oids.iter().rev() {
            buf.try_push_sequence(|buf| {
                buf.push_null();
                buf.push_oid(oid)
            })?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DecodeErrorKind, Error, OidErrorKind};
    use crate::oid;

    fn roundtrip(vb: &VarBind) -> VarBind {
        let mut buf = EncodeBuf::new();
        vb.encode(&mut buf).unwrap();
        let mut decoder = Decoder::new(buf.finish());
        VarBind::decode(&mut decoder).unwrap()
    }

    #[test]
    fn test_varbind_roundtrip() {
        let vb = VarBind::new(oid!(1, 3, 6, 1), Value::Integer(42));
        assert_eq!(roundtrip(&vb), vb);
    }

    #[test]
    fn test_router_name_scenario() {
        let req = build_request("1.3.6.1.2.1.1.5.0", "string", "router1").unwrap();
        let ber = req.to_ber();

        let mut expected = vec![
            0x30, 0x13, 0x06, 0x08, 0x2B, 0x06, 0x01, 0x02, 0x01, 0x01, 0x05, 0x00, 0x04, 0x07,
        ];
        expected.extend_from_slice(b"router1");
        assert_eq!(&ber[..], &expected[..]);

        let vb = decode_response(&ber).unwrap();
        assert_eq!(vb.oid(), &oid!(1, 3, 6, 1, 2, 1, 1, 5, 0));
        assert_eq!(vb.type_tag(), TypeTag::OctetString);
        assert_eq!(vb.value().as_str(), Some("router1"));
    }

    #[test]
    fn test_build_request_unsupported_symbol() {
        let err = build_request("1.3.6.1", "frobnicate", 1).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { .. }));
        assert_eq!(err.to_string(), "frobnicate cannot be converted");
    }

    #[test]
    fn test_build_request_symbol_checked_before_oid() {
        let err = build_request("not an oid", "frobnicate", 1).unwrap_err();
        assert!(matches!(err, Error::UnsupportedType { .. }));
    }

    #[test]
    fn test_build_request_bad_oid() {
        let err = build_request("1.-2.3", "integer", 1).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOid {
                kind: OidErrorKind::InvalidArc,
                ..
            }
        ));

        let err = build_request("1", "integer", 1).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOid {
                kind: OidErrorKind::TooShort,
                ..
            }
        ));

        let err = build_request(oid!(7, 1), "integer", 1).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOid {
                kind: OidErrorKind::InvalidFirstArc(7),
                ..
            }
        ));
    }

    #[test]
    fn test_build_request_conversion_failure() {
        let err = build_request("1.3.6.1", "unsigned", -1).unwrap_err();
        assert!(matches!(
            err,
            Error::ValueConversion {
                tag: TypeTag::Unsigned,
                ..
            }
        ));
    }

    #[test]
    fn test_request_accessors() {
        let req = build_request(oid!(1, 3, 6, 1, 2, 1, 4, 20, 1, 1), "ip_address", "192.0.2.1").unwrap();
        assert_eq!(req.requested_type(), TypeTag::IpAddress);
        assert_eq!(req.oid(), &oid!(1, 3, 6, 1, 2, 1, 4, 20, 1, 1));
        assert_eq!(req.value(), &Value::IpAddress([192, 0, 2, 1]));
        assert_eq!(req.varbind().type_tag(), TypeTag::IpAddress);
        assert_eq!(
            req.to_string(),
            "1.3.6.1.2.1.4.20.1.1 = 192.0.2.1 (ip_address)"
        );

        let mut buf = EncodeBuf::new();
        req.encode(&mut buf);
        assert_eq!(buf.finish(), req.to_ber());

        let vb: VarBind = req.clone().into();
        assert_eq!(vb, req.into_varbind());
    }

    #[test]
    fn test_decode_response_trailing_data() {
        let mut data = build_request("1.3.6.1", "integer", 5).unwrap().to_ber().to_vec();
        data.push(0x00);
        let err = decode_response(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                kind: DecodeErrorKind::TrailingData { remaining: 1 },
                ..
            }
        ));
    }

    #[test]
    fn test_decode_rejects_extra_tlv_inside_sequence() {
        // SEQUENCE { OID 1.3, NULL, NULL }
        let data = [0x30, 0x07, 0x06, 0x01, 0x2B, 0x05, 0x00, 0x05, 0x00];
        let err = decode_response(&data).unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                kind: DecodeErrorKind::TrailingData { remaining: 2 },
                ..
            }
        ));
    }

    #[test]
    fn test_decode_response_truncated() {
        let data = build_request("1.3.6.1", "string", "public").unwrap().to_ber();
        for cut in 0..data.len() {
            let err = decode_response(&data[..cut]).unwrap_err();
            assert!(err.is_truncated(), "cut at {}: {:?}", cut, err);
        }
    }

    #[test]
    fn test_decode_response_invalid_type() {
        // SEQUENCE { OID 1.3, [APPLICATION 5] }
        let data = [0x30, 0x05, 0x06, 0x01, 0x2B, 0x45, 0x00];
        assert!(matches!(
            decode_response(&data).unwrap_err(),
            Error::InvalidType { tag: 0x45 }
        ));
    }

    #[test]
    fn test_encode_rejects_oid_that_would_change() {
        // 5.3 would go out as 0xCB 0x00 and come back as 2.123
        let vb = VarBind::new(oid!(5, 3), Value::Null);
        let err = vb.to_ber().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOid {
                kind: OidErrorKind::InvalidFirstArc(5),
                ..
            }
        ));
        assert!(vb.encoded_size().is_err());

        let err = VarBind::null(Oid::new([])).to_ber().unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidOid {
                kind: OidErrorKind::TooShort,
                ..
            }
        ));

        let vb = VarBind::new(oid!(1, 3, 6, 1), Value::ObjectId(oid!(1, 40)));
        assert!(vb.to_ber().is_err());
    }

    #[test]
    fn test_list_encoders_reject_invalid_oids() {
        let varbinds = vec![
            VarBind::new(oid!(1, 3, 6, 1), Value::Integer(1)),
            VarBind::new(oid!(5, 3), Value::Integer(2)),
        ];
        let mut buf = EncodeBuf::new();
        assert!(matches!(
            encode_varbind_list(&mut buf, &varbinds).unwrap_err(),
            Error::InvalidOid { .. }
        ));

        let mut buf = EncodeBuf::new();
        assert!(matches!(
            encode_null_varbinds(&mut buf, &[oid!(1, 3, 6, 1), oid!(3, 0)]).unwrap_err(),
            Error::InvalidOid { .. }
        ));
    }

    #[test]
    fn test_into_parts() {
        let vb = VarBind::new(oid!(1, 3, 6), Value::Gauge(3));
        let (oid, value) = vb.into_parts();
        assert_eq!(oid, oid!(1, 3, 6));
        assert_eq!(value, Value::Gauge(3));
    }

    #[test]
    fn test_encoded_size_matches_to_ber() {
        let vb = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0), Value::from("Linux router"));
        assert_eq!(vb.encoded_size().unwrap(), vb.to_ber().unwrap().len());
    }

    #[test]
    fn test_varbind_list_roundtrip() {
        let varbinds = vec![
            VarBind::new(oid!(1, 3, 6, 1), Value::Integer(1)),
            VarBind::new(oid!(1, 3, 6, 2), Value::Integer(2)),
        ];

        let mut buf = EncodeBuf::new();
        encode_varbind_list(&mut buf, &varbinds).unwrap();
        let bytes = buf.finish();

        let mut decoder = Decoder::new(bytes);
        let decoded = decode_varbind_list(&mut decoder).unwrap();

        assert_eq!(varbinds, decoded);
    }

    #[test]
    fn test_varbind_exception_markers() {
        for marker in [Value::NoSuchObject, Value::NoSuchInstance, Value::EndOfMibView] {
            let vb = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0), marker);
            let decoded = roundtrip(&vb);
            assert_eq!(decoded, vb);
            assert!(decoded.value().is_exception());
            assert_ne!(decoded.value(), &Value::Null);
        }
    }

    #[test]
    fn test_varbind_list_empty() {
        let mut buf = EncodeBuf::new();
        encode_varbind_list(&mut buf, &[]).unwrap();
        let bytes = buf.finish();
        assert_eq!(&bytes[..], &[0x30, 0x00]);

        let mut decoder = Decoder::new(bytes);
        assert!(decode_varbind_list(&mut decoder).unwrap().is_empty());
    }

    #[test]
    fn test_varbind_list_mixed_value_types() {
        let varbinds = vec![
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0), Value::from("test")),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 2, 0), Value::Integer(42)),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 3, 0), Value::Counter(1000)),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 4, 0), Value::Gauge(500)),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 5, 0), Value::TimeTicks(99999)),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 6, 0), Value::IpAddress([192, 168, 1, 1])),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 7, 0), Value::Counter64(u64::MAX)),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 8, 0), Value::ObjectId(oid!(1, 3, 6, 1, 4))),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 9, 0), Value::Unsigned(7)),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 10, 0), Value::Boolean(true)),
            VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 11, 0), Value::NoSuchInstance),
            VarBind::null(oid!(1, 3, 6, 1, 2, 1, 1, 12, 0)),
        ];

        let mut buf = EncodeBuf::new();
        encode_varbind_list(&mut buf, &varbinds).unwrap();
        let mut decoder = Decoder::new(buf.finish());
        let decoded = decode_varbind_list(&mut decoder).unwrap();

        assert_eq!(varbinds, decoded);
    }

    #[test]
    fn test_null_varbinds_encoding() {
        let oids = vec![
            oid!(1, 3, 6, 1, 2, 1, 1, 1, 0),
            oid!(1, 3, 6, 1, 2, 1, 1, 3, 0),
            oid!(1, 3, 6, 1, 2, 1, 1, 5, 0),
        ];

        let mut buf = EncodeBuf::new();
        encode_null_varbinds(&mut buf, &oids).unwrap();
        let mut decoder = Decoder::new(buf.finish());
        let decoded = decode_varbind_list(&mut decoder).unwrap();

        assert_eq!(decoded.len(), 3);
        for (vb, oid) in decoded.iter().zip(&oids) {
            assert_eq!(vb, &VarBind::null(oid.clone()));
        }
    }

    #[test]
    fn test_varbind_display() {
        let vb = VarBind::new(oid!(1, 3, 6, 1, 2, 1, 1, 1, 0), Value::Integer(42));
        assert_eq!(vb.to_string(), "1.3.6.1.2.1.1.1.0 = 42");

        let vb = VarBind::new(oid!(1, 3, 6, 1), Value::NoSuchObject);
        assert_eq!(vb.to_string(), "1.3.6.1 = noSuchObject");
    }
}
