//! Object Identifier (OID) type.
//!
//! OIDs are stored as `SmallVec<[u32; 16]>` to avoid heap allocation for common OIDs.

use crate::error::{DecodeErrorKind, Error, OidErrorKind, Result};
use smallvec::SmallVec;
use std::fmt;

/// Maximum number of arcs (subidentifiers) allowed in an OID.
///
/// Per RFC 2578 Section 3.5: "there are at most 128 sub-identifiers in a value".
///
/// This limit is enforced during BER decoding via [`Oid::from_ber()`], and can
/// be checked via [`Oid::validate_length()`] for OIDs constructed from other sources.
pub const MAX_OID_LEN: usize = 128;

/// Object Identifier.
///
/// Stored as a sequence of arc values (u32). Equality and ordering are
/// lexicographic over the arcs.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Oid {
    arcs: SmallVec<[u32; 16]>,
}

impl Oid {
    /// Create an OID from arc values.
    ///
    /// No validation is performed; see [`validate()`](Self::validate).
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::oid::Oid;
    ///
    /// let oid = Oid::new(vec![1, 3, 6, 1, 2, 1]);
    /// assert_eq!(oid.arcs(), &[1, 3, 6, 1, 2, 1]);
    ///
    /// let oid = Oid::new([1, 3, 6, 1]);
    /// assert_eq!(oid.len(), 4);
    /// ```
    pub fn new(arcs: impl IntoIterator<Item = u32>) -> Self {
        Self {
            arcs: arcs.into_iter().collect(),
        }
    }

    /// Create an OID from a slice of arcs.
    pub fn from_slice(arcs: &[u32]) -> Self {
        Self {
            arcs: SmallVec::from_slice(arcs),
        }
    }

    /// Parse an OID from dotted string notation (e.g., "1.3.6.1.2.1.1.1.0").
    ///
    /// Every segment must be a non-empty run of ASCII digits that fits in a
    /// `u32`. One leading dot (`.1.3.6.1`) is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::oid::Oid;
    ///
    /// let oid = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
    /// assert_eq!(oid.len(), 9);
    ///
    /// assert!(Oid::parse("").is_err());
    /// assert!(Oid::parse("1.-2.3").is_err());
    /// assert!(Oid::parse("1.3.x").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let body = s.strip_prefix('.').unwrap_or(s);
        if body.is_empty() {
            return Err(Error::invalid_oid_with_input(OidErrorKind::Empty, s));
        }

        let mut arcs = SmallVec::new();

        for part in body.split('.') {
            // u32::from_str accepts a leading '+', so check digits explicitly
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s));
            }
            let arc: u32 = part
                .parse()
                .map_err(|_| Error::invalid_oid_with_input(OidErrorKind::InvalidArc, s))?;
            arcs.push(arc);
        }

        Ok(Self { arcs })
    }

    /// Get the arc values.
    pub fn arcs(&self) -> &[u32] {
        &self.arcs
    }

    /// Get the number of arcs.
    pub fn len(&self) -> usize {
        self.arcs.len()
    }

    /// Check if the OID is empty.
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Check if this OID starts with another OID.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::oid::Oid;
    ///
    /// let sys_descr = Oid::parse("1.3.6.1.2.1.1.1.0").unwrap();
    /// let system = Oid::parse("1.3.6.1.2.1.1").unwrap();
    /// let interfaces = Oid::parse("1.3.6.1.2.1.2").unwrap();
    ///
    /// assert!(sys_descr.starts_with(&system));
    /// assert!(!sys_descr.starts_with(&interfaces));
    /// assert!(sys_descr.starts_with(&sys_descr));
    /// ```
    pub fn starts_with(&self, other: &Oid) -> bool {
        self.arcs.len() >= other.arcs.len() && self.arcs[..other.arcs.len()] == other.arcs[..]
    }

    /// Get the parent OID (all arcs except the last).
    ///
    /// Returns `None` if the OID is empty.
    pub fn parent(&self) -> Option<Oid> {
        let (_, head) = self.arcs.split_last()?;
        Some(Oid::from_slice(head))
    }

    /// Create a child OID by appending an arc.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::oid::Oid;
    ///
    /// let sys_name = Oid::parse("1.3.6.1.2.1.1.5").unwrap();
    /// assert_eq!(sys_name.child(0).to_string(), "1.3.6.1.2.1.1.5.0");
    /// ```
    pub fn child(&self, arc: u32) -> Oid {
        let mut arcs = self.arcs.clone();
        arcs.push(arc);
        Oid { arcs }
    }

    /// Validate that the OID can be carried in a varbind.
    ///
    /// - at least two arcs
    /// - arc1 must be 0, 1, or 2
    /// - arc2 must be <= 39 when arc1 is 0 or 1
    ///
    /// OIDs that pass round-trip through [`to_ber()`](Self::to_ber) and
    /// [`from_ber()`](Self::from_ber) unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::oid::Oid;
    ///
    /// assert!(Oid::parse("1.3.6.1.2.1.1.1.0").unwrap().validate().is_ok());
    /// assert!(Oid::from_slice(&[1]).validate().is_err());
    /// assert!(Oid::from_slice(&[3, 0]).validate().is_err());
    /// assert!(Oid::from_slice(&[0, 40]).validate().is_err());
    /// assert!(Oid::from_slice(&[2, 999]).validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        let [arc1, arc2, ..] = self.arcs[..] else {
            return Err(Error::invalid_oid(OidErrorKind::TooShort));
        };

        if arc1 > 2 {
            return Err(Error::invalid_oid(OidErrorKind::InvalidFirstArc(arc1)));
        }

        if arc1 < 2 && arc2 >= 40 {
            return Err(Error::invalid_oid(OidErrorKind::InvalidSecondArc {
                first: arc1,
                second: arc2,
            }));
        }

        Ok(())
    }

    /// Validate that the OID doesn't exceed the maximum arc count.
    pub fn validate_length(&self) -> Result<()> {
        if self.arcs.len() > MAX_OID_LEN {
            return Err(Error::invalid_oid(OidErrorKind::TooManyArcs {
                count: self.arcs.len(),
                max: MAX_OID_LEN,
            }));
        }
        Ok(())
    }

    /// Validate both arc constraints and length.
    pub fn validate_all(&self) -> Result<()> {
        self.validate()?;
        self.validate_length()
    }

    /// Encode to BER format, returning bytes in a stack-allocated buffer.
    ///
    /// OID encoding (X.690 Section 8.19):
    /// - First two arcs encoded as (arc1 * 40) + arc2 using base-128
    /// - Remaining arcs encoded as base-128 variable length
    ///
    /// # Errors
    ///
    /// Fails with [`Error::InvalidOid`] when [`validate_all()`](Self::validate_all)
    /// rejects the OID. Such OIDs would decode as a different OID (`5.3`
    /// comes back as `2.123`) or not at all.
    pub fn to_ber_smallvec(&self) -> Result<SmallVec<[u8; 64]>> {
        self.validate_all().map_err(|err| {
            tracing::debug!(target: "snmp_varbind::ber", { snmp.oid = %self, error = %err }, "refusing to encode OID");
            err
        })?;
        Ok(self.encode_content())
    }

    /// Encode to BER format (content octets only, no tag or length).
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::oid;
    ///
    /// assert_eq!(oid!(1, 3, 6, 1).to_ber().unwrap(), vec![0x2B, 0x06, 0x01]);
    /// assert!(oid!(5, 3).to_ber().is_err());
    /// ```
    pub fn to_ber(&self) -> Result<Vec<u8>> {
        Ok(self.to_ber_smallvec()?.to_vec())
    }

    /// Returns the total BER-encoded length (tag + length + content).
    pub fn ber_encoded_len(&self) -> usize {
        let content_len = self.encode_content().len();
        1 + crate::ber::length_encoded_len(content_len) + content_len
    }

    fn encode_content(&self) -> SmallVec<[u8; 64]> {
        let mut bytes = SmallVec::new();

        match self.arcs[..] {
            [] => return bytes,
            [arc1] => encode_subidentifier(&mut bytes, arc1 as u64 * 40),
            // arc1 = 2 allows arc2 close to u32::MAX, so widen before combining
            [arc1, arc2, ..] => encode_subidentifier(&mut bytes, arc1 as u64 * 40 + arc2 as u64),
        }

        for &arc in self.arcs.iter().skip(2) {
            encode_subidentifier(&mut bytes, arc as u64);
        }

        bytes
    }

    /// Decode from BER content octets.
    ///
    /// Enforces [`MAX_OID_LEN`] limit per RFC 2578 Section 3.5.
    ///
    /// # Examples
    ///
    /// ```
    /// use snmp_varbind::oid::Oid;
    ///
    /// let oid = Oid::from_ber(&[0x2B, 0x06, 0x01]).unwrap();
    /// assert_eq!(oid.to_string(), "1.3.6.1");
    /// ```
    pub fn from_ber(data: &[u8]) -> Result<Self> {
        let count = data.iter().filter(|&&b| b & 0x80 == 0).count();
        Self::from_encoded(data, count)
    }

    /// Decode exactly `count` encoded subidentifiers from `data`.
    ///
    /// The first subidentifier expands into two arcs. Fails if `data` holds
    /// fewer than `count` subidentifiers or has bytes left over.
    pub fn from_encoded(data: &[u8], count: usize) -> Result<Self> {
        if count == 0 {
            return Err(Error::decode(0, DecodeErrorKind::InvalidOidEncoding));
        }
        if count + 1 > MAX_OID_LEN {
            return Err(Error::decode(
                0,
                DecodeErrorKind::OidTooLong {
                    count: count + 1,
                    max: MAX_OID_LEN,
                },
            ));
        }

        let mut arcs = SmallVec::with_capacity(count + 1);

        // First subidentifier encodes arc1*40 + arc2, and can exceed u32 when arc1=2
        let (first_subid, mut i) = decode_subidentifier(data, 0)?;
        let (arc1, arc2) = match first_subid {
            0..40 => (0, first_subid),
            40..80 => (1, first_subid - 40),
            _ => (2, first_subid - 80),
        };
        arcs.push(arc1);
        arcs.push(u32::try_from(arc2).map_err(|_| Error::decode(0, DecodeErrorKind::IntegerOverflow))?);

        for _ in 1..count {
            let (arc, next) = decode_subidentifier(data, i)?;
            let arc = u32::try_from(arc).map_err(|_| Error::decode(i, DecodeErrorKind::IntegerOverflow))?;
            arcs.push(arc);
            i = next;
        }

        if i != data.len() {
            return Err(Error::decode(i, DecodeErrorKind::InvalidOidEncoding));
        }

        Ok(Self { arcs })
    }
}

/// Encode a subidentifier in base-128, most significant group first.
#[inline]
fn encode_subidentifier(bytes: &mut SmallVec<[u8; 64]>, value: u64) {
    let groups = ((64 - value.leading_zeros()).div_ceil(7)).max(1);

    for i in (0..groups).rev() {
        let mut byte = ((value >> (i * 7)) & 0x7F) as u8;
        if i > 0 {
            byte |= 0x80; // Continuation bit
        }
        bytes.push(byte);
    }
}

/// Decode a subidentifier starting at `start`, returning (value, next offset).
///
/// Accepts non-minimal leading 0x80 bytes. Values must fit in 40 bits, which
/// covers `2 * 40 + u32::MAX` for the combined first subidentifier.
fn decode_subidentifier(data: &[u8], start: usize) -> Result<(u64, usize)> {
    let mut value: u64 = 0;
    let mut i = start;

    loop {
        let Some(&byte) = data.get(i) else {
            return Err(Error::decode(i, DecodeErrorKind::TruncatedData));
        };
        i += 1;

        if value > (u32::MAX as u64) << 1 {
            return Err(Error::decode(i, DecodeErrorKind::IntegerOverflow));
        }

        value = (value << 7) | (byte & 0x7F) as u64;

        if byte & 0x80 == 0 {
            return Ok((value, i));
        }
    }
}

/// Conversion into an [`Oid`] from either an OID or its dotted text.
///
/// # Examples
///
/// ```
/// use snmp_varbind::oid::{IntoOid, Oid};
///
/// let a = "1.3.6.1".into_oid().unwrap();
/// let b = Oid::from_slice(&[1, 3, 6, 1]).into_oid().unwrap();
/// assert_eq!(a, b);
/// ```
pub trait IntoOid {
    /// Perform the conversion.
    fn into_oid(self) -> Result<Oid>;
}

impl IntoOid for Oid {
    fn into_oid(self) -> Result<Oid> {
        Ok(self)
    }
}

impl IntoOid for &Oid {
    fn into_oid(self) -> Result<Oid> {
        Ok(self.clone())
    }
}

impl IntoOid for &str {
    fn into_oid(self) -> Result<Oid> {
        Oid::parse(self)
    }
}

impl IntoOid for String {
    fn into_oid(self) -> Result<Oid> {
        Oid::parse(&self)
    }
}

impl IntoOid for &String {
    fn into_oid(self) -> Result<Oid> {
        Oid::parse(self)
    }
}

impl fmt::Debug for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Oid({})", self)
    }
}

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for arc in &self.arcs {
            if !first {
                write!(f, ".")?;
            }
            write!(f, "{}", arc)?;
            first = false;
        }
        Ok(())
    }
}

impl std::str::FromStr for Oid {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<&[u32]> for Oid {
    fn from(arcs: &[u32]) -> Self {
        Self::from_slice(arcs)
    }
}

impl<const N: usize> From<[u32; N]> for Oid {
    fn from(arcs: [u32; N]) -> Self {
        Self::new(arcs)
    }
}

impl PartialOrd for Oid {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Oid {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.arcs.cmp(&other.arcs)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Oid {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Oid {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        Oid::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Macro to create an OID at compile time.
///
/// # Examples
///
/// ```
/// use snmp_varbind::oid;
///
/// let sys_descr = oid!(1, 3, 6, 1, 2, 1, 1, 1, 0);
/// assert_eq!(sys_descr.to_string(), "1.3.6.1.2.1.1.1.0");
///
/// // Trailing commas are allowed
/// let sys_name = oid!(1, 3, 6, 1, 2, 1, 1, 5, 0,);
/// assert!(sys_name.starts_with(&oid!(1, 3, 6, 1, 2, 1, 1)));
/// ```
#[macro_export]
macro_rules! oid {
    ($($arc:expr),* $(,)?) => {
        $crate::oid::Oid::from_slice(&[$($arc),*])
    };
}
