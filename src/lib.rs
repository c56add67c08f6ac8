//! # snmp-varbind
//!
//! SNMP variable bindings: OIDs, the type tag registry, values and their
//! BER encoding.
//!
//! ## Features
//!
//! - Zero-copy BER decoding over [`bytes::Bytes`]
//! - Type-safe OID and value handling
//! - Closed [`TypeTag`] registry with exhaustive symbol and wire-code mapping
//! - Optional `serde` support for [`Oid`] and [`TypeTag`]
//!
//! Transport, PDU assembly and security processing live outside this crate;
//! it consumes and produces one varbind buffer at a time.
//!
//! ## Quick Start
//!
//! ```
//! use snmp_varbind::{build_request, decode_response, TypeTag};
//!
//! let request = build_request("1.3.6.1.2.1.1.5.0", "string", "router1")?;
//! let wire = request.to_ber();
//!
//! let response = decode_response(&wire)?;
//! assert_eq!(response.oid().to_string(), "1.3.6.1.2.1.1.5.0");
//! assert_eq!(response.type_tag(), TypeTag::OctetString);
//! assert_eq!(response.value().as_str(), Some("router1"));
//! # Ok::<(), snmp_varbind::Error>(())
//! ```

pub mod ber;
pub mod error;
pub mod oid;
pub mod prelude;
pub mod type_tag;
pub mod value;
pub mod varbind;

pub(crate) mod util;

// Re-exports for convenience
pub use error::{ConversionErrorKind, DecodeErrorKind, Error, OidErrorKind, Result};
pub use oid::{IntoOid, Oid};
pub use type_tag::TypeTag;
pub use value::{NativeValue, Value};
pub use varbind::{RequestVarBind, VarBind, build_request, decode_response};
