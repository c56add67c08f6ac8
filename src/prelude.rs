//! Prelude module for convenient imports.
//!
//! # Usage
//!
//! ```rust
//! use snmp_varbind::prelude::*;
//!
//! let req = build_request(oid!(1, 3, 6, 1, 2, 1, 1, 4, 0), "string", "ops@example.net")?;
//! assert_eq!(req.requested_type(), TypeTag::OctetString);
//! # Ok::<(), Error>(())
//! ```
//!
//! This imports:
//! - Core types: [`Oid`], [`TypeTag`], [`Value`], [`NativeValue`], [`VarBind`], [`RequestVarBind`]
//! - Entry points: [`build_request`], [`decode_response`]
//! - Error handling: [`Error`], [`Result`]
//! - The [`IntoOid`] trait and the [`oid!`] macro

pub use crate::error::{Error, Result};
pub use crate::oid::{IntoOid, Oid};
pub use crate::type_tag::TypeTag;
pub use crate::value::{NativeValue, Value};
pub use crate::varbind::{RequestVarBind, VarBind, build_request, decode_response};

#[doc(no_inline)]
pub use crate::oid;
