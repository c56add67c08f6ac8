//! BER (Basic Encoding Rules) codec for SNMP values.
//!
//! This module provides encoding and decoding of the BER primitives a varbind
//! needs: definite-length TLVs, SEQUENCE envelopes, integers, strings and
//! OIDs. Decoding is bounds-checked and fails on truncated input.

mod decode;
mod encode;
mod length;
pub mod tag;

pub use decode::*;
pub use encode::*;
pub use length::*;
