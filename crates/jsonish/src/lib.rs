//! Lenient JSON value tree with a recursive-descent text decoder and loose
//! encoder.
//!
//! The crate is three small layers: [`Value`], the tagged union produced by
//! decoding; [`decode`]/[`parse`], which consume the front of a character
//! buffer and report how much they ate; and [`encode`], a human-readable
//! (deliberately not JSON-valid) renderer. [`to_json`]/[`from_json`] bridge
//! to `serde_json` for callers that need a conformant representation.

mod convert;
mod value;

pub mod text;

pub use convert::{from_json, to_json, to_json_string};
pub use text::{decode, encode, parse, TextError};
pub use value::Value;
