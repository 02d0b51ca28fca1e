//! Lenient JSON text codec.
//!
//! The accepted grammar is JSON-shaped rather than JSON-conformant: commas
//! and colons are consumed when present but never required, object keys
//! overwrite on repetition, NUL counts as whitespace, and there is no
//! Unicode escape support. Note the asymmetry around null: the decoder has
//! no `null` literal branch (a leading `n` is a parse failure), while the
//! encoder renders [`crate::Value::Null`] as `null`. The encoder is equally
//! loose — see [`encode`] for its whitespace-collapsing contract.

mod decoder;
mod encoder;
mod error;

pub use decoder::{decode, parse};
pub use encoder::encode;
pub use error::TextError;
