//! Loose text rendering of a value tree.

use crate::Value;

/// Renders `value` in its display form, then re-tokenizes on whitespace and
/// re-joins with single spaces.
///
/// The output is *not* valid JSON: strings are emitted verbatim — unquoted
/// and unescaped — so a string containing whitespace collapses and merges
/// indistinguishably with the surrounding structural tokens. The original
/// string boundaries cannot be recovered from the rendered text. For a
/// strict rendering use [`crate::to_json_string`].
pub fn encode(value: &Value) -> String {
    value
        .to_string()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
