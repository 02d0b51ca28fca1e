//! Recursive-descent decoder for the lenient JSON text form.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

use super::error::TextError;
use crate::Value;

/// Bytes skipped as insignificant between tokens. NUL is part of the set, so
/// an embedded NUL reads as whitespace rather than ending the document.
const WHITESPACE: &[u8] = b" \n\x0B\t\r\x0C\0";

/// Longest-prefix number shape: optional sign, one or more digits, optional
/// fraction, optional exponent. The pattern is stateless, so it is compiled
/// once per process.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?").unwrap());

/// Decodes one value from the front of `input`.
///
/// Returns the decoded [`Value`] and the number of bytes consumed. A
/// consumed count of `0` always and only signals that no value could be
/// parsed; the returned value is then [`Value::Null`] and not meaningful.
/// There is no other error channel — truncated input, malformed numbers,
/// unterminated strings, and non-string object keys all collapse to the
/// same zero-consumed signal, and any nested failure aborts the whole
/// enclosing construct.
///
/// Input past the first decoded value is left untouched; callers that want
/// trailing garbage rejected or a `Result` should use [`parse`].
pub fn decode(input: &str) -> (Value, usize) {
    if input.is_empty() {
        return (Value::Null, 0);
    }
    let off = skip_whitespace(input, 0);
    if off == input.len() {
        return (Value::Null, 0);
    }
    if off > 0 {
        // The skipped run only counts once the remainder actually decodes;
        // reporting it on failure would break the zero-consumed convention.
        let (value, eaten) = decode(&input[off..]);
        if eaten == 0 {
            return (Value::Null, 0);
        }
        return (value, off + eaten);
    }
    if input.starts_with("true") {
        return (Value::Bool(true), 4);
    }
    if input.starts_with("false") {
        return (Value::Bool(false), 5);
    }
    match input.as_bytes()[0] {
        b'0'..=b'9' | b'+' | b'-' => decode_number(input),
        b'"' => decode_str(input),
        b'[' => decode_list(input),
        b'{' => decode_dict(input),
        _ => (Value::Null, 0),
    }
}

/// Decodes one value from `input`, mapping the zero-consumed failure signal
/// of [`decode`] to an error. Trailing input is still accepted.
pub fn parse(input: &str) -> Result<Value, TextError> {
    match decode(input) {
        (_, 0) => Err(TextError::Unparsable),
        (value, _) => Ok(value),
    }
}

fn skip_whitespace(input: &str, mut i: usize) -> usize {
    let bytes = input.as_bytes();
    while i < bytes.len() && WHITESPACE.contains(&bytes[i]) {
        i += 1;
    }
    i
}

/// Integer/float disambiguation: the full matched substring must survive an
/// `i32` parse to become `Int`; anything with a fraction, an exponent, or an
/// overflowing magnitude falls through to the `f64` parse. Consumed length
/// is the match length either way.
fn decode_number(input: &str) -> (Value, usize) {
    let Some(found) = NUMBER.find(input) else {
        return (Value::Null, 0);
    };
    let text = found.as_str();
    if let Ok(n) = text.parse::<i32>() {
        return (Value::Int(n), text.len());
    }
    if let Ok(x) = text.parse::<f64>() {
        return (Value::Float(x), text.len());
    }
    (Value::Null, 0)
}

/// Two-state scan after the opening quote: a backslash switches to the
/// escaped state, where the next character is translated through a fixed
/// table (`\"`, `\\`, `\/` and any other unknown escape decode to the
/// character itself). No Unicode escapes. A document that ends inside the
/// string is a failure.
fn decode_str(input: &str) -> (Value, usize) {
    let mut out = String::new();
    let mut escaped = false;
    let mut chars = input.char_indices();
    chars.next(); // opening quote
    for (i, ch) in chars {
        if escaped {
            out.push(unescape(ch));
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            return (Value::Str(out), i + 1);
        } else {
            out.push(ch);
        }
    }
    (Value::Null, 0)
}

fn unescape(ch: char) -> char {
    match ch {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0C',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0B',
        other => other,
    }
}

/// List elements are separated by optional commas; the next significant
/// character decides whether the list closes. Running out of input before
/// `]` fails the whole list.
fn decode_list(input: &str) -> (Value, usize) {
    let bytes = input.as_bytes();
    let mut items = Vec::new();
    let mut i = 1;
    loop {
        i = skip_whitespace(input, i);
        if i >= input.len() {
            return (Value::Null, 0);
        }
        if bytes[i] == b']' {
            return (Value::List(items), i + 1);
        }
        let (item, eaten) = decode(&input[i..]);
        if eaten == 0 {
            return (Value::Null, 0);
        }
        items.push(item);
        i += eaten;
        if bytes.get(i) == Some(&b',') {
            i += 1;
        }
    }
}

/// Keys must decode to strings; the colon after a key and the comma after a
/// value are consumed when present, never required. A repeated key
/// overwrites the earlier entry. Running out of input before `}` fails the
/// whole dict.
fn decode_dict(input: &str) -> (Value, usize) {
    let bytes = input.as_bytes();
    let mut entries = HashMap::new();
    let mut i = 1;
    loop {
        i = skip_whitespace(input, i);
        if i >= input.len() {
            return (Value::Null, 0);
        }
        if bytes[i] == b'}' {
            return (Value::Dict(entries), i + 1);
        }
        let (key, key_eaten) = decode(&input[i..]);
        if key_eaten == 0 {
            return (Value::Null, 0);
        }
        let Value::Str(key) = key else {
            return (Value::Null, 0);
        };
        i += key_eaten;
        if bytes.get(i) == Some(&b':') {
            i += 1;
        }
        let (value, value_eaten) = decode(&input[i..]);
        if value_eaten == 0 {
            return (Value::Null, 0);
        }
        i += value_eaten;
        entries.insert(key, value);
        if bytes.get(i) == Some(&b',') {
            i += 1;
        }
    }
}
