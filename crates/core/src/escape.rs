//! Escaping rules for text content and attribute values.
//!
//! Text content goes through [`escape_text`]. Attribute values are always
//! emitted single-quoted and go through [`escape_attribute_value`] on every
//! render, never when the value is stored.

use crate::attribute::Structured;
use std::borrow::Cow;

fn text_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&#34;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

fn attribute_entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

fn escape_with(input: &str, entity: fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    let Some(first) = input.char_indices().find(|&(_, c)| entity(c).is_some()) else {
        return Cow::Borrowed(input);
    };

    let mut out = String::with_capacity(input.len() + 16);
    out.push_str(&input[..first.0]);
    for c in input[first.0..].chars() {
        match entity(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escapes `&`, `<`, `>`, `"` and `'` for use as element text content.
///
/// Not suitable for attribute values; use [`escape_attribute_value`].
pub fn escape_text(input: &str) -> Cow<'_, str> {
    escape_with(input, text_entity)
}

/// Escapes a value for placement inside a single-quoted attribute.
///
/// The quote character itself and `&` are replaced so a value can never
/// terminate the attribute early or smuggle in a character reference.
pub fn escape_attribute_value(input: &str) -> Cow<'_, str> {
    escape_with(input, attribute_entity)
}

/// Byte-string form of [`escape_attribute_value`], appending to `out`.
pub(crate) fn escape_attribute_bytes(input: &[u8], out: &mut Vec<u8>) {
    for &b in input {
        match b {
            b'&' => out.extend_from_slice(b"&amp;"),
            b'\'' => out.extend_from_slice(b"&#39;"),
            _ => out.push(b),
        }
    }
}

/// Serializes a structured attribute value as JSON on a single line.
pub fn encode_structured(value: &Structured) -> Result<String, serde_json::Error> {
    value.to_json().map(strip_line_breaks)
}

/// Removes line breaks so an encoded value stays on one logical line.
fn strip_line_breaks(input: String) -> String {
    if input.contains(['\n', '\r']) {
        input.replace(['\n', '\r'], "")
    } else {
        input
    }
}
