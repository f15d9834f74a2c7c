//! Strict percent-decoding of URL path text.

use crate::error::{Error, Result};

/// Percent-decodes a path component. Every `%` must be followed by two hex
/// digits. `+` is kept as-is. The result is raw bytes and need not be UTF-8.
pub fn percent_decode(input: &str) -> Result<Vec<u8>> {
    decode(input, false)
}

/// Like [`percent_decode`], but also turns `+` into a space, as query text
/// is decoded. Used for the opaque `file:relative/path` form.
pub fn query_unescape(input: &str) -> Result<Vec<u8>> {
    decode(input, true)
}

fn decode(input: &str, plus_as_space: bool) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(input.len());
    let mut bytes = input.bytes();
    while let Some(b) = bytes.next() {
        match b {
            b'%' => {
                let high = bytes.next().and_then(hex_digit);
                let low = bytes.next().and_then(hex_digit);
                match (high, low) {
                    (Some(h), Some(l)) => out.push(h << 4 | l),
                    _ => {
                        return Err(Error::Decode {
                            input: input.to_string(),
                            reason: "malformed percent escape",
                        })
                    }
                }
            }
            b'+' if plus_as_space => out.push(b' '),
            _ => out.push(b),
        }
    }
    Ok(out)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
