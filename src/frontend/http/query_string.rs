//! Percent-decoding for request paths and query strings.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("Invalid percent-encoding in '{0}'")]
    InvalidEscape(String),

    #[error("Decoded value is not valid UTF-8")]
    InvalidUtf8,
}

/// Decodes `%XX` escapes. In query strings `+` also stands for a space.
pub fn percent_decode(input: &str, plus_as_space: bool) -> Result<String, DecodeError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let byte = bytes
                    .get(i + 1..i + 3)
                    .filter(|hex| hex.iter().all(u8::is_ascii_hexdigit))
                    .and_then(|hex| std::str::from_utf8(hex).ok())
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok())
                    .ok_or_else(|| DecodeError::InvalidEscape(input.to_string()))?;
                out.push(byte);
                i += 3;
            }
            b'+' if plus_as_space => {
                out.push(b' ');
                i += 1;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(out).map_err(|_| DecodeError::InvalidUtf8)
}

/// First value of `key` in a raw query string, decoded. Only a malformed
/// value for `key` itself is an error.
pub fn query_param(query: Option<&str>, key: &str) -> Result<Option<String>, DecodeError> {
    let Some(query) = query else {
        return Ok(None);
    };

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
        // Undecodable keys belong to someone else's parameter
        if percent_decode(raw_key, true).is_ok_and(|k| k == key) {
            return percent_decode(raw_value, true).map(Some);
        }
    }
    Ok(None)
}
