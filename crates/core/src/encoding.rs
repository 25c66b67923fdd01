//! Hex encoding checks shared by proofs, tokens and query responses

/// Whether `s` is a non-empty, even-length string of ASCII hex digits.
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.len() % 2 == 0 && s.bytes().all(|b| b.is_ascii_hexdigit())
}
