//! Lenient base-32 handling (RFC 4648 alphabet, `A–Z2–7`).
//!
//! Secrets arrive as user pastes: mixed case, grouped with spaces or
//! dashes, sometimes with stray punctuation. [`normalize`] reduces such
//! input to the canonical uppercase form; [`decode`] packs it into key
//! bytes and skips anything it does not recognise instead of failing.

use rand::RngCore;

const ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Normalisation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Normalise a pasted secret: trim, uppercase, drop whitespace, dashes and
/// every character outside `A–Z2–7`. Idempotent on already clean input.
/// Returns an empty string when nothing valid remains.
pub fn normalize(input: &str) -> String {
    input
        .trim()
        .chars()
        .filter_map(|c| {
            let c = c.to_ascii_uppercase();
            match c {
                'A'..='Z' | '2'..='7' => Some(c),
                _ => None,
            }
        })
        .collect()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Decode / encode
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Decode base-32 to bytes, leniently.
///
/// 5-bit groups are packed MSB-first; a trailing incomplete group is
/// discarded. Symbols outside the alphabet (including `=` padding) are
/// skipped — the parser has already normalised, this is defensive. Input
/// with no usable symbol yields an empty vector.
pub fn decode(b32: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(b32.len() * 5 / 8);
    let mut value: u32 = 0;
    let mut bits: u32 = 0;

    for ch in b32.bytes() {
        let idx = match ch.to_ascii_uppercase() {
            c @ b'A'..=b'Z' => (c - b'A') as u32,
            c @ b'2'..=b'7' => (c - b'2') as u32 + 26,
            _ => continue,
        };
        value = (value << 5) | idx;
        bits += 5;
        if bits >= 8 {
            out.push(((value >> (bits - 8)) & 0xff) as u8);
            bits -= 8;
        }
    }
    out
}

/// Encode raw bytes to base-32 (no padding, uppercase).
pub fn encode(bytes: &[u8]) -> String {
    base32::encode(base32::Alphabet::Rfc4648 { padding: false }, bytes)
}

/// Generate a cryptographically-random base-32 secret of `byte_length`
/// key bytes (20 is the RFC 4226 recommended size).
pub fn generate_secret(byte_length: usize) -> String {
    let mut buf = vec![0u8; byte_length];
    rand::thread_rng().fill_bytes(&mut buf);
    encode(&buf)
}
