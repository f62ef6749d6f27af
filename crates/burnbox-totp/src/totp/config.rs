//! Secret-input parsing: arbitrary pasted text → canonical [`TotpConfig`].
//!
//! The host re-runs [`parse_secret_input`] on every edit of the secret
//! field and replaces its held config wholesale. Absence means "nothing
//! usable was entered" — an empty field is a neutral awaiting-input state,
//! a non-empty reject is an invalid-secret state; the distinction is the
//! host's to render.

use crate::totp::base32;
use crate::totp::types::TotpConfig;
use crate::totp::uri;

/// Turn a pasted string into a canonical config, or `None`.
///
/// Accepted forms, in order:
/// 1. nothing but whitespace → `None`;
/// 2. an `otpauth://totp/` URI (digits / period / algorithm honoured);
/// 3. a captured query string carrying `secret=<base32>` — pasted straight
///    out of a provisioning URL — from which the secret is lifted;
/// 4. a raw base-32 secret, normalised leniently; standard defaults apply
///    (6 digits, 30 s, SHA-1).
///
/// Pure: no side effects, no clock.
pub fn parse_secret_input(raw: &str) -> Option<TotpConfig> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if raw.starts_with("otpauth://") {
        return uri::parse_otpauth(raw);
    }

    // Tolerant-paste convenience: "…secret=XXXX&issuer=…" fragments.
    // Without this, normalisation would happily fold "SECRET" itself
    // into the key material.
    let candidate = extract_query_secret(raw).unwrap_or(raw);

    let secret = base32::normalize(candidate);
    if secret.is_empty() {
        return None;
    }

    Some(TotpConfig::new(secret))
}

/// Lift the value of a `secret=` parameter out of a pasted query-string
/// fragment. Case-insensitive on the key, value runs to `&` or end.
fn extract_query_secret(raw: &str) -> Option<&str> {
    // ascii-lowercase keeps byte offsets aligned with `raw`
    let lower = raw.to_ascii_lowercase();
    let start = lower.find("secret=")? + "secret=".len();
    let rest = &raw[start..];
    let end = rest.find('&').unwrap_or(rest.len());
    Some(&rest[..end])
}
