//! `otpauth://` URI parsing and generation per the Google Authenticator
//! key-URI format:
//! <https://github.com/google/google-authenticator/wiki/Key-Uri-Format>
//!
//! Format: `otpauth://totp/LABEL?secret=BASE32&issuer=NAME&algorithm=SHA1&digits=6&period=30`
//!
//! Only TOTP provisioning is handled here; counter-based (`hotp`) URIs are
//! rejected, as are URIs without a usable secret. Rejection is reported as
//! absence — the host renders it as an "invalid secret" state.

use crate::totp::base32;
use crate::totp::types::{Algorithm, TotpConfig};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Parse
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Parse an `otpauth://totp/` URI into a canonical [`TotpConfig`].
///
/// Defaults follow the key-URI spec: 6 digits, 30-second period, SHA-1.
/// An unrecognised `algorithm=` coerces to SHA-1; a non-positive or
/// unparseable `digits=`/`period=` falls back to its default. Unknown
/// query parameters are ignored. Returns `None` for anything that is not
/// a well-formed TOTP URI with a non-empty secret.
pub fn parse_otpauth(uri: &str) -> Option<TotpConfig> {
    let url = match url::Url::parse(uri) {
        Ok(u) => u,
        Err(e) => {
            log::debug!("unparseable otpauth uri: {}", e);
            return None;
        }
    };

    if url.scheme() != "otpauth" || url.host_str() != Some("totp") {
        return None;
    }

    let mut secret: Option<String> = None;
    let mut digits = 6u32;
    let mut period = 30u64;
    let mut algorithm = Algorithm::Sha1;

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "secret" => secret = Some(value.to_string()),
            "algorithm" => algorithm = Algorithm::from_str_or_sha1(&value),
            "digits" => {
                if let Ok(d) = value.parse::<u32>() {
                    if d > 0 {
                        digits = d;
                    }
                }
            }
            "period" => {
                if let Ok(p) = value.parse::<u64>() {
                    if p > 0 {
                        period = p;
                    }
                }
            }
            _ => {} // issuer, image, … — irrelevant to generation
        }
    }

    let secret = base32::normalize(&secret?);
    if secret.is_empty() {
        return None;
    }

    Some(TotpConfig {
        secret,
        digits,
        period,
        algorithm,
    })
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Generate
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Build an `otpauth://totp/` URI for `config`, for provisioning display.
/// Parameters at their defaults are omitted.
pub fn build_otpauth(config: &TotpConfig, label: &str, issuer: Option<&str>) -> String {
    let label = url_encode(label);
    let path = match issuer {
        Some(iss) if !iss.is_empty() => format!("{}:{}", url_encode(iss), label),
        _ => label,
    };

    let mut params = vec![format!("secret={}", config.secret)];
    if let Some(iss) = issuer {
        if !iss.is_empty() {
            params.push(format!("issuer={}", url_encode(iss)));
        }
    }
    if config.algorithm != Algorithm::Sha1 {
        params.push(format!("algorithm={}", config.algorithm.uri_name()));
    }
    if config.digits != 6 {
        params.push(format!("digits={}", config.digits));
    }
    if config.period != 30 {
        params.push(format!("period={}", config.period));
    }

    format!("otpauth://totp/{}?{}", path, params.join("&"))
}

fn url_encode(s: &str) -> String {
    let mut output = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                output.push(byte as char);
            }
            b' ' => output.push_str("%20"),
            b'@' => output.push_str("%40"),
            _ => output.push_str(&format!("%{:02X}", byte)),
        }
    }
    output
}
