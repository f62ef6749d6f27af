//! Core OTP generation — RFC 4226 (HOTP) and RFC 6238 (TOTP).
//!
//! HMAC-based one-time passwords with SHA-1, SHA-256 and SHA-512,
//! time-step calculation and the remaining-validity window the display
//! countdown is driven by. All functions are pure: same config and epoch
//! in, same token out.

use crate::totp::base32;
use crate::totp::types::{Algorithm, TotpConfig, TotpToken};
use hmac::{Hmac, Mac};
use sha1::Sha1;
use sha2::{Sha256, Sha512};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Raw HMAC-OTP (RFC 4226 §5.3)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Compute an HOTP code for the given raw key bytes and counter.
pub fn hotp_raw(key: &[u8], counter: u64, digits: u32, algo: Algorithm) -> String {
    let mac = compute_hmac(key, &counter.to_be_bytes(), algo);
    truncate(&mac, digits)
}

/// Compute HMAC(key, message) using the specified algorithm.
/// SHA-1 yields a 20-byte MAC, SHA-256 32 bytes, SHA-512 64 bytes.
fn compute_hmac(key: &[u8], data: &[u8], algo: Algorithm) -> Vec<u8> {
    match algo {
        Algorithm::Sha1 => {
            let mut mac = Hmac::<Sha1>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Sha256 => {
            let mut mac = Hmac::<Sha256>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
        Algorithm::Sha512 => {
            let mut mac = Hmac::<Sha512>::new_from_slice(key).expect("HMAC accepts any key length");
            mac.update(data);
            mac.finalize().into_bytes().to_vec()
        }
    }
}

/// Dynamic truncation per RFC 4226 §5.3: the low nibble of the last MAC
/// byte selects a 4-byte window, whose top bit is masked to keep the value
/// in 31-bit range.
fn truncate(mac: &[u8], digits: u32) -> String {
    let offset = (mac[mac.len() - 1] & 0x0f) as usize;
    let binary = ((mac[offset] as u32 & 0x7f) << 24)
        | ((mac[offset + 1] as u32) << 16)
        | ((mac[offset + 2] as u32) << 8)
        | (mac[offset + 3] as u32);
    // digits is caller-controlled and may exceed the 10 decimal digits a
    // 31-bit value can fill; the modulus is a no-op past that point.
    let code = match 10u64.checked_pow(digits) {
        Some(modulus) => binary as u64 % modulus,
        None => binary as u64,
    };
    format!("{:0>width$}", code, width = digits as usize)
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Time steps (RFC 6238)
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Compute the time-step counter for a given unix timestamp.
pub fn time_step_at(epoch_seconds: u64, period: u64) -> u64 {
    epoch_seconds / period
}

/// Seconds remaining in the current time-step, in `[1, period]`.
///
/// At an exact multiple of `period` this is `period`, never 0: the window
/// has just restarted and all of it remains. This convention sets the first
/// countdown value shown after a rollover, so it is fixed, not a choice
/// left to callers.
pub fn seconds_remaining_at(epoch_seconds: u64, period: u64) -> u64 {
    period - (epoch_seconds % period)
}

/// Current unix timestamp in seconds.
pub fn current_unix_time() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TOTP generation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Generate the token for `config` at an explicit unix timestamp.
///
/// Returns `None` only when the secret decodes to zero usable bytes — an
/// "invalid secret" state, distinct from the "no secret" state the parser
/// reports. Every other input produces a token.
pub fn generate_at(config: &TotpConfig, epoch_seconds: u64) -> Option<TotpToken> {
    let key = base32::decode(&config.secret);
    if key.is_empty() {
        log::debug!("secret decodes to zero bytes, refusing to generate");
        return None;
    }

    let counter = time_step_at(epoch_seconds, config.period);
    let token = hotp_raw(&key, counter, config.digits, config.algorithm);
    let seconds_remaining = seconds_remaining_at(epoch_seconds, config.period);

    Some(TotpToken {
        token,
        seconds_remaining,
    })
}

/// Generate the token for `config` at the current system clock.
pub fn generate(config: &TotpConfig) -> Option<TotpToken> {
    generate_at(config, current_unix_time())
}
