//! Core types for the TOTP engine.

use serde::{Deserialize, Serialize};
use std::fmt;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Algorithm
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Hash algorithm used for HMAC-based OTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Algorithm {
    Sha1,
    Sha256,
    Sha512,
}

impl Default for Algorithm {
    fn default() -> Self {
        Self::Sha1
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha1 => write!(f, "SHA1"),
            Self::Sha256 => write!(f, "SHA256"),
            Self::Sha512 => write!(f, "SHA512"),
        }
    }
}

impl Algorithm {
    /// Parse from a case-insensitive string.
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "SHA1" | "SHA-1" | "HMACSHA1" | "HMAC-SHA1" => Some(Self::Sha1),
            "SHA256" | "SHA-256" | "HMACSHA256" | "HMAC-SHA256" => Some(Self::Sha256),
            "SHA512" | "SHA-512" | "HMACSHA512" | "HMAC-SHA512" => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Same, but unrecognised values coerce to SHA-1 — the behaviour
    /// authenticator apps apply to unknown `algorithm=` parameters.
    pub fn from_str_or_sha1(s: &str) -> Self {
        Self::from_str_loose(s).unwrap_or(Self::Sha1)
    }

    /// URI-safe name for `otpauth://` parameters.
    pub fn uri_name(&self) -> &'static str {
        match self {
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
            Self::Sha512 => "SHA512",
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  TOTP configuration
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Canonical TOTP configuration produced by the secret parser.
///
/// Value type: constructed wholesale on every secret-edit event, never
/// mutated field by field. `secret` holds only normalised base-32 symbols
/// (`A–Z2–7`, uppercase, no padding / whitespace / dashes) and is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpConfig {
    /// Normalised base-32 secret.
    pub secret: String,
    /// Number of digits in the generated code. 6–8 is the RFC-typical
    /// range; other positive values are structurally valid but odd.
    pub digits: u32,
    /// Time-step length in seconds (typically 30). Always > 0.
    pub period: u64,
    /// Hash algorithm.
    pub algorithm: Algorithm,
}

impl TotpConfig {
    /// Create a config with the standard defaults (6 digits, 30 s, SHA-1).
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            digits: 6,
            period: 30,
            algorithm: Algorithm::default(),
        }
    }

    /// Builder: set digit count.
    pub fn with_digits(mut self, digits: u32) -> Self {
        self.digits = digits;
        self
    }

    /// Builder: set time period in seconds. Must be > 0; generation
    /// divides the clock by it. Both parsers already enforce this,
    /// construct-by-hand callers must too.
    pub fn with_period(mut self, period: u64) -> Self {
        self.period = period;
        self
    }

    /// Builder: set algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Generated token
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A generated OTP code with its remaining validity window.
///
/// Produced fresh on every generation call; validity is time-bound, so the
/// host never caches one beyond a single tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotpToken {
    /// Fixed-width, zero-padded decimal code (length == `digits`).
    pub token: String,
    /// Seconds until the current time-step rolls over, in `[1, period]`.
    /// At an exact period boundary this is `period`, never 0.
    pub seconds_remaining: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Algorithm ────────────────────────────────────────────────

    #[test]
    fn algorithm_default_is_sha1() {
        assert_eq!(Algorithm::default(), Algorithm::Sha1);
    }

    #[test]
    fn algorithm_display() {
        assert_eq!(Algorithm::Sha1.to_string(), "SHA1");
        assert_eq!(Algorithm::Sha256.to_string(), "SHA256");
        assert_eq!(Algorithm::Sha512.to_string(), "SHA512");
    }

    #[test]
    fn algorithm_from_str_loose() {
        assert_eq!(Algorithm::from_str_loose("sha1"), Some(Algorithm::Sha1));
        assert_eq!(Algorithm::from_str_loose("SHA-256"), Some(Algorithm::Sha256));
        assert_eq!(Algorithm::from_str_loose("HMAC-SHA512"), Some(Algorithm::Sha512));
        assert_eq!(Algorithm::from_str_loose("MD5"), None);
    }

    #[test]
    fn algorithm_unknown_coerces_to_sha1() {
        assert_eq!(Algorithm::from_str_or_sha1("MD5"), Algorithm::Sha1);
        assert_eq!(Algorithm::from_str_or_sha1("sha512"), Algorithm::Sha512);
    }

    #[test]
    fn algorithm_serde_roundtrip() {
        let algo = Algorithm::Sha256;
        let json = serde_json::to_string(&algo).unwrap();
        assert_eq!(json, "\"SHA256\"");
        let back: Algorithm = serde_json::from_str(&json).unwrap();
        assert_eq!(back, algo);
    }

    // ── TotpConfig ───────────────────────────────────────────────

    #[test]
    fn config_new_defaults() {
        let cfg = TotpConfig::new("JBSWY3DPEHPK3PXP");
        assert_eq!(cfg.secret, "JBSWY3DPEHPK3PXP");
        assert_eq!(cfg.digits, 6);
        assert_eq!(cfg.period, 30);
        assert_eq!(cfg.algorithm, Algorithm::Sha1);
    }

    #[test]
    fn config_builder() {
        let cfg = TotpConfig::new("SECRET")
            .with_digits(8)
            .with_period(60)
            .with_algorithm(Algorithm::Sha256);
        assert_eq!(cfg.digits, 8);
        assert_eq!(cfg.period, 60);
        assert_eq!(cfg.algorithm, Algorithm::Sha256);
    }

    #[test]
    fn config_serde_roundtrip() {
        let cfg = TotpConfig::new("JBSWY3DPEHPK3PXP").with_digits(8);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: TotpConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }

    // ── TotpToken ────────────────────────────────────────────────

    #[test]
    fn token_serde() {
        let tok = TotpToken {
            token: "000042".into(),
            seconds_remaining: 17,
        };
        let json = serde_json::to_string(&tok).unwrap();
        let back: TotpToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tok);
    }
}
