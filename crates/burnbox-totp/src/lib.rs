//! # burnbox – TOTP engine
//!
//! Time-based one-time password core for the burnbox throwaway-identity
//! helper:
//!
//! - **RFC 4226 / 6238** – HOTP & TOTP generation with SHA-1, SHA-256, SHA-512
//! - **Secret parsing** – raw base-32 pastes and `otpauth://totp/` URIs into a
//!   canonical [`totp::TotpConfig`]
//! - **Lenient base-32** – normalisation and decoding that survives the noise
//!   users paste (spaces, dashes, mixed case, stray punctuation)
//! - **Token ticking** – a caller-driven [`totp::TotpTicker`] that re-parses on
//!   edit and produces the current code plus its remaining validity window

pub mod totp;
