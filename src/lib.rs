//! # burnbox
//!
//! Throwaway-identity helper: paste a TOTP secret (raw base-32 or an
//! `otpauth://totp/` URI) and get ticking codes, mint a disposable
//! mailbox and have verification codes fished out of incoming mail.
//!
//! The heavy lifting lives in two member crates, re-exported here:
//!
//! - [`totp`]: RFC 4226/6238 generation, secret parsing, token ticking
//! - [`mail`]: TempMail+ provisioning, inbox listing, OTP extraction
//!
//! [`session::BurnerSession`] ties the two together for hosts that want
//! a single stateful handle.

pub mod session;

pub use burnbox_mail::mail;
pub use burnbox_totp::totp;

pub use session::{BurnerSession, BurnerSessionState};
