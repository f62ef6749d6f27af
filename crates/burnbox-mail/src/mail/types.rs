//! Core types for the disposable-mailbox crate.

use serde::{Deserialize, Serialize};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Mailbox
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A provisioned throwaway mailbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mailbox {
    /// Full address, always `local@domain`.
    pub email: String,
}

impl Mailbox {
    pub fn new(email: impl Into<String>) -> Self {
        Self { email: email.into() }
    }

    /// Provider APIs key everything off the full address; reject early
    /// when the domain part is missing.
    pub fn is_valid(&self) -> bool {
        let e = self.email.trim();
        match e.split_once('@') {
            Some((local, domain)) => !local.is_empty() && !domain.is_empty(),
            None => false,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Message
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// One inbox record, hydrated with its plain-text body.
///
/// This is the shape the OTP extractor consumes: `subject` and `text`
/// concatenated. `time` is the provider's display timestamp, passed
/// through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub id: String,
    pub from: String,
    pub subject: String,
    pub text: String,
    pub time: String,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Error type
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Errors from the mailbox provider boundary. Extraction itself never
/// fails — only the HTTP side does.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("provider rejected request ({status}): {detail}")]
    Provider { status: u16, detail: String },

    #[error("invalid mailbox address: {0}")]
    InvalidMailbox(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Mailbox ──────────────────────────────────────────────────

    #[test]
    fn mailbox_with_domain_is_valid() {
        assert!(Mailbox::new("abc123@rover.info").is_valid());
    }

    #[test]
    fn mailbox_without_domain_is_invalid() {
        assert!(!Mailbox::new("abc123").is_valid());
        assert!(!Mailbox::new("abc123@").is_valid());
        assert!(!Mailbox::new("@rover.info").is_valid());
        assert!(!Mailbox::new("").is_valid());
    }

    // ── MailMessage ──────────────────────────────────────────────

    #[test]
    fn message_serde_roundtrip() {
        let msg = MailMessage {
            id: "42".into(),
            from: "no-reply@facebookmail.com".into(),
            subject: "123456 is your code".into(),
            text: "Enter 123456 to confirm.".into(),
            time: "2025-01-01 10:00:00".into(),
        };
        let json = serde_json::to_string(&msg).unwrap();
        let back: MailMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, msg);
    }

    // ── MailError ────────────────────────────────────────────────

    #[test]
    fn error_display() {
        let err = MailError::Provider {
            status: 502,
            detail: "list failed".into(),
        };
        let s = err.to_string();
        assert!(s.contains("502"));
        assert!(s.contains("list failed"));
    }
}
