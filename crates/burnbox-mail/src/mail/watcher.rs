// ──────────────────────────────────────────────────────────────────────────────
// burnbox-mail · watcher
// ──────────────────────────────────────────────────────────────────────────────
// Stateful inbox watcher: owns one disposable mailbox, refreshes its
// listing on demand and remembers the most recent one-time code seen.
// ──────────────────────────────────────────────────────────────────────────────

use crate::mail::client::TempMailClient;
use crate::mail::extract::extract_otp;
use crate::mail::types::{MailError, MailMessage, Mailbox};
use log::{debug, info};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared watcher handle for async callers.
pub type InboxWatcherState = Arc<Mutex<InboxWatcher>>;

/// How many listing rows to request per refresh.
const REFRESH_LIMIT: usize = 20;

#[derive(Debug, Default)]
pub struct InboxWatcher {
    client: TempMailClient,
    mailbox: Option<Mailbox>,
    messages: Vec<MailMessage>,
    last_otp: Option<String>,
}

impl InboxWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: TempMailClient) -> Self {
        Self {
            client,
            ..Self::default()
        }
    }

    pub fn shared() -> InboxWatcherState {
        Arc::new(Mutex::new(Self::new()))
    }

    // ── Accessors ────────────────────────────────────────────────────────

    pub fn mailbox(&self) -> Option<&Mailbox> {
        self.mailbox.as_ref()
    }

    pub fn messages(&self) -> &[MailMessage] {
        &self.messages
    }

    pub fn last_otp(&self) -> Option<&str> {
        self.last_otp.as_deref()
    }

    // ── Lifecycle ────────────────────────────────────────────────────────

    /// Mint a fresh mailbox, dropping any previous one along with its
    /// cached messages and code.
    pub fn provision(&mut self) -> Mailbox {
        let mailbox = self.client.create_mailbox();
        info!("provisioned mailbox {}", mailbox.email);
        self.messages.clear();
        self.last_otp = None;
        self.mailbox = Some(mailbox.clone());
        mailbox
    }

    /// Re-list the inbox and rescan for a one-time code. The code always
    /// mirrors the current listing: when no message carries one it is
    /// cleared, never held over from an earlier refresh.
    pub async fn refresh(&mut self) -> Result<&[MailMessage], MailError> {
        let email = match &self.mailbox {
            Some(mb) => mb.email.clone(),
            None => return Err(MailError::InvalidMailbox(String::new())),
        };

        self.messages = self.client.fetch_inbox(&email, REFRESH_LIMIT).await?;
        debug!("{}: {} messages", email, self.messages.len());

        self.last_otp = scan_messages(&self.messages);
        Ok(&self.messages)
    }
}

/// Scan messages newest-first and return the first one-time code found,
/// checking subject and body together per message.
pub fn scan_messages(messages: &[MailMessage]) -> Option<String> {
    messages.iter().find_map(|m| {
        let combined = format!("{}\n\n{}", m.subject, m.text);
        extract_otp(&combined)
    })
}
