// ──────────────────────────────────────────────────────────────────────────────
// burnbox · session
// ──────────────────────────────────────────────────────────────────────────────
// Glue between the two halves of the tool: one session owns a TOTP
// ticker and an inbox watcher, mirroring the single screen the host UI
// presents (secret field + code readout on one side, throwaway mailbox
// on the other).
// ──────────────────────────────────────────────────────────────────────────────

use burnbox_mail::mail::{InboxWatcher, MailError, MailMessage, Mailbox, TempMailClient};
use burnbox_totp::totp::{TokenState, TotpTicker};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared session handle for async callers.
pub type BurnerSessionState = Arc<Mutex<BurnerSession>>;

#[derive(Debug, Default)]
pub struct BurnerSession {
    ticker: TotpTicker,
    watcher: InboxWatcher,
}

impl BurnerSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom mail client (test servers, alternate API roots).
    pub fn with_mail_client(client: TempMailClient) -> Self {
        Self {
            ticker: TotpTicker::new(),
            watcher: InboxWatcher::with_client(client),
        }
    }

    pub fn shared() -> BurnerSessionState {
        Arc::new(Mutex::new(Self::new()))
    }

    // ── TOTP side ────────────────────────────────────────────────────────

    /// Replace the secret wholesale from whatever the user pasted.
    pub fn set_secret_input(&mut self, raw: &str) {
        self.ticker.set_input(raw);
    }

    pub fn clear_secret(&mut self) {
        self.ticker.clear();
    }

    /// Current token state at `epoch` seconds since the Unix epoch.
    pub fn tick_at(&self, epoch: u64) -> TokenState {
        self.ticker.tick_at(epoch)
    }

    /// Current token state at the system clock.
    pub fn tick(&self) -> TokenState {
        self.ticker.tick()
    }

    // ── Mail side ────────────────────────────────────────────────────────

    /// Burn the current mailbox (if any) and mint a fresh one.
    pub fn new_mailbox(&mut self) -> Mailbox {
        self.watcher.provision()
    }

    pub fn mailbox(&self) -> Option<&Mailbox> {
        self.watcher.mailbox()
    }

    pub async fn refresh_mail(&mut self) -> Result<&[MailMessage], MailError> {
        self.watcher.refresh().await
    }

    pub fn messages(&self) -> &[MailMessage] {
        self.watcher.messages()
    }

    /// Code found in the inbox as of the last refresh, if any.
    pub fn last_otp(&self) -> Option<&str> {
        self.watcher.last_otp()
    }
}
