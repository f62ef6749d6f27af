//! Caller-driven token ticking — owns the current config, delegates to
//! the parser and the engine.
//!
//! The ticker holds no timer of its own. The host re-parses by calling
//! [`TotpTicker::set_input`] on every edit and polls [`TotpTicker::tick`]
//! on whatever cadence it likes (twice a second is typical; the cadence is
//! decoupled from the period). Each tick is independent and idempotent, so
//! stopping the poll is all the cancellation there is.

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::totp::config;
use crate::totp::core;
use crate::totp::types::{TotpConfig, TotpToken};

/// Thread-safe ticker state for host frameworks.
pub type TotpTickerState = Arc<Mutex<TotpTicker>>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Token state
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// What the display surface should show for the 2FA panel.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TokenState {
    /// No secret entered — neutral, not an error.
    AwaitingInput,
    /// A secret was entered but rejected, or generation failed.
    Invalid,
    /// A live token.
    Active(TotpToken),
}

impl TokenState {
    pub fn is_active(&self) -> bool {
        matches!(self, TokenState::Active(_))
    }

    /// The token, when there is one.
    pub fn token(&self) -> Option<&TotpToken> {
        match self {
            TokenState::Active(t) => Some(t),
            _ => None,
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  Ticker
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Holds the config parsed from the latest secret edit.
#[derive(Debug, Default)]
pub struct TotpTicker {
    config: Option<TotpConfig>,
    /// Distinguishes "field is empty" from "field holds something we
    /// could not parse" when `config` is `None`.
    rejected_input: bool,
}

impl TotpTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// New ticker wrapped for shared host state.
    pub fn shared() -> TotpTickerState {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Re-parse on a secret-edit event, replacing the config wholesale.
    pub fn set_input(&mut self, raw: &str) {
        self.config = config::parse_secret_input(raw);
        self.rejected_input = self.config.is_none() && !raw.trim().is_empty();
        if self.rejected_input {
            log::debug!("secret input rejected by parser");
        }
    }

    /// Forget the secret. Subsequent ticks report `AwaitingInput`.
    pub fn clear(&mut self) {
        self.config = None;
        self.rejected_input = false;
    }

    /// The currently held config, if any.
    pub fn config(&self) -> Option<&TotpConfig> {
        self.config.as_ref()
    }

    /// Produce the display state for an explicit unix timestamp.
    pub fn tick_at(&self, epoch_seconds: u64) -> TokenState {
        match &self.config {
            None if self.rejected_input => TokenState::Invalid,
            None => TokenState::AwaitingInput,
            Some(cfg) => match core::generate_at(cfg, epoch_seconds) {
                Some(token) => TokenState::Active(token),
                None => TokenState::Invalid,
            },
        }
    }

    /// Produce the display state for the current system clock.
    pub fn tick(&self) -> TokenState {
        self.tick_at(core::current_unix_time())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn awaiting_input_until_secret_set() {
        let ticker = TotpTicker::new();
        assert_eq!(ticker.tick_at(59), TokenState::AwaitingInput);
    }

    #[tokio::test]
    async fn active_after_valid_secret() {
        let mut ticker = TotpTicker::new();
        ticker.set_input("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ");
        let state = ticker.tick_at(59);
        let tok = state.token().expect("active");
        assert_eq!(tok.token, "287082");
        assert_eq!(tok.seconds_remaining, 1);
    }

    #[tokio::test]
    async fn invalid_after_rejected_secret() {
        let mut ticker = TotpTicker::new();
        ticker.set_input("!!!");
        assert_eq!(ticker.tick_at(59), TokenState::Invalid);
    }

    #[tokio::test]
    async fn edit_replaces_config_wholesale() {
        let mut ticker = TotpTicker::new();
        ticker.set_input("otpauth://totp/A?secret=JBSWY3DPEHPK3PXP&digits=8");
        assert_eq!(ticker.config().unwrap().digits, 8);
        ticker.set_input("JBSWY3DPEHPK3PXP");
        assert_eq!(ticker.config().unwrap().digits, 6);
    }

    #[tokio::test]
    async fn clear_returns_to_awaiting() {
        let mut ticker = TotpTicker::new();
        ticker.set_input("JBSWY3DPEHPK3PXP");
        assert!(ticker.tick_at(0).is_active());
        ticker.clear();
        assert_eq!(ticker.tick_at(0), TokenState::AwaitingInput);
    }

    #[tokio::test]
    async fn repeated_ticks_are_idempotent() {
        let mut ticker = TotpTicker::new();
        ticker.set_input("JBSWY3DPEHPK3PXP");
        assert_eq!(ticker.tick_at(1_700_000_000), ticker.tick_at(1_700_000_000));
    }

    #[tokio::test]
    async fn shared_state_ticks() {
        let state = TotpTicker::shared();
        {
            let mut guard = state.lock().await;
            guard.set_input("JBSWY3DPEHPK3PXP");
        }
        let guard = state.lock().await;
        assert!(guard.tick_at(59).is_active());
    }
}
