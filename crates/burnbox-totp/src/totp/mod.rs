//! TOTP crate: sub-modules.

pub mod base32;
pub mod config;
pub mod core;
pub mod service;
pub mod types;
pub mod uri;

// Re-export top-level items for convenience.
pub use config::parse_secret_input;
pub use core::{generate, generate_at};
pub use service::{TokenState, TotpTicker, TotpTickerState};
pub use types::*;
