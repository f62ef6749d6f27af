//! Mail crate: sub-modules.

pub mod client;
pub mod extract;
pub mod types;
pub mod watcher;

// Re-export top-level items for convenience.
pub use client::TempMailClient;
pub use extract::{extract_otp, has_hint};
pub use types::*;
pub use watcher::{scan_messages, InboxWatcher, InboxWatcherState};
