//! # burnbox: disposable mailbox
//!
//! Mailbox side of the burnbox throwaway-identity helper:
//!
//! - **Provisioning**: mint a throwaway address on the TempMail+ service
//! - **Inbox listing**: poll the mailbox and hydrate message bodies
//! - **OTP extraction**: heuristic scan of subject and body text for the
//!   5-8 digit verification codes signup flows send
//! - **Watching**: an [`mail::InboxWatcher`] that ties the three together
//!   the way the host app refreshes its mail panel

pub mod mail;
