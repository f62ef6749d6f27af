use burnbox::mail::{scan_messages, MailMessage};
use burnbox::totp::{Algorithm, TokenState};
use burnbox::BurnerSession;

// End-to-end flows over the public session handle, offline only: the
// TOTP side is fully deterministic and the mail side is exercised up to
// (but not including) the network boundary.

#[test]
fn test_fresh_session_awaits_input() {
    let session = BurnerSession::new();
    assert_eq!(session.tick_at(0), TokenState::AwaitingInput);
    assert!(session.mailbox().is_none());
    assert!(session.messages().is_empty());
    assert!(session.last_otp().is_none());
}

#[test]
fn test_pasted_secret_produces_rfc_vector() {
    let mut session = BurnerSession::new();
    // "12345678901234567890" in base-32, the RFC 6238 reference key
    session.set_secret_input("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ");

    let state = session.tick_at(59);
    let token = state.token().expect("secret should generate");
    assert_eq!(token.token, "287082");
    assert_eq!(token.seconds_remaining, 1);
}

#[test]
fn test_otpauth_uri_paste_overrides_defaults() {
    let mut session = BurnerSession::new();
    session.set_secret_input(
        "otpauth://totp/Acme:user?secret=GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ&digits=8&algorithm=SHA1",
    );
    let state = session.tick_at(59);
    assert_eq!(state.token().unwrap().token, "94287082");
}

#[test]
fn test_garbage_input_is_invalid_not_awaiting() {
    let mut session = BurnerSession::new();
    session.set_secret_input("!!!");
    assert_eq!(session.tick_at(0), TokenState::Invalid);

    session.clear_secret();
    assert_eq!(session.tick_at(0), TokenState::AwaitingInput);
}

#[test]
fn test_token_rolls_at_period_boundary() {
    let mut session = BurnerSession::new();
    session.set_secret_input("JBSWY3DPEHPK3PXP");

    let before = session.tick_at(29);
    let after = session.tick_at(30);
    assert_ne!(
        before.token().unwrap().token,
        after.token().unwrap().token
    );
    assert_eq!(before.token().unwrap().seconds_remaining, 1);
    assert_eq!(after.token().unwrap().seconds_remaining, 30);
}

#[test]
fn test_algorithm_display_matches_uri_spelling() {
    assert_eq!(Algorithm::Sha1.to_string(), "SHA1");
    assert_eq!(Algorithm::Sha256.to_string(), "SHA256");
    assert_eq!(Algorithm::Sha512.to_string(), "SHA512");
}

#[test]
fn test_mailbox_minting_is_local_and_fresh() {
    let mut session = BurnerSession::new();
    let first = session.new_mailbox();
    assert!(first.is_valid());
    let second = session.new_mailbox();
    assert!(second.is_valid());
    assert_ne!(first, second);
    assert_eq!(session.mailbox(), Some(&second));
}

#[test]
fn test_inbox_scan_picks_code_from_newest_message() {
    let messages = vec![
        MailMessage {
            id: "2".into(),
            from: "security@facebookmail.com".into(),
            subject: "123456 is your Facebook code".into(),
            text: String::new(),
            time: "2025-01-02 10:00:00".into(),
        },
        MailMessage {
            id: "1".into(),
            from: "news@example.com".into(),
            subject: "Welcome aboard".into(),
            text: "Thanks for signing up, enjoy!".into(),
            time: "2025-01-01 09:00:00".into(),
        },
    ];
    assert_eq!(scan_messages(&messages), Some("123456".to_string()));
}

#[test]
fn test_shared_session_handle() {
    let shared = BurnerSession::shared();
    tokio_test::block_on(async {
        let mut session = shared.lock().await;
        session.set_secret_input("JBSWY3DPEHPK3PXP");
        assert!(session.tick_at(0).is_active());
    });
    tokio_test::block_on(async {
        let session = shared.lock().await;
        assert!(session.tick_at(0).is_active());
    });
}
