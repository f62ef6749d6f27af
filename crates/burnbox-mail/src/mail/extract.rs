// ──────────────────────────────────────────────────────────────────────────────
// burnbox-mail · extract
// ──────────────────────────────────────────────────────────────────────────────
// Heuristic one-time-code extraction from message text. Senders pad
// codes with zero-width characters and bury them in localized prose, so
// this normalizes first, then scans for 5-8 digit runs.
// ──────────────────────────────────────────────────────────────────────────────

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Maximal digit runs; length filtering happens after the match so a
    /// run embedded in a longer number is never split into a false code.
    static ref DIGIT_RUN: Regex = Regex::new(r"[0-9]+").expect("static pattern");
}

/// Words that commonly accompany a one-time code, across the locales
/// verification mail actually arrives in.
const HINT_WORDS: &[&str] = &[
    "code",
    "otp",
    "security",
    "login",
    "confirmation",
    "facebook",
    "fb",
    "código",
    "код",
    "رمز",
    "कोड",
    "코드",
    "コード",
    "验证码",
    "код подтверждения",
];

/// Zero-width characters some senders interleave with code digits.
const ZERO_WIDTH: &[char] = &['\u{200B}', '\u{200C}', '\u{200D}', '\u{FEFF}'];

/// True when the text mentions any code-adjacent keyword.
pub fn has_hint(text: &str) -> bool {
    let lower = text.to_lowercase();
    HINT_WORDS.iter().any(|w| lower.contains(w))
}

/// Pull the first 5-8 digit run out of `text`, or `None` when there is
/// no plausible code.
///
/// Hint words are consulted but do not alter which candidate wins: the
/// first run in reading order is returned whether or not the text looks
/// like a verification mail. Digit runs longer than 8 (order numbers,
/// timestamps) never match.
pub fn extract_otp(text: &str) -> Option<String> {
    let cleaned: String = text
        .chars()
        .map(|c| if ZERO_WIDTH.contains(&c) { ' ' } else { c })
        .collect();

    let candidates: Vec<&str> = DIGIT_RUN
        .find_iter(&cleaned)
        .map(|m| m.as_str())
        .filter(|run| (5..=8).contains(&run.len()))
        .collect();

    if candidates.is_empty() {
        return None;
    }

    if has_hint(&cleaned) {
        log::debug!("code candidate near hint keyword");
    }
    Some(candidates[0].to_string())
}
