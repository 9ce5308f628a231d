//! Raw-text email salvage.
//!
//! The label-driven lookup is precise but the storefront's markup is not
//! fully stable, so when no structured email pair exists the full page text
//! is scanned for address-shaped matches instead.

use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}")
        .expect("email pattern is a valid regex")
});

/// Picks the best email candidate out of `text`.
///
/// Scans for address-shaped matches, drops candidates containing a denylist
/// substring (placeholder and social-media addresses), and returns the first
/// survivor. When the denylist removes every candidate, the first raw match
/// is returned anyway — a partially useful address beats none at all.
pub fn select_email(text: &str, denylist: &[String]) -> Option<String> {
    let candidates: Vec<&str> = EMAIL_RE.find_iter(text).map(|m| m.as_str()).collect();
    if candidates.is_empty() {
        return None;
    }

    candidates
        .iter()
        .find(|email| !denylist.iter().any(|deny| email.contains(deny.as_str())))
        .or_else(|| candidates.first())
        .map(|email| (*email).to_owned())
}
