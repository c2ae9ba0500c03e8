//! Ticket keys referenced in a diff.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

static TICKET_KEY: OnceLock<Regex> = OnceLock::new();

fn ticket_key_pattern() -> &'static Regex {
    TICKET_KEY
        .get_or_init(|| Regex::new(r"\b[A-Z]{2,}-\d+\b").expect("ticket key pattern is valid"))
}

/// Returns every distinct `PROJ-123` style key mentioned in `text`, sorted.
#[must_use]
pub fn extract_ticket_keys(text: &str) -> BTreeSet<String> {
    ticket_key_pattern().find_iter(text).map(|m| m.as_str().to_string()).collect()
}
