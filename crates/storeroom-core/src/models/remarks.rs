//! The remarks formatting rule.
//!
//! Every write path that stores audit-formatted remarks goes through
//! [`format_remarks`], so this is the only place deciding whether a piece of
//! text needs a fresh stamp.

use std::sync::LazyLock;

use regex::Regex;

use crate::clock::{format_timestamp, Clock};

static STAMP_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[\d{4}-\d{2}-\d{2} \d{2}:\d{2}\]").expect("stamp pattern is valid")
});

/// Returns true if `text`, ignoring surrounding whitespace, starts with a
/// `[YYYY-MM-DD HH:MM]` stamp.
pub fn has_timestamp_prefix(text: &str) -> bool {
    STAMP_PREFIX.is_match(text.trim())
}

/// Formats `text` as a remarks entry.
///
/// - blank text becomes `"[<now>] "`
/// - text already starting with a stamp is returned unchanged
/// - anything else becomes `"[<now>] <trimmed text>"`
pub fn format_remarks(text: &str, clock: &dyn Clock) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return format!("[{}] ", format_timestamp(&clock.now()));
    }
    if has_timestamp_prefix(trimmed) {
        return text.to_string();
    }
    stamp_entry(trimmed, clock)
}

/// Formats `message` as exactly one remarks line.
///
/// Line breaks are folded to spaces before [`format_remarks`] runs, so an
/// appended message always adds exactly one line to the log.
pub fn format_entry(message: &str, clock: &dyn Clock) -> String {
    let folded = message.replace(['\r', '\n'], " ");
    format_remarks(&folded, clock)
}

/// Prefixes `message` with the current stamp without inspecting it.
pub fn stamp_entry(message: &str, clock: &dyn Clock) -> String {
    format!("[{}] {}", format_timestamp(&clock.now()), message)
}
