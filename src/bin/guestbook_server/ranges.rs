use std::sync::OnceLock;

use regex::Regex;

fn range_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^bytes=(\d*)-(\d*)$").expect("valid range pattern"))
}

/// What part of a file a `Range` header asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum ByteRange {
    Full,
    /// Inclusive on both ends.
    Partial { start: u64, end: u64 },
    Unsatisfiable,
}

/// Only a single `bytes=a-b`, `bytes=a-` or `bytes=-n` range is honoured;
/// anything else unparseable is served whole.
pub(super) fn byte_range(header: Option<&str>, len: u64) -> ByteRange {
    let Some(header) = header else {
        return ByteRange::Full;
    };
    let Some(caps) = range_pattern().captures(header.trim()) else {
        return ByteRange::Full;
    };
    let start: Option<u64> = caps.get(1).and_then(|m| m.as_str().parse().ok());
    let end: Option<u64> = caps.get(2).and_then(|m| m.as_str().parse().ok());
    if len == 0 {
        return ByteRange::Unsatisfiable;
    }
    let last = len - 1;
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) => (start, end.min(last)),
        (Some(start), None) => (start, last),
        (None, Some(0)) => return ByteRange::Unsatisfiable,
        (None, Some(suffix)) => (len.saturating_sub(suffix), last),
        (None, None) => return ByteRange::Full,
    };
    if start > end || start > last {
        return ByteRange::Unsatisfiable;
    }
    ByteRange::Partial { start, end }
}

#[cfg(test)]
#[path = "../../tests/bin/guestbook_server/ranges_tests.rs"]
mod tests;
