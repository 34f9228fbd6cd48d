//! Per-entry truncation of log text.

use std::borrow::Cow;
use std::num::NonZeroUsize;

/// Keeps only the first `max_lines` lines of one log entry. Each entry is
/// truncated on its own; there is no budget shared across entries.
///
/// 仅保留单个日志条目的前 `max_lines` 行。每个条目独立截断。
pub fn truncate_entry(entry: &str, max_lines: Option<NonZeroUsize>) -> Cow<'_, str> {
    match max_lines {
        Some(max) if entry.split('\n').nth(max.get()).is_some() => Cow::Owned(
            entry
                .split('\n')
                .take(max.get())
                .collect::<Vec<_>>()
                .join("\n"),
        ),
        _ => Cow::Borrowed(entry),
    }
}
