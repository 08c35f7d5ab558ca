//! Presentation helpers for post cards: age labels and code previews.

use chrono::{DateTime, Utc};

/// Label for a post created at `created_at` (RFC 3339), relative to `now`.
///
/// Unparseable timestamps are returned unchanged.
pub fn age_label(created_at: &str, now: DateTime<Utc>) -> String {
    let Ok(created) = DateTime::parse_from_rfc3339(created_at) else {
        return created_at.to_string();
    };
    let created = created.with_timezone(&Utc);
    let elapsed = (now - created).abs();

    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 7 {
        plural(days, "day")
    } else {
        created.format("%B %-d, %Y").to_string()
    }
}

/// [`age_label`] against the current clock.
pub fn age_label_now(created_at: &str) -> String {
    age_label(created_at, Utc::now())
}

/// Lines shown in a feed card before the code is cut off.
pub const PREVIEW_LINES: usize = 10;

/// First `max_lines` lines of `code`, with a trailing `...` when truncated.
pub fn code_preview(code: &str, max_lines: usize) -> String {
    let mut lines = code.lines();
    let head: Vec<&str> = lines.by_ref().take(max_lines).collect();
    if lines.next().is_some() {
        format!("{}\n...", head.join("\n"))
    } else {
        code.to_string()
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{n} {unit}s ago")
    }
}
