use chrono::{DateTime, Utc};

/// Number of characters of a description shown before "Read more".
pub const PREVIEW_CHARS: usize = 150;

/// `Oct 19, 2026` style date used in listings.
pub fn format_entry_date(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// First [`PREVIEW_CHARS`] characters followed by `...`, or the whole text if short.
pub fn preview(description: &str) -> String {
    if description.chars().count() <= PREVIEW_CHARS {
        return description.to_string();
    }
    let head: String = description.chars().take(PREVIEW_CHARS).collect();
    format!("{}...", head)
}
