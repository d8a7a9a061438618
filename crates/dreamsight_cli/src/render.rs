//! Plain-text views of analyses, journal entries and the feed.

use dreamsight_core::{DreamAnalysis, DreamEntry, Emotion, SYMBOL_CATALOG};
use dreamsight_journal::format::{format_entry_date, preview};
use dreamsight_journal::Comment;

fn emotion_list(emotions: &[Emotion]) -> String {
    let names: Vec<&str> = emotions.iter().map(Emotion::name).collect();
    names.join(", ")
}

pub fn analysis_block(analysis: &DreamAnalysis) -> String {
    let mut out = String::new();
    out.push_str("Dream Interpretation\n");
    out.push_str(&format!("  {}\n\n", analysis.interpretation));
    out.push_str("Key Symbols\n");
    for symbol in &analysis.symbols {
        out.push_str(&format!("  {}: {}\n", symbol.name, symbol.meaning));
    }
    out.push_str("\nReflection\n");
    out.push_str(&format!("  {}\n", analysis.reflection));
    out
}

/// One line per entry in a numbered listing.
pub fn entry_line(index: usize, entry: &DreamEntry) -> String {
    format!(
        "{:>3}. {}  [{}]  {}",
        index,
        format_entry_date(&entry.created_at),
        emotion_list(&entry.emotions),
        preview(&entry.description)
    )
}

pub fn entry_detail(entry: &DreamEntry) -> String {
    let mut out = format!(
        "{}  [{}]{}\n\n{}\n",
        format_entry_date(&entry.created_at),
        emotion_list(&entry.emotions),
        if entry.is_shared { "  (shared)" } else { "" },
        entry.description
    );
    if let Some(analysis) = &entry.analysis {
        out.push('\n');
        out.push_str(&analysis_block(analysis));
    }
    out
}

/// Symbol tags shown on each shared dream.
const FEED_SYMBOL_TAGS: usize = 3;

pub fn feed_item(index: usize, entry: &DreamEntry, liked: bool, comments: &[&Comment]) -> String {
    let mut out = format!(
        "{:>3}. Anonymous Dreamer · {}  [{}]\n     {}\n",
        index,
        format_entry_date(&entry.created_at),
        emotion_list(&entry.emotions),
        preview(&entry.description)
    );
    let tags: Vec<&str> = entry
        .analysis
        .iter()
        .flat_map(|a| a.symbols.iter().take(FEED_SYMBOL_TAGS))
        .map(|s| s.name)
        .collect();
    if !tags.is_empty() {
        out.push_str(&format!("     #{}\n", tags.join(" #")));
    }
    let comment_word = if comments.len() == 1 { "comment" } else { "comments" };
    out.push_str(&format!(
        "     {} · {} {}\n",
        if liked { "♥ Liked" } else { "♡ Like" },
        comments.len(),
        comment_word
    ));
    for comment in comments {
        out.push_str(&format!(
            "       {} ({}): {}\n",
            comment.author,
            format_entry_date(&comment.created_at),
            comment.text
        ));
    }
    out
}

pub fn symbol_table() -> String {
    let width = SYMBOL_CATALOG
        .iter()
        .map(|s| s.name.len())
        .max()
        .unwrap_or_default();
    SYMBOL_CATALOG
        .iter()
        .map(|s| format!("{:<width$}  {}\n", s.name, s.meaning, width = width))
        .collect()
}
