use crate::community::CommunityFeed;
use crate::error::JournalError;
use crate::journal::Journal;
use dreamsight_core::{DreamEntry, EmotionSelection};
use dreamsight_expression::DreamAnalyzer;
use rand::Rng;
use tracing::info;

/// Everything saved during a session: the private journal and the shared feed.
#[derive(Debug, Clone, Default)]
pub struct DreamArchive {
    pub journal: Journal,
    pub community: CommunityFeed,
}

impl DreamArchive {
    pub fn new(comment_author: impl Into<String>) -> Self {
        Self {
            journal: Journal::new(),
            community: CommunityFeed::new(comment_author),
        }
    }

    /// Record in the journal, and in the feed too when the entry is shared.
    pub fn save(&mut self, entry: DreamEntry) {
        if entry.is_shared {
            self.community.share(entry.clone());
        }
        self.journal.record(entry);
    }
}

/// Analyze a described dream and save it.
///
/// Fails before any analysis runs when the description is blank or no
/// emotion is selected.
pub fn submit_dream<'a, R: Rng>(
    analyzer: &mut DreamAnalyzer<R>,
    archive: &'a mut DreamArchive,
    description: &str,
    emotions: EmotionSelection,
    is_shared: bool,
) -> Result<&'a DreamEntry, JournalError> {
    if description.trim().is_empty() {
        return Err(JournalError::EmptyDescription);
    }
    if emotions.is_empty() {
        return Err(JournalError::NoEmotions);
    }

    let analysis = analyzer.analyze(description, emotions.as_slice());
    let entry = DreamEntry::new(description, emotions, is_shared, Some(analysis));
    let id = entry.id;
    info!(%id, shared = is_shared, "dream saved");

    archive.save(entry);
    archive
        .journal
        .get(id)
        .ok_or(JournalError::UnknownEntry(id))
}
