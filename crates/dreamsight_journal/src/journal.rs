use dreamsight_core::{DreamEntry, Emotion};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

/// Search, filter and ordering applied when listing the journal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalQuery {
    /// Case-insensitive text matched against the description or any emotion
    /// name. Empty matches everything.
    pub search: String,
    pub emotion: Option<Emotion>,
    pub order: SortOrder,
}

impl JournalQuery {
    pub fn matches(&self, entry: &DreamEntry) -> bool {
        let term = self.search.to_lowercase();
        let text_match = entry.description.to_lowercase().contains(&term)
            || entry
                .emotions
                .iter()
                .any(|e| e.name().to_lowercase().contains(&term));
        let emotion_match = self.emotion.map_or(true, |e| entry.has_emotion(e));
        text_match && emotion_match
    }
}

/// Every dream the user has analyzed, most recent first.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    entries: Vec<DreamEntry>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, entry: DreamEntry) {
        self.entries.insert(0, entry);
    }

    pub fn get(&self, id: Uuid) -> Option<&DreamEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Entries in insertion order, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &DreamEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn query(&self, query: &JournalQuery) -> Vec<&DreamEntry> {
        let mut found: Vec<&DreamEntry> = self.entries.iter().filter(|e| query.matches(e)).collect();
        match query.order {
            SortOrder::Newest => found.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
            SortOrder::Oldest => found.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use dreamsight_core::EmotionSelection;
    use Emotion::*;

    fn entry(description: &str, emotions: &[Emotion], minutes: i64) -> DreamEntry {
        let base = Utc.with_ymd_and_hms(2024, 5, 1, 6, 0, 0).unwrap();
        DreamEntry::at(
            description,
            EmotionSelection::try_from_slice(emotions).unwrap(),
            false,
            None,
            base + Duration::minutes(minutes),
        )
    }

    fn journal() -> Journal {
        let mut j = Journal::new();
        j.record(entry("Swimming in a dark ocean", &[Fear], 0));
        j.record(entry("A picnic with old friends", &[Happiness, Peace], 10));
        j.record(entry("Lost keys before an exam", &[Confusion, Fear], 20));
        j
    }

    fn descriptions(entries: &[&DreamEntry]) -> Vec<String> {
        entries.iter().map(|e| e.description.clone()).collect()
    }

    #[test]
    fn test_record_prepends() {
        let j = journal();
        assert_eq!(j.len(), 3);
        assert_eq!(
            j.iter().next().map(|e| e.description.as_str()),
            Some("Lost keys before an exam")
        );
    }

    #[test]
    fn test_default_query_lists_newest_first() {
        let j = journal();
        let found = j.query(&JournalQuery::default());
        assert_eq!(
            descriptions(&found),
            vec![
                "Lost keys before an exam",
                "A picnic with old friends",
                "Swimming in a dark ocean",
            ]
        );
    }

    #[test]
    fn test_oldest_first() {
        let j = journal();
        let found = j.query(&JournalQuery {
            order: SortOrder::Oldest,
            ..Default::default()
        });
        assert_eq!(found[0].description, "Swimming in a dark ocean");
    }

    #[test]
    fn test_search_description_case_insensitive() {
        let j = journal();
        let found = j.query(&JournalQuery {
            search: "OCEAN".to_string(),
            ..Default::default()
        });
        assert_eq!(descriptions(&found), vec!["Swimming in a dark ocean"]);
    }

    #[test]
    fn test_search_matches_emotion_names() {
        let j = journal();
        let found = j.query(&JournalQuery {
            search: "pea".to_string(),
            ..Default::default()
        });
        assert_eq!(descriptions(&found), vec!["A picnic with old friends"]);
    }

    #[test]
    fn test_emotion_filter_combines_with_search() {
        let j = journal();
        let fear = j.query(&JournalQuery {
            emotion: Some(Fear),
            ..Default::default()
        });
        assert_eq!(fear.len(), 2);

        let fear_exam = j.query(&JournalQuery {
            search: "exam".to_string(),
            emotion: Some(Fear),
            order: SortOrder::Oldest,
        });
        assert_eq!(descriptions(&fear_exam), vec!["Lost keys before an exam"]);

        let none = j.query(&JournalQuery {
            emotion: Some(Anger),
            ..Default::default()
        });
        assert!(none.is_empty());
    }

    #[test]
    fn test_get_by_id() {
        let j = journal();
        let id = j.iter().last().unwrap().id;
        assert_eq!(j.get(id).unwrap().description, "Swimming in a dark ocean");
        assert!(j.get(Uuid::new_v4()).is_none());
    }
}
