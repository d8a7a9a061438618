use crate::emotion::{Emotion, EmotionSelection};
use crate::symbols::Symbol;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Generated reading of a single dream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DreamAnalysis {
    pub interpretation: String,
    pub symbols: Vec<Symbol>,
    pub reflection: String,
}

/// A saved dream. Entries are never edited once created.
#[derive(Debug, Clone, Serialize)]
pub struct DreamEntry {
    pub id: Uuid,
    pub description: String,
    pub emotions: Vec<Emotion>,
    pub created_at: DateTime<Utc>,
    pub is_shared: bool,
    pub analysis: Option<DreamAnalysis>,
}

impl DreamEntry {
    pub fn new(
        description: impl Into<String>,
        emotions: EmotionSelection,
        is_shared: bool,
        analysis: Option<DreamAnalysis>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            emotions: emotions.into_vec(),
            created_at: Utc::now(),
            is_shared,
            analysis,
        }
    }

    /// Same as [`DreamEntry::new`] with an explicit timestamp.
    pub fn at(
        description: impl Into<String>,
        emotions: EmotionSelection,
        is_shared: bool,
        analysis: Option<DreamAnalysis>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            created_at,
            ..Self::new(description, emotions, is_shared, analysis)
        }
    }

    pub fn has_emotion(&self, emotion: Emotion) -> bool {
        self.emotions.contains(&emotion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::SYMBOL_CATALOG;
    use chrono::TimeZone;

    fn selection(emotions: &[Emotion]) -> EmotionSelection {
        EmotionSelection::try_from_slice(emotions).unwrap()
    }

    #[test]
    fn test_new_entry_keeps_selection_order() {
        let entry = DreamEntry::new(
            "a quiet lake",
            selection(&[Emotion::Peace, Emotion::Happiness]),
            false,
            None,
        );
        assert_eq!(entry.emotions, vec![Emotion::Peace, Emotion::Happiness]);
        assert!(entry.has_emotion(Emotion::Peace));
        assert!(!entry.has_emotion(Emotion::Fear));
        assert!(!entry.is_shared);
    }

    #[test]
    fn test_entries_get_distinct_ids() {
        let a = DreamEntry::new("a", selection(&[Emotion::Fear]), false, None);
        let b = DreamEntry::new("a", selection(&[Emotion::Fear]), false, None);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_at_sets_timestamp() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap();
        let entry = DreamEntry::at("x", selection(&[Emotion::Anger]), true, None, ts);
        assert_eq!(entry.created_at, ts);
        assert!(entry.is_shared);
    }

    #[test]
    fn test_analysis_serializes_symbol_fields() {
        let analysis = DreamAnalysis {
            interpretation: "i".to_string(),
            symbols: vec![SYMBOL_CATALOG[0]],
            reflection: "r".to_string(),
        };
        let json = serde_json::to_value(&analysis).unwrap();
        assert_eq!(json["symbols"][0]["name"], "Water");
        assert_eq!(
            json["symbols"][0]["meaning"],
            "Emotions, unconscious mind, or purification"
        );
    }
}
