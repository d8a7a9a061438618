//! The closed set of emotions a dreamer can tag an entry with.

use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Upper bound on how many emotions a single entry may carry.
pub const MAX_EMOTIONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Happiness,
    Fear,
    Sadness,
    Anger,
    Peace,
    Confusion,
}

impl Emotion {
    /// All emotions in the order the picker presents them.
    pub const ALL: [Emotion; 6] = [
        Emotion::Happiness,
        Emotion::Fear,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Peace,
        Emotion::Confusion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Emotion::Happiness => "Happiness",
            Emotion::Fear => "Fear",
            Emotion::Sadness => "Sadness",
            Emotion::Anger => "Anger",
            Emotion::Peace => "Peace",
            Emotion::Confusion => "Confusion",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Emotion {
    type Err = AnalysisError;

    /// Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Emotion::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(label))
            .ok_or_else(|| AnalysisError::InvalidEmotion(label.to_string()))
    }
}

/// Parse a list of user-supplied labels, rejecting the first unknown one.
pub fn parse_emotions<S: AsRef<str>>(labels: &[S]) -> Result<Vec<Emotion>, AnalysisError> {
    labels.iter().map(|l| l.as_ref().parse()).collect()
}

/// An ordered set of at most [`MAX_EMOTIONS`] distinct emotions.
///
/// Selection order is preserved: it drives which pair of emotions the
/// interpretation is keyed on when three are chosen, and the order of the
/// reflection sentences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmotionSelection {
    emotions: Vec<Emotion>,
}

impl EmotionSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_from_slice(emotions: &[Emotion]) -> Result<Self, AnalysisError> {
        if emotions.len() > MAX_EMOTIONS {
            return Err(AnalysisError::TooManyEmotions {
                max: MAX_EMOTIONS,
                got: emotions.len(),
            });
        }
        let mut selection = Self::new();
        for &emotion in emotions {
            if selection.contains(emotion) {
                return Err(AnalysisError::DuplicateEmotion(emotion));
            }
            selection.emotions.push(emotion);
        }
        Ok(selection)
    }

    /// Deselect if already chosen, otherwise append while there is room.
    ///
    /// Returns whether the emotion is selected afterwards. Toggling on a
    /// full selection is a no-op.
    pub fn toggle(&mut self, emotion: Emotion) -> bool {
        if let Some(pos) = self.emotions.iter().position(|e| *e == emotion) {
            self.emotions.remove(pos);
            false
        } else if self.emotions.len() < MAX_EMOTIONS {
            self.emotions.push(emotion);
            true
        } else {
            false
        }
    }

    pub fn contains(&self, emotion: Emotion) -> bool {
        self.emotions.contains(&emotion)
    }

    pub fn as_slice(&self) -> &[Emotion] {
        &self.emotions
    }

    pub fn len(&self) -> usize {
        self.emotions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotions.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.emotions.len() >= MAX_EMOTIONS
    }

    pub fn into_vec(self) -> Vec<Emotion> {
        self.emotions
    }
}

impl fmt::Display for EmotionSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.emotions.is_empty() {
            return f.write_str("(none)");
        }
        let names: Vec<&str> = self.emotions.iter().map(Emotion::name).collect();
        f.write_str(&names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("fear".parse::<Emotion>().unwrap(), Emotion::Fear);
        assert_eq!("  PEACE ".parse::<Emotion>().unwrap(), Emotion::Peace);
        assert_eq!("Confusion".parse::<Emotion>().unwrap(), Emotion::Confusion);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Joy".parse::<Emotion>().unwrap_err();
        assert_eq!(err, AnalysisError::InvalidEmotion("Joy".to_string()));
    }

    #[test]
    fn test_parse_emotions_stops_at_first_invalid() {
        let err = parse_emotions(&["anger", "boredom", "nope"]).unwrap_err();
        assert_eq!(err, AnalysisError::InvalidEmotion("boredom".to_string()));
        assert_eq!(
            parse_emotions(&["anger", "fear"]).unwrap(),
            vec![Emotion::Anger, Emotion::Fear]
        );
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for e in Emotion::ALL {
            assert_eq!(e.to_string().parse::<Emotion>().unwrap(), e);
        }
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let mut sel = EmotionSelection::new();
        assert!(sel.toggle(Emotion::Fear));
        assert!(sel.toggle(Emotion::Peace));
        assert_eq!(sel.as_slice(), &[Emotion::Fear, Emotion::Peace]);
        assert!(!sel.toggle(Emotion::Fear));
        assert_eq!(sel.as_slice(), &[Emotion::Peace]);
    }

    #[test]
    fn test_toggle_ignores_fourth_emotion() {
        let mut sel = EmotionSelection::new();
        sel.toggle(Emotion::Fear);
        sel.toggle(Emotion::Anger);
        sel.toggle(Emotion::Sadness);
        assert!(sel.is_full());
        assert!(!sel.toggle(Emotion::Happiness));
        assert_eq!(
            sel.as_slice(),
            &[Emotion::Fear, Emotion::Anger, Emotion::Sadness]
        );
    }

    #[test]
    fn test_try_from_slice_rejects_duplicates_and_overflow() {
        assert_eq!(
            EmotionSelection::try_from_slice(&[Emotion::Fear, Emotion::Fear]),
            Err(AnalysisError::DuplicateEmotion(Emotion::Fear))
        );
        assert_eq!(
            EmotionSelection::try_from_slice(&[
                Emotion::Fear,
                Emotion::Anger,
                Emotion::Peace,
                Emotion::Sadness,
            ]),
            Err(AnalysisError::TooManyEmotions { max: 3, got: 4 })
        );
        let sel = EmotionSelection::try_from_slice(&[Emotion::Peace, Emotion::Happiness]).unwrap();
        assert_eq!(sel.to_string(), "Peace, Happiness");
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&Emotion::Happiness).unwrap();
        assert_eq!(json, "\"Happiness\"");
        let back: Emotion = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Emotion::Happiness);
    }
}
