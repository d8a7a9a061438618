use crate::emotion::Emotion;
use thiserror::Error;

/// Contract violations at the boundary between callers and the engine.
///
/// The engine itself is total; these errors only surface where untyped
/// input (labels typed by a user, raw slices) is turned into emotions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("invalid emotion '{0}' (expected one of: Happiness, Fear, Sadness, Anger, Peace, Confusion)")]
    InvalidEmotion(String),

    #[error("emotion {0} selected more than once")]
    DuplicateEmotion(Emotion),

    #[error("too many emotions: at most {max} may be selected, got {got}")]
    TooManyEmotions { max: usize, got: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_emotion_message_names_label() {
        let err = AnalysisError::InvalidEmotion("Joy".to_string());
        assert!(err.to_string().contains("'Joy'"));
    }

    #[test]
    fn test_too_many_message() {
        let err = AnalysisError::TooManyEmotions { max: 3, got: 4 };
        assert_eq!(
            err.to_string(),
            "too many emotions: at most 3 may be selected, got 4"
        );
    }
}
