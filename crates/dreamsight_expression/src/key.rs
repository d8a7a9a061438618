//! Normalized emotion keys used to pick an interpretation pool.

use dreamsight_core::Emotion;
use std::cmp::Ordering;
use std::fmt;

/// Two distinct emotions in canonical (name-sorted) order.
///
/// `EmotionPair::new(Fear, Anger)` and `EmotionPair::new(Anger, Fear)` are
/// equal and display as `Anger,Fear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmotionPair {
    first: Emotion,
    second: Emotion,
}

impl EmotionPair {
    /// `None` when both emotions are the same.
    pub fn new(a: Emotion, b: Emotion) -> Option<Self> {
        match a.name().cmp(b.name()) {
            Ordering::Less => Some(Self { first: a, second: b }),
            Ordering::Greater => Some(Self { first: b, second: a }),
            Ordering::Equal => None,
        }
    }

    pub fn first(&self) -> Emotion {
        self.first
    }

    pub fn second(&self) -> Emotion {
        self.second
    }
}

impl fmt::Display for EmotionPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.first, self.second)
    }
}

/// Which interpretation pool a list of emotions resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionKey {
    /// No emotion given; interpreted with the Confusion pool.
    Unspecified,
    Single(Emotion),
    Pair(EmotionPair),
}

impl EmotionKey {
    /// Resolve a selection to its key.
    ///
    /// With more than two emotions only the first two, in selection order,
    /// take part. Repeated emotions collapse onto the first one.
    pub fn resolve(emotions: &[Emotion]) -> Self {
        match emotions {
            [] => EmotionKey::Unspecified,
            [only] => EmotionKey::Single(*only),
            [a, b, ..] => match EmotionPair::new(*a, *b) {
                Some(pair) => EmotionKey::Pair(pair),
                None => EmotionKey::Single(*a),
            },
        }
    }
}

impl fmt::Display for EmotionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmotionKey::Unspecified => f.write_str("Unspecified"),
            EmotionKey::Single(e) => write!(f, "{}", e),
            EmotionKey::Pair(p) => write!(f, "{}", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Emotion::*;

    #[test]
    fn test_pair_is_order_independent() {
        let a = EmotionPair::new(Anger, Fear).unwrap();
        let b = EmotionPair::new(Fear, Anger).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "Anger,Fear");
        assert_eq!(a.first(), Anger);
        assert_eq!(a.second(), Fear);
    }

    #[test]
    fn test_pair_rejects_identical() {
        assert!(EmotionPair::new(Peace, Peace).is_none());
    }

    #[test]
    fn test_pair_sorts_by_name() {
        assert_eq!(
            EmotionPair::new(Peace, Happiness).unwrap().to_string(),
            "Happiness,Peace"
        );
        assert_eq!(
            EmotionPair::new(Sadness, Confusion).unwrap().to_string(),
            "Confusion,Sadness"
        );
    }

    #[test]
    fn test_resolve_cascade() {
        assert_eq!(EmotionKey::resolve(&[]), EmotionKey::Unspecified);
        assert_eq!(EmotionKey::resolve(&[Fear]), EmotionKey::Single(Fear));
        assert_eq!(
            EmotionKey::resolve(&[Fear, Anger]),
            EmotionKey::Pair(EmotionPair::new(Anger, Fear).unwrap())
        );
        assert_eq!(EmotionKey::resolve(&[Fear, Fear]), EmotionKey::Single(Fear));
    }

    #[test]
    fn test_resolve_three_uses_first_two_in_selection_order() {
        // Sorting all three first would pick Anger,Happiness instead
        let key = EmotionKey::resolve(&[Sadness, Peace, Anger]);
        assert_eq!(key.to_string(), "Peace,Sadness");

        let key = EmotionKey::resolve(&[Confusion, Confusion, Fear]);
        assert_eq!(key, EmotionKey::Single(Confusion));
    }
}
