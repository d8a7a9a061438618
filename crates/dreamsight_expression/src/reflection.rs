use crate::interpretation::pick;
use crate::templates::reflection_pool;
use dreamsight_core::Emotion;
use rand::Rng;

/// One reflection sentence per emotion, in the order given.
///
/// Repeated emotions each get their own draw. No emotions yields `""`.
pub fn generate_reflection<R: Rng + ?Sized>(rng: &mut R, emotions: &[Emotion]) -> String {
    emotions
        .iter()
        .map(|emotion| pick(rng, reflection_pool(*emotion)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use Emotion::*;

    /// Split a reflection back into the pool sentences it was built from.
    fn decompose(mut text: &str, emotions: &[Emotion]) -> Option<Vec<&'static str>> {
        let mut used = Vec::new();
        for (i, emotion) in emotions.iter().enumerate() {
            let sentence = reflection_pool(*emotion)
                .iter()
                .find(|s| text.starts_with(*s))?;
            text = &text[sentence.len()..];
            if i + 1 < emotions.len() {
                text = text.strip_prefix(' ')?;
            }
            used.push(*sentence);
        }
        text.is_empty().then_some(used)
    }

    #[test]
    fn test_empty_emotions() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_reflection(&mut rng, &[]), "");
    }

    #[test]
    fn test_single_emotion_is_one_pool_sentence() {
        let mut rng = StdRng::seed_from_u64(2);
        let text = generate_reflection(&mut rng, &[Fear]);
        assert!(reflection_pool(Fear).contains(&text.as_str()));
    }

    #[test]
    fn test_preserves_input_order() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = generate_reflection(&mut rng, &[Peace, Happiness]);
        assert!(decompose(&text, &[Peace, Happiness]).is_some(), "{}", text);
    }

    #[test]
    fn test_duplicates_drawn_independently() {
        let mut rng = StdRng::seed_from_u64(4);
        let text = generate_reflection(&mut rng, &[Anger, Anger, Anger]);
        let parts = decompose(&text, &[Anger, Anger, Anger]).unwrap();
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn test_three_emotions() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let emotions = [Sadness, Confusion, Happiness];
            let text = generate_reflection(&mut rng, &emotions);
            assert_eq!(decompose(&text, &emotions).map(|p| p.len()), Some(3));
        }
    }
}
