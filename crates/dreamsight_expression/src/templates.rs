//! Fixed sentence pools the generator draws from.
//!
//! Every pool is non-empty; the generator picks one entry uniformly at random.

use crate::key::EmotionPair;
use dreamsight_core::{Emotion, Symbol};

// ============================================================================
// Interpretation pools
// ============================================================================

const HAPPINESS: &[&str] = &[
    "Your dream reflects a period of joy and fulfillment in your life.",
    "This positive dream suggests you feel optimistic about your current path.",
    "The happiness in your dream indicates satisfaction with recent developments.",
];

const FEAR: &[&str] = &[
    "This dream suggests you may be processing anxiety or concern about something in your waking life.",
    "Your subconscious might be working through fears or preparing you for challenges.",
    "The fearful elements of this dream could represent unaddressed worries.",
];

const SADNESS: &[&str] = &[
    "Your dream reflects emotional processing, perhaps of recent disappointments or losses.",
    "This dream suggests you may need time to acknowledge and work through certain emotions.",
    "The sadness in your dream might represent unresolved feelings seeking expression.",
];

const ANGER: &[&str] = &[
    "This dream suggests frustration or resentment that may need addressing.",
    "Your subconscious might be processing situations where you feel wronged or restricted.",
    "The anger in your dream could represent boundaries being crossed or needs not being met.",
];

const PEACE: &[&str] = &[
    "Your dream reflects a state of inner harmony and acceptance.",
    "This peaceful dream suggests you're finding balance or have resolved certain conflicts.",
    "The tranquility in your dream indicates a period of emotional stability.",
];

const CONFUSION: &[&str] = &[
    "This dream suggests you're processing uncertainty or complexity in your life.",
    "Your subconscious might be working through ambiguous situations or feelings.",
    "The confusion in your dream could represent the need for clarity in some aspect of your life.",
];

/// One pool per unordered pair of distinct emotions.
const PAIR_POOLS: &[(Emotion, Emotion, &[&str])] = &[
    (Emotion::Happiness, Emotion::Fear, &[
        "Your dream suggests mixed emotions - perhaps excitement about something new alongside anxiety about the unknown.",
        "This dream reflects a situation bringing both joy and apprehension.",
    ]),
    (Emotion::Happiness, Emotion::Sadness, &[
        "Your dream reflects bittersweetness, perhaps remembering good times during a difficult period.",
        "This dream suggests you may be experiencing both joy and loss simultaneously.",
    ]),
    (Emotion::Happiness, Emotion::Anger, &[
        "Your dream suggests a situation bringing satisfaction but also frustration about certain aspects.",
        "This dream reflects ambivalence - perhaps enjoyment of something while resenting restrictions.",
    ]),
    (Emotion::Happiness, Emotion::Peace, &[
        "Your dream reflects deep contentment and well-being.",
        "This dream suggests you're experiencing harmony between your desires and reality.",
    ]),
    (Emotion::Happiness, Emotion::Confusion, &[
        "Your dream suggests excitement about possibilities but uncertainty about direction.",
        "This dream reflects the sometimes disorienting nature of positive changes.",
    ]),
    (Emotion::Fear, Emotion::Sadness, &[
        "Your dream suggests anxiety about loss or anticipatory grief.",
        "This dream reflects deep vulnerability or concern about emotional pain.",
    ]),
    (Emotion::Fear, Emotion::Anger, &[
        "Your dream suggests feeling threatened and responding with defensive energy.",
        "This dream reflects a fight-or-flight response to perceived dangers.",
    ]),
    (Emotion::Fear, Emotion::Peace, &[
        "Your dream suggests finding calm amid anxiety, perhaps learning to accept uncertainty.",
        "This dream reflects the contrast between external concerns and inner resilience.",
    ]),
    (Emotion::Fear, Emotion::Confusion, &[
        "Your dream suggests disorientation in the face of threatening or unpredictable circumstances.",
        "This dream reflects feeling overwhelmed by complexity or uncertainty in a concerning situation.",
    ]),
    (Emotion::Sadness, Emotion::Anger, &[
        "Your dream suggests grief mixed with frustration, perhaps about circumstances beyond your control.",
        "This dream reflects the complex emotions that often accompany loss or disappointment.",
    ]),
    (Emotion::Sadness, Emotion::Peace, &[
        "Your dream suggests moving towards acceptance of difficult emotions or situations.",
        "This dream reflects finding tranquility even amid sorrow - a healing process.",
    ]),
    (Emotion::Sadness, Emotion::Confusion, &[
        "Your dream suggests struggling to make sense of emotional pain or loss.",
        "This dream reflects the disorienting nature of grief or disappointment.",
    ]),
    (Emotion::Anger, Emotion::Peace, &[
        "Your dream suggests moving from frustration towards resolution or acceptance.",
        "This dream reflects the contrast between external irritations and inner calm.",
    ]),
    (Emotion::Anger, Emotion::Confusion, &[
        "Your dream suggests frustration about unclear situations or mixed messages.",
        "This dream reflects feeling provoked but uncertain about the appropriate response.",
    ]),
    (Emotion::Peace, Emotion::Confusion, &[
        "Your dream suggests accepting uncertainty or finding calm amid complexity.",
        "This dream reflects the contrast between not knowing and being at peace with not knowing.",
    ]),
];

pub fn single_pool(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Happiness => HAPPINESS,
        Emotion::Fear => FEAR,
        Emotion::Sadness => SADNESS,
        Emotion::Anger => ANGER,
        Emotion::Peace => PEACE,
        Emotion::Confusion => CONFUSION,
    }
}

pub fn pair_pool(pair: EmotionPair) -> Option<&'static [&'static str]> {
    PAIR_POOLS
        .iter()
        .find(|(a, b, _)| EmotionPair::new(*a, *b) == Some(pair))
        .map(|(_, _, pool)| *pool)
}

// ============================================================================
// Symbol sentences & conclusions
// ============================================================================

pub const SYMBOL_PHRASINGS: usize = 3;

/// Render phrasing `variant` (taken modulo [`SYMBOL_PHRASINGS`]) for a symbol.
pub fn symbol_sentence(variant: usize, symbol: &Symbol) -> String {
    let name = symbol.name;
    let lower_name = name.to_lowercase();
    let meaning = symbol.meaning.to_lowercase();
    match variant % SYMBOL_PHRASINGS {
        0 => format!("The presence of {lower_name} in your dream may represent {meaning}."),
        1 => format!("{name} appearing in your dream often symbolizes {meaning}."),
        _ => format!(
            "Your dream features {lower_name}, which typically relates to {meaning} in dream symbolism."
        ),
    }
}

pub const CONCLUSIONS: &[&str] = &[
    "Consider how this dream might reflect your current life circumstances.",
    "Reflect on how these dream elements might connect to your waking experiences.",
    "Think about what aspects of this dream feel most significant to you personally.",
    "Pay attention to how this dream made you feel upon waking, as this can provide additional insight.",
];

// ============================================================================
// Reflection pools
// ============================================================================

pub fn reflection_pool(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Happiness => &[
            "Your dream reflects inner contentment and positive energy. Consider what brings you joy in waking life.",
            "This positive dream may indicate a period of fulfillment. Embrace these feelings and carry them forward.",
            "The happiness in your dream suggests you're in a good place emotionally or anticipating positive change.",
        ],
        Emotion::Fear => &[
            "This dream may be revealing anxieties that need addressing. What specifically triggered your fear?",
            "Fear in dreams often highlights areas where you feel vulnerable. Consider what you're avoiding in waking life.",
            "Your subconscious might be processing stress or preparing you for challenges ahead.",
        ],
        Emotion::Sadness => &[
            "The sadness in your dream may represent unprocessed grief or emotion that needs acknowledgment.",
            "Consider what losses or disappointments you might still be processing in your waking life.",
            "This dream could be offering you a safe space to experience emotions you might suppress when awake.",
        ],
        Emotion::Anger => &[
            "Your dream anger may point to frustrations or boundaries being crossed in your waking life.",
            "Consider what situations or relationships might be causing repressed frustration or resentment.",
            "This dream could be encouraging you to assert yourself more effectively in certain situations.",
        ],
        Emotion::Peace => &[
            "The peaceful elements in your dream suggest inner harmony and balance in your emotional life.",
            "This dream may be reflecting your desire for tranquility or appreciation of calm moments.",
            "Your subconscious may be showing you that you've resolved certain conflicts or found acceptance.",
        ],
        Emotion::Confusion => &[
            "The confusion in your dream might mirror uncertainty you're experiencing in waking life.",
            "Consider what decisions or situations currently feel unclear or overwhelming to you.",
            "This dream may be encouraging you to seek clarity or accept that some things remain unknowable for now.",
        ],
    }
}
