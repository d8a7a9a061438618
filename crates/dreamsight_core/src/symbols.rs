//! Static dream-symbol catalog and the keyword table that points into it.

use serde::Serialize;

/// A named dream motif with its conventional meaning.
///
/// Symbols are only ever constructed here, so every `Symbol` in circulation
/// is a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Symbol {
    pub name: &'static str,
    pub meaning: &'static str,
}

impl Symbol {
    const fn new(name: &'static str, meaning: &'static str) -> Self {
        Self { name, meaning }
    }
}

const WATER: Symbol = Symbol::new("Water", "Emotions, unconscious mind, or purification");
const FLYING: Symbol = Symbol::new(
    "Flying",
    "Freedom, escaping limitations, or transcending difficulties",
);
const FALLING: Symbol = Symbol::new("Falling", "Insecurity, anxiety, or loss of control");
const TEETH: Symbol = Symbol::new("Teeth", "Anxiety, self-image, or concern about appearance");
const DEATH: Symbol = Symbol::new("Death", "End of something, transformation, or rebirth");
const HOUSE: Symbol = Symbol::new(
    "House",
    "Sense of self, personality aspects, or life situation",
);
const ANIMALS: Symbol = Symbol::new(
    "Animals",
    "Instinctual nature, specific traits, or qualities",
);
const CHASE: Symbol = Symbol::new("Chase", "Avoiding an issue or person, anxiety, or fear");
const NAKED: Symbol = Symbol::new("Naked", "Vulnerability, exposure, or authenticity");
const FOREST: Symbol = Symbol::new(
    "Forest",
    "Unconscious mind, unknown territory, or life journey",
);
const MOUNTAIN: Symbol = Symbol::new(
    "Mountain",
    "Challenge, achievement, or obstacle to overcome",
);
const BRIDGE: Symbol = Symbol::new(
    "Bridge",
    "Transition, connection, or crossing into a new phase",
);
const DOOR: Symbol = Symbol::new(
    "Door",
    "Opportunity, transition, or access to new aspects of self",
);
const KEY: Symbol = Symbol::new("Key", "Access, solution, or unlocking hidden knowledge");
const CAR: Symbol = Symbol::new("Car", "Direction in life, personal journey, or control");
const BABY: Symbol = Symbol::new("Baby", "New beginning, vulnerability, or aspect of self");
const SCHOOL: Symbol = Symbol::new("School", "Learning, evaluation, or personal development");
const FOOD: Symbol = Symbol::new("Food", "Nourishment, knowledge, or fulfillment of needs");
const CLOCK: Symbol = Symbol::new("Clock", "Pressure, time awareness, or life transitions");
const MONEY: Symbol = Symbol::new("Money", "Self-worth, value, or energy exchange");

/// Every symbol the engine can ever report.
pub const SYMBOL_CATALOG: [Symbol; 20] = [
    WATER, FLYING, FALLING, TEETH, DEATH, HOUSE, ANIMALS, CHASE, NAKED, FOREST, MOUNTAIN, BRIDGE,
    DOOR, KEY, CAR, BABY, SCHOOL, FOOD, CLOCK, MONEY,
];

/// Literal keywords in match order, each mapped to the symbol it evokes.
///
/// Keywords are lower-case; matching is plain substring containment.
pub const KEYWORD_TABLE: &[(&str, Symbol)] = &[
    ("water", WATER),
    ("ocean", WATER),
    ("river", WATER),
    ("lake", WATER),
    ("rain", WATER),
    ("fly", FLYING),
    ("flying", FLYING),
    ("float", FLYING),
    ("soaring", FLYING),
    ("fall", FALLING),
    ("falling", FALLING),
    ("dropped", FALLING),
    ("teeth", TEETH),
    ("tooth", TEETH),
    ("bite", TEETH),
    ("chew", TEETH),
    ("die", DEATH),
    ("death", DEATH),
    ("dead", DEATH),
    ("dying", DEATH),
    ("house", HOUSE),
    ("home", HOUSE),
    ("building", HOUSE),
    ("room", HOUSE),
    ("animal", ANIMALS),
    ("dog", ANIMALS),
    ("cat", ANIMALS),
    ("bird", ANIMALS),
    ("snake", ANIMALS),
    ("wolf", ANIMALS),
    ("chase", CHASE),
    ("run", CHASE),
    ("escape", CHASE),
    ("pursue", CHASE),
    ("naked", NAKED),
    ("clothes", NAKED),
    ("undressed", NAKED),
    ("forest", FOREST),
    ("woods", FOREST),
    ("trees", FOREST),
    ("jungle", FOREST),
    ("mountain", MOUNTAIN),
    ("climb", MOUNTAIN),
    ("hill", MOUNTAIN),
    ("peak", MOUNTAIN),
    ("bridge", BRIDGE),
    ("crossing", BRIDGE),
    ("connect", BRIDGE),
    ("door", DOOR),
    ("gate", DOOR),
    ("entrance", DOOR),
    ("exit", DOOR),
    ("key", KEY),
    ("lock", KEY),
    ("unlock", KEY),
    ("car", CAR),
    ("vehicle", CAR),
    ("drive", CAR),
    ("road", CAR),
    ("baby", BABY),
    ("child", BABY),
    ("infant", BABY),
    ("school", SCHOOL),
    ("class", SCHOOL),
    ("test", SCHOOL),
    ("exam", SCHOOL),
    ("food", FOOD),
    ("eat", FOOD),
    ("meal", FOOD),
    ("hungry", FOOD),
    ("clock", CLOCK),
    ("time", CLOCK),
    ("watch", CLOCK),
    ("late", CLOCK),
    ("money", MONEY),
    ("wealth", MONEY),
    ("cash", MONEY),
    ("coin", MONEY),
];

/// Symbol evoked by an exact keyword, if it is one of ours.
pub fn symbol_for_keyword(keyword: &str) -> Option<Symbol> {
    KEYWORD_TABLE
        .iter()
        .find(|(k, _)| *k == keyword)
        .map(|(_, symbol)| *symbol)
}

/// Catalog entry by name (case-insensitive).
pub fn find_symbol(name: &str) -> Option<Symbol> {
    SYMBOL_CATALOG
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name.trim()))
        .copied()
}
