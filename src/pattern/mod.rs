pub(crate) mod detector;
pub(crate) mod play_analysis;
pub(crate) mod rank_groups;
pub(crate) mod run_info;

use crate::cards::{Card, Rank};
use std::fmt;

/// Every shape a legal play can take. `None` marks an unrecognized set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PatternKind {
    None = 0,
    Single = 1,
    Pair = 2,
    Triple = 3,
    TripleWithSingle = 4,
    TripleWithPair = 5,
    Straight = 6,
    PairStraight = 7,
    TripleStraight = 8,
    TripleStraightWithSingles = 9,
    TripleStraightWithPairs = 10,
    FourWithTwoSingles = 11,
    FourWithTwoPairs = 12,
    Bomb = 13,
    Rocket = 14,
}

impl PatternKind {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            PatternKind::None => "none",
            PatternKind::Single => "single",
            PatternKind::Pair => "pair",
            PatternKind::Triple => "triple",
            PatternKind::TripleWithSingle => "triple with single",
            PatternKind::TripleWithPair => "triple with pair",
            PatternKind::Straight => "straight",
            PatternKind::PairStraight => "pair straight",
            PatternKind::TripleStraight => "triple straight",
            PatternKind::TripleStraightWithSingles => "triple straight with singles",
            PatternKind::TripleStraightWithPairs => "triple straight with pairs",
            PatternKind::FourWithTwoSingles => "four with two singles",
            PatternKind::FourWithTwoPairs => "four with two pairs",
            PatternKind::Bomb => "bomb",
            PatternKind::Rocket => "rocket",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Classification of a play: its kind, the rank it compares by and how many cards it spans.
///
/// `compare_rank` is the lowest rank of a run, the rank of the triple or four in
/// attachment shapes, and `None` only for an unrecognized play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    pub kind: PatternKind,
    pub compare_rank: Option<Rank>,
    pub card_count: usize,
}

impl Pattern {
    /// The descriptor of an empty or unrecognized play.
    pub const NONE: Pattern = Pattern { kind: PatternKind::None, compare_rank: None, card_count: 0 };

    pub const fn new(kind: PatternKind, compare_rank: Rank, card_count: usize) -> Self {
        Self { kind, compare_rank: Some(compare_rank), card_count }
    }

    pub fn is_none(&self) -> bool {
        self.kind == PatternKind::None
    }

    /// Whether this play legally beats `previous`. See [`beats`].
    pub fn beats(&self, previous: &Pattern) -> bool {
        beats(self, previous)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.compare_rank {
            Some(rank) => write!(f, "{} of {} ({} cards)", self.kind, rank, self.card_count),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Classify a set of cards into the single pattern it forms.
///
/// Input order does not matter. Shapes are tried in a fixed priority order and the
/// first match wins; anything unrecognized yields [`Pattern::NONE`].
///
/// ```
/// use landlord_rs::cards::{parse_cards, Rank};
/// use landlord_rs::pattern::{classify, PatternKind};
///
/// let play = classify(&parse_cards("7s 5h 6c 7d 5s 6h").unwrap());
/// assert_eq!(play.kind, PatternKind::PairStraight);
/// assert_eq!(play.compare_rank, Some(Rank::Five));
/// assert_eq!(play.card_count, 6);
///
/// assert!(classify(&parse_cards("3s 3h 3c 4d 5d").unwrap()).is_none());
/// ```
pub fn classify(cards: &[Card]) -> Pattern {
    use detector::DETECTORS;
    use play_analysis::PlayAnalysis;

    if cards.is_empty() {
        return Pattern::NONE;
    }

    // Build analysis once (sorted cards, ranks, rank groups)
    let analysis = PlayAnalysis::new(cards);

    let pattern = DETECTORS
        .iter()
        .find_map(|detector| {
            detector
                .detect(&analysis)
                .map(|rank| Pattern::new(detector.kind(), rank, analysis.len()))
        })
        .unwrap_or(Pattern::NONE);

    log::trace!("classified {} cards as {}", cards.len(), pattern);
    pattern
}

/// Decide whether `current` legally beats `previous`.
///
/// Resolution order: a rocket always wins and can never be beaten; a bomb beats every
/// other kind and lower bombs; otherwise kinds and card counts must match exactly and
/// the higher compare rank wins.
///
/// `current` must be a recognized play. Callers starting a fresh trick accept any
/// recognized play without consulting this function.
///
/// ```
/// use landlord_rs::cards::parse_cards;
/// use landlord_rs::pattern::{beats, classify};
///
/// let nines = classify(&parse_cards("9s 9h").unwrap());
/// let eights = classify(&parse_cards("8c 8d").unwrap());
/// let bomb = classify(&parse_cards("9c 9d 9s 9h").unwrap());
/// assert!(beats(&nines, &eights));
/// assert!(!beats(&nines, &bomb));
/// assert!(beats(&bomb, &nines));
/// ```
pub fn beats(current: &Pattern, previous: &Pattern) -> bool {
    debug_assert!(!current.is_none(), "an unrecognized play cannot beat anything");

    match (current.kind, previous.kind) {
        (PatternKind::None, _) => false,
        (PatternKind::Rocket, _) => true,
        (_, PatternKind::Rocket) => false,
        (PatternKind::Bomb, PatternKind::Bomb) => current.compare_rank > previous.compare_rank,
        (PatternKind::Bomb, _) => true,
        (_, PatternKind::Bomb) => false,
        (kind, previous_kind) => {
            kind == previous_kind
                && current.card_count == previous.card_count
                && current.compare_rank > previous.compare_rank
        }
    }
}
