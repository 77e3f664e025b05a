use crate::cards::Card;
use crate::pattern::{classify, Pattern};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayError {
    #[error("no cards selected")]
    Empty,
    #[error("{0} cards do not form a recognized pattern")]
    Unrecognized(usize),
    #[error("{current} does not beat {previous}")]
    DoesNotBeat { current: Pattern, previous: Pattern },
}

/// A recognized play: the cards put down together with their classification.
///
/// ```
/// use landlord_rs::cards::parse_cards;
/// use landlord_rs::pattern::PatternKind;
/// use landlord_rs::play::Play;
///
/// let play = Play::try_new(parse_cards("Qs Qh Qc 4d").unwrap()).unwrap();
/// assert_eq!(play.pattern().kind, PatternKind::TripleWithSingle);
/// assert_eq!(play.cards().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Play {
    cards: Vec<Card>,
    pattern: Pattern,
}

impl Play {
    pub fn try_new(cards: Vec<Card>) -> Result<Self, PlayError> {
        if cards.is_empty() {
            return Err(PlayError::Empty);
        }
        let pattern = classify(&cards);
        if pattern.is_none() {
            return Err(PlayError::Unrecognized(cards.len()));
        }
        Ok(Self { cards, pattern })
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn beats(&self, previous: &Play) -> bool {
        self.pattern.beats(&previous.pattern)
    }
}

/// Validate `cards` as the next play of a trick.
///
/// With no `previous` play the trick is fresh and any recognized pattern is accepted;
/// otherwise the new play must beat the previous one.
///
/// ```
/// use landlord_rs::cards::parse_cards;
/// use landlord_rs::play::{check_play, PlayError};
///
/// let lead = check_play(&parse_cards("8c 8d").unwrap(), None).unwrap();
/// assert!(check_play(&parse_cards("9s 9h").unwrap(), Some(&lead)).is_ok());
/// assert!(matches!(
///     check_play(&parse_cards("7s 7h").unwrap(), Some(&lead)),
///     Err(PlayError::DoesNotBeat { .. })
/// ));
/// ```
pub fn check_play(cards: &[Card], previous: Option<&Play>) -> Result<Play, PlayError> {
    let play = Play::try_new(cards.to_vec()).map_err(|err| {
        log::debug!("rejected play of {} cards: {}", cards.len(), err);
        err
    })?;
    match previous {
        Some(previous) if !play.beats(previous) => {
            let err =
                PlayError::DoesNotBeat { current: play.pattern, previous: previous.pattern };
            log::debug!("rejected play: {}", err);
            Err(err)
        }
        _ => Ok(play),
    }
}
