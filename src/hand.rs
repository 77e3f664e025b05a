use crate::cards::{parse_cards, sort_descending, Card, Rank};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("card {0} is not in the hand")]
    MissingCard(Card),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// The cards a player holds.
///
/// ```
/// use landlord_rs::cards::{Card, Rank, Suit};
/// use landlord_rs::hand::Hand;
///
/// let mut hand: Hand = "3s 3h 9c BJ".parse().unwrap();
/// hand.remove_cards(&[Card::new(Rank::Three, Suit::Spades)]).unwrap();
/// assert_eq!(hand.len(), 3);
/// assert!(hand.contains_rank(Rank::BigJoker));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Add several cards at once, e.g. the kitty picked up by the landlord.
    pub fn extend<I>(&mut self, cards: I)
    where
        I: IntoIterator<Item = Card>,
    {
        self.cards.extend(cards);
    }

    /// Remove played cards. Either every card is present and all are removed, or the
    /// hand is left untouched.
    pub fn remove_cards(&mut self, played: &[Card]) -> Result<(), HandError> {
        let mut remaining = self.cards.clone();
        for card in played {
            let pos = remaining
                .iter()
                .position(|c| c == card)
                .ok_or(HandError::MissingCard(*card))?;
            remaining.remove(pos);
        }
        self.cards = remaining;
        Ok(())
    }

    /// Sort strongest card first.
    pub fn sort_descending(&mut self) {
        sort_descending(&mut self.cards);
    }

    pub fn contains_rank(&self, rank: Rank) -> bool {
        self.cards.iter().any(|c| c.rank() == rank)
    }

    pub fn cards_of_rank(&self, rank: Rank) -> Vec<Card> {
        self.cards.iter().copied().filter(|c| c.rank() == rank).collect()
    }
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_from_cards(cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn duplicates_are_rejected() {
        let c = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(Hand::try_from_cards(vec![c, c]), Err(HandError::DuplicateCards));
        assert!(matches!("As As".parse::<Hand>(), Err(HandError::DuplicateCards)));
    }

    #[test]
    fn parse_errors_are_reported() {
        assert!(matches!("As Zz".parse::<Hand>(), Err(HandError::CardParse(_))));
    }

    #[test]
    fn remove_cards_is_all_or_nothing() {
        let mut hand: Hand = "3s 4h 5c".parse().unwrap();
        let before = hand.clone();
        let missing = Card::new(Rank::King, Suit::Hearts);
        let err = hand.remove_cards(&[Card::new(Rank::Three, Suit::Spades), missing]);
        assert_eq!(err, Err(HandError::MissingCard(missing)));
        assert_eq!(hand, before);

        hand.remove_cards(&[Card::new(Rank::Four, Suit::Hearts)]).unwrap();
        assert_eq!(
            hand.as_slice(),
            &[Card::new(Rank::Three, Suit::Spades), Card::new(Rank::Five, Suit::Clubs)]
        );
    }

    #[test]
    fn removing_the_same_card_twice_fails() {
        let mut hand: Hand = "3s 4h".parse().unwrap();
        let three = Card::new(Rank::Three, Suit::Spades);
        assert_eq!(hand.remove_cards(&[three, three]), Err(HandError::MissingCard(three)));
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn sort_and_rank_queries() {
        let mut hand: Hand = "3s 2h 3h SJ".parse().unwrap();
        hand.sort_descending();
        assert_eq!(hand.as_slice()[0], Card::small_joker());
        assert_eq!(hand.as_slice()[3], Card::new(Rank::Three, Suit::Spades));
        assert!(hand.contains_rank(Rank::Two));
        assert!(!hand.contains_rank(Rank::Ace));
        assert_eq!(hand.cards_of_rank(Rank::Three).len(), 2);
    }

    #[test]
    fn extend_adds_kitty() {
        let mut hand = Hand::new();
        assert!(hand.is_empty());
        hand.add(Card::new(Rank::Nine, Suit::Clubs));
        hand.extend([Card::big_joker(), Card::small_joker()]);
        assert_eq!(hand.len(), 3);
    }
}
