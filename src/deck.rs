use crate::cards::{Card, Rank, Suit};
use crate::hand::Hand;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Cards in a full deck: 13 ranks in four suits plus both jokers.
pub const DECK_SIZE: usize = 54;
pub const PLAYERS: usize = 3;
/// Cards set aside for the landlord.
pub const KITTY_SIZE: usize = 3;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DealError {
    #[error("a deal needs 54 cards, the deck has {0}")]
    WrongSize(usize),
}

/// Result of dealing a full deck: three 17-card hands and the kitty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deal {
    pub hands: [Hand; PLAYERS],
    pub kitty: [Card; KITTY_SIZE],
}

/// A standard 54-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use landlord_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 54);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &s in &Suit::ORDINARY {
            for &r in &Rank::ORDINARY {
                cards.push(Card::new(r, s));
            }
        }
        cards.push(Card::small_joker());
        cards.push(Card::big_joker());
        Self { cards }
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

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Shuffle using the provided RNG implementing Rng.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Draw `n` cards from the top of the deck.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).filter_map(|_| self.draw()).collect()
    }

    /// Deal the whole deck in order: card `i` of the first 51 goes to player `i % 3`,
    /// the last three become the kitty.
    ///
    /// ```
    /// use landlord_rs::deck::Deck;
    ///
    /// let mut deck = Deck::standard();
    /// deck.shuffle_seeded(7);
    /// let deal = deck.deal().unwrap();
    /// assert!(deal.hands.iter().all(|h| h.len() == 17));
    /// assert_eq!(deal.kitty.len(), 3);
    /// ```
    pub fn deal(self) -> Result<Deal, DealError> {
        let total = self.cards.len();
        if total != DECK_SIZE {
            return Err(DealError::WrongSize(total));
        }
        let (dealt, rest) = self.cards.split_at(DECK_SIZE - KITTY_SIZE);
        let mut hands: [Hand; PLAYERS] = Default::default();
        for (i, &card) in dealt.iter().enumerate() {
            hands[i % PLAYERS].add(card);
        }
        let kitty: [Card; KITTY_SIZE] =
            rest.try_into().map_err(|_| DealError::WrongSize(total))?;
        log::debug!("dealt {} cards to {} players, kitty {:?}", dealt.len(), PLAYERS, kitty);
        Ok(Deal { hands, kitty })
    }
}
