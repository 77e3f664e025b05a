use super::rank_groups::RankGroups;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a set of played cards.
/// Built once and shared by all shape detectors.
#[derive(Debug, Clone)]
pub struct PlayAnalysis {
    pub sorted_cards: Vec<Card>,
    /// Ranks of `sorted_cards`, ascending.
    pub ranks: Vec<Rank>,
    pub rank_groups: RankGroups,
}

impl PlayAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort();
        let ranks = sorted_cards.iter().map(|c| c.rank()).collect();
        let rank_groups = RankGroups::from_cards(&sorted_cards);
        Self { sorted_cards, ranks, rank_groups }
    }

    pub fn len(&self) -> usize {
        self.sorted_cards.len()
    }
}
