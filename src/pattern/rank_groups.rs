use crate::cards::{Card, Rank};
use std::collections::BTreeMap;

/// Groups ranks by their frequency in a play, in ascending rank order.
///
/// Example: 3334 groups as [(Three, 3), (Four, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts: BTreeMap<Rank, u8> = BTreeMap::new();
        for card in cards {
            *counts.entry(card.rank()).or_insert(0) += 1;
        }
        Self { groups: counts.into_iter().collect() }
    }

    /// Number of distinct ranks.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Rank, u8)> + '_ {
        self.groups.iter().copied()
    }

    /// All ranks appearing exactly `count` times, ascending.
    pub fn with_count(&self, count: u8) -> Vec<Rank> {
        self.groups.iter().filter(|(_, c)| *c == count).map(|(rank, _)| *rank).collect()
    }

    /// The lowest rank appearing exactly `count` times, if any.
    pub fn first_with_count(&self, count: u8) -> Option<Rank> {
        self.groups.iter().find(|(_, c)| *c == count).map(|(rank, _)| *rank)
    }
}
