use super::play_analysis::PlayAnalysis;
use super::run_info::RunInfo;
use super::PatternKind;
use crate::cards::Rank;

/// Strategy pattern: each shape detector recognizes one pattern kind and reports the
/// rank it compares by.
pub trait ShapeDetector {
    fn kind(&self) -> PatternKind;
    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank>;
}

// ============================================================================
// Detector Implementations (in priority order)
// ============================================================================

/// Single: any one card
pub struct SingleDetector;

impl ShapeDetector for SingleDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::Single
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        match analysis.ranks.as_slice() {
            [rank] => Some(*rank),
            _ => None,
        }
    }
}

/// Rocket: the small and big joker together
pub struct RocketDetector;

impl ShapeDetector for RocketDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::Rocket
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        match analysis.ranks.as_slice() {
            [Rank::SmallJoker, Rank::BigJoker] => Some(Rank::BigJoker),
            _ => None,
        }
    }
}

/// Pair: two cards of the same rank
pub struct PairDetector;

impl ShapeDetector for PairDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::Pair
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        match analysis.ranks.as_slice() {
            [a, b] if a == b => Some(*a),
            _ => None,
        }
    }
}

/// Triple: three cards of the same rank
pub struct TripleDetector;

impl ShapeDetector for TripleDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::Triple
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        if analysis.len() != 3 {
            return None;
        }
        analysis.rank_groups.first_with_count(3)
    }
}

/// Bomb: four cards of the same rank, nothing attached
pub struct BombDetector;

impl ShapeDetector for BombDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::Bomb
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        if analysis.len() != 4 {
            return None;
        }
        analysis.rank_groups.first_with_count(4)
    }
}

/// Triple with single: a triple plus one card of another rank
pub struct TripleWithSingleDetector;

impl ShapeDetector for TripleWithSingleDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::TripleWithSingle
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        if analysis.len() != 4 {
            return None;
        }
        analysis.rank_groups.first_with_count(3)
    }
}

/// Triple with pair: a triple plus a pair of another rank
pub struct TripleWithPairDetector;

impl ShapeDetector for TripleWithPairDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::TripleWithPair
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        if analysis.len() != 5 {
            return None;
        }
        let groups = &analysis.rank_groups;
        groups.first_with_count(2)?;
        groups.first_with_count(3)
    }
}

/// Straight: five or more consecutive single ranks below Two
pub struct StraightDetector;

impl ShapeDetector for StraightDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::Straight
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        RunInfo::detect(&analysis.ranks, 1).filter(|run| run.links >= 5).map(|run| run.lowest)
    }
}

/// Pair straight: three or more consecutive pairs below Two
pub struct PairStraightDetector;

impl ShapeDetector for PairStraightDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::PairStraight
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        RunInfo::detect(&analysis.ranks, 2).filter(|run| run.links >= 3).map(|run| run.lowest)
    }
}

/// Triple straight: two or more consecutive triples below Two
pub struct TripleStraightDetector;

impl ShapeDetector for TripleStraightDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::TripleStraight
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        RunInfo::detect(&analysis.ranks, 3).filter(|run| run.links >= 2).map(|run| run.lowest)
    }
}

/// Four with two singles: four of a kind plus two more cards (two singles or one pair)
pub struct FourWithTwoSinglesDetector;

impl ShapeDetector for FourWithTwoSinglesDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::FourWithTwoSingles
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        if analysis.len() != 6 {
            return None;
        }
        let four = analysis.rank_groups.first_with_count(4)?;
        let attached: usize = analysis
            .rank_groups
            .iter()
            .filter(|(rank, _)| *rank != four)
            .map(|(_, count)| usize::from(count))
            .sum();
        (attached == 2).then_some(four)
    }
}

/// Four with two pairs: four of a kind plus exactly two pairs
pub struct FourWithTwoPairsDetector;

impl ShapeDetector for FourWithTwoPairsDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::FourWithTwoPairs
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        if analysis.len() != 8 {
            return None;
        }
        let groups = &analysis.rank_groups;
        let fours = groups.with_count(4);
        let pairs = groups.with_count(2);
        match (fours.as_slice(), pairs.len(), groups.len()) {
            ([four], 2, 3) => Some(*four),
            _ => None,
        }
    }
}

/// Consecutive triples (below Two) each carrying one attachment group of size
/// `attachment`; every other group shape disqualifies the play.
fn triple_run_with(analysis: &PlayAnalysis, attachment: u8) -> Option<Rank> {
    let mut triples = Vec::new();
    let mut attached = 0usize;
    for (rank, count) in analysis.rank_groups.iter() {
        if count == 3 && rank.is_chainable() {
            triples.push(rank);
        } else if count == attachment {
            attached += 1;
        } else {
            return None;
        }
    }
    if triples.len() < 2 || attached != triples.len() {
        return None;
    }
    RunInfo::from_links(&triples).map(|run| run.lowest)
}

/// Triple straight with singles: n consecutive triples plus n singles of distinct ranks
pub struct TripleStraightWithSinglesDetector;

impl ShapeDetector for TripleStraightWithSinglesDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::TripleStraightWithSingles
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        triple_run_with(analysis, 1)
    }
}

/// Triple straight with pairs: n consecutive triples plus n pairs
pub struct TripleStraightWithPairsDetector;

impl ShapeDetector for TripleStraightWithPairsDetector {
    fn kind(&self) -> PatternKind {
        PatternKind::TripleStraightWithPairs
    }

    fn detect(&self, analysis: &PlayAnalysis) -> Option<Rank> {
        triple_run_with(analysis, 2)
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn ShapeDetector; 14] = [
    &SingleDetector,
    &RocketDetector,
    &PairDetector,
    &TripleDetector,
    &BombDetector,
    &TripleWithSingleDetector,
    &TripleWithPairDetector,
    &StraightDetector,
    &PairStraightDetector,
    &TripleStraightDetector,
    &FourWithTwoSinglesDetector,
    &FourWithTwoPairsDetector,
    &TripleStraightWithSinglesDetector,
    &TripleStraightWithPairsDetector,
];
