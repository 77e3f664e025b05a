use landlord_rs::cards::{Card, Rank, Suit};
use landlord_rs::deck::Deck;
use landlord_rs::pattern::{beats, classify, PatternKind};
use proptest::prelude::*;

fn any_rank() -> impl Strategy<Value = Rank> {
    prop::sample::select(Rank::ORDINARY.to_vec())
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ORDINARY.to_vec())
}

fn any_card() -> impl Strategy<Value = Card> {
    prop_oneof![
        12 => (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s)),
        1 => Just(Card::small_joker()),
        1 => Just(Card::big_joker()),
    ]
}

/// A set of distinct cards drawn from one deck, as a legal deal could produce.
fn any_play() -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(Deck::standard().as_slice().to_vec(), 1..=12)
}

/// Index of a rank within the chainable range Three..=Ace.
fn chainable(i: usize) -> Rank {
    Rank::ORDINARY[i]
}

fn bomb(rank: Rank) -> Vec<Card> {
    Suit::ORDINARY.iter().map(|&s| Card::new(rank, s)).collect()
}

fn straight(low: usize, len: usize) -> Vec<Card> {
    (low..low + len).map(|i| Card::new(chainable(i), Suit::ORDINARY[i % 4])).collect()
}

const RUN_KINDS: [PatternKind; 3] =
    [PatternKind::Straight, PatternKind::PairStraight, PatternKind::TripleStraight];

proptest! {
    #[test]
    fn any_single_card_is_a_single(card in any_card()) {
        let p = classify(&[card]);
        prop_assert_eq!(p.kind, PatternKind::Single);
        prop_assert_eq!(p.compare_rank, Some(card.rank()));
        prop_assert_eq!(p.card_count, 1);
    }

    #[test]
    fn only_the_two_jokers_form_a_rocket(a in any_card(), b in any_card()) {
        let p = classify(&[a, b]);
        let jokers = [a.rank(), b.rank()].contains(&Rank::SmallJoker)
            && [a.rank(), b.rank()].contains(&Rank::BigJoker);
        prop_assert_eq!(p.kind == PatternKind::Rocket, jokers);
    }

    #[test]
    fn classification_ignores_input_order(cards in any_play().prop_shuffle()) {
        let mut reversed = cards.clone();
        reversed.reverse();
        let mut sorted = cards.clone();
        sorted.sort();
        prop_assert_eq!(classify(&cards), classify(&reversed));
        prop_assert_eq!(classify(&cards), classify(&sorted));
    }

    #[test]
    fn recognized_plays_count_every_card(cards in any_play()) {
        let p = classify(&cards);
        if !p.is_none() {
            prop_assert_eq!(p.card_count, cards.len());
            prop_assert!(p.compare_rank.is_some());
        }
    }

    #[test]
    fn rocket_beats_and_is_never_beaten(cards in any_play()) {
        let rocket = classify(&[Card::small_joker(), Card::big_joker()]);
        let other = classify(&cards);
        prop_assume!(!other.is_none());
        prop_assert!(beats(&rocket, &other));
        if other.kind != PatternKind::Rocket {
            prop_assert!(!beats(&other, &rocket));
        }
    }

    #[test]
    fn bombs_order_by_rank(a in any_rank(), b in any_rank()) {
        prop_assume!(a != b);
        let pa = classify(&bomb(a));
        let pb = classify(&bomb(b));
        prop_assert_eq!(pa.kind, PatternKind::Bomb);
        prop_assert_eq!(beats(&pa, &pb), a > b);
    }

    #[test]
    fn adjacent_straights_order_by_low_rank(low in 0usize..7, len in 5usize..=7) {
        prop_assume!(low + 1 + len <= 12);
        let lo = classify(&straight(low, len));
        let hi = classify(&straight(low + 1, len));
        prop_assert_eq!(lo.kind, PatternKind::Straight);
        prop_assert!(beats(&hi, &lo));
        prop_assert!(!beats(&lo, &hi));
    }

    #[test]
    fn straights_of_different_length_never_beat(a in 0usize..3, b in 0usize..3, la in 5usize..=9, lb in 5usize..=9) {
        prop_assume!(la != lb);
        let pa = classify(&straight(a, la));
        let pb = classify(&straight(b, lb));
        prop_assert!(!beats(&pa, &pb));
        prop_assert!(!beats(&pb, &pa));
    }

    #[test]
    fn twos_and_jokers_never_appear_in_runs(cards in any_play()) {
        let p = classify(&cards);
        if RUN_KINDS.contains(&p.kind) {
            prop_assert!(cards.iter().all(|c| c.rank().is_chainable()));
        }
    }

    #[test]
    fn runs_fail_once_a_two_or_joker_joins(low in 0usize..8, len in 4usize..=11, extra in prop::sample::select(vec![Card::new(Rank::Two, Suit::Spades), Card::small_joker(), Card::big_joker()])) {
        prop_assume!(low + len <= 12);
        let mut cards = straight(low, len);
        cards.push(extra);
        prop_assert_ne!(classify(&cards).kind, PatternKind::Straight);
    }
}
