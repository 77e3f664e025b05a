use landlord_rs::cards::{parse_cards, Card};
use landlord_rs::deck::Deck;
use landlord_rs::hand::{Hand, HandError};
use landlord_rs::pattern::PatternKind;
use landlord_rs::play::{check_play, PlayError};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[test]
fn deal_covers_the_deck_without_duplicates() {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(99);
    let expected: HashSet<Card> = deck.as_slice().iter().copied().collect();

    let deal = deck.deal().unwrap();
    let mut seen: HashSet<Card> = HashSet::new();
    for hand in &deal.hands {
        assert_eq!(hand.len(), 17);
        for &c in hand.as_slice() {
            assert!(seen.insert(c), "duplicate {c}");
        }
    }
    for c in deal.kitty {
        assert!(seen.insert(c), "duplicate {c}");
    }
    assert_eq!(seen, expected);
}

#[test]
fn shuffle_with_external_rng_is_deterministic() {
    let mut a = Deck::standard();
    let mut b = Deck::standard();
    a.shuffle_with(&mut ChaCha8Rng::seed_from_u64(5));
    b.shuffle_with(&mut ChaCha8Rng::seed_from_u64(5));
    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn landlord_picks_up_the_kitty() {
    let mut deck = Deck::standard();
    deck.shuffle_seeded(3);
    let mut deal = deck.deal().unwrap();
    let kitty = deal.kitty;
    deal.hands[1].extend(kitty);
    assert_eq!(deal.hands[1].len(), 20);
    assert!(Hand::try_from_cards(deal.hands[1].as_slice().to_vec()).is_ok());
}

#[test]
fn a_short_trick() {
    let mut landlord: Hand = "3s 3h 3c 4d 9s 9h SJ BJ".parse().unwrap();
    let mut farmer: Hand = "5s 5h 5c 7d Ks Kh 6s 6h 6c 6d".parse().unwrap();

    // fresh trick: any recognized play leads
    let lead_cards = parse_cards("3s 3h 3c 4d").unwrap();
    let lead = check_play(&lead_cards, None).unwrap();
    landlord.remove_cards(lead.cards()).unwrap();
    assert_eq!(lead.pattern().kind, PatternKind::TripleWithSingle);

    // a pair cannot follow a triple with single
    let err = check_play(&parse_cards("Ks Kh").unwrap(), Some(&lead)).unwrap_err();
    assert!(matches!(err, PlayError::DoesNotBeat { .. }));

    let follow = check_play(&parse_cards("5s 5h 5c 7d").unwrap(), Some(&lead)).unwrap();
    farmer.remove_cards(follow.cards()).unwrap();

    // rocket answers anything
    let rocket = check_play(&parse_cards("SJ BJ").unwrap(), Some(&follow)).unwrap();
    landlord.remove_cards(rocket.cards()).unwrap();

    // nothing answers the rocket, not even a bomb
    let bomb = parse_cards("6s 6h 6c 6d").unwrap();
    assert!(check_play(&bomb, Some(&rocket)).is_err());
    assert!(check_play(&bomb, None).is_ok());

    assert_eq!(landlord.len(), 2);
    assert_eq!(farmer.len(), 6);
}

#[test]
fn cannot_play_cards_not_held() {
    let mut hand: Hand = "3s 4s".parse().unwrap();
    let play = check_play(&parse_cards("9s").unwrap(), None).unwrap();
    assert!(matches!(hand.remove_cards(play.cards()), Err(HandError::MissingCard(_))));
    assert_eq!(hand.len(), 2);
}
