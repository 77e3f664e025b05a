//! landlord-rs: rule engine for the three-player landlord (Dou Dizhu) card game
//!
//! Goals:
//! - Classify any set of cards into the one legal pattern it forms (or none)
//! - Decide whether one classified play legally beats another
//! - Pure, deterministic functions; no panics for invalid input
//!
//! ## Quick start: classify and compare plays
//! ```
//! use landlord_rs::cards::{parse_cards, Rank};
//! use landlord_rs::pattern::{beats, classify, PatternKind};
//!
//! let previous = classify(&parse_cards("3s 3h 3c 4d").unwrap());
//! assert_eq!(previous.kind, PatternKind::TripleWithSingle);
//! assert_eq!(previous.compare_rank, Some(Rank::Three));
//!
//! let current = classify(&parse_cards("9s 9h 9d 5c").unwrap());
//! assert!(beats(&current, &previous));
//!
//! let rocket = classify(&parse_cards("SJ BJ").unwrap());
//! assert!(beats(&rocket, &current));
//! ```
//!
//! ## Dealing
//! ```
//! use landlord_rs::deck::Deck;
//!
//! let mut deck = Deck::standard();
//! deck.shuffle_seeded(2024);
//! let deal = deck.deal().unwrap();
//! assert_eq!(deal.hands[0].len(), 17);
//! ```

pub mod cards;
pub mod deck;
pub mod hand;
pub mod pattern;
pub mod play;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
