//! # handscope-engine: Poker Hand Evaluator
//!
//! Finds the best five-card poker hand in a set of 5 to 7 cards, classifies it
//! into one of nine categories and produces a tie-break signature so that any
//! two hands can be ordered. Evaluation is pure: no state is kept between calls
//! and the input is never modified.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), label parsing and the full deck
//! - [`combos`] - Lexicographic index combinations used to enumerate subsets
//! - [`hand`] - Category detection, best-hand search and hand comparison
//! - [`errors`] - Error types for rejected inputs and bad card labels
//!
//! ## Quick Start
//!
//! ```rust
//! use handscope_engine::cards::{Card, Rank, Suit};
//! use handscope_engine::hand::{best_hand, Category};
//!
//! // Hole cards plus a five-card board
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Spades),
//!     Card::new(Rank::Five, Suit::Spades),
//!     Card::new(Rank::Nine, Suit::Spades),
//!     Card::new(Rank::Four, Suit::Hearts),
//!     Card::new(Rank::Seven, Suit::Diamonds),
//! ];
//!
//! let best = best_hand(&cards).unwrap();
//! assert_eq!(best.category, Category::Flush);
//! assert_eq!(best.tiebreak, vec![14, 13, 9, 5, 2]);
//! ```
//!
//! ## Comparing Hands
//!
//! ```rust
//! use handscope_engine::cards::Card;
//! use handscope_engine::hand::compare_card_sets;
//!
//! let parse = |labels: &[&str]| -> Vec<Card> {
//!     labels.iter().map(|s| s.parse().unwrap()).collect()
//! };
//! let two_pair_kings = parse(&["A♠", "A♥", "K♦", "K♣", "2♠"]);
//! let two_pair_queens = parse(&["A♦", "A♣", "Q♥", "Q♠", "J♦"]);
//!
//! assert!(compare_card_sets(&two_pair_kings, &two_pair_queens).unwrap().is_gt());
//! ```

pub mod cards;
pub mod combos;
pub mod errors;
pub mod hand;

pub use cards::{Card, Rank, Suit};
pub use errors::{EvalError, ParseCardError};
pub use hand::{best_hand, compare_hands, Category, HandResult};
