//! Card and hand formatters for terminal display.
//!
//! Pure functions rendering cards and evaluation results. Suits are shown as
//! Unicode symbols (♥ ♦ ♣ ♠) or, with `unicode = false` in the configuration,
//! as ASCII letters (h d c s).
//!
//! ## Example
//!
//! ```rust
//! use handscope_engine::cards::{Card, Rank, Suit};
//! use handscope_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert_eq!(format_card(&ace_spades, true), "A♠");
//! assert_eq!(format_card(&ace_spades, false), "As");
//! assert_eq!(format_cards(&[ace_spades], true), "[A♠]");
//! ```

use handscope_engine::cards::{Card, Suit};
use handscope_engine::hand::HandResult;

/// Format a Suit as a symbol, or as a lowercase letter when `unicode` is off.
pub fn format_suit(suit: &Suit, unicode: bool) -> String {
    if unicode {
        suit.symbol().to_string()
    } else {
        suit.letter().to_string()
    }
}

/// Format a Card as rank label plus suit, e.g. "10♥" or "10h".
pub fn format_card(card: &Card, unicode: bool) -> String {
    format!("{}{}", card.rank.label(), format_suit(&card.suit, unicode))
}

/// Format cards in bracket notation, e.g. "[A♠ K♥ Q♦]", or "[]" if empty.
pub fn format_cards(cards: &[Card], unicode: bool) -> String {
    let formatted: Vec<String> = cards.iter().map(|c| format_card(c, unicode)).collect();
    format!("[{}]", formatted.join(" "))
}

pub fn format_tiebreak(tiebreak: &[u8]) -> String {
    tiebreak
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// One-line summary of a hand: category name followed by its five cards.
pub fn format_result(result: &HandResult, unicode: bool) -> String {
    format!("{} {}", result.name, format_cards(&result.cards, unicode))
}
