//! Parsing of card lists given on the command line.
//!
//! Card lists accept labels separated by whitespace and/or commas, so
//! `"A♠ K♠"`, `"As,Ks"` and `"As, Ks"` are equivalent. Repeated cards are left
//! in place: the evaluator reports them as duplicates.

use handscope_engine::cards::Card;
use handscope_engine::errors::ParseCardError;

/// Parse a single card list string.
///
/// # Example
///
/// ```rust
/// # use handscope_cli::validation::parse_card_list;
/// let cards = parse_card_list("As, 10h Qd").unwrap();
/// assert_eq!(cards.len(), 3);
/// assert_eq!(cards[1].to_string(), "10♥");
/// ```
pub fn parse_card_list(input: &str) -> Result<Vec<Card>, ParseCardError> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|label| !label.is_empty())
        .map(str::parse)
        .collect()
}

/// Parse several card list arguments and concatenate them in order.
pub fn parse_card_args<S: AsRef<str>>(args: &[S]) -> Result<Vec<Card>, ParseCardError> {
    let mut cards = Vec::new();
    for arg in args {
        cards.extend(parse_card_list(arg.as_ref())?);
    }
    Ok(cards)
}
