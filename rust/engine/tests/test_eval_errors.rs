use handscope_engine::cards::{Card, full_deck};
use handscope_engine::errors::EvalError;
use handscope_engine::hand::{best_hand, compare_card_sets};

fn parse(labels: &[&str]) -> Vec<Card> {
    labels.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn rejects_fewer_than_five_cards() {
    let cards = parse(&["A♠", "K♠", "Q♠", "J♠"]);
    assert_eq!(
        best_hand(&cards),
        Err(EvalError::InvalidHandSize { count: 4 })
    );
    assert_eq!(best_hand(&[]), Err(EvalError::InvalidHandSize { count: 0 }));
}

#[test]
fn rejects_more_than_seven_cards() {
    let deck = full_deck();
    assert_eq!(
        best_hand(&deck[..8]),
        Err(EvalError::InvalidHandSize { count: 8 })
    );
    assert_eq!(
        best_hand(&deck),
        Err(EvalError::InvalidHandSize { count: 52 })
    );
}

#[test]
fn rejects_duplicate_cards() {
    let cards = parse(&["A♠", "K♠", "Q♠", "J♠", "10♠", "A♠"]);
    let err = best_hand(&cards).unwrap_err();
    assert_eq!(err, EvalError::DuplicateCard { card: cards[0] });
    assert_eq!(err.to_string(), "Duplicate card: A♠");
}

#[test]
fn size_is_checked_before_duplicates() {
    let cards = parse(&["A♠", "A♠", "Q♠", "J♠"]);
    assert_eq!(
        best_hand(&cards),
        Err(EvalError::InvalidHandSize { count: 4 })
    );
}

#[test]
fn same_rank_different_suit_is_not_a_duplicate() {
    let cards = parse(&["A♠", "A♥", "A♦", "A♣", "K♠"]);
    assert!(best_hand(&cards).is_ok());
}

#[test]
fn comparison_propagates_errors() {
    let good = parse(&["A♠", "K♠", "Q♠", "J♠", "10♠"]);
    let short = parse(&["2♥", "3♥"]);
    assert_eq!(
        compare_card_sets(&good, &short),
        Err(EvalError::InvalidHandSize { count: 2 })
    );
    assert_eq!(
        compare_card_sets(&short, &good),
        Err(EvalError::InvalidHandSize { count: 2 })
    );
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(
        EvalError::InvalidHandSize { count: 3 }.to_string(),
        "Invalid hand size: 3 cards, expected 5 to 7"
    );
}
