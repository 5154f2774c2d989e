use handscope_engine::cards::Card;
use handscope_engine::hand::best_hand;
use serde_json::json;

#[test]
fn hand_result_serializes_display_contract() {
    let cards: Vec<Card> = ["A♠", "K♠", "2♠", "5♠", "9♠", "4♥", "7♦"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let best = best_hand(&cards).unwrap();
    let v = serde_json::to_value(&best).unwrap();

    assert_eq!(v["category"], "Flush");
    assert_eq!(v["name"], "Flush");
    assert_eq!(v["tiebreak"], json!([14, 13, 9, 5, 2]));
    assert_eq!(v["cards"].as_array().map(Vec::len), Some(5));
    assert_eq!(v["cards"][0], json!({"rank": "Ace", "suit": "Spades"}));
}

#[test]
fn multi_word_category_names() {
    let cards: Vec<Card> = ["9♣", "9♦", "9♥", "4♠", "4♣"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    let best = best_hand(&cards).unwrap();
    let v = serde_json::to_value(&best).unwrap();
    assert_eq!(v["category"], "FullHouse");
    assert_eq!(v["name"], "Full House");
}
