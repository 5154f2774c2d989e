use std::cmp::Ordering;
use std::fmt;

use serde::Serialize;
use tracing::{debug, trace};

use crate::cards::{Card, Rank};
use crate::combos::Combinations;
use crate::errors::EvalError;

/// Number of cards in an evaluated poker hand.
pub const HAND_SIZE: usize = 5;
/// Largest card set accepted by [`best_hand`].
pub const MAX_CARDS: usize = 7;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Weakest to strongest.
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// Comparison rank of the category, 0 (high card) to 8 (straight flush).
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Human-readable label for display.
    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The best five-card hand found for a card set.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct HandResult {
    pub category: Category,
    /// The five cards of the hand, rank-major as grouped during classification.
    pub cards: [Card; HAND_SIZE],
    /// Tie-break signature within the category, compared left to right.
    pub tiebreak: Vec<u8>,
    pub name: &'static str,
}

impl HandResult {
    fn new(category: Category, cards: [Card; HAND_SIZE], tiebreak: Vec<u8>) -> Self {
        Self {
            category,
            cards,
            tiebreak,
            name: category.name(),
        }
    }

    /// True when this hand is strictly stronger than `other`.
    pub fn beats(&self, other: &HandResult) -> bool {
        compare_hands(self, other).is_gt()
    }
}

/// Cards sharing one rank inside a hand.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RankGroup {
    pub rank: Rank,
    pub cards: Vec<Card>,
}

impl RankGroup {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }
}

/// Buckets cards by rank, ordered by group size then rank, both descending.
/// Cards inside a group keep their input order.
pub fn rank_groups(cards: &[Card]) -> Vec<RankGroup> {
    let mut groups: Vec<RankGroup> = Vec::with_capacity(cards.len());
    for &card in cards {
        match groups.iter_mut().find(|g| g.rank == card.rank) {
            Some(group) => group.cards.push(card),
            None => groups.push(RankGroup {
                rank: card.rank,
                cards: vec![card],
            }),
        }
    }
    groups.sort_by(|a, b| b.count().cmp(&a.count()).then(b.rank.cmp(&a.rank)));
    groups
}

/// Top value of the highest run of five or more consecutive rank values.
///
/// Duplicates are ignored and an ace also counts as 1, so the wheel
/// (A-2-3-4-5) reports 5.
pub fn straight_top(values: &[u8]) -> Option<u8> {
    let mut v = values.to_vec();
    v.sort_unstable();
    v.dedup();
    if v.last() == Some(&Rank::Ace.value()) {
        v.insert(0, 1);
    }

    let mut run = 1;
    let mut top = None;
    for i in 1..v.len() {
        if v[i] == v[i - 1] + 1 {
            run += 1;
        } else {
            run = 1;
        }
        if run >= HAND_SIZE {
            top = Some(v[i]);
        }
    }
    top
}

fn is_flush(cards: &[Card]) -> bool {
    cards.windows(2).all(|w| w[0].suit == w[1].suit)
}

fn values_desc(cards: &[Card]) -> Vec<u8> {
    let mut v: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    v.sort_unstable_by(|a, b| b.cmp(a));
    v
}

/// Classifies exactly five cards.
pub fn evaluate_five(cards: &[Card; HAND_SIZE]) -> HandResult {
    let groups = rank_groups(cards);
    let ordered: [Card; HAND_SIZE] = {
        let flat: Vec<Card> = groups.iter().flat_map(|g| g.cards.iter().copied()).collect();
        std::array::from_fn(|i| flat[i])
    };

    let flush = is_flush(cards);
    let values: Vec<u8> = cards.iter().map(|c| c.rank.value()).collect();
    let straight = straight_top(&values);

    let first = groups.first().map_or(0, RankGroup::count);
    let second = groups.get(1).map_or(0, RankGroup::count);
    let group_values = || groups.iter().map(RankGroup::value).collect::<Vec<u8>>();

    let (category, tiebreak) = match (flush, straight) {
        (true, Some(top)) => (Category::StraightFlush, vec![top]),
        _ if first == 4 => (Category::FourOfAKind, group_values()),
        _ if first == 3 && second >= 2 => (Category::FullHouse, group_values()),
        (true, None) => (Category::Flush, values_desc(cards)),
        (false, Some(top)) => (Category::Straight, vec![top]),
        _ if first == 3 => (Category::ThreeOfAKind, group_values()),
        _ if first == 2 && second == 2 => (Category::TwoPair, group_values()),
        _ if first == 2 => (Category::OnePair, group_values()),
        _ => (Category::HighCard, values_desc(cards)),
    };

    HandResult::new(category, ordered, tiebreak)
}

/// Lexicographic comparison of tie-break signatures; a missing trailing
/// entry compares as 0.
pub fn compare_tiebreaks(a: &[u8], b: &[u8]) -> Ordering {
    let len = a.len().max(b.len());
    for i in 0..len {
        let av = a.get(i).copied().unwrap_or(0);
        let bv = b.get(i).copied().unwrap_or(0);
        match av.cmp(&bv) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

pub fn compare_hands(a: &HandResult, b: &HandResult) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => compare_tiebreaks(&a.tiebreak, &b.tiebreak),
        ord => ord,
    }
}

fn validate(cards: &[Card]) -> Result<(), EvalError> {
    if !(HAND_SIZE..=MAX_CARDS).contains(&cards.len()) {
        return Err(EvalError::InvalidHandSize { count: cards.len() });
    }
    for (i, card) in cards.iter().enumerate() {
        if cards[..i].contains(card) {
            return Err(EvalError::DuplicateCard { card: *card });
        }
    }
    Ok(())
}

/// Finds the strongest five-card hand among 5 to 7 distinct cards.
///
/// Every five-card subset is classified; among equally strong subsets the
/// first in lexicographic index order is kept.
///
/// # Errors
///
/// [`EvalError::InvalidHandSize`] when fewer than 5 or more than 7 cards are
/// given, [`EvalError::DuplicateCard`] when a card appears twice.
///
/// ```rust
/// use handscope_engine::cards::Card;
/// use handscope_engine::hand::{best_hand, Category};
///
/// let cards: Vec<Card> = ["A♠", "2♥", "3♦", "4♣", "5♠"]
///     .iter()
///     .map(|s| s.parse().unwrap())
///     .collect();
/// let best = best_hand(&cards).unwrap();
/// assert_eq!(best.category, Category::Straight);
/// assert_eq!(best.tiebreak, vec![5]);
/// ```
pub fn best_hand(cards: &[Card]) -> Result<HandResult, EvalError> {
    if let Err(e) = validate(cards) {
        debug!(error = %e, "rejected card set");
        return Err(e);
    }

    let mut best: Option<HandResult> = None;
    let mut evaluated = 0usize;
    for idx in Combinations::<HAND_SIZE>::new(cards.len()) {
        let subset: [Card; HAND_SIZE] = std::array::from_fn(|i| cards[idx[i]]);
        let candidate = evaluate_five(&subset);
        evaluated += 1;
        trace!(?idx, category = %candidate.category, tiebreak = ?candidate.tiebreak, "candidate");
        best = match best {
            Some(current) if !candidate.beats(&current) => Some(current),
            _ => Some(candidate),
        };
    }

    // validate guarantees at least one subset
    let best = best.ok_or(EvalError::InvalidHandSize { count: cards.len() })?;
    debug!(
        category = %best.category,
        tiebreak = ?best.tiebreak,
        subsets = evaluated,
        "best hand"
    );
    Ok(best)
}

/// Evaluates two card sets and compares their best hands.
pub fn compare_card_sets(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    let a = best_hand(a)?;
    let b = best_hand(b)?;
    Ok(compare_hands(&a, &b))
}
