use crate::cards::{Card, Rank};
use crate::deck::HAND_SIZE;
use core::cmp::Ordering;

/// Compact, comparable hand strength. Higher is better.
/// Encodes category and ranked tiebreakers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[non_exhaustive]
pub struct HandValue(u64);

/// Poker hand category from weakest to strongest. The discriminant is the
/// category rank (1 = High Card .. 10 = Royal Flush).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    /// Category rank, 1 (High Card) to 10 (Royal Flush).
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Human-readable category name.
    pub const fn label(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl HandValue {
    /// Return the packed comparable value.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Pack a category and up to five rank tiebreakers into a comparable value.
    /// Uses 6 bits per rank to be generous (supports up to 63).
    pub fn from_parts(category: Category, ranks_desc: &[Rank]) -> Self {
        // Layout (most significant -> least):
        // [ category (8 bits) | r0 (6) | r1 (6) | r2 (6) | r3 (6) | r4 (6) | 10 zero bits ]
        // r0 is the primary tiebreaker; missing trailing ranks stay zero.
        const CAT_SHIFT: u32 = 48;
        const RANK_STRIDE: u32 = 6;
        let mut v: u64 = (category as u64) << CAT_SHIFT;
        for (i, r) in ranks_desc.iter().take(HAND_SIZE).enumerate() {
            let offset = CAT_SHIFT - RANK_STRIDE * (i as u32 + 1);
            v |= (*r as u64) << offset;
        }
        HandValue(v)
    }
}

/// Result of evaluating one five-card hand. `value` drives ordering.
#[derive(Debug, Clone, Copy)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    tiebreak: [Rank; HAND_SIZE],
    tiebreak_len: u8,
    value: HandValue,
}

impl Evaluation {
    /// Return the packed comparable value for ordering/caching.
    pub const fn value(&self) -> HandValue {
        self.value
    }

    /// Tie-break key: defining group ranks first (higher count first, then
    /// higher rank), kickers descending after them. Compared element-by-element
    /// between hands of the same category.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak[..self.tiebreak_len as usize]
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
}

fn make(category: Category, key: &[Rank]) -> Evaluation {
    let mut tiebreak = [Rank::Two; HAND_SIZE];
    tiebreak[..key.len()].copy_from_slice(key);
    Evaluation {
        category,
        tiebreak,
        tiebreak_len: key.len() as u8,
        value: HandValue::from_parts(category, key),
    }
}

/// Evaluate exactly five cards; detects category and encodes tie-breakers.
///
/// Deterministic and independent of card order. Aces are high only: A-2-3-4-5
/// does not count as a straight.
///
/// ```
/// use showdown_rs::evaluator::{evaluate_five, Category};
/// use showdown_rs::hand::Hand;
///
/// let hand: Hand = "10s Js Qs Ks As".parse().unwrap();
/// let eval = evaluate_five(hand.cards());
/// assert_eq!(eval.category, Category::RoyalFlush);
/// assert_eq!(eval.category.rank(), 10);
/// ```
pub fn evaluate_five(cards: &[Card; HAND_SIZE]) -> Evaluation {
    // All five ranks, descending.
    let mut values = cards.map(|c| c.rank());
    values.sort_by(|a, b| b.cmp(a));

    // Rank frequency groups: (rank, count) sorted by count desc, then rank desc.
    // `values` is rank-descending, so equal ranks are adjacent and the stable
    // sort keeps same-count groups in rank order.
    let mut counts = [0u8; 15];
    for r in &values {
        counts[r.value() as usize] += 1;
    }
    let mut groups: Vec<(Rank, u8)> = Vec::with_capacity(HAND_SIZE);
    for &r in &values {
        if groups.last().map(|&(prev, _)| prev) != Some(r) {
            groups.push((r, counts[r.value() as usize]));
        }
    }
    groups.sort_by(|a, b| b.1.cmp(&a.1));

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    // Five distinct ranks spanning exactly four steps form a contiguous run.
    // Ace is high only, so the top straight is 10-J-Q-K-A and there is no wheel.
    let is_straight =
        groups.len() == HAND_SIZE && values[0].value() - values[4].value() == 4;

    let group_key: Vec<Rank> = groups.iter().map(|(r, _)| *r).collect();

    if is_flush && is_straight {
        if values[0] == Rank::Ace {
            return make(Category::RoyalFlush, &values);
        }
        return make(Category::StraightFlush, &values);
    }
    if groups[0].1 == 4 {
        return make(Category::FourOfAKind, &group_key);
    }
    if groups[0].1 == 3 && groups[1].1 == 2 {
        return make(Category::FullHouse, &group_key);
    }
    if is_flush {
        return make(Category::Flush, &values);
    }
    if is_straight {
        return make(Category::Straight, &values);
    }
    if groups[0].1 == 3 {
        return make(Category::ThreeOfAKind, &group_key);
    }
    if groups[0].1 == 2 && groups[1].1 == 2 {
        return make(Category::TwoPair, &group_key);
    }
    if groups[0].1 == 2 {
        return make(Category::Pair, &group_key);
    }
    make(Category::HighCard, &values)
}

/// Evaluate an arbitrary card slice, rejecting anything but exactly five cards.
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    let fixed: [Card; HAND_SIZE] =
        cards.try_into().map_err(|_| EvalError::CardCount(cards.len()))?;
    Ok(evaluate_five(&fixed))
}
