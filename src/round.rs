use crate::evaluator::{evaluate_five, Category, Evaluation};
use crate::hand::Hand;
use core::cmp::Ordering;

/// Outcome of one showdown, from the first hand's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Win,
    Lose,
    Tie,
}

impl Outcome {
    pub const fn label(self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Tie => "Tie",
        }
    }
}

/// Showdown verdict plus the category of the winning hand.
/// On a tie both categories are identical, so either one is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundResult {
    pub outcome: Outcome,
    pub category: Category,
}

/// Compare two five-card hands.
///
/// A higher category wins outright; equal categories walk the tie-break key
/// element-by-element and the first higher rank wins. Equal keys tie.
///
/// ```
/// use showdown_rs::hand::Hand;
/// use showdown_rs::round::{compare, Outcome};
///
/// let player: Hand = "Ks Kh 2d 2c 9s".parse().unwrap();
/// let dealer: Hand = "Qs Qh 6d 6c As".parse().unwrap();
/// let result = compare(&player, &dealer);
/// assert_eq!(result.outcome, Outcome::Win);
/// assert_eq!(result.category.label(), "Two Pair");
/// ```
pub fn compare(a: &Hand, b: &Hand) -> RoundResult {
    let ea = evaluate_five(a.cards());
    let eb = evaluate_five(b.cards());
    compare_evaluations(&ea, &eb)
}

/// Compare two already-evaluated hands. The packed `HandValue` ordering is
/// the category-then-tiebreak walk.
pub fn compare_evaluations(a: &Evaluation, b: &Evaluation) -> RoundResult {
    match a.cmp(b) {
        Ordering::Greater => RoundResult { outcome: Outcome::Win, category: a.category },
        Ordering::Less => RoundResult { outcome: Outcome::Lose, category: b.category },
        Ordering::Equal => RoundResult { outcome: Outcome::Tie, category: a.category },
    }
}
