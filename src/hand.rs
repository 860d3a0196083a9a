use crate::cards::{parse_cards, Card};
use crate::deck::HAND_SIZE;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("expected exactly 5 cards, got {0}")]
    CardCount(usize),
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// Exactly five cards belonging to one party. Order is the deal order.
///
/// ```
/// use showdown_rs::hand::Hand;
///
/// let hand: Hand = "As Ks Qs Js 10s".parse().unwrap();
/// assert_eq!(hand.cards().len(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand([Card; HAND_SIZE]);

impl Hand {
    /// Wrap five already-dealt cards. Cards dealt from one deck cannot repeat.
    pub const fn new(cards: [Card; HAND_SIZE]) -> Self {
        Self(cards)
    }

    /// Validate an arbitrary card list into a hand.
    pub fn try_from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let fixed: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::CardCount(cards.len()))?;
        let unique: HashSet<Card> = fixed.iter().copied().collect();
        if unique.len() != HAND_SIZE {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self(fixed))
    }

    pub const fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Self::try_from_slice(&cards)
    }
}
