use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

/// The number of cards in one hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck is out of cards")]
    Empty,
}

/// A standard 52-card deck. Built fresh for every round; never reused.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Build the full 52-card deck, suits outer loop, ranks inner loop.
    ///
    /// ```
    /// use showdown_rs::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards.push(Card::new(r, s));
            }
        }
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Fisher-Yates shuffle using the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal one card from the top of the deck.
    pub fn deal(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Empty)
    }

    /// Deal one hand's worth of cards.
    pub fn deal_hand(&mut self) -> Result<[Card; HAND_SIZE], DeckError> {
        let mut out = [Card::new(Rank::Two, Suit::Clubs); HAND_SIZE];
        for slot in &mut out {
            *slot = self.deal()?;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn standard_deck_is_exhaustive_and_duplicate_free() {
        let d = Deck::standard();
        assert_eq!(d.len(), 52);
        let unique: HashSet<Card> = d.cards.iter().copied().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn build_order_is_suits_outer_ranks_inner() {
        let d = Deck::standard();
        assert_eq!(d.cards[0], Card::new(Rank::Two, Suit::Spades));
        assert_eq!(d.cards[12], Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(d.cards[13], Card::new(Rank::Two, Suit::Hearts));
        assert_eq!(d.cards[51], Card::new(Rank::Ace, Suit::Clubs));
    }

    #[test]
    fn seeded_shuffle_is_reproducible() {
        let mut d1 = Deck::standard();
        let mut d2 = Deck::standard();
        d1.shuffle_seeded(42);
        d2.shuffle_seeded(42);
        assert_eq!(d1.cards, d2.cards);
    }

    #[test]
    fn deal_reduces_length_and_returns_distinct_cards() {
        let mut d = Deck::standard();
        d.shuffle_seeded(7);
        let c1 = d.deal().unwrap();
        let c2 = d.deal().unwrap();
        assert_ne!(c1, c2);
        assert_eq!(d.len(), 50);
        let hand = d.deal_hand().unwrap();
        assert_eq!(hand.len(), 5);
        assert_eq!(d.len(), 45);
    }

    #[test]
    fn dealing_from_an_exhausted_deck_errors() {
        let mut d = Deck::standard();
        for _ in 0..52 {
            d.deal().unwrap();
        }
        assert!(d.is_empty());
        assert_eq!(d.deal(), Err(DeckError::Empty));
        assert_eq!(d.deal_hand(), Err(DeckError::Empty));
    }
}
