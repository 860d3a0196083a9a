use crate::cards::Card;
use crate::deck::{Deck, DeckError, HAND_SIZE};
use crate::evaluator::Category;
use crate::hand::Hand;
use crate::round::{compare, Outcome};
use rand::Rng;

/// Session parameters. Thresholds are product configuration, not rules of
/// hand evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_tokens: u64,
    /// Session is won once tokens reach this value.
    pub victory_threshold: u64,
    /// Session is lost once tokens fall to this value.
    pub bust_threshold: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { starting_tokens: 100, victory_threshold: 101, bust_threshold: 0 }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error("bet must be between 1 and {tokens}, got {bet}")]
    InvalidBet { bet: u64, tokens: u64 },
    #[error("no round has been dealt")]
    NoRound,
    #[error("a dealt round is awaiting resolution")]
    RoundInProgress,
    #[error("session is over, start a new game")]
    SessionOver,
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// One party at the table: the human player or the dealer.
/// `hand` is `None` between rounds; old cards are discarded, never recycled.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) hand: Option<Hand>,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }
}

/// Everything the collaborator needs to render a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundOutcome {
    pub outcome: Outcome,
    /// Category of the winning hand (shared category on a tie).
    pub category: Category,
    pub dealer_hand: [Card; HAND_SIZE],
    pub tokens_after: u64,
}

/// Completed-round entry in the session history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub struct RoundRecord {
    pub bet: u64,
    pub outcome: Outcome,
    pub category: Category,
    pub tokens_after: u64,
}

/// One session: a token balance carried across rounds until bust or victory.
/// A restart is a new `Game` value; there is no in-place reset.
#[derive(Debug)]
#[non_exhaustive]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) player: Player,
    pub(crate) dealer: Player,
    pub(crate) tokens: u64,
    pub(crate) dealt: bool,
    history: Vec<RoundRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            player: Player { name: "Player".to_string(), hand: None },
            dealer: Player { name: "Dealer".to_string(), hand: None },
            tokens: config.starting_tokens,
            dealt: false,
            history: Vec::new(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn tokens(&self) -> u64 {
        self.tokens
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// True while a dealt round awaits resolution.
    pub fn round_active(&self) -> bool {
        self.dealt
    }

    pub fn is_victory(&self) -> bool {
        self.tokens >= self.config.victory_threshold
    }

    pub fn is_bust(&self) -> bool {
        self.tokens <= self.config.bust_threshold
    }

    pub fn session_over(&self) -> bool {
        self.is_victory() || self.is_bust()
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn history_recent(&self, n: usize) -> &[RoundRecord] {
        let start = self.history.len().saturating_sub(n);
        &self.history[start..]
    }

    /// Deal a new round: rebuild and shuffle a fresh 52-card deck, deal five
    /// cards to the player and five to the dealer, and return the player's
    /// cards. The dealer's hand stays concealed until [`Self::resolve_round`].
    pub fn start_round(&mut self) -> Result<[Card; HAND_SIZE], GameError> {
        self.start_round_with(&mut rand::rng())
    }

    /// Seeded/injected-RNG variant of [`Self::start_round`] for reproducible
    /// rounds.
    pub fn start_round_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<[Card; HAND_SIZE], GameError> {
        if self.session_over() {
            return Err(GameError::SessionOver);
        }
        if self.dealt {
            return Err(GameError::RoundInProgress);
        }
        let mut deck = Deck::standard();
        deck.shuffle_with(rng);
        let player_cards = deck.deal_hand()?;
        let dealer_cards = deck.deal_hand()?;
        self.player.hand = Some(Hand::new(player_cards));
        self.dealer.hand = Some(Hand::new(dealer_cards));
        self.dealt = true;
        Ok(player_cards)
    }

    /// Resolve the dealt round against `bet` tokens: reveal the dealer's hand,
    /// compare, and settle the wager (win +bet, lose -bet, tie unchanged).
    ///
    /// An out-of-range bet (`0` or more than the current balance) is rejected
    /// with no state change.
    pub fn resolve_round(&mut self, bet: u64) -> Result<RoundOutcome, GameError> {
        if !self.dealt {
            return Err(GameError::NoRound);
        }
        if bet == 0 || bet > self.tokens {
            return Err(GameError::InvalidBet { bet, tokens: self.tokens });
        }
        let (player_hand, dealer_hand) = match (&self.player.hand, &self.dealer.hand) {
            (Some(p), Some(d)) => (p, d),
            _ => return Err(GameError::NoRound),
        };
        let result = compare(player_hand, dealer_hand);
        let dealer_cards = *dealer_hand.cards();
        self.tokens = match result.outcome {
            Outcome::Win => self.tokens + bet,
            Outcome::Lose => self.tokens - bet,
            Outcome::Tie => self.tokens,
        };
        self.dealt = false;
        let outcome = RoundOutcome {
            outcome: result.outcome,
            category: result.category,
            dealer_hand: dealer_cards,
            tokens_after: self.tokens,
        };
        self.history.push(RoundRecord {
            bet,
            outcome: result.outcome,
            category: result.category,
            tokens_after: self.tokens,
        });
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn hand(s: &str) -> Hand {
        s.parse().expect("valid hand")
    }

    fn rigged(player: &str, dealer: &str) -> Game {
        let mut g = Game::default();
        g.player.hand = Some(hand(player));
        g.dealer.hand = Some(hand(dealer));
        g.dealt = true;
        g
    }

    #[test]
    fn start_round_deals_disjoint_hands() {
        let mut g = Game::default();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let player_cards = g.start_round_with(&mut rng).unwrap();
        assert!(g.round_active());
        let dealer_cards = *g.dealer().hand().unwrap().cards();
        let all: HashSet<Card> =
            player_cards.iter().chain(dealer_cards.iter()).copied().collect();
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn start_round_twice_without_resolving_errors() {
        let mut g = Game::default();
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        g.start_round_with(&mut rng).unwrap();
        assert_eq!(g.start_round_with(&mut rng), Err(GameError::RoundInProgress));
    }

    #[test]
    fn resolve_without_deal_errors() {
        let mut g = Game::default();
        assert_eq!(g.resolve_round(10), Err(GameError::NoRound));
    }

    #[test]
    fn invalid_bets_leave_state_untouched() {
        let mut g = rigged("Ks Kh 2d 2c 9s", "Qs Qh 6d 6c As");
        assert_eq!(g.resolve_round(0), Err(GameError::InvalidBet { bet: 0, tokens: 100 }));
        assert_eq!(g.resolve_round(101), Err(GameError::InvalidBet { bet: 101, tokens: 100 }));
        assert_eq!(g.tokens(), 100);
        assert!(g.round_active());
        assert!(g.history().is_empty());
    }

    #[test]
    fn winning_round_pays_the_bet() {
        let mut g = rigged("Ks Kh 2d 2c 9s", "Qs Qh 6d 6c As");
        let o = g.resolve_round(25).unwrap();
        assert_eq!(o.outcome, Outcome::Win);
        assert_eq!(o.category, Category::TwoPair);
        assert_eq!(o.tokens_after, 125);
        assert_eq!(g.tokens(), 125);
        assert!(!g.round_active());
        assert_eq!(g.history().len(), 1);
        assert_eq!(g.history()[0].bet, 25);
    }

    #[test]
    fn losing_round_takes_the_bet() {
        let mut g = rigged("Ah Kd 7s 5c 2d", "4h 5d 6s 7c 8d");
        let o = g.resolve_round(40).unwrap();
        assert_eq!(o.outcome, Outcome::Lose);
        assert_eq!(o.category, Category::Straight);
        assert_eq!(g.tokens(), 60);
    }

    #[test]
    fn tied_round_returns_the_bet() {
        let mut g = rigged("Ah Kd 9s 5c 2d", "As Kh 9d 5s 2c");
        let o = g.resolve_round(50).unwrap();
        assert_eq!(o.outcome, Outcome::Tie);
        assert_eq!(g.tokens(), 100);
    }

    #[test]
    fn losing_the_whole_balance_busts_the_session() {
        let mut g = rigged("Ah Kd 7s 5c 2d", "4h 5d 6s 7c 8d");
        g.resolve_round(100).unwrap();
        assert_eq!(g.tokens(), 0);
        assert!(g.is_bust());
        assert!(g.session_over());
        assert_eq!(g.start_round(), Err(GameError::SessionOver));
    }

    #[test]
    fn reaching_the_victory_threshold_ends_the_session() {
        let mut g = rigged("Ks Kh 2d 2c 9s", "Qs Qh 6d 6c As");
        g.resolve_round(1).unwrap();
        assert_eq!(g.tokens(), 101);
        assert!(g.is_victory());
        assert_eq!(g.start_round(), Err(GameError::SessionOver));
    }

    #[test]
    fn thresholds_come_from_config() {
        let config =
            GameConfig { starting_tokens: 10, victory_threshold: 20, bust_threshold: 5 };
        let g = Game::new(config);
        assert!(!g.session_over());
        let mut g = Game::new(config);
        g.tokens = 5;
        assert!(g.is_bust());
        g.tokens = 20;
        assert!(g.is_victory());
    }

    #[test]
    fn each_round_uses_a_fresh_deck() {
        let mut g = Game::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let first = g.start_round_with(&mut rng).unwrap();
        g.resolve_round(1).unwrap();
        let second = g.start_round_with(&mut rng).unwrap();
        // Ten fresh cards each round; a card from round one may legally
        // reappear because the deck was rebuilt from all 52.
        assert_eq!(first.len(), 5);
        assert_eq!(second.len(), 5);
        assert!(g.round_active());
    }
}
