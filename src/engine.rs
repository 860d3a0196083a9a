// Minimal session API boundary. This trait exposes the core round actions and
// queries so UIs can drive a session without depending on UI internals. It is
// implemented for the core `Game` type.

use crate::cards::Card;
use crate::deck::HAND_SIZE;
use crate::game::{GameError, RoundOutcome, RoundRecord};
use crate::hand::Hand;

pub trait RoundEngine {
    // Round lifecycle
    fn start_round(&mut self) -> Result<[Card; HAND_SIZE], GameError>;
    fn resolve_round(&mut self, bet: u64) -> Result<RoundOutcome, GameError>;

    // Queries
    fn tokens(&self) -> u64;
    fn round_active(&self) -> bool;
    fn is_victory(&self) -> bool;
    fn is_bust(&self) -> bool;
    fn player_hand(&self) -> Option<&Hand>;
    fn history(&self) -> &[RoundRecord];
}

impl RoundEngine for crate::game::Game {
    fn start_round(&mut self) -> Result<[Card; HAND_SIZE], GameError> {
        self.start_round()
    }

    fn resolve_round(&mut self, bet: u64) -> Result<RoundOutcome, GameError> {
        self.resolve_round(bet)
    }

    fn tokens(&self) -> u64 {
        self.tokens()
    }

    fn round_active(&self) -> bool {
        self.round_active()
    }

    fn is_victory(&self) -> bool {
        self.is_victory()
    }

    fn is_bust(&self) -> bool {
        self.is_bust()
    }

    fn player_hand(&self) -> Option<&Hand> {
        self.player().hand()
    }

    fn history(&self) -> &[RoundRecord] {
        self.history()
    }
}
