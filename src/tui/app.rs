use crate::game::{Game, GameError, RoundOutcome};
use std::time::{Duration, Instant};

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    Deal,
    Reveal,
    BetDigit(u8),
    BetBackspace,
    NewSession,
    ToggleHelp,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    // Core game session
    pub game: Game,
    pub last_outcome: Option<RoundOutcome>,
    bet_entry: String,
    message: Option<String>,
    error: Option<String>,
    error_at: Option<Instant>,
    help_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            game: Game::default(),
            last_outcome: None,
            bet_entry: String::from("10"),
            message: None,
            error: None,
            error_at: None,
            help_open: false,
        }
    }
}

impl AppState {
    const ERROR_TTL: Duration = Duration::from_secs(3);
    const BET_ENTRY_MAX_DIGITS: usize = 6;

    pub fn bet_entry(&self) -> &str {
        &self.bet_entry
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    /// Expire transient error lines.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.error_at {
            if at.elapsed() >= Self::ERROR_TTL {
                self.error = None;
                self.error_at = None;
            }
        }
    }

    pub fn handle_input(&mut self, action: InputAction) {
        match action {
            InputAction::Deal => self.deal(),
            InputAction::Reveal => self.reveal(),
            InputAction::BetDigit(d) => {
                if self.bet_entry.len() < Self::BET_ENTRY_MAX_DIGITS {
                    self.bet_entry.push((b'0' + d.min(9)) as char);
                }
            }
            InputAction::BetBackspace => {
                self.bet_entry.pop();
            }
            InputAction::NewSession => {
                self.game = Game::new(self.game.config());
                self.last_outcome = None;
                self.message = Some("New session started.".to_string());
                self.clear_error();
            }
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
            }
        }
    }

    fn deal(&mut self) {
        match self.game.start_round() {
            Ok(_) => {
                self.last_outcome = None;
                self.message = Some("Place your bet, then Enter to reveal.".to_string());
                self.clear_error();
            }
            Err(GameError::SessionOver) => {
                self.set_error("Session over, press N for a new game".to_string());
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn reveal(&mut self) {
        let bet: u64 = self.bet_entry.parse().unwrap_or(0);
        match self.game.resolve_round(bet) {
            Ok(outcome) => {
                let verdict = match outcome.outcome {
                    crate::round::Outcome::Win => format!("You win +{bet}"),
                    crate::round::Outcome::Lose => format!("Dealer wins -{bet}"),
                    crate::round::Outcome::Tie => "Push, bet returned".to_string(),
                };
                let mut message = format!("{} ({})", verdict, outcome.category.label());
                if self.game.is_victory() {
                    message.push_str(" — session won! N for a new game.");
                } else if self.game.is_bust() {
                    message.push_str(" — busted! N for a new game.");
                }
                self.message = Some(message);
                self.last_outcome = Some(outcome);
                self.clear_error();
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    fn set_error(&mut self, text: String) {
        self.error = Some(text);
        self.error_at = Some(Instant::now());
    }

    fn clear_error(&mut self) {
        self.error = None;
        self.error_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bet_entry_accepts_digits_and_backspace() {
        let mut app = AppState::default();
        app.handle_input(InputAction::BetBackspace);
        app.handle_input(InputAction::BetBackspace);
        assert_eq!(app.bet_entry(), "");
        app.handle_input(InputAction::BetDigit(2));
        app.handle_input(InputAction::BetDigit(5));
        assert_eq!(app.bet_entry(), "25");
    }

    #[test]
    fn bet_entry_is_capped() {
        let mut app = AppState::default();
        for _ in 0..10 {
            app.handle_input(InputAction::BetDigit(9));
        }
        assert_eq!(app.bet_entry().len(), AppState::BET_ENTRY_MAX_DIGITS);
    }

    #[test]
    fn reveal_without_deal_reports_an_error() {
        let mut app = AppState::default();
        app.handle_input(InputAction::Reveal);
        assert!(app.error().is_some());
        assert!(app.last_outcome.is_none());
    }

    #[test]
    fn deal_then_reveal_completes_a_round() {
        let mut app = AppState::default();
        app.handle_input(InputAction::Deal);
        assert!(app.game.round_active());
        app.handle_input(InputAction::Reveal);
        assert!(!app.game.round_active());
        assert!(app.last_outcome.is_some());
        assert_eq!(app.game.history().len(), 1);
    }

    #[test]
    fn new_session_restores_the_starting_balance() {
        let mut app = AppState::default();
        app.handle_input(InputAction::Deal);
        app.handle_input(InputAction::Reveal);
        app.handle_input(InputAction::NewSession);
        assert_eq!(app.game.tokens(), app.game.config().starting_tokens);
        assert!(app.game.history().is_empty());
        assert!(app.last_outcome.is_none());
    }
}
