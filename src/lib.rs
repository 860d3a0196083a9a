//! showdown-rs: Five-card showdown game core
//!
//! Goals:
//! - Deterministic evaluation and comparison of five-card poker hands
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: play one round
//! ```
//! use showdown_rs::game::{Game, GameConfig};
//! use showdown_rs::round::Outcome;
//!
//! let mut game = Game::new(GameConfig::default());
//! let player_cards = game.start_round().unwrap();
//! assert_eq!(player_cards.len(), 5);
//!
//! let outcome = game.resolve_round(10).unwrap();
//! match outcome.outcome {
//!     Outcome::Win => assert_eq!(outcome.tokens_after, 110),
//!     Outcome::Lose => assert_eq!(outcome.tokens_after, 90),
//!     Outcome::Tie => assert_eq!(outcome.tokens_after, 100),
//! }
//! ```
//!
//! ## Evaluate and compare hands directly
//! ```
//! use showdown_rs::evaluator::{evaluate_five, Category};
//! use showdown_rs::hand::Hand;
//!
//! let hand: Hand = "10s Js Qs Ks As".parse().unwrap();
//! let eval = evaluate_five(hand.cards());
//! assert_eq!(eval.category, Category::RoyalFlush);
//! ```
//!
//! ## TUI
//! Run the interactive table with:
//! ```sh
//! cargo run --bin showdown-rs
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod game;
pub mod hand;
pub mod round;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
