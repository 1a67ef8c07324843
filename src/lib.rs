//! high-card-rs: Two-player "highest card wins" simulation
//!
//! Goals:
//! - Deterministic, seedable match simulation
//! - Small, well-documented public API
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: run a seeded match
//! ```
//! use high_card_rs::game::Game;
//!
//! let mut game = Game::try_new("Alice", "Bob", 42).unwrap();
//! game.deal().unwrap();
//! while !game.is_finished() {
//!     let outcome = game.play_round().unwrap();
//!     assert!(outcome.round <= 5);
//! }
//! let result = game.final_result().unwrap();
//! assert!(result.scores[0] + result.scores[1] <= 5);
//! ```
//!
//! ## CLI
//! Run the interactive driver with:
//! ```sh
//! cargo run --bin high-card
//! ```

pub mod cards;
pub mod deck;
pub mod engine;
pub mod game;
pub mod pile;
pub mod player;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
