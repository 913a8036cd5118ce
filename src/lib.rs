//! Termle
//!
//! A terminal Wordle-style game: a hidden five-letter word is fetched from a
//! remote word source and the player has six tries to guess it, with
//! per-letter feedback after every submitted guess.
//!
//! # Quick Start
//!
//! ```rust
//! use termle::core::{Tile, Word};
//! use termle::game::{GameEvent, GameState};
//!
//! let solution = Word::new("crane").unwrap();
//! let mut game = GameState::with_solution(solution);
//!
//! for c in "slate".chars() {
//!     game.apply(GameEvent::Letter(c));
//! }
//! game.apply(GameEvent::Submit);
//!
//! assert_eq!(game.turn(), 1);
//! assert_eq!(game.row_tiles(0).unwrap()[2], Tile::Correct); // the A
//! ```

// Core domain types
pub mod core;

// Turn progression state machine
pub mod game;

// Solution word sourcing
pub mod words;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
