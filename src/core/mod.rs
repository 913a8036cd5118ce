//! Core domain types for the word game
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod tile;
mod word;

pub use tile::{Tile, evaluate_row};
pub use word::{Word, WordError};
