//! Terminal output formatting
//!
//! Display utilities for the non-TUI game mode.

pub mod display;

pub use display::{format_row, row_to_emoji};
