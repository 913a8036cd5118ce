//! Display functions for the plain CLI mode

use crate::core::{Tile, Word};
use colored::Colorize;

/// Format a submitted guess as a row of colored tiles
#[must_use]
pub fn format_row(guess: &Word, tiles: &[Tile; 5]) -> String {
    let mut row = String::new();

    for (i, tile) in tiles.iter().enumerate() {
        let cell = format!(" {} ", char::from(guess.char_at(i)).to_ascii_uppercase());
        let cell = match tile {
            Tile::Correct => cell.black().on_green().bold(),
            Tile::Present => cell.black().on_yellow().bold(),
            Tile::Absent => cell.white().on_bright_black(),
        };

        if i > 0 {
            row.push(' ');
        }
        row.push_str(&cell.to_string());
    }

    row
}

/// Format tile feedback as an emoji string
#[must_use]
pub fn row_to_emoji(tiles: &[Tile; 5]) -> String {
    tiles
        .iter()
        .map(|tile| match tile {
            Tile::Correct => '🟩',
            Tile::Present => '🟨',
            Tile::Absent => '⬜',
        })
        .collect()
}
