//! Per-letter guess feedback
//!
//! A Tile classifies one position of a submitted guess against the solution:
//! - `Correct`: right letter in the right position
//! - `Present`: letter occurs somewhere else in the solution
//! - `Absent`: letter does not occur in the solution
//!
//! Presence is a plain containment check. A guess letter repeated more often
//! than it occurs in the solution is marked `Present` at every non-exact
//! occurrence, unlike the official duplicate-counting rules.

use super::Word;

/// Feedback classification for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Correct,
    Present,
    Absent,
}

impl Tile {
    /// Classify `guess` against `solution` at one position
    ///
    /// Pure function; invoked only for finalized guesses.
    ///
    /// # Examples
    /// ```
    /// use termle::core::{Tile, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let solution = Word::new("slate").unwrap();
    /// assert_eq!(Tile::evaluate(&guess, &solution, 2), Tile::Correct); // a
    /// assert_eq!(Tile::evaluate(&guess, &solution, 0), Tile::Absent); // c
    /// ```
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub fn evaluate(guess: &Word, solution: &Word, position: usize) -> Self {
        let letter = guess.char_at(position);

        if solution.char_at(position) == letter {
            Self::Correct
        } else if solution.has_letter(letter) {
            Self::Present
        } else {
            Self::Absent
        }
    }
}

/// Classify every position of a guess in one call
#[must_use]
pub fn evaluate_row(guess: &Word, solution: &Word) -> [Tile; 5] {
    std::array::from_fn(|i| Tile::evaluate(guess, solution, i))
}
