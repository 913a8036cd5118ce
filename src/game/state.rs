//! Game session state and turn progression
//!
//! The whole turn lifecycle is an explicit transition function: feed discrete
//! [`GameEvent`]s into [`GameState::apply`] and read the resulting state back
//! out. No IO, no timing, no terminal coupling, which keeps every rule
//! testable in isolation.

use crate::core::{Tile, Word, evaluate_row};

/// Maximum number of guesses per session
pub const MAX_TURNS: usize = 6;

/// Number of letters in a guess
pub const WORD_LENGTH: usize = 5;

/// A discrete input event driving the turn state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A typed character; only ASCII letters are accepted
    Letter(char),
    /// Remove the last buffered character
    Backspace,
    /// Submit the active buffer as a guess
    Submit,
}

/// Session outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// How one grid row should be displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowView<'a> {
    /// A finalized guess, rendered with tile feedback
    Submitted(&'a Word),
    /// The in-progress buffer, rendered as plain unevaluated text
    Active(&'a str),
    /// A row not reached yet
    Empty,
}

/// Full state of one game session
///
/// The solution starts unset when it is still being fetched; guesses submitted
/// before it arrives are evaluated against nothing and can never win.
#[derive(Debug, Clone)]
pub struct GameState {
    solution: Option<Word>,
    guesses: [Option<Word>; MAX_TURNS],
    buffer: String,
    turn: usize,
    status: Status,
}

impl GameState {
    /// Create a session whose solution has not arrived yet
    #[must_use]
    pub fn new() -> Self {
        Self {
            solution: None,
            guesses: [const { None }; MAX_TURNS],
            buffer: String::new(),
            turn: 0,
            status: Status::InProgress,
        }
    }

    /// Create a session with a known solution
    #[must_use]
    pub fn with_solution(solution: Word) -> Self {
        let mut state = Self::new();
        state.solution = Some(solution);
        state
    }

    /// Assign the fetched solution
    ///
    /// The solution is set at most once per session; later calls are ignored.
    pub fn set_solution(&mut self, solution: Word) {
        if self.solution.is_none() {
            self.solution = Some(solution);
        }
    }

    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        self.solution.as_ref()
    }

    /// The submitted guess in a given row, if any
    #[must_use]
    pub fn guess(&self, index: usize) -> Option<&Word> {
        self.guesses.get(index).and_then(Option::as_ref)
    }

    /// The in-progress guess buffer (0-5 characters)
    #[must_use]
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Index of the row currently being edited (0-5)
    ///
    /// Frozen at the terminal row once the game is over.
    #[must_use]
    pub const fn turn(&self) -> usize {
        self.turn
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        !matches!(self.status, Status::InProgress)
    }

    /// Process one input event
    ///
    /// Every event is a no-op once the game is over.
    pub fn apply(&mut self, event: GameEvent) {
        if self.is_over() {
            return;
        }

        match event {
            GameEvent::Letter(c) => {
                if self.buffer.len() < WORD_LENGTH && c.is_ascii_alphabetic() {
                    self.buffer.push(c.to_ascii_lowercase());
                }
            }
            GameEvent::Backspace => {
                self.buffer.pop();
            }
            GameEvent::Submit => self.submit(),
        }
    }

    fn submit(&mut self) {
        if self.buffer.len() != WORD_LENGTH {
            return;
        }

        // Buffer only ever holds lowercase ASCII letters, so this cannot fail
        let Ok(guess) = Word::new(self.buffer.as_str()) else {
            return;
        };

        self.guesses[self.turn] = Some(guess.clone());

        if self.solution.as_ref() == Some(&guess) {
            self.status = Status::Won;
        } else if self.turn + 1 == MAX_TURNS {
            // Terminal turn: the buffer is left holding the last guess so the
            // final row stays visible under game-over rendering
            self.status = Status::Lost;
        } else {
            self.turn += 1;
            self.buffer.clear();
        }
    }

    /// How a grid row should be displayed right now
    #[must_use]
    pub fn row(&self, index: usize) -> RowView<'_> {
        if index < self.turn {
            match self.guess(index) {
                Some(word) => RowView::Submitted(word),
                None => RowView::Empty,
            }
        } else if index == self.turn {
            if self.is_over()
                && let Some(word) = self.guess(index)
            {
                RowView::Submitted(word)
            } else {
                RowView::Active(&self.buffer)
            }
        } else {
            RowView::Empty
        }
    }

    /// Tile feedback for a submitted row
    ///
    /// Returns `None` for rows that are not submitted. While the solution has
    /// not arrived, submitted rows classify as all `Absent`, matching the
    /// equality check that made them non-winning in the first place.
    #[must_use]
    pub fn row_tiles(&self, index: usize) -> Option<[Tile; 5]> {
        let RowView::Submitted(guess) = self.row(index) else {
            return None;
        };

        Some(match &self.solution {
            Some(solution) => evaluate_row(guess, solution),
            None => [Tile::Absent; 5],
        })
    }

    /// End-of-game message including the revealed solution
    ///
    /// `None` while the game is still in progress.
    #[must_use]
    pub fn end_message(&self) -> Option<String> {
        let revealed = self.solution.as_ref().map_or("", Word::text);

        match self.status {
            Status::InProgress => None,
            Status::Won => Some(format!("You win, the word is : {revealed}")),
            Status::Lost => Some(format!("You lose, the word is : {revealed}")),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn type_and_submit(state: &mut GameState, guess: &str) {
        for c in guess.chars() {
            state.apply(GameEvent::Letter(c));
        }
        state.apply(GameEvent::Submit);
    }

    #[test]
    fn short_submission_is_rejected() {
        let mut state = GameState::with_solution(word("crane"));

        for c in "cra".chars() {
            state.apply(GameEvent::Letter(c));
        }
        state.apply(GameEvent::Submit);

        assert_eq!(state.turn(), 0);
        assert_eq!(state.guess(0), None);
        assert_eq!(state.buffer(), "cra");
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn buffer_caps_at_five_letters() {
        let mut state = GameState::with_solution(word("crane"));

        for c in "abcdefgh".chars() {
            state.apply(GameEvent::Letter(c));
        }

        assert_eq!(state.buffer(), "abcde");
    }

    #[test]
    fn letters_are_lowercased_and_non_letters_ignored() {
        let mut state = GameState::with_solution(word("crane"));

        state.apply(GameEvent::Letter('C'));
        state.apply(GameEvent::Letter('1'));
        state.apply(GameEvent::Letter(' '));
        state.apply(GameEvent::Letter('r'));

        assert_eq!(state.buffer(), "cr");
    }

    #[test]
    fn backspace_removes_last_letter() {
        let mut state = GameState::with_solution(word("crane"));

        state.apply(GameEvent::Letter('c'));
        state.apply(GameEvent::Letter('r'));
        state.apply(GameEvent::Backspace);

        assert_eq!(state.buffer(), "c");
    }

    #[test]
    fn backspace_on_empty_buffer_is_noop() {
        let mut state = GameState::with_solution(word("crane"));

        state.apply(GameEvent::Backspace);

        assert_eq!(state.buffer(), "");
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn wrong_guess_advances_turn_and_clears_buffer() {
        let mut state = GameState::with_solution(word("crane"));

        type_and_submit(&mut state, "blush");

        assert_eq!(state.turn(), 1);
        assert_eq!(state.buffer(), "");
        assert_eq!(state.guess(0), Some(&word("blush")));
        assert_eq!(state.status(), Status::InProgress);
    }

    #[test]
    fn matching_guess_wins_at_any_turn() {
        for warmup_turns in 0..MAX_TURNS {
            let mut state = GameState::with_solution(word("crane"));

            for _ in 0..warmup_turns {
                type_and_submit(&mut state, "blush");
            }
            type_and_submit(&mut state, "crane");

            assert_eq!(state.status(), Status::Won);
            assert_eq!(state.turn(), warmup_turns);
        }
    }

    #[test]
    fn six_wrong_guesses_lose() {
        let mut state = GameState::with_solution(word("mango"));

        for guess in ["blush", "train", "crown", "spike", "ferry", "gloat"] {
            type_and_submit(&mut state, guess);
        }

        assert_eq!(state.status(), Status::Lost);
        assert_eq!(state.turn(), MAX_TURNS - 1);
        assert_eq!(
            state.end_message().as_deref(),
            Some("You lose, the word is : mango")
        );
    }

    #[test]
    fn terminal_turn_keeps_buffer_visible() {
        let mut state = GameState::with_solution(word("mango"));

        for guess in ["blush", "train", "crown", "spike", "ferry", "gloat"] {
            type_and_submit(&mut state, guess);
        }

        // The losing row is still populated for game-over rendering
        assert_eq!(state.buffer(), "gloat");
        assert_eq!(state.row(5), RowView::Submitted(&word("gloat")));
    }

    #[test]
    fn no_state_changes_after_game_over() {
        let mut state = GameState::with_solution(word("crane"));
        type_and_submit(&mut state, "crane");

        let frozen = state.clone();
        state.apply(GameEvent::Letter('x'));
        state.apply(GameEvent::Backspace);
        state.apply(GameEvent::Submit);

        assert_eq!(state.buffer(), frozen.buffer());
        assert_eq!(state.turn(), frozen.turn());
        assert_eq!(state.status(), frozen.status());
        for i in 0..MAX_TURNS {
            assert_eq!(state.guess(i), frozen.guess(i));
        }
    }

    #[test]
    fn win_scenario_blush_train_crane() {
        let mut state = GameState::with_solution(word("crane"));

        type_and_submit(&mut state, "blush");
        type_and_submit(&mut state, "train");
        type_and_submit(&mut state, "crane");

        // BLUSH shares no letters with CRANE
        assert_eq!(state.row_tiles(0), Some([Tile::Absent; 5]));

        // TRAIN: T(absent) R(correct) A(correct) I(absent) N(present)
        assert_eq!(
            state.row_tiles(1),
            Some([
                Tile::Absent,
                Tile::Correct,
                Tile::Correct,
                Tile::Absent,
                Tile::Present,
            ])
        );

        assert_eq!(state.row_tiles(2), Some([Tile::Correct; 5]));
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.turn(), 2);
        assert_eq!(
            state.end_message().as_deref(),
            Some("You win, the word is : crane")
        );
    }

    #[test]
    fn rows_after_current_turn_are_empty() {
        let mut state = GameState::with_solution(word("crane"));
        type_and_submit(&mut state, "blush");
        state.apply(GameEvent::Letter('t'));

        assert_eq!(state.row(0), RowView::Submitted(&word("blush")));
        assert_eq!(state.row(1), RowView::Active("t"));
        for i in 2..MAX_TURNS {
            assert_eq!(state.row(i), RowView::Empty);
        }
    }

    #[test]
    fn solution_assigned_at_most_once() {
        let mut state = GameState::new();

        state.set_solution(word("crane"));
        state.set_solution(word("mango"));

        assert_eq!(state.solution(), Some(&word("crane")));
    }

    #[test]
    fn guesses_before_solution_arrives_cannot_win() {
        let mut state = GameState::new();

        type_and_submit(&mut state, "crane");

        assert_eq!(state.status(), Status::InProgress);
        assert_eq!(state.turn(), 1);
        // Without a solution the submitted row classifies as all absent
        assert_eq!(state.row_tiles(0), Some([Tile::Absent; 5]));

        // The late-arriving solution does not retroactively win the game,
        // but the next identical guess does
        state.set_solution(word("crane"));
        assert_eq!(state.status(), Status::InProgress);
        type_and_submit(&mut state, "crane");
        assert_eq!(state.status(), Status::Won);
    }

    #[test]
    fn no_message_while_in_progress() {
        let state = GameState::with_solution(word("crane"));
        assert_eq!(state.end_message(), None);
    }
}
