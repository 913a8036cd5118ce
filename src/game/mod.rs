//! Turn progression state machine
//!
//! Owns the guess log, the active buffer, the turn index, and the session
//! outcome. Pure with respect to IO so the full rule set is unit-testable.

mod state;

pub use state::{GameEvent, GameState, MAX_TURNS, RowView, Status, WORD_LENGTH};
