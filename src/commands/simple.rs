//! Simple interactive CLI mode
//!
//! Line-based game loop without the TUI.

use crate::core::Word;
use crate::game::{GameEvent, GameState, MAX_TURNS, Status};
use crate::output::{format_row, row_to_emoji};
use anyhow::{Result, bail};
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple line-based game mode
///
/// # Errors
///
/// Returns an error if stdin is closed or reading user input fails.
pub fn run_simple(solution: Word) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     TERMLE - Simple Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden five-letter word. You have {MAX_TURNS} tries.");
    println!("After each guess every letter is marked:\n");
    println!("  - 🟩 green: correct position");
    println!("  - 🟨 yellow: in the word, wrong position");
    println!("  - ⬜ gray: not in the word\n");

    let mut state = GameState::with_solution(solution);

    while !state.is_over() {
        let prompt = format!("Guess {}/{}", state.turn() + 1, MAX_TURNS);
        let input = get_user_input(&prompt)?;

        let guess = match Word::new(input.as_str()) {
            Ok(guess) => guess,
            Err(err) => {
                println!("  {}\n", err.to_string().red());
                continue;
            }
        };

        for c in guess.text().chars() {
            state.apply(GameEvent::Letter(c));
        }
        state.apply(GameEvent::Submit);

        // The row just submitted: the current one on game over, else the
        // previous one since a valid submission advanced the turn
        let submitted = if state.is_over() {
            state.turn()
        } else {
            state.turn() - 1
        };

        if let (Some(guess), Some(tiles)) = (state.guess(submitted), state.row_tiles(submitted)) {
            println!("  {}  {}\n", format_row(guess, &tiles), row_to_emoji(&tiles));
        }
    }

    if let Some(message) = state.end_message() {
        let message = match state.status() {
            Status::Won => message.green().bold(),
            _ => message.red().bold(),
        };
        println!("{message}");
    }

    Ok(())
}

fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        bail!("input closed before the game finished");
    }

    Ok(input.trim().to_lowercase())
}
