//! TUI application state and logic

use crate::core::Word;
use crate::game::{GameEvent, GameState, Status};
use crate::words;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::mpsc;
use std::time::Duration;

/// How a session obtains its solution word
#[derive(Debug, Clone)]
pub enum SolutionSource {
    /// Fetch from the remote word source in the background
    Remote,
    /// Use the built-in fallback word without touching the network
    Offline,
    /// Use a fixed word
    Fixed(Word),
}

/// Session statistics, kept across in-process restarts
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins indexed by guess count (1-6); index 0 unused
    pub guess_distribution: [usize; 7],
}

/// Application state
pub struct App {
    pub game: GameState,
    pub stats: Statistics,
    pub should_quit: bool,
    source: SolutionSource,
    pending_solution: Option<mpsc::Receiver<Word>>,
}

impl App {
    #[must_use]
    pub fn new(source: SolutionSource) -> Self {
        let (game, pending_solution) = start_session(&source);

        Self {
            game,
            stats: Statistics::default(),
            should_quit: false,
            source,
            pending_solution,
        }
    }

    /// Discard the finished game and start a fresh one
    ///
    /// Statistics survive; everything else, including any still-pending
    /// fetch, is rebuilt from scratch.
    pub fn restart(&mut self) {
        let (game, pending_solution) = start_session(&self.source);
        self.game = game;
        self.pending_solution = pending_solution;
    }

    /// True while the solution fetch is still outstanding
    #[must_use]
    pub const fn awaiting_solution(&self) -> bool {
        self.pending_solution.is_some()
    }

    /// Check the fetch channel without blocking and assign the solution once
    pub fn poll_solution(&mut self) {
        let Some(rx) = &self.pending_solution else {
            return;
        };

        match rx.try_recv() {
            Ok(word) => {
                self.game.set_solution(word);
                self.pending_solution = None;
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => {
                // Fetch thread went away without delivering; fall back locally
                self.game.set_solution(words::fallback_word());
                self.pending_solution = None;
            }
        }
    }

    /// Map one key press onto the game state machine
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.game.is_over() {
            match key.code {
                KeyCode::Char('n' | 'N') => self.restart(),
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        let game_event = match key.code {
            KeyCode::Char(c) => Some(GameEvent::Letter(c)),
            KeyCode::Backspace => Some(GameEvent::Backspace),
            KeyCode::Enter => Some(GameEvent::Submit),
            KeyCode::Esc => {
                self.should_quit = true;
                None
            }
            _ => None,
        };

        if let Some(game_event) = game_event {
            self.game.apply(game_event);
            if self.game.is_over() {
                self.record_outcome();
            }
        }
    }

    fn record_outcome(&mut self) {
        self.stats.total_games += 1;

        if self.game.status() == Status::Won {
            self.stats.games_won += 1;
            let guess_count = self.game.turn() + 1;
            if guess_count < self.stats.guess_distribution.len() {
                self.stats.guess_distribution[guess_count] += 1;
            }
        }
    }
}

fn start_session(source: &SolutionSource) -> (GameState, Option<mpsc::Receiver<Word>>) {
    match source {
        SolutionSource::Remote => (GameState::new(), Some(words::spawn_fetch())),
        SolutionSource::Offline => (GameState::with_solution(words::fallback_word()), None),
        SolutionSource::Fixed(word) => (GameState::with_solution(word.clone()), None),
    }
}

/// Run the TUI application
///
/// Raw mode and the alternate screen are acquired here and released on every
/// exit path, so restarts inside the session never stack up terminal state.
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        app.poll_solution();

        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll with a timeout so a solution arriving without any keyboard
        // activity still gets picked up and rendered
        if event::poll(Duration::from_millis(100))?
            && let Event::Key(key) = event::read()?
        {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fixed_app(solution: &str) -> App {
        App::new(SolutionSource::Fixed(Word::new(solution).unwrap()))
    }

    fn type_word(app: &mut App, guess: &str) {
        for c in guess.chars() {
            app.handle_key(press(KeyCode::Char(c)));
        }
        app.handle_key(press(KeyCode::Enter));
    }

    #[test]
    fn keys_map_to_game_events() {
        let mut app = fixed_app("crane");

        app.handle_key(press(KeyCode::Char('c')));
        app.handle_key(press(KeyCode::Char('r')));
        app.handle_key(press(KeyCode::Backspace));

        assert_eq!(app.game.buffer(), "c");
    }

    #[test]
    fn winning_updates_statistics() {
        let mut app = fixed_app("crane");

        type_word(&mut app, "blush");
        type_word(&mut app, "crane");

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
    }

    #[test]
    fn losing_counts_game_without_win() {
        let mut app = fixed_app("mango");

        for guess in ["blush", "train", "crown", "spike", "ferry", "gloat"] {
            type_word(&mut app, guess);
        }

        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn restart_key_resets_game_and_keeps_stats() {
        let mut app = fixed_app("crane");
        type_word(&mut app, "crane");
        assert!(app.game.is_over());

        app.handle_key(press(KeyCode::Char('n')));

        assert!(!app.game.is_over());
        assert_eq!(app.game.turn(), 0);
        assert_eq!(app.game.buffer(), "");
        assert_eq!(app.stats.total_games, 1);
    }

    #[test]
    fn quit_keys() {
        let mut app = fixed_app("crane");
        app.handle_key(press(KeyCode::Esc));
        assert!(app.should_quit);

        let mut app = fixed_app("crane");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);

        // After game over, plain 'q' quits as well
        let mut app = fixed_app("crane");
        type_word(&mut app, "crane");
        app.handle_key(press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn letters_ignored_after_game_over() {
        let mut app = fixed_app("crane");
        type_word(&mut app, "crane");

        app.handle_key(press(KeyCode::Char('x')));

        assert_eq!(app.game.buffer(), "crane");
    }

    #[test]
    fn offline_source_needs_no_fetch() {
        let app = App::new(SolutionSource::Offline);

        assert!(!app.awaiting_solution());
        assert_eq!(app.game.solution().map(Word::text), Some("hello"));
    }
}
