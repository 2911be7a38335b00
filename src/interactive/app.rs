//! TUI application state and logic

use crate::game::{GameState, InputOutcome, Key, WordleEngine};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::Rng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App<R: Rng = StdRng> {
    pub engine: WordleEngine<R>,
    pub stats: Statistics,
    pub should_quit: bool,
    /// Set once the finished game has been counted in `stats`
    recorded: bool,
}

/// Results of the games played in this session
#[derive(Debug, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won with `n` guesses
    pub guess_distribution: Vec<usize>,
    pub current_streak: usize,
    pub max_streak: usize,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            total_games: 0,
            games_won: 0,
            guess_distribution: vec![0; max_attempts + 1],
            current_streak: 0,
            max_streak: 0,
        }
    }

    /// Count a finished game
    pub fn record(&mut self, state: &GameState) {
        self.total_games += 1;
        if state.has_won() {
            self.games_won += 1;
            let guesses = state.guesses().len();
            if let Some(slot) = self.guess_distribution.get_mut(guesses) {
                *slot += 1;
            }
            self.current_streak += 1;
            self.max_streak = self.max_streak.max(self.current_streak);
        } else {
            self.current_streak = 0;
        }
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<R: Rng> App<R> {
    #[must_use]
    pub fn new(engine: WordleEngine<R>) -> Self {
        let stats = Statistics::new(engine.state().max_attempts());
        Self {
            engine,
            stats,
            should_quit: false,
            recorded: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn new_game(&mut self) {
        self.engine.reset_game();
        self.recorded = false;
    }

    /// Route one key event to the engine or to app-level commands
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.should_quit = true;
            return;
        }

        if self.engine.state().is_over() {
            match key.code {
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {}
            }
            return;
        }

        let game_key = match key.code {
            KeyCode::Char(c) => Key::letter(c),
            KeyCode::Backspace => Some(Key::Backspace),
            KeyCode::Enter => Some(Key::Enter),
            _ => None,
        };

        if let Some(game_key) = game_key {
            let outcome = self.engine.handle_input(game_key);
            debug!(key = %game_key, ?outcome, "key handled");
            if outcome == InputOutcome::Submitted {
                self.record_if_finished();
            }
        }
    }

    fn record_if_finished(&mut self) {
        if self.engine.state().is_over() && !self.recorded {
            self.stats.record(self.engine.state());
            self.recorded = true;
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<R: Rng>(app: App<R>) -> Result<()> {
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

fn run_app<B: ratatui::backend::Backend, R: Rng>(
    terminal: &mut Terminal<B>,
    mut app: App<R>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
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
