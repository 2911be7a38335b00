//! Simple interactive CLI mode
//!
//! Text-based game without TUI: the player types whole words at a prompt.

use crate::game::{InputOutcome, WordleEngine};
use crate::output::{print_board, print_game_over};
use rand::Rng;
use std::io::{self, BufRead, Write};

/// What the player asked for at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    NewGame,
    Guess(String),
}

impl Command {
    /// Interpret one line of input
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let input = line.trim();
        match input.to_ascii_lowercase().as_str() {
            "quit" | "q" | "exit" | ":q" => Self::Quit,
            "new" | ":n" => Self::NewGame,
            _ => Self::Guess(input.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(engine: &mut WordleEngine<R>) -> Result<(), String> {
    let stdin = io::stdin();
    run_simple_with(engine, &mut stdin.lock())
}

/// Game loop over any line source
///
/// # Errors
///
/// Returns an error if reading a line fails.
pub fn run_simple_with<R: Rng, I: BufRead>(
    engine: &mut WordleEngine<R>,
    input: &mut I,
) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     Wordle - Text Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_rules(engine);

    loop {
        let state = engine.state();
        let prompt = format!(
            "Guess {}/{}",
            state.guesses().len() + 1,
            state.max_attempts()
        );
        let Some(line) = read_line(input, &prompt)? else {
            println!("\n👋 Thanks for playing!\n");
            return Ok(());
        };

        match Command::parse(&line) {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::NewGame => {
                engine.reset_game();
                println!("\n🔄 New game started!\n");
                print_rules(engine);
            }
            Command::Guess(word) => {
                if !engine.is_valid_guess(&word) {
                    println!(
                        "❌ Guesses must be exactly {} letters\n",
                        engine.state().word_length()
                    );
                    continue;
                }
                if engine.enter_word(&word) != InputOutcome::Submitted {
                    println!("❌ Letters only, please\n");
                    continue;
                }

                print_board(engine.state());

                if engine.state().is_over() {
                    print_game_over(engine.state());

                    let answer = read_line(input, "Play again? (yes/no)")?.unwrap_or_default();
                    if matches!(answer.to_lowercase().as_str(), "yes" | "y") {
                        engine.reset_game();
                        println!("\n🔄 New game started!\n");
                    } else {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }
    }
}

fn print_rules<R: Rng>(engine: &WordleEngine<R>) {
    let state = engine.state();
    println!(
        "Guess the {}-letter word in {} tries.",
        state.word_length(),
        state.max_attempts()
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");
}

/// Prompt and read one line; `None` at end of input
fn read_line<I: BufRead>(input: &mut I, prompt: &str) -> Result<Option<String>, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut line = String::new();
    let read = input.read_line(&mut line).map_err(|e| e.to_string())?;
    if read == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
