//! Display functions for game state and command results

use super::formatters::{create_progress_bar, share_grid};
use crate::commands::SimulationResult;
use crate::core::{LetterKnowledge, LetterVerdict, Word};
use crate::game::GameState;
use colored::{ColoredString, Colorize};

/// Keyboard rows in the order they are printed
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Color a single letter tile by its verdict
#[must_use]
pub fn colorize_letter(letter: char, verdict: LetterVerdict) -> ColoredString {
    let tile = format!(" {letter} ");
    match verdict {
        LetterVerdict::Correct => tile.black().on_green().bold(),
        LetterVerdict::WrongPosition => tile.black().on_yellow().bold(),
        LetterVerdict::Wrong => tile.white().on_bright_black(),
        LetterVerdict::Empty => tile.normal(),
    }
}

/// Render one submitted guess as colored tiles
#[must_use]
pub fn format_guess_row(guess: &Word, verdicts: &[LetterVerdict]) -> String {
    guess
        .text()
        .chars()
        .zip(verdicts.iter().copied())
        .map(|(c, v)| colorize_letter(c, v).to_string())
        .collect()
}

/// Print every submitted guess followed by the letter keyboard
pub fn print_board(state: &GameState) {
    println!();
    for (i, (guess, verdicts)) in state.guesses().iter().zip(state.verdicts()).enumerate() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            format_guess_row(guess, verdicts)
        );
    }
    println!();
    print_keyboard(state.knowledge());
    println!(
        "\n  {} of {} attempts left",
        state.remaining_attempts(),
        state.max_attempts()
    );
}

/// Print the keyboard with each key colored by what is known about it
pub fn print_keyboard(knowledge: &LetterKnowledge) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: String = row
            .chars()
            .map(|c| colorize_letter(c, knowledge.verdict_for(c)).to_string())
            .collect();
        println!("  {}{keys}", " ".repeat(indent * 2));
    }
}

/// Print the end-of-game banner, the revealed word and the share grid
pub fn print_game_over(state: &GameState) {
    println!("\n{}", "═".repeat(60).cyan());
    let message = if state.has_won() {
        format!("🎉 {}", state.message()).green().bold()
    } else {
        format!("❌ {}", state.message()).red().bold()
    };
    println!("  {message}");
    println!(
        "  The word was {}",
        state.target().text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("\n{}\n", share_grid(state));
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Outcome:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!("   Won:              {}", format!("{}", result.wins).green());
    println!("   Lost:             {}", format!("{}", result.losses).red());
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0)
            .bright_yellow()
            .bold()
    );
    if let Some(avg) = result.average_guesses_to_win() {
        println!("   Avg to win:       {avg:.2}");
    }
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Winning guess distribution:".bright_cyan().bold());
    for attempt in 1..=result.max_attempts {
        let count = result.distribution.get(&attempt).copied().unwrap_or(0);
        let pct = if result.games > 0 {
            count as f64 / result.games as f64 * 100.0
        } else {
            0.0
        };
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempt}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_row_contains_every_letter() {
        colored::control::set_override(false);
        let target = Word::new("crane").unwrap();
        let guess = Word::new("crate").unwrap();
        let verdicts = crate::core::score_guess(&target, &guess);

        assert_eq!(format_guess_row(&guess, &verdicts), " C  R  A  T  E ");
    }

    #[test]
    fn keyboard_rows_cover_alphabet() {
        let mut letters: Vec<char> = KEYBOARD_ROWS.iter().flat_map(|r| r.chars()).collect();
        letters.sort_unstable();
        let alphabet: Vec<char> = ('A'..='Z').collect();
        assert_eq!(letters, alphabet);
    }
}
