//! End-to-end game scenarios driven through the public key-press interface

use wordle_game::core::LetterVerdict::{self, Correct, Wrong, WrongPosition};
use wordle_game::core::Word;
use wordle_game::game::{
    GameState, GameStatus, InputOutcome, Key, LOSS_MESSAGE, WIN_MESSAGE, WordleEngine, transition,
};
use wordle_game::wordlists::WordList;

fn engine_for(target: &str, max_attempts: usize) -> WordleEngine {
    let words = WordList::new(&[target], target.len()).unwrap();
    WordleEngine::seeded(words, max_attempts, 0).unwrap()
}

fn press_all(engine: &mut WordleEngine, keys: &str) {
    for c in keys.chars() {
        engine.handle_input(Key::Letter(c));
    }
}

fn submit(engine: &mut WordleEngine, word: &str) -> InputOutcome {
    press_all(engine, word);
    engine.handle_input(Key::Enter)
}

#[test]
fn crane_scenario() {
    let mut engine = engine_for("CRANE", 6);

    assert_eq!(submit(&mut engine, "CRATE"), InputOutcome::Submitted);
    assert_eq!(
        engine.state().verdicts()[0],
        vec![Correct, Correct, Correct, Wrong, Correct]
    );
    assert_eq!(engine.state().status(), GameStatus::InProgress);

    assert_eq!(submit(&mut engine, "CRANE"), InputOutcome::Submitted);
    assert_eq!(engine.state().verdicts()[1], vec![Correct; 5]);
    assert_eq!(engine.state().status(), GameStatus::Won);
    assert_eq!(engine.state().message(), WIN_MESSAGE);
}

#[test]
fn apple_six_misses_lose() {
    let mut engine = engine_for("APPLE", 6);
    let misses = ["CRANE", "SLATE", "PLUMB", "GHOST", "WORDY", "FIZZY"];

    for (i, guess) in misses.iter().enumerate() {
        assert_eq!(engine.state().status(), GameStatus::InProgress);
        submit(&mut engine, guess);
        assert_eq!(engine.state().guesses().len(), i + 1);
    }

    assert_eq!(engine.state().status(), GameStatus::Lost);
    assert!(engine.has_lost());
    assert_eq!(engine.state().message(), LOSS_MESSAGE);
}

#[test]
fn win_on_final_attempt() {
    let mut engine = engine_for("APPLE", 6);
    for guess in ["CRANE", "SLATE", "PLUMB", "GHOST", "WORDY"] {
        submit(&mut engine, guess);
    }
    submit(&mut engine, "APPLE");

    assert_eq!(engine.state().guesses().len(), 6);
    assert!(engine.has_won());
    assert!(!engine.has_lost());
}

#[test]
fn backspace_scenario() {
    let mut engine = engine_for("CRANE", 6);
    press_all(&mut engine, "AB");
    engine.handle_input(Key::Backspace);
    assert_eq!(engine.state().buffer(), "A");

    engine.handle_input(Key::Backspace);
    assert_eq!(engine.state().buffer(), "");
    assert_eq!(engine.handle_input(Key::Backspace), InputOutcome::Ignored);
    assert_eq!(engine.state().buffer(), "");
}

#[test]
fn no_op_inputs_leave_state_unchanged() {
    let mut engine = engine_for("CRANE", 6);

    let before = engine.state().clone();
    engine.handle_input(Key::Backspace);
    engine.handle_input(Key::Enter);
    assert_eq!(engine.state(), &before);

    press_all(&mut engine, "CRA");
    let before = engine.state().clone();
    engine.handle_input(Key::Enter);
    assert_eq!(engine.state(), &before);

    press_all(&mut engine, "NE");
    let before = engine.state().clone();
    engine.handle_input(Key::Letter('S'));
    assert_eq!(engine.state(), &before);
}

#[test]
fn terminal_states_are_stable() {
    let cases = [
        ("CRANE", &["CRANE"][..]),
        ("APPLE", &["CRANE", "SLATE"][..]),
    ];
    for (target, guesses) in cases {
        let mut engine = engine_for(target, 2);
        for guess in guesses {
            submit(&mut engine, guess);
        }
        assert!(engine.state().is_over());

        let before = engine.state().clone();
        for key in ["A", "ENTER", "BACKSPACE", "Z", "ENTER"] {
            let key: Key = key.parse().unwrap();
            assert_eq!(engine.handle_input(key), InputOutcome::Ignored);
        }
        press_all(&mut engine, target);
        engine.handle_input(Key::Enter);
        assert_eq!(engine.state(), &before);
    }
}

#[test]
fn letter_knowledge_is_monotonic() {
    let mut engine = engine_for("CRANE", 6);
    let guesses = ["NACRE", "RECAN", "CRONE", "BRAVE", "CRANE"];

    let mut previous: Vec<(u8, LetterVerdict)> = Vec::new();
    for guess in guesses {
        submit(&mut engine, guess);
        let knowledge = engine.state().knowledge();
        for &(letter, verdict) in &previous {
            let now = knowledge.get(letter).unwrap();
            assert!(now >= verdict);
        }
        previous = knowledge.iter().collect();
    }

    let knowledge = engine.state().knowledge();
    for letter in "CRANE".bytes() {
        assert_eq!(knowledge.get(letter), Some(Correct));
    }
    assert_eq!(knowledge.get(b'O'), Some(Wrong));
}

#[test]
fn duplicate_letters_all_marked_misplaced() {
    // The scorer does not consume matched letters
    let mut engine = engine_for("CRANE", 6);
    submit(&mut engine, "ERASE");
    assert_eq!(
        engine.state().verdicts()[0],
        vec![WrongPosition, Correct, Correct, Wrong, Correct]
    );
}

#[test]
fn pure_transition_threads_owned_state() {
    let start = GameState::new(Word::new("crane").unwrap(), 6);
    let keys = ["C", "R", "A", "N", "E", "ENTER"];

    let end = keys
        .iter()
        .map(|k| k.parse::<Key>().unwrap())
        .fold(start, transition);

    assert!(end.has_won());
    assert_eq!(end.guesses().len(), 1);
}

#[test]
fn independent_engines_do_not_share_state() {
    let mut a = engine_for("CRANE", 6);
    let b = engine_for("CRANE", 6);

    submit(&mut a, "SLATE");
    assert_eq!(a.state().guesses().len(), 1);
    assert!(b.state().guesses().is_empty());
}

#[test]
fn other_word_lengths() {
    let mut engine = engine_for("PUMPKIN", 3);
    assert_eq!(engine.state().word_length(), 7);

    assert_eq!(submit(&mut engine, "CRANE"), InputOutcome::Ignored);
    // Rejected submit keeps the typed letters
    assert_eq!(engine.state().buffer(), "CRANE");
    press_all(&mut engine, "RS");
    engine.handle_input(Key::Enter);
    assert_eq!(engine.state().guesses().len(), 1);
    assert_eq!(engine.state().verdicts()[0].len(), 7);
}

#[test]
fn enter_word_never_commits_a_malformed_guess() {
    let mut engine = engine_for("CRANE", 6);
    let before = engine.state().clone();

    for word in ["cranes", "cra9ne", "crane!", "cran"] {
        assert_eq!(engine.enter_word(word), InputOutcome::Ignored, "{word}");
    }
    assert_eq!(engine.state(), &before);

    press_all(&mut engine, "C");
    assert_eq!(engine.enter_word("rane"), InputOutcome::Ignored);
    assert_eq!(engine.state().buffer(), "C");
    assert!(engine.state().guesses().is_empty());
}
