//! Wordle Game - CLI
//!
//! Play Wordle in a TUI or plain text mode, or simulate random games.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use wordle_game::{
    commands::{SimulationConfig, run_simple, run_simulation},
    config::GameConfig,
    game::WordleEngine,
    output::print_simulation_result,
    wordlists::{WORDS, WordList, loader::word_list_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden word in a limited number of tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Config file (default: `<config dir>/wordle_game/config.toml`)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,

    /// Number of letters per word
    #[arg(short = 'l', long, global = true)]
    word_length: Option<usize>,

    /// Number of guesses allowed
    #[arg(short = 'a', long, global = true)]
    max_attempts: Option<usize>,

    /// Seed for target selection (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Write logs to this directory (TUI mode logs nowhere otherwise)
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,
}

#[derive(Clone, Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (type whole words at a prompt)
    Simple,

    /// Play many random games and report the outcome
    Simulate {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "1000")]
        games: usize,
    },
}

/// Initialize tracing
///
/// TUI mode must never write to the terminal, so it only logs to a file when
/// `--log-dir` is given. Text modes log to stderr unless a directory is given.
fn init_logging(log_dir: Option<&Path>, tui: bool) -> Result<Option<WorkerGuard>> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)?;
        let file_appender = tracing_appender::rolling::never(dir, "wordle_game.log");
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .init();
        return Ok(Some(guard));
    }

    if !tui {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(None)
}

/// Resolve settings: config file first, command-line flags on top
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load(cli.config.as_deref())?;

    if let Some(word_length) = cli.word_length {
        config.word_length = word_length;
    }
    if let Some(max_attempts) = cli.max_attempts {
        config.max_attempts = max_attempts;
    }
    if let Some(wordlist) = &cli.wordlist {
        config.word_list = Some(wordlist.clone());
    }

    config.validate()?;
    Ok(config)
}

fn load_words(config: &GameConfig) -> Result<WordList> {
    let words = match &config.word_list {
        Some(path) => word_list_from_file(path, config.word_length)?,
        None => WordList::new(WORDS, config.word_length)?,
    };
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.clone().unwrap_or(Commands::Play);
    let _guard = init_logging(cli.log_dir.as_deref(), matches!(command, Commands::Play))?;

    let config = load_config(&cli)?;
    let words = load_words(&config)?;

    match command {
        Commands::Play => run_play_command(words, &config, cli.seed),
        Commands::Simple => run_simple_command(words, &config, cli.seed),
        Commands::Simulate { games } => {
            run_simulate_command(&words, &config, games, cli.seed);
            Ok(())
        }
    }
}

fn build_engine(words: WordList, config: &GameConfig, seed: Option<u64>) -> Result<WordleEngine> {
    let engine = match seed {
        Some(seed) => WordleEngine::seeded(words, config.max_attempts, seed)?,
        None => WordleEngine::new(words, config.max_attempts)?,
    };
    Ok(engine)
}

fn run_play_command(words: WordList, config: &GameConfig, seed: Option<u64>) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let engine = build_engine(words, config, seed)?;
    run_tui(App::new(engine))
}

fn run_simple_command(words: WordList, config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let mut engine = build_engine(words, config, seed)?;
    run_simple(&mut engine).map_err(|e| anyhow::anyhow!(e))
}

fn run_simulate_command(words: &WordList, config: &GameConfig, games: usize, seed: Option<u64>) {
    println!(
        "Simulating {games} games with random guesses ({} words, {} attempts)...",
        words.len(),
        config.max_attempts
    );

    let sim_config = SimulationConfig {
        games,
        max_attempts: config.max_attempts,
        seed: seed.unwrap_or_else(rand::random),
        show_progress: true,
    };
    let result = run_simulation(words, &sim_config);
    print_simulation_result(&result);
}
