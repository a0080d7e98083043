//! Wordle Helper - CLI
//!
//! Wordle helper with TUI and CLI modes: filters a word list by guess colours
//! and ranks the remaining candidates.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use wordle_helper::{
    commands::{
        SolveConfig, filter_words, rank_by_consonant_score, run_benchmark, run_simple, solve_word,
    },
    core::Word,
    output::{
        print_benchmark_result, print_consonant_ranking, print_filter_result,
        print_letter_ranking, print_solve_result,
    },
    scoring::letter_ranking,
    solver::Solver,
    wordlists::{WordSource, loader::load_or_empty},
};

#[derive(Parser)]
#[command(
    name = "wordle_helper",
    about = "Wordle helper: filter words by guess colours and rank what is left",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: URL (http/https) or path to a file with one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Show debug logs on stderr
    #[arg(short = 'v', long = "log-debug", global = true)]
    log_debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive helper without TUI)
    Simple,

    /// List ranked candidates for some guesses
    Filter {
        /// A guess with its colours, e.g. slate:Y-G-- (repeatable)
        #[arg(short, long = "row")]
        rows: Vec<String>,

        /// Show at most this many candidates
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Rank the whole word list by consonant score alone
    Rank {
        /// Show at most this many words
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Lowest scores first
        #[arg(short, long)]
        ascending: bool,
    },

    /// Vowel and consonant frequency across the word list
    Letters,

    /// Play the helper's suggestions against a target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and scores per turn
        #[arg(long)]
        verbose: bool,
    },

    /// Benchmark the helper over the start of the word list
    Benchmark {
        /// Number of words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the default level
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // logs would draw over the alternate screen
    let default_level = match (&command, cli.log_debug) {
        (_, true) => "debug",
        (Commands::Play, false) => "warn",
        _ => "info",
    };
    init_tracing(default_level);

    let source = cli
        .wordlist
        .as_deref()
        .map(WordSource::parse)
        .unwrap_or_default();
    let words = load_or_empty(&source);
    let solver = Solver::new(&words);

    match command {
        Commands::Play => run_play_command(&words),
        Commands::Simple => run_simple(&solver),
        Commands::Filter { rows, limit } => {
            let result = filter_words(&rows, limit, &solver).map_err(|e| anyhow!(e))?;
            print_filter_result(&result);
            Ok(())
        }
        Commands::Rank { limit, ascending } => {
            let ranked = rank_by_consonant_score(&words, ascending, Some(limit));
            print_consonant_ranking(&ranked);
            Ok(())
        }
        Commands::Letters => {
            print_letter_ranking(&letter_ranking(&words), words.len());
            Ok(())
        }
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &solver),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, &solver, &words);
            Ok(())
        }
    }
}

fn run_solve_command(word: &str, verbose: bool, solver: &Solver<'_>) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let result = solve_word(&config, solver).map_err(|e| anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: usize, solver: &Solver<'_>, words: &[Word]) {
    println!("Running benchmark on {count} words...");

    // Take first N words from the list
    let test_words: Vec<Word> = words.iter().take(count).cloned().collect();

    let result = run_benchmark(solver, &test_words, true);
    print_benchmark_result(&result);
}

fn run_play_command(words: &[Word]) -> Result<()> {
    use wordle_helper::interactive::{App, run_tui};

    let app = App::new(words);
    run_tui(app)
}
