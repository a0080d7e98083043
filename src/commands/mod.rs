//! Command implementations

pub mod benchmark;
pub mod filter;
pub mod rank;
pub mod simple;
pub mod solve;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use filter::{FilterResult, filter_words, parse_row};
pub use rank::{ScoredWord, rank_by_consonant_score};
pub use simple::{run_simple, run_simple_with};
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
