//! Benchmark command
//!
//! Plays the helper against many target words and reports how many guesses
//! it needed. Games are independent, so they run in parallel.

use super::solve::{SolveConfig, solve_word};
use crate::core::Word;
use crate::solver::Solver;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tracing::warn;

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub failed: Vec<String>,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of games solved in that many guesses
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run benchmark on a set of target words
///
/// Each game is limited to six guesses. The average only covers solved games.
#[must_use]
pub fn run_benchmark(
    solver: &Solver<'_>,
    target_words: &[Word],
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();

    let progress = if show_progress {
        let pb = ProgressBar::new(target_words.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let outcomes: Vec<(String, Option<usize>)> = target_words
        .par_iter()
        .map(|target| {
            let config = SolveConfig::new(target.text().to_string());
            let outcome = match solve_word(&config, solver) {
                Ok(result) if result.success => Some(result.guesses.len()),
                Ok(_) => None,
                Err(e) => {
                    warn!(word = %target, "benchmark game skipped: {e}");
                    None
                }
            };
            progress.inc(1);
            (target.text().to_string(), outcome)
        })
        .collect();
    progress.finish_and_clear();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut failed = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;

    for (word, outcome) in outcomes {
        match outcome {
            Some(guesses) => {
                total_guesses += guesses;
                min_guesses = min_guesses.min(guesses);
                max_guesses = max_guesses.max(guesses);
                *distribution.entry(guesses).or_insert(0) += 1;
            }
            None => failed.push(word),
        }
    }

    let solved_count = target_words.len() - failed.len();
    let duration = start.elapsed();

    BenchmarkResult {
        total_words: target_words.len(),
        solved: solved_count,
        failed,
        total_guesses,
        average_guesses: if solved_count > 0 {
            total_guesses as f64 / solved_count as f64
        } else {
            0.0
        },
        min_guesses: if solved_count > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        words_per_second: target_words.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word_list() -> Vec<Word> {
        words_from_slice(&[
            "crane", "slate", "irate", "crate", "grate", "adieu", "route", "least", "steal",
            "stale", "badge", "manna", "sauce", "rouse", "audio", "pious",
        ])
    }

    #[test]
    fn benchmark_runs() {
        let words = word_list();
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words[..10], false);

        assert_eq!(result.total_words, 10);
        assert!(result.total_guesses > 0);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses >= 1);
        assert!(result.max_guesses <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let words = word_list();
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        assert_eq!(result.solved + result.failed.len(), result.total_words);
    }

    #[test]
    fn benchmark_counts_unknown_targets_as_failed() {
        let words = word_list();
        let solver = Solver::new(&words);
        let targets = words_from_slice(&["crane", "zesty"]);
        let result = run_benchmark(&solver, &targets, false);

        assert_eq!(result.solved, 1);
        assert_eq!(result.failed, vec!["zesty".to_string()]);
    }

    #[test]
    fn benchmark_empty_word_list() {
        let words = word_list();
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &[], false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.total_guesses, 0);
        assert_eq!(result.min_guesses, 0);
    }

    #[test]
    fn benchmark_metrics_consistency() {
        let words = word_list();
        let solver = Solver::new(&words);
        let result = run_benchmark(&solver, &words, false);

        assert!(result.average_guesses >= result.min_guesses as f64);
        assert!(result.average_guesses <= result.max_guesses as f64);
        for &guess_count in result.distribution.keys() {
            assert!((1..=6).contains(&guess_count));
        }
    }
}
