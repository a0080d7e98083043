//! Word solving command
//!
//! Plays the helper against a known target: each turn it guesses the
//! top-ranked candidate, scores the guess against the target, and records the
//! resulting colours as evidence.

use crate::core::{EvidenceSnapshot, Feedback, Word};
use crate::solver::Solver;
use tracing::debug;

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: 6,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: Word,
    pub feedback: Feedback,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word by always playing the best-ranked candidate
///
/// # Errors
///
/// Returns an error if:
/// - The target word is invalid (not 5 letters or contains non-ASCII)
/// - The target is not in the solver's word list
pub fn solve_word(config: &SolveConfig, solver: &Solver<'_>) -> Result<SolveResult, String> {
    let target =
        Word::new(config.target.as_str()).map_err(|e| format!("Invalid target word: {e}"))?;
    if !solver.contains(&target) {
        return Err(format!("Word '{}' not in word list", config.target));
    }

    let mut evidence = EvidenceSnapshot::new();
    let mut guesses: Vec<GuessStep> = Vec::new();

    for _ in 0..config.max_guesses {
        let ranked = solver.suggest(&evidence);
        let candidates_before = ranked.len();
        // a word that only drew greens and repeated-letter grays can still be a candidate
        let Some(guess) = ranked
            .into_iter()
            .find(|word| guesses.iter().all(|step| step.word != *word))
        else {
            break;
        };

        let feedback = Feedback::calculate(&guess, &target);
        evidence.record_row(&guess, &feedback);
        let candidates_after = solver.count_candidates(&evidence);
        debug!(guess = %guess, feedback = %feedback.to_emoji(), candidates_after, "turn played");

        guesses.push(GuessStep {
            word: guess,
            feedback,
            candidates_before,
            candidates_after,
        });

        if feedback.is_perfect() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target: target.text().to_string(),
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target: target.text().to_string(),
    })
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
    fn solve_word_succeeds() {
        let words = word_list();
        let solver = Solver::new(&words);

        let result = solve_word(&SolveConfig::new("grate".to_string()), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.target, "grate");
        assert_eq!(result.guesses.last().unwrap().word.text(), "grate");
    }

    #[test]
    fn solve_records_shrinking_candidates() {
        let words = word_list();
        let solver = Solver::new(&words);

        let result = solve_word(&SolveConfig::new("pious".to_string()), &solver).unwrap();

        assert!(!result.guesses.is_empty());
        assert_eq!(result.guesses[0].candidates_before, words.len());
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(
                step.candidates_after >= 1,
                "the target always stays a candidate"
            );
        }
    }

    #[test]
    fn every_word_in_list_is_eventually_found() {
        let words = word_list();
        let solver = Solver::new(&words);
        let mut config = SolveConfig::new(String::new());
        config.max_guesses = words.len();

        for target in &words {
            config.target = target.text().to_string();
            let result = solve_word(&config, &solver).unwrap();
            assert!(result.success, "failed to find {target}");
        }
    }

    #[test]
    fn solve_invalid_target_returns_error() {
        let words = word_list();
        let solver = Solver::new(&words);

        assert!(solve_word(&SolveConfig::new("zzzzz".to_string()), &solver).is_err());
        assert!(solve_word(&SolveConfig::new("toolong".to_string()), &solver).is_err());
    }

    #[test]
    fn solve_with_max_guesses_limit() {
        let words = word_list();
        let solver = Solver::new(&words);
        let mut config = SolveConfig::new("pious".to_string());
        config.max_guesses = 1;

        let result = solve_word(&config, &solver).unwrap();
        assert_eq!(result.guesses.len(), 1);
    }
}
