//! Filter command
//!
//! Builds an evidence snapshot from `WORD:FEEDBACK` rows given on the command
//! line and lists the ranked candidates that remain.

use crate::core::{EvidenceSnapshot, Feedback, Word};
use crate::solver::Solver;

/// Result of filtering the word list against some guess rows
pub struct FilterResult {
    pub rows: Vec<(Word, Feedback)>,
    /// Number of candidates before `limit` was applied
    pub total_candidates: usize,
    /// Ranked candidates, best first, at most `limit` of them
    pub candidates: Vec<Word>,
}

/// Parse one `WORD:FEEDBACK` row, e.g. `slate:Y-G--`
///
/// # Errors
///
/// Returns an error if the separator is missing, the word is not five
/// letters, or the feedback is not five valid marks.
///
/// # Examples
/// ```
/// use wordle_helper::commands::parse_row;
/// use wordle_helper::core::LetterStatus;
///
/// let (word, feedback) = parse_row("slate:Y-G--").unwrap();
/// assert_eq!(word.text(), "slate");
/// assert_eq!(feedback.status_at(2), LetterStatus::Green);
/// ```
pub fn parse_row(row: &str) -> Result<(Word, Feedback), String> {
    let (word, marks) = row
        .split_once(':')
        .ok_or_else(|| format!("Row '{row}' must look like WORD:FEEDBACK"))?;
    let word = Word::new(word.trim()).map_err(|e| format!("Invalid word in '{row}': {e}"))?;
    let feedback =
        Feedback::parse(marks.trim()).map_err(|e| format!("Invalid feedback in '{row}': {e}"))?;
    Ok((word, feedback))
}

/// Filter and rank the solver's word list against the given rows
///
/// # Errors
///
/// Returns an error if any row fails to parse.
pub fn filter_words(
    rows: &[String],
    limit: Option<usize>,
    solver: &Solver<'_>,
) -> Result<FilterResult, String> {
    let rows = rows
        .iter()
        .map(|row| parse_row(row))
        .collect::<Result<Vec<_>, _>>()?;

    let evidence = EvidenceSnapshot::from_rows(&rows);
    let mut candidates = solver.suggest(&evidence);
    let total_candidates = candidates.len();
    if let Some(limit) = limit {
        candidates.truncate(limit);
    }

    Ok(FilterResult {
        rows,
        total_candidates,
        candidates,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::wordlists::loader::words_from_slice;

    fn word_list() -> Vec<Word> {
        words_from_slice(&[
            "crane", "slate", "adieu", "route", "stale", "least", "steal",
        ])
    }

    #[test]
    fn parse_row_accepts_word_and_marks() {
        let (word, feedback) = parse_row("CRANE:g-y--").unwrap();
        assert_eq!(word.text(), "crane");
        assert_eq!(feedback.status_at(0), LetterStatus::Green);
        assert_eq!(feedback.status_at(2), LetterStatus::Yellow);
    }

    #[test]
    fn parse_row_rejects_malformed_rows() {
        assert!(parse_row("crane").is_err());
        assert!(parse_row("cran:G----").is_err());
        assert!(parse_row("crane:G---").is_err());
        assert!(parse_row("crane:GXY--").is_err());
    }

    #[test]
    fn no_rows_keeps_every_word() {
        let words = word_list();
        let solver = Solver::new(&words);
        let result = filter_words(&[], None, &solver).unwrap();
        assert_eq!(result.total_candidates, words.len());
        assert_eq!(result.candidates.len(), words.len());
    }

    #[test]
    fn rows_narrow_the_candidates() {
        let words = word_list();
        let solver = Solver::new(&words);
        let result = filter_words(&["crane:G----".to_string()], None, &solver).unwrap();
        assert!(result.candidates.is_empty());

        let result = filter_words(&["sound:Y----".to_string()], None, &solver).unwrap();
        assert_eq!(result.candidates, words_from_slice(&["least"]));
    }

    #[test]
    fn limit_truncates_but_keeps_total() {
        let words = word_list();
        let solver = Solver::new(&words);
        let result = filter_words(&[], Some(2), &solver).unwrap();
        assert_eq!(result.total_candidates, words.len());
        assert_eq!(result.candidates.len(), 2);
    }

    #[test]
    fn bad_row_is_reported() {
        let words = word_list();
        let solver = Solver::new(&words);
        assert!(filter_words(&["nope".to_string()], None, &solver).is_err());
    }
}
