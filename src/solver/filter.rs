//! Constraint filter
//!
//! Three independent predicates over a candidate word. Each one only looks at
//! its own colour of evidence; a word survives when it passes all three.

use crate::core::{EvidenceSnapshot, Word};
use tracing::debug;

/// Every known green position holds exactly its letter
#[must_use]
pub fn matches_green(word: &Word, evidence: &EvidenceSnapshot) -> bool {
    evidence
        .green_by_position()
        .iter()
        .zip(word.chars())
        .all(|(green, &letter)| green.is_none_or(|g| g == letter))
}

/// Every yellow letter is present, but at none of its yellow positions
#[must_use]
pub fn matches_yellow(word: &Word, evidence: &EvidenceSnapshot) -> bool {
    evidence
        .yellow_positions_by_letter()
        .iter()
        .all(|(&letter, positions)| {
            word.has_letter(letter)
                && positions
                    .iter()
                    .all(|&position| word.chars().get(position) != Some(&letter))
        })
}

/// No excluded gray letter appears anywhere
///
/// Gray letters that are also green or yellow somewhere are skipped.
#[must_use]
pub fn matches_gray(word: &Word, evidence: &EvidenceSnapshot) -> bool {
    evidence
        .excluded_letters()
        .all(|letter| !word.has_letter(letter))
}

/// Whether a word is consistent with all of the evidence
#[must_use]
pub fn is_candidate(word: &Word, evidence: &EvidenceSnapshot) -> bool {
    matches_green(word, evidence) && matches_yellow(word, evidence) && matches_gray(word, evidence)
}

/// Narrow a word list to the words consistent with the evidence
///
/// Input order is preserved. Empty evidence returns the whole list;
/// contradictory evidence returns an empty one.
///
/// # Examples
/// ```
/// use wordle_helper::core::{EvidenceSnapshot, LetterStatus, Word};
/// use wordle_helper::solver::filter_candidates;
///
/// let words: Vec<Word> = ["crane", "slate", "adieu", "route"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let mut evidence = EvidenceSnapshot::new();
/// evidence.record(0, b'c', LetterStatus::Green);
///
/// let remaining = filter_candidates(&words, &evidence);
/// assert_eq!(remaining, vec![Word::new("crane").unwrap()]);
/// ```
#[must_use]
pub fn filter_candidates(words: &[Word], evidence: &EvidenceSnapshot) -> Vec<Word> {
    let remaining: Vec<Word> = words
        .iter()
        .filter(|word| matches_green(word, evidence))
        .filter(|word| matches_yellow(word, evidence))
        .filter(|word| matches_gray(word, evidence))
        .cloned()
        .collect();
    debug!(
        total = words.len(),
        remaining = remaining.len(),
        "filtered word list"
    );
    remaining
}
