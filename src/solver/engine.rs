//! Main helper interface

use super::filter::filter_candidates;
use super::ranking::rank_candidates;
use crate::core::{EvidenceSnapshot, Feedback, Word};

/// Filter then rank: the ordered list of remaining candidates
///
/// # Examples
/// ```
/// use wordle_helper::core::{EvidenceSnapshot, Feedback, Word};
/// use wordle_helper::solver::suggest;
///
/// let words: Vec<Word> = ["slate", "stale", "least", "steal"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let evidence = EvidenceSnapshot::from_rows(&[(
///     Word::new("sound").unwrap(),
///     Feedback::parse("Y----").unwrap(),
/// )]);
/// assert_eq!(suggest(&words, &evidence), vec![Word::new("least").unwrap()]);
/// ```
#[must_use]
pub fn suggest(words: &[Word], evidence: &EvidenceSnapshot) -> Vec<Word> {
    rank_candidates(&filter_candidates(words, evidence))
}

/// Wordle helper bound to one word list
///
/// Holds no evidence of its own; every query takes the snapshot explicitly.
pub struct Solver<'a> {
    words: &'a [Word],
}

impl<'a> Solver<'a> {
    #[must_use]
    pub const fn new(words: &'a [Word]) -> Self {
        Self { words }
    }

    /// The full word list
    #[must_use]
    pub const fn words(&self) -> &'a [Word] {
        self.words
    }

    /// Check if a word is in the word list
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    /// Candidates consistent with the evidence, in word-list order
    #[must_use]
    pub fn candidates(&self, evidence: &EvidenceSnapshot) -> Vec<Word> {
        filter_candidates(self.words, evidence)
    }

    /// Count how many candidates remain for the evidence
    #[must_use]
    pub fn count_candidates(&self, evidence: &EvidenceSnapshot) -> usize {
        self.candidates(evidence).len()
    }

    /// Ranked candidates, best first
    #[must_use]
    pub fn suggest(&self, evidence: &EvidenceSnapshot) -> Vec<Word> {
        suggest(self.words, evidence)
    }

    /// The top-ranked candidate after the given guess history
    ///
    /// Returns None if no candidates remain.
    #[must_use]
    pub fn next_guess(&self, history: &[(Word, Feedback)]) -> Option<Word> {
        let evidence = EvidenceSnapshot::from_rows(history);
        self.suggest(&evidence).into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;
    use crate::wordlists::loader::words_from_slice;

    fn setup_words() -> Vec<Word> {
        words_from_slice(&[
            "crane", "slate", "irate", "crate", "grate", "adieu", "route",
        ])
    }

    #[test]
    fn next_guess_with_empty_history_is_best_ranked_word() {
        let words = setup_words();
        let solver = Solver::new(&words);

        let guess = solver.next_guess(&[]).unwrap();
        assert_eq!(guess, rank_candidates(&words)[0]);
    }

    #[test]
    fn next_guess_is_consistent_with_history() {
        let words = setup_words();
        let solver = Solver::new(&words);
        let answer = Word::new("grate").unwrap();

        let guess = Word::new("crane").unwrap();
        let history = vec![(guess.clone(), Feedback::calculate(&guess, &answer))];

        let next = solver.next_guess(&history).unwrap();
        let evidence = EvidenceSnapshot::from_rows(&history);
        assert!(solver.candidates(&evidence).contains(&next));
    }

    #[test]
    fn next_guess_returns_none_when_no_candidates() {
        let words = setup_words();
        let solver = Solver::new(&words);

        let guess = Word::new("zzzzz").unwrap();
        let history = vec![(guess, Feedback::PERFECT)];
        assert!(solver.next_guess(&history).is_none());
    }

    #[test]
    fn count_candidates_never_grows() {
        let words = setup_words();
        let solver = Solver::new(&words);
        let mut evidence = EvidenceSnapshot::new();
        assert_eq!(solver.count_candidates(&evidence), words.len());

        evidence.record(1, b'r', LetterStatus::Green);
        let after_one = solver.count_candidates(&evidence);
        assert_eq!(after_one, 4); // crane, irate, crate, grate

        evidence.record(0, b'c', LetterStatus::Gray);
        assert_eq!(solver.count_candidates(&evidence), 2); // irate, grate
    }

    #[test]
    fn suggest_filters_then_ranks() {
        let words = setup_words();
        let solver = Solver::new(&words);
        let mut evidence = EvidenceSnapshot::new();
        evidence.record(1, b'r', LetterStatus::Green);

        let ranked = solver.suggest(&evidence);
        assert_eq!(ranked, rank_candidates(&solver.candidates(&evidence)));
    }

    #[test]
    fn empty_word_list_degrades_to_no_candidates() {
        let words: Vec<Word> = Vec::new();
        let solver = Solver::new(&words);
        assert!(solver.suggest(&EvidenceSnapshot::new()).is_empty());
        assert!(solver.next_guess(&[]).is_none());
    }
}
