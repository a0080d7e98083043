//! Consonant-score ranking of the whole word list
//!
//! A diagnostic view of a single sort pass: words ordered by consonant score
//! alone, with the score shown next to each word.

use crate::core::Word;
use crate::scoring::{consonant_score, sort_by_consonant_score};

/// One ranked word and its consonant score
pub struct ScoredWord {
    pub word: Word,
    pub score: u32,
}

/// Words ordered by consonant score
///
/// Descending unless `ascending` is set; ties keep word-list order. `limit`
/// caps the number of rows returned.
#[must_use]
pub fn rank_by_consonant_score(
    words: &[Word],
    ascending: bool,
    limit: Option<usize>,
) -> Vec<ScoredWord> {
    sort_by_consonant_score(words, ascending)
        .into_iter()
        .take(limit.unwrap_or(usize::MAX))
        .map(|word| ScoredWord {
            score: consonant_score(&word),
            word,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    #[test]
    fn descending_puts_heaviest_consonants_first() {
        let words = words_from_slice(&["adieu", "slate", "crwth"]);
        let ranked = rank_by_consonant_score(&words, false, None);

        let order: Vec<&str> = ranked.iter().map(|s| s.word.text()).collect();
        assert_eq!(order, vec!["crwth", "slate", "adieu"]);
        assert_eq!(ranked[0].score, 12 + 20 + 7 + 18 + 11);
        assert_eq!(ranked[1].score, 21 + 19 + 18);
        assert_eq!(ranked[2].score, 16);
    }

    #[test]
    fn ascending_and_limit() {
        let words = words_from_slice(&["adieu", "slate", "crwth"]);
        let ranked = rank_by_consonant_score(&words, true, Some(1));

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].word.text(), "adieu");
    }

    #[test]
    fn empty_list_ranks_nothing() {
        assert!(rank_by_consonant_score(&[], false, Some(5)).is_empty());
    }
}
