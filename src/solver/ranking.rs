//! Candidate ranking
//!
//! The reference ordering is four stable sorts applied one after another,
//! each descending: vowel score, distinct vowels, consonant score, distinct
//! consonants. With stable sorts the last pass decides first, so the effective
//! priority is:
//!
//! 1. distinct consonants
//! 2. consonant score
//! 3. distinct vowels
//! 4. vowel score
//! 5. original list order
//!
//! `RankKey` encodes that priority as a single comparable key, so ranking is
//! one stable sort instead of four.

use crate::core::Word;
use crate::scoring::{consonant_score, unique_consonant_count, unique_vowel_count, vowel_score};
use std::cmp::Reverse;
use tracing::debug;

/// Sort key for one candidate; smaller keys rank first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RankKey {
    unique_consonants: Reverse<usize>,
    consonant_score: Reverse<u32>,
    unique_vowels: Reverse<usize>,
    vowel_score: Reverse<u32>,
}

impl RankKey {
    #[must_use]
    pub fn of(word: &Word) -> Self {
        Self {
            unique_consonants: Reverse(unique_consonant_count(word)),
            consonant_score: Reverse(consonant_score(word)),
            unique_vowels: Reverse(unique_vowel_count(word)),
            vowel_score: Reverse(vowel_score(word)),
        }
    }
}

/// Order candidates best first
///
/// Equal keys keep their input order.
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::solver::rank_candidates;
///
/// let words: Vec<Word> = ["adieu", "crwth", "slate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let ranked = rank_candidates(&words);
/// assert_eq!(ranked[0].text(), "crwth");
/// ```
#[must_use]
pub fn rank_candidates(words: &[Word]) -> Vec<Word> {
    let mut ranked = words.to_vec();
    ranked.sort_by_cached_key(RankKey::of);
    debug!(count = ranked.len(), "ranked candidates");
    ranked
}
