//! Stable single-key sorts over word lists
//!
//! Each function returns a new vector and leaves its input untouched. All of
//! them use `slice::sort_by_key`, which is stable: words with equal scores keep
//! their relative input order. They are meant to be composed, one pass at a
//! time.

use super::tables::{consonant_score, unique_consonant_count, unique_vowel_count, vowel_score};
use crate::core::Word;
use std::cmp::Reverse;

fn sorted_by<K: Ord>(words: &[Word], ascending: bool, key: impl Fn(&Word) -> K) -> Vec<Word> {
    let mut sorted = words.to_vec();
    if ascending {
        sorted.sort_by_key(|word| key(word));
    } else {
        sorted.sort_by_key(|word| Reverse(key(word)));
    }
    sorted
}

/// Sort by summed vowel weight
///
/// # Examples
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::scoring::sort_by_vowel_score;
///
/// let words: Vec<Word> = ["sauce", "rouse", "route"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let best_first = sort_by_vowel_score(&words, false);
/// assert_eq!(best_first[0].text(), "sauce");
/// ```
#[must_use]
pub fn sort_by_vowel_score(words: &[Word], ascending: bool) -> Vec<Word> {
    sorted_by(words, ascending, vowel_score)
}

/// Sort by summed consonant weight
#[must_use]
pub fn sort_by_consonant_score(words: &[Word], ascending: bool) -> Vec<Word> {
    sorted_by(words, ascending, consonant_score)
}

/// Sort by number of distinct vowels
#[must_use]
pub fn sort_by_unique_vowel_count(words: &[Word], ascending: bool) -> Vec<Word> {
    sorted_by(words, ascending, unique_vowel_count)
}

/// Sort by number of distinct consonants
#[must_use]
pub fn sort_by_unique_consonant_count(words: &[Word], ascending: bool) -> Vec<Word> {
    sorted_by(words, ascending, unique_consonant_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn texts(list: &[Word]) -> Vec<&str> {
        list.iter().map(Word::text).collect()
    }

    #[test]
    fn vowel_score_directions_are_exact_reverses() {
        // sauce = 10, rouse = 9, crwth = 0
        let input = words(&["sauce", "rouse", "crwth"]);
        let ascending = sort_by_vowel_score(&input, true);
        let mut descending = sort_by_vowel_score(&input, false);
        descending.reverse();
        assert_eq!(ascending, descending);
        assert_eq!(texts(&ascending), vec!["crwth", "rouse", "sauce"]);
    }

    #[test]
    fn vowel_score_ties_keep_input_order_in_both_directions() {
        let input = words(&["sauce", "rouse", "route"]);
        assert_eq!(
            texts(&sort_by_vowel_score(&input, true)),
            vec!["rouse", "route", "sauce"]
        );
        assert_eq!(
            texts(&sort_by_vowel_score(&input, false)),
            vec!["sauce", "rouse", "route"]
        );
    }

    #[test]
    fn input_is_left_untouched() {
        let input = words(&["route", "sauce"]);
        let _ = sort_by_vowel_score(&input, false);
        assert_eq!(texts(&input), vec!["route", "sauce"]);
    }

    #[test]
    fn consonant_score_sort() {
        // slate = 21+19+18 = 58, adieu = 16, crwth = 12+20+7+18+11 = 68
        let input = words(&["slate", "adieu", "crwth"]);
        assert_eq!(
            texts(&sort_by_consonant_score(&input, false)),
            vec!["crwth", "slate", "adieu"]
        );
        assert_eq!(
            texts(&sort_by_consonant_score(&input, true)),
            vec!["adieu", "slate", "crwth"]
        );
    }

    #[test]
    fn unique_count_sorts_are_stable() {
        let input = words(&["eerie", "adieu", "audio", "sassy"]);
        // distinct vowels: eerie 2, adieu 4, audio 4, sassy 1
        assert_eq!(
            texts(&sort_by_unique_vowel_count(&input, false)),
            vec!["adieu", "audio", "eerie", "sassy"]
        );
        // distinct consonants: eerie 1, adieu 1, audio 1, sassy 2
        assert_eq!(
            texts(&sort_by_unique_consonant_count(&input, false)),
            vec!["sassy", "eerie", "adieu", "audio"]
        );
    }

    #[test]
    fn empty_input_sorts_to_empty() {
        assert!(sort_by_consonant_score(&[], true).is_empty());
    }
}
