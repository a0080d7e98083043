//! Letter frequency ranking over a word list
//!
//! Counts, for each letter, how many words contain it at least once, and
//! ranks vowels and consonants separately by that count.

use super::tables::{is_consonant, is_vowel};
use crate::core::Word;
use rustc_hash::FxHashMap;

/// A letter and the number of words containing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterCount {
    pub letter: char,
    pub words: usize,
}

/// Vowel and consonant rankings for one word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterRanking {
    pub vowels: Vec<LetterCount>,
    pub consonants: Vec<LetterCount>,
}

/// Rank the letters accepted by `include` by how many words contain them
///
/// Letters that never occur are omitted. Ties are broken alphabetically so the
/// output is deterministic.
fn rank_letters(words: &[Word], include: impl Fn(u8) -> bool) -> Vec<LetterCount> {
    let mut counts: FxHashMap<u8, usize> = FxHashMap::default();
    for word in words {
        for letter in word.distinct_letters() {
            if include(letter) {
                *counts.entry(letter).or_insert(0) += 1;
            }
        }
    }

    let mut ranked: Vec<LetterCount> = counts
        .into_iter()
        .map(|(letter, words)| LetterCount {
            letter: char::from(letter),
            words,
        })
        .collect();
    ranked.sort_by(|a, b| b.words.cmp(&a.words).then(a.letter.cmp(&b.letter)));
    ranked
}

/// Vowels ordered by document frequency, most common first
#[must_use]
pub fn vowel_ranking(words: &[Word]) -> Vec<LetterCount> {
    rank_letters(words, is_vowel)
}

/// Consonants ordered by document frequency, most common first
#[must_use]
pub fn consonant_ranking(words: &[Word]) -> Vec<LetterCount> {
    rank_letters(words, is_consonant)
}

/// Both rankings; empty lists for an empty word list
#[must_use]
pub fn letter_ranking(words: &[Word]) -> LetterRanking {
    LetterRanking {
        vowels: vowel_ranking(words),
        consonants: consonant_ranking(words),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    fn letters(ranking: &[LetterCount]) -> String {
        ranking.iter().map(|c| c.letter).collect()
    }

    #[test]
    fn counts_each_word_once_per_letter() {
        let list = words(&["eerie", "slate"]);
        let vowels = vowel_ranking(&list);
        assert_eq!((vowels[0].letter, vowels[0].words), ('e', 2));
    }

    #[test]
    fn ties_are_alphabetical() {
        let list = words(&["crane", "slate", "adieu"]);
        // a: 3, e: 3, i: 1, u: 1
        assert_eq!(letters(&vowel_ranking(&list)), "aeiu");
    }

    #[test]
    fn consonants_exclude_vowels() {
        let list = words(&["audio"]);
        assert_eq!(letters(&consonant_ranking(&list)), "d");
    }

    #[test]
    fn empty_list_gives_empty_rankings() {
        assert_eq!(letter_ranking(&[]), LetterRanking::default());
    }
}
