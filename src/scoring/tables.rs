//! Static letter weights
//!
//! Vowels and consonants are weighted separately by approximate English
//! frequency. Any character missing from a table scores 0.

use crate::core::Word;

/// Vowel weights, highest first
pub const VOWEL_SCORES: [(u8, u32); 5] = [(b'e', 5), (b'a', 4), (b'o', 3), (b'i', 2), (b'u', 1)];

/// Consonant weights, highest first (`y` counts as a consonant)
pub const CONSONANT_SCORES: [(u8, u32); 21] = [
    (b's', 21),
    (b'r', 20),
    (b'l', 19),
    (b't', 18),
    (b'n', 17),
    (b'd', 16),
    (b'y', 15),
    (b'm', 14),
    (b'p', 13),
    (b'c', 12),
    (b'h', 11),
    (b'g', 10),
    (b'b', 9),
    (b'k', 8),
    (b'w', 7),
    (b'f', 6),
    (b'v', 5),
    (b'z', 4),
    (b'j', 3),
    (b'x', 2),
    (b'q', 1),
];

fn lookup(table: &[(u8, u32)], letter: u8) -> u32 {
    table
        .iter()
        .find_map(|&(l, score)| (l == letter).then_some(score))
        .unwrap_or(0)
}

/// Weight of a single vowel (0 for anything else)
#[inline]
#[must_use]
pub fn vowel_letter_score(letter: u8) -> u32 {
    lookup(&VOWEL_SCORES, letter)
}

/// Weight of a single consonant (0 for anything else)
#[inline]
#[must_use]
pub fn consonant_letter_score(letter: u8) -> u32 {
    lookup(&CONSONANT_SCORES, letter)
}

#[inline]
#[must_use]
pub fn is_vowel(letter: u8) -> bool {
    vowel_letter_score(letter) > 0
}

#[inline]
#[must_use]
pub fn is_consonant(letter: u8) -> bool {
    consonant_letter_score(letter) > 0
}

/// Sum of vowel weights; repeated letters count every time
///
/// ```
/// use wordle_helper::core::Word;
/// use wordle_helper::scoring::vowel_score;
///
/// assert_eq!(vowel_score(&Word::new("adieu").unwrap()), 4 + 2 + 5 + 1);
/// ```
#[must_use]
pub fn vowel_score(word: &Word) -> u32 {
    word.chars().iter().map(|&c| vowel_letter_score(c)).sum()
}

/// Sum of consonant weights; repeated letters count every time
#[must_use]
pub fn consonant_score(word: &Word) -> u32 {
    word.chars()
        .iter()
        .map(|&c| consonant_letter_score(c))
        .sum()
}

/// Number of distinct vowels in the word
#[must_use]
pub fn unique_vowel_count(word: &Word) -> usize {
    word.distinct_letters()
        .into_iter()
        .filter(|&c| is_vowel(c))
        .count()
}

/// Number of distinct consonants in the word
#[must_use]
pub fn unique_consonant_count(word: &Word) -> usize {
    word.distinct_letters()
        .into_iter()
        .filter(|&c| is_consonant(c))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn tables_cover_the_alphabet_exactly_once() {
        for letter in b'a'..=b'z' {
            let hits = usize::from(is_vowel(letter)) + usize::from(is_consonant(letter));
            assert_eq!(hits, 1, "letter {}", letter as char);
        }
    }

    #[test]
    fn unknown_characters_score_zero() {
        assert_eq!(vowel_letter_score(b'z'), 0);
        assert_eq!(consonant_letter_score(b'e'), 0);
        assert_eq!(consonant_letter_score(b'!'), 0);
    }

    #[test]
    fn scores_sum_with_repeats() {
        assert_eq!(vowel_score(&w("eerie")), 5 + 5 + 2 + 5);
        assert_eq!(consonant_score(&w("sassy")), 21 * 3 + 15);
        assert_eq!(consonant_score(&w("audio")), 16);
    }

    #[test]
    fn unique_counts_ignore_repeats() {
        assert_eq!(unique_vowel_count(&w("eerie")), 2);
        assert_eq!(unique_consonant_count(&w("eerie")), 1);
        assert_eq!(unique_vowel_count(&w("adieu")), 4);
        assert_eq!(unique_consonant_count(&w("crwth")), 5);
    }
}
