//! Letter scoring tables and score-based sorts

pub mod frequency;
mod sort;
mod tables;

pub use frequency::{LetterCount, LetterRanking, consonant_ranking, letter_ranking, vowel_ranking};
pub use sort::{
    sort_by_consonant_score, sort_by_unique_consonant_count, sort_by_unique_vowel_count,
    sort_by_vowel_score,
};
pub use tables::{
    CONSONANT_SCORES, VOWEL_SCORES, consonant_letter_score, consonant_score, is_consonant,
    is_vowel, unique_consonant_count, unique_vowel_count, vowel_letter_score, vowel_score,
};
