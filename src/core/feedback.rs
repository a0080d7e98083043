//! Feedback for a single guess row
//!
//! A `Feedback` holds the five colours marked on one guess. It can be parsed
//! from user input ("GY-GY", "🟩🟨⬜🟩🟨") or calculated from a guess and a
//! known answer using Wordle's duplicate-letter rules.

use super::{LetterStatus, WORD_LENGTH, Word};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Colours of one guess row, in letter order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Feedback([LetterStatus; WORD_LENGTH]);

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have exactly 5 marks, got {0}")]
    InvalidLength(usize),
    #[error("invalid feedback mark '{0}' (use G/Y/- or 🟩🟨⬜)")]
    InvalidMark(char),
}

impl Feedback {
    /// All greens
    pub const PERFECT: Self = Self([LetterStatus::Green; WORD_LENGTH]);

    /// All grays
    pub const ALL_GRAY: Self = Self([LetterStatus::Gray; WORD_LENGTH]);

    #[must_use]
    pub const fn new(statuses: [LetterStatus; WORD_LENGTH]) -> Self {
        Self(statuses)
    }

    #[inline]
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; WORD_LENGTH] {
        &self.0
    }

    /// Status of the letter at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn status_at(&self, position: usize) -> LetterStatus {
        self.0[position]
    }

    /// Check if every letter is green
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// Greens are assigned first and consume their letter; yellows are then
    /// handed out left to right while unmatched copies remain.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::calculate(&guess, &answer);
    /// assert_eq!(feedback.to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let mut result = [LetterStatus::Gray; WORD_LENGTH];
        let mut available: FxHashMap<u8, u8> = FxHashMap::default();

        for (position, (&g, &a)) in guess.chars().iter().zip(answer.chars()).enumerate() {
            if g == a {
                result[position] = LetterStatus::Green;
            } else {
                *available.entry(a).or_insert(0) += 1;
            }
        }

        for (position, &g) in guess.chars().iter().enumerate() {
            if result[position] == LetterStatus::Green {
                continue;
            }
            if let Some(count) = available.get_mut(&g)
                && *count > 0
            {
                result[position] = LetterStatus::Yellow;
                *count -= 1;
            }
        }

        Self(result)
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// # Errors
    /// Returns `FeedbackError` on wrong length or an unknown mark.
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::Feedback;
    ///
    /// let a = Feedback::parse("GY-GY").unwrap();
    /// let b = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(a, b);
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackError> {
        let marks: Vec<char> = s.trim().chars().collect();
        if marks.len() != WORD_LENGTH {
            return Err(FeedbackError::InvalidLength(marks.len()));
        }

        let mut statuses = [LetterStatus::Gray; WORD_LENGTH];
        for (slot, mark) in statuses.iter_mut().zip(marks) {
            *slot = LetterStatus::from_symbol(mark).ok_or(FeedbackError::InvalidMark(mark))?;
        }
        Ok(Self(statuses))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|status| status.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterStatus::{Gray, Green, Yellow};

    fn feedback(guess: &str, answer: &str) -> Feedback {
        Feedback::calculate(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn perfect_for_identical_words() {
        for word in ["crane", "slate", "audio", "aaaaa"] {
            assert!(feedback(word, word).is_perfect());
        }
    }

    #[test]
    fn all_gray_for_disjoint_words() {
        assert_eq!(feedback("abcde", "fghij"), Feedback::ALL_GRAY);
    }

    #[test]
    fn duplicate_guess_letters_only_match_available_copies() {
        // SPEED vs ERASE: S yellow, P gray, both E yellow, D gray
        assert_eq!(
            feedback("speed", "erase"),
            Feedback::new([Yellow, Gray, Yellow, Yellow, Gray])
        );
    }

    #[test]
    fn green_consumes_letter_before_yellow() {
        // ROBOT vs FLOOR: second O is green, first O takes the other copy
        assert_eq!(
            feedback("robot", "floor"),
            Feedback::new([Yellow, Yellow, Gray, Green, Gray])
        );
        // EERIE vs HELLO: the single E is taken by the green, other E's stay gray
        assert_eq!(
            feedback("eerie", "hello"),
            Feedback::new([Gray, Green, Gray, Gray, Gray])
        );
    }

    #[test]
    fn parse_accepts_all_notations() {
        let a = Feedback::parse("GYG--").unwrap();
        let b = Feedback::parse("🟩🟨🟩⬜⬜").unwrap();
        let c = Feedback::parse("gyg._").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.status_at(1), Yellow);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn status_at_panics_past_the_last_position() {
        let _ = Feedback::PERFECT.status_at(WORD_LENGTH);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            Feedback::parse("GYGGYX"),
            Err(FeedbackError::InvalidLength(6))
        );
        assert_eq!(Feedback::parse(""), Err(FeedbackError::InvalidLength(0)));
        assert_eq!(
            Feedback::parse("GXGGY"),
            Err(FeedbackError::InvalidMark('X'))
        );
    }

    #[test]
    fn emoji_round_trip() {
        let f = Feedback::parse("GY-GY").unwrap();
        assert_eq!(f.to_emoji(), "🟩🟨⬜🟩🟨");
    }
}
