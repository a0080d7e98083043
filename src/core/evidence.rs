//! Accumulated green/yellow/gray evidence
//!
//! An `EvidenceSnapshot` is rebuilt from the current guess rows every time
//! filtering runs. It is plain data: the filter reads it, nothing mutates it
//! behind the caller's back.

use super::{Feedback, LetterStatus, WORD_LENGTH, Word};
use std::collections::{BTreeMap, BTreeSet};

/// Green, yellow and gray signals gathered across all fixed guess rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvidenceSnapshot {
    green_by_position: [Option<u8>; WORD_LENGTH],
    yellow_positions_by_letter: BTreeMap<u8, BTreeSet<usize>>,
    gray_letters: BTreeSet<u8>,
}

impl EvidenceSnapshot {
    /// An empty snapshot: no constraints at all
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from (guess, feedback) rows, oldest first
    ///
    /// # Examples
    /// ```
    /// use wordle_helper::core::{EvidenceSnapshot, Feedback, Word};
    ///
    /// let rows = vec![(Word::new("crane").unwrap(), Feedback::parse("G----").unwrap())];
    /// let snapshot = EvidenceSnapshot::from_rows(&rows);
    /// assert_eq!(snapshot.green_at(0), Some(b'c'));
    /// assert!(snapshot.gray_letters().contains(&b'r'));
    /// ```
    #[must_use]
    pub fn from_rows(rows: &[(Word, Feedback)]) -> Self {
        let mut snapshot = Self::new();
        for (word, feedback) in rows {
            snapshot.record_row(word, feedback);
        }
        snapshot
    }

    /// Record every letter of one guess row
    pub fn record_row(&mut self, word: &Word, feedback: &Feedback) {
        for (position, (&letter, &status)) in
            word.chars().iter().zip(feedback.statuses()).enumerate()
        {
            self.record(position, letter, status);
        }
    }

    /// Record a single marked cell
    ///
    /// A later green at the same position replaces the earlier one.
    /// Positions outside 0..5 are ignored.
    pub fn record(&mut self, position: usize, letter: u8, status: LetterStatus) {
        if position >= WORD_LENGTH {
            return;
        }
        let letter = letter.to_ascii_lowercase();
        match status {
            LetterStatus::Green => self.green_by_position[position] = Some(letter),
            LetterStatus::Yellow => {
                self.yellow_positions_by_letter
                    .entry(letter)
                    .or_default()
                    .insert(position);
            }
            LetterStatus::Gray => {
                self.gray_letters.insert(letter);
            }
        }
    }

    #[must_use]
    pub const fn green_by_position(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.green_by_position
    }

    #[must_use]
    pub const fn green_at(&self, position: usize) -> Option<u8> {
        if position < WORD_LENGTH {
            self.green_by_position[position]
        } else {
            None
        }
    }

    #[must_use]
    pub const fn yellow_positions_by_letter(&self) -> &BTreeMap<u8, BTreeSet<usize>> {
        &self.yellow_positions_by_letter
    }

    #[must_use]
    pub const fn gray_letters(&self) -> &BTreeSet<u8> {
        &self.gray_letters
    }

    /// Whether the letter is green in any position
    #[must_use]
    pub fn is_green_anywhere(&self, letter: u8) -> bool {
        self.green_by_position.contains(&Some(letter))
    }

    /// Whether the letter is yellow in any row
    #[must_use]
    pub fn is_yellow_anywhere(&self, letter: u8) -> bool {
        self.yellow_positions_by_letter.contains_key(&letter)
    }

    /// Gray letters that really exclude a word
    ///
    /// A letter that is also green or yellow somewhere is not an exclusion:
    /// gray there only means "no further copies here".
    pub fn excluded_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.gray_letters
            .iter()
            .copied()
            .filter(|&letter| !self.is_green_anywhere(letter) && !self.is_yellow_anywhere(letter))
    }

    /// True when no constraint of any colour has been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.green_by_position.iter().all(Option::is_none)
            && self.yellow_positions_by_letter.is_empty()
            && self.gray_letters.is_empty()
    }
}
