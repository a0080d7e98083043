//! Guess grid state
//!
//! Six rows of five cells. A row is typed in while `Editing`, checked against
//! the word list on submit, and then `Fixed` with every cell gray. Only fixed
//! rows can have their colours cycled, and only fixed rows contribute
//! evidence.

use super::BoardError;
use crate::core::{EvidenceSnapshot, Feedback, LetterStatus, WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use tracing::debug;

/// Number of guess rows on the board
pub const ROWS: usize = 6;

/// Most distinct letters that may be marked yellow at once
pub const MAX_YELLOW_LETTERS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub letter: Option<u8>,
    pub status: LetterStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowState {
    #[default]
    Empty,
    Editing,
    Fixed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Row {
    cells: [Cell; WORD_LENGTH],
    state: RowState,
}

impl Row {
    #[must_use]
    pub const fn cells(&self) -> &[Cell; WORD_LENGTH] {
        &self.cells
    }

    #[must_use]
    pub const fn state(&self) -> RowState {
        self.state
    }

    /// The typed letters as text; shorter than five while incomplete
    #[must_use]
    pub fn text(&self) -> String {
        self.cells
            .iter()
            .filter_map(|cell| cell.letter.map(char::from))
            .collect()
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

/// A row being typed, and what to restore if typing is cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EditSession {
    row: usize,
    position: usize,
    original: Option<Row>,
}

/// Green letters per position and present-but-misplaced letters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolutionSummary {
    pub greens: [Option<u8>; WORD_LENGTH],
    /// Distinct yellow letters in first-seen order, excluding letters already green
    pub yellows: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: [Row; ROWS],
    editing: Option<EditSession>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn rows(&self) -> &[Row; ROWS] {
        &self.rows
    }

    /// Index of the row being typed, if any
    #[must_use]
    pub fn editing_row(&self) -> Option<usize> {
        self.editing.map(|session| session.row)
    }

    /// Next cell to be typed in the editing row
    #[must_use]
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.editing.map(|session| (session.row, session.position))
    }

    /// First row that is not fixed
    #[must_use]
    pub fn first_open_row(&self) -> Option<usize> {
        self.rows
            .iter()
            .position(|row| row.state != RowState::Fixed)
    }

    /// Fixed rows as (word, feedback), top to bottom
    #[must_use]
    pub fn fixed_guesses(&self) -> Vec<(Word, Feedback)> {
        self.rows
            .iter()
            .filter(|row| row.state == RowState::Fixed)
            .filter_map(|row| {
                let word = Word::new(row.text()).ok()?;
                let mut statuses = [LetterStatus::Gray; WORD_LENGTH];
                for (slot, cell) in statuses.iter_mut().zip(&row.cells) {
                    *slot = cell.status;
                }
                Some((word, Feedback::new(statuses)))
            })
            .collect()
    }

    /// Start typing into a row
    ///
    /// Any other row being edited is cancelled first. A fixed row remembers
    /// its word and colours so cancelling restores it.
    ///
    /// # Errors
    /// `BoardError::RowOutOfRange` for an invalid row index.
    pub fn start_editing(&mut self, row: usize) -> Result<(), BoardError> {
        if row >= ROWS {
            return Err(BoardError::RowOutOfRange(row));
        }
        if let Some(session) = self.editing {
            if session.row == row {
                return Ok(());
            }
            self.cancel_editing();
        }

        let original = (self.rows[row].state == RowState::Fixed).then_some(self.rows[row]);
        self.rows[row].clear();
        self.rows[row].state = RowState::Editing;
        self.editing = Some(EditSession {
            row,
            position: 0,
            original,
        });
        debug!(row, "editing row");
        Ok(())
    }

    /// Abandon the current edit
    ///
    /// A re-edited fixed row gets its old word and colours back; a new row is
    /// cleared.
    pub fn cancel_editing(&mut self) {
        let Some(session) = self.editing.take() else {
            return;
        };
        match session.original {
            Some(original) => self.rows[session.row] = original,
            None => self.rows[session.row].clear(),
        }
    }

    /// Type a letter into the next free cell of the editing row
    ///
    /// Returns true once the row holds five letters.
    ///
    /// # Errors
    /// `BoardError::NotEditing` if no row is being typed,
    /// `BoardError::InvalidLetter` for a non-alphabetic character.
    pub fn type_letter(&mut self, letter: char) -> Result<bool, BoardError> {
        let session = self.editing.as_mut().ok_or(BoardError::NotEditing)?;
        if !letter.is_ascii_alphabetic() {
            return Err(BoardError::InvalidLetter(letter));
        }
        if session.position < WORD_LENGTH {
            // ascii checked above, the cast is lossless
            self.rows[session.row].cells[session.position].letter =
                Some(letter.to_ascii_lowercase() as u8);
            session.position += 1;
        }
        Ok(session.position == WORD_LENGTH)
    }

    /// Remove the last typed letter; no-op when nothing has been typed
    pub fn backspace(&mut self) {
        if let Some(session) = self.editing.as_mut()
            && session.position > 0
        {
            session.position -= 1;
            self.rows[session.row].cells[session.position].letter = None;
        }
    }

    /// Fix the editing row if it spells a word from the list
    ///
    /// On success every cell turns gray.
    ///
    /// # Errors
    /// `BoardError::NotEditing`, `BoardError::IncompleteRow`, or
    /// `BoardError::UnknownWord` if the word is not in `words`. The row stays
    /// in editing mode after an error.
    pub fn submit(&mut self, words: &[Word]) -> Result<Word, BoardError> {
        let session = self.editing.ok_or(BoardError::NotEditing)?;
        let text = self.rows[session.row].text();
        if text.len() != WORD_LENGTH {
            return Err(BoardError::IncompleteRow);
        }
        let word = Word::new(&text).map_err(|_| BoardError::UnknownWord(text.clone()))?;
        if !words.contains(&word) {
            return Err(BoardError::UnknownWord(text));
        }

        let row = &mut self.rows[session.row];
        for cell in &mut row.cells {
            cell.status = LetterStatus::Gray;
        }
        row.state = RowState::Fixed;
        self.editing = None;
        debug!(row = session.row, word = %word, "fixed row");
        Ok(word)
    }

    /// Put a complete guess with its colours into the first open row
    ///
    /// # Errors
    /// `BoardError::BoardFull` when every row is fixed,
    /// `BoardError::UnknownWord` if the word is not in `words`.
    pub fn push_guess(
        &mut self,
        word: &Word,
        feedback: Feedback,
        words: &[Word],
    ) -> Result<usize, BoardError> {
        if !words.contains(word) {
            return Err(BoardError::UnknownWord(word.text().to_string()));
        }
        self.cancel_editing();
        let index = self.first_open_row().ok_or(BoardError::BoardFull)?;
        let row = &mut self.rows[index];
        for ((cell, &letter), &status) in row
            .cells
            .iter_mut()
            .zip(word.chars())
            .zip(feedback.statuses())
        {
            *cell = Cell {
                letter: Some(letter),
                status,
            };
        }
        row.state = RowState::Fixed;
        Ok(index)
    }

    /// Clear the last fixed row; returns false if there was none
    pub fn undo_last(&mut self) -> bool {
        self.cancel_editing();
        match self
            .rows
            .iter()
            .rposition(|row| row.state == RowState::Fixed)
        {
            Some(index) => {
                self.rows[index].clear();
                true
            }
            None => false,
        }
    }

    /// Clear every row
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance a fixed cell's colour: gray → yellow → green → gray
    ///
    /// Turning a cell green un-greens any cell in the same column holding a
    /// different letter. Turning a cell yellow is refused when it would make a
    /// sixth distinct yellow letter.
    ///
    /// # Errors
    /// `BoardError::RowOutOfRange`/`ColumnOutOfRange` for bad indices,
    /// `BoardError::NotFixed` for a row that is not fixed,
    /// `BoardError::TooManyYellows` when the yellow limit would be exceeded.
    pub fn cycle_status(&mut self, row: usize, column: usize) -> Result<LetterStatus, BoardError> {
        if row >= ROWS {
            return Err(BoardError::RowOutOfRange(row));
        }
        if column >= WORD_LENGTH {
            return Err(BoardError::ColumnOutOfRange(column));
        }
        if self.rows[row].state != RowState::Fixed {
            return Err(BoardError::NotFixed(row));
        }
        let cell = self.rows[row].cells[column];
        let Some(letter) = cell.letter else {
            return Err(BoardError::NotFixed(row));
        };

        let next = cell.status.next();
        match next {
            LetterStatus::Green => {
                for other in &mut self.rows {
                    let other_cell = &mut other.cells[column];
                    if other_cell.status == LetterStatus::Green && other_cell.letter != Some(letter)
                    {
                        other_cell.status = LetterStatus::Gray;
                    }
                }
            }
            LetterStatus::Yellow => {
                let yellow_letters: FxHashSet<u8> = self
                    .rows
                    .iter()
                    .flat_map(|r| r.cells.iter())
                    .filter(|c| c.status == LetterStatus::Yellow)
                    .filter_map(|c| c.letter)
                    .collect();
                if !yellow_letters.contains(&letter) && yellow_letters.len() >= MAX_YELLOW_LETTERS {
                    return Err(BoardError::TooManyYellows);
                }
            }
            LetterStatus::Gray => {}
        }

        self.rows[row].cells[column].status = next;
        Ok(next)
    }

    /// Evidence from the fixed rows
    #[must_use]
    pub fn snapshot(&self) -> EvidenceSnapshot {
        let mut evidence = EvidenceSnapshot::new();
        for row in self.rows.iter().filter(|row| row.state == RowState::Fixed) {
            for (position, cell) in row.cells.iter().enumerate() {
                if let Some(letter) = cell.letter {
                    evidence.record(position, letter, cell.status);
                }
            }
        }
        evidence
    }

    /// Known greens per position and yellow letters still to be placed
    #[must_use]
    pub fn summary(&self) -> SolutionSummary {
        let mut summary = SolutionSummary::default();
        for row in self.rows.iter().filter(|row| row.state == RowState::Fixed) {
            for (position, cell) in row.cells.iter().enumerate() {
                let Some(letter) = cell.letter else { continue };
                match cell.status {
                    LetterStatus::Green => {
                        summary.greens[position] = Some(letter);
                    }
                    LetterStatus::Yellow if !summary.yellows.contains(&letter) => {
                        summary.yellows.push(letter);
                    }
                    _ => {}
                }
            }
        }
        summary
            .yellows
            .retain(|letter| !summary.greens.contains(&Some(*letter)));
        summary
    }
}
