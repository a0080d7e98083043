//! Core domain types for Wordle
//!
//! Words, letter colours, per-row feedback and the evidence snapshot the
//! filter consumes. Everything here is plain data with no I/O.

mod evidence;
mod feedback;
mod status;
mod word;

pub use evidence::EvidenceSnapshot;
pub use feedback::{Feedback, FeedbackError};
pub use status::LetterStatus;
pub use word::{WORD_LENGTH, Word, WordError};
