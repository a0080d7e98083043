//! Wordle Helper
//!
//! Narrows a Wordle word list using the colours from earlier guesses and
//! ranks what is left by weighted vowel and consonant coverage.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_helper::core::{EvidenceSnapshot, Feedback, Word};
//! use wordle_helper::solver::suggest;
//!
//! let words: Vec<Word> = ["crane", "slate", "adieu", "route"]
//!     .iter()
//!     .map(|w| Word::new(*w).unwrap())
//!     .collect();
//!
//! // c is green in the first position
//! let guess = Word::new("cloud").unwrap();
//! let evidence = EvidenceSnapshot::from_rows(&[(guess, Feedback::parse("G----").unwrap())]);
//!
//! assert_eq!(suggest(&words, &evidence), vec![Word::new("crane").unwrap()]);
//! ```

// Core domain types
pub mod core;

// Letter weights and score sorts
pub mod scoring;

// Candidate filtering and ranking
pub mod solver;

// Guess grid state
pub mod board;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
