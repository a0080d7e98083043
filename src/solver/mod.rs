//! Constraint filtering and candidate ranking
//!
//! The engine: pure functions from (word list, evidence) to an ordered list of
//! remaining candidates.

mod engine;
pub mod filter;
pub mod ranking;

pub use engine::{Solver, suggest};
pub use filter::{filter_candidates, is_candidate, matches_gray, matches_green, matches_yellow};
pub use ranking::{RankKey, rank_candidates};
