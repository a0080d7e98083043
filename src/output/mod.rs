//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_benchmark_result, print_consonant_ranking, print_filter_result, print_letter_ranking,
    print_solve_result,
};
