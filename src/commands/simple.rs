//! Simple interactive CLI mode
//!
//! Line-based helper without the TUI. Each line is either a guess with its
//! colours (`slate y-g--` or `slate:Y-G--`) or a command.

use super::filter::parse_row;
use crate::board::{Board, BoardError};
use crate::output::formatters::{colored_guess, green_pattern, yellow_letters};
use crate::solver::Solver;
use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Ranked suggestions shown per turn
const SHOWN_SUGGESTIONS: usize = 10;

const BANNER_TITLE: &str = "Wordle Helper - Interactive Mode";
const BANNER_WIDTH: usize = 62;
const RULE_WIDTH: usize = 60;

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(solver: &Solver<'_>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(solver, stdin.lock(), stdout.lock())
}

/// Run the line-based mode against any reader and writer
///
/// Ends on `quit` or end of input.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    solver: &Solver<'_>,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "\n╔{}╗", "═".repeat(BANNER_WIDTH))?;
    writeln!(out, "║{BANNER_TITLE:^BANNER_WIDTH$}║")?;
    writeln!(out, "╚{}╝\n", "═".repeat(BANNER_WIDTH))?;
    writeln!(
        out,
        "Play a guess in your game, then enter it here with its colours:\n"
    )?;
    writeln!(
        out,
        "  slate Y-G--     (G/g/🟩 green, Y/y/🟨 yellow, -/_/⬜ gray)\n"
    )?;
    writeln!(
        out,
        "Commands: 'undo' removes the last guess, 'new' starts over, 'quit' exits\n"
    )?;

    let mut board = Board::new();

    loop {
        let evidence = board.snapshot();
        let ranked = solver.suggest(&evidence);
        let turn = board.fixed_guesses().len() + 1;

        writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;
        writeln!(out, "Turn {turn}: {} candidates remaining", ranked.len())?;
        writeln!(out, "{}", "─".repeat(RULE_WIDTH))?;

        for (word, feedback) in board.fixed_guesses() {
            writeln!(out, "  {}", colored_guess(&word, &feedback))?;
        }
        let summary = board.summary();
        writeln!(out, "\n  Greens:  {}", green_pattern(&summary))?;
        writeln!(out, "  Yellows: {}\n", yellow_letters(&summary))?;

        if ranked.is_empty() {
            writeln!(
                out,
                "❌ No candidates remain! Your feedback may be incorrect."
            )?;
            writeln!(out, "Type 'undo' to go back, or 'new' to start over.\n")?;
        } else {
            writeln!(out, "Suggestions:")?;
            for word in ranked.iter().take(SHOWN_SUGGESTIONS) {
                writeln!(out, "  • {}", word.text().to_uppercase())?;
            }
            writeln!(out)?;
        }

        write!(out, "Guess and colours (or command): ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("failed to read input")? == 0 {
            writeln!(out)?;
            return Ok(());
        }
        let line = line.trim().to_lowercase();

        match line.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Good luck!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                board.reset();
                writeln!(out, "\n🔄 New game started!\n")?;
            }
            "undo" | "u" => {
                if board.undo_last() {
                    writeln!(out, "✓ Undone!\n")?;
                } else {
                    writeln!(out, "Nothing to undo!\n")?;
                }
            }
            _ => {
                let row = line.replacen(char::is_whitespace, ":", 1);
                let (word, feedback) = match parse_row(&row) {
                    Ok(parsed) => parsed,
                    Err(e) => {
                        writeln!(out, "❌ {e}\n")?;
                        continue;
                    }
                };
                match board.push_guess(&word, feedback, solver.words()) {
                    Ok(_) if feedback.is_perfect() => {
                        writeln!(out, "\n🎉 Solved in {turn}! Starting a new game.\n")?;
                        board.reset();
                    }
                    Ok(_) => {}
                    Err(BoardError::BoardFull) => {
                        writeln!(out, "❌ All six rows are used. Type 'new' or 'undo'.\n")?;
                    }
                    Err(e) => writeln!(out, "❌ {e}\n")?,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn run(script: &str) -> String {
        let words = words_from_slice(&["crane", "slate", "least", "steal", "stale", "adieu"]);
        let solver = Solver::new(&words);
        let mut out = Vec::new();
        run_simple_with(&solver, script.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn quits_on_command() {
        let out = run("quit\n");
        assert!(out.contains("Wordle Helper - Interactive Mode"));
        assert!(out.contains("6 candidates remaining"));
        assert!(out.contains("Good luck"));
    }

    #[test]
    fn guess_narrows_candidates() {
        let out = run("crane -----\nquit\n");
        assert!(out.contains("Turn 2: 0 candidates remaining"));
        assert!(out.contains("No candidates remain"));
    }

    #[test]
    fn colon_form_is_accepted() {
        let out = run("adieu:--Y-Y\nquit\n");
        assert!(out.contains("Turn 2"));
    }

    #[test]
    fn undo_restores_previous_turn() {
        let out = run("crane -----\nundo\nundo\n");
        assert!(out.contains("✓ Undone!"));
        assert!(out.contains("Nothing to undo!"));
        assert_eq!(out.matches("6 candidates remaining").count(), 3);
    }

    #[test]
    fn unknown_word_and_bad_feedback_are_reported() {
        let out = run("zzzzz -----\nslate xx\n");
        assert!(out.contains("not in the word list"));
        assert!(out.contains("Invalid feedback"));
        assert!(!out.contains("Turn 2"));
    }

    #[test]
    fn perfect_feedback_starts_new_game() {
        let out = run("slate GGGGG\n");
        assert!(out.contains("Solved in 1"));
        assert_eq!(out.matches("Turn 1:").count(), 2);
    }
}
