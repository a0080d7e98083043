//! Display functions for command results

use super::formatters::{colored_guess, create_progress_bar};
use crate::commands::{BenchmarkResult, FilterResult, ScoredWord, SolveResult};
use crate::scoring::{LetterCount, LetterRanking, consonant_score, vowel_score};
use colored::Colorize;

fn print_header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print the ranked candidates left after filtering
pub fn print_filter_result(result: &FilterResult) {
    print_header("CANDIDATES");

    if !result.rows.is_empty() {
        println!();
        for (word, feedback) in &result.rows {
            println!(
                "   {}  {}",
                colored_guess(word, feedback),
                feedback.to_emoji()
            );
        }
    }

    let total = result.total_candidates;
    println!(
        "\n📋 {} candidate{} remaining",
        total.to_string().bright_yellow().bold(),
        if total == 1 { "" } else { "s" }
    );
    if total == 0 {
        println!(
            "{}",
            "   No word fits the feedback; check the colours.".red()
        );
        return;
    }

    println!();
    for (rank, word) in result.candidates.iter().enumerate() {
        let (vowels, consonants) = (vowel_score(word), consonant_score(word));
        println!(
            "   {:>4}. {}  {}",
            (rank + 1).to_string().bright_black(),
            word.text().to_uppercase().bright_white().bold(),
            format!("(vowels {vowels:>2}, consonants {consonants:>3})").bright_black()
        );
    }
    let hidden = total - result.candidates.len();
    if hidden > 0 {
        println!("   {}", format!("… {hidden} more").bright_black());
    }
}

/// Print the consonant-score ranking
pub fn print_consonant_ranking(ranked: &[ScoredWord]) {
    print_header("CONSONANT SCORES");
    println!();
    for (rank, scored) in ranked.iter().enumerate() {
        println!(
            "   {:>5}. {} {}",
            (rank + 1).to_string().bright_black(),
            scored.word.text().to_uppercase().bright_white().bold(),
            scored.score.to_string().bright_yellow()
        );
    }
}

fn print_letter_counts(label: &str, counts: &[LetterCount], total_words: usize) {
    println!("\n🔤 {}", label.bright_cyan().bold());
    for count in counts {
        let letter = count.letter.to_ascii_uppercase().to_string();
        let pct = if total_words == 0 {
            0.0
        } else {
            count.words as f64 / total_words as f64 * 100.0
        };
        println!(
            "   {} {} {:6} ({pct:5.1}%)",
            letter.bright_white().bold(),
            create_progress_bar(pct, 100.0, 30).green(),
            count.words
        );
    }
}

/// Print vowel and consonant frequency rankings
pub fn print_letter_ranking(ranking: &LetterRanking, total_words: usize) {
    print_header("LETTER FREQUENCY");
    println!("\n   Words in list: {total_words}");
    print_letter_counts("Vowels:", &ranking.vowels, total_words);
    print_letter_counts("Consonants:", &ranking.consonants, total_words);
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {} {}",
            turn,
            colored_guess(&step.word, &step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!(
                "  Scores:     vowels {}, consonants {}",
                vowel_score(&step.word),
                consonant_score(&step.word)
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    print_header("BENCHMARK RESULTS");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {}",
        format!("{}/{}", result.solved, result.total_words).green()
    );
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", result.min_guesses).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.max_guesses).yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for guess_count in 1..=6 {
        if let Some(&count) = result.distribution.get(&guess_count) {
            let pct = (count as f64 / result.total_words as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░"
                    .repeat(40_usize.saturating_sub(bar_width))
                    .bright_black()
            );
            println!("   {guess_count}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !result.failed.is_empty() {
        println!("\n❌ {}", "Not solved in six:".red().bold());
        for chunk in result.failed.chunks(10) {
            println!("   {}", chunk.join(" ").to_uppercase());
        }
    }
}
