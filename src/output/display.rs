//! Display functions for command results

use super::formatters::{colorize_row, create_progress_bar, format_duration};
use crate::commands::TestAllStatistics;
use crate::harness::{Outcome, SessionReport};
use colored::Colorize;
use std::path::Path;

/// Print the result line for one finished game
///
/// With `verbose`, each round's guess is printed first as a colored row.
/// Solved games go to stdout as `<rounds> <word>`; failures go to stderr.
pub fn print_session_report(report: &SessionReport, verbose: bool) {
    if verbose {
        println!();
        for round in &report.rounds {
            println!("{}", colorize_row(&round.guess, &round.feedback));
        }
        if let Some(error) = &report.error {
            eprintln!("{}", error.to_string().red());
        }
    }

    match report.outcome {
        Outcome::Solved(rounds) => println!("{rounds} {}", report.target),
        Outcome::GaveUp => eprintln!("FAILED: {}", report.target),
        Outcome::TooSlow => eprintln!("TOOSLOW: {}", report.target),
    }
}

/// Print the summary of a corpus run
pub fn print_test_all_statistics(stats: &TestAllStatistics, word_list: &Path) {
    let histogram = stats
        .histogram
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",");
    let average = stats
        .average_rounds()
        .map_or_else(|| "-".to_string(), |avg| avg.to_string());

    println!();
    println!(
        "Finished testing {} ({} words) in {}.",
        word_list.display(),
        stats.total_words,
        format_duration(stats.total_time)
    );
    println!("Passed: {} {histogram}", stats.passed());
    println!(
        "Failed: {} ({} given up, {} too slow)",
        stats.failed(),
        stats.gave_up.len(),
        stats.too_slow.len()
    );
    println!("Average: {average}");
    if let Some(per_word) = stats.time_per_word() {
        println!(
            "Time per word: {:.1}ms",
            per_word.as_secs_f64() * 1000.0
        );
    }

    print_distribution(stats);
    print_first_guesses(stats);

    if !stats.worst_words.is_empty() {
        println!("\n{}", "Hardest Words (5-6 rounds)".yellow().bold());
        for (word, rounds) in stats.worst_words.iter().take(5) {
            println!("  {} ({rounds} rounds)", word.to_uppercase().yellow());
        }
    }
}

fn print_distribution(stats: &TestAllStatistics) {
    let passed = stats.passed();
    if passed == 0 {
        return;
    }

    println!("\n{}", "Round Distribution".bright_cyan().bold());
    let max_count = stats.histogram.iter().copied().max().unwrap_or(0);
    for (i, &count) in stats.histogram.iter().enumerate() {
        let percentage = count as f64 / passed as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("  {}: {} {count:5} ({percentage:5.1}%)", i + 1, bar.green());
    }
}

fn print_first_guesses(stats: &TestAllStatistics) {
    if stats.first_guess_used.is_empty() {
        return;
    }

    let mut first_guesses: Vec<(&String, &usize)> = stats.first_guess_used.iter().collect();
    first_guesses.sort_by(|(w1, c1), (w2, c2)| c2.cmp(c1).then_with(|| w1.cmp(w2)));

    println!("\n{}", "First Guess Usage".bright_cyan().bold());
    for (word, count) in first_guesses.into_iter().take(5) {
        let percentage = *count as f64 / stats.total_words as f64 * 100.0;
        println!(
            "  {}: {count} times ({percentage:.1}%)",
            word.to_uppercase()
        );
    }
}
