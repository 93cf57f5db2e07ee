//! Display functions for command results

use super::formatters::{feedback_pegs, sequence_pegs};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::session::Outcome;
use colored::Colorize;

/// Print the result of solving a secret
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    let length = result.secret.len();

    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Secret: {} {}",
        result.secret.to_string().bright_yellow().bold(),
        sequence_pegs(&result.secret)
    );
    println!("{}", "─".repeat(60).cyan());

    for record in &result.rounds {
        println!(
            "\nRound {}: {} {}  {}",
            record.round,
            record.guess,
            sequence_pegs(&record.guess),
            feedback_pegs(record.feedback, length)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                record.candidates_before, record.candidates_after
            );
        }
    }

    println!();
    match result.outcome {
        Outcome::Solved { rounds } => {
            let plural = if rounds == 1 { "round" } else { "rounds" };
            println!(
                "{}",
                format!("✅ Cracked the code in {rounds} {plural}!").green().bold()
            );
        }
        Outcome::Exhausted => {
            println!(
                "{}",
                format!("❌ Failed to crack the code in {} rounds", result.rounds.len())
                    .red()
                    .bold()
            );
        }
    }
}

/// Print the result of a guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} {}",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        result.guess.to_string().bright_yellow().bold(),
        sequence_pegs(&result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nAgainst {} possible secrets:", result.space_size);
    println!(
        "   Feedback classes: {}",
        result.feedback_classes.to_string().bright_yellow()
    );
    println!(
        "   Worst case:       {} candidates remain (on {})",
        result.worst_case.to_string().bright_yellow(),
        result.worst_feedback
    );
    println!("   Expected:         {:.1} candidates remain", result.expected_remaining);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", result.total_secrets);
    println!(
        "   Solved:           {}",
        result.solved.to_string().green().bold()
    );
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        result.min_rounds.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_rounds.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Secrets/second:   {:.1}", result.secrets_per_second);

    println!("\n{}", "Distribution:".bright_cyan().bold());
    let mut rounds: Vec<&usize> = result.distribution.keys().collect();
    rounds.sort_unstable();
    for &round in rounds {
        if let Some(&count) = result.distribution.get(&round) {
            let pct = (count as f64 / result.total_secrets as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {round}: {bar} {count:4} ({pct:5.1}%)");
        }
    }
}
