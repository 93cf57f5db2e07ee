//! Exhaustive evaluation command
//!
//! Runs the solver against every possible secret of a configuration and
//! summarizes the round distribution.

use crate::core::{GameParams, Sequence};
use crate::session::{Outcome, Session, SessionError};
use crate::solver::{CandidateSpace, NullObserver};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Statistics from running every secret
pub struct ExhaustiveStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub round_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_rounds: f64,
    pub max_rounds: usize,
    /// Secrets that needed the most rounds, capped at ten entries
    pub worst_secrets: Vec<(Sequence, usize)>,
    /// Secrets the solver could not crack within the budget
    pub failures: Vec<Sequence>,
}

/// Run the solver on every secret of the configuration, or a limited prefix
///
/// # Errors
/// Propagates `SessionError` from a failed session; exhausting the attempt
/// budget is counted as a failure, not an error.
pub fn run_exhaustive(
    params: GameParams,
    limit: Option<usize>,
) -> Result<ExhaustiveStatistics, SessionError> {
    let space = CandidateSpace::enumerate(&params);
    let total = limit.unwrap_or(space.len()).min(space.len());

    let bar = ProgressBar::new(total as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut results: Vec<(Sequence, usize)> = Vec::with_capacity(total);
    let mut failures = Vec::new();
    let mut round_distribution: HashMap<usize, usize> = HashMap::new();
    let mut total_rounds = 0;

    for secret in space.iter().take(total) {
        let mut session = Session::new(params, secret.clone())?;
        let (records, outcome) = session.run(&NullObserver)?;

        let rounds = records.len();
        total_rounds += rounds;
        *round_distribution.entry(rounds).or_insert(0) += 1;

        match outcome {
            Outcome::Solved { .. } => results.push((secret.clone(), rounds)),
            Outcome::Exhausted => failures.push(secret.clone()),
        }

        bar.set_message(format!(
            "avg {:.2}",
            total_rounds as f64 / (results.len() + failures.len()) as f64
        ));
        bar.inc(1);
    }

    bar.finish_and_clear();

    let solved = results.len();
    let max_rounds = results.iter().map(|(_, rounds)| *rounds).max().unwrap_or(0);
    let mut worst_secrets: Vec<(Sequence, usize)> = results
        .iter()
        .filter(|(_, rounds)| *rounds == max_rounds && max_rounds > 0)
        .cloned()
        .collect();
    worst_secrets.truncate(10);

    Ok(ExhaustiveStatistics {
        total_secrets: total,
        solved,
        failed: failures.len(),
        round_distribution,
        total_time: start.elapsed(),
        average_rounds: if total == 0 {
            0.0
        } else {
            total_rounds as f64 / total as f64
        },
        max_rounds,
        worst_secrets,
        failures,
    })
}

/// Print exhaustive run statistics
pub fn print_exhaustive_statistics(stats: &ExhaustiveStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EXHAUSTIVE RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n{}", "Performance:".bright_cyan().bold());
    println!("   Secrets tested:   {}", stats.total_secrets);
    println!(
        "   Solved:           {}",
        stats.solved.to_string().green().bold()
    );
    if stats.failed > 0 {
        println!("   Failed:           {}", stats.failed.to_string().red().bold());
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", stats.average_rounds).bright_yellow().bold()
    );
    println!("   Worst case:       {} rounds", stats.max_rounds);
    println!("   Time taken:       {:.2}s", stats.total_time.as_secs_f64());

    println!("\n{}", "Distribution:".bright_cyan().bold());
    let mut rounds: Vec<&usize> = stats.round_distribution.keys().collect();
    rounds.sort_unstable();
    for &round in rounds {
        if let Some(&count) = stats.round_distribution.get(&round) {
            let pct = (count as f64 / stats.total_secrets as f64) * 100.0;
            let bar_width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(bar_width).green(),
                "░".repeat(40_usize.saturating_sub(bar_width)).bright_black()
            );
            println!("   {round}: {bar} {count:5} ({pct:5.1}%)");
        }
    }

    if !stats.worst_secrets.is_empty() {
        println!("\n{}", "Hardest secrets:".bright_cyan().bold());
        for (secret, rounds) in &stats.worst_secrets {
            println!("   {secret} took {rounds} rounds");
        }
    }

    if !stats.failures.is_empty() {
        println!("\n{}", "Unsolved secrets:".red().bold());
        for secret in &stats.failures {
            println!("   {secret}");
        }
    }
}
