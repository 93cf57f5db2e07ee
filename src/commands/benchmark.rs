//! Benchmark command
//!
//! Times the solver across a batch of randomly drawn secrets.

use super::solve::random_secret;
use crate::core::GameParams;
use crate::session::{Outcome, Session, SessionError};
use crate::solver::NullObserver;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub solved: usize,
    pub total_rounds: usize,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Run the solver against `count` random secrets
///
/// # Errors
/// Propagates `SessionError` from a failed session; losing on attempts is
/// counted, not an error.
pub fn run_benchmark(params: GameParams, count: usize) -> Result<BenchmarkResult, SessionError> {
    let start = Instant::now();

    let mut solved = 0;
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for _ in 0..count {
        let secret = random_secret(&params);
        let mut session = Session::new(params, secret)?;
        let (records, outcome) = session.run(&NullObserver)?;

        let rounds = records.len();
        if matches!(outcome, Outcome::Solved { .. }) {
            solved += 1;
        }
        total_rounds += rounds;
        min_rounds = min_rounds.min(rounds);
        max_rounds = max_rounds.max(rounds);
        *distribution.entry(rounds).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let average_rounds = if count == 0 {
        0.0
    } else {
        total_rounds as f64 / count as f64
    };
    let secrets_per_second = if duration.as_secs_f64() > 0.0 {
        count as f64 / duration.as_secs_f64()
    } else {
        0.0
    };

    Ok(BenchmarkResult {
        total_secrets: count,
        solved,
        total_rounds,
        average_rounds,
        min_rounds: if count == 0 { 0 } else { min_rounds },
        max_rounds,
        distribution,
        duration,
        secrets_per_second,
    })
}
