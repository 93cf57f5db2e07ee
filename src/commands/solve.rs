//! Secret solving command
//!
//! Runs a full automated session against a given or randomly drawn secret and
//! returns the solution path.

use crate::core::{GameParams, Sequence};
use crate::session::{Outcome, RoundRecord, Session, SessionError};
use crate::solver::{NullObserver, SearchObserver};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

/// Configuration for solving a secret
pub struct SolveConfig {
    /// Secret to crack; drawn at random when absent
    pub secret: Option<Sequence>,
    /// Show per-round candidate counts and a live search progress bar
    pub verbose: bool,
}

/// Result of solving a secret
pub struct SolveResult {
    pub secret: Sequence,
    pub outcome: Outcome,
    pub rounds: Vec<RoundRecord>,
}

/// Draw a uniformly random secret for a configuration
///
/// Randomness lives here on the presentation side; the session itself never
/// draws anything.
#[must_use]
pub fn random_secret(params: &GameParams) -> Sequence {
    let mut rng = rand::rng();
    let colors: Vec<u8> = (0..params.length())
        .map(|_| rng.random_range(0..params.colors()) as u8)
        .collect();
    Sequence::new(colors)
}

/// Search progress rendered as an indicatif bar, one tick per candidate
struct SearchProgress {
    bar: ProgressBar,
}

impl SearchProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} candidates")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        Self { bar }
    }

    fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

impl SearchObserver for SearchProgress {
    fn candidate_evaluated(&self, evaluated: usize, total: usize) {
        self.bar.set_length(total as u64);
        self.bar.set_position(evaluated as u64);
    }
}

/// Solve one secret end to end
///
/// # Errors
/// Returns `SessionError` if the secret does not fit the configuration. The
/// game being lost on attempts is a normal `Outcome::Exhausted`, not an error.
pub fn solve_secret(params: GameParams, config: SolveConfig) -> Result<SolveResult, SessionError> {
    let secret = config.secret.unwrap_or_else(|| random_secret(&params));
    let mut session = Session::new(params, secret.clone())?;

    let (rounds, outcome) = if config.verbose {
        let progress = SearchProgress::new();
        let result = session.run(&progress);
        progress.finish();
        result?
    } else {
        session.run(&NullObserver)?
    };

    Ok(SolveResult {
        secret,
        outcome,
        rounds,
    })
}
