//! Search progress and cancellation hooks
//!
//! The minimax scan calls back once per candidate evaluated, so a caller can
//! render fractional progress or abort a long round without the search loop
//! knowing anything about the presentation layer.

use std::fmt;

/// Observer for a running guess search
///
/// Implementations must be `Sync`: the search evaluates candidates on rayon
/// worker threads and reports from whichever thread finished a candidate.
pub trait SearchObserver: Sync {
    /// Called after each candidate evaluation with a monotone `evaluated/total` pair
    fn candidate_evaluated(&self, evaluated: usize, total: usize) {
        let _ = (evaluated, total);
    }

    /// Polled once per candidate; returning `true` abandons the round
    fn cancel_requested(&self) -> bool {
        false
    }
}

/// Observer that ignores progress and never cancels
pub struct NullObserver;

impl SearchObserver for NullObserver {}

/// Error type for a search abandoned via [`SearchObserver::cancel_requested`]
///
/// The abandoned round commits nothing: the candidate space and round counter
/// are left exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCancelled;

impl fmt::Display for SearchCancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Guess search cancelled by observer")
    }
}

impl std::error::Error for SearchCancelled {}
