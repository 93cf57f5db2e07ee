//! Minimax guess selection
//!
//! Evaluates every member of the working set as a hypothetical next guess and
//! picks the one minimizing the worst-case surviving candidate count.

use super::calculator::{GuessEvaluation, profile_guess};
use crate::solver::CandidateSpace;
use crate::solver::observer::{SearchCancelled, SearchObserver};
use rayon::prelude::*;
use std::sync::Mutex;

/// Select the guess minimizing the worst-case remaining candidates
///
/// The guess universe is the working set itself: restricting guesses to
/// currently-possible secrets trades a small amount of guess-count optimality
/// for a much smaller search. Candidates are profiled in parallel; the
/// reduction folds by `(worst_case, enumeration_index)`, so the earliest
/// candidate in enumeration order wins ties regardless of how rayon schedules
/// the work.
///
/// The observer is notified once per candidate evaluated, under a lock so the
/// `evaluated/total` pairs it sees are strictly increasing, and its
/// cancellation flag is polled once per candidate.
///
/// Returns `Ok(None)` for an empty working set.
///
/// # Errors
/// Returns `SearchCancelled` if the observer requested cancellation; nothing
/// is committed and the caller simply abandons the round.
///
/// # Panics
/// Panics if a `candidate_evaluated` implementation panicked on another
/// worker thread.
pub fn select_best_guess(
    candidates: &CandidateSpace,
    observer: &dyn SearchObserver,
) -> Result<Option<GuessEvaluation>, SearchCancelled> {
    let total = candidates.len();
    let progress = Mutex::new(0usize);

    let reduced = candidates
        .as_slice()
        .par_iter()
        .enumerate()
        .map(|(index, guess)| {
            if observer.cancel_requested() {
                return Err(SearchCancelled);
            }

            let evaluation = profile_guess(guess, candidates);

            {
                let mut evaluated = progress.lock().expect("progress lock poisoned");
                *evaluated += 1;
                observer.candidate_evaluated(*evaluated, total);
            }

            Ok((index, evaluation))
        })
        .try_reduce_with(|best, other| {
            Ok(
                if (other.1.worst_case, other.0) < (best.1.worst_case, best.0) {
                    other
                } else {
                    best
                },
            )
        });

    match reduced {
        None => Ok(None),
        Some(Err(cancelled)) => Err(cancelled),
        Some(Ok((_, evaluation))) => Ok(Some(evaluation)),
    }
}
