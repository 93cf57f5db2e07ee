//! Worst-case profiling of a single guess
//!
//! Given a guess and the current candidate space, computes the largest
//! feedback class: the number of candidates that would survive the most
//! adversarial feedback this guess could receive.

use crate::core::{Match, Sequence};
use crate::solver::CandidateSpace;
use rustc_hash::FxHashMap;

/// A candidate guess with its worst-case outcome
///
/// `worst_case` is the size of the largest surviving candidate set over all
/// feedback the guess could receive; `worst_feedback` is the feedback class
/// that produces it. Used transiently during guess selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessEvaluation {
    pub guess: Sequence,
    pub worst_case: usize,
    pub worst_feedback: Match,
}

/// Profile a guess against a candidate space
///
/// Partitions the space by the feedback each candidate would produce against
/// the guess and returns the largest class. Sizing the partition classes is
/// equivalent to sizing `restrict` for every attainable `(white, black)` pair,
/// without materializing any of the restricted sets.
///
/// When several classes tie for largest, the smallest `(white, black)` pair
/// wins, keeping the profile deterministic.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{GameParams, Sequence};
/// use mastermind_minimax::solver::{CandidateSpace, profile_guess};
///
/// let params = GameParams::new(3, 2, 9).unwrap();
/// let space = CandidateSpace::enumerate(&params);
/// let evaluation = profile_guess(&Sequence::new(vec![0, 1]), &space);
///
/// assert!(evaluation.worst_case <= space.len());
/// ```
#[must_use]
pub fn profile_guess(guess: &Sequence, candidates: &CandidateSpace) -> GuessEvaluation {
    let (worst_feedback, worst_case) = partition_by_feedback(guess, candidates)
        .into_iter()
        .max_by(|(feedback_a, count_a), (feedback_b, count_b)| {
            count_a.cmp(count_b).then_with(|| {
                // Prefer the smaller (white, black) pair on count ties
                (feedback_b.white_hits(), feedback_b.black_hits())
                    .cmp(&(feedback_a.white_hits(), feedback_a.black_hits()))
            })
        })
        .unwrap_or((Match::new(0, 0), 0));

    GuessEvaluation {
        guess: guess.clone(),
        worst_case,
        worst_feedback,
    }
}

/// Size every feedback class a guess could receive from a candidate space
///
/// The keys are exactly the attainable feedback values; each candidate lands
/// in precisely one class, so the counts sum to the space size.
#[must_use]
pub fn partition_by_feedback(
    guess: &Sequence,
    candidates: &CandidateSpace,
) -> FxHashMap<Match, usize> {
    let mut classes = FxHashMap::default();
    for candidate in candidates {
        let feedback = Match::score_aligned(candidate, guess);
        *classes.entry(feedback).or_insert(0) += 1;
    }
    classes
}
