//! Guess analysis command
//!
//! Profiles a single guess against the full candidate space: worst-case
//! surviving set, the feedback that produces it, and the expected surviving
//! set over a uniform secret.

use crate::core::{GameParams, InputError, Match, Sequence};
use crate::solver::{CandidateSpace, partition_by_feedback};

/// Result of analyzing a guess
pub struct AnalysisResult {
    pub guess: Sequence,
    pub space_size: usize,
    pub feedback_classes: usize,
    pub worst_case: usize,
    pub worst_feedback: Match,
    pub expected_remaining: f64,
}

/// Profile a guess as a hypothetical opening move
///
/// # Errors
/// Returns `InputError` if the guess does not fit the configuration.
pub fn analyze_guess(params: &GameParams, guess: &Sequence) -> Result<AnalysisResult, InputError> {
    params.validate_sequence(guess)?;

    let space = CandidateSpace::enumerate(params);
    let classes = partition_by_feedback(guess, &space);

    let (worst_feedback, worst_case) = classes
        .iter()
        .map(|(&feedback, &count)| (feedback, count))
        .max_by(|(feedback_a, count_a), (feedback_b, count_b)| {
            count_a.cmp(count_b).then_with(|| {
                (feedback_b.white_hits(), feedback_b.black_hits())
                    .cmp(&(feedback_a.white_hits(), feedback_a.black_hits()))
            })
        })
        .unwrap_or((Match::new(0, 0), 0));

    // A secret in a class of size n leaves n candidates, so the expectation
    // over a uniform secret is sum(n^2) / total
    let expected_remaining = classes
        .values()
        .map(|&count| (count * count) as f64)
        .sum::<f64>()
        / space.len() as f64;

    Ok(AnalysisResult {
        guess: guess.clone(),
        space_size: space.len(),
        feedback_classes: classes.len(),
        worst_case,
        worst_feedback,
        expected_remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_valid_guess() {
        let params = GameParams::new(3, 2, 9).unwrap();
        let result = analyze_guess(&params, &Sequence::new(vec![0, 1])).unwrap();

        assert_eq!(result.space_size, 9);
        assert!(result.worst_case >= 1);
        assert!(result.worst_case <= 9);
        assert!(result.expected_remaining <= result.worst_case as f64);
        assert!(result.expected_remaining >= 1.0);
    }

    #[test]
    fn analyze_matches_hand_computed_profile() {
        // [0,0] against the full 3x2 space: classes (2b,0w)=1, (1b,0w)=4,
        // (0b,0w)=4, worst case 4
        let params = GameParams::new(3, 2, 9).unwrap();
        let result = analyze_guess(&params, &Sequence::new(vec![0, 0])).unwrap();

        assert_eq!(result.feedback_classes, 3);
        assert_eq!(result.worst_case, 4);
        assert_eq!(result.expected_remaining, 33.0 / 9.0);
    }

    #[test]
    fn analyze_rejects_invalid_guess() {
        let params = GameParams::new(3, 2, 9).unwrap();

        assert!(analyze_guess(&params, &Sequence::new(vec![0, 1, 2])).is_err());
        assert!(analyze_guess(&params, &Sequence::new(vec![0, 9])).is_err());
    }
}
