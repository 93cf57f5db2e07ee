//! Feedback-driven suggestion engine
//!
//! The Advisor plays the solver side of a game it cannot see: something else
//! holds the secret and scores each guess, and the Advisor narrows its working
//! set from the reported feedback alone. This is the human-scored mode, and
//! the one place where inconsistent feedback genuinely occurs (a mistyped
//! black or white count).

use crate::core::{GameParams, InputError, Match, Sequence};
use crate::solver::candidates::CandidateSpace;
use crate::solver::minimax::select_best_guess;
use crate::solver::observer::{SearchCancelled, SearchObserver};
use crate::solver::opening::book_opening;
use std::fmt;

/// Suggestion engine over an externally-scored game
pub struct Advisor {
    params: GameParams,
    space: CandidateSpace,
    history: Vec<(Sequence, Match)>,
}

/// Error type for advisor operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvisorError {
    InvalidGuess(InputError),
    ImpossibleFeedback { feedback: Match, length: usize },
    InconsistentFeedback { guess: Sequence, feedback: Match },
    NoCandidates,
    Cancelled,
}

impl fmt::Display for AdvisorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuess(err) => write!(f, "Invalid guess: {err}"),
            Self::ImpossibleFeedback { feedback, length } => {
                write!(
                    f,
                    "Feedback {feedback} counts more hits than the {length} pegs available"
                )
            }
            Self::InconsistentFeedback { guess, feedback } => {
                write!(
                    f,
                    "No candidate scores {feedback} against {guess}; some feedback was entered incorrectly"
                )
            }
            Self::NoCandidates => write!(f, "No candidates remain to suggest from"),
            Self::Cancelled => write!(f, "Suggestion search was cancelled"),
        }
    }
}

impl std::error::Error for AdvisorError {}

impl From<InputError> for AdvisorError {
    fn from(err: InputError) -> Self {
        Self::InvalidGuess(err)
    }
}

impl Advisor {
    /// Start advising a fresh game: the working set is the full enumeration
    #[must_use]
    pub fn new(params: GameParams) -> Self {
        Self {
            params,
            space: CandidateSpace::enumerate(&params),
            history: Vec::new(),
        }
    }

    /// The configuration this advisor was built for
    #[inline]
    #[must_use]
    pub const fn params(&self) -> GameParams {
        self.params
    }

    /// Candidates still consistent with every applied feedback
    #[inline]
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSpace {
        &self.space
    }

    /// Number of candidates remaining
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.space.len()
    }

    /// The applied `(guess, feedback)` pairs, oldest first
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[(Sequence, Match)] {
        &self.history
    }

    /// Propose the next guess
    ///
    /// The first round uses the opening book when the configuration has an
    /// entry; every other round runs the minimax search over the working set.
    ///
    /// # Errors
    /// Returns `AdvisorError::Cancelled` if the observer aborted the search.
    pub fn suggest(&self, observer: &dyn SearchObserver) -> Result<Sequence, AdvisorError> {
        if self.history.is_empty()
            && let Some(opening) = book_opening(&self.params)
        {
            return Ok(opening);
        }

        match select_best_guess(&self.space, observer) {
            Err(SearchCancelled) => Err(AdvisorError::Cancelled),
            Ok(None) => Err(AdvisorError::NoCandidates),
            Ok(Some(evaluation)) => Ok(evaluation.guess),
        }
    }

    /// Apply externally-produced feedback for a guess
    ///
    /// On success the working set is replaced by its consistent subset and the
    /// remaining candidate count is returned. On any error nothing is
    /// committed, so the caller can correct the feedback and retry.
    ///
    /// # Errors
    /// - `InvalidGuess` if the guess does not fit the configuration
    /// - `ImpossibleFeedback` if `black + white` exceeds the sequence length
    /// - `InconsistentFeedback` if no candidate matches the feedback, which
    ///   means some earlier or current score was entered incorrectly
    pub fn apply_feedback(
        &mut self,
        guess: &Sequence,
        feedback: Match,
    ) -> Result<usize, AdvisorError> {
        self.params.validate_sequence(guess)?;
        if usize::from(feedback.total_hits()) > self.params.length() {
            return Err(AdvisorError::ImpossibleFeedback {
                feedback,
                length: self.params.length(),
            });
        }

        let restricted = self.space.restrict(guess, feedback);
        if restricted.is_empty() {
            return Err(AdvisorError::InconsistentFeedback {
                guess: guess.clone(),
                feedback,
            });
        }

        self.space = restricted;
        self.history.push((guess.clone(), feedback));
        Ok(self.space.len())
    }

    /// Retract the most recent feedback
    ///
    /// Rebuilds the working set by replaying the remaining history over a
    /// fresh enumeration. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        if self.history.pop().is_none() {
            return false;
        }

        let mut space = CandidateSpace::enumerate(&self.params);
        for (guess, feedback) in &self.history {
            space = space.restrict(guess, *feedback);
        }
        self.space = space;
        true
    }

    /// Forget all feedback and start a new game
    pub fn reset(&mut self) {
        self.history.clear();
        self.space = CandidateSpace::enumerate(&self.params);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::observer::NullObserver;

    fn advisor(colors: u16, length: usize) -> Advisor {
        Advisor::new(GameParams::new(colors, length, 9).unwrap())
    }

    #[test]
    fn fresh_advisor_holds_full_space() {
        let advisor = advisor(3, 2);
        assert_eq!(advisor.remaining(), 9);
        assert!(advisor.history().is_empty());
    }

    #[test]
    fn suggestion_is_a_possible_secret() {
        let advisor = advisor(3, 2);
        let suggestion = advisor.suggest(&NullObserver).unwrap();
        assert!(advisor.candidates().contains(&suggestion));
    }

    #[test]
    fn first_suggestion_uses_the_book_when_available() {
        let advisor = Advisor::new(GameParams::new(6, 4, 10).unwrap());
        let suggestion = advisor.suggest(&NullObserver).unwrap();
        assert_eq!(suggestion, Sequence::new(vec![0, 0, 1, 1]));
    }

    #[test]
    fn apply_feedback_shrinks_the_space() {
        let mut advisor = advisor(3, 2);
        let guess = Sequence::new(vec![0, 1]);
        let feedback = Match::score(&guess, &Sequence::new(vec![2, 1])).unwrap();

        let remaining = advisor.apply_feedback(&guess, feedback).unwrap();
        assert!(remaining < 9);
        assert_eq!(remaining, advisor.remaining());
        assert!(advisor.candidates().contains(&Sequence::new(vec![2, 1])));
    }

    #[test]
    fn inconsistent_feedback_is_rejected_without_commit() {
        let mut advisor = advisor(3, 2);
        let guess = Sequence::new(vec![0, 1]);

        // (black=1, white=1) over two pegs is unsatisfiable
        let result = advisor.apply_feedback(&guess, Match::new(1, 1));
        assert!(matches!(
            result,
            Err(AdvisorError::InconsistentFeedback { .. })
        ));
        assert_eq!(advisor.remaining(), 9);
        assert!(advisor.history().is_empty());
    }

    #[test]
    fn impossible_feedback_is_rejected() {
        let mut advisor = advisor(3, 2);
        let result = advisor.apply_feedback(&Sequence::new(vec![0, 1]), Match::new(2, 1));
        assert!(matches!(
            result,
            Err(AdvisorError::ImpossibleFeedback { .. })
        ));
    }

    #[test]
    fn invalid_guess_is_rejected() {
        let mut advisor = advisor(3, 2);

        let wrong_length = advisor.apply_feedback(&Sequence::new(vec![0]), Match::new(0, 0));
        assert!(matches!(wrong_length, Err(AdvisorError::InvalidGuess(_))));

        let out_of_range = advisor.apply_feedback(&Sequence::new(vec![0, 5]), Match::new(0, 0));
        assert!(matches!(out_of_range, Err(AdvisorError::InvalidGuess(_))));
    }

    #[test]
    fn undo_restores_the_previous_space() {
        let mut advisor = advisor(3, 2);
        let guess = Sequence::new(vec![0, 1]);

        advisor.apply_feedback(&guess, Match::new(1, 0)).unwrap();
        assert!(advisor.remaining() < 9);

        assert!(advisor.undo());
        assert_eq!(advisor.remaining(), 9);
        assert!(advisor.history().is_empty());
    }

    #[test]
    fn undo_replays_earlier_feedback() {
        let mut advisor = advisor(3, 3);
        let first = Sequence::new(vec![0, 1, 2]);
        let second = Sequence::new(vec![1, 1, 0]);

        advisor.apply_feedback(&first, Match::new(1, 1)).unwrap();
        let after_first = advisor.remaining();
        advisor.apply_feedback(&second, Match::new(0, 2)).unwrap();

        assert!(advisor.undo());
        assert_eq!(advisor.remaining(), after_first);
        assert_eq!(advisor.history().len(), 1);
    }

    #[test]
    fn undo_on_fresh_advisor_is_a_noop() {
        let mut advisor = advisor(3, 2);
        assert!(!advisor.undo());
        assert_eq!(advisor.remaining(), 9);
    }

    #[test]
    fn reset_starts_over() {
        let mut advisor = advisor(3, 2);
        advisor
            .apply_feedback(&Sequence::new(vec![0, 1]), Match::new(1, 0))
            .unwrap();

        advisor.reset();
        assert_eq!(advisor.remaining(), 9);
        assert!(advisor.history().is_empty());
    }

    #[test]
    fn advisor_cracks_an_externally_scored_secret() {
        let secret = Sequence::new(vec![2, 0, 1]);
        let mut advisor = advisor(3, 3);

        for _ in 0..9 {
            let guess = advisor.suggest(&NullObserver).unwrap();
            let feedback = Match::score(&guess, &secret).unwrap();
            if feedback.is_win(3) {
                return;
            }
            advisor.apply_feedback(&guess, feedback).unwrap();
        }

        panic!("advisor failed to converge on the secret");
    }
}
