//! Game session state machine
//!
//! A Session owns one game exclusively: the secret, the round counter, and the
//! working set of candidates. It advances `Ready -> (guess -> score ->
//! filter)* -> {Solved | Exhausted}`, handing a record of each round to the
//! caller and never exposing mutable state.

use crate::core::{GameParams, InputError, Match, Sequence};
use crate::solver::{
    CandidateSpace, SearchCancelled, SearchObserver, book_opening, select_best_guess,
};
use std::fmt;

/// How a finished game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The secret was guessed, in this many rounds
    Solved { rounds: usize },
    /// The attempt budget ran out
    Exhausted,
}

/// What happened in one round, for the presentation layer to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: usize,
    pub guess: Sequence,
    pub feedback: Match,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Error type for session construction and play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    InvalidSecret(InputError),
    InvalidOpening(InputError),
    InconsistentFeedback { round: usize },
    Cancelled,
    Finished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSecret(err) => write!(f, "Invalid secret: {err}"),
            Self::InvalidOpening(err) => write!(f, "Invalid opening guess: {err}"),
            Self::InconsistentFeedback { round } => {
                write!(f, "No candidate is consistent with the feedback after round {round}")
            }
            Self::Cancelled => write!(f, "Round abandoned: search cancelled"),
            Self::Finished => write!(f, "Session already reached a terminal outcome"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One game of code breaking, driven round by round
pub struct Session {
    params: GameParams,
    secret: Sequence,
    opening: Option<Sequence>,
    space: CandidateSpace,
    round: usize,
    outcome: Option<Outcome>,
}

impl Session {
    /// Start a game with the opening book's first guess, if the board has one
    ///
    /// # Errors
    /// Returns `SessionError::InvalidSecret` if the secret does not fit the
    /// configuration.
    pub fn new(params: GameParams, secret: Sequence) -> Result<Self, SessionError> {
        params
            .validate_sequence(&secret)
            .map_err(SessionError::InvalidSecret)?;

        Ok(Self {
            params,
            secret,
            opening: book_opening(&params),
            space: CandidateSpace::enumerate(&params),
            round: 0,
            outcome: None,
        })
    }

    /// Start a game with an explicit first guess instead of the book's
    ///
    /// # Errors
    /// Returns `SessionError::InvalidSecret` or `SessionError::InvalidOpening`
    /// if either sequence does not fit the configuration.
    pub fn with_opening(
        params: GameParams,
        secret: Sequence,
        opening: Sequence,
    ) -> Result<Self, SessionError> {
        params
            .validate_sequence(&opening)
            .map_err(SessionError::InvalidOpening)?;

        let mut session = Self::new(params, secret)?;
        session.opening = Some(opening);
        Ok(session)
    }

    /// The configuration this session was built for
    #[inline]
    #[must_use]
    pub const fn params(&self) -> GameParams {
        self.params
    }

    /// The secret being guessed at
    #[inline]
    #[must_use]
    pub const fn secret(&self) -> &Sequence {
        &self.secret
    }

    /// Rounds completed so far
    #[inline]
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    /// Candidates still consistent with all feedback so far
    #[inline]
    #[must_use]
    pub fn candidates_remaining(&self) -> usize {
        self.space.len()
    }

    /// Terminal outcome, once reached
    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Play one round: guess, score, filter
    ///
    /// Round one takes the opening guess when one is configured; every other
    /// round runs the minimax search over the working set. Cancellation via
    /// the observer abandons the round before anything is committed, so the
    /// working set and round counter are unchanged and the round can be
    /// retried.
    ///
    /// # Errors
    /// - `Finished` if the session already reached a terminal outcome
    /// - `Cancelled` if the observer aborted the search
    /// - `InconsistentFeedback` if filtering empties the working set, which
    ///   cannot happen while feedback is computed honestly from the secret
    pub fn play_round(
        &mut self,
        observer: &dyn SearchObserver,
    ) -> Result<RoundRecord, SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::Finished);
        }

        let candidates_before = self.space.len();
        let round = self.round + 1;

        let guess = if self.round == 0
            && let Some(opening) = &self.opening
        {
            opening.clone()
        } else {
            match select_best_guess(&self.space, observer) {
                Err(SearchCancelled) => return Err(SessionError::Cancelled),
                Ok(None) => return Err(SessionError::InconsistentFeedback { round }),
                Ok(Some(evaluation)) => evaluation.guess,
            }
        };

        let feedback = Match::score(&guess, &self.secret).map_err(SessionError::InvalidSecret)?;

        let candidates_after = if feedback.is_win(self.params.length()) {
            self.round = round;
            self.outcome = Some(Outcome::Solved { rounds: round });
            // Only the guess itself scores all-black against the guess
            1
        } else {
            let restricted = self.space.restrict(&guess, feedback);
            if restricted.is_empty() {
                return Err(SessionError::InconsistentFeedback { round });
            }
            let remaining = restricted.len();
            self.space = restricted;
            self.round = round;
            if round >= self.params.max_attempts() {
                self.outcome = Some(Outcome::Exhausted);
            }
            remaining
        };

        Ok(RoundRecord {
            round,
            guess,
            feedback,
            candidates_before,
            candidates_after,
        })
    }

    /// Play rounds until the game ends, collecting the per-round records
    ///
    /// # Errors
    /// Propagates the first error from [`Session::play_round`].
    pub fn run(
        &mut self,
        observer: &dyn SearchObserver,
    ) -> Result<(Vec<RoundRecord>, Outcome), SessionError> {
        let mut records = Vec::new();
        loop {
            if let Some(outcome) = self.outcome {
                return Ok((records, outcome));
            }
            records.push(self.play_round(observer)?);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::NullObserver;

    fn params(colors: u16, length: usize, attempts: usize) -> GameParams {
        GameParams::new(colors, length, attempts).unwrap()
    }

    #[test]
    fn fresh_session_is_ready() {
        let session = Session::new(params(3, 2, 9), Sequence::new(vec![1, 2])).unwrap();
        assert_eq!(session.round(), 0);
        assert_eq!(session.candidates_remaining(), 9);
        assert_eq!(session.outcome(), None);
    }

    #[test]
    fn invalid_secret_is_rejected() {
        let result = Session::new(params(3, 2, 9), Sequence::new(vec![1, 2, 0]));
        assert!(matches!(result, Err(SessionError::InvalidSecret(_))));

        let result = Session::new(params(3, 2, 9), Sequence::new(vec![1, 7]));
        assert!(matches!(result, Err(SessionError::InvalidSecret(_))));
    }

    #[test]
    fn invalid_opening_is_rejected() {
        let result = Session::with_opening(
            params(3, 2, 9),
            Sequence::new(vec![1, 2]),
            Sequence::new(vec![0, 0, 0]),
        );
        assert!(matches!(result, Err(SessionError::InvalidOpening(_))));
    }

    #[test]
    fn rounds_shrink_the_working_set() {
        let mut session = Session::new(params(3, 2, 9), Sequence::new(vec![2, 1])).unwrap();

        let record = session.play_round(&NullObserver).unwrap();
        assert_eq!(record.round, 1);
        assert_eq!(record.candidates_before, 9);
        assert!(record.candidates_after <= record.candidates_before);
        assert_eq!(session.round(), 1);
    }

    #[test]
    fn solved_session_reports_rounds_used() {
        let secret = Sequence::new(vec![0, 0]);
        let mut session = Session::new(params(3, 2, 9), secret.clone()).unwrap();

        let (records, outcome) = session.run(&NullObserver).unwrap();
        let rounds = records.len();
        assert_eq!(outcome, Outcome::Solved { rounds });
        assert_eq!(records.last().unwrap().guess, secret);
        assert!(records.last().unwrap().feedback.is_win(2));
    }

    #[test]
    fn session_with_custom_opening_uses_it() {
        let opening = Sequence::new(vec![2, 2]);
        let mut session = Session::with_opening(
            params(3, 2, 9),
            Sequence::new(vec![0, 1]),
            opening.clone(),
        )
        .unwrap();

        let record = session.play_round(&NullObserver).unwrap();
        assert_eq!(record.guess, opening);
    }

    #[test]
    fn classic_board_uses_book_opening_first() {
        let secret = Sequence::new(vec![7, 6, 5, 4, 3]);
        let mut session = Session::new(params(8, 5, 8), secret).unwrap();

        let record = session.play_round(&NullObserver).unwrap();
        assert_eq!(record.guess, Sequence::new(vec![0, 0, 1, 2, 3]));
    }

    #[test]
    fn attempt_budget_exhausts_the_session() {
        // One attempt, and the deterministic first guess [0,0] cannot be right
        let mut session = Session::new(params(3, 2, 1), Sequence::new(vec![2, 1])).unwrap();

        let (records, outcome) = session.run(&NullObserver).unwrap();
        assert_eq!(outcome, Outcome::Exhausted);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn finished_session_refuses_more_rounds() {
        let mut session = Session::new(params(3, 2, 9), Sequence::new(vec![0, 0])).unwrap();
        session.run(&NullObserver).unwrap();

        assert_eq!(
            session.play_round(&NullObserver),
            Err(SessionError::Finished)
        );
    }

    #[test]
    fn cancellation_leaves_the_session_untouched() {
        struct CancelAlways;

        impl SearchObserver for CancelAlways {
            fn cancel_requested(&self) -> bool {
                true
            }
        }

        let mut session = Session::new(params(3, 2, 9), Sequence::new(vec![2, 1])).unwrap();

        assert_eq!(session.play_round(&CancelAlways), Err(SessionError::Cancelled));
        assert_eq!(session.round(), 0);
        assert_eq!(session.candidates_remaining(), 9);
        assert_eq!(session.outcome(), None);

        // The abandoned round can simply be retried
        let record = session.play_round(&NullObserver).unwrap();
        assert_eq!(record.round, 1);
    }

    #[test]
    fn secret_survives_every_filter() {
        let secret = Sequence::new(vec![2, 1]);
        let mut session = Session::new(params(3, 2, 9), secret.clone()).unwrap();

        while session.outcome().is_none() {
            session.play_round(&NullObserver).unwrap();
            assert!(session.candidates_remaining() >= 1);
        }
        assert!(matches!(session.outcome(), Some(Outcome::Solved { .. })));
    }

    #[test]
    fn every_secret_of_the_small_board_is_solved() {
        // Exhaustive regression baseline over all 3^2 secrets: the search is
        // fully deterministic, so the round counts are stable
        let params = params(3, 2, 9);
        let space = CandidateSpace::enumerate(&params);

        let mut rounds_per_secret = Vec::new();
        for secret in &space {
            let mut session = Session::new(params, secret.clone()).unwrap();
            let (records, outcome) = session.run(&NullObserver).unwrap();

            match outcome {
                Outcome::Solved { rounds } => {
                    assert_eq!(rounds, records.len());
                    rounds_per_secret.push(rounds);
                }
                Outcome::Exhausted => panic!("secret {secret} was not solved"),
            }
        }

        // Secrets in enumeration order [0,0], [0,1], ..., [2,2]
        assert_eq!(rounds_per_secret, vec![1, 2, 3, 3, 2, 3, 3, 4, 3]);
    }

    #[test]
    fn knuth_board_secrets_are_solved() {
        // Spot-check a handful of 6x4 secrets; guessing only from the working
        // set can cost a round over Knuth's full-space bound, but the budget
        // leaves ample room
        let params = params(6, 4, 10);
        let secrets = [
            vec![0, 0, 0, 0],
            vec![5, 4, 3, 2],
            vec![2, 2, 4, 4],
            vec![1, 3, 5, 0],
        ];

        for colors in secrets {
            let secret = Sequence::new(colors);
            let mut session = Session::new(params, secret.clone()).unwrap();
            let (records, outcome) = session.run(&NullObserver).unwrap();

            assert_eq!(records[0].guess, Sequence::new(vec![0, 0, 1, 1]));
            assert!(
                matches!(outcome, Outcome::Solved { .. }),
                "secret {secret} was not solved"
            );
        }
    }
}
