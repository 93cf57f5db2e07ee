//! Guess feedback calculation and representation
//!
//! A Match packages the two hit counts a guess receives against a target:
//! - black hits: right color, right position
//! - white hits: right color, wrong position
//!
//! Each peg contributes to at most one hit, so repeated colors never score
//! more hits than the target actually contains.

use super::Sequence;
use std::fmt;

/// Feedback for a guess against a target sequence
///
/// Invariant: `black_hits + white_hits <= length` of the scored sequences.
/// `black_hits == length` signals a full match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Match {
    black: u16,
    white: u16,
}

/// Error type for scoring precondition violations
///
/// These indicate a logic defect in the caller rather than a recoverable
/// condition, so they are surfaced instead of silently handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    LengthMismatch { left: usize, right: usize },
    WrongLength { expected: usize, actual: usize },
    ColorOutOfRange { position: usize, color: u8, colors: u16 },
    SequenceTooLong(usize),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { left, right } => {
                write!(f, "Cannot score sequences of different lengths {left} and {right}")
            }
            Self::WrongLength { expected, actual } => {
                write!(f, "Sequence must be exactly {expected} pegs, got {actual}")
            }
            Self::ColorOutOfRange { position, color, colors } => {
                write!(
                    f,
                    "Color {color} at position {position} is out of range for {colors} colors"
                )
            }
            Self::SequenceTooLong(len) => {
                write!(f, "Sequence of {len} pegs exceeds the supported length")
            }
        }
    }
}

impl std::error::Error for InputError {}

impl Match {
    /// Package raw hit counts
    #[inline]
    #[must_use]
    pub const fn new(black: u16, white: u16) -> Self {
        Self { black, white }
    }

    /// Right color in the right position
    #[inline]
    #[must_use]
    pub const fn black_hits(self) -> u16 {
        self.black
    }

    /// Right color in the wrong position
    #[inline]
    #[must_use]
    pub const fn white_hits(self) -> u16 {
        self.white
    }

    /// Total pegs that scored either kind of hit
    #[inline]
    #[must_use]
    pub const fn total_hits(self) -> u16 {
        self.black + self.white
    }

    /// Whether this feedback means the guess equals the target
    #[inline]
    #[must_use]
    pub fn is_win(self, length: usize) -> bool {
        usize::from(self.black) == length
    }

    /// Score a guess against a target, handling repeated colors correctly
    ///
    /// # Algorithm
    /// 1. First pass: count exact positional matches as black hits and consume
    ///    those positions on both sides
    /// 2. Second pass: count color-only matches against the unconsumed
    ///    remainder as white hits, consuming one target peg per hit
    ///
    /// The result does not depend on which sequence plays the guess role.
    ///
    /// # Errors
    /// Returns `InputError` if the sequences differ in length, or are too long
    /// for the `u16` hit counters.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::{Match, Sequence};
    ///
    /// let secret = Sequence::new(vec![0, 1, 2, 3]);
    /// let guess = Sequence::new(vec![0, 0, 3, 2]);
    /// let feedback = Match::score(&guess, &secret).unwrap();
    ///
    /// assert_eq!(feedback.black_hits(), 1);
    /// assert_eq!(feedback.white_hits(), 2);
    /// ```
    pub fn score(guess: &Sequence, target: &Sequence) -> Result<Self, InputError> {
        if guess.len() != target.len() {
            return Err(InputError::LengthMismatch {
                left: guess.len(),
                right: target.len(),
            });
        }
        if guess.len() > usize::from(u16::MAX) {
            return Err(InputError::SequenceTooLong(guess.len()));
        }
        Ok(Self::score_aligned(guess, target))
    }

    /// Score two sequences whose lengths are already known to be equal
    ///
    /// Used on the hot path where both sequences come from the same candidate
    /// space and the length precondition holds by construction.
    pub(crate) fn score_aligned(guess: &Sequence, target: &Sequence) -> Self {
        debug_assert_eq!(guess.len(), target.len());

        let mut black = 0u16;
        // Target colors not consumed by a black hit, counted per color index
        let mut spare = [0u32; 256];

        for (&g, &t) in guess.colors().iter().zip(target.colors()) {
            if g == t {
                black += 1;
            } else {
                spare[usize::from(t)] += 1;
            }
        }

        let mut white = 0u16;
        for (&g, &t) in guess.colors().iter().zip(target.colors()) {
            if g != t && spare[usize::from(g)] > 0 {
                spare[usize::from(g)] -= 1;
                white += 1;
            }
        }

        Self { black, white }
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}b{}w", self.black, self.white)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(guess: &[u8], target: &[u8]) -> Match {
        Match::score(&Sequence::new(guess), &Sequence::new(target)).unwrap()
    }

    #[test]
    fn score_self_is_all_black() {
        for colors in [&[0u8, 1, 2, 3, 4][..], &[0, 0, 0], &[7, 3, 7, 3]] {
            let seq = Sequence::new(colors);
            let feedback = Match::score(&seq, &seq).unwrap();
            assert_eq!(feedback, Match::new(colors.len() as u16, 0));
            assert!(feedback.is_win(colors.len()));
        }
    }

    #[test]
    fn score_disjoint_colors_is_zero() {
        let feedback = score(&[0, 1, 2], &[3, 4, 5]);
        assert_eq!(feedback, Match::new(0, 0));
        assert!(!feedback.is_win(3));
    }

    #[test]
    fn score_displaced_colors() {
        // Position 0 exact; 3 and 2 present but displaced; the second 0 in the
        // guess has no unconsumed 0 left to match
        let feedback = score(&[0, 0, 3, 2], &[0, 1, 2, 3]);
        assert_eq!(feedback, Match::new(1, 2));
    }

    #[test]
    fn score_repeated_colors_consume_target_pegs() {
        // Only two 0s exist in the target, both consumed by exact matches
        let feedback = score(&[0, 0, 0, 3], &[0, 0, 1, 2]);
        assert_eq!(feedback, Match::new(2, 0));
    }

    #[test]
    fn score_full_rotation_is_all_white() {
        let feedback = score(&[1, 2, 3, 0], &[0, 1, 2, 3]);
        assert_eq!(feedback, Match::new(0, 4));
    }

    #[test]
    fn score_is_symmetric_in_content() {
        let pairs: [(&[u8], &[u8]); 4] = [
            (&[0, 0, 3, 2], &[0, 1, 2, 3]),
            (&[0, 0, 0, 3], &[0, 0, 1, 2]),
            (&[5, 5, 1], &[1, 5, 5]),
            (&[2, 2, 2, 2], &[2, 0, 2, 0]),
        ];

        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a));
        }
    }

    #[test]
    fn score_hits_never_exceed_length() {
        let sequences: [&[u8]; 4] = [&[0, 0, 1], &[1, 1, 1], &[2, 1, 0], &[0, 1, 2]];

        for a in sequences {
            for b in sequences {
                let feedback = score(a, b);
                assert!(usize::from(feedback.total_hits()) <= a.len());
            }
        }
    }

    #[test]
    fn score_length_mismatch_is_rejected() {
        let result = Match::score(&Sequence::new(vec![0, 1]), &Sequence::new(vec![0, 1, 2]));
        assert_eq!(
            result,
            Err(InputError::LengthMismatch { left: 2, right: 3 })
        );
    }

    #[test]
    fn match_accessors() {
        let feedback = Match::new(2, 1);
        assert_eq!(feedback.black_hits(), 2);
        assert_eq!(feedback.white_hits(), 1);
        assert_eq!(feedback.total_hits(), 3);
        assert!(!feedback.is_win(5));
        assert!(Match::new(5, 0).is_win(5));
    }

    #[test]
    fn match_display() {
        assert_eq!(format!("{}", Match::new(2, 1)), "2b1w");
        assert_eq!(format!("{}", Match::new(0, 0)), "0b0w");
    }
}
