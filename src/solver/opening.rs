//! Opening book for the first guess
//!
//! Round one always faces the same full space, so its minimax result is
//! invariant across games. For the boards below the answer is precomputed;
//! everything else runs the regular search over the full enumeration.

use crate::core::{GameParams, Sequence};

/// Precomputed first guess for a configuration, if one is known
///
/// The 8x5 entry is the classic board's worst-case-optimal opener; 6x4 is
/// Knuth's two-pair opening for the original Mastermind box. Returning `None`
/// sends the caller to the full minimax search for round one. This is purely
/// an optimization: the search would produce an equally good guess.
///
/// # Examples
/// ```
/// use mastermind_minimax::core::{GameParams, Sequence};
/// use mastermind_minimax::solver::book_opening;
///
/// let classic = GameParams::new(8, 5, 8).unwrap();
/// assert_eq!(book_opening(&classic), Some(Sequence::new(vec![0, 0, 1, 2, 3])));
///
/// let unusual = GameParams::new(5, 3, 8).unwrap();
/// assert_eq!(book_opening(&unusual), None);
/// ```
#[must_use]
pub fn book_opening(params: &GameParams) -> Option<Sequence> {
    match (params.colors(), params.length()) {
        (8, 5) => Some(Sequence::new(vec![0, 0, 1, 2, 3])),
        (6, 4) => Some(Sequence::new(vec![0, 0, 1, 1])),
        _ => None,
    }
}
