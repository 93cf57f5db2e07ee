//! Candidate space enumeration and restriction
//!
//! The candidate space starts as the full `colors^length` universe and only
//! ever shrinks: every restriction returns a new, smaller space, leaving the
//! input untouched.

use crate::core::{GameParams, Match, Sequence};

/// The set of sequences still consistent with all feedback received so far
///
/// Backed by a vector in enumeration (lexicographic) order. Uniqueness holds
/// by construction: enumeration produces every sequence exactly once and
/// restriction only removes members. The fixed order doubles as the
/// deterministic tie-break order for minimax guess selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSpace {
    sequences: Vec<Sequence>,
}

impl CandidateSpace {
    /// Enumerate the full universe of sequences for a configuration
    ///
    /// Produces every sequence of `length` pegs over `colors` symbols exactly
    /// once, by depth-first construction: fix one position at a time, branching
    /// over all colors. The result is lexicographically ordered.
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::GameParams;
    /// use mastermind_minimax::solver::CandidateSpace;
    ///
    /// let params = GameParams::new(3, 2, 9).unwrap();
    /// let space = CandidateSpace::enumerate(&params);
    /// assert_eq!(space.len(), 9);
    /// ```
    #[must_use]
    pub fn enumerate(params: &GameParams) -> Self {
        let mut sequences = Vec::with_capacity(params.space_size());
        let mut prefix = Vec::with_capacity(params.length());
        fill_position(params.colors(), params.length(), &mut prefix, &mut sequences);
        Self { sequences }
    }

    /// Restrict to the subset consistent with observed feedback
    ///
    /// Keeps exactly the members that would produce `feedback` when scored
    /// against `guess`. Does not mutate `self`; callers replace their working
    /// set with the returned space.
    #[must_use]
    pub fn restrict(&self, guess: &Sequence, feedback: Match) -> Self {
        let sequences = self
            .sequences
            .iter()
            .filter(|candidate| Match::score_aligned(candidate, guess) == feedback)
            .cloned()
            .collect();
        Self { sequences }
    }

    /// Number of candidates remaining
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// True once no candidate is consistent with the feedback trail
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// The candidates in enumeration order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Sequence] {
        &self.sequences
    }

    /// Iterate the candidates in enumeration order
    pub fn iter(&self) -> std::slice::Iter<'_, Sequence> {
        self.sequences.iter()
    }

    /// Membership test
    #[must_use]
    pub fn contains(&self, sequence: &Sequence) -> bool {
        self.sequences.iter().any(|member| member == sequence)
    }
}

impl<'a> IntoIterator for &'a CandidateSpace {
    type Item = &'a Sequence;
    type IntoIter = std::slice::Iter<'a, Sequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}

fn fill_position(colors: u16, length: usize, prefix: &mut Vec<u8>, out: &mut Vec<Sequence>) {
    if prefix.len() == length {
        out.push(Sequence::new(prefix.as_slice()));
        return;
    }
    for color in 0..colors {
        prefix.push(color as u8);
        fill_position(colors, length, prefix, out);
        prefix.pop();
    }
}
