//! Peg sequence representation
//!
//! A Sequence is a fixed-length run of color indices, the unit of both guesses
//! and candidate secrets.

use std::fmt;
use std::str::FromStr;

/// An ordered, immutable run of color indices
///
/// Equality and hashing are structural, so two sequences with the same
/// element-wise content are interchangeable everywhere, including as set and
/// map keys. Ordering is lexicographic, which is also the order the full
/// candidate enumeration is produced in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sequence(Box<[u8]>);

/// Error type for unparseable sequence text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceParseError {
    Empty,
    InvalidColor(String),
}

impl fmt::Display for SequenceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Sequence must contain at least one color"),
            Self::InvalidColor(tok) => {
                write!(f, "Invalid color index {tok:?}, expected an integer in 0-255")
            }
        }
    }
}

impl std::error::Error for SequenceParseError {}

impl Sequence {
    /// Create a new Sequence from color indices
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::Sequence;
    ///
    /// let seq = Sequence::new(vec![0, 0, 1, 2, 3]);
    /// assert_eq!(seq.len(), 5);
    /// assert_eq!(seq.color_at(2), 1);
    /// ```
    #[must_use]
    pub fn new(colors: impl Into<Box<[u8]>>) -> Self {
        Self(colors.into())
    }

    /// Number of pegs in the sequence
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True for the zero-peg sequence
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The color indices as a slice
    #[inline]
    #[must_use]
    pub fn colors(&self) -> &[u8] {
        &self.0
    }

    /// The color index at a position
    ///
    /// # Panics
    /// Panics if `position >= len()`
    #[inline]
    #[must_use]
    pub fn color_at(&self, position: usize) -> u8 {
        self.0[position]
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, color) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{color}")?;
        }
        write!(f, "]")
    }
}

impl FromStr for Sequence {
    type Err = SequenceParseError;

    /// Parse from comma or whitespace separated color indices
    ///
    /// Surrounding brackets are accepted, so `"0,0,1,2,3"`, `"0 0 1 2 3"` and
    /// `"[0,0,1,2,3]"` all parse to the same sequence.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s
            .trim()
            .trim_start_matches('[')
            .trim_end_matches(']');

        let mut colors = Vec::new();
        for token in trimmed.split(|c: char| c == ',' || c.is_whitespace()) {
            if token.is_empty() {
                continue;
            }
            let color: u8 = token
                .parse()
                .map_err(|_| SequenceParseError::InvalidColor(token.to_string()))?;
            colors.push(color);
        }

        if colors.is_empty() {
            return Err(SequenceParseError::Empty);
        }

        Ok(Self::new(colors))
    }
}
