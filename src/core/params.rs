//! Game configuration
//!
//! Generalizes the classic 8-color, 5-peg, 8-attempt board into validated
//! construction parameters. Nothing in the solving algorithm depends on the
//! classic values.

use super::{InputError, Sequence};
use std::fmt;

/// Validated game configuration: alphabet size, sequence length, attempt budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameParams {
    colors: u16,
    length: usize,
    max_attempts: usize,
}

/// Error type for rejected configurations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    ZeroColors,
    TooManyColors(u16),
    ZeroLength,
    LengthTooLarge(usize),
    ZeroAttempts,
    SpaceTooLarge { colors: u16, length: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroColors => write!(f, "Number of colors must be positive"),
            Self::TooManyColors(colors) => {
                write!(f, "At most 256 colors are supported, got {colors}")
            }
            Self::ZeroLength => write!(f, "Sequence length must be positive"),
            Self::LengthTooLarge(length) => {
                write!(f, "Sequence length {length} exceeds the supported maximum")
            }
            Self::ZeroAttempts => write!(f, "Attempt budget must be positive"),
            Self::SpaceTooLarge { colors, length } => {
                write!(
                    f,
                    "Candidate space of {colors}^{length} sequences cannot be materialized"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl GameParams {
    /// Validate a configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if:
    /// - `colors` is zero or exceeds 256 (color indices are bytes)
    /// - `length` is zero or exceeds the `u16` hit counters
    /// - `max_attempts` is zero
    /// - `colors^length` overflows `usize`, since the candidate space is
    ///   materialized in full
    ///
    /// # Examples
    /// ```
    /// use mastermind_minimax::core::GameParams;
    ///
    /// let params = GameParams::new(8, 5, 8).unwrap();
    /// assert_eq!(params.space_size(), 32_768);
    ///
    /// assert!(GameParams::new(0, 5, 8).is_err());
    /// ```
    pub fn new(colors: u16, length: usize, max_attempts: usize) -> Result<Self, ConfigError> {
        if colors == 0 {
            return Err(ConfigError::ZeroColors);
        }
        if colors > 256 {
            return Err(ConfigError::TooManyColors(colors));
        }
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if length > usize::from(u16::MAX) {
            return Err(ConfigError::LengthTooLarge(length));
        }
        if max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        let length_exp = u32::try_from(length).map_err(|_| ConfigError::LengthTooLarge(length))?;
        if usize::from(colors).checked_pow(length_exp).is_none() {
            return Err(ConfigError::SpaceTooLarge { colors, length });
        }

        Ok(Self {
            colors,
            length,
            max_attempts,
        })
    }

    /// The classic board: 8 colors, 5 pegs, 8 attempts
    #[must_use]
    pub fn classic() -> Self {
        Self {
            colors: 8,
            length: 5,
            max_attempts: 8,
        }
    }

    /// Number of distinct colors
    #[inline]
    #[must_use]
    pub const fn colors(&self) -> u16 {
        self.colors
    }

    /// Number of pegs per sequence
    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Maximum number of guesses before the game is lost
    #[inline]
    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Total number of possible sequences, `colors^length`
    ///
    /// # Panics
    /// Will not panic: overflow was ruled out at construction.
    #[must_use]
    pub fn space_size(&self) -> usize {
        usize::from(self.colors)
            .checked_pow(self.length as u32)
            .expect("space size validated at construction")
    }

    /// Check a sequence against this configuration
    ///
    /// # Errors
    /// Returns `InputError` if the sequence has the wrong length or contains a
    /// color index outside `[0, colors)`.
    pub fn validate_sequence(&self, sequence: &Sequence) -> Result<(), InputError> {
        if sequence.len() != self.length {
            return Err(InputError::WrongLength {
                expected: self.length,
                actual: sequence.len(),
            });
        }
        for (position, &color) in sequence.colors().iter().enumerate() {
            if u16::from(color) >= self.colors {
                return Err(InputError::ColorOutOfRange {
                    position,
                    color,
                    colors: self.colors,
                });
            }
        }
        Ok(())
    }
}
