//! Core domain types for Mastermind
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod params;
mod sequence;

pub use feedback::{InputError, Match};
pub use params::{ConfigError, GameParams};
pub use sequence::{Sequence, SequenceParseError};
