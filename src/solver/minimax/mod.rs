//! Minimax guess selection
//!
//! Profiles every candidate by its worst-case surviving set and picks the
//! minimizer, the Knuth approach to code breaking.

mod calculator;
mod selector;

pub use calculator::{GuessEvaluation, partition_by_feedback, profile_guess};
pub use selector::select_best_guess;
