//! Code-breaking algorithms
//!
//! Candidate bookkeeping and the worst-case-minimizing guess search.

pub mod candidates;
mod engine;
pub mod minimax;
mod observer;
mod opening;

pub use candidates::CandidateSpace;
pub use engine::{Advisor, AdvisorError};
pub use minimax::{GuessEvaluation, partition_by_feedback, profile_guess, select_best_guess};
pub use observer::{NullObserver, SearchCancelled, SearchObserver};
pub use opening::book_opening;
