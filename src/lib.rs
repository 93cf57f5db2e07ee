//! Mastermind Minimax
//!
//! A Mastermind code breaker using Knuth-style worst-case minimax search: the
//! solver enumerates every possible code, filters by the feedback each guess
//! receives, and always plays the guess whose most adversarial feedback leaves
//! the fewest candidates standing.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind_minimax::core::{GameParams, Sequence};
//! use mastermind_minimax::session::{Outcome, Session};
//! use mastermind_minimax::solver::NullObserver;
//!
//! // A small board: 3 colors, 2 pegs, up to 9 attempts
//! let params = GameParams::new(3, 2, 9).unwrap();
//! let secret = Sequence::new(vec![2, 0]);
//!
//! let mut session = Session::new(params, secret).unwrap();
//! let (rounds, outcome) = session.run(&NullObserver).unwrap();
//!
//! assert!(matches!(outcome, Outcome::Solved { .. }));
//! assert!(rounds.last().unwrap().feedback.is_win(params.length()));
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Game session state machine
pub mod session;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
