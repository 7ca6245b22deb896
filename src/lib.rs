//! Wordle Testbench
//!
//! Drives Wordle solvers through simulated games and reports how they did.
//! External solvers are shell commands that receive the accumulated
//! constraints as three tokens and print their next guess; a bounded
//! scheduler caps how many run at once. A letter-frequency reference solver
//! speaks the same protocol.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_testbench::core::{ConstraintSet, FeedbackRow, Word};
//!
//! let guess = Word::new("trace").unwrap();
//! let target = Word::new("crane").unwrap();
//!
//! let row = FeedbackRow::classify(&guess, &target);
//! assert_eq!(row.to_string(), "-GGYG");
//!
//! let mut constraints = ConstraintSet::new();
//! constraints.update(&guess, &row);
//! assert_eq!(constraints.encode().to_string(), ".ra.e -,-,-,c,- t");
//! ```

// Core domain types
pub mod core;

// Reference solver
pub mod solver;

// Word lists
pub mod wordlists;

// Game sessions, solver invocation and scheduling
pub mod harness;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Harness settings
pub mod config;
