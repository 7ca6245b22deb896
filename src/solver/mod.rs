//! Reference solver
//!
//! Filters a dictionary by the constraints of the current game and ranks the
//! survivors with a replaceable strategy.

pub mod dictionary;
mod engine;
pub mod frequency;
pub mod strategy;

pub use dictionary::Dictionary;
pub use engine::Solver;
pub use strategy::{FirstCandidateStrategy, FrequencyStrategy, Strategy, StrategyType};
