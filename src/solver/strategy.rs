//! Guess selection strategies
//!
//! Defines the Strategy trait and the letter-frequency implementation.

use super::frequency;
use crate::core::{ConstraintSet, Word};

/// A strategy for selecting the next guess from the surviving candidates
pub trait Strategy {
    /// Select the best guess from `candidates`, all of which are consistent
    /// with `constraints`
    ///
    /// Returns `None` if there are no candidates.
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        constraints: &ConstraintSet,
    ) -> Option<&'a Word>;
}

/// Letter-frequency strategy
///
/// Picks the candidate whose letters are most common among the remaining
/// candidates, favouring letters no constraint mentions yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        constraints: &ConstraintSet,
    ) -> Option<&'a Word> {
        frequency::select_best_guess(candidates, constraints.known_letters()).map(|(best, _)| best)
    }
}

/// First-candidate strategy
///
/// Always guesses the first surviving candidate in dictionary order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        _constraints: &ConstraintSet,
    ) -> Option<&'a Word> {
        candidates.first().copied()
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy)]
pub enum StrategyType {
    /// Letter-frequency scoring (default)
    Frequency(FrequencyStrategy),
    /// First surviving candidate
    First(FirstCandidateStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        constraints: &ConstraintSet,
    ) -> Option<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates, constraints),
            Self::First(s) => s.select_guess(candidates, constraints),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "first".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "first" => Self::First(FirstCandidateStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }
}
