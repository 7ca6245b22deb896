//! Main Wordle solver interface

use super::dictionary::Dictionary;
use super::strategy::Strategy;
use crate::core::{CodecError, ConstraintSet, ProtocolTriple, Word};

/// Main Wordle solver
///
/// Filters a dictionary by the constraints gathered so far and lets a
/// strategy pick among the survivors.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    dictionary: &'a Dictionary,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a new solver with the given strategy and dictionary
    pub const fn new(strategy: S, dictionary: &'a Dictionary) -> Self {
        Self {
            strategy,
            dictionary,
        }
    }

    /// Get the next best guess given the constraints so far
    ///
    /// Returns `None` if no dictionary word satisfies the constraints.
    pub fn next_guess(&self, constraints: &ConstraintSet) -> Option<&'a Word> {
        let candidates = self.dictionary.filter(constraints);
        self.strategy.select_guess(&candidates, constraints)
    }

    /// Answer a protocol query: decode the constraints and pick the next guess
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the query tokens are malformed.
    pub fn answer(&self, query: &ProtocolTriple) -> Result<Option<&'a Word>, CodecError> {
        let constraints = ConstraintSet::decode(query)?;
        Ok(self.next_guess(&constraints))
    }

    /// Count how many candidates remain given the constraints
    pub fn count_candidates(&self, constraints: &ConstraintSet) -> usize {
        self.dictionary.filter(constraints).len()
    }
}
