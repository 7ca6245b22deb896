//! Solver dictionary
//!
//! An ordered, read-only word list with constraint filtering.

use crate::core::{ConstraintSet, Word};
use crate::wordlists::loader::load_from_file;
use std::io;
use std::path::Path;

/// Ordered list of candidate words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// Load a dictionary from a word-list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        load_from_file(path).map(Self::new)
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words consistent with `constraints`, in dictionary order
    #[must_use]
    pub fn filter(&self, constraints: &ConstraintSet) -> Vec<&Word> {
        self.words
            .iter()
            .filter(|word| constraints.matches(word))
            .collect()
    }
}

impl FromIterator<Word> for Dictionary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
