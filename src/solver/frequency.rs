//! Letter-frequency scoring
//!
//! Scores each candidate by how common its letters are among the current
//! candidates, position by position, plus a bonus for letters the game has
//! not yet asked about. The tables are rebuilt from the filtered candidate
//! list every round, so later-round scores depend only on what is still
//! possible.

use crate::core::{LetterSet, WORD_LENGTH, Word};
use rayon::prelude::*;

const ALPHABET: usize = 26;

#[inline]
const fn index(letter: u8) -> usize {
    (letter - b'a') as usize
}

/// Letter counts over a candidate list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequencies {
    by_position: [[usize; ALPHABET]; WORD_LENGTH],
    containing: [usize; ALPHABET],
}

impl LetterFrequencies {
    /// Count letters over `candidates`
    #[must_use]
    pub fn from_candidates(candidates: &[&Word]) -> Self {
        let mut by_position = [[0; ALPHABET]; WORD_LENGTH];
        let mut containing = [0; ALPHABET];

        for word in candidates {
            for (position, &letter) in word.chars().iter().enumerate() {
                by_position[position][index(letter)] += 1;
            }
            for letter in word.letters().iter() {
                containing[index(letter)] += 1;
            }
        }

        Self {
            by_position,
            containing,
        }
    }

    /// Number of candidates with `letter` at `position`
    #[inline]
    #[must_use]
    pub const fn at(&self, position: usize, letter: u8) -> usize {
        self.by_position[position][index(letter)]
    }

    /// Number of candidates containing `letter` anywhere
    #[inline]
    #[must_use]
    pub const fn containing(&self, letter: u8) -> usize {
        self.containing[index(letter)]
    }

    /// Score a word
    ///
    /// Sum of positional frequencies, plus `containing(letter)` once for each
    /// distinct letter of the word that is not in `known`.
    #[must_use]
    pub fn score(&self, word: &Word, known: LetterSet) -> usize {
        let positional: usize = word
            .chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.at(position, letter))
            .sum();

        let bonus: usize = word
            .letters()
            .difference(known)
            .iter()
            .map(|letter| self.containing(letter))
            .sum();

        positional + bonus
    }
}

/// Select the highest-scoring candidate
///
/// Ties go to the candidate that comes first. Returns the word and its
/// score, or `None` if there are no candidates.
///
/// # Examples
/// ```
/// use wordle_testbench::core::{LetterSet, Word};
/// use wordle_testbench::solver::frequency::select_best_guess;
///
/// let words: Vec<Word> = ["crane", "slate", "irate"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let candidates: Vec<&Word> = words.iter().collect();
///
/// let (best, score) = select_best_guess(&candidates, LetterSet::EMPTY).unwrap();
/// assert_eq!(best.text(), "irate");
/// assert_eq!(score, 22);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    candidates: &[&'a Word],
    known: LetterSet,
) -> Option<(&'a Word, usize)> {
    let frequencies = LetterFrequencies::from_candidates(candidates);

    candidates
        .par_iter()
        .enumerate()
        .map(|(order, &word)| (order, word, frequencies.score(word, known)))
        .max_by(|(o1, _, s1), (o2, _, s2)| s1.cmp(s2).then(o2.cmp(o1)))
        .map(|(_, word, score)| (word, score))
}
