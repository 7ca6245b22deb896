//! Accumulated knowledge about a target word
//!
//! A `ConstraintSet` records what a game has learned so far: confirmed letters
//! per position, letters known to be misplaced per position, and letters known
//! to be absent. It only ever gains information.

use super::feedback::{Feedback, FeedbackRow};
use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// A set of lowercase ASCII letters stored as a 26-bit mask
///
/// Iteration is in alphabetical order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    const fn bit(letter: u8) -> u32 {
        debug_assert!(letter.is_ascii_lowercase(), "letter must be a-z");
        1 << (letter - b'a')
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        letter.is_ascii_lowercase() && self.0 & Self::bit(letter) != 0
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        self.0 |= Self::bit(letter);
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_disjoint(self, other: Self) -> bool {
        self.0 & other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_superset(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<u8> for LetterSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

impl fmt::Display for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter()
            .try_for_each(|letter| write!(f, "{}", char::from(letter)))
    }
}

/// Everything learned about the target word so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstraintSet {
    positions: [Option<u8>; WORD_LENGTH],
    misplaced: [LetterSet; WORD_LENGTH],
    excluded: LetterSet,
}

impl ConstraintSet {
    /// An empty constraint set (nothing known)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a constraint set from its parts
    ///
    /// The parts are taken as given; `decode` uses this to rebuild what
    /// `encode` produced.
    #[must_use]
    pub const fn from_parts(
        positions: [Option<u8>; WORD_LENGTH],
        misplaced: [LetterSet; WORD_LENGTH],
        excluded: LetterSet,
    ) -> Self {
        Self {
            positions,
            misplaced,
            excluded,
        }
    }

    #[must_use]
    pub const fn positions(&self) -> &[Option<u8>; WORD_LENGTH] {
        &self.positions
    }

    #[must_use]
    pub const fn misplaced(&self) -> &[LetterSet; WORD_LENGTH] {
        &self.misplaced
    }

    #[must_use]
    pub const fn excluded(&self) -> LetterSet {
        self.excluded
    }

    /// Letters confirmed at some position
    #[must_use]
    pub fn confirmed_letters(&self) -> LetterSet {
        self.positions.iter().flatten().copied().collect()
    }

    /// Every letter named by any constraint (confirmed, misplaced or excluded)
    #[must_use]
    pub fn known_letters(&self) -> LetterSet {
        self.misplaced
            .iter()
            .fold(self.confirmed_letters().union(self.excluded), |acc, set| {
                acc.union(*set)
            })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply one round of feedback for `guess`
    ///
    /// - Hit: confirm the position and drop the letter from every misplaced set
    /// - Present: record the letter as misplaced at that position, unless it is
    ///   already confirmed somewhere
    /// - Absent: exclude the letter, unless it is a hit or present elsewhere in
    ///   the same row
    ///
    /// Hits are applied first so the result does not depend on position order.
    pub fn update(&mut self, guess: &Word, row: &FeedbackRow) {
        let mut required = LetterSet::EMPTY;

        for (i, cell) in row.iter().enumerate() {
            if cell == Feedback::Hit {
                let letter = guess.char_at(i);
                self.positions[i] = Some(letter);
                required.insert(letter);
            }
        }

        let confirmed = self.confirmed_letters();
        for set in &mut self.misplaced {
            *set = set.difference(confirmed);
        }

        for (i, cell) in row.iter().enumerate() {
            if cell == Feedback::Present {
                let letter = guess.char_at(i);
                required.insert(letter);
                if !confirmed.contains(letter) {
                    self.misplaced[i].insert(letter);
                }
            }
        }

        for (i, cell) in row.iter().enumerate() {
            let letter = guess.char_at(i);
            if cell == Feedback::Absent && !required.contains(letter) {
                self.excluded.insert(letter);
            }
        }
    }

    /// Check whether `word` is consistent with every constraint
    ///
    /// A word matches iff every confirmed position holds the confirmed letter,
    /// every misplaced letter occurs in the word but not at its position, and
    /// no excluded letter occurs in the word.
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let placed = self
            .positions
            .iter()
            .enumerate()
            .all(|(i, slot)| slot.is_none_or(|letter| word.char_at(i) == letter));

        placed
            && self.misplaced.iter().enumerate().all(|(i, set)| {
                word.letters().is_superset(*set) && !set.contains(word.char_at(i))
            })
            && word.letters().is_disjoint(self.excluded)
    }

    /// Check that this set carries at least the information in `earlier`
    #[must_use]
    pub fn refines(&self, earlier: &Self) -> bool {
        let confirmed = self.confirmed_letters();
        let positions_kept = earlier
            .positions
            .iter()
            .zip(&self.positions)
            .all(|(before, now)| before.is_none() || before == now);
        let misplaced_kept = earlier
            .misplaced
            .iter()
            .zip(&self.misplaced)
            .all(|(before, now)| now.is_superset(before.difference(confirmed)));

        positions_kept && misplaced_kept && self.excluded.is_superset(earlier.excluded)
    }
}
