//! Per-round feedback classification
//!
//! Each position of a guess is classified as:
//! - Hit (letter at the correct position)
//! - Present (letter occurs in the target, but not here)
//! - Absent (letter does not occur in the target at all)
//!
//! Duplicate letters are classified independently per position using only
//! presence in the target: a repeated letter is `Present` at every non-hit
//! position, regardless of how many times it occurs in the target.

use super::word::{WORD_LENGTH, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    Hit,
    Present,
    Absent,
}

impl Feedback {
    /// Single-character code: `G` hit, `Y` present, `-` absent
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Hit => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }
}

/// Feedback for every position of one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackRow([Feedback; WORD_LENGTH]);

impl FeedbackRow {
    /// All hits
    pub const SOLVED: Self = Self([Feedback::Hit; WORD_LENGTH]);

    #[must_use]
    pub const fn new(cells: [Feedback; WORD_LENGTH]) -> Self {
        Self(cells)
    }

    /// Classify `guess` against `target`
    ///
    /// # Examples
    /// ```
    /// use wordle_testbench::core::{Feedback, FeedbackRow, Word};
    ///
    /// let guess = Word::new("trace").unwrap();
    /// let target = Word::new("crane").unwrap();
    /// let row = FeedbackRow::classify(&guess, &target);
    ///
    /// assert_eq!(row.get(0), Feedback::Absent);
    /// assert_eq!(row.get(3), Feedback::Present);
    /// assert_eq!(row.to_string(), "-GGYG");
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, target: &Word) -> Self {
        let mut cells = [Feedback::Absent; WORD_LENGTH];

        for (i, cell) in cells.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *cell = if letter == target.char_at(i) {
                Feedback::Hit
            } else if target.has_letter(letter) {
                Feedback::Present
            } else {
                Feedback::Absent
            };
        }

        Self(cells)
    }

    /// Feedback at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Feedback {
        self.0[position]
    }

    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Iterate over the cells in position order
    pub fn iter(&self) -> impl Iterator<Item = Feedback> + '_ {
        self.0.iter().copied()
    }
}

impl fmt::Display for FeedbackRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|cell| write!(f, "{}", cell.symbol()))
    }
}

impl FromStr for FeedbackRow {
    type Err = String;

    /// Parse a row like "GY-GY" (also accepts lowercase and `_` for absent)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != WORD_LENGTH {
            return Err(format!("Invalid feedback row: {s}"));
        }

        let mut cells = [Feedback::Absent; WORD_LENGTH];
        for (cell, ch) in cells.iter_mut().zip(chars) {
            *cell = match ch {
                'G' | 'g' | '🟩' => Feedback::Hit,
                'Y' | 'y' | '🟨' => Feedback::Present,
                '-' | '_' | '⬜' => Feedback::Absent,
                _ => return Err(format!("Invalid feedback row: {s}")),
            };
        }

        Ok(Self(cells))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(guess: &str, target: &str) -> FeedbackRow {
        FeedbackRow::classify(&Word::new(guess).unwrap(), &Word::new(target).unwrap())
    }

    #[test]
    fn classify_trace_against_crane() {
        // t: not in crane; r, a, e: exact; c: in crane at position 0
        let row = classify("trace", "crane");
        assert_eq!(
            row,
            FeedbackRow::new([
                Feedback::Absent,
                Feedback::Hit,
                Feedback::Hit,
                Feedback::Present,
                Feedback::Hit,
            ])
        );
    }

    #[test]
    fn classify_all_absent() {
        let row = classify("abcde", "fghij");
        assert_eq!(row.to_string(), "-----");
        assert!(row.iter().all(|cell| cell == Feedback::Absent));
    }

    #[test]
    fn classify_exact_match() {
        for word in ["crane", "slate", "zzzzz", "aaaaa"] {
            assert!(classify(word, word).is_solved());
        }
    }

    #[test]
    fn duplicate_letters_are_all_present() {
        // Strict Wordle would grey the second E here: ERASE has only two.
        // Every non-hit E is Present because E occurs in the target.
        let row = classify("eeeee", "erase");
        assert_eq!(row.to_string(), "GYYYG");

        // SPEED vs ERASE: both E's present, S present
        let row = classify("speed", "erase");
        assert_eq!(row.to_string(), "Y-YY-");
    }

    #[test]
    fn repeated_letter_single_occurrence_in_target() {
        // ROBOT vs FLOOR: first O present, second O hit
        let row = classify("robot", "floor");
        assert_eq!(row.to_string(), "YY-G-");
        assert!(!row.is_solved());
    }

    #[test]
    fn row_from_str_valid() {
        let r1: FeedbackRow = "GYG--".parse().unwrap();
        let r2: FeedbackRow = "🟩🟨🟩⬜⬜".parse().unwrap();
        let r3: FeedbackRow = "gyg__".parse().unwrap();

        assert_eq!(r1, r2);
        assert_eq!(r1, r3);
        assert_eq!(r1.get(1), Feedback::Present);
    }

    #[test]
    fn row_from_str_invalid() {
        assert!("GYGGYX".parse::<FeedbackRow>().is_err());
        assert!("GYG".parse::<FeedbackRow>().is_err());
        assert!("GXGGY".parse::<FeedbackRow>().is_err());
        assert!("".parse::<FeedbackRow>().is_err());
    }
}
