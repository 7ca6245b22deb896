//! Solver protocol encoding
//!
//! A `ConstraintSet` crosses the process boundary as three positional tokens:
//!
//! 1. place string: one char per position, the confirmed letter or `.`
//! 2. misplaced spec: five comma-separated groups of letters, `-` for none
//! 3. excluded string: the excluded letters, `-` for none
//!
//! Letters within a group are written in alphabetical order.

use super::constraints::{ConstraintSet, LetterSet};
use super::word::WORD_LENGTH;
use std::fmt;
use thiserror::Error;

const UNKNOWN: char = '.';
const NONE: &str = "-";
const GROUP_SEPARATOR: char = ',';

/// The three protocol tokens for one solver invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolTriple {
    pub place: String,
    pub misplaced: String,
    pub excluded: String,
}

/// Error type for undecodable protocol tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    #[error("place string must have 5 positions, got {0}")]
    PlaceLength(usize),
    #[error("misplaced spec must have 5 groups, got {0}")]
    GroupCount(usize),
    #[error("unexpected character {found:?} in {token} token")]
    InvalidCharacter { token: &'static str, found: char },
}

impl ProtocolTriple {
    #[must_use]
    pub fn new(
        place: impl Into<String>,
        misplaced: impl Into<String>,
        excluded: impl Into<String>,
    ) -> Self {
        Self {
            place: place.into(),
            misplaced: misplaced.into(),
            excluded: excluded.into(),
        }
    }
}

impl fmt::Display for ProtocolTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.place, self.misplaced, self.excluded)
    }
}

fn encode_group(set: LetterSet) -> String {
    if set.is_empty() {
        NONE.to_string()
    } else {
        set.to_string()
    }
}

fn decode_group(group: &str, token: &'static str) -> Result<LetterSet, CodecError> {
    let mut set = LetterSet::EMPTY;
    for ch in group.chars().filter(|&ch| ch != '-') {
        let letter = ch.to_ascii_lowercase();
        if !letter.is_ascii_lowercase() {
            return Err(CodecError::InvalidCharacter { token, found: ch });
        }
        set.insert(letter as u8);
    }
    Ok(set)
}

impl ConstraintSet {
    /// Encode as protocol tokens
    ///
    /// # Examples
    /// ```
    /// use wordle_testbench::core::ConstraintSet;
    ///
    /// let triple = ConstraintSet::new().encode();
    /// assert_eq!(triple.to_string(), "..... -,-,-,-,- -");
    /// ```
    #[must_use]
    pub fn encode(&self) -> ProtocolTriple {
        let place = self
            .positions()
            .iter()
            .map(|slot| slot.map_or(UNKNOWN, char::from))
            .collect();

        let misplaced = self
            .misplaced()
            .iter()
            .map(|set| encode_group(*set))
            .collect::<Vec<_>>()
            .join(",");

        ProtocolTriple {
            place,
            misplaced,
            excluded: encode_group(self.excluded()),
        }
    }

    /// Decode protocol tokens
    ///
    /// Inverse of [`ConstraintSet::encode`]. Placeholders (`-`) are ignored
    /// wherever they appear in a group, and letters are accepted in any order
    /// or case.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the place string is not 5 characters, the
    /// misplaced spec does not have 5 groups, or a token has a non-letter.
    pub fn decode(triple: &ProtocolTriple) -> Result<Self, CodecError> {
        let place: Vec<char> = triple.place.chars().collect();
        if place.len() != WORD_LENGTH {
            return Err(CodecError::PlaceLength(place.len()));
        }

        let mut positions = [None; WORD_LENGTH];
        for (slot, ch) in positions.iter_mut().zip(place) {
            if ch == UNKNOWN {
                continue;
            }
            let letter = ch.to_ascii_lowercase();
            if !letter.is_ascii_lowercase() {
                return Err(CodecError::InvalidCharacter {
                    token: "place",
                    found: ch,
                });
            }
            *slot = Some(letter as u8);
        }

        let groups: Vec<&str> = triple.misplaced.split(GROUP_SEPARATOR).collect();
        if groups.len() != WORD_LENGTH {
            return Err(CodecError::GroupCount(groups.len()));
        }

        let mut misplaced = [LetterSet::EMPTY; WORD_LENGTH];
        for (set, group) in misplaced.iter_mut().zip(groups) {
            *set = decode_group(group, "misplaced")?;
        }

        let excluded = decode_group(&triple.excluded, "excluded")?;

        Ok(Self::from_parts(positions, misplaced, excluded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeedbackRow, Word};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn random_word(rng: &mut StdRng) -> Word {
        let text: String = (0..WORD_LENGTH)
            .map(|_| char::from(rng.random_range(b'a'..=b'z')))
            .collect();
        Word::new(text).unwrap()
    }

    #[test]
    fn encode_empty() {
        let triple = ConstraintSet::new().encode();
        assert_eq!(triple, ProtocolTriple::new(".....", "-,-,-,-,-", "-"));
    }

    #[test]
    fn encode_after_trace_against_crane() {
        let guess = word("trace");
        let mut constraints = ConstraintSet::new();
        constraints.update(&guess, &FeedbackRow::classify(&guess, &word("crane")));

        let triple = constraints.encode();
        assert_eq!(triple.place, ".ra.e");
        assert_eq!(triple.misplaced, "-,-,-,c,-");
        assert_eq!(triple.excluded, "t");
        assert_eq!(triple.to_string(), ".ra.e -,-,-,c,- t");
    }

    #[test]
    fn encode_sorts_letters() {
        let mut constraints = ConstraintSet::new();
        for guess in ["tolds", "pumpy"] {
            let guess = word(guess);
            constraints.update(&guess, &FeedbackRow::classify(&guess, &word("crane")));
        }
        assert_eq!(constraints.encode().excluded, "dlmopstuy");
    }

    #[test]
    fn decode_reads_placeholders_and_letters() {
        let triple = ProtocolTriple::new("c...e", "r,-,-,ab,-", "sty");
        let constraints = ConstraintSet::decode(&triple).unwrap();

        assert_eq!(
            constraints.positions(),
            &[Some(b'c'), None, None, None, Some(b'e')]
        );
        assert_eq!(constraints.misplaced()[0].to_string(), "r");
        assert_eq!(constraints.misplaced()[3].to_string(), "ab");
        assert_eq!(constraints.excluded().to_string(), "sty");
    }

    #[test]
    fn decode_is_lenient_on_order_and_case() {
        let a = ConstraintSet::decode(&ProtocolTriple::new("C....", "-,ba,-,-,-", "ZY")).unwrap();
        let b = ConstraintSet::decode(&ProtocolTriple::new("c....", "-,ab,-,-,-", "yz")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn decode_rejects_malformed_tokens() {
        assert_eq!(
            ConstraintSet::decode(&ProtocolTriple::new("....", "-,-,-,-,-", "-")),
            Err(CodecError::PlaceLength(4))
        );
        assert_eq!(
            ConstraintSet::decode(&ProtocolTriple::new(".....", "-,-,-", "-")),
            Err(CodecError::GroupCount(3))
        );
        assert!(matches!(
            ConstraintSet::decode(&ProtocolTriple::new("..3..", "-,-,-,-,-", "-")),
            Err(CodecError::InvalidCharacter { token: "place", .. })
        ));
        assert!(matches!(
            ConstraintSet::decode(&ProtocolTriple::new(".....", "-,-,!,-,-", "-")),
            Err(CodecError::InvalidCharacter {
                token: "misplaced",
                found: '!'
            })
        ));
    }

    #[test]
    fn round_trip_over_reachable_constraint_sets() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let probes: Vec<Word> = (0..200).map(|_| random_word(&mut rng)).collect();

        for _ in 0..500 {
            let target = random_word(&mut rng);
            let mut constraints = ConstraintSet::new();

            for _ in 0..rng.random_range(1..=6) {
                let guess = random_word(&mut rng);
                constraints.update(&guess, &FeedbackRow::classify(&guess, &target));

                let decoded = ConstraintSet::decode(&constraints.encode()).unwrap();
                assert_eq!(decoded, constraints);
                assert!(decoded.matches(&target));
                for probe in &probes {
                    assert_eq!(decoded.matches(probe), constraints.matches(probe));
                }
            }
        }
    }
}
