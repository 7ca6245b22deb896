//! Reference solver command
//!
//! Answers a single protocol query: loads the dictionary, keeps the words
//! consistent with the decoded constraints and returns the best-scoring one.

use crate::core::{ConstraintSet, ProtocolTriple, Word};
use crate::solver::{Dictionary, Solver, StrategyType};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration for answering a query
pub struct SolveConfig {
    pub word_list: PathBuf,
    pub strategy: StrategyType,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(word_list: PathBuf, strategy: StrategyType) -> Self {
        Self {
            word_list,
            strategy,
        }
    }
}

/// Pick the next guess for `query`
///
/// Returns `None` when no dictionary word satisfies the constraints.
///
/// # Errors
///
/// Returns an error if the word list cannot be read or the query tokens are
/// malformed.
pub fn solve_query(config: &SolveConfig, query: &ProtocolTriple) -> Result<Option<Word>> {
    let constraints = ConstraintSet::decode(query)
        .with_context(|| format!("invalid constraints \"{query}\""))?;

    let dictionary = Dictionary::load(&config.word_list)
        .with_context(|| format!("failed to read word list {}", config.word_list.display()))?;
    tracing::debug!(words = dictionary.len(), "dictionary loaded");

    let solver = Solver::new(config.strategy, &dictionary);
    let guess = solver.next_guess(&constraints).cloned();
    tracing::debug!(
        candidates = solver.count_candidates(&constraints),
        guess = guess.as_ref().map(Word::text),
        "query answered"
    );
    Ok(guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn word_list(words: &[&str]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        for word in words {
            writeln!(file, "{word}").unwrap();
        }
        file
    }

    fn config(file: &NamedTempFile) -> SolveConfig {
        SolveConfig::new(file.path().to_path_buf(), StrategyType::from_name("frequency"))
    }

    #[test]
    fn no_information_query_picks_highest_score() {
        let file = word_list(&["crane", "slate", "irate"]);
        let query = ProtocolTriple::new(".....", "-,-,-,-,-", "-");

        let guess = solve_query(&config(&file), &query).unwrap();
        assert_eq!(guess.as_ref().map(Word::text), Some("irate"));
    }

    #[test]
    fn invalid_lines_are_skipped() {
        let file = word_list(&["crane", "", "toolong", "sl4te", "slate"]);
        let query = ProtocolTriple::new(".....", "-,-,-,-,-", "cn");

        let guess = solve_query(&config(&file), &query).unwrap();
        assert_eq!(guess.as_ref().map(Word::text), Some("slate"));
    }

    #[test]
    fn no_candidate_is_none() {
        let file = word_list(&["crane", "slate"]);
        let query = ProtocolTriple::new(".....", "-,-,-,-,-", "e");
        assert!(solve_query(&config(&file), &query).unwrap().is_none());
    }

    #[test]
    fn errors_name_the_problem() {
        let file = word_list(&["crane"]);
        let bad_query = ProtocolTriple::new("..", "-,-,-,-,-", "-");
        let err = solve_query(&config(&file), &bad_query).unwrap_err();
        assert!(err.to_string().contains("invalid constraints"));

        let missing = SolveConfig::new(
            file.path().with_extension("missing"),
            StrategyType::from_name("frequency"),
        );
        let query = ProtocolTriple::new(".....", "-,-,-,-,-", "-");
        let err = solve_query(&missing, &query).unwrap_err();
        assert!(err.to_string().contains("failed to read word list"));
    }
}
