//! One simulated game
//!
//! A session is a linear state machine:
//!
//! ```text
//! Active(0, empty) ─► Active(1, c1) ─► … ─► Solved(n) | GaveUp | TooSlow
//! ```
//!
//! Each step asks the guess source for a word given the encoded constraints,
//! classifies it against the target and folds the feedback into the
//! constraints. Sessions own all of their state, so any number can run side by
//! side and dropping one cancels it.

use super::invoke::InvocationError;
use super::source::GuessSource;
use crate::core::{ConstraintSet, FeedbackRow, Word};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Guesses allowed before a session is declared too slow
pub const MAX_ROUNDS: usize = 6;

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Guessed the target in this many rounds (1-6)
    Solved(usize),
    /// The solver produced no usable guess
    GaveUp,
    /// Six rounds passed without a match
    TooSlow,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solved(rounds) => write!(f, "solved in {rounds}"),
            Self::GaveUp => write!(f, "gave up"),
            Self::TooSlow => write!(f, "too slow"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Active {
        round: usize,
        constraints: ConstraintSet,
    },
    Done(Outcome),
}

/// One guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundRecord {
    pub guess: Word,
    pub feedback: FeedbackRow,
}

/// Everything a finished session reports
#[derive(Debug)]
pub struct SessionReport {
    pub target: Word,
    pub outcome: Outcome,
    pub rounds: Vec<RoundRecord>,
    /// Why the session gave up, if the solver call failed
    pub error: Option<InvocationError>,
    pub elapsed: Duration,
}

/// A single game against one target word
pub struct GameSession<G> {
    target: Word,
    source: Arc<G>,
    state: SessionState,
    rounds: Vec<RoundRecord>,
    error: Option<InvocationError>,
}

/// Interpret raw solver output
///
/// A guess must already be a lowercase `a-z` word; nothing is normalised.
fn parse_guess(output: String) -> Result<Option<Word>, InvocationError> {
    if output.is_empty() {
        return Ok(None);
    }
    if !output.bytes().all(|b| b.is_ascii_lowercase()) {
        return Err(InvocationError::MalformedOutput(output));
    }
    Word::new(output.as_str())
        .map(Some)
        .map_err(|_| InvocationError::MalformedOutput(output))
}

impl<G: GuessSource> GameSession<G> {
    #[must_use]
    pub fn new(target: Word, source: Arc<G>) -> Self {
        Self {
            target,
            source,
            state: SessionState::Active {
                round: 0,
                constraints: ConstraintSet::new(),
            },
            rounds: Vec::new(),
            error: None,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Play one round
    ///
    /// Does nothing once the session is done.
    pub async fn step(&mut self) -> &SessionState {
        let SessionState::Active { round, constraints } = &mut self.state else {
            return &self.state;
        };

        let query = constraints.encode();
        let reply = self.source.guess(&query).await.and_then(parse_guess);

        let outcome = match reply {
            Ok(None) => {
                tracing::debug!(target_word = %self.target, round = *round, "solver has no candidate");
                Some(Outcome::GaveUp)
            }
            Err(e) => {
                tracing::warn!(target_word = %self.target, round = *round, error = %e, "solver call failed");
                self.error = Some(e);
                Some(Outcome::GaveUp)
            }
            Ok(Some(guess)) => {
                let feedback = FeedbackRow::classify(&guess, &self.target);
                let before = constraints.clone();
                constraints.update(&guess, &feedback);
                debug_assert!(constraints.refines(&before));
                *round += 1;
                tracing::trace!(target_word = %self.target, round = *round, %guess, %feedback, "round played");

                let solved = feedback.is_solved();
                self.rounds.push(RoundRecord { guess, feedback });

                if solved {
                    Some(Outcome::Solved(*round))
                } else if *round >= MAX_ROUNDS {
                    Some(Outcome::TooSlow)
                } else {
                    None
                }
            }
        };

        if let Some(outcome) = outcome {
            tracing::debug!(target_word = %self.target, %outcome, "session finished");
            self.state = SessionState::Done(outcome);
        }
        &self.state
    }

    /// Play rounds until the session ends
    pub async fn run(mut self) -> SessionReport {
        let started = Instant::now();
        let outcome = loop {
            if let SessionState::Done(outcome) = self.step().await {
                break *outcome;
            }
        };

        SessionReport {
            target: self.target,
            outcome,
            rounds: self.rounds,
            error: self.error,
            elapsed: started.elapsed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ProtocolTriple;
    use crate::harness::source::LocalSolver;
    use crate::solver::{Dictionary, FrequencyStrategy};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replies from a script, recording every query it receives
    struct Scripted {
        replies: Mutex<VecDeque<Result<String, InvocationError>>>,
        queries: Mutex<Vec<ProtocolTriple>>,
    }

    impl Scripted {
        fn new(replies: Vec<Result<String, InvocationError>>) -> Arc<Self> {
            Arc::new(Self {
                replies: Mutex::new(replies.into()),
                queries: Mutex::new(Vec::new()),
            })
        }

        fn words(words: &[&str]) -> Arc<Self> {
            Self::new(words.iter().map(|w| Ok((*w).to_string())).collect())
        }

        fn calls(&self) -> usize {
            self.queries.lock().unwrap().len()
        }
    }

    impl GuessSource for Scripted {
        async fn guess(&self, query: &ProtocolTriple) -> Result<String, InvocationError> {
            self.queries.lock().unwrap().push(query.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[tokio::test]
    async fn first_query_carries_no_information() {
        let source = Scripted::words(&["crane"]);
        let report = GameSession::new(word("crane"), Arc::clone(&source)).run().await;

        assert_eq!(report.outcome, Outcome::Solved(1));
        assert_eq!(
            source.queries.lock().unwrap()[0],
            ProtocolTriple::new(".....", "-,-,-,-,-", "-")
        );
    }

    #[tokio::test]
    async fn feedback_flows_into_the_next_query() {
        let source = Scripted::words(&["trace", "crane"]);
        let report = GameSession::new(word("crane"), Arc::clone(&source)).run().await;

        assert_eq!(report.outcome, Outcome::Solved(2));
        assert_eq!(report.rounds.len(), 2);
        assert_eq!(report.rounds[0].feedback.to_string(), "-GGYG");
        assert!(report.rounds[1].feedback.is_solved());
        assert_eq!(
            source.queries.lock().unwrap()[1],
            ProtocolTriple::new(".ra.e", "-,-,-,c,-", "t")
        );
    }

    #[tokio::test]
    async fn never_matching_is_too_slow_after_six_rounds() {
        let source = Scripted::words(&["slate"; 10]);
        let report = GameSession::new(word("crane"), Arc::clone(&source)).run().await;

        assert_eq!(report.outcome, Outcome::TooSlow);
        assert_eq!(report.rounds.len(), MAX_ROUNDS);
        assert_eq!(source.calls(), MAX_ROUNDS);
        assert!(report.error.is_none());
    }

    #[tokio::test]
    async fn sixth_round_can_still_solve() {
        let source = Scripted::words(&["slate", "slate", "slate", "slate", "slate", "crane"]);
        let report = GameSession::new(word("crane"), source).run().await;
        assert_eq!(report.outcome, Outcome::Solved(6));
    }

    #[tokio::test]
    async fn empty_output_gives_up() {
        let source = Scripted::words(&["slate"]);
        let report = GameSession::new(word("crane"), Arc::clone(&source)).run().await;

        assert_eq!(report.outcome, Outcome::GaveUp);
        assert_eq!(report.rounds.len(), 1);
        assert_eq!(source.calls(), 2);
        assert!(report.error.is_none());
    }

    #[tokio::test]
    async fn invocation_error_gives_up_and_is_kept() {
        let source = Scripted::new(vec![Err(InvocationError::Spawn(std::io::Error::other(
            "no such solver",
        )))]);
        let report = GameSession::new(word("crane"), source).run().await;

        assert_eq!(report.outcome, Outcome::GaveUp);
        assert!(matches!(report.error, Some(InvocationError::Spawn(_))));
    }

    #[tokio::test]
    async fn malformed_output_gives_up() {
        let source = Scripted::words(&["cranes"]);
        let report = GameSession::new(word("crane"), source).run().await;

        assert_eq!(report.outcome, Outcome::GaveUp);
        assert!(matches!(
            report.error,
            Some(InvocationError::MalformedOutput(ref output)) if output == "cranes"
        ));
    }

    #[tokio::test]
    async fn guesses_outside_lowercase_ascii_are_malformed() {
        for output in ["CRANE", "Crane", "\u{212A}rane", "cr ne"] {
            let source = Scripted::words(&[output]);
            let report = GameSession::new(word("crane"), Arc::clone(&source)).run().await;

            assert_eq!(report.outcome, Outcome::GaveUp, "{output:?}");
            assert!(report.rounds.is_empty());
            assert!(matches!(
                report.error,
                Some(InvocationError::MalformedOutput(ref printed)) if printed == output
            ));
        }
    }

    #[tokio::test]
    async fn step_is_linear_and_stops_when_done() {
        let source = Scripted::words(&["trace", "crane", "slate"]);
        let mut session = GameSession::new(word("crane"), Arc::clone(&source));

        assert!(matches!(
            session.step().await,
            SessionState::Active { round: 1, .. }
        ));
        assert_eq!(session.step().await, &SessionState::Done(Outcome::Solved(2)));
        assert_eq!(session.step().await, &SessionState::Done(Outcome::Solved(2)));
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn constraints_only_gain_information() {
        let source = Scripted::words(&["eerie", "slate", "nacre", "caste", "crank", "crane"]);
        let mut session = GameSession::new(word("crane"), source);
        let mut previous = ConstraintSet::new();

        while let SessionState::Active { constraints, .. } = session.step().await {
            assert!(constraints.refines(&previous));
            previous = constraints.clone();
        }
        assert_eq!(session.state(), &SessionState::Done(Outcome::Solved(6)));
    }

    #[tokio::test]
    async fn reference_solver_solves_every_word_of_its_dictionary() {
        let words = ["crane", "slate", "irate", "pouch", "mound", "gusty"];
        let dictionary: Dictionary = words.iter().map(|w| word(w)).collect();
        let solver = Arc::new(LocalSolver::new(FrequencyStrategy, dictionary));

        for target in words {
            let report = GameSession::new(word(target), Arc::clone(&solver)).run().await;
            assert!(
                matches!(report.outcome, Outcome::Solved(n) if n <= MAX_ROUNDS),
                "{target}: {}",
                report.outcome
            );
        }
    }
}
