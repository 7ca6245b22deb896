//! Test a solver against a list of target words
//!
//! Every target gets its own game session, spawned onto the runtime at once;
//! the scheduler behind the guess source decides how many solver processes
//! actually run. Results are printed as sessions finish, in no particular
//! order, and folded into a `TestAllStatistics`.

use crate::core::Word;
use crate::harness::{GameSession, GuessSource, MAX_ROUNDS, Outcome, SessionReport};
use crate::output::display::print_session_report;
use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinSet;

/// Statistics from testing a word list
#[derive(Debug, Default)]
pub struct TestAllStatistics {
    pub total_words: usize,
    /// Solved games by rounds taken; index 0 is one round
    pub histogram: [usize; MAX_ROUNDS],
    pub gave_up: Vec<String>,
    pub too_slow: Vec<String>,
    pub total_time: Duration,
    /// Wall time summed over every session, including time spent queued
    pub session_time: Duration,
    pub first_guess_used: FxHashMap<String, usize>,
    /// Words solved in five or six rounds, hardest first
    pub worst_words: Vec<(String, usize)>,
}

impl TestAllStatistics {
    fn record(&mut self, report: &SessionReport) {
        self.total_words += 1;
        self.session_time += report.elapsed;

        if let Some(first) = report.rounds.first() {
            *self
                .first_guess_used
                .entry(first.guess.text().to_string())
                .or_insert(0) += 1;
        }

        let word = report.target.text().to_string();
        match report.outcome {
            Outcome::Solved(rounds) => {
                self.histogram[rounds - 1] += 1;
                if rounds >= 5 {
                    self.worst_words.push((word, rounds));
                }
            }
            Outcome::GaveUp => self.gave_up.push(word),
            Outcome::TooSlow => self.too_slow.push(word),
        }
    }

    fn finish(&mut self, total_time: Duration) {
        self.total_time = total_time;
        self.gave_up.sort_unstable();
        self.too_slow.sort_unstable();
        self.worst_words
            .sort_by(|(w1, n1), (w2, n2)| n2.cmp(n1).then_with(|| w1.cmp(w2)));
        self.worst_words.truncate(10);
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.histogram.iter().sum()
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.gave_up.len() + self.too_slow.len()
    }

    /// Mean wall time of one session
    #[must_use]
    pub fn time_per_word(&self) -> Option<Duration> {
        let words = u32::try_from(self.total_words).ok().filter(|&n| n > 0)?;
        Some(self.session_time / words)
    }

    /// Mean rounds over solved games, or `None` if nothing was solved
    #[must_use]
    pub fn average_rounds(&self) -> Option<f64> {
        let passed = self.passed();
        if passed == 0 {
            return None;
        }
        let rounds: usize = self
            .histogram
            .iter()
            .enumerate()
            .map(|(i, count)| (i + 1) * count)
            .sum();
        Some(rounds as f64 / passed as f64)
    }
}

/// Play one game per target word
///
/// In verbose mode every session prints its colored rounds; otherwise a
/// progress bar tracks the run and only per-word result lines are printed.
///
/// # Errors
///
/// Returns an error if a session task panics, or if the progress bar
/// template is invalid.
pub async fn run_test_all<G>(
    source: Arc<G>,
    targets: Vec<Word>,
    verbose: bool,
) -> Result<TestAllStatistics>
where
    G: GuessSource + 'static,
{
    let pb = if verbose {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(targets.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .context("invalid progress bar template")?
                .progress_chars("█▓▒░"),
        );
        pb
    };

    let started = Instant::now();
    let mut sessions = JoinSet::new();
    for target in targets {
        let session = GameSession::new(target, Arc::clone(&source));
        sessions.spawn(session.run());
    }
    tracing::debug!(sessions = sessions.len(), "all sessions started");

    let mut stats = TestAllStatistics::default();
    while let Some(joined) = sessions.join_next().await {
        let report = joined.context("game session task failed")?;
        pb.suspend(|| print_session_report(&report, verbose));
        stats.record(&report);

        if let Some(avg) = stats.average_rounds() {
            pb.set_message(format!("Avg: {avg:.2}"));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    stats.finish(started.elapsed());
    Ok(stats)
}
