//! Where a session's guesses come from
//!
//! A `GuessSource` answers one encoded query with the solver's raw output.
//! `ExternalSolver` runs a command through the shared scheduler;
//! `LocalSolver` answers in-process with the reference solver.

use super::invoke::{InvocationError, SolverCommand, execute};
use super::scheduler::Scheduler;
use crate::core::ProtocolTriple;
use crate::solver::{Dictionary, Solver, Strategy};
use std::future::Future;

/// A solver that answers one round's query
pub trait GuessSource: Send + Sync {
    /// Raw solver output for `query`: a word, or an empty string when the
    /// solver has no candidate
    fn guess(
        &self,
        query: &ProtocolTriple,
    ) -> impl Future<Output = Result<String, InvocationError>> + Send;
}

/// An external solver process, run through a shared scheduler
#[derive(Clone)]
pub struct ExternalSolver {
    command: SolverCommand,
    scheduler: Scheduler,
}

impl ExternalSolver {
    #[must_use]
    pub const fn new(command: SolverCommand, scheduler: Scheduler) -> Self {
        Self { command, scheduler }
    }
}

impl GuessSource for ExternalSolver {
    async fn guess(&self, query: &ProtocolTriple) -> Result<String, InvocationError> {
        tracing::trace!(command = %self.command.command_line(query), "submitting solver call");
        let process = self.command.build(query);
        self.scheduler.submit(execute(process)).await?
    }
}

/// The reference solver, answering in-process
pub struct LocalSolver<S> {
    strategy: S,
    dictionary: Dictionary,
}

impl<S: Strategy + Clone> LocalSolver<S> {
    #[must_use]
    pub const fn new(strategy: S, dictionary: Dictionary) -> Self {
        Self {
            strategy,
            dictionary,
        }
    }

    /// Answer a query synchronously
    ///
    /// # Errors
    ///
    /// Returns `InvocationError::Protocol` if the query cannot be decoded.
    pub fn answer(&self, query: &ProtocolTriple) -> Result<String, InvocationError> {
        let solver = Solver::new(self.strategy.clone(), &self.dictionary);
        let guess = solver.answer(query)?;
        Ok(guess.map(|word| word.text().to_string()).unwrap_or_default())
    }
}

impl<S: Strategy + Clone + Send + Sync> GuessSource for LocalSolver<S> {
    async fn guess(&self, query: &ProtocolTriple) -> Result<String, InvocationError> {
        self.answer(query)
    }
}
