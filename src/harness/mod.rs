//! Test harness
//!
//! Plays games against a target list, asking an external solver process (or
//! the in-process reference solver) for each guess. Solver processes share a
//! bounded-concurrency scheduler.

mod invoke;
mod scheduler;
mod session;
mod source;

pub use invoke::{InvocationError, SolverCommand, execute};
pub use scheduler::{Scheduler, SchedulerError, Ticket};
pub use session::{GameSession, MAX_ROUNDS, Outcome, RoundRecord, SessionReport, SessionState};
pub use source::{ExternalSolver, GuessSource, LocalSolver};
