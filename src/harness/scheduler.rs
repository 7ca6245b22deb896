//! Bounded-concurrency job scheduler
//!
//! A single dispatcher task owns the running count and the FIFO queue of
//! pending jobs. Submissions and completions both reach it as messages on one
//! channel, so admitting the next job on completion can never race a new
//! submission.
//!
//! ```text
//!  submit ──► [ events ] ──► dispatcher ──► spawn job (running < limit)
//!                 ▲              │
//!                 │              └──► pending queue (running == limit)
//!                 └── Finished ◄── job task (on completion, error or panic)
//! ```

use std::collections::VecDeque;
use std::future::Future;
use std::num::NonZeroUsize;
use std::pin::Pin;
use std::task::{Context, Poll};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};

/// Resolves a finished job's ticket
type Completion = Box<dyn FnOnce() + Send>;

/// A type-erased job: runs the work and returns the completion to fire
type Job = Pin<Box<dyn Future<Output = Completion> + Send>>;

/// A job waiting for admission, with the sender its slot will report on
struct Queued {
    job: Job,
    events: mpsc::UnboundedSender<Event>,
}

enum Event {
    Submit(Queued),
    /// A running job ended; `None` if it panicked
    Finished(Option<Completion>),
}

/// Error type for scheduled jobs that produced no output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// The job panicked, or the scheduler stopped before running it
    #[error("job ended without producing a result")]
    Cancelled,
}

/// Handle for a submitted job
///
/// Resolves to the job's output once it has been admitted and has run.
#[must_use = "a ticket does nothing unless awaited"]
pub struct Ticket<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T> Future for Ticket<T> {
    type Output = Result<T, SchedulerError>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver)
            .poll(cx)
            .map(|result| result.map_err(|_| SchedulerError::Cancelled))
    }
}

/// Bounded-concurrency scheduler
///
/// Cloning yields another handle to the same dispatcher. Jobs already
/// submitted keep running after every handle is dropped.
#[derive(Clone)]
pub struct Scheduler {
    events: mpsc::UnboundedSender<Event>,
}

impl Scheduler {
    /// Start a scheduler that runs at most `limit` jobs at once
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[must_use]
    pub fn new(limit: NonZeroUsize) -> Self {
        let (events, receiver) = mpsc::unbounded_channel();
        tokio::spawn(dispatch(receiver, limit.get()));
        Self { events }
    }

    /// Submit a job
    ///
    /// The job starts immediately if fewer than `limit` jobs are running,
    /// otherwise it waits behind every job submitted before it.
    pub fn submit<F>(&self, job: F) -> Ticket<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        let job: Job = Box::pin(async move {
            let output = job.await;
            Box::new(move || {
                // The caller may have stopped waiting.
                let _ = sender.send(output);
            }) as Completion
        });

        // On a closed channel the job (and its sender) is dropped, and the
        // ticket resolves to `Cancelled`.
        let queued = Queued {
            job,
            events: self.events.clone(),
        };
        if self.events.send(Event::Submit(queued)).is_err() {
            tracing::warn!("job submitted to a stopped scheduler");
        }

        Ticket { receiver }
    }
}

/// Reports the end of a running job to the dispatcher, even on panic
struct SlotGuard {
    events: mpsc::UnboundedSender<Event>,
    completion: Option<Completion>,
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        let _ = self.events.send(Event::Finished(self.completion.take()));
    }
}

fn start(queued: Queued) {
    let Queued { job, events } = queued;
    let mut guard = SlotGuard {
        events,
        completion: None,
    };
    tokio::spawn(async move {
        guard.completion = Some(job.await);
        drop(guard);
    });
}

/// Dispatcher loop
///
/// Every handle, queued job and running job holds a sender, so the channel
/// closes exactly when nothing is left to run.
async fn dispatch(mut receiver: mpsc::UnboundedReceiver<Event>, limit: usize) {
    let mut running = 0usize;
    let mut pending: VecDeque<Queued> = VecDeque::new();

    while let Some(event) = receiver.recv().await {
        match event {
            Event::Submit(queued) => {
                if running < limit {
                    running += 1;
                    start(queued);
                } else {
                    pending.push_back(queued);
                    tracing::trace!(running, queued = pending.len(), "job queued");
                }
            }
            Event::Finished(completion) => {
                running -= 1;
                if let Some(next) = pending.pop_front() {
                    running += 1;
                    start(next);
                    tracing::trace!(running, queued = pending.len(), "queued job admitted");
                }
                match completion {
                    Some(complete) => complete(),
                    None => tracing::warn!("scheduled job panicked"),
                }
            }
        }
    }

    tracing::trace!("scheduler stopped");
}
