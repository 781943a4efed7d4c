// src/engine/runtime.rs

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::core::{SequenceCore, StepDisposition};
use crate::engine::{RunOutcome, StepEvent};
use crate::task::BoxTask;

/// The async shell that drives an ordered task list to its outcome.
///
/// Responsibilities:
/// - invoke tasks strictly in input order, one at a time; task *i+1* is not
///   constructed or invoked until task *i*'s future has settled
/// - hand each task a snapshot of the results so far plus the
///   completed-step count
/// - feed each settled outcome through the pure [`SequenceCore`]
/// - emit [`StepEvent`]s to an optional observer channel
///
/// There is exactly one suspension point per task (the await of its
/// future); the accumulator and cursor mutate only between those points, so
/// no locking is needed anywhere in the engine.
pub struct Sequence<T, E> {
    tasks: Vec<BoxTask<T, E>>,
    events: Option<mpsc::UnboundedSender<StepEvent>>,
}

impl<T, E> Sequence<T, E> {
    /// Construct a run from an ordered task list.
    ///
    /// The list is taken as-is: never reordered, never filtered. Ordering
    /// is enforced by the input type, so construction cannot fail and
    /// performs no asynchronous work.
    pub fn new(tasks: Vec<BoxTask<T, E>>) -> Self {
        Self {
            tasks,
            events: None,
        }
    }

    /// Attach an observer channel for [`StepEvent`]s.
    ///
    /// Delivery is best-effort: if the receiver is dropped the run carries
    /// on and further events are discarded. Observers can never stall or
    /// fail a run.
    pub fn with_events(mut self, tx: mpsc::UnboundedSender<StepEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    /// Append one task to the end of the list (construction-time only).
    pub fn push(&mut self, task: BoxTask<T, E>) {
        self.tasks.push(task);
    }

    /// Number of tasks in the run.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the run has no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

impl<T, E> Sequence<T, E>
where
    T: Clone,
{
    /// Drive the run to completion.
    ///
    /// Resolves with the ordered results of all tasks, or with the first
    /// failing task's cause, unmodified. An empty task list resolves
    /// immediately with an empty sequence. A failed run exposes no partial
    /// results.
    pub async fn run(self) -> Result<Vec<T>, E> {
        self.drive().await.into_result()
    }

    async fn drive(self) -> RunOutcome<T, E> {
        let Sequence { tasks, events } = self;

        info!(tasks = tasks.len(), "sequence run started");

        let mut core = SequenceCore::new(tasks.len());

        for (step, task) in tasks.into_iter().enumerate() {
            emit(&events, StepEvent::Started { step });
            debug!(step, "invoking task");

            // The cursor equals `step` here: every prior task succeeded, or
            // we would have aborted already.
            let outcome = task(core.snapshot(), core.completed_count()).await;

            match core.apply(outcome) {
                StepDisposition::Continue => {
                    emit(&events, StepEvent::Completed { step });
                    debug!(step, "task completed");
                }
                StepDisposition::Abort(cause) => {
                    emit(&events, StepEvent::Failed { step });
                    warn!(step, "task failed; aborting remaining steps");
                    return RunOutcome::Failed(cause);
                }
            }
        }

        let results = core.into_results();
        info!(results = results.len(), "sequence run completed");
        RunOutcome::Completed(results)
    }
}

/// Send an event to the observer channel, if one is attached.
fn emit(events: &Option<mpsc::UnboundedSender<StepEvent>>, event: StepEvent) {
    if let Some(tx) = events {
        if tx.send(event).is_err() {
            debug!(?event, "event receiver dropped; event discarded");
        }
    }
}
