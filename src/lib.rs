// src/lib.rs

//! seqrun — drive asynchronous tasks one at a time, in order.
//!
//! Given an ordered list of task functions, the engine runs them strictly
//! sequentially, passes each task the results accumulated so far, and
//! collects the outcomes into a single ordered result list. The first
//! failing task aborts the chain; its cause is handed back unchanged.
//!
//! This is for chains of asynchronous operations whose side effects must
//! not interleave, and where later steps may depend on the output of
//! earlier ones. There is no parallelism, no retry, and no per-task
//! timeout; a task that never settles stalls the whole run.

pub mod engine;
pub mod errors;
pub mod task;

use crate::engine::Sequence;
use crate::task::BoxTask;

/// High-level entry point.
///
/// Drives `tasks` in input order, one at a time. Resolves with every task's
/// result, in order, or with the first failing task's cause, unmodified.
/// An empty list resolves with an empty sequence.
///
/// ```
/// use seqrun::run_sequence;
/// use seqrun::task::from_fn;
///
/// async fn demo() -> Result<(), String> {
///     let results = run_sequence::<u32, String>(vec![
///         from_fn(|_, _| async { Ok(1) }),
///         from_fn(|completed, _| async move { Ok(completed[0] + 1) }),
///     ])
///     .await?;
///
///     assert_eq!(results, vec![1, 2]);
///     Ok(())
/// }
/// ```
pub async fn run_sequence<T, E>(tasks: Vec<BoxTask<T, E>>) -> Result<Vec<T>, E>
where
    T: Clone,
{
    Sequence::new(tasks).run().await
}
