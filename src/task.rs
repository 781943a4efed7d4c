// src/task.rs

//! Task abstraction for sequential runs.
//!
//! A task is a one-shot async step function: it receives the results of all
//! previously completed steps plus the completed-step count, and returns a
//! future for its own outcome. Tasks are stored boxed so a single run can
//! hold a heterogeneous list of closures.

use std::future::Future;
use std::pin::Pin;

/// Future returned by a single task invocation.
///
/// Resolves to the task's success value or to its failure cause. The cause
/// type `E` is opaque to the engine and passes through a run unchanged.
pub type TaskFuture<T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send>>;

/// A boxed task function.
///
/// Invoked with a snapshot of the results accumulated so far (in completion
/// order, which equals input order) and the number of steps completed so
/// far. Consumed on invocation; the engine calls each task at most once.
pub type BoxTask<T, E> = Box<dyn FnOnce(Vec<T>, usize) -> TaskFuture<T, E> + Send>;

/// Wrap an async closure as a [`BoxTask`].
///
/// This is the usual way to build tasks:
///
/// ```
/// use seqrun::task::{from_fn, BoxTask};
///
/// let step: BoxTask<u32, String> = from_fn(|completed, count| async move {
///     assert_eq!(completed.len(), count);
///     Ok(count as u32)
/// });
/// ```
pub fn from_fn<T, E, F, Fut>(f: F) -> BoxTask<T, E>
where
    F: FnOnce(Vec<T>, usize) -> Fut + Send + 'static,
    Fut: Future<Output = Result<T, E>> + Send + 'static,
{
    Box::new(move |completed, count| Box::pin(f(completed, count)))
}
