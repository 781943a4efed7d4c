//! Ready-made tasks to simplify test setup.

use std::time::Duration;

use seqrun::task::{from_fn, BoxTask};

use crate::recorder::InvocationLog;

/// Task that resolves immediately with `value`.
pub fn value_task<T, E>(value: T) -> BoxTask<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    from_fn(move |_completed, _count| async move { Ok(value) })
}

/// Task that resolves with `value` after sleeping for `delay`.
pub fn delayed_value_task<T, E>(value: T, delay: Duration) -> BoxTask<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    from_fn(move |_completed, _count| async move {
        tokio::time::sleep(delay).await;
        Ok(value)
    })
}

/// Task that fails with `cause` without producing a value.
pub fn failing_task<T, E>(cause: E) -> BoxTask<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    from_fn(move |_completed, _count| async move { Err(cause) })
}

/// Task that fails with an `anyhow` error built from `message`.
pub fn anyhow_failing_task<T>(message: &'static str) -> BoxTask<T, seqrun::errors::Error>
where
    T: Send + 'static,
{
    from_fn(move |_completed, _count| async move { Err(seqrun::errors::Error::msg(message)) })
}

/// Task that records its step index in `log` at invocation time, then
/// resolves with `value`.
///
/// The recording happens before the returned future is first polled, so a
/// step shows up in the log if and only if the engine actually invoked it.
pub fn recording_task<T, E>(log: InvocationLog, value: T) -> BoxTask<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    from_fn(move |_completed, count| {
        log.record(count);
        async move { Ok(value) }
    })
}

/// Task whose future never settles.
pub fn pending_task<T, E>() -> BoxTask<T, E>
where
    T: Send + 'static,
    E: Send + 'static,
{
    from_fn(|_completed, _count| std::future::pending())
}
