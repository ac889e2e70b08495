//! Suspending combinators.
//!
//! Two flavours per family:
//!
//! - `*_async`: the operation is awaited, handler and cleanup are blocking.
//! - `*_await`: the operation, handler and cleanup are all awaited. A blocking
//!   callback fits here too by wrapping it in an `async` block.
//!
//! Stages run strictly one after another (operation, handler, cleanup) and
//! nothing is spawned. Dropping the returned future drops the stage in
//! flight; later stages then never run.

use core::future::Future;

use crate::narrow::{Completion, Narrow};
use crate::operation::{attempt_async, AsyncOperation};
use crate::sync::{discard, recover, settle};
use crate::{Failure, Result};

/// Awaiting counterpart of [`recover`].
async fn recover_async<T, K, H, Fut>(outcome: Result<T>, handler: H, fallback: impl FnOnce() -> T) -> Result<T>
where
    K: Narrow,
    H: FnOnce(K) -> Fut,
    Fut: Future,
    Fut::Output: Completion,
{
    match outcome {
        Ok(value) => Ok(value),
        Err(failure) => {
            let caught = K::narrow(failure)?;
            handler(caught).await.into_result()?;
            Ok(fallback())
        }
    }
}

// ============================================================
// Catch
// ============================================================

/// Await `op`; on any failure call `handler` and return `T::default()`.
pub async fn catch_async<O, H, R>(op: O, handler: H) -> Result<O::Output>
where
    O: AsyncOperation,
    O::Output: Default,
    H: FnOnce(Failure) -> R,
    R: Completion,
{
    recover(attempt_async(op).await, handler, Default::default)
}

/// Like [`catch_async`], returning `default` after a handled failure.
pub async fn catch_async_or<O, H, R>(op: O, handler: H, default: O::Output) -> Result<O::Output>
where
    O: AsyncOperation,
    H: FnOnce(Failure) -> R,
    R: Completion,
{
    recover(attempt_async(op).await, handler, move || default)
}

/// Await `op`; for failures that narrow to `K` call `handler`.
pub async fn catch_kind_async<O, K, H, R>(op: O, handler: H) -> Result<O::Output>
where
    O: AsyncOperation,
    O::Output: Default,
    K: Narrow,
    H: FnOnce(K) -> R,
    R: Completion,
{
    recover(attempt_async(op).await, handler, Default::default)
}

/// Like [`catch_kind_async`], returning `default` after a handled failure.
pub async fn catch_kind_async_or<O, K, H, R>(op: O, handler: H, default: O::Output) -> Result<O::Output>
where
    O: AsyncOperation,
    K: Narrow,
    H: FnOnce(K) -> R,
    R: Completion,
{
    recover(attempt_async(op).await, handler, move || default)
}

/// Await `op`; on any failure await `handler` and return `T::default()`.
///
/// ```
/// use catch_this::{catch_await, Failure};
/// # block_on(async {
/// let value: u32 = catch_await(
///     || async { "x".parse::<u32>() },
///     |e: Failure| async move { println!("failed: {e}") },
/// )
/// .await
/// .unwrap();
/// assert_eq!(value, 0);
/// # });
/// # fn block_on(f: impl std::future::Future<Output = ()>) {
/// #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f)
/// # }
/// ```
pub async fn catch_await<O, H, Fut>(op: O, handler: H) -> Result<O::Output>
where
    O: AsyncOperation,
    O::Output: Default,
    H: FnOnce(Failure) -> Fut,
    Fut: Future,
    Fut::Output: Completion,
{
    recover_async(attempt_async(op).await, handler, Default::default).await
}

/// Like [`catch_await`], returning `default` after a handled failure.
pub async fn catch_await_or<O, H, Fut>(op: O, handler: H, default: O::Output) -> Result<O::Output>
where
    O: AsyncOperation,
    H: FnOnce(Failure) -> Fut,
    Fut: Future,
    Fut::Output: Completion,
{
    recover_async(attempt_async(op).await, handler, move || default).await
}

/// Await `op`; for failures that narrow to `K` await `handler`.
///
/// Other failures are returned untouched.
pub async fn catch_kind_await<O, K, H, Fut>(op: O, handler: H) -> Result<O::Output>
where
    O: AsyncOperation,
    O::Output: Default,
    K: Narrow,
    H: FnOnce(K) -> Fut,
    Fut: Future,
    Fut::Output: Completion,
{
    recover_async(attempt_async(op).await, handler, Default::default).await
}

/// Like [`catch_kind_await`], returning `default` after a handled failure.
pub async fn catch_kind_await_or<O, K, H, Fut>(op: O, handler: H, default: O::Output) -> Result<O::Output>
where
    O: AsyncOperation,
    K: Narrow,
    H: FnOnce(K) -> Fut,
    Fut: Future,
    Fut::Output: Completion,
{
    recover_async(attempt_async(op).await, handler, move || default).await
}

// ============================================================
// Catch ignore
// ============================================================

/// Await `op` and discard any failure, returning `T::default()` instead.
pub async fn catch_ignore_async<O>(op: O) -> O::Output
where
    O: AsyncOperation,
    O::Output: Default,
{
    attempt_async(op).await.unwrap_or_default()
}

/// Like [`catch_ignore_async`], returning `default` instead of `T::default()`.
pub async fn catch_ignore_async_or<O: AsyncOperation>(op: O, default: O::Output) -> O::Output {
    attempt_async(op).await.unwrap_or(default)
}

/// Await `op` and discard failures that narrow to `K`; others propagate.
pub async fn catch_ignore_kind_async<K, O>(op: O) -> Result<O::Output>
where
    K: Narrow,
    O: AsyncOperation,
    O::Output: Default,
{
    discard::<_, K>(attempt_async(op).await, Default::default)
}

/// Like [`catch_ignore_kind_async`], returning `default` for a discarded failure.
pub async fn catch_ignore_kind_async_or<K, O>(op: O, default: O::Output) -> Result<O::Output>
where
    K: Narrow,
    O: AsyncOperation,
{
    discard::<_, K>(attempt_async(op).await, move || default)
}

// ============================================================
// Finally
// ============================================================

/// Await `op`, then run `cleanup` exactly once.
pub async fn finally_async<O, C, R>(op: O, cleanup: C) -> Result<O::Output>
where
    O: AsyncOperation,
    C: FnOnce() -> R,
    R: Completion,
{
    let outcome = attempt_async(op).await;
    settle(outcome, cleanup().into_result())
}

/// Await `op`, then await `cleanup` exactly once.
pub async fn finally_await<O, C, Fut>(op: O, cleanup: C) -> Result<O::Output>
where
    O: AsyncOperation,
    C: FnOnce() -> Fut,
    Fut: Future,
    Fut::Output: Completion,
{
    let outcome = attempt_async(op).await;
    let cleaned = cleanup().await.into_result();
    settle(outcome, cleaned)
}

// ============================================================
// Catch finally
// ============================================================

/// Await `op`, call `handler` on any failure, then run `cleanup`.
///
/// Handler and cleanup are blocking; see [`catch_finally_await`] for awaited ones.
pub async fn catch_finally_async<O, H, R, C, S>(op: O, handler: H, cleanup: C) -> Result<O::Output>
where
    O: AsyncOperation,
    O::Output: Default,
    H: FnOnce(Failure) -> R,
    R: Completion,
    C: FnOnce() -> S,
    S: Completion,
{
    let outcome = recover(attempt_async(op).await, handler, Default::default);
    settle(outcome, cleanup().into_result())
}

/// Like [`catch_finally_async`], returning `default` after a handled failure.
pub async fn catch_finally_async_or<O, H, R, C, S>(
    op: O,
    handler: H,
    cleanup: C,
    default: O::Output,
) -> Result<O::Output>
where
    O: AsyncOperation,
    H: FnOnce(Failure) -> R,
    R: Completion,
    C: FnOnce() -> S,
    S: Completion,
{
    let outcome = recover(attempt_async(op).await, handler, move || default);
    settle(outcome, cleanup().into_result())
}

/// Await `op`, call `handler` for failures that narrow to `K`, then run `cleanup`.
///
/// Cleanup runs for unmatched failures too, before they propagate.
pub async fn catch_finally_kind_async<O, K, H, R, C, S>(op: O, handler: H, cleanup: C) -> Result<O::Output>
where
    O: AsyncOperation,
    O::Output: Default,
    K: Narrow,
    H: FnOnce(K) -> R,
    R: Completion,
    C: FnOnce() -> S,
    S: Completion,
{
    let outcome = recover(attempt_async(op).await, handler, Default::default);
    settle(outcome, cleanup().into_result())
}

/// Like [`catch_finally_kind_async`], returning `default` after a handled failure.
pub async fn catch_finally_kind_async_or<O, K, H, R, C, S>(
    op: O,
    handler: H,
    cleanup: C,
    default: O::Output,
) -> Result<O::Output>
where
    O: AsyncOperation,
    K: Narrow,
    H: FnOnce(K) -> R,
    R: Completion,
    C: FnOnce() -> S,
    S: Completion,
{
    let outcome = recover(attempt_async(op).await, handler, move || default);
    settle(outcome, cleanup().into_result())
}

/// Await the operation, await the handler on failure, then await cleanup.
pub async fn catch_finally_await<O, H, HFut, C, CFut>(op: O, handler: H, cleanup: C) -> Result<O::Output>
where
    O: AsyncOperation,
    O::Output: Default,
    H: FnOnce(Failure) -> HFut,
    HFut: Future,
    HFut::Output: Completion,
    C: FnOnce() -> CFut,
    CFut: Future,
    CFut::Output: Completion,
{
    let outcome = recover_async(attempt_async(op).await, handler, Default::default).await;
    let cleaned = cleanup().await.into_result();
    settle(outcome, cleaned)
}

/// Like [`catch_finally_await`], returning `default` after a handled failure.
pub async fn catch_finally_await_or<O, H, HFut, C, CFut>(
    op: O,
    handler: H,
    cleanup: C,
    default: O::Output,
) -> Result<O::Output>
where
    O: AsyncOperation,
    H: FnOnce(Failure) -> HFut,
    HFut: Future,
    HFut::Output: Completion,
    C: FnOnce() -> CFut,
    CFut: Future,
    CFut::Output: Completion,
{
    let outcome = recover_async(attempt_async(op).await, handler, move || default).await;
    let cleaned = cleanup().await.into_result();
    settle(outcome, cleaned)
}

/// Typed [`catch_finally_await`]: the handler only sees failures that narrow to `K`.
///
/// Cleanup is awaited whether or not the handler ran.
pub async fn catch_finally_kind_await<O, K, H, HFut, C, CFut>(op: O, handler: H, cleanup: C) -> Result<O::Output>
where
    O: AsyncOperation,
    O::Output: Default,
    K: Narrow,
    H: FnOnce(K) -> HFut,
    HFut: Future,
    HFut::Output: Completion,
    C: FnOnce() -> CFut,
    CFut: Future,
    CFut::Output: Completion,
{
    let outcome = recover_async(attempt_async(op).await, handler, Default::default).await;
    let cleaned = cleanup().await.into_result();
    settle(outcome, cleaned)
}

/// Like [`catch_finally_kind_await`], returning `default` after a handled failure.
pub async fn catch_finally_kind_await_or<O, K, H, HFut, C, CFut>(
    op: O,
    handler: H,
    cleanup: C,
    default: O::Output,
) -> Result<O::Output>
where
    O: AsyncOperation,
    K: Narrow,
    H: FnOnce(K) -> HFut,
    HFut: Future,
    HFut::Output: Completion,
    C: FnOnce() -> CFut,
    CFut: Future,
    CFut::Output: Completion,
{
    let outcome = recover_async(attempt_async(op).await, handler, move || default).await;
    let cleaned = cleanup().await.into_result();
    settle(outcome, cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::io;

    #[tokio::test]
    async fn test_recover_async_awaits_handler() {
        let log = RefCell::new(Vec::new());
        let log = &log;
        let result: Result<i32> = recover_async(
            Err(Failure::msg("boom")),
            |_: Failure| async move {
                tokio::task::yield_now().await;
                log.borrow_mut().push("handled");
            },
            || 9,
        )
        .await;
        assert_eq!(result.unwrap(), 9);
        assert_eq!(*log.borrow(), vec!["handled"]);
    }

    #[tokio::test]
    async fn test_recover_async_unmatched_propagates() {
        let failure = Failure::msg("not io");
        let id = failure.id();
        let result: Result<i32> = recover_async(Err(failure), |_: io::Error| async {}, || 9).await;
        assert_eq!(result.unwrap_err().id(), id);
    }
}
