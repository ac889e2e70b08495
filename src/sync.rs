//! Blocking combinators.
//!
//! Every family is a thin entry point over two shared steps:
//! [`recover`] routes a failed outcome through a handler, [`settle`] applies
//! a cleanup's outcome on top of whatever the operation produced.

use crate::narrow::{Completion, Narrow};
use crate::operation::Operation;
use crate::{Failure, Result};

// ============================================================
// Shared steps
// ============================================================

/// Route a failure that narrows to `K` through `handler`, then fall back.
///
/// A failure that does not narrow is returned unchanged.
#[inline]
pub(crate) fn recover<T, K, H, R>(outcome: Result<T>, handler: H, fallback: impl FnOnce() -> T) -> Result<T>
where
    K: Narrow,
    H: FnOnce(K) -> R,
    R: Completion,
{
    match outcome {
        Ok(value) => Ok(value),
        Err(failure) => {
            let caught = K::narrow(failure)?;
            handler(caught).into_result()?;
            Ok(fallback())
        }
    }
}

/// Swallow a failure that narrows to `K`.
#[inline]
pub(crate) fn discard<T, K: Narrow>(outcome: Result<T>, fallback: impl FnOnce() -> T) -> Result<T> {
    match outcome {
        Ok(value) => Ok(value),
        Err(failure) => K::narrow(failure).map(|_| fallback()),
    }
}

/// Apply a cleanup outcome. A cleanup failure masks the operation's outcome.
#[inline]
pub(crate) fn settle<T>(outcome: Result<T>, cleanup: Result<()>) -> Result<T> {
    cleanup?;
    outcome
}

// ============================================================
// Catch
// ============================================================

/// Run `op`; on any failure call `handler` with it and return `T::default()`.
///
/// ```
/// use catch_this::{catch, Failure};
///
/// let mut seen = None;
/// let value: i32 = catch(|| "x".parse::<i32>(), |e: Failure| seen = Some(e.to_string())).unwrap();
/// assert_eq!(value, 0);
/// assert!(seen.is_some());
/// ```
#[inline]
pub fn catch<O, H, R>(op: O, handler: H) -> Result<O::Output>
where
    O: Operation,
    O::Output: Default,
    H: FnOnce(Failure) -> R,
    R: Completion,
{
    recover(op.attempt(), handler, Default::default)
}

/// Like [`catch`], returning `default` after a handled failure.
#[inline]
pub fn catch_or<O, H, R>(op: O, handler: H, default: O::Output) -> Result<O::Output>
where
    O: Operation,
    H: FnOnce(Failure) -> R,
    R: Completion,
{
    recover(op.attempt(), handler, move || default)
}

/// Run `op`; call `handler` only for failures that narrow to `K`.
///
/// `K` is taken from the handler's parameter type. Any other failure is
/// returned as `Err`, the same instance the operation produced.
///
/// ```
/// use catch_this::catch_kind;
/// use std::num::ParseIntError;
///
/// let value = catch_kind(|| "7".parse::<u8>(), |_: ParseIntError| ()).unwrap();
/// assert_eq!(value, 7);
/// ```
#[inline]
pub fn catch_kind<O, K, H, R>(op: O, handler: H) -> Result<O::Output>
where
    O: Operation,
    O::Output: Default,
    K: Narrow,
    H: FnOnce(K) -> R,
    R: Completion,
{
    recover(op.attempt(), handler, Default::default)
}

/// Like [`catch_kind`], returning `default` after a handled failure.
#[inline]
pub fn catch_kind_or<O, K, H, R>(op: O, handler: H, default: O::Output) -> Result<O::Output>
where
    O: Operation,
    K: Narrow,
    H: FnOnce(K) -> R,
    R: Completion,
{
    recover(op.attempt(), handler, move || default)
}

// ============================================================
// Catch ignore
// ============================================================

/// Run `op` and discard any failure, returning `T::default()` instead.
#[inline]
pub fn catch_ignore<O>(op: O) -> O::Output
where
    O: Operation,
    O::Output: Default,
{
    op.attempt().unwrap_or_default()
}

/// Like [`catch_ignore`], returning `default` instead of `T::default()`.
#[inline]
pub fn catch_ignore_or<O: Operation>(op: O, default: O::Output) -> O::Output {
    op.attempt().unwrap_or(default)
}

/// Run `op` and discard failures that narrow to `K`; others propagate.
///
/// ```
/// use catch_this::catch_ignore_kind;
/// use std::num::ParseIntError;
///
/// let value = catch_ignore_kind::<ParseIntError, _>(|| "x".parse::<u8>()).unwrap();
/// assert_eq!(value, 0);
/// ```
#[inline]
pub fn catch_ignore_kind<K, O>(op: O) -> Result<O::Output>
where
    K: Narrow,
    O: Operation,
    O::Output: Default,
{
    discard::<_, K>(op.attempt(), Default::default)
}

/// Like [`catch_ignore_kind`], returning `default` for a discarded failure.
#[inline]
pub fn catch_ignore_kind_or<K, O>(op: O, default: O::Output) -> Result<O::Output>
where
    K: Narrow,
    O: Operation,
{
    discard::<_, K>(op.attempt(), move || default)
}

// ============================================================
// Finally
// ============================================================

/// Run `op`, then `cleanup` exactly once, whatever `op` returned.
///
/// The operation's failure propagates after cleanup; a cleanup failure
/// replaces it.
#[inline]
pub fn finally<O, C, R>(op: O, cleanup: C) -> Result<O::Output>
where
    O: Operation,
    C: FnOnce() -> R,
    R: Completion,
{
    let outcome = op.attempt();
    settle(outcome, cleanup().into_result())
}

// ============================================================
// Catch finally
// ============================================================

/// [`catch`] followed by `cleanup`: operation, handler on failure, cleanup.
#[inline]
pub fn catch_finally<O, H, R, C, S>(op: O, handler: H, cleanup: C) -> Result<O::Output>
where
    O: Operation,
    O::Output: Default,
    H: FnOnce(Failure) -> R,
    R: Completion,
    C: FnOnce() -> S,
    S: Completion,
{
    let outcome = recover(op.attempt(), handler, Default::default);
    settle(outcome, cleanup().into_result())
}

/// Like [`catch_finally`], returning `default` after a handled failure.
///
/// A cleanup failure still wins over the default.
#[inline]
pub fn catch_finally_or<O, H, R, C, S>(op: O, handler: H, cleanup: C, default: O::Output) -> Result<O::Output>
where
    O: Operation,
    H: FnOnce(Failure) -> R,
    R: Completion,
    C: FnOnce() -> S,
    S: Completion,
{
    let outcome = recover(op.attempt(), handler, move || default);
    settle(outcome, cleanup().into_result())
}

/// [`catch_kind`] followed by `cleanup`.
///
/// Cleanup also runs when the failure doesn't narrow to `K`; that failure
/// then propagates once cleanup is done.
#[inline]
pub fn catch_finally_kind<O, K, H, R, C, S>(op: O, handler: H, cleanup: C) -> Result<O::Output>
where
    O: Operation,
    O::Output: Default,
    K: Narrow,
    H: FnOnce(K) -> R,
    R: Completion,
    C: FnOnce() -> S,
    S: Completion,
{
    let outcome = recover(op.attempt(), handler, Default::default);
    settle(outcome, cleanup().into_result())
}

/// Like [`catch_finally_kind`], returning `default` after a handled failure.
#[inline]
pub fn catch_finally_kind_or<O, K, H, R, C, S>(
    op: O,
    handler: H,
    cleanup: C,
    default: O::Output,
) -> Result<O::Output>
where
    O: Operation,
    K: Narrow,
    H: FnOnce(K) -> R,
    R: Completion,
    C: FnOnce() -> S,
    S: Completion,
{
    let outcome = recover(op.attempt(), handler, move || default);
    settle(outcome, cleanup().into_result())
}
