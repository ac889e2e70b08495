//! The unit of work a combinator protects.

use core::future::Future;

use crate::{Failure, Result};

/// A blocking operation: any `FnOnce() -> Result<T, E>` where `E: Into<Failure>`.
pub trait Operation {
    type Output;

    /// Run the operation, converting its error into a [`Failure`].
    fn attempt(self) -> Result<Self::Output>;
}

impl<F, T, E> Operation for F
where
    F: FnOnce() -> core::result::Result<T, E>,
    E: Into<Failure>,
{
    type Output = T;

    #[inline]
    fn attempt(self) -> Result<T> {
        self().map_err(Into::into)
    }
}

/// A suspending operation: any `FnOnce() -> Fut` where `Fut` resolves to
/// `Result<T, E>` and `E: Into<Failure>`.
///
/// The future is created by [`start`](Self::start) and awaited by the
/// combinator; the error conversion happens after it resolves.
pub trait AsyncOperation {
    type Output;
    type Error: Into<Failure>;
    type Future: Future<Output = core::result::Result<Self::Output, Self::Error>>;

    /// Create the future without polling it.
    fn start(self) -> Self::Future;
}

impl<F, Fut, T, E> AsyncOperation for F
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = core::result::Result<T, E>>,
    E: Into<Failure>,
{
    type Output = T;
    type Error = E;
    type Future = Fut;

    #[inline]
    fn start(self) -> Fut {
        self()
    }
}

/// Start `op` and await its outcome.
#[inline]
pub(crate) async fn attempt_async<O: AsyncOperation>(op: O) -> Result<O::Output> {
    op.start().await.map_err(Into::into)
}
