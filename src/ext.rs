//! Extension traits for method-style combinators.

use core::future::Future;

use crate::narrow::{Completion, Narrow};
use crate::operation::{AsyncOperation, Operation};
use crate::{async_impl, sync, Failure, Result};

/// Method forms of the blocking combinators, available on every closure
/// `FnOnce() -> Result<T, E>`.
///
/// ```
/// use catch_this::OperationExt;
///
/// let mut cleaned = false;
/// let value = (|| "12".parse::<u8>()).finally(|| cleaned = true).unwrap();
/// assert_eq!(value, 12);
/// assert!(cleaned);
/// ```
pub trait OperationExt: Operation + Sized {
    /// See [`catch`](crate::catch).
    fn catch<H, R>(self, handler: H) -> Result<Self::Output>
    where
        Self::Output: Default,
        H: FnOnce(Failure) -> R,
        R: Completion;

    /// See [`catch_or`](crate::catch_or).
    fn catch_or<H, R>(self, handler: H, default: Self::Output) -> Result<Self::Output>
    where
        H: FnOnce(Failure) -> R,
        R: Completion;

    /// See [`catch_kind`](crate::catch_kind).
    fn catch_kind<K, H, R>(self, handler: H) -> Result<Self::Output>
    where
        Self::Output: Default,
        K: Narrow,
        H: FnOnce(K) -> R,
        R: Completion;

    /// See [`catch_ignore`](crate::catch_ignore).
    fn catch_ignore(self) -> Self::Output
    where
        Self::Output: Default;

    /// See [`catch_ignore_or`](crate::catch_ignore_or).
    fn catch_ignore_or(self, default: Self::Output) -> Self::Output;

    /// See [`finally`](crate::finally).
    fn finally<C, R>(self, cleanup: C) -> Result<Self::Output>
    where
        C: FnOnce() -> R,
        R: Completion;

    /// See [`catch_finally`](crate::catch_finally).
    fn catch_finally<H, R, C, S>(self, handler: H, cleanup: C) -> Result<Self::Output>
    where
        Self::Output: Default,
        H: FnOnce(Failure) -> R,
        R: Completion,
        C: FnOnce() -> S,
        S: Completion;
}

impl<O: Operation> OperationExt for O {
    #[inline]
    fn catch<H, R>(self, handler: H) -> Result<O::Output>
    where
        O::Output: Default,
        H: FnOnce(Failure) -> R,
        R: Completion,
    {
        sync::catch(self, handler)
    }

    #[inline]
    fn catch_or<H, R>(self, handler: H, default: O::Output) -> Result<O::Output>
    where
        H: FnOnce(Failure) -> R,
        R: Completion,
    {
        sync::catch_or(self, handler, default)
    }

    #[inline]
    fn catch_kind<K, H, R>(self, handler: H) -> Result<O::Output>
    where
        O::Output: Default,
        K: Narrow,
        H: FnOnce(K) -> R,
        R: Completion,
    {
        sync::catch_kind(self, handler)
    }

    #[inline]
    fn catch_ignore(self) -> O::Output
    where
        O::Output: Default,
    {
        sync::catch_ignore(self)
    }

    #[inline]
    fn catch_ignore_or(self, default: O::Output) -> O::Output {
        sync::catch_ignore_or(self, default)
    }

    #[inline]
    fn finally<C, R>(self, cleanup: C) -> Result<O::Output>
    where
        C: FnOnce() -> R,
        R: Completion,
    {
        sync::finally(self, cleanup)
    }

    #[inline]
    fn catch_finally<H, R, C, S>(self, handler: H, cleanup: C) -> Result<O::Output>
    where
        O::Output: Default,
        H: FnOnce(Failure) -> R,
        R: Completion,
        C: FnOnce() -> S,
        S: Completion,
    {
        sync::catch_finally(self, handler, cleanup)
    }
}

/// Method forms of the suspending combinators, available on every closure
/// `FnOnce() -> impl Future<Output = Result<T, E>>`.
///
/// Methods return futures; nothing runs until they are awaited.
pub trait AsyncOperationExt: AsyncOperation + Sized {
    /// See [`catch_async`](crate::catch_async).
    fn catch_async<H, R>(self, handler: H) -> impl Future<Output = Result<Self::Output>>
    where
        Self::Output: Default,
        H: FnOnce(Failure) -> R,
        R: Completion;

    /// See [`catch_async_or`](crate::catch_async_or).
    fn catch_async_or<H, R>(self, handler: H, default: Self::Output) -> impl Future<Output = Result<Self::Output>>
    where
        H: FnOnce(Failure) -> R,
        R: Completion;

    /// See [`catch_kind_async`](crate::catch_kind_async).
    fn catch_kind_async<K, H, R>(self, handler: H) -> impl Future<Output = Result<Self::Output>>
    where
        Self::Output: Default,
        K: Narrow,
        H: FnOnce(K) -> R,
        R: Completion;

    /// See [`catch_await`](crate::catch_await).
    fn catch_await<H, Fut>(self, handler: H) -> impl Future<Output = Result<Self::Output>>
    where
        Self::Output: Default,
        H: FnOnce(Failure) -> Fut,
        Fut: Future,
        Fut::Output: Completion;

    /// See [`catch_ignore_async`](crate::catch_ignore_async).
    fn catch_ignore_async(self) -> impl Future<Output = Self::Output>
    where
        Self::Output: Default;

    /// See [`catch_ignore_async_or`](crate::catch_ignore_async_or).
    fn catch_ignore_async_or(self, default: Self::Output) -> impl Future<Output = Self::Output>;

    /// See [`finally_async`](crate::finally_async).
    fn finally_async<C, R>(self, cleanup: C) -> impl Future<Output = Result<Self::Output>>
    where
        C: FnOnce() -> R,
        R: Completion;

    /// See [`finally_await`](crate::finally_await).
    fn finally_await<C, Fut>(self, cleanup: C) -> impl Future<Output = Result<Self::Output>>
    where
        C: FnOnce() -> Fut,
        Fut: Future,
        Fut::Output: Completion;

    /// See [`catch_finally_async`](crate::catch_finally_async).
    fn catch_finally_async<H, R, C, S>(self, handler: H, cleanup: C) -> impl Future<Output = Result<Self::Output>>
    where
        Self::Output: Default,
        H: FnOnce(Failure) -> R,
        R: Completion,
        C: FnOnce() -> S,
        S: Completion;

    /// See [`catch_finally_await`](crate::catch_finally_await).
    fn catch_finally_await<H, HFut, C, CFut>(
        self,
        handler: H,
        cleanup: C,
    ) -> impl Future<Output = Result<Self::Output>>
    where
        Self::Output: Default,
        H: FnOnce(Failure) -> HFut,
        HFut: Future,
        HFut::Output: Completion,
        C: FnOnce() -> CFut,
        CFut: Future,
        CFut::Output: Completion;
}

impl<O: AsyncOperation> AsyncOperationExt for O {
    #[inline]
    fn catch_async<H, R>(self, handler: H) -> impl Future<Output = Result<O::Output>>
    where
        O::Output: Default,
        H: FnOnce(Failure) -> R,
        R: Completion,
    {
        async_impl::catch_async(self, handler)
    }

    #[inline]
    fn catch_async_or<H, R>(self, handler: H, default: O::Output) -> impl Future<Output = Result<O::Output>>
    where
        H: FnOnce(Failure) -> R,
        R: Completion,
    {
        async_impl::catch_async_or(self, handler, default)
    }

    #[inline]
    fn catch_kind_async<K, H, R>(self, handler: H) -> impl Future<Output = Result<O::Output>>
    where
        O::Output: Default,
        K: Narrow,
        H: FnOnce(K) -> R,
        R: Completion,
    {
        async_impl::catch_kind_async(self, handler)
    }

    #[inline]
    fn catch_await<H, Fut>(self, handler: H) -> impl Future<Output = Result<O::Output>>
    where
        O::Output: Default,
        H: FnOnce(Failure) -> Fut,
        Fut: Future,
        Fut::Output: Completion,
    {
        async_impl::catch_await(self, handler)
    }

    #[inline]
    fn catch_ignore_async(self) -> impl Future<Output = O::Output>
    where
        O::Output: Default,
    {
        async_impl::catch_ignore_async(self)
    }

    #[inline]
    fn catch_ignore_async_or(self, default: O::Output) -> impl Future<Output = O::Output> {
        async_impl::catch_ignore_async_or(self, default)
    }

    #[inline]
    fn finally_async<C, R>(self, cleanup: C) -> impl Future<Output = Result<O::Output>>
    where
        C: FnOnce() -> R,
        R: Completion,
    {
        async_impl::finally_async(self, cleanup)
    }

    #[inline]
    fn finally_await<C, Fut>(self, cleanup: C) -> impl Future<Output = Result<O::Output>>
    where
        C: FnOnce() -> Fut,
        Fut: Future,
        Fut::Output: Completion,
    {
        async_impl::finally_await(self, cleanup)
    }

    #[inline]
    fn catch_finally_async<H, R, C, S>(self, handler: H, cleanup: C) -> impl Future<Output = Result<O::Output>>
    where
        O::Output: Default,
        H: FnOnce(Failure) -> R,
        R: Completion,
        C: FnOnce() -> S,
        S: Completion,
    {
        async_impl::catch_finally_async(self, handler, cleanup)
    }

    #[inline]
    fn catch_finally_await<H, HFut, C, CFut>(
        self,
        handler: H,
        cleanup: C,
    ) -> impl Future<Output = Result<O::Output>>
    where
        O::Output: Default,
        H: FnOnce(Failure) -> HFut,
        HFut: Future,
        HFut::Output: Completion,
        C: FnOnce() -> CFut,
        CFut: Future,
        CFut::Output: Completion,
    {
        async_impl::catch_finally_await(self, handler, cleanup)
    }
}
