//! The `attempt!` macro - combinators written as try/catch/finally blocks.
//!
//! Each sync form expands to exactly one combinator call. The `try` block
//! becomes the operation: its value is the success value and `?` converts any
//! error into a `Failure`. `return` inside a block returns from that block,
//! not from the enclosing function.
//!
//! Async forms expand to a single `async` block running the same stages as the
//! matching `_await` combinator. Every stage is a plain `async { }` block, so
//! like the sync closures it borrows locals instead of moving copies of them:
//! `closed = true` in a `finally` block updates the caller's `closed`.

/// Try/catch/finally as an expression.
///
/// # Forms
///
/// | Form | Expands to |
/// |------|------------|
/// | `try { } catch e { }` | [`catch`](crate::catch) |
/// | `try { } catch Type(e) { }` | [`catch_kind`](crate::catch_kind) |
/// | `try { } finally { }` | [`finally`](crate::finally) |
/// | `try { } catch e { } finally { }` | [`catch_finally`](crate::catch_finally) |
/// | `try { } catch Type(e) { } finally { }` | [`catch_finally_kind`](crate::catch_finally_kind) |
/// | `try { } ignore` | [`catch_ignore`](crate::catch_ignore) |
/// | `try { } ignore Type` | [`catch_ignore_kind`](crate::catch_ignore_kind) |
/// | `async try { } ...` | a future running the `_await` counterpart's stages |
///
/// In the async forms every block may `.await`. The future borrows from the
/// enclosing scope, so await it there.
///
/// # Examples
///
/// ```
/// use catch_this::{attempt, Result};
/// use std::num::ParseIntError;
///
/// fn parse(input: &str) -> Result<i32> {
///     attempt! {
///         try { input.trim().parse::<i32>()? }
///         catch ParseIntError(e) { eprintln!("bad input: {e}") }
///     }
/// }
///
/// assert_eq!(parse(" 42 ").unwrap(), 42);
/// assert_eq!(parse("x").unwrap(), 0);
/// ```
///
/// ```
/// use catch_this::attempt;
///
/// let mut closed = false;
/// let value: u8 = attempt! { try { "x".parse::<u8>()? } ignore };
/// let _ = attempt! { try { Err::<(), _>(std::fmt::Error)? } finally { closed = true } };
/// assert_eq!(value, 0);
/// assert!(closed);
/// ```
#[macro_export]
macro_rules! attempt {
    // ========================================
    // Async forms
    // ========================================

    (async try { $($body:tt)* } catch $($kind:ident)::+ ($e:pat_param) { $($handler:tt)* } finally { $($cleanup:tt)* }) => {
        async {
            let __outcome = $crate::__async_try_block!($($body)*).await;
            let __outcome = $crate::__async_recover!(__outcome, $($kind)::+, $e, { $($handler)* });
            $crate::__async_settle!(__outcome, { $($cleanup)* })
        }
    };

    (async try { $($body:tt)* } catch $e:tt { $($handler:tt)* } finally { $($cleanup:tt)* }) => {
        async {
            let __outcome = $crate::__async_try_block!($($body)*).await;
            let __outcome = $crate::__async_recover!(__outcome, $crate::Failure, $e, { $($handler)* });
            $crate::__async_settle!(__outcome, { $($cleanup)* })
        }
    };

    (async try { $($body:tt)* } catch $($kind:ident)::+ ($e:pat_param) { $($handler:tt)* }) => {
        async {
            let __outcome = $crate::__async_try_block!($($body)*).await;
            $crate::__async_recover!(__outcome, $($kind)::+, $e, { $($handler)* })
        }
    };

    (async try { $($body:tt)* } catch $e:tt { $($handler:tt)* }) => {
        async {
            let __outcome = $crate::__async_try_block!($($body)*).await;
            $crate::__async_recover!(__outcome, $crate::Failure, $e, { $($handler)* })
        }
    };

    (async try { $($body:tt)* } finally { $($cleanup:tt)* }) => {
        async {
            let __outcome = $crate::__async_try_block!($($body)*).await;
            $crate::__async_settle!(__outcome, { $($cleanup)* })
        }
    };

    (async try { $($body:tt)* } ignore $($kind:ident)::+) => {
        async {
            match $crate::__async_try_block!($($body)*).await {
                ::core::result::Result::Ok(__value) => ::core::result::Result::Ok(__value),
                ::core::result::Result::Err(__failure) => <$($kind)::+ as $crate::Narrow>::narrow(__failure)
                    .map(|_| ::core::default::Default::default()),
            }
        }
    };

    (async try { $($body:tt)* } ignore) => {
        async { $crate::__async_try_block!($($body)*).await.unwrap_or_default() }
    };

    // ========================================
    // Sync forms
    // ========================================

    (try { $($body:tt)* } catch $($kind:ident)::+ ($e:pat_param) { $($handler:tt)* } finally { $($cleanup:tt)* }) => {
        $crate::catch_finally_kind(
            $crate::__try_block!($($body)*),
            |$e: $($kind)::+| { $($handler)* },
            || { $($cleanup)* },
        )
    };

    (try { $($body:tt)* } catch $e:tt { $($handler:tt)* } finally { $($cleanup:tt)* }) => {
        $crate::catch_finally(
            $crate::__try_block!($($body)*),
            |$e: $crate::Failure| { $($handler)* },
            || { $($cleanup)* },
        )
    };

    (try { $($body:tt)* } catch $($kind:ident)::+ ($e:pat_param) { $($handler:tt)* }) => {
        $crate::catch_kind(
            $crate::__try_block!($($body)*),
            |$e: $($kind)::+| { $($handler)* },
        )
    };

    (try { $($body:tt)* } catch $e:tt { $($handler:tt)* }) => {
        $crate::catch(
            $crate::__try_block!($($body)*),
            |$e: $crate::Failure| { $($handler)* },
        )
    };

    (try { $($body:tt)* } finally { $($cleanup:tt)* }) => {
        $crate::finally(
            $crate::__try_block!($($body)*),
            || { $($cleanup)* },
        )
    };

    (try { $($body:tt)* } ignore $($kind:ident)::+) => {
        $crate::catch_ignore_kind::<$($kind)::+, _>($crate::__try_block!($($body)*))
    };

    (try { $($body:tt)* } ignore) => {
        $crate::catch_ignore($crate::__try_block!($($body)*))
    };
}
