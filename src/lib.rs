//! catch-this - try/catch/finally as composable functions
//!
//! # Overview
//!
//! `catch-this` turns "run this, and if it fails run that, and always clean
//! up" into a single expression. Operations are closures returning
//! `Result<T, E>`; any `E: Error` is boxed into a [`Failure`] that keeps its
//! concrete type for typed catches and is never re-wrapped on the way out.
//!
//! # Quick Start
//!
//! ```
//! use catch_this::{catch_finally, Result};
//!
//! fn load(path: &str) -> Result<String> {
//!     catch_finally(
//!         || std::fs::read_to_string(path),
//!         |e| eprintln!("could not read {path}: {e}"),
//!         || println!("done with {path}"),
//!     )
//! }
//!
//! assert_eq!(load("/definitely/not/here").unwrap(), "");
//! ```
//!
//! # Combinators
//!
//! | Function | On failure | Cleanup |
//! |----------|------------|---------|
//! | [`catch`] / [`catch_or`] | handler, then default | - |
//! | [`catch_kind`] / [`catch_kind_or`] | handler if it narrows, else propagate | - |
//! | [`catch_ignore`] / [`catch_ignore_or`] | default | - |
//! | [`catch_ignore_kind`] / [`catch_ignore_kind_or`] | default if it narrows, else propagate | - |
//! | [`finally`] | propagate | always |
//! | [`catch_finally`] / [`catch_finally_or`] | handler, then default | always |
//! | [`catch_finally_kind`] / [`catch_finally_kind_or`] | handler if it narrows, else propagate | always |
//!
//! ## Async
//!
//! | Suffix | Operation | Handler / cleanup |
//! |--------|-----------|-------------------|
//! | `_async` | awaited | blocking |
//! | `_await` | awaited | awaited |
//!
//! ## Failures from callbacks
//!
//! Handlers and cleanups return `()` or `Result<(), E>` (see [`Completion`]).
//! An `Err` from a handler propagates; an `Err` from a cleanup replaces
//! whatever the operation and handler produced.
//!
//! ## Typed filters
//!
//! A handler's parameter type picks the failure kind it catches. Any
//! `Error + Send + Sync + 'static` type works; families of kinds are modeled by
//! implementing [`Narrow`] for an enum.
//!
//! # Method and macro forms
//!
//! - [`OperationExt`] / [`AsyncOperationExt`]: `(|| op()).catch(h)`
//! - [`attempt!`]: `attempt! { try { .. } catch e { .. } finally { .. } }`

// ============================================================
// Modules
// ============================================================

mod async_impl;
mod ext;
mod failure;
mod macros;
mod narrow;
mod operation;
mod sync;

// ============================================================
// Re-exports
// ============================================================

pub use async_impl::{
    catch_async, catch_async_or, catch_await, catch_await_or, catch_finally_async, catch_finally_async_or,
    catch_finally_await, catch_finally_await_or, catch_finally_kind_async, catch_finally_kind_async_or,
    catch_finally_kind_await, catch_finally_kind_await_or, catch_ignore_async, catch_ignore_async_or,
    catch_ignore_kind_async, catch_ignore_kind_async_or, catch_kind_async, catch_kind_async_or,
    catch_kind_await, catch_kind_await_or, finally_async, finally_await,
};
pub use ext::{AsyncOperationExt, OperationExt};
pub use failure::{Chain, Failure, FailureId, Message, Report};
pub use narrow::{Completion, Narrow};
pub use operation::{AsyncOperation, Operation};
pub use sync::{
    catch, catch_finally, catch_finally_kind, catch_finally_kind_or, catch_finally_or, catch_ignore,
    catch_ignore_kind, catch_ignore_kind_or, catch_ignore_or, catch_kind, catch_kind_or, catch_or, finally,
};

// ============================================================
// Type aliases
// ============================================================

/// Result type alias.
///
/// Every combinator that can surface a failure returns `Result<T>`.
pub type Result<T, E = Failure> = core::result::Result<T, E>;

// ============================================================
// Try block macros
// ============================================================

/// Internal macro turning a block into a blocking operation.
/// Block value is the success value - use `?` to propagate errors.
#[doc(hidden)]
#[macro_export]
macro_rules! __try_block {
    ($($body:tt)*) => {
        || -> ::core::result::Result<_, $crate::Failure> {
            ::core::result::Result::Ok({ $($body)* })
        }
    };
}

/// Internal macro turning a block into the future of its outcome.
/// The future borrows from the enclosing scope instead of moving captures.
#[doc(hidden)]
#[macro_export]
macro_rules! __async_try_block {
    ($($body:tt)*) => {
        async {
            let __outcome: ::core::result::Result<_, $crate::Failure> =
                ::core::result::Result::Ok({ $($body)* });
            __outcome
        }
    };
}

/// Internal macro running an awaited handler block for a narrowed failure.
#[doc(hidden)]
#[macro_export]
macro_rules! __async_recover {
    ($outcome:expr, $kind:ty, $e:tt, { $($handler:tt)* }) => {
        match $outcome {
            ::core::result::Result::Ok(__value) => ::core::result::Result::Ok(__value),
            ::core::result::Result::Err(__failure) => match <$kind as $crate::Narrow>::narrow(__failure) {
                ::core::result::Result::Ok($e) => {
                    match $crate::Completion::into_result(async { $($handler)* }.await) {
                        ::core::result::Result::Ok(()) => {
                            ::core::result::Result::Ok(::core::default::Default::default())
                        }
                        ::core::result::Result::Err(__failure) => ::core::result::Result::Err(__failure),
                    }
                }
                ::core::result::Result::Err(__failure) => ::core::result::Result::Err(__failure),
            },
        }
    };
}

/// Internal macro applying an awaited cleanup block on top of an outcome.
#[doc(hidden)]
#[macro_export]
macro_rules! __async_settle {
    ($outcome:expr, { $($cleanup:tt)* }) => {{
        let __outcome = $outcome;
        match $crate::Completion::into_result(async { $($cleanup)* }.await) {
            ::core::result::Result::Ok(()) => __outcome,
            ::core::result::Result::Err(__failure) => ::core::result::Result::Err(__failure),
        }
    }};
}
